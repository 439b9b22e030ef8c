/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use serde::{Serialize,Deserialize};
use svs_common::{angle::{angle_delta, normalize_360}, collections::RingDeque};
use crate::sample::{FlightSample, SmoothedState};

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct SmootherConfig {
    /// smoothing interval N in samples, alpha = 2/(N+1)
    pub interval: usize,
}

impl Default for SmootherConfig {
    fn default() -> Self { SmootherConfig { interval: 5 } }
}

/// exponential moving average over flight samples. Keeps the live estimate plus a
/// trailing history of the last 2N estimates (oldest first)
#[derive(Debug,Clone)]
pub struct SampleSmoother {
    alpha: f64,
    current: Option<SmoothedState>,
    history: RingDeque<SmoothedState>,
}

impl SampleSmoother {
    pub fn new (config: &SmootherConfig) -> Self {
        let n = config.interval.max(1);
        SampleSmoother {
            alpha: 2.0 / (n as f64 + 1.0),
            current: None,
            history: RingDeque::new( 2*n),
        }
    }

    pub fn alpha (&self) -> f64 { self.alpha }

    pub fn smooth (&mut self, sample: &FlightSample) -> &SmoothedState {
        let raw = SmoothedState::from(sample);

        if let Some(s) = self.current.as_mut() {
            let a = self.alpha;
            s.roll += a * (raw.roll - s.roll);
            s.pitch += a * (raw.pitch - s.pitch);
            s.heading = normalize_360( s.heading + a * angle_delta( s.heading, raw.heading));
            s.vx += a * (raw.vx - s.vx);
            s.vy += a * (raw.vy - s.vy);
            s.vz += a * (raw.vz - s.vz);
            s.latitude += a * (raw.latitude - s.latitude);
            s.longitude += a * (raw.longitude - s.longitude);
            s.altitude += a * (raw.altitude - s.altitude);
        }

        let state = self.current.get_or_insert(raw); // first sample seeds the estimate
        self.history.push_to_ringbuffer( *state);
        state
    }

    pub fn current (&self) -> Option<&SmoothedState> { self.current.as_ref() }

    pub fn history (&self) -> &RingDeque<SmoothedState> { &self.history }

    pub fn reset (&mut self) {
        self.current = None;
        self.history.clear();
    }
}
