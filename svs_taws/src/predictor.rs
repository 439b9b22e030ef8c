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

//! trajectory extrapolation from the smoothed state history.
//!
//! Positions are integrated in ECEF. The body frame velocity is rotated with the DCM of the (smoothed)
//! attitude, using the heading as yaw. With only one state we extrapolate linearly, with two or more we
//! also apply the body acceleration, heading rate and vertical rate observed between the last two states

use serde::{Serialize,Deserialize};
use svs_common::{
    angle::{angle_delta, normalize_360}, attitude::Attitude, cartesian3::{Cartesian3, geodetic_to_ecef},
    cartographic::ecef_to_geodetic, collections::RingDeque
};
use crate::sample::{PredictionMode, SmoothedState, Trajectory, TrajectoryPoint};

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub steps: usize,
    pub horizon_secs: f64,
    /// time between the samples in the history
    pub sample_interval_secs: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        PredictorConfig { steps: 60, horizon_secs: 60.0, sample_interval_secs: 0.5 }
    }
}

#[derive(Debug,Clone)]
pub struct TrajectoryPredictor {
    config: PredictorConfig,
}

impl TrajectoryPredictor {
    pub fn new (config: PredictorConfig) -> Self {
        TrajectoryPredictor { config }
    }

    pub fn config (&self) -> &PredictorConfig { &self.config }

    /// predict from the two most recent history entries. None if the history is empty
    pub fn predict (&self, history: &RingDeque<SmoothedState>) -> Option<Trajectory> {
        let cur = history.nth_back(0)?;
        Some( self.predict_from( history.nth_back(1), cur))
    }

    pub fn predict_from (&self, prev: Option<&SmoothedState>, cur: &SmoothedState) -> Trajectory {
        let steps = self.config.steps.max(1);
        let horizon = self.config.horizon_secs.max(0.0);
        let dt = horizon / steps as f64;

        let mut points = Vec::with_capacity( steps+1);
        points.push( TrajectoryPoint::new( cur.latitude, cur.longitude, cur.altitude, 0.0));

        let interval = self.config.sample_interval_secs;
        let mode = match prev {
            Some(prev) if interval > 0.0 => {
                extrapolate_trend( prev, cur, interval, steps, dt, horizon, &mut points);
                PredictionMode::Trend
            }
            _ => {
                extrapolate_linear( cur, steps, dt, horizon, &mut points);
                PredictionMode::Linear
            }
        };

        Trajectory::from_points( mode, points)
            .unwrap_or_else( || Trajectory::single( mode, TrajectoryPoint::new( cur.latitude, cur.longitude, cur.altitude, 0.0)))
    }
}

#[inline]
fn time_offset (i: usize, steps: usize, dt: f64, horizon: f64) -> f64 {
    if i == steps { horizon } else { dt * i as f64 }
}

fn extrapolate_linear (cur: &SmoothedState, steps: usize, dt: f64, horizon: f64, points: &mut Vec<TrajectoryPoint>) {
    let p0 = geodetic_to_ecef( cur.latitude, cur.longitude, cur.altitude);
    let v = cur.attitude().body_to_ecef( &cur.velocity());

    for i in 1..=steps {
        let t = time_offset( i, steps, dt, horizon);
        let (lat, lon, alt) = ecef_to_geodetic( &(p0 + v * t));
        points.push( TrajectoryPoint::new( lat, lon, alt, t));
    }
}

fn extrapolate_trend (prev: &SmoothedState, cur: &SmoothedState, interval: f64, steps: usize, dt: f64, horizon: f64,
                      points: &mut Vec<TrajectoryPoint>) {
    let accel = (cur.velocity() - prev.velocity()) * (1.0 / interval);
    let vertical_rate = (cur.altitude - prev.altitude) / interval;
    let heading_rate = angle_delta( prev.heading, cur.heading) / interval;

    let mut v = cur.velocity();
    let mut heading = cur.heading;
    let mut alt = cur.altitude;
    let mut p = geodetic_to_ecef( cur.latitude, cur.longitude, cur.altitude);

    for i in 1..=steps {
        v += accel * dt;
        heading = normalize_360( heading + heading_rate * dt);
        let attitude = Attitude::new( cur.roll, cur.pitch, heading);
        p += attitude.body_to_ecef( &v) * dt;
        alt += vertical_rate * dt;

        // altitude comes from the vertical rate integration, re-anchor p to it
        let (lat, lon, _) = ecef_to_geodetic( &p);
        p = geodetic_to_ecef( lat, lon, alt);

        points.push( TrajectoryPoint::new( lat, lon, alt, time_offset( i, steps, dt, horizon)));
    }
}
