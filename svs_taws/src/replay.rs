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

//! drivers that feed samples into a pipeline, either from a recorded flight or from a live channel

use std::time::Duration;
use tokio::{sync::mpsc, time::{self, MissedTickBehavior}};
use tracing::{debug,info};

use crate::pipeline::{ProcessResult, TawsPipeline};
use crate::sample::FlightSample;

/// default replay update interval
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(1000);

/// process `samples` at a fixed rate (first one immediately), passing each result to `sink`.
/// A zero interval replays as fast as possible. Returns the number of processed samples
pub async fn replay_samples<F> (pipeline: &mut TawsPipeline, samples: &[FlightSample], interval: Duration, mut sink: F) -> usize
    where F: FnMut(&ProcessResult)
{
    info!("replaying {} samples every {:?}", samples.len(), interval);

    let mut timer = if interval.is_zero() { None } else {
        let mut timer = time::interval(interval);
        timer.set_missed_tick_behavior( MissedTickBehavior::Delay);
        Some(timer)
    };

    for sample in samples {
        if let Some(timer) = timer.as_mut() {
            timer.tick().await;
        }
        let res = pipeline.process( sample);
        sink( &res);
    }

    debug!("end of replay data");
    samples.len()
}

/// process samples as they arrive until all senders are dropped
pub async fn run_live_feed<F> (pipeline: &mut TawsPipeline, mut rx: mpsc::Receiver<FlightSample>, mut sink: F) -> usize
    where F: FnMut(&ProcessResult)
{
    let mut n = 0;
    while let Some(sample) = rx.recv().await {
        let res = pipeline.process( &sample);
        sink( &res);
        n += 1;
    }

    info!("live feed closed after {n} samples");
    n
}
