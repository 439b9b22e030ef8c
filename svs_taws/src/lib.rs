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
#![allow(unused)]

//! terrain awareness and warning core: smoothing of flight samples, trajectory prediction and
//! classification of the predicted trajectory against terrain

use serde::{Serialize,Deserialize};
use svs_dem::TerrainConfig;

pub mod errors;
pub mod sample;
pub mod feed;
pub mod smoother;
pub mod predictor;
pub mod classifier;
pub mod pipeline;
pub mod replay;

pub use errors::{SvsTawsError, Result};
pub use sample::{FlightSample, SmoothedState, PredictionMode, Trajectory, TrajectoryPoint};
pub use smoother::{SampleSmoother, SmootherConfig};
pub use predictor::{TrajectoryPredictor, PredictorConfig};
pub use classifier::{CollisionClassifier, ClassifierConfig, DangerLevel};
pub use pipeline::{TawsPipeline, ProcessResult};

#[derive(Debug,Clone,Default,Serialize,Deserialize)]
#[serde(default)]
pub struct TawsConfig {
    pub smoother: SmootherConfig,
    pub predictor: PredictorConfig,
    pub classifier: ClassifierConfig,
    pub terrain: TerrainConfig,
}

pub fn load_config (path: impl AsRef<std::path::Path>) -> Result<TawsConfig> {
    Ok( svs_common::config::load_config( path)?)
}
