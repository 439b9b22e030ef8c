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

use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use serde::Serialize;
use tracing::{debug,info,warn};
use svs_dem::{TerrainConfig, TerrainHandle, TerrainLocator, TerrainStatus};

use crate::TawsConfig;
use crate::classifier::{CollisionClassifier, DangerLevel};
use crate::predictor::TrajectoryPredictor;
use crate::sample::{FlightSample, PredictionMode, SmoothedState, Trajectory, TrajectoryPoint};
use crate::smoother::SampleSmoother;

/// what we compute for each processed sample
#[derive(Debug,Clone,Serialize)]
pub struct ProcessResult {
    pub state: SmoothedState,
    pub trajectory: Trajectory,
    /// one per trajectory point
    pub dangers: Vec<DangerLevel>,
    pub time_to_collision: Option<f64>,
    pub terrain_degraded: bool,
}

impl ProcessResult {
    /// the highest danger level along the trajectory
    pub fn max_danger (&self) -> DangerLevel {
        self.dangers.iter().copied().max().unwrap_or(DangerLevel::Safe)
    }
}

/// per-aircraft processing chain: smoother -> predictor -> classifier against the shared terrain
pub struct TawsPipeline {
    smoother: SampleSmoother,
    predictor: TrajectoryPredictor,
    classifier: CollisionClassifier,
    terrain_config: TerrainConfig,
    terrain: Arc<TerrainHandle>,
    terrain_degraded: AtomicBool,
}

impl TawsPipeline {
    pub fn new (config: TawsConfig, terrain: Arc<TerrainHandle>) -> Self {
        if terrain.current().is_empty() {
            warn!("no terrain loaded, clearances are relative to sea level");
        }

        TawsPipeline {
            smoother: SampleSmoother::new( &config.smoother),
            predictor: TrajectoryPredictor::new( config.predictor),
            classifier: CollisionClassifier::new( config.classifier),
            terrain_config: config.terrain,
            terrain,
            terrain_degraded: AtomicBool::new(false),
        }
    }

    pub fn terrain (&self) -> &Arc<TerrainHandle> { &self.terrain }

    pub fn smoother (&self) -> &SampleSmoother { &self.smoother }

    pub fn process (&mut self, sample: &FlightSample) -> ProcessResult {
        let state = *self.smoother.smooth( sample);
        let trajectory = self.predictor.predict( self.smoother.history())
            .unwrap_or_else( || Trajectory::single( PredictionMode::Linear,
                                                    TrajectoryPoint::new( state.latitude, state.longitude, state.altitude, 0.0)));

        let grid = self.terrain.current(); // one snapshot per sample
        let dangers = self.classifier.annotate( &trajectory, &grid);
        let time_to_collision = self.classifier.time_to_collision( &trajectory, &grid);
        if let Some(t) = time_to_collision {
            debug!("terrain conflict in {t:.1}s at {:.5},{:.5} alt {:.0}m", state.latitude, state.longitude, state.altitude);
        }

        let terrain_degraded = grid.is_empty() || self.terrain_degraded.load( Ordering::Acquire);
        ProcessResult { state, trajectory, dangers, time_to_collision, terrain_degraded }
    }

    /// (re)load terrain and swap it in. Falls back to the synthetic grid if the source is not usable
    pub async fn load_terrain (&self, locator: &TerrainLocator, source_ref: Option<&str>) -> TerrainStatus {
        let load = svs_dem::load_terrain( locator, source_ref, &self.terrain_config).await;

        let degraded = load.status.is_degraded();
        if degraded {
            warn!("terrain awareness running on synthetic terrain");
        }
        self.terrain.replace( load.grid);
        self.terrain_degraded.store( degraded, Ordering::Release);

        load.status
    }

    pub fn reset (&mut self) {
        info!("resetting flight state");
        self.smoother.reset();
    }

    /// true if we run on synthetic terrain or have no terrain at all
    pub fn is_terrain_degraded (&self) -> bool {
        self.terrain_degraded.load( Ordering::Acquire) || self.terrain.current().is_empty()
    }
}
