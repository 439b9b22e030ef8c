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

//! vertical clearance based collision and danger classification of predicted trajectories

use serde::{Serialize,Deserialize};
use svs_dem::ElevationGrid;
use crate::sample::{Trajectory, TrajectoryPoint};

#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash,Serialize,Deserialize)]
pub enum DangerLevel {
    Safe,
    Warning,
    Critical,
}

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// number of leading trajectory points that are not checked for collision
    pub skip_prefix: usize,
    /// points at or below this altitude are not considered for collision (ground operation)
    pub min_altitude: f64,
    /// clearance at or below which we report a collision
    pub collision_clearance: f64,
    pub critical_clearance: f64,
    pub warning_clearance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            skip_prefix: 5,
            min_altitude: 50.0,
            collision_clearance: 100.0,
            critical_clearance: 100.0,
            warning_clearance: 300.0,
        }
    }
}

#[derive(Debug,Clone)]
pub struct CollisionClassifier {
    config: ClassifierConfig,
}

impl CollisionClassifier {
    pub fn new (config: ClassifierConfig) -> Self {
        CollisionClassifier { config }
    }

    pub fn config (&self) -> &ClassifierConfig { &self.config }

    /// altitude above terrain. Positions outside of the grid have terrain height 0
    #[inline]
    pub fn clearance (grid: &ElevationGrid, lat: f64, lon: f64, alt: f64) -> f64 {
        alt - grid.get_height_at( lat, lon)
    }

    /// time offset of the first trajectory point after the skip prefix that is above the altitude floor
    /// and within collision clearance, None if there is no such point
    pub fn time_to_collision (&self, trajectory: &Trajectory, grid: &ElevationGrid) -> Option<f64> {
        let cfg = &self.config;
        trajectory.iter()
            .skip( cfg.skip_prefix)
            .find( |p| {
                p.altitude > cfg.min_altitude
                    && Self::clearance( grid, p.latitude, p.longitude, p.altitude) <= cfg.collision_clearance
            })
            .map( |p| p.time_offset)
    }

    pub fn danger_level (&self, grid: &ElevationGrid, lat: f64, lon: f64, alt: f64) -> DangerLevel {
        let clearance = Self::clearance( grid, lat, lon, alt);

        if clearance <= self.config.critical_clearance {
            DangerLevel::Critical
        } else if clearance <= self.config.warning_clearance {
            DangerLevel::Warning
        } else {
            DangerLevel::Safe
        }
    }

    /// danger level for each trajectory point
    pub fn annotate (&self, trajectory: &Trajectory, grid: &ElevationGrid) -> Vec<DangerLevel> {
        trajectory.iter().map( |p| self.danger_level( grid, p.latitude, p.longitude, p.altitude)).collect()
    }
}
