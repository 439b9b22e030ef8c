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

//! flight sample, smoothed state and trajectory types

use serde::{Serialize,Deserialize};
use svs_common::{angle::normalize_360, attitude::Attitude, cartesian3::Cartesian3};
use crate::errors::{Result, malformed_input};

/// a raw attitude/velocity/position measurement. Angles are in degrees, velocities in m/s (body frame)
/// and altitude in meters. Instances are guaranteed to only contain finite values
#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct FlightSample {
    roll: f64,
    pitch: f64,
    heading: f64,
    vx: f64,
    vy: f64,
    vz: f64,
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

/// number of values in a sample record
pub const SAMPLE_FIELDS: usize = 9;

impl FlightSample {
    pub fn new (roll: f64, pitch: f64, heading: f64, vx: f64, vy: f64, vz: f64,
                latitude: f64, longitude: f64, altitude: f64) -> Result<FlightSample> {
        let vs = [roll, pitch, heading, vx, vy, vz, latitude, longitude, altitude];
        if let Some(i) = vs.iter().position( |v| !v.is_finite()) {
            return Err( malformed_input( format!("non-finite value in field {i}")))
        }

        Ok( FlightSample { roll, pitch, heading: normalize_360(heading), vx, vy, vz, latitude, longitude, altitude } )
    }

    /// values in record order (roll, pitch, heading, vx, vy, vz, latitude, longitude, altitude)
    pub fn from_values (vs: &[f64; SAMPLE_FIELDS]) -> Result<FlightSample> {
        FlightSample::new( vs[0], vs[1], vs[2], vs[3], vs[4], vs[5], vs[6], vs[7], vs[8])
    }

    pub fn roll (&self) -> f64 { self.roll }
    pub fn pitch (&self) -> f64 { self.pitch }
    pub fn heading (&self) -> f64 { self.heading }
    pub fn vx (&self) -> f64 { self.vx }
    pub fn vy (&self) -> f64 { self.vy }
    pub fn vz (&self) -> f64 { self.vz }
    pub fn latitude (&self) -> f64 { self.latitude }
    pub fn longitude (&self) -> f64 { self.longitude }
    pub fn altitude (&self) -> f64 { self.altitude }

    pub fn speed (&self) -> f64 {
        (self.vx*self.vx + self.vy*self.vy + self.vz*self.vz).sqrt()
    }
}

/// running estimate of the smoothed flight state (same fields as [`FlightSample`])
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize)]
pub struct SmoothedState {
    pub roll: f64,
    pub pitch: f64,
    pub heading: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl SmoothedState {
    pub fn attitude (&self) -> Attitude {
        Attitude::new( self.roll, self.pitch, self.heading)
    }

    /// body frame velocity
    pub fn velocity (&self) -> Cartesian3 {
        Cartesian3::new( self.vx, self.vy, self.vz)
    }

    pub fn speed (&self) -> f64 {
        self.velocity().length()
    }
}

impl From<&FlightSample> for SmoothedState {
    fn from (s: &FlightSample) -> Self {
        SmoothedState {
            roll: s.roll, pitch: s.pitch, heading: s.heading,
            vx: s.vx, vy: s.vy, vz: s.vz,
            latitude: s.latitude, longitude: s.longitude, altitude: s.altitude
        }
    }
}

/* #region trajectory *****************************************************************************************/

/// how a trajectory was extrapolated
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum PredictionMode {
    /// constant velocity along the current attitude
    Linear,
    /// velocity, heading and vertical rate trends of the last two states
    Trend,
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize)]
pub struct TrajectoryPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    /// seconds from now
    pub time_offset: f64,
}

impl TrajectoryPoint {
    pub fn new (latitude: f64, longitude: f64, altitude: f64, time_offset: f64) -> Self {
        TrajectoryPoint { latitude, longitude, altitude, time_offset }
    }
}

/// non-empty, time ordered sequence of predicted positions that starts at the current position
#[derive(Debug,Clone,PartialEq,Serialize)]
pub struct Trajectory {
    mode: PredictionMode,
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    /// None if `points` is empty or not ordered by time offset
    pub fn from_points (mode: PredictionMode, points: Vec<TrajectoryPoint>) -> Option<Trajectory> {
        let ordered = points.windows(2).all( |w| w[0].time_offset <= w[1].time_offset);
        if points.is_empty() || !ordered {
            None
        } else {
            Some( Trajectory { mode, points } )
        }
    }

    pub fn single (mode: PredictionMode, point: TrajectoryPoint) -> Trajectory {
        Trajectory { mode, points: vec![point] }
    }

    pub fn mode (&self) -> PredictionMode { self.mode }
    pub fn points (&self) -> &[TrajectoryPoint] { &self.points }
    pub fn len (&self) -> usize { self.points.len() }
    pub fn iter (&self) -> impl Iterator<Item=&TrajectoryPoint> { self.points.iter() }

    pub fn start (&self) -> &TrajectoryPoint { &self.points[0] }
    pub fn end (&self) -> &TrajectoryPoint { &self.points[self.points.len()-1] }

    /// time offset of the last point
    pub fn horizon (&self) -> f64 { self.end().time_offset }
}

/* #endregion trajectory */
