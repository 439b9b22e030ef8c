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

use nalgebra::Matrix3;
use serde::{Serialize,Deserialize};
use crate::cartesian3::Cartesian3;

/// Euler attitude angles in degrees (aerospace convention: yaw (heading) about z, then pitch about y,
/// then roll about x)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Attitude {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64
}

impl Attitude {
    pub fn new (roll: f64, pitch: f64, yaw: f64)->Self {
        Attitude { roll, pitch, yaw }
    }

    /// direction cosine matrix for the yaw-pitch-roll composition Rz(ψ)·Ry(θ)·Rx(φ), which maps body
    /// frame vectors into the reference frame
    pub fn dcm (&self) -> Matrix3<f64> {
        let (sφ, cφ) = self.roll.to_radians().sin_cos();
        let (sθ, cθ) = self.pitch.to_radians().sin_cos();
        let (sψ, cψ) = self.yaw.to_radians().sin_cos();

        Matrix3::new(
            cψ*cθ,  cψ*sθ*sφ - sψ*cφ,  cψ*sθ*cφ + sψ*sφ,
            sψ*cθ,  sψ*sθ*sφ + cψ*cφ,  sψ*sθ*cφ - cψ*sφ,
            -sθ,    cθ*sφ,             cθ*cφ
        )
    }

    /// rotate a body frame (velocity) vector into the ECEF frame
    pub fn body_to_ecef (&self, v_body: &Cartesian3) -> Cartesian3 {
        rotate( &self.dcm(), v_body)
    }
}

#[inline]
pub fn rotate (dcm: &Matrix3<f64>, v: &Cartesian3) -> Cartesian3 {
    Cartesian3::from( dcm * v.to_vector3())
}
