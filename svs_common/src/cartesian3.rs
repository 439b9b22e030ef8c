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

use std::ops::{Add, AddAssign, Mul, Sub};
use nalgebra::Vector3;
use serde::{Serialize,Deserialize};
use crate::geo_constants::{EARTH_RADIUS_RATIO_SQUARED, EQATORIAL_EARTH_RADIUS, E_EARTH_SQUARED};
use crate::cartographic::Cartographic;

/// plain 3D vector. Used for ECEF positions (meters) and for velocities (m/s) in body or ECEF frame
#[derive(Debug,Clone,Copy,PartialEq,Default,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn length_squared (&self) -> f64 {
        self.x*self.x + self.y*self.y + self.z*self.z
    }

    pub fn length (&self) -> f64 { self.length_squared().sqrt() }

    pub fn to_vector3 (&self) -> Vector3<f64> {
        Vector3::new( self.x, self.y, self.z)
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for Cartesian3 {
    fn from (v: Vector3<f64>) -> Self { Cartesian3::new( v.x, v.y, v.z) }
}

// component-wise vector arithmetic
macro_rules! impl_vec_op {
    ($tr:ident, $f:ident, $op:tt) => {
        impl $tr for Cartesian3 {
            type Output = Cartesian3;
            fn $f (self, rhs: Cartesian3) -> Cartesian3 {
                Cartesian3::new( self.x $op rhs.x, self.y $op rhs.y, self.z $op rhs.z)
            }
        }
    }
}
impl_vec_op!( Add, add, +);
impl_vec_op!( Sub, sub, -);

impl AddAssign for Cartesian3 {
    fn add_assign (&mut self, rhs: Cartesian3) { *self = *self + rhs }
}

impl Mul<f64> for Cartesian3 {
    type Output = Cartesian3;
    fn mul (self, s: f64) -> Cartesian3 { Cartesian3::new( self.x*s, self.y*s, self.z*s) }
}

impl From<Cartographic> for Cartesian3 {
    fn from (p: Cartographic) -> Self { Cartesian3::from(&p) }
}

/// geodetic (ellipsoid) to ECEF
impl From<&Cartographic> for Cartesian3 {
    fn from (p: &Cartographic) -> Self {
        let (sin_lat, cos_lat) = p.latitude.sin_cos();
        let (sin_lon, cos_lon) = p.longitude.sin_cos();

        // prime vertical radius of curvature
        let n = EQATORIAL_EARTH_RADIUS / (1.0 - E_EARTH_SQUARED * sin_lat*sin_lat).sqrt();
        let r = (n + p.height) * cos_lat;

        Cartesian3::new( r * cos_lon, r * sin_lon, (EARTH_RADIUS_RATIO_SQUARED * n + p.height) * sin_lat)
    }
}

/// geodetic position in degrees/meters to ECEF meters
pub fn geodetic_to_ecef (lat_deg: f64, lon_deg: f64, alt: f64) -> Cartesian3 {
    Cartesian3::from( Cartographic::from_degrees( lon_deg, lat_deg, alt))
}
