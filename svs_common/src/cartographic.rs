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

//! cartographic (geodetic) coordinates.
//! Cartographic is an internal format based on radians, to efficiently interface with the ECEF
//! computations of [`Cartesian3`]. Degree based values are available through accessors

use crate::{cartesian3::Cartesian3, geo_constants::{EQATORIAL_EARTH_RADIUS, POLAR_EARTH_RADIUS, E_EARTH_SQUARED, E2_EARTH_SQUARED}};
use crate::{pow3, sin2};

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Cartographic {
    pub longitude: f64, // radians
    pub latitude: f64,  // radians
    pub height: f64     // meters above ellipsoid
}

impl Cartographic {
    pub fn new (longitude:f64, latitude: f64, height: f64)->Self {
        Cartographic { longitude, latitude, height }
    }

    pub fn from_degrees (lon: f64, lat: f64, height: f64)->Self {
        Cartographic::new( lon.to_radians(), lat.to_radians(), height)
    }

    pub fn longitude_deg (&self)-> f64 { self.longitude.to_degrees() }
    pub fn latitude_deg (&self)-> f64 { self.latitude.to_degrees() }
}

impl From<&Cartesian3> for Cartographic {

    /// convert cartesian ECEF coordinates to Cartographic using Bowring's closed form reduction
    ///    Bowring, B. R. (1976). Transformation from spatial to geographical coordinates.
    ///    Survey Review, 23(181), 323–327.
    ///
    /// height is computed as `p·cos φ + z·sin φ - a·sqrt(1 - e²·sin² φ)`, which unlike `p/cos φ - N` does
    /// not degrade towards the poles. For terrestrial and aviation heights the single Bowring step
    /// keeps roundtrip errors well below 1e-9 rad
    fn from (p: &Cartesian3) -> Self {
        let a = EQATORIAL_EARTH_RADIUS;
        let b = POLAR_EARTH_RADIUS;

        let x = p.x;
        let y = p.y;
        let z = p.z;

        let w = (x*x + y*y).sqrt();
        let θ = (z * a).atan2( w * b);

        let lon = y.atan2(x);
        let lat = (z + E2_EARTH_SQUARED * b * pow3(θ.sin())).atan2( w - E_EARTH_SQUARED * a * pow3(θ.cos()));

        let h = w * lat.cos() + z * lat.sin() - a * (1.0 - E_EARTH_SQUARED * sin2(lat)).sqrt();

        Cartographic::new( lon, lat, h)
    }
}

impl From<Cartesian3> for Cartographic {
    fn from (p: Cartesian3) -> Self {
        Cartographic::from(&p)
    }
}

impl std::fmt::Display for Cartographic {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ longitude: {}, latitude: {}, height: {} }}",
            self.longitude.to_degrees(), self.latitude.to_degrees(), self.height)
    }
}

/// ECEF meters to (latitude, longitude, altitude) in degrees/meters
pub fn ecef_to_geodetic (p: &Cartesian3) -> (f64,f64,f64) {
    let c = Cartographic::from(p);
    (c.latitude_deg(), c.longitude_deg(), c.height)
}
