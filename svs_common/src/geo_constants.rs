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

//! common geodetic constants that should be consistent throughout SVS computations.
//! Note that we use the rounded WGS84 eccentricity the terrain/trajectory computations are based on

/// semi major axis in meters
pub const EQATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// first eccentricity squared (e²)
pub const E_EARTH_SQUARED: f64 = 0.00669438;

/// semi minor axis in meters: a·sqrt(1 - e²)
/// (f64::sqrt() is not const so this is precomputed)
pub const POLAR_EARTH_RADIUS: f64 = 6356752.314213634;

/// b²/a² - squared ratio of minor/major axis, which is 1 - e²
pub const EARTH_RADIUS_RATIO_SQUARED: f64 = 1.0 - E_EARTH_SQUARED;

/// second eccentricity squared (e'² = e²/(1 - e²))
pub const E2_EARTH_SQUARED: f64 = E_EARTH_SQUARED / EARTH_RADIUS_RATIO_SQUARED;
