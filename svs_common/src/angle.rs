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

//! angle normalization in degrees. Headings are kept in [0,360), angular deltas in (-180,180]

/// normalize to (-180,180]
#[inline]
pub fn normalize_180 (d: f64) -> f64 {
    let x = normalize_360(d);
    if x > 180.0 { x - 360.0 } else { x }
}

/// normalize to [0,360)
#[inline]
pub fn normalize_360 (d: f64) -> f64 {
    let x = d % 360.0;
    let x = if x < 0.0 { 360.0 + x } else { x };
    if x >= 360.0 { 0.0 } else { x } // adding 360 to a tiny negative remainder rounds to 360
}

/// shortest path angular difference `to - from` in degrees, in (-180,180].
/// Crossing the 0/360 boundary yields small deltas, e.g. 359° -> 1° is +2°, not -358°
#[inline]
pub fn angle_delta (from: f64, to: f64) -> f64 {
    normalize_180( to - from)
}
