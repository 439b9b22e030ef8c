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

use rand::{Rng, SeedableRng, rngs::StdRng};
use svs_common::{angle::normalize_180, attitude::Attitude, cartesian3::{geodetic_to_ecef, Cartesian3},
                 cartographic::{ecef_to_geodetic, Cartographic}};

/// unit tests for cartesian3, cartographic and attitude
/// run with "cargo test --test test_cart -- --nocapture"

#[test]
fn test_roundtrip () {
    let mut rng = StdRng::seed_from_u64(42);
    let mut max_dlat = 0.0f64;
    let mut max_dlon = 0.0f64;
    let mut max_dalt = 0.0f64;

    for _ in 0..10000 {
        let lat: f64 = rng.random_range(-80.0..=80.0);
        let lon: f64 = rng.random_range(-180.0..=180.0);
        let alt: f64 = rng.random_range(0.0..=12000.0);

        let p = geodetic_to_ecef( lat, lon, alt);
        let (lat1, lon1, alt1) = ecef_to_geodetic( &p);

        max_dlat = max_dlat.max( (lat1 - lat).abs());
        max_dlon = max_dlon.max( normalize_180(lon1 - lon).abs()); // +180 and -180 are the same meridian
        max_dalt = max_dalt.max( (alt1 - alt).abs());
    }
    println!("max roundtrip errors: lat={max_dlat}°, lon={max_dlon}°, alt={max_dalt}m");

    assert!( max_dlat < 1e-6);
    assert!( max_dlon < 1e-6);
    assert!( max_dalt < 1e-2);
}

#[test]
fn test_roundtrip_extremes () {
    for (lat,lon,alt) in [(0.0,0.0,0.0), (89.5,10.0,-1000.0), (-89.5,-170.0,50000.0), (45.0,179.9,35000.0)] {
        let p = geodetic_to_ecef( lat, lon, alt);
        let (lat1, lon1, alt1) = ecef_to_geodetic( &p);
        println!("({lat},{lon},{alt}) -> {p} -> ({lat1},{lon1},{alt1})");

        assert!( (lat1 - lat).abs() < 1e-6);
        assert!( normalize_180(lon1 - lon).abs() < 1e-6);
        assert!( (alt1 - alt).abs() < 1e-2);
    }
}

#[test]
fn test_known_ecef () {
    let p = Cartesian3::from( Cartographic::from_degrees( 0.0, 0.0, 0.0));
    assert!( (p.x - 6378137.0).abs() < 1e-6);
    assert!( p.y.abs() < 1e-6 && p.z.abs() < 1e-6);

    let p = geodetic_to_ecef( 90.0, 0.0, 0.0); // north pole is at the semi minor axis
    assert!( p.x.abs() < 1e-6);
    assert!( (p.z - 6356752.3142).abs() < 1e-3);
}

#[test]
fn test_dcm () {
    // level attitude with zero heading is the identity
    let att = Attitude::new( 0.0, 0.0, 0.0);
    let v = att.body_to_ecef( &Cartesian3::new( 1.0, 2.0, 3.0));
    assert!( (v - Cartesian3::new(1.0, 2.0, 3.0)).length() < 1e-12);

    // 90° yaw rotates x into y
    let att = Attitude::new( 0.0, 0.0, 90.0);
    let v = att.body_to_ecef( &Cartesian3::new( 100.0, 0.0, 0.0));
    println!("yaw 90: {v}");
    assert!( v.x.abs() < 1e-9 && (v.y - 100.0).abs() < 1e-9 && v.z.abs() < 1e-9);

    // 90° pitch rotates x into -z
    let att = Attitude::new( 0.0, 90.0, 0.0);
    let v = att.body_to_ecef( &Cartesian3::new( 100.0, 0.0, 0.0));
    assert!( v.x.abs() < 1e-9 && (v.z + 100.0).abs() < 1e-9);

    // the DCM is orthonormal, i.e. it preserves vector length
    let att = Attitude::new( 12.0, -7.5, 231.0);
    let m = att.dcm();
    let id = m * m.transpose();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert!( (id[(i,j)] - expected).abs() < 1e-12);
        }
    }
    let v_body = Cartesian3::new( 60.0, -3.0, 2.0);
    assert!( (att.body_to_ecef(&v_body).length() - v_body.length()).abs() < 1e-9);
}
