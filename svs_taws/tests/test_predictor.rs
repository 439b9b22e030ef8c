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

use svs_common::{cartesian3::geodetic_to_ecef, collections::RingDeque};
use svs_taws::{PredictionMode, PredictorConfig, SmoothedState, TrajectoryPredictor};

fn state (heading: f64, vx: f64, alt: f64) -> SmoothedState {
    SmoothedState { heading, vx, latitude: 60.0, longitude: 30.0, altitude: alt, ..SmoothedState::default() }
}

fn history (states: &[SmoothedState]) -> RingDeque<SmoothedState> {
    let mut h = RingDeque::new(10);
    for s in states { h.push_to_ringbuffer(*s); }
    h
}

#[test]
fn test_empty_history () {
    let p = TrajectoryPredictor::new( PredictorConfig::default());
    assert!( p.predict( &RingDeque::new(10)).is_none());
}

#[test]
fn test_linear_zero_velocity () {
    let p = TrajectoryPredictor::new( PredictorConfig::default());
    let t = p.predict( &history( &[state( 30.0, 0.0, 1500.0)])).unwrap();

    assert_eq!( t.mode(), PredictionMode::Linear);
    assert_eq!( t.len(), 61);
    assert_eq!( t.start().time_offset, 0.0);
    assert_eq!( t.horizon(), 60.0);
    for (i,pt) in t.iter().enumerate() {
        assert!( (pt.time_offset - i as f64).abs() < 1e-9);
        assert!( (pt.latitude - 60.0).abs() < 1e-9);
        assert!( (pt.longitude - 30.0).abs() < 1e-9);
        assert!( (pt.altitude - 1500.0).abs() < 1e-6);
    }
}

#[test]
fn test_linear_motion () {
    let config = PredictorConfig { steps: 7, horizon_secs: 30.0, ..PredictorConfig::default() };
    let p = TrajectoryPredictor::new( config);
    let cur = state( 0.0, 100.0, 1000.0);
    let t = p.predict( &history( &[cur])).unwrap();

    assert_eq!( t.len(), 8);
    assert_eq!( t.horizon(), 30.0); // exact, not 7*(30/7)

    // constant velocity -> equidistant points in ECEF
    let ps: Vec<_> = t.iter().map( |pt| geodetic_to_ecef( pt.latitude, pt.longitude, pt.altitude)).collect();
    let d = 100.0 * 30.0 / 7.0;
    for w in ps.windows(2) {
        assert!( ((w[1] - w[0]).length() - d).abs() < 1e-3);
    }
    assert!( ((ps[7] - ps[0]).length() - 3000.0).abs() < 1e-3);
}

#[test]
fn test_trend_vertical_rate () {
    let p = TrajectoryPredictor::new( PredictorConfig::default());
    let t = p.predict( &history( &[state( 90.0, 0.0, 1000.0), state( 90.0, 0.0, 1010.0)])).unwrap();

    assert_eq!( t.mode(), PredictionMode::Trend);
    assert_eq!( t.len(), 61);
    assert_eq!( t.start().altitude, 1010.0);
    // 20 m/s climb over 60s
    assert!( (t.end().altitude - 2210.0).abs() < 1e-6);
    assert!( (t.points()[30].altitude - 1610.0).abs() < 1e-6);
}

#[test]
fn test_trend_heading_wrap () {
    // 359 -> 1 is a +4 deg/s turn. Treated as -358 deg (-716 deg/s) the path would curl up
    let config = PredictorConfig { steps: 10, horizon_secs: 1.0, sample_interval_secs: 0.5 };
    let p = TrajectoryPredictor::new( config);
    let end_of = |h0: f64, h1: f64| {
        let t = p.predict( &history( &[state( h0, 100.0, 1000.0), state( h1, 100.0, 1000.0)])).unwrap();
        let p0 = geodetic_to_ecef( t.start().latitude, t.start().longitude, t.start().altitude);
        let p1 = geodetic_to_ecef( t.end().latitude, t.end().longitude, t.end().altitude);
        p1 - p0
    };

    let right = end_of( 359.0, 1.0);
    let straight = end_of( 1.0, 1.0);
    let left = end_of( 3.0, 1.0);
    println!("after 1s: right {right}, straight {straight}, left {left}");

    assert!( right.length() > 50.0);
    // increasing heading rotates the velocity towards +y, decreasing towards -y
    assert!( right.y > straight.y + 1.0);
    assert!( left.y < straight.y - 1.0);
}

#[test]
fn test_trend_uses_two_most_recent () {
    let p = TrajectoryPredictor::new( PredictorConfig::default());
    // the old 5000m entry must not contribute
    let t = p.predict( &history( &[state( 0.0, 0.0, 5000.0), state( 0.0, 0.0, 1000.0), state( 0.0, 0.0, 1000.0)])).unwrap();

    assert_eq!( t.mode(), PredictionMode::Trend);
    assert!( (t.end().altitude - 1000.0).abs() < 1e-6);
}
