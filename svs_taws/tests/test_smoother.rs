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

use svs_taws::{FlightSample, SampleSmoother, SmootherConfig};

fn sample (heading: f64, alt: f64) -> FlightSample {
    FlightSample::new( 0.0, 0.0, heading, 100.0, 0.0, 0.0, 60.0, 30.0, alt).unwrap()
}

fn smoother (interval: usize) -> SampleSmoother {
    SampleSmoother::new( &SmootherConfig { interval })
}

#[test]
fn test_first_sample_seeds () {
    let mut s = smoother(5);
    assert!( s.current().is_none());

    let st = *s.smooth( &sample( 45.0, 1234.0));
    assert_eq!( st.heading, 45.0);
    assert_eq!( st.altitude, 1234.0);
    assert_eq!( st.vx, 100.0);
    assert_eq!( s.history().len(), 1);
}

#[test]
fn test_outlier_step () {
    let mut s = smoother(5);
    assert!( (s.alpha() - 1.0/3.0).abs() < 1e-15);

    s.smooth( &sample( 0.0, 1000.0));
    let st = *s.smooth( &sample( 0.0, 1300.0)); // single outlier
    assert!( (st.altitude - (1000.0 + 300.0/3.0)).abs() < 1e-9, "altitude {}", st.altitude);
    assert_eq!( st.latitude, 60.0);
}

#[test]
fn test_convergence () {
    let mut s = smoother(5);
    s.smooth( &sample( 0.0, 0.0));

    let mut last = 0.0;
    for _ in 0..60 {
        let alt = s.smooth( &sample( 0.0, 1000.0)).altitude;
        assert!( alt > last && alt <= 1000.0); // monotonic approach
        last = alt;
    }
    assert!( (last - 1000.0).abs() < 1e-6);
}

#[test]
fn test_heading_wrap () {
    let mut s = smoother(5);
    s.smooth( &sample( 359.0, 1000.0));
    let h = s.smooth( &sample( 1.0, 1000.0)).heading;
    println!("smoothed heading: {h}");
    assert!( (h - (359.0 + 2.0/3.0)).abs() < 1e-9);

    let mut s = smoother(1); // alpha = 1
    s.smooth( &sample( 359.0, 1000.0));
    let h = s.smooth( &sample( 1.0, 1000.0)).heading;
    assert!( (h - 1.0).abs() < 1e-9);

    let mut s = smoother(1);
    s.smooth( &sample( 1.0, 1000.0));
    let h = s.smooth( &sample( 359.0, 1000.0)).heading;
    assert!( (h - 359.0).abs() < 1e-9);
}

#[test]
fn test_history_capacity () {
    let mut s = smoother(1);
    for i in 0..25 {
        s.smooth( &sample( 0.0, i as f64));
    }
    let alts: Vec<f64> = s.history().iter().map(|st| st.altitude).collect();
    assert_eq!( alts, vec![23.0, 24.0]); // oldest first

    let mut s = smoother(5);
    for i in 0..25 {
        s.smooth( &sample( 0.0, i as f64));
        assert!( s.history().len() <= 10);
    }
    assert_eq!( s.history().len(), 10);
    assert_eq!( s.history().back().map(|st| st.altitude), s.current().map(|st| st.altitude));
}

#[test]
fn test_reset () {
    let mut s = smoother(5);
    s.smooth( &sample( 10.0, 500.0));
    s.smooth( &sample( 20.0, 600.0));
    s.reset();

    assert!( s.current().is_none());
    assert!( s.history().is_empty());

    let st = *s.smooth( &sample( 90.0, 42.0));
    assert_eq!( (st.heading, st.altitude), (90.0, 42.0));
}
