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

use std::io::{self, Read};
use tokio::sync::mpsc;
use svs_taws::{FlightSample, SvsTawsError, feed::*};

const FLIGHT_DATA: &str = "roll;pitch;heading;vx;vy;vz;lat;lon;alt
0;0;90;100;0;0;60;30;1000

1;2;3
0;0;90;100;0;0;60;30;abc
# recorder restart
0;0;90;100;0;0;60;30;NaN
 1.5 ; -2.0 ; 91 ; 100 ; 0.5 ; -1 ; 60.001 ; 30 ; 1001
0;0;92;100;0;0;60.002;30;1002;7
";

#[test]
fn test_parse_line () {
    let s = parse_line( "10.5;-2;365;100;0;-5;60.0;30.0;1500").unwrap();
    assert_eq!( s.roll(), 10.5);
    assert_eq!( s.pitch(), -2.0);
    assert_eq!( s.heading(), 5.0); // normalized
    assert_eq!( (s.vx(), s.vy(), s.vz()), (100.0, 0.0, -5.0));
    assert_eq!( (s.latitude(), s.longitude(), s.altitude()), (60.0, 30.0, 1500.0));
    assert!( (s.speed() - (100.0f64*100.0 + 25.0).sqrt()).abs() < 1e-12);

    assert_eq!( parse_line( "0;0;-90;0;0;0;0;0;0\r").unwrap().heading(), 270.0);
}

#[test]
fn test_parse_line_errors () {
    for line in ["", "   ", "1;2;3", "1;2;3;4;5;6;7;8;9;10", "1;2;3;4;5;6;7;8;x", "1;2;3;4;5;6;7;8;inf", "NaN;2;3;4;5;6;7;8;9", "1,2,3,4,5,6,7,8,9"] {
        match parse_line( line) {
            Err(SvsTawsError::MalformedInput(msg)) => println!("'{line}': {msg}"),
            other => panic!("'{line}' should be malformed: {other:?}")
        }
    }
}

#[test]
fn test_read_flight_samples () {
    let samples = read_flight_samples( FLIGHT_DATA.as_bytes()).unwrap();
    assert_eq!( samples.len(), 2);

    assert_eq!( samples[0].altitude(), 1000.0);
    assert_eq!( samples[1].roll(), 1.5);
    assert_eq!( samples[1].vy(), 0.5);
    assert_eq!( samples[1].heading(), 91.0);

    // first line is data if it parses
    let samples = read_flight_samples( "0;0;1;2;3;4;5;6;7\n".as_bytes()).unwrap();
    assert_eq!( samples.len(), 1);

    assert!( read_flight_samples( "".as_bytes()).unwrap().is_empty());
}

struct FailingReader;

impl Read for FailingReader {
    fn read (&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err( io::Error::other("device unplugged"))
    }
}

#[test]
fn test_read_error () {
    match read_flight_samples( FailingReader) {
        Err(e) => println!("expected error: {e}"),
        Ok(v) => panic!("read error should propagate, got {} samples", v.len())
    }
    assert!( load_flight_samples( "/nonexistent/svs/flight.csv").is_err());
}

#[tokio::test]
async fn test_forward_line_feed () {
    let (tx, mut rx) = mpsc::channel::<FlightSample>(16);

    let n = forward_line_feed( FLIGHT_DATA.as_bytes(), tx).await.unwrap();
    assert_eq!( n, 2);

    let mut received = Vec::new();
    while let Some(s) = rx.recv().await { received.push(s) } // tx was dropped by forward_line_feed
    assert_eq!( received.len(), 2);
    assert_eq!( received[1].latitude(), 60.001);
}

#[tokio::test]
async fn test_forward_to_closed_receiver () {
    let (tx, rx) = mpsc::channel::<FlightSample>(1);
    drop(rx);

    let n = forward_line_feed( FLIGHT_DATA.as_bytes(), tx).await.unwrap();
    assert_eq!( n, 0);
}
