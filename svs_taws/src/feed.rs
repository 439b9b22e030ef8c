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

//! flight sample input. Records are semicolon separated lines with the 9 fields
//! `roll;pitch;heading;vx;vy;vz;latitude;longitude;altitude`. Malformed records are skipped

use std::{fs::File, io::{BufReader, Read}, path::Path};
use tokio::{io::{AsyncBufRead, AsyncBufReadExt}, sync::mpsc};
use tracing::{debug,info};
use crate::errors::{Result, malformed_input};
use crate::sample::{FlightSample, SAMPLE_FIELDS};

pub const FIELD_SEPARATOR: u8 = b';';

fn parse_fields<'a> (fields: impl Iterator<Item=&'a str>) -> Result<FlightSample> {
    let mut vs = [0.0f64; SAMPLE_FIELDS];
    let mut n = 0;

    for f in fields {
        if n >= SAMPLE_FIELDS {
            return Err( malformed_input( format!("more than {SAMPLE_FIELDS} fields")))
        }
        let f = f.trim();
        vs[n] = f.parse::<f64>().map_err( |_| malformed_input( format!("field {n} not a number: '{f}'")))?;
        n += 1;
    }

    if n < SAMPLE_FIELDS {
        return Err( malformed_input( format!("expected {SAMPLE_FIELDS} fields, got {n}")))
    }
    FlightSample::from_values( &vs)
}

pub fn parse_line (line: &str) -> Result<FlightSample> {
    let line = line.trim();
    if line.is_empty() {
        return Err( malformed_input("empty line"))
    }
    parse_fields( line.split(FIELD_SEPARATOR as char))
}

/// read all valid samples. Only I/O errors of the underlying reader are returned
pub fn read_flight_samples (reader: impl Read) -> Result<Vec<FlightSample>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(FIELD_SEPARATOR)
        .has_headers(false) // an optional header line fails to parse and is skipped
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut samples: Vec<FlightSample> = Vec::new();

    for (i,res) in csv_reader.records().enumerate() {
        match res {
            Ok(rec) => match parse_fields( rec.iter()) {
                Ok(sample) => samples.push(sample),
                Err(e) => debug!("skipping record {}: {}", i+1, e)
            }
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => debug!("skipping record {}: {}", i+1, e)
        }
    }

    Ok(samples)
}

pub fn load_flight_samples (path: impl AsRef<Path>) -> Result<Vec<FlightSample>> {
    let path = path.as_ref();
    let samples = read_flight_samples( BufReader::new( File::open(path)?))?;
    info!("loaded {} flight samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// parse lines from a live source (serial/network stream) and send valid samples to `tx`.
/// Returns the number of forwarded samples once the input is exhausted or the receiver is closed
pub async fn forward_line_feed<R> (reader: R, tx: mpsc::Sender<FlightSample>) -> Result<usize> where R: AsyncBufRead + Unpin {
    let mut lines = reader.lines();
    let mut line_no = 0;
    let mut n_sent = 0;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() { continue }

        match parse_line( &line) {
            Ok(sample) => {
                if tx.send(sample).await.is_err() {
                    debug!("feed receiver closed after {n_sent} samples");
                    break
                }
                n_sent += 1;
            }
            Err(e) => debug!("skipping feed line {line_no}: {e}")
        }
    }

    Ok(n_sent)
}
