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

use std::{sync::Arc, time::Duration};
use anyhow::Result;
use tracing_subscriber::EnvFilter;
use svs_common::{define_cli, config::load_config_or_default};
use svs_dem::{TerrainHandle, TerrainLocator};
use svs_taws::{TawsConfig, TawsPipeline, feed::load_flight_samples, replay::replay_samples};

define_cli! { ARGS [about="replay_flight - run recorded flight samples through the terrain awareness pipeline"] =
    config: Option<String> [help="path of TAWS config (RON)", long, short],
    terrain: Option<String> [help="terrain tile set name or path", long, short],
    interval: u64 [help="update interval in milliseconds (0: as fast as possible)", long, short, default_value="1000"],
    flight_file: String [help="semicolon separated flight sample file"]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .with_writer(std::io::stderr) // stdout is for results
        .init();

    let config: TawsConfig = load_config_or_default( ARGS.config.as_ref())?;
    let locator = TerrainLocator::from_config( &config.terrain);
    let samples = load_flight_samples( &ARGS.flight_file)?;

    let mut pipeline = TawsPipeline::new( config, Arc::new( TerrainHandle::default()));
    let status = pipeline.load_terrain( &locator, ARGS.terrain.as_deref()).await;
    eprintln!("terrain: {status:?}");

    let n = replay_samples( &mut pipeline, &samples, Duration::from_millis(ARGS.interval), |res| {
        match serde_json::to_string( res) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize result: {e}")
        }
    }).await;
    eprintln!("{n} samples processed");

    Ok(())
}
