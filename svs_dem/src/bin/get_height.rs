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

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use svs_common::{define_cli, config::load_config_or_default};
use svs_dem::{TerrainConfig, TerrainLocator, load_terrain};

define_cli! { ARGS [about="get_height - terrain height query on a MBTiles RGB height tile set"] =
    config: Option<String> [help="path of terrain config (RON)", long, short],
    source: Option<String> [help="tile set name or path (defaults to first *.mbtiles in configured dirs)", long, short],
    radius: Option<f64> [help="also list grid cells within +- radius degrees", long, short],
    lat: f64 [help="latitude in degrees", allow_hyphen_values = true],
    lon: f64 [help="longitude in degrees", allow_hyphen_values = true]
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())  // use RUST_LOG to set max level
        .init();

    let config: TerrainConfig = load_config_or_default( ARGS.config.as_ref())?;
    let locator = TerrainLocator::from_config( &config);

    let load = load_terrain( &locator, ARGS.source.as_deref(), &config).await;
    println!("terrain: {:?}", load.status);

    let grid = &load.grid;
    println!("height at {},{}: {:.1} m", ARGS.lat, ARGS.lon, grid.get_height_at( ARGS.lat, ARGS.lon));

    if let Some(r) = ARGS.radius {
        for (lat,lon,h) in grid.get_heights_in_area( ARGS.lat - r, ARGS.lat + r, ARGS.lon - r, ARGS.lon + r) {
            println!("{lat:.6},{lon:.6}: {h:.1}");
        }
    }

    Ok(())
}
