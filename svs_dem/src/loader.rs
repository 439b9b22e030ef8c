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

//! grid construction from tile sources and the degraded-mode fallback

use std::{path::{Path,PathBuf}, time::Instant};
use ndarray::Array2;
use serde::Serialize;
use tracing::{debug,error,info,warn};
use svs_common::BoundingBox;

use crate::{ElevationGrid, TerrainConfig, TerrainLocator};
use crate::errors::{Result, terrain_unavailable};
use crate::mbtiles::{MbTiles, TileSource};
use crate::tiles::{TileRange, decode_height_tile, select_zoom, tms_row};

/// outcome of a terrain load
#[derive(Debug,Clone,PartialEq,Serialize)]
pub enum TerrainStatus {
    Loaded { source: PathBuf, zoom: u32, rows: usize, cols: usize },
    /// the synthetic grid was substituted
    Degraded { reason: String },
}

impl TerrainStatus {
    pub fn is_degraded (&self) -> bool {
        matches!( self, TerrainStatus::Degraded{..})
    }
}

#[derive(Debug)]
pub struct TerrainLoad {
    pub grid: ElevationGrid,
    pub status: TerrainStatus,
}

/* #region synthetic grid ************************************************************************************/

pub const SYNTHETIC_SIZE: usize = 100;
pub const SYNTHETIC_BOUNDS: [f64;4] = [29.0, 59.0, 31.0, 61.0]; // west,south,east,north

/// deterministic demo terrain that is used if there is no usable tile source
pub fn synthetic_grid () -> ElevationGrid {
    let n = SYNTHETIC_SIZE;
    let bounds: BoundingBox<f64> = BoundingBox::from_wsen( &SYNTHETIC_BOUNDS);
    let heights = Array2::from_shape_fn( (n,n), |(i,j)| {
        100.0 + 50.0 * (0.1 * i as f64).sin() + 50.0 * (0.1 * j as f64).cos()
    });

    let lat_res = bounds.height() / (n - 1) as f64;
    let lon_res = bounds.width() / (n - 1) as f64;
    ElevationGrid::new( heights, bounds, lat_res, lon_res)
}

/* #endregion synthetic grid */

/// assemble a grid from all tiles that cover the source bounds at the working zoom level.
/// Returns the grid and the zoom level that was used
pub async fn build_grid (source: &dyn TileSource, config: &TerrainConfig) -> Result<(ElevationGrid,u32)> {
    let md = source.metadata().await?;
    let bounds = md.valid_bounds()?;
    let zoom = select_zoom( md.min_zoom, md.max_zoom, config.min_zoom, config.max_zoom);
    let range = TileRange::for_bounds( &bounds, zoom);

    let ts = config.tile_size.max(1) as usize;
    let max_size = config.max_grid_size.max(1);
    let cols = (range.width() as usize * ts).min(max_size);
    let rows = (range.height() as usize * ts).min(max_size);
    info!("building {rows}x{cols} grid from {} tiles at zoom {zoom}", range.len());

    let mut heights = Array2::<f64>::zeros((rows,cols));
    let mut n_loaded = 0;

    for (tx,ty) in range.iter() {
        let gx0 = (tx - range.min_x) as usize * ts;
        let gy0 = (ty - range.min_y) as usize * ts;
        if gx0 >= cols || gy0 >= rows { continue } // beyond grid cap

        let Some(data) = source.tile( zoom, tx, tms_row(zoom, ty)).await? else {
            debug!("no tile {zoom}/{tx}/{ty}");
            continue
        };

        match decode_height_tile( &data, config.scale_factor) {
            Ok(tile) => {
                for py in 0..(tile.height as usize).min(ts) {
                    let gy = gy0 + py;
                    if gy >= rows { break }
                    let row = rows - 1 - gy;

                    for px in 0..(tile.width as usize).min(ts) {
                        let gx = gx0 + px;
                        if gx >= cols { break }
                        heights[[row,gx]] = tile.get( px as u32, py as u32);
                    }
                }
                n_loaded += 1;
            }
            Err(e) => warn!("skipping undecodable tile {zoom}/{tx}/{ty}: {e}")
        }
    }
    debug!("{n_loaded} tiles loaded");

    Ok( (ElevationGrid::from_extent( heights, bounds), zoom) )
}

/// load the grid from a MBTiles file
pub async fn load_terrain_file (path: impl AsRef<Path>, config: &TerrainConfig) -> Result<TerrainLoad> {
    let path = path.as_ref();
    let mbtiles = MbTiles::open( path, &config.tile_tables).await?;
    let res = build_grid( &mbtiles, config).await;
    mbtiles.close().await;

    let (grid, zoom) = res?;
    let status = TerrainStatus::Loaded { source: path.to_path_buf(), zoom, rows: grid.rows(), cols: grid.cols() };
    Ok( TerrainLoad { grid, status } )
}

/// resolve and load terrain. This never fails - if there is no usable source we fall back to the synthetic grid
/// and report a degraded status
pub async fn load_terrain (locator: &TerrainLocator, source_ref: Option<&str>, config: &TerrainConfig) -> TerrainLoad {
    let t0 = Instant::now();

    let res = match locator.resolve( source_ref) {
        Some(path) => {
            info!("loading terrain from {}", path.display());
            load_terrain_file( &path, config).await
        }
        None => Err( terrain_unavailable( source_ref.unwrap_or("<any>")))
    };

    match res {
        Ok(load) => {
            info!("terrain loaded in {:?}: {:?}", t0.elapsed(), load.status);
            load
        }
        Err(e) => {
            if e.is_source_error() {
                warn!("terrain load failed ({e}), using synthetic terrain");
            } else {
                error!("terrain load failed unexpectedly ({e}), using synthetic terrain");
            }
            TerrainLoad { grid: synthetic_grid(), status: TerrainStatus::Degraded { reason: e.to_string() } }
        }
    }
}
