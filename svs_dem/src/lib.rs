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

//! terrain elevation model: a regular lat/lon height grid that is built from tiled RGB height rasters
//! (or synthesized if there is no usable source), plus the lookup functions used for clearance computation

use std::{path::PathBuf, sync::{Arc,RwLock}};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use svs_common::BoundingBox;

pub mod errors;
pub mod tiles;
pub mod mbtiles;
pub mod locator;
pub mod loader;

pub use errors::{SvsDemError, Result};
pub use mbtiles::{MbTiles, TileSource, TileSetMetadata};
pub use locator::TerrainLocator;
pub use loader::{TerrainLoad, TerrainStatus, build_grid, load_terrain, load_terrain_file, synthetic_grid};

/* #region terrain config ************************************************************************************/

#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// user selected storage directory that is searched first
    pub preferred_dir: Option<PathBuf>,
    /// other directories in which we look for the first *.mbtiles file
    pub search_dirs: Vec<PathBuf>,
    /// directory with the tile set that is shipped with the application
    pub bundled_dir: Option<PathBuf>,

    /// accepted tile table names, first existing one wins
    pub tile_tables: Vec<String>,

    /// meters per RGB height unit
    pub scale_factor: f64,
    pub min_zoom: u32,
    pub max_zoom: u32,
    pub tile_size: u32,
    /// max grid rows and columns
    pub max_grid_size: usize,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        TerrainConfig {
            preferred_dir: None,
            search_dirs: Vec::new(),
            bundled_dir: None,
            tile_tables: mbtiles::DEFAULT_TILE_TABLES.iter().map(|s| s.to_string()).collect(),
            scale_factor: 0.1,
            min_zoom: 10,
            max_zoom: 14,
            tile_size: tiles::DEFAULT_TILE_SIZE,
            max_grid_size: 1024,
        }
    }
}

/* #endregion terrain config */

/* #region elevation grid ************************************************************************************/

/// regular height grid. Row 0 is the southern edge and column 0 the western edge of the bounding box.
/// Heights are in meters, resolutions in degrees per cell
#[derive(Debug,Clone)]
pub struct ElevationGrid {
    heights: Array2<f64>,
    bounds: BoundingBox<f64>,
    lat_res: f64,
    lon_res: f64,
}

impl ElevationGrid {
    pub fn new (heights: Array2<f64>, bounds: BoundingBox<f64>, lat_res: f64, lon_res: f64) -> Self {
        ElevationGrid { heights, bounds, lat_res, lon_res }
    }

    /// resolution derived from bounds span and grid extent
    pub fn from_extent (heights: Array2<f64>, bounds: BoundingBox<f64>) -> Self {
        let (rows, cols) = heights.dim();
        let lat_res = if rows > 0 { bounds.height() / rows as f64 } else { 0.0 };
        let lon_res = if cols > 0 { bounds.width() / cols as f64 } else { 0.0 };
        ElevationGrid { heights, bounds, lat_res, lon_res }
    }

    pub fn empty () -> Self {
        ElevationGrid::new( Array2::zeros((0,0)), BoundingBox::new(0.0, 0.0, 0.0, 0.0), 0.0, 0.0)
    }

    /// grid with the same height everywhere
    pub fn flat (bounds: BoundingBox<f64>, rows: usize, cols: usize, height: f64) -> Self {
        Self::from_extent( Array2::from_elem((rows,cols), height), bounds)
    }

    pub fn rows (&self) -> usize { self.heights.nrows() }
    pub fn cols (&self) -> usize { self.heights.ncols() }
    pub fn is_empty (&self) -> bool { self.heights.is_empty() }
    pub fn bounds (&self) -> &BoundingBox<f64> { &self.bounds }
    pub fn lat_resolution (&self) -> f64 { self.lat_res }
    pub fn lon_resolution (&self) -> f64 { self.lon_res }
    pub fn heights (&self) -> &Array2<f64> { &self.heights }

    /// terrain height at the given position, 0 if the grid is empty or the position is outside of the (inclusive) bounds
    pub fn get_height_at (&self, lat: f64, lon: f64) -> f64 {
        if self.is_empty() || !(self.lat_res > 0.0 && self.lon_res > 0.0) || !self.bounds.contains(lon, lat) {
            return 0.0
        }

        let row = cell_index( (lat - self.bounds.south) / self.lat_res, self.rows());
        let col = cell_index( (lon - self.bounds.west) / self.lon_res, self.cols());
        self.heights[[row,col]]
    }

    /// (lat,lon,height) of all cells with centers inside the inclusive query range, row by row from south-west
    pub fn get_heights_in_area (&self, min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Vec<(f64,f64,f64)> {
        let mut list = Vec::new();
        if self.is_empty() || !(self.lat_res > 0.0 && self.lon_res > 0.0) {
            return list
        }

        let south = self.bounds.south;
        let west = self.bounds.west;
        let Some((r0,r1)) = center_range( min_lat, max_lat, south, self.lat_res, self.rows()) else { return list };
        let Some((c0,c1)) = center_range( min_lon, max_lon, west, self.lon_res, self.cols()) else { return list };

        for row in r0..=r1 {
            let lat = south + (row as f64 + 0.5) * self.lat_res;
            if lat < min_lat || lat > max_lat { continue }

            for col in c0..=c1 {
                let lon = west + (col as f64 + 0.5) * self.lon_res;
                if lon >= min_lon && lon <= max_lon {
                    list.push( (lat, lon, self.heights[[row,col]]) );
                }
            }
        }
        list
    }

    /// (min,max) height of all cells, None for an empty grid
    pub fn height_range (&self) -> Option<(f64,f64)> {
        self.heights.iter().fold( None, |acc, &h| match acc {
            None => Some((h,h)),
            Some((lo,hi)) => Some((lo.min(h), hi.max(h)))
        })
    }
}

fn cell_index (x: f64, len: usize) -> usize {
    (x.floor().max(0.0) as usize).min(len - 1)
}

/// candidate index range (widened by one cell on each side, clamped) for cells whose centers are within [lo,hi]
fn center_range (lo: f64, hi: f64, origin: f64, res: f64, len: usize) -> Option<(usize,usize)> {
    if !(lo <= hi) { return None }

    let i0 = ((lo - origin) / res - 0.5).floor() - 1.0;
    let i1 = ((hi - origin) / res - 0.5).ceil() + 1.0;
    if i1 < 0.0 || i0 > (len - 1) as f64 { return None }

    Some( (i0.max(0.0) as usize, (i1.max(0.0) as usize).min(len - 1)) )
}

/* #endregion elevation grid */

/// shared, swappable reference to the current grid. Readers take a snapshot with [`TerrainHandle::current`]
/// that stays valid while a new grid is swapped in
#[derive(Debug)]
pub struct TerrainHandle {
    grid: RwLock<Arc<ElevationGrid>>,
}

impl TerrainHandle {
    pub fn new (grid: ElevationGrid) -> Self {
        TerrainHandle { grid: RwLock::new( Arc::new(grid)) }
    }

    pub fn current (&self) -> Arc<ElevationGrid> {
        let guard = self.grid.read().unwrap_or_else( |e| e.into_inner());
        guard.clone()
    }

    /// swap in a new grid and return the previous one
    pub fn replace (&self, grid: ElevationGrid) -> Arc<ElevationGrid> {
        let mut guard = self.grid.write().unwrap_or_else( |e| e.into_inner());
        std::mem::replace( &mut *guard, Arc::new(grid))
    }
}

impl Default for TerrainHandle {
    fn default() -> Self { TerrainHandle::new( ElevationGrid::empty()) }
}
