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

//! web mercator (XYZ/TMS) tile math and RGB height tile decoding

use svs_common::{BoundingBox, PI};
use crate::errors::Result;

pub const DEFAULT_TILE_SIZE: u32 = 256;

/// zoom level that is used to load a tile set that covers [min_zoom,max_zoom], clamped to [lo,hi]
pub fn select_zoom (min_zoom: u32, max_zoom: u32, lo: u32, hi: u32) -> u32 {
    let z = (min_zoom as u64 + max_zoom as u64) / 2; // metadata values are not range checked
    (z as u32).max(lo).min(hi)
}

/// number of tiles along each axis at the given zoom level
#[inline]
pub fn tiles_per_axis (zoom: u32) -> u32 {
    1u32 << zoom.min(31)
}

/// XYZ tile x/y (y counting from north) that contains the given position.
/// Positions outside the mercator range are clamped to the first/last tile
pub fn tile_xy (lat_deg: f64, lon_deg: f64, zoom: u32) -> (u32,u32) {
    let n = tiles_per_axis(zoom) as f64;
    let lat = lat_deg.to_radians();

    let x = ((lon_deg + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat.tan() + 1.0/lat.cos()).ln() / PI) / 2.0 * n).floor();

    (clamp_tile_index(x, n), clamp_tile_index(y, n))
}

fn clamp_tile_index (i: f64, n: f64) -> u32 {
    if i.is_nan() { 0 } else { i.max(0.0).min(n - 1.0) as u32 }
}

/// TMS rows count from the south
#[inline]
pub fn tms_row (zoom: u32, tile_y: u32) -> u32 {
    tiles_per_axis(zoom) - 1 - tile_y.min( tiles_per_axis(zoom) - 1)
}

/// inclusive XYZ tile index range at a given zoom level
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct TileRange {
    pub zoom: u32,
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl TileRange {
    /// north-west corner gives the min tile, south-east corner the max tile
    pub fn for_bounds (bbox: &BoundingBox<f64>, zoom: u32) -> TileRange {
        let (min_x, min_y) = tile_xy( bbox.north, bbox.west, zoom);
        let (max_x, max_y) = tile_xy( bbox.south, bbox.east, zoom);
        TileRange { zoom, min_x, min_y, max_x: max_x.max(min_x), max_y: max_y.max(min_y) }
    }

    pub fn width (&self) -> u32 { self.max_x - self.min_x + 1 }
    pub fn height (&self) -> u32 { self.max_y - self.min_y + 1 }
    pub fn len (&self) -> usize { self.width() as usize * self.height() as usize }

    /// (x,y) of all tiles, row by row from north-west
    pub fn iter (&self) -> impl Iterator<Item=(u32,u32)> + use<> {
        let TileRange { min_x, min_y, max_x, max_y, .. } = *self;
        (min_y..=max_y).flat_map( move |y| (min_x..=max_x).map( move |x| (x,y)))
    }
}

/// height encoded in a tile pixel
#[inline]
pub fn rgb_height (r: u8, g: u8, b: u8, scale_factor: f64) -> f64 {
    (r as f64 + g as f64 * 256.0 + b as f64 * 65536.0) * scale_factor
}

/// decoded tile with heights in pixel row order (row 0 is the northern edge)
#[derive(Debug,Clone)]
pub struct HeightTile {
    pub width: u32,
    pub height: u32,
    pub heights: Vec<f64>,
}

impl HeightTile {
    #[inline]
    pub fn get (&self, px: u32, py: u32) -> f64 {
        self.heights[(py * self.width + px) as usize]
    }
}

/// decode a PNG/JPEG/WebP tile payload into heights
pub fn decode_height_tile (data: &[u8], scale_factor: f64) -> Result<HeightTile> {
    let img = image::load_from_memory(data)?.to_rgb8();
    let (width, height) = img.dimensions();
    let heights = img.pixels().map( |p| rgb_height( p[0], p[1], p[2], scale_factor)).collect();

    Ok( HeightTile { width, height, heights } )
}
