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

//! tile sources. [`MbTiles`] reads MBTiles style SQLite containers through a read-only sqlx pool

use std::path::{Path,PathBuf};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug,info};
use svs_common::BoundingBox;

use crate::errors::{Result, source_format, terrain_unavailable};

/// the part of a tile set's metadata table we need to build a grid
#[derive(Debug,Clone,Default,PartialEq)]
pub struct TileSetMetadata {
    pub name: Option<String>,
    pub format: Option<String>,
    pub bounds: Option<BoundingBox<f64>>,
    pub min_zoom: u32,
    pub max_zoom: u32,
}

impl TileSetMetadata {
    /// build from (name,value) rows. Unknown keys are ignored, unparsable zoom values become 0
    pub fn from_pairs<I,K,V> (pairs: I) -> Self where I: IntoIterator<Item=(K,V)>, K: AsRef<str>, V: AsRef<str> {
        let mut md = TileSetMetadata::default();

        for (k,v) in pairs {
            let v = v.as_ref().trim();
            match k.as_ref() {
                "name" => md.name = Some(v.to_string()),
                "format" => md.format = Some(v.to_string()),
                "bounds" => md.bounds = BoundingBox::parse_wsen(v),
                "minzoom" => md.min_zoom = v.parse().unwrap_or(0),
                "maxzoom" => md.max_zoom = v.parse().unwrap_or(0),
                _ => {}
            }
        }
        md
    }

    /// the bounds if they are present and not degenerated
    pub fn valid_bounds (&self) -> Result<BoundingBox<f64>> {
        match self.bounds {
            Some(bbox) if !bbox.is_empty() => Ok(bbox),
            Some(bbox) => Err( source_format( format!("empty bounds {bbox:?}"))),
            None => Err( source_format("missing or invalid 'bounds' metadata"))
        }
    }
}

/// abstraction for anything that can provide metadata and tiles addressed in TMS row order
#[async_trait]
pub trait TileSource: Send + Sync {
    async fn metadata (&self) -> Result<TileSetMetadata>;

    /// raw tile payload, `Ok(None)` if there is no such tile
    async fn tile (&self, zoom: u32, column: u32, tms_row: u32) -> Result<Option<Vec<u8>>>;
}

/// tile table names we accept, in order of preference
pub const DEFAULT_TILE_TABLES: &[&str] = &["tiles", "this"];

pub struct MbTiles {
    path: PathBuf,
    pool: SqlitePool,
    tile_table: String,
    tile_query: String,
}

impl MbTiles {
    /// open `path` read-only and detect the first existing table out of `tile_tables`
    pub async fn open<S: AsRef<str>> (path: impl AsRef<Path>, tile_tables: &[S]) -> Result<MbTiles> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err( terrain_unavailable( path.display()))
        }

        let opts = SqliteConnectOptions::new().filename(path).read_only(true);
        let pool = SqlitePoolOptions::new().max_connections(1).connect_with(opts).await?;

        let mut tile_table: Option<String> = None;
        for t in tile_tables {
            let t = t.as_ref();
            let found: Option<String> = sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type IN ('table','view') AND name = ?")
                .bind(t)
                .fetch_optional(&pool).await?;
            if found.is_some() {
                tile_table = Some(t.to_string());
                break;
            }
        }

        let Some(tile_table) = tile_table else {
            pool.close().await;
            let names: Vec<&str> = tile_tables.iter().map(|t| t.as_ref()).collect();
            return Err( source_format( format!("no tile table {names:?} in {}", path.display())))
        };
        debug!("opened {} with tile table '{}'", path.display(), tile_table);

        let tile_query = format!("SELECT tile_data FROM \"{}\" WHERE zoom_level = ? AND tile_column = ? AND tile_row = ?",
                                 tile_table.replace('"', "\"\""));

        Ok( MbTiles { path: path.to_path_buf(), pool, tile_table, tile_query } )
    }

    pub fn path (&self) -> &Path { &self.path }
    pub fn tile_table (&self) -> &str { &self.tile_table }

    pub async fn close (self) {
        self.pool.close().await
    }
}

#[async_trait]
impl TileSource for MbTiles {
    async fn metadata (&self) -> Result<TileSetMetadata> {
        let rows: Vec<(String,String)> = sqlx::query_as("SELECT name, CAST(value AS TEXT) FROM metadata WHERE value IS NOT NULL")
            .fetch_all(&self.pool).await
            .map_err( |e| source_format( format!("cannot read metadata of {}: {e}", self.path.display())))?;

        let md = TileSetMetadata::from_pairs(rows);
        info!("{} metadata: bounds={:?} zoom={}..{}", self.path.display(), md.bounds, md.min_zoom, md.max_zoom);
        Ok(md)
    }

    async fn tile (&self, zoom: u32, column: u32, tms_row: u32) -> Result<Option<Vec<u8>>> {
        let data: Option<Vec<u8>> = sqlx::query_scalar(&self.tile_query)
            .bind(zoom as i64)
            .bind(column as i64)
            .bind(tms_row as i64)
            .fetch_optional(&self.pool).await
            .map_err( |e| source_format( format!("tile query failed on {}: {e}", self.path.display())))?;
        Ok(data)
    }
}
