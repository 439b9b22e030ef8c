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

use std::{fs, path::{Path,PathBuf}};
use tracing::debug;
use crate::TerrainConfig;

pub const MBTILES_EXT: &str = "mbtiles";

/// finds terrain tile set files. Resolution order:
///  1. `source_ref` is a path to an existing file
///  2. `<preferred_dir>/<source_ref>`, or the first *.mbtiles file in preferred_dir
///  3. the first *.mbtiles file in any of the search dirs
///  4. `<bundled_dir>/<source_ref>`
#[derive(Debug,Clone,Default)]
pub struct TerrainLocator {
    pub preferred_dir: Option<PathBuf>,
    pub search_dirs: Vec<PathBuf>,
    pub bundled_dir: Option<PathBuf>,
}

impl TerrainLocator {
    pub fn new (preferred_dir: Option<PathBuf>, search_dirs: Vec<PathBuf>, bundled_dir: Option<PathBuf>) -> Self {
        TerrainLocator { preferred_dir, search_dirs, bundled_dir }
    }

    pub fn from_config (config: &TerrainConfig) -> Self {
        TerrainLocator::new( config.preferred_dir.clone(), config.search_dirs.clone(), config.bundled_dir.clone())
    }

    pub fn resolve (&self, source_ref: Option<&str>) -> Option<PathBuf> {
        let name = source_ref.map(str::trim).filter(|s| !s.is_empty());

        if let Some(name) = name {
            let path = Path::new(name);
            if path.is_file() {
                debug!("terrain source is explicit path {}", path.display());
                return Some(path.to_path_buf())
            }
        }

        if let Some(dir) = &self.preferred_dir {
            if let Some(path) = name.map(|n| dir.join(n)).filter(|p| p.is_file()) {
                debug!("terrain source {} found in preferred dir", path.display());
                return Some(path)
            }
            if let Some(path) = first_mbtiles_file(dir) {
                debug!("using terrain source {} from preferred dir", path.display());
                return Some(path)
            }
        }

        for dir in &self.search_dirs {
            if let Some(path) = first_mbtiles_file(dir) {
                debug!("using discovered terrain source {}", path.display());
                return Some(path)
            }
        }

        if let (Some(dir), Some(name)) = (&self.bundled_dir, name) {
            let path = dir.join(name);
            if path.is_file() {
                debug!("using bundled terrain source {}", path.display());
                return Some(path)
            }
        }

        None
    }
}

/// first (by name) *.mbtiles file in `dir`, extension is matched case insensitive.
/// Unreadable directories are treated as empty
pub fn first_mbtiles_file (dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;

    let mut files: Vec<PathBuf> = entries
        .filter_map( |e| e.ok())
        .map( |e| e.path())
        .filter( |p| p.is_file() && has_mbtiles_ext(p))
        .collect();
    files.sort();
    files.into_iter().next()
}

fn has_mbtiles_ext (path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).map( |e| e.eq_ignore_ascii_case(MBTILES_EXT)).unwrap_or(false)
}
