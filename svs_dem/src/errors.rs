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
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SvsDemError>;

#[derive(Error,Debug)]
pub enum SvsDemError {

    #[error("no terrain source found for: {0}")]
    TerrainUnavailable(String),

    #[error("invalid terrain source format: {0}")]
    SourceFormatError(String),

    // pass through for IO errors
    #[error("DEM IO error: {0}")]
    IOError( #[from] std::io::Error),

    #[error("DEM SQL error: {0}")]
    SqlError( #[from] sqlx::Error),

    #[error("DEM tile image error: {0}")]
    ImageError( #[from] image::ImageError),
}

impl SvsDemError {
    /// errors that are recovered by substituting a synthetic grid (as opposed to internal failures)
    pub fn is_source_error (&self)->bool {
        matches!( self, SvsDemError::TerrainUnavailable(_) | SvsDemError::SourceFormatError(_))
    }
}

pub fn terrain_unavailable<S: ToString> (src: S)->SvsDemError {
    SvsDemError::TerrainUnavailable(src.to_string())
}

pub fn source_format<S: ToString> (msg: S)->SvsDemError {
    SvsDemError::SourceFormatError(msg.to_string())
}
