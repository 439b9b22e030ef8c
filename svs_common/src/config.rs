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

//! RON based configuration loading. Config structs are plain serde types, normally with
//! `#[serde(default)]` so that config files only have to specify what differs from the defaults

use std::{fs::File, io::Read, path::Path};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type ConfigResult<T> = std::result::Result<T,ConfigError>;

#[derive(Error,Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    ConfigFileNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParseError(String),

    #[error("config IO error: {0}")]
    IOError( #[from] std::io::Error),
}

/// load and deserialize a RON config file
pub fn load_config <C: DeserializeOwned> (pathname: impl AsRef<Path>)->ConfigResult<C> {
    let path = pathname.as_ref();
    if path.is_file() {
        let mut file = File::open(path)?;
        let len = file.metadata()?.len();
        let mut contents = String::with_capacity(len as usize);
        file.read_to_string(&mut contents)?;
        config_from_str( contents.as_str())
    } else {
        Err( ConfigError::ConfigFileNotFound(path.as_os_str().to_string_lossy().to_string()) )
    }
}

pub fn config_from_str <C: DeserializeOwned> (s: &str)->ConfigResult<C> {
    ron::from_str::<C>(s).map_err(|e| ConfigError::ConfigParseError(format!("{:?}", e)))
}

/// load config from an optional path, falling back to `C::default()` if none is given
pub fn load_config_or_default <C: DeserializeOwned + Default> (pathname: Option<impl AsRef<Path>>)->ConfigResult<C> {
    match pathname {
        Some(path) => load_config(path),
        None => Ok(C::default())
    }
}
