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
#![allow(unused,uncommon_codepoints)]

//! common geodetic, math and infrastructure functions that are shared between the SVS crates

use std::f64::consts::{PI as STD_PI};

use serde::{Serialize,Deserialize};
use num::Num;

pub mod collections;
pub mod macros;
pub mod config;
pub mod angle;
pub mod geo_constants;
pub mod cartesian3;
pub mod cartographic;
pub mod attitude;

// syntactic sugar - this is just more readable in many cases
#[inline(always)] pub fn sin2(x:f64) -> f64 { let sin_x = x.sin(); sin_x*sin_x }
#[inline(always)] pub fn pow3(x:f64) -> f64 { x*x*x }

/// a generic bounding box without semantics for the coordinate type
#[repr(C)]
#[derive(Debug,Copy,Clone,Serialize,Deserialize,PartialEq)]
pub struct BoundingBox <T: Num> {
    pub west: T,
    pub south: T,
    pub east: T,
    pub north: T
}

impl <T: Num + Copy + PartialOrd> BoundingBox<T> {
    pub fn new(west: T, south: T, east: T, north: T)->Self {
        BoundingBox{ west, south, east, north}
    }

    pub fn from_wsen<N> (wsen: &[N;4]) -> BoundingBox<T> where N: Num + Copy + Into<T> {
        BoundingBox::<T>{
            west: wsen[0].into(),
            south: wsen[1].into(),
            east: wsen[2].into(),
            north: wsen[3].into()
        }
    }

    pub fn width (&self) -> T { self.east - self.west }
    pub fn height (&self) -> T { self.north - self.south }

    /// inclusive containment check. x is the east/west (longitude) coordinate
    pub fn contains (&self, x: T, y: T) -> bool {
        x >= self.west && x <= self.east && y >= self.south && y <= self.north
    }
}

impl BoundingBox<f64> {
    /// parse a "west,south,east,north" string (e.g. the MBTiles 'bounds' metadata value)
    pub fn parse_wsen (s: &str) -> Option<BoundingBox<f64>> {
        let vs: Vec<f64> = s.split(',').map( |p| p.trim().parse::<f64>()).collect::<Result<_,_>>().ok()?;
        if vs.len() == 4 && vs.iter().all( |v| v.is_finite()) {
            Some( BoundingBox::new( vs[0], vs[1], vs[2], vs[3]) )
        } else {
            None
        }
    }

    pub fn is_empty (&self) -> bool {
        !(self.east > self.west && self.north > self.south)
    }
}

pub const PI: f64 = STD_PI;
