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

/// clap derive based command line definition that is parsed lazily into a static
/// ```ignore
/// define_cli! { ARGS [about="get_height - terrain height query"] =
///   config: Option<String> [help="path of config file", long, short],
///   lat: f64               [help="latitude in degrees", allow_hyphen_values = true]
/// }
///
/// fn main () {
///    println!("{}", ARGS.lat);
/// }
/// ```
/// generates a `#[derive(clap::Parser)] struct CliOpts` with one `#[arg(..)]` annotated field per entry and
/// `lazy_static!{ static ref ARGS: CliOpts = CliOpts::parse(); }`. Using crates need `clap` and `lazy_static`
/// dependencies. Note that `-h` is only processed once ARGS is accessed
#[macro_export]
macro_rules! define_cli {
    ($name:ident [ $( $sopt:ident $(= $sx:expr)? ),* ] = $( $( #[$meta:meta] )? $fname:ident : $ftype:ty [ $( $fopt:ident $(= $fx:expr)?),* ] ),* ) => {
        use clap::Parser;
        use lazy_static::lazy_static;

        #[derive(Parser)]
        #[command( $( $sopt $(=$sx)? ),* )]
        struct CliOpts {
            $(
                #[arg( $( $fopt $(=$fx)? ),* )]
                $(#[$meta])?
                $fname : $ftype,
            )*
        }
        lazy_static! { static ref $name: CliOpts = CliOpts::parse(); }
    }
}
