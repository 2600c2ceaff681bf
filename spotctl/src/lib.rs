//! Library part of the `spotctl` utility.
//!
//! This library includes the search for the nearest aircraft and its report, the light-on
//! duration utility and the code behind every sub-command.  Coordinates and locations live in
//! `planespot-common`, the Opensky data format in `planespot-formats` and the way to fetch it
//! in `planespot-sources`.
//!

use clap::{crate_name, crate_version};

// Re-export
//
pub use cli::*;
pub use cmds::*;
pub use error::*;
pub use light::*;
pub use report::*;
pub use search::*;

mod cli;
mod cmds;
mod error;
mod light;
mod report;
mod search;

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", crate_name!(), crate_version!())
}
