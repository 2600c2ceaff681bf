//! Module to deal with different kind of sources we can connect to to fetch data.
//!
//! The different submodules deal with the differences between sources, only Opensky for now.
//!

use std::fmt::Debug;

use tracing::trace;

use planespot_formats::{Format, StateList};

// Re-export these modules for a shorted import path.
//
pub use access::*;
pub use config::*;
pub use error::*;
pub use site::*;

mod access;
mod config;
mod error;
mod site;

#[macro_use]
mod macros;

/// Return our version number
///
#[inline]
pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// This trait enables us to manage different ways of connecting and fetching data under
/// a single interface.
///
pub trait Fetchable: Debug {
    /// Name of the site
    fn name(&self) -> String;
    /// Fetch actual data
    fn fetch(&self) -> Result<String, FetchError>;
    /// Returns the input format
    fn format(&self) -> Format;
}

/// Fetch one snapshot from the site and decode it according to its format.
///
#[tracing::instrument]
pub fn fetch_states(site: &dyn Fetchable) -> Result<StateList, FetchError> {
    trace!("fetch_states");

    match site.format() {
        Format::Opensky => {
            let data = site.fetch()?;
            Ok(StateList::from_json(&data)?)
        }
        fmt => Err(FetchError::Format(fmt.to_string())),
    }
}
