//! Definition of the data formats
//!
//! This module makes the link between what a site sends us (`Format`) and the `Aircraft` list
//! the rest of the code works on.
//!
//! To add a new format, insert here the different hooks & names and a `FORMAT.rs`
//! file which will define the input format and the transformations needed.
//!

// Re-export for convenience
//
pub use aircraft::*;
pub use error::*;
pub use format::*;
pub use opensky::*;

mod aircraft;
mod error;
mod format;
mod opensky;
