//! Access methods, one module per kind of site.
//!

pub use opensky::*;

mod opensky;
