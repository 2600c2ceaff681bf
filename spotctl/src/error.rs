//! Error module
//!

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("No aircraft to search")]
    NotFound,
}

#[derive(Debug, Error, PartialEq)]
pub enum LightError {
    #[error("Could not find a valid entrance time")]
    NoEntrance,
    #[error("Duration does not fit in 64 bits")]
    Overflow,
}
