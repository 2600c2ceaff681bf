use thiserror::Error;

/// Why a raw state vector could not be turned into an `Aircraft`.
///
/// These are expected (Opensky sends a lot of incomplete records) so they are never fatal.
///
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Missing field {0}")]
    Missing(&'static str),
    #[error("Field {0} is null")]
    Null(&'static str),
    #[error("Field {name} should be a {want}, got {got}")]
    WrongType {
        name: &'static str,
        want: &'static str,
        got: String,
    },
    #[error("Field {name} out of range: {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Misuse of an `Aircraft`.
///
#[derive(Debug, Error, PartialEq)]
pub enum AircraftError {
    #[error("Field {0} read before being set")]
    UninitializedField(&'static str),
}
