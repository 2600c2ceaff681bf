use serde::{Deserialize, Serialize};
use strum::EnumString;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// The `Format` enum represents the data formats a site can send us.
///
#[derive(
    Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq, strum::Display, EnumString, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    None,
    /// ADS-B state vectors from the Opensky API
    Opensky,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::Opensky, Format::from_str("opensky").unwrap());
        assert_eq!(Format::Opensky, Format::from_str("OpenSky").unwrap());
        assert!(Format::from_str("cat21").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!("opensky", Format::Opensky.to_string());
        assert_eq!("none", Format::None.to_string());
    }
}
