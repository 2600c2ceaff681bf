//!  Module that defines what is a site (website, API endpoint, etc.)
//!
//! This is used to configure the list of possible sources through `sources.hcl`.
//!
//! You can define a set of possible routes for a site depending on how the API/site is
//! designed, only `get` is used for now.
//!

use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use planespot_formats::Format;

use crate::{AccessError, Fetchable, Opensky, Sources};

/// Describe what a site is.
///
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Site {
    /// Type of input
    pub format: String,
    /// Base URL (to avoid repeating)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: Option<u64>,
    /// Different URLs available
    pub routes: Option<BTreeMap<String, String>>,
}

impl Site {
    /// Load site by checking whether it is present in the configuration file
    ///
    #[tracing::instrument(skip(cfg))]
    pub fn load(name: &str, cfg: &Sources) -> Result<Box<dyn Fetchable>, AccessError> {
        trace!("Loading site {}", name);
        match cfg.get(name) {
            Some(site) => match site.format() {
                Format::Opensky => {
                    let mut s = Opensky::new();
                    s.load(site)?;
                    Ok(Box::new(s))
                }
                _ => Err(AccessError::InvalidSite(name.to_string())),
            },
            None => Err(AccessError::UnknownSite(name.to_string())),
        }
    }

    /// Return the site format, `Format::None` if unknown.
    ///
    pub fn format(&self) -> Format {
        Format::from_str(&self.format).unwrap_or_default()
    }

    /// Return the list of routes
    ///
    pub fn list(&self) -> Vec<&String> {
        match &self.routes {
            Some(routes) => routes.keys().collect::<Vec<_>>(),
            _ => vec![],
        }
    }

    /// Check whether site has the mentioned route
    ///
    pub fn has(&self, meth: &str) -> bool {
        match &self.routes {
            Some(routes) => routes.contains_key(meth),
            _ => false,
        }
    }

    /// Retrieve a route
    ///
    pub fn route(&self, key: &str) -> Option<&String> {
        match &self.routes {
            Some(routes) => routes.get(key),
            _ => None,
        }
    }
}

impl Display for Site {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ format={} url={} routes={:?} }}",
            self.format, self.base_url, self.routes
        )
    }
}
