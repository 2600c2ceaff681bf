//! Sources configuration management and loading
//!
use std::collections::btree_map::Keys;
use std::collections::BTreeMap;
use std::path::Path;

use eyre::Result;
use serde::Deserialize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::trace;

use planespot_common::{ConfigFile, Versioned};

use crate::Site;

/// Default configuration filename
const CONFIG: &str = "sources.hcl";

/// List of sources, this is the only exposed struct from here.
///
#[derive(Debug, Default, Deserialize)]
pub struct Sources {
    version: usize,
    site: BTreeMap<String, Site>,
}

impl Versioned for Sources {
    const VERSION: usize = 1;

    fn version(&self) -> usize {
        self.version
    }
}

impl Sources {
    /// Load configuration from either the specified file, the default one or the built-in
    /// copy.
    ///
    #[tracing::instrument]
    pub fn load(fname: Option<&Path>) -> Result<Sources> {
        trace!("Loading sources");

        let cfg = ConfigFile::<Sources>::load(fname, CONFIG, include_str!("sources.hcl"))?;
        Ok(cfg.into_inner())
    }

    /// Wrap `get`
    ///
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Site> {
        self.site.get(name)
    }

    /// Wrap `is_empty()`
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
    }

    /// Wrap `len()`
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.site.len()
    }

    /// Wrap `keys()`
    ///
    #[inline]
    pub fn keys(&self) -> Keys<'_, String, Site> {
        self.site.keys()
    }

    /// List all sources in a table
    ///
    pub fn list(&self) -> Result<String> {
        let header = vec!["Name", "Type", "Format", "URL", "Routes"];

        let mut builder = Builder::default();
        builder.push_record(header);

        self.site.iter().for_each(|(name, site)| {
            let dtype = if site.has("get") { "fetch" } else { "none" };
            let routes = site
                .list()
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            builder.push_record([
                name.clone(),
                dtype.to_string(),
                site.format().to_string(),
                site.base_url.clone(),
                routes,
            ]);
        });

        let allf = builder.build().with(Style::modern()).to_string();
        Ok(format!("List all sources:\n{allf}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_load_builtin() -> Result<()> {
        let src: Sources = hcl::from_str(include_str!("sources.hcl"))?;
        assert_eq!(1, src.version());
        assert_eq!(1, src.len());
        assert!(!src.is_empty());
        assert_eq!(vec!["opensky"], src.keys().collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_sources_load_missing_file() {
        let src = Sources::load(Some(Path::new("/nonexistent/sources.hcl")));
        assert!(src.is_err());
    }

    #[test]
    fn test_sources_list() -> Result<()> {
        let src: Sources = hcl::from_str(include_str!("sources.hcl"))?;
        let str = src.list()?;
        assert!(str.contains("opensky"));
        assert!(str.contains("https://opensky-network.org"));
        Ok(())
    }
}
