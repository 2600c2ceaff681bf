//! OpenSky (.org) specific code
//!
//! Only the anonymous `/api/states/all` endpoint is used: one call returns a `StateList`
//! snapshot of every aircraft currently known.
//!

use std::str::FromStr;
use std::time::Duration;

use clap::{crate_name, crate_version};
use reqwest::blocking::Client;
use tracing::{debug, trace};

use planespot_formats::Format;

use crate::{http_get, AccessError, FetchError, Fetchable, Site};

/// Default request timeout
const TIMEOUT: Duration = Duration::from_secs(30);

/// This is the Opensky client/source struct.
///
#[derive(Clone, Debug)]
pub struct Opensky {
    /// Input formats
    pub format: Format,
    /// Base site url taken from config
    pub base_url: String,
    /// Add this to `base_url` to fetch data
    pub get: String,
    /// reqwest blocking client
    pub client: Client,
}

impl Opensky {
    #[tracing::instrument]
    pub fn new() -> Self {
        trace!("opensky::new");

        Opensky {
            format: Format::Opensky,
            base_url: "".to_owned(),
            get: "".to_owned(),
            client: Client::new(),
        }
    }

    /// Load some data from in-memory loaded config
    ///
    #[tracing::instrument(skip(self))]
    pub fn load(&mut self, site: &Site) -> Result<&mut Self, AccessError> {
        trace!("opensky::load");

        self.format = Format::from_str(&site.format)
            .map_err(|_| AccessError::BadParam(format!("format {}", site.format)))?;
        self.base_url = site.base_url.to_owned();
        self.get = site
            .route("get")
            .ok_or_else(|| AccessError::BadParam("no get route".to_string()))?
            .to_owned();

        let timeout = site.timeout.map_or(TIMEOUT, Duration::from_secs);
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }
}

impl Default for Opensky {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetchable for Opensky {
    fn name(&self) -> String {
        "opensky".to_string()
    }

    /// Single call API
    ///
    #[tracing::instrument(skip(self))]
    fn fetch(&self) -> Result<String, FetchError> {
        trace!("opensky::fetch");

        let url = format!("{}{}", self.base_url, self.get);
        trace!("Fetching data from {}…", url);

        let resp = http_get!(self.client, &url)?;
        debug!("{:?}", &resp);

        // Check status
        //
        let code = resp.status();
        if !code.is_success() {
            return Err(FetchError::Status {
                code: code.as_u16(),
                url,
            });
        }

        trace!("Fetching raw data");
        Ok(resp.text()?)
    }

    fn format(&self) -> Format {
        self.format
    }
}
