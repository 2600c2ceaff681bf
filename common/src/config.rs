//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for various configuration files for
//! `planespot`.  This is a configuration file/struct neutral loading engine, `load()` reads the
//! proper file, the one in the default directory or the built-in copy, and remembers where
//! it came from.
//!
//! This encapsulates the configuration file, available with `.inner()` or `.into_inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use eyre::{eyre, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::makepath;

/// Main name for the directory base
pub const TAG: &str = "planespot";

/// Every configuration file carries a `version` we check against what the code expects.
///
pub trait Versioned {
    /// Version the code understands
    const VERSION: usize;

    /// Version found in the file
    fn version(&self) -> usize;
}

/// Where the data actually came from.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Origin {
    /// Specified on the command-line or found in the config directory
    File(PathBuf),
    /// Built into the binary
    Builtin,
}

/// Generic configuration file, `T` being the struct the HCL is deserialized into.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned + Versioned> {
    /// Where we got it from
    origin: Origin,
    inner: T,
}

/// Returns the default config directory, `$HOME/.config/planespot` on UNIX and
/// `%LOCALAPPDATA%\planespot` on Windows.
///
#[tracing::instrument]
pub fn config_dir(tag: &str) -> Option<PathBuf> {
    let base = BaseDirs::new()?;

    #[cfg(unix)]
    let base = base.home_dir().join(".config");

    #[cfg(windows)]
    let base = base.data_local_dir().to_path_buf();

    debug!("base = {base:?}");
    Some(makepath!(base, tag))
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned + Versioned,
{
    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI (must exist)
    /// - `name` in the default basedir (based on $HOME or $LOCALAPPDATA)
    /// - `builtin`
    ///
    #[tracing::instrument(skip(builtin))]
    pub fn load(fname: Option<&Path>, name: &str, builtin: &str) -> Result<ConfigFile<T>> {
        let basedir = config_dir(TAG);

        let origin = match fname {
            Some(fname) if fname.exists() => Origin::File(fname.canonicalize()?),
            Some(fname) => return Err(eyre!("Unknown config file {:?}", fname)),
            None => match &basedir {
                Some(dir) if dir.join(name).exists() => Origin::File(dir.join(name)),
                _ => Origin::Builtin,
            },
        };

        trace!("Loading config from {origin:?}");

        let data = match &origin {
            Origin::File(fname) => fs::read_to_string(fname)?,
            Origin::Builtin => builtin.to_owned(),
        };
        debug!("string data = {data}");

        let inner: T = hcl::from_str(&data)?;
        debug!("struct data = {inner:?}");

        if inner.version() != T::VERSION {
            return Err(eyre!(
                "Bad file version {} in {:?}, expected {}",
                inner.version(),
                origin,
                T::VERSION
            ));
        }

        Ok(ConfigFile {
            origin,
            inner,
        })
    }

    /// Where did the data come from?
    ///
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consume and return the inner configuration
    ///
    pub fn into_inner(self) -> T {
        self.inner
    }
}
