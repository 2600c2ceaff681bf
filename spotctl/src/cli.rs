//! Module describing all possible commands and sub-commands to the `spotctl` main driver
//!
//! We have two main commands:
//!
//! - `nearest`
//! - `light`
//!
//! `nearest` fetches one snapshot of every aircraft currently tracked by a site (Opensky by
//! default) or read a saved one from a file, then finds and displays the one closest to the
//! given position.  The position is either a pair of coordinates like "40.7128 N" "74.0060 W"
//! or the name of a location from `locations.hcl`.
//!
//! `light` is the small utility computing for how long a light stays on given a list of
//! entrance and exit times.
//!
//! `list` displays the configured sites and locations and `completion` is here just to
//! configure the various shells completion system.
//!

use std::path::PathBuf;

use clap::{
    crate_authors, crate_description, crate_name, crate_version, Parser, Subcommand, ValueEnum,
};
use clap_complete::shells::Shell;

use crate::Strategy;

/// CLI options
#[derive(Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// Sources configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Locations file.
    #[clap(short = 'L', long)]
    pub locations: Option<PathBuf>,
    /// Verbose mode.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Hierarchical display of traces.
    #[clap(long)]
    pub tree: bool,
    /// Also write traces into hourly files in that directory.
    #[clap(long)]
    pub log_dir: Option<PathBuf>,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `completion SHELL`
/// `light EVENTS...`
/// `list (sites|locations)`
/// `nearest [--site S] [--exhaustive] [--input FILE] (LAT LON | --location NAME)`
/// `version`
///
#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// Generate Completion stuff
    Completion(ComplOpts),
    /// Sum the time a light stays on
    Light(LightOpts),
    /// List sites and locations
    List(ListOpts),
    /// Find the aircraft nearest to a position
    Nearest(NearestOpts),
    /// List all package versions
    Version,
}

// ------

/// Options for the nearest aircraft.
///
#[derive(Debug, Parser)]
pub struct NearestOpts {
    /// Site to fetch from
    #[clap(short = 's', long, default_value = "opensky")]
    pub site: String,
    /// Use a named location instead of coordinates
    #[clap(short = 'l', long, conflicts_with_all = ["lat", "lon"])]
    pub location: Option<String>,
    /// Read a saved snapshot instead of fetching one
    #[clap(short = 'i', long)]
    pub input: Option<PathBuf>,
    /// Compute every distance instead of pruning
    #[clap(long)]
    pub exhaustive: bool,
    /// Output as JSON
    #[clap(short = 'j', long)]
    pub json: bool,
    /// Latitude like "40.7128 N"
    #[clap(required_unless_present = "location", allow_hyphen_values = true)]
    pub lat: Option<String>,
    /// Longitude like "74.0060 W"
    #[clap(required_unless_present = "location", allow_hyphen_values = true)]
    pub lon: Option<String>,
}

impl NearestOpts {
    /// Map `--exhaustive` to the search strategy
    ///
    pub fn strategy(&self) -> Strategy {
        if self.exhaustive {
            Strategy::Exhaustive
        } else {
            Strategy::Pruned
        }
    }
}

// ------

/// Options for the light utility
///
#[derive(Debug, Parser)]
pub struct LightOpts {
    /// Times, first an entrance then alternating exits and entrances
    #[clap(required = true, allow_hyphen_values = true, num_args = 1..)]
    pub events: Vec<String>,
}

// ------

/// Options to generate completion files at runtime
///
#[derive(Debug, Parser)]
pub struct ComplOpts {
    #[clap(value_parser)]
    pub shell: Shell,
}

// ------

/// All `list` sub-commands:
///
/// `list sites`
/// `list locations`
///
#[derive(Debug, Parser)]
pub struct ListOpts {
    #[clap(value_parser)]
    pub cmd: ListSubCommand,
    /// Size of the box displayed around locations, in km
    #[clap(short = 'd', long, default_value = "50")]
    pub distance: f64,
}

/// These are the sub-commands for `list`
///
#[derive(Clone, Copy, Debug, Ord, PartialOrd, Eq, PartialEq, ValueEnum)]
pub enum ListSubCommand {
    /// List all sites from `sources.hcl`
    Sites,
    /// List all locations from `locations.hcl`
    Locations,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_debug_assert() {
        Opts::command().debug_assert();
    }

    #[test]
    fn test_nearest_coordinates() {
        let opts = Opts::try_parse_from(["spotctl", "nearest", "40.0 N", "-74.0"]).unwrap();
        match opts.subcmd {
            SubCommand::Nearest(nopts) => {
                assert_eq!(Some("40.0 N".to_string()), nopts.lat);
                assert_eq!(Some("-74.0".to_string()), nopts.lon);
                assert_eq!("opensky", nopts.site);
                assert_eq!(Strategy::Pruned, nopts.strategy());
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_nearest_location() {
        let opts =
            Opts::try_parse_from(["spotctl", "nearest", "--location", "bxl", "--exhaustive"])
                .unwrap();
        match opts.subcmd {
            SubCommand::Nearest(nopts) => {
                assert_eq!(Some("bxl".to_string()), nopts.location);
                assert_eq!(None, nopts.lat);
                assert_eq!(Strategy::Exhaustive, nopts.strategy());
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn test_nearest_missing_position() {
        assert!(Opts::try_parse_from(["spotctl", "nearest"]).is_err());
        assert!(Opts::try_parse_from(["spotctl", "nearest", "40.0 N"]).is_err());
    }
}
