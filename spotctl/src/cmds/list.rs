//! This is the module handling the `list` sub-command.
//!

use std::collections::BTreeMap;

use eyre::Result;
use tracing::trace;

use planespot_common::{list_locations, Location};
use planespot_sources::Sources;

use crate::{ListOpts, ListSubCommand};

/// Display either the sites or the locations.
///
#[tracing::instrument(skip(srcs, locs))]
pub fn list_from(
    lopts: &ListOpts,
    srcs: &Sources,
    locs: &BTreeMap<String, Location>,
) -> Result<String> {
    trace!("enter");

    match lopts.cmd {
        ListSubCommand::Sites => srcs.list(),
        ListSubCommand::Locations => list_locations(locs, lopts.distance),
    }
}
