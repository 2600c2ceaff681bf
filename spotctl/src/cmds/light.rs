//! This is the module handling the `light` sub-command.
//!

use eyre::Result;
use tracing::trace;

use crate::{describe, light_duration, parse_events, LightOpts};

/// Every argument can hold several times so we join them before parsing.
///
#[tracing::instrument]
pub fn light_from(lopts: &LightOpts) -> Result<String> {
    trace!("enter");

    let events = parse_events(&lopts.events.join(" "));
    let total = light_duration(&events)?;
    Ok(describe(total))
}
