use std::io;

use clap::{crate_authors, crate_description, crate_version, CommandFactory, Parser};
use clap_complete::generate;
use eyre::Result;
use tracing::{info, trace};

use planespot_common::{init_logging, load_locations, verbosity};
use planespot_sources::Sources;
use spotctl::{find_nearest, light_from, list_from, Opts, SubCommand};

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    // Initialise logging.
    //
    init_logging(
        NAME,
        verbosity(opts.verbose),
        opts.tree,
        opts.log_dir.clone(),
    )?;

    // Banner
    //
    banner()?;

    handle_subcmd(&opts)
}

pub fn handle_subcmd(opts: &Opts) -> Result<()> {
    match &opts.subcmd {
        // Handle `nearest`
        //
        SubCommand::Nearest(nopts) => {
            trace!("nearest");

            let srcs = Sources::load(opts.config.as_deref())?;
            let locs = load_locations(opts.locations.as_deref())?;

            let str = find_nearest(nopts, &srcs, &locs)?;
            println!("{str}");
        }

        // Handle `light`
        //
        SubCommand::Light(lopts) => {
            trace!("light");

            let str = light_from(lopts)?;
            println!("{str}");
        }

        // Standalone completion generation
        //
        // NOTE: you can generate UNIX shells completion on Windows and vice-versa.  Not worth
        //       trying to limit depending on the OS.
        //
        SubCommand::Completion(copts) => {
            let generator = copts.shell;
            generate(generator, &mut Opts::command(), NAME, &mut io::stdout());
        }

        // Standalone `list` command
        //
        SubCommand::List(lopts) => {
            info!("Listing {:?}:", lopts.cmd);

            let srcs = Sources::load(opts.config.as_deref())?;
            let locs = load_locations(opts.locations.as_deref())?;

            let str = list_from(lopts, &srcs, &locs)?;
            println!("{str}");
        }

        // Standalone `version` command
        //
        SubCommand::Version => {
            eprintln!("Modules: ");
            eprintln!("\t{}", planespot_common::version());
            eprintln!("\t{}", planespot_formats::version());
            eprintln!("\t{}", planespot_sources::version());
            eprintln!("\t{}", spotctl::version());
        }
    }
    Ok(())
}

/// Display banner
///
fn banner() -> Result<()> {
    Ok(eprintln!(
        r##"
{}/{} by {}
{}
"##,
        NAME,
        VERSION,
        AUTHORS,
        crate_description!()
    ))
}
