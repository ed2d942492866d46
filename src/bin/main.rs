use std::path::Path;

use clap::Parser;
use color_eyre::Result;
use env_logger::Target;
use msbuild_selector::{
    cli::input::CliArgs, utils::logger::config_logger, worker::run_selector,
};

/// The entry point for the binary generated
/// for the program
fn main() -> Result<()> {
    color_eyre::install()?;
    let cli_args = CliArgs::parse();
    config_logger(cli_args.verbose, Target::Stderr)?;
    log::debug!("Launching a new MSBuild Selector invocation");
    run_selector(&cli_args, Path::new("."))?;

    Ok(())
}
