use anyhow::Result;
use clap::Parser;
use tracing::debug;

use prd2beads::cli::{self, Args, CliConfig};
use prd2beads::ConversionError;

fn main() -> Result<()> {
    if let Err(err) = run(Args::parse()) {
        match err.downcast_ref::<ConversionError>() {
            Some(conversion_error) => cli::handle_error(conversion_error),
            None => cli::CliUtils::show_error(&format!("{:#}", err)),
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    cli::setup_logging(config.verbosity());
    debug!(config = ?config.conversion_config, "starting conversion");

    cli::run(&config)?;
    Ok(())
}
