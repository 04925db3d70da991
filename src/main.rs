#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use argv_codec::{cli, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Execute the appropriate command
    cli::execute_command(&args.command)
}
