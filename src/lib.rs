//! # Argv Codec
//!
//! A bidirectional transform between the flat argument vector a process
//! receives and a structured sequence of typed objects (commands, positional
//! arguments, flags), validated against a caller-supplied tree of allowed
//! commands and flags.
//!
//! ## Features
//!
//! - Parsing with command-tree descent and per-call policy switches
//! - Short-flag grouping ("-al"), combined values ("--flag=value"),
//!   boolean flags, and the "--" sentinel
//! - Lossless reassembly of object sequences back into raw tokens
//! - Typed errors; a transform fully succeeds or yields nothing
//!
//! ## Example
//!
//! ```
//! use argv_codec::config::{CommandConfig, Config, FlagConfig};
//! use argv_codec::core::{Assembler, Parser};
//!
//! let root = CommandConfig::new("tool")
//!     .with_command(CommandConfig::new("build").with_flag(FlagConfig::new("--out")));
//! let config = Config::new(root);
//!
//! let objects = Parser::new(&config).parse(&["build", "--out", "file.txt"])?;
//! let tokens = Assembler::new().assemble(&objects)?;
//! assert_eq!(tokens, vec!["build", "--out", "file.txt"]);
//! # Ok::<(), argv_codec::error::CodecError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
