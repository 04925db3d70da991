//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};

/// Argv Codec - convert between raw argv tokens and typed invocation objects
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "argvc")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Parsing policy switches and flag declarations shared by the subcommands
#[derive(clap::Args, Debug, Clone)]
pub struct PolicyArgs {
    /// Reject flags not declared with --bool/--valued
    #[arg(long)]
    pub strict_flags: bool,

    /// Allow grouped short flags ("-al" means "-a -l")
    #[arg(long)]
    pub multiple_flags: bool,

    /// Take "--flag=value" tokens literally instead of splitting at '='
    #[arg(long)]
    pub no_combined_values: bool,

    /// Reject the bare "--" token inside the parsed invocation
    #[arg(long)]
    pub no_double_dash: bool,

    /// Declare a boolean flag on the modeled command (repeatable)
    #[arg(long = "bool", value_name = "NAME", allow_hyphen_values = true)]
    pub bool_flags: Vec<String>,

    /// Declare a value-taking flag on the modeled command (repeatable)
    #[arg(long = "valued", value_name = "NAME", allow_hyphen_values = true)]
    pub valued_flags: Vec<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse raw tokens and print the resulting objects
    Inspect {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Print the objects as a JSON array
        #[arg(long)]
        json: bool,

        /// Raw tokens to parse, after "--"
        #[arg(last = true)]
        tokens: Vec<String>,
    },

    /// Parse raw tokens, reassemble them, and print the normalized line
    Normalize {
        #[command(flatten)]
        policy: PolicyArgs,

        /// Raw tokens to normalize, after "--"
        #[arg(last = true)]
        tokens: Vec<String>,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
