//! Command implementations for the CLI

use crate::{
    cli::{Command, PolicyArgs},
    config::{CommandConfig, Config, FlagConfig},
    core::{Assembler, Object, Parser},
};
use anyhow::Context;
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(command))]
pub fn execute_command(command: &Command) -> anyhow::Result<()> {
    match command {
        Command::Inspect {
            policy,
            json,
            tokens,
        } => execute_inspect_command(policy, *json, tokens),
        Command::Normalize { policy, tokens } => execute_normalize_command(policy, tokens),
    }
}

/// Build the in-memory configuration the subcommands parse against
fn build_config(policy: &PolicyArgs) -> Config {
    let mut root = CommandConfig::new("argv");
    for name in &policy.bool_flags {
        root = root.with_flag(FlagConfig::boolean(name));
    }
    for name in &policy.valued_flags {
        root = root.with_flag(FlagConfig::new(name));
    }

    Config {
        root,
        disallow_unconfigured_flags: policy.strict_flags,
        allow_multiple_flags: policy.multiple_flags,
        disallow_combined_flag_values: policy.no_combined_values,
        disallow_double_dash: policy.no_double_dash,
    }
}

/// Execute the inspect command
#[instrument(skip(policy, tokens))]
fn execute_inspect_command(
    policy: &PolicyArgs,
    json: bool,
    tokens: &[String],
) -> anyhow::Result<()> {
    let config = build_config(policy);
    let objects = Parser::new(&config)
        .parse(tokens)
        .context("Failed to parse tokens")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&objects).context("Failed to serialize objects")?
        );
    } else {
        for object in &objects {
            println!("{}", describe(object));
        }
    }

    info!("Parsed {} token(s) into {} object(s)", tokens.len(), objects.len());
    Ok(())
}

/// Execute the normalize command
#[instrument(skip(policy, tokens))]
fn execute_normalize_command(policy: &PolicyArgs, tokens: &[String]) -> anyhow::Result<()> {
    let config = build_config(policy);
    let objects = Parser::new(&config)
        .parse(tokens)
        .context("Failed to parse tokens")?;
    let normalized = Assembler::new()
        .assemble(&objects)
        .context("Failed to assemble objects")?;

    println!("{}", normalized.join(" "));

    info!("Normalized {} token(s) into {}", tokens.len(), normalized.len());
    Ok(())
}

/// One human-readable line per object
fn describe(object: &Object) -> String {
    match object {
        Object::Command(cmd) => format!("command   {}", cmd.name),
        Object::Argument(arg) => format!("argument  {}", arg.value),
        Object::Flag(flag) => {
            let mut line = format!("flag      {}", flag.name);
            if let Some(value) = &flag.value {
                line.push_str(&format!(" = {value}"));
            }
            if flag.is_bool {
                line.push_str(" (bool)");
            }
            if flag.combined_flag_values {
                line.push_str(" (combined)");
            }
            if flag.multiple_flags_start {
                line.push_str(" (group start)");
            }
            if flag.multiple_flags_end {
                line.push_str(" (group end)");
            }
            line
        }
    }
}
