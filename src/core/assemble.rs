//! Reassembly of typed objects into raw argv tokens
//!
//! The exact inverse of parsing, up to the documented normalizations:
//! grouped flags always come back as one token, and a bool flag's stray
//! value is dropped.

use crate::{
    core::object::{FlagObject, Object},
    error::{CodecError, Result},
};
use tracing::{debug, instrument};

/// Accumulation state while walking the object sequence
enum State<'a> {
    /// Between tokens; every object variant is acceptable
    Scanning,
    /// Inside a grouped-flag run; only flag objects may follow
    InRun {
        /// Name of the flag that opened the run, for error reporting
        opener: &'a str,
        /// Grouped token being built up ("-a" + "-l" -> "-al")
        buffer: String,
    },
}

/// Assembler from an ordered object sequence back to raw tokens
#[derive(Debug, Default)]
pub struct Assembler;

impl Assembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self
    }

    /// Assemble objects into the raw token sequence a shell would have
    /// supplied to produce an equivalent sequence under the parser.
    ///
    /// Errors abort assembly immediately; the caller receives the typed
    /// error and no tokens.
    #[instrument(skip(self, objects))]
    pub fn assemble(&self, objects: &[Object]) -> Result<Vec<String>> {
        let mut tokens = Vec::with_capacity(objects.len());
        let mut state = State::Scanning;

        for object in objects {
            state = match (state, object) {
                (State::Scanning, Object::Command(cmd)) => {
                    tokens.push(cmd.name.clone());
                    State::Scanning
                }
                (State::Scanning, Object::Argument(arg)) => {
                    tokens.push(arg.value.clone());
                    State::Scanning
                }
                (State::Scanning, Object::Flag(flag)) => {
                    if flag.multiple_flags_start && !flag.multiple_flags_end {
                        State::InRun {
                            opener: &flag.name,
                            buffer: flag.name.clone(),
                        }
                    } else {
                        // Standalone flag, or a trivial run of length one
                        emit_flag(&mut tokens, flag.name.clone(), flag)?;
                        State::Scanning
                    }
                }
                (State::InRun { opener, mut buffer }, Object::Flag(flag)) => {
                    // Subsequent members join the token with their leading
                    // sigil character stripped.
                    buffer.push_str(flag.name.strip_prefix('-').unwrap_or(&flag.name));
                    if flag.multiple_flags_end {
                        debug!(token = %buffer, "closing grouped-flag run");
                        emit_flag(&mut tokens, buffer, flag)?;
                        State::Scanning
                    } else {
                        State::InRun { opener, buffer }
                    }
                }
                (State::InRun { opener, .. }, Object::Command(_) | Object::Argument(_)) => {
                    return Err(CodecError::incomplete_multiple_flag(opener));
                }
            };
        }

        if let State::InRun { opener, .. } = state {
            return Err(CodecError::incomplete_multiple_flag(opener));
        }

        debug!(tokens = tokens.len(), "assemble complete");
        Ok(tokens)
    }
}

/// Emit the token(s) for a run's terminal flag (or a standalone flag, which
/// behaves as a run of length one). `name` is the accumulated grouped token,
/// or the flag's own name outside a run.
fn emit_flag(tokens: &mut Vec<String>, name: String, flag: &FlagObject) -> Result<()> {
    if flag.is_bool {
        tokens.push(name);
        return Ok(());
    }

    let value = flag
        .value
        .as_ref()
        .ok_or_else(|| CodecError::missing_flag_value(flag.name.as_str()))?;

    if flag.combined_flag_values {
        tokens.push(format!("{name}={value}"));
    } else {
        tokens.push(name);
        tokens.push(value.clone());
    }
    Ok(())
}
