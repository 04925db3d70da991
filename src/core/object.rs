//! Typed intermediate representation of an invocation
//!
//! An ordered `Vec<Object>` is what the parser produces and the assembler
//! consumes. The three variants are matched exhaustively at every
//! consumption site.

use serde::{Deserialize, Serialize};

/// A literal command-path segment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandObject {
    /// Command name as written
    pub name: String,
}

/// A literal positional value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArgumentObject {
    /// Argument text as written
    pub value: String,
}

/// One flag occurrence, with the attributes needed to reconstruct its
/// textual form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FlagObject {
    /// Flag name including its sigil ("-a", "--out")
    pub name: String,
    /// Flag value; `None` for boolean flags and for non-closing members of
    /// a grouped run
    pub value: Option<String>,
    /// Mirrors the matching flag configuration
    pub is_bool: bool,
    /// The textual form carries "=value" inline
    pub combined_flag_values: bool,
    /// This object opens a run of grouped short flags
    pub multiple_flags_start: bool,
    /// This object closes a run of grouped short flags
    pub multiple_flags_end: bool,
}

impl FlagObject {
    /// Create a boolean flag occurrence
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bool: true,
            ..Self::default()
        }
    }

    /// Create a value-taking flag occurrence
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Mark this flag as the opening member of a grouped run (chainable)
    #[must_use]
    pub fn start_group(mut self) -> Self {
        self.multiple_flags_start = true;
        self
    }

    /// Mark this flag as the closing member of a grouped run (chainable)
    #[must_use]
    pub fn end_group(mut self) -> Self {
        self.multiple_flags_end = true;
        self
    }

    /// Mark this flag's value as written inline with '=' (chainable)
    #[must_use]
    pub fn combined(mut self) -> Self {
        self.combined_flag_values = true;
        self
    }
}

/// One element of an invocation sequence
///
/// A valid sequence is an order-preserving account of a command line: every
/// `multiple_flags_start` flag is closed by exactly one `multiple_flags_end`
/// flag within the same contiguous run of flags, with nothing interleaved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Object {
    Command(CommandObject),
    Argument(ArgumentObject),
    Flag(FlagObject),
}

impl Object {
    /// Create a command object
    pub fn command(name: impl Into<String>) -> Self {
        Self::Command(CommandObject { name: name.into() })
    }

    /// Create a positional argument object
    pub fn argument(value: impl Into<String>) -> Self {
        Self::Argument(ArgumentObject {
            value: value.into(),
        })
    }
}

impl From<FlagObject> for Object {
    fn from(flag: FlagObject) -> Self {
        Self::Flag(flag)
    }
}
