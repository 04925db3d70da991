//! Core functionality of the argv codec
//!
//! Contains the object model and the two transforms between raw tokens and
//! object sequences.

pub mod assemble;
pub mod object;
pub mod parse;

pub use assemble::Assembler;
pub use object::{ArgumentObject, CommandObject, FlagObject, Object};
pub use parse::Parser;
