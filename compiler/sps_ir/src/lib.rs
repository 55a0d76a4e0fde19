//! SPS IR - runtime values shared by every stage of the interpreter.
//!
//! This crate contains:
//! - [`Span`] for byte locations in program text
//! - [`Name`], the symbol type used for name literals and dictionary keys
//! - [`Shared`], the single-threaded shared-mutable cell behind arrays and dictionaries
//! - [`Builtin`], the closed catalogue of built-in operators
//! - [`Value`], the tagged union of everything a program or operand stack can hold
//!
//! # Design Philosophy
//!
//! - **Resolve once**: operator names become [`Builtin`] variants when a program is parsed,
//!   so execution never compares strings to find an operator.
//! - **Tag executability**: a brace block is a [`Procedure`] and a bracket literal is an
//!   [`Array`] from the moment they are parsed. Nothing is re-derived from contents.
//! - **Share by reference**: `put` mutates the one array object every stack slot and
//!   dictionary entry points at, so arrays and dictionaries live behind [`Shared`].

mod builtin;
mod name;
mod shared;
mod span;
mod value;

pub use builtin::Builtin;
pub use name::{Name, NAME_MARKER};
pub use shared::Shared;
pub use span::Span;
pub use value::{Array, Dictionary, Procedure, Value};
