//! Whitespace common types.
//!
//! This crate provides the data structures shared by the lexer and the VM:
//!
//! - [`Opcode`]: the 22 operations of the language
//! - [`ArgKind`]: the literal kind an opcode carries
//! - [`Instruction`] / [`Argument`]: an opcode with its optional literal
//! - [`Program`]: an immutable instruction sequence with its label table
//! - [`ProgramError`]: load-time validation errors

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::ProgramError;
pub use instruction::{Argument, Instruction};
pub use num_bigint::{BigInt, BigUint};
pub use opcode::{ArgKind, Opcode};
pub use program::Program;
