//! Runtime errors for the Whitespace VM.
//!
//! Every error raised while executing an instruction carries that
//! instruction's index (`at`) for diagnostics.

use num_bigint::{BigInt, BigUint};
use thiserror::Error;

/// Errors that occur during program execution. All of them end the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Execution ran past the last instruction without reaching `quit`.
    #[error("program counter {at} ran past the end of the program ({len} instructions)")]
    ProgramCounterOverflow { at: usize, len: usize },

    /// The instruction's argument does not fit its opcode. The lexer never
    /// produces these; hand-built programs can.
    #[error("malformed instruction '{instruction}' at instruction {at}")]
    UnknownInstruction { at: usize, instruction: String },

    /// `call`, `jump`, `jz` or `jn` named a label no `label` instruction defines.
    #[error("label {label} not found at instruction {at}")]
    LabelNotFound { at: usize, label: BigUint },

    /// The operand stack held fewer values than the instruction consumes.
    #[error("stack underflow at instruction {at}: needed {needed} value(s), found {available}")]
    StackUnderflow {
        at: usize,
        needed: usize,
        available: usize,
    },

    /// `ret` with an empty call stack.
    #[error("return with empty call stack at instruction {at}")]
    CallStackUnderflow { at: usize },

    /// `div` or `mod` with a zero divisor.
    #[error("division by zero at instruction {at}")]
    DivisionByZero { at: usize },

    /// `retrieve` from a heap address that was never written.
    #[error("read of uninitialized heap address {address} at instruction {at}")]
    UninitializedMemory { at: usize, address: BigUint },

    /// A heap access used a negative address.
    #[error("negative heap address {address} at instruction {at}")]
    NegativeAddress { at: usize, address: BigInt },

    /// `outchar` with a value that is not a Unicode scalar value.
    #[error("value {value} is not a valid character at instruction {at}")]
    InvalidCharacter { at: usize, value: BigInt },

    /// `readchar` or `readnum` hit end of input and no EOF value is configured.
    #[error("unexpected end of input at instruction {at}")]
    EndOfInput { at: usize },

    /// The configured instruction budget ran out.
    #[error("instruction limit of {limit} exceeded")]
    InstructionLimitExceeded { limit: u64 },

    /// Reading input or writing output failed.
    #[error("i/o error at instruction {at}: {message}")]
    Io { at: usize, message: String },
}
