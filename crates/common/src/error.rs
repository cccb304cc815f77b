//! Load-time errors for Whitespace programs.

use num_bigint::BigUint;
use thiserror::Error;

/// Errors found by validating a program before it runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// The same label identifier is defined by two `label` instructions.
    #[error("label {label} defined at instruction {first} and again at instruction {second}")]
    DuplicateLabel {
        label: BigUint,
        first: usize,
        second: usize,
    },
}
