//! Run configuration.

use num_bigint::BigInt;

/// Knobs for a single run. The default reports end of input as an error and
/// places no bound on the number of executed instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VmOptions {
    /// Stored by `readchar` and `readnum` at end of input. `None` makes end
    /// of input a [`RuntimeError::EndOfInput`](crate::RuntimeError::EndOfInput).
    pub eof_value: Option<BigInt>,
    /// Abort after this many executed instructions.
    pub instruction_limit: Option<u64>,
}

impl VmOptions {
    /// Options with the defaults: end of input is an error, no limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` instead of failing when input runs out.
    pub fn with_eof_value(mut self, value: impl Into<BigInt>) -> Self {
        self.eof_value = Some(value.into());
        self
    }

    /// Fail with `InstructionLimitExceeded` once `limit` instructions have run.
    pub fn with_instruction_limit(mut self, limit: u64) -> Self {
        self.instruction_limit = Some(limit);
        self
    }
}
