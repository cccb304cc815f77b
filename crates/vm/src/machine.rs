//! VM state management: operand stack, heap, call stack, program counter.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use num_bigint::{BigInt, BigUint};
use whitespace_common::{Instruction, Program};

use crate::error::RuntimeError;
use crate::options::VmOptions;

/// The Whitespace virtual machine.
///
/// A VM runs one program once. It reads from `R` only for `readchar` and
/// `readnum`, and writes to `W` only for `outchar` and `outnum`.
pub struct VM<'a, R, W> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    pub(crate) options: VmOptions,
    pub(crate) input: R,
    pub(crate) output: W,
    /// Operand stack.
    pub(crate) stack: Vec<BigInt>,
    /// Sparse heap. Absent keys were never written.
    pub(crate) heap: HashMap<BigUint, BigInt>,
    /// Return addresses pushed by `call`.
    pub(crate) call_stack: Vec<usize>,
    /// Index of the next instruction to fetch.
    pub(crate) pc: usize,
    /// Index of the instruction being executed, for error reporting.
    pub(crate) current: usize,
    /// Instructions executed so far.
    pub(crate) executed: u64,
}

impl<'a, R: BufRead, W: Write> VM<'a, R, W> {
    /// Create a new VM for the given program.
    pub fn new(program: &'a Program, input: R, output: W) -> Self {
        Self {
            program,
            options: VmOptions::default(),
            input,
            output,
            stack: Vec::new(),
            heap: HashMap::new(),
            call_stack: Vec::new(),
            pc: 0,
            current: 0,
            executed: 0,
        }
    }

    /// Replace the default run options.
    pub fn with_options(mut self, options: VmOptions) -> Self {
        self.options = options;
        self
    }

    /// The operand stack, bottom first.
    pub fn stack(&self) -> &[BigInt] {
        &self.stack
    }

    /// The value stored at `address`, if it was ever written.
    pub fn heap_value(&self, address: &BigUint) -> Option<&BigInt> {
        self.heap.get(address)
    }

    /// Number of pending returns.
    pub fn call_depth(&self) -> usize {
        self.call_stack.len()
    }

    /// Instructions executed so far, including the one that failed or quit.
    pub fn instructions_executed(&self) -> u64 {
        self.executed
    }

    pub(crate) fn into_stack(self) -> Vec<BigInt> {
        self.stack
    }

    /// Fetch the instruction at the current pc.
    pub(crate) fn fetch(&self) -> Result<&'a Instruction, RuntimeError> {
        let program = self.program;
        program
            .get(self.pc)
            .ok_or(RuntimeError::ProgramCounterOverflow {
                at: self.pc,
                len: program.len(),
            })
    }

    fn underflow(&self, needed: usize) -> RuntimeError {
        RuntimeError::StackUnderflow {
            at: self.current,
            needed,
            available: self.stack.len(),
        }
    }

    /// Fail unless the stack holds at least `needed` values.
    pub(crate) fn require(&self, needed: usize) -> Result<(), RuntimeError> {
        if self.stack.len() < needed {
            return Err(self.underflow(needed));
        }
        Ok(())
    }

    pub(crate) fn push(&mut self, value: BigInt) {
        self.stack.push(value);
    }

    /// Pop a value from the stack.
    pub(crate) fn pop(&mut self) -> Result<BigInt, RuntimeError> {
        self.stack.pop().ok_or_else(|| self.underflow(1))
    }

    /// Pop the top two values as `(second, top)`. Nothing is popped when
    /// fewer than two are present.
    pub(crate) fn pop_pair(&mut self) -> Result<(BigInt, BigInt), RuntimeError> {
        self.require(2)?;
        let top = self.pop()?;
        let second = self.pop()?;
        Ok((second, top))
    }

    pub(crate) fn peek(&self) -> Result<&BigInt, RuntimeError> {
        self.stack.last().ok_or_else(|| self.underflow(1))
    }

    /// Convert a popped value into a heap key.
    pub(crate) fn address(&self, value: BigInt) -> Result<BigUint, RuntimeError> {
        value
            .to_biguint()
            .ok_or(RuntimeError::NegativeAddress {
                at: self.current,
                address: value,
            })
    }

    pub(crate) fn io_error(&self, err: io::Error) -> RuntimeError {
        RuntimeError::Io {
            at: self.current,
            message: err.to_string(),
        }
    }
}
