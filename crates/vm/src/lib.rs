//! Whitespace virtual machine: executes lexed programs.
//!
//! The VM is a stack machine with:
//! - An operand stack of arbitrary-precision integers
//! - A sparse heap addressed by non-negative integers
//! - A call stack of return addresses for `call`/`ret`
//!
//! Execution starts at instruction 0 and runs until `quit` or the first
//! error. Running past the last instruction is an error.
//!
//! # Usage
//!
//! ```
//! use whitespace_common::{Instruction, Opcode, Program};
//! use whitespace_vm::{run, VmOptions};
//!
//! let program = Program::new(vec![
//!     Instruction::push(40),
//!     Instruction::push(2),
//!     Instruction::plain(Opcode::Add),
//!     Instruction::plain(Opcode::OutNum),
//!     Instruction::plain(Opcode::Quit),
//! ]);
//!
//! let mut output = Vec::new();
//! let summary = run(&program, &b""[..], &mut output, VmOptions::default()).unwrap();
//! assert_eq!(output, b"42");
//! assert_eq!(summary.instructions_executed, 5);
//! ```

pub mod error;
pub mod execute;
pub mod input;
pub mod machine;
pub mod options;

pub use error::RuntimeError;
pub use input::parse_number;
pub use machine::VM;
pub use options::VmOptions;

use std::io::{BufRead, Write};

use num_bigint::BigInt;
use whitespace_common::Program;

/// What a successful run leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Instructions executed, including the final `quit`.
    pub instructions_executed: u64,
    /// The operand stack at `quit`, bottom first.
    pub stack: Vec<BigInt>,
}

/// Execute a program to completion.
///
/// `input` feeds `readchar`/`readnum`; `output` receives `outchar`/`outnum`.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution fails (stack underflow, division by
/// zero, missing label, running off the end, etc.).
pub fn run<R: BufRead, W: Write>(
    program: &Program,
    input: R,
    output: W,
    options: VmOptions,
) -> Result<RunSummary, RuntimeError> {
    let mut vm = VM::new(program, input, output).with_options(options);
    vm.execute()?;
    let instructions_executed = vm.instructions_executed();
    Ok(RunSummary {
        instructions_executed,
        stack: vm.into_stack(),
    })
}
