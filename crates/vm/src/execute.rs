//! Main execution loop and opcode dispatch for the Whitespace VM.

use std::io::{BufRead, Write};

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};
use tracing::{debug, trace};
use whitespace_common::{Instruction, Opcode};

use crate::error::RuntimeError;
use crate::input::{parse_number, read_char, read_line};
use crate::machine::VM;

impl<R: BufRead, W: Write> VM<'_, R, W> {
    /// Execute the program until `quit` or error.
    ///
    /// Output is flushed before returning, on success and on failure.
    pub fn execute(&mut self) -> Result<(), RuntimeError> {
        debug!(instructions = self.program.len(), "starting run");

        let result = self.run_loop();
        let flushed = self.output.flush().map_err(|e| self.io_error(e));

        match &result {
            Ok(()) => debug!(executed = self.executed, "program quit"),
            Err(e) => debug!(executed = self.executed, error = %e, "program failed"),
        }
        result.and(flushed)
    }

    fn run_loop(&mut self) -> Result<(), RuntimeError> {
        loop {
            if let Some(limit) = self.options.instruction_limit {
                if self.executed >= limit {
                    return Err(RuntimeError::InstructionLimitExceeded { limit });
                }
            }

            let instr = self.fetch()?;
            self.current = self.pc;
            self.pc += 1;
            self.executed += 1;
            trace!(at = self.current, %instr, depth = self.stack.len(), "execute");

            if !instr.is_well_formed() {
                return Err(self.malformed(instr));
            }

            match instr.opcode {
                // Stack manipulation
                Opcode::Push => {
                    let value = self.signed_arg(instr)?.clone();
                    self.push(value);
                }
                Opcode::Dup => {
                    let top = self.peek()?.clone();
                    self.push(top);
                }
                Opcode::Swap => {
                    self.require(2)?;
                    let len = self.stack.len();
                    self.stack.swap(len - 1, len - 2);
                }
                Opcode::Discard => {
                    self.pop()?;
                }

                // Arithmetic
                Opcode::Add => self.exec_arith(|a, b| a + b)?,
                Opcode::Sub => self.exec_arith(|a, b| a - b)?,
                Opcode::Mul => self.exec_arith(|a, b| a * b)?,
                Opcode::Div => self.exec_division(|a, b| a / b)?,
                Opcode::Mod => self.exec_division(|a, b| a % b)?,

                // Heap access
                Opcode::Store => self.exec_store()?,
                Opcode::Retrieve => self.exec_retrieve()?,

                // Flow control
                Opcode::Label => {}
                Opcode::Call => {
                    let target = self.resolve(instr)?;
                    self.call_stack.push(self.pc);
                    self.pc = target;
                }
                Opcode::Jump => self.pc = self.resolve(instr)?,
                Opcode::JumpIfZero => {
                    if self.pop()?.is_zero() {
                        self.pc = self.resolve(instr)?;
                    }
                }
                Opcode::JumpIfNegative => {
                    if self.pop()?.is_negative() {
                        self.pc = self.resolve(instr)?;
                    }
                }
                Opcode::Return => {
                    self.pc = self
                        .call_stack
                        .pop()
                        .ok_or(RuntimeError::CallStackUnderflow { at: self.current })?;
                }
                Opcode::Quit => return Ok(()),

                // I/O
                Opcode::OutChar => self.exec_out_char()?,
                Opcode::OutNum => {
                    let value = self.pop()?;
                    write!(self.output, "{value}").map_err(|e| self.io_error(e))?;
                }
                Opcode::ReadChar => self.exec_read_char()?,
                Opcode::ReadNum => self.exec_read_num()?,
            }
        }
    }

    fn malformed(&self, instr: &Instruction) -> RuntimeError {
        RuntimeError::UnknownInstruction {
            at: self.current,
            instruction: instr.to_string(),
        }
    }

    fn signed_arg<'i>(&self, instr: &'i Instruction) -> Result<&'i BigInt, RuntimeError> {
        instr.signed_arg().ok_or_else(|| self.malformed(instr))
    }

    /// Index of the `label` instruction named by a flow-control instruction.
    fn resolve(&self, instr: &Instruction) -> Result<usize, RuntimeError> {
        let label = instr.label_arg().ok_or_else(|| self.malformed(instr))?;
        self.program
            .label_target(label)
            .ok_or_else(|| RuntimeError::LabelNotFound {
                at: self.current,
                label: label.clone(),
            })
    }

    // ---- Arithmetic ----

    fn exec_arith(&mut self, op: impl FnOnce(BigInt, BigInt) -> BigInt) -> Result<(), RuntimeError> {
        let (a, b) = self.pop_pair()?;
        self.push(op(a, b));
        Ok(())
    }

    /// `div` and `mod`: truncating, remainder takes the dividend's sign.
    fn exec_division(
        &mut self,
        op: impl FnOnce(BigInt, BigInt) -> BigInt,
    ) -> Result<(), RuntimeError> {
        self.require(2)?;
        if self.peek()?.is_zero() {
            return Err(RuntimeError::DivisionByZero { at: self.current });
        }
        self.exec_arith(op)
    }

    // ---- Heap ----

    fn exec_store(&mut self) -> Result<(), RuntimeError> {
        let (address, value) = self.pop_pair()?;
        let address = self.address(address)?;
        self.heap.insert(address, value);
        Ok(())
    }

    fn exec_retrieve(&mut self) -> Result<(), RuntimeError> {
        let address = self.pop()?;
        let address = self.address(address)?;
        let value = self
            .heap
            .get(&address)
            .cloned()
            .ok_or_else(|| RuntimeError::UninitializedMemory {
                at: self.current,
                address,
            })?;
        self.push(value);
        Ok(())
    }

    // ---- I/O ----

    fn exec_out_char(&mut self) -> Result<(), RuntimeError> {
        let value = self.pop()?;
        let c = value
            .to_u32()
            .and_then(char::from_u32)
            .ok_or_else(|| RuntimeError::InvalidCharacter {
                at: self.current,
                value: value.clone(),
            })?;
        write!(self.output, "{c}").map_err(|e| self.io_error(e))
    }

    /// Pop and validate the target address, then flush pending output so a
    /// prompt is visible before blocking on input.
    fn prepare_read(&mut self) -> Result<BigUint, RuntimeError> {
        let address = self.pop()?;
        let address = self.address(address)?;
        self.output.flush().map_err(|e| self.io_error(e))?;
        Ok(address)
    }

    fn eof_value(&self) -> Result<BigInt, RuntimeError> {
        self.options
            .eof_value
            .clone()
            .ok_or(RuntimeError::EndOfInput { at: self.current })
    }

    fn exec_read_char(&mut self) -> Result<(), RuntimeError> {
        let address = self.prepare_read()?;
        let value = match read_char(&mut self.input).map_err(|e| self.io_error(e))? {
            Some(c) => BigInt::from(u32::from(c)),
            None => self.eof_value()?,
        };
        trace!(%address, %value, "readchar");
        self.heap.insert(address, value);
        Ok(())
    }

    fn exec_read_num(&mut self) -> Result<(), RuntimeError> {
        let address = self.prepare_read()?;
        let value = match read_line(&mut self.input).map_err(|e| self.io_error(e))? {
            Some(line) => parse_number(&line),
            None => self.eof_value()?,
        };
        trace!(%address, %value, "readnum");
        self.heap.insert(address, value);
        Ok(())
    }
}
