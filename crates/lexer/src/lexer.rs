//! Tokenizer: filtered symbols to instructions.

use crate::commands::{match_prefix, MAX_PREFIX_LEN};
use crate::error::LexError;
use crate::literal::{decode_signed, decode_unsigned};
use crate::symbol::{render, Filtered, Symbol};
use whitespace_common::{ArgKind, Argument, Instruction};

/// A cursor over filtered source. Yields one instruction per step until the
/// symbols run out or an error is hit.
pub(crate) struct Lexer<'s> {
    symbols: &'s [Symbol],
    lines: &'s [usize],
    pos: usize,
    failed: bool,
}

impl<'s> Lexer<'s> {
    pub(crate) fn new(filtered: &'s Filtered) -> Self {
        Self {
            symbols: &filtered.symbols,
            lines: &filtered.lines,
            pos: 0,
            failed: false,
        }
    }

    fn line_at(&self, pos: usize) -> usize {
        self.lines.get(pos).copied().unwrap_or(0)
    }

    fn next_instruction(&mut self) -> Result<Instruction, LexError> {
        let start = self.pos;
        let rest = &self.symbols[start..];
        let command = match_prefix(rest).ok_or_else(|| LexError::UnknownCommand {
            line: self.line_at(start),
            sequence: render(&rest[..rest.len().min(MAX_PREFIX_LEN)]),
        })?;
        self.pos += command.prefix.len();

        let arg = match command.opcode.arg_kind() {
            None => None,
            Some(kind) => {
                let bits = self.take_literal().ok_or(LexError::UnterminatedLiteral {
                    line: self.line_at(start),
                    opcode: command.opcode,
                })?;
                Some(match kind {
                    ArgKind::Signed => Argument::Signed(decode_signed(bits)),
                    ArgKind::Unsigned => Argument::Unsigned(decode_unsigned(bits)),
                })
            }
        };

        Ok(Instruction::new(command.opcode, arg))
    }

    /// Consume a literal through its newline; returns the bits before it.
    fn take_literal(&mut self) -> Option<&'s [Symbol]> {
        let symbols = self.symbols;
        let rest = &symbols[self.pos..];
        let len = rest.iter().position(|&s| s == Symbol::Newline)?;
        self.pos += len + 1;
        Some(&rest[..len])
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Instruction, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.symbols.len() {
            return None;
        }
        let result = self.next_instruction();
        self.failed = result.is_err();
        Some(result)
    }
}
