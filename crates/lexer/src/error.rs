//! Error types for the Whitespace lexer.

use thiserror::Error;
use whitespace_common::Opcode;

/// Errors produced while turning source text into instructions.
///
/// Line numbers refer to the source text, before comment characters
/// were stripped, and point at the start of the offending command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// No command in the table starts with the remaining symbols.
    /// `sequence` shows up to four symbols as `S`, `T` and `L`.
    #[error("line {line}: unknown command '{sequence}'")]
    UnknownCommand { line: usize, sequence: String },

    /// Input ended before the newline closing a numeric literal.
    #[error("line {line}: {opcode} literal is missing its terminating newline")]
    UnterminatedLiteral { line: usize, opcode: Opcode },
}
