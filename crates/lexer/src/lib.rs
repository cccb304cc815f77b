//! Whitespace lexer: source text to instruction stream and back.
//!
//! Only space, tab and newline are significant; every other character is
//! a comment. Commands form a prefix code over those three symbols, and
//! numeric literals are binary runs of spaces and tabs closed by a newline.
//!
//! # Usage
//!
//! ```
//! use whitespace_lexer::{encode, lex};
//! use whitespace_common::{Instruction, Opcode};
//!
//! // push 1, push 1, add, outnum, quit
//! let program = lex("   \t\n   \t\n\t   \t\n \t\n\n\n").unwrap();
//! assert_eq!(program.len(), 5);
//! assert_eq!(program.instructions()[0], Instruction::push(1));
//! assert_eq!(program.instructions()[4], Instruction::plain(Opcode::Quit));
//!
//! assert_eq!(lex(&encode(program.instructions())).unwrap(), program);
//! ```

pub mod error;

mod commands;
mod disassembler;
mod encoder;
mod lexer;
mod literal;
mod symbol;

pub use disassembler::disassemble;
pub use encoder::encode;
pub use error::LexError;

use tracing::debug;
use whitespace_common::Program;

/// Lex source text into a program.
///
/// Lexing stops at the first error.
pub fn lex(text: &str) -> Result<Program, LexError> {
    let filtered = symbol::filter(text);
    debug!(
        chars = text.chars().count(),
        symbols = filtered.symbols.len(),
        "filtered source"
    );

    let instructions = lexer::Lexer::new(&filtered).collect::<Result<Vec<_>, _>>()?;
    let program = Program::new(instructions);
    debug!(instructions = program.len(), "lexed program");
    Ok(program)
}
