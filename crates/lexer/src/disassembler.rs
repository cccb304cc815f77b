//! Disassembler: program → human-readable listing.

use whitespace_common::Program;

/// One line per instruction: zero-padded index, then mnemonic and literal.
pub fn disassemble(program: &Program) -> String {
    let width = program.len().saturating_sub(1).to_string().len().max(4);
    let mut text = String::new();
    for (index, instr) in program.instructions().iter().enumerate() {
        text.push_str(&format!("{index:0width$} {instr}\n"));
    }
    text
}
