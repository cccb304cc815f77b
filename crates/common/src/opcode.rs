//! Opcode definitions for the Whitespace instruction set.

use std::fmt;

/// Identifies the operation to perform.
///
/// The set is closed: the lexer only ever produces these 22 operations, and
/// the VM matches on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    // Stack manipulation
    /// Push the signed argument.
    Push,
    /// Duplicate the top value.
    Dup,
    /// Exchange the two topmost values.
    Swap,
    /// Pop and drop the top value.
    Discard,

    // Arithmetic
    /// Pop b, pop a, push a + b.
    Add,
    /// Pop b, pop a, push a - b.
    Sub,
    /// Pop b, pop a, push a * b.
    Mul,
    /// Pop b, pop a, push a / b (truncating). Division by zero is a runtime error.
    Div,
    /// Pop b, pop a, push a % b (sign of the dividend).
    Mod,

    // Heap access
    /// Pop value, pop address, write value to the heap.
    Store,
    /// Pop address, push the heap value at that address.
    Retrieve,

    // Flow control
    /// Mark a jump target. No-op when executed.
    Label,
    /// Push the return address and jump to a label.
    Call,
    /// Jump to a label unconditionally.
    Jump,
    /// Pop a value, jump if it is zero.
    JumpIfZero,
    /// Pop a value, jump if it is negative.
    JumpIfNegative,
    /// Return to the address on top of the call stack.
    Return,
    /// Stop execution successfully.
    Quit,

    // I/O
    /// Pop a value, write it as a character.
    OutChar,
    /// Pop a value, write it as decimal text.
    OutNum,
    /// Read a character, store its code point at the popped address.
    ReadChar,
    /// Read a line, store the parsed integer at the popped address.
    ReadNum,
}

/// The kind of numeric literal that follows an opcode in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// Sign symbol followed by magnitude bits.
    Signed,
    /// Magnitude bits only. Used for label identifiers.
    Unsigned,
}

/// All opcodes, in command-table order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 22] = [
    Opcode::Push,
    Opcode::Dup,
    Opcode::Swap,
    Opcode::Discard,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Mod,
    Opcode::Store,
    Opcode::Retrieve,
    Opcode::Label,
    Opcode::Call,
    Opcode::Jump,
    Opcode::JumpIfZero,
    Opcode::JumpIfNegative,
    Opcode::Return,
    Opcode::Quit,
    Opcode::OutChar,
    Opcode::OutNum,
    Opcode::ReadChar,
    Opcode::ReadNum,
];

impl Opcode {
    /// Returns the listing mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::Push => "push",
            Opcode::Dup => "dup",
            Opcode::Swap => "swap",
            Opcode::Discard => "discard",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::Div => "div",
            Opcode::Mod => "mod",
            Opcode::Store => "store",
            Opcode::Retrieve => "retrieve",
            Opcode::Label => "label",
            Opcode::Call => "call",
            Opcode::Jump => "jump",
            Opcode::JumpIfZero => "jz",
            Opcode::JumpIfNegative => "jn",
            Opcode::Return => "ret",
            Opcode::Quit => "quit",
            Opcode::OutChar => "outchar",
            Opcode::OutNum => "outnum",
            Opcode::ReadChar => "readchar",
            Opcode::ReadNum => "readnum",
        }
    }

    /// The literal this opcode carries, if any.
    pub fn arg_kind(&self) -> Option<ArgKind> {
        match self {
            Opcode::Push => Some(ArgKind::Signed),
            Opcode::Label
            | Opcode::Call
            | Opcode::Jump
            | Opcode::JumpIfZero
            | Opcode::JumpIfNegative => Some(ArgKind::Unsigned),
            Opcode::Dup
            | Opcode::Swap
            | Opcode::Discard
            | Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::Store
            | Opcode::Retrieve
            | Opcode::Return
            | Opcode::Quit
            | Opcode::OutChar
            | Opcode::OutNum
            | Opcode::ReadChar
            | Opcode::ReadNum => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
