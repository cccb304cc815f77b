//! The command table: the prefix code mapping symbol sequences to opcodes.

use crate::symbol::Symbol::{self, Newline as L, Space as S, Tab as T};
use whitespace_common::Opcode;

/// One entry of the command table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Command {
    pub(crate) prefix: &'static [Symbol],
    pub(crate) opcode: Opcode,
}

const fn command(opcode: Opcode) -> Command {
    Command {
        prefix: prefix_of(opcode),
        opcode,
    }
}

/// No prefix is a prefix of another, so lookup order does not matter.
/// Whether a literal follows is decided by [`Opcode::arg_kind`].
pub(crate) const COMMANDS: [Command; 22] = [
    // Stack manipulation
    command(Opcode::Push),
    command(Opcode::Dup),
    command(Opcode::Swap),
    command(Opcode::Discard),
    // Arithmetic
    command(Opcode::Add),
    command(Opcode::Sub),
    command(Opcode::Mul),
    command(Opcode::Div),
    command(Opcode::Mod),
    // Heap access
    command(Opcode::Store),
    command(Opcode::Retrieve),
    // Flow control
    command(Opcode::Label),
    command(Opcode::Call),
    command(Opcode::Jump),
    command(Opcode::JumpIfZero),
    command(Opcode::JumpIfNegative),
    command(Opcode::Return),
    command(Opcode::Quit),
    // I/O
    command(Opcode::OutChar),
    command(Opcode::OutNum),
    command(Opcode::ReadChar),
    command(Opcode::ReadNum),
];

/// Length of the longest prefix in the table.
pub(crate) const MAX_PREFIX_LEN: usize = 4;

/// The command whose prefix starts `symbols`, if any.
pub(crate) fn match_prefix(symbols: &[Symbol]) -> Option<&'static Command> {
    COMMANDS.iter().find(|c| symbols.starts_with(c.prefix))
}

/// The symbol sequence that introduces `opcode`.
pub(crate) const fn prefix_of(opcode: Opcode) -> &'static [Symbol] {
    match opcode {
        Opcode::Push => &[S, S],
        Opcode::Dup => &[S, L, S],
        Opcode::Swap => &[S, L, T],
        Opcode::Discard => &[S, L, L],
        Opcode::Add => &[T, S, S, S],
        Opcode::Sub => &[T, S, S, T],
        Opcode::Mul => &[T, S, S, L],
        Opcode::Div => &[T, S, T, S],
        Opcode::Mod => &[T, S, T, T],
        Opcode::Store => &[T, T, S],
        Opcode::Retrieve => &[T, T, T],
        Opcode::Label => &[L, S, S],
        Opcode::Call => &[L, S, T],
        Opcode::Jump => &[L, S, L],
        Opcode::JumpIfZero => &[L, T, S],
        Opcode::JumpIfNegative => &[L, T, T],
        Opcode::Return => &[L, T, L],
        Opcode::Quit => &[L, L, L],
        Opcode::OutChar => &[T, L, S, S],
        Opcode::OutNum => &[T, L, S, T],
        Opcode::ReadChar => &[T, L, T, S],
        Opcode::ReadNum => &[T, L, T, T],
    }
}
