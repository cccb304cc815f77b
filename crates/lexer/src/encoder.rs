//! Encoder: instructions back to whitespace source.

use crate::commands::prefix_of;
use crate::literal::{encode_signed, encode_unsigned};
use crate::symbol::Symbol;
use whitespace_common::{Argument, ArgKind, BigInt, BigUint, Instruction};

/// Render instructions as whitespace source.
///
/// Literals are written in their shortest form. An opcode that expects a
/// literal but has none is written with a zero literal; a literal attached
/// to an opcode that takes none is dropped.
pub fn encode(instructions: &[Instruction]) -> String {
    let mut symbols = Vec::new();
    for instr in instructions {
        symbols.extend_from_slice(prefix_of(instr.opcode));
        match instr.opcode.arg_kind() {
            None => continue,
            Some(ArgKind::Signed) => match &instr.arg {
                Some(Argument::Signed(value)) => symbols.extend(encode_signed(value)),
                Some(Argument::Unsigned(value)) => {
                    symbols.extend(encode_signed(&BigInt::from(value.clone())))
                }
                None => symbols.extend(encode_signed(&BigInt::default())),
            },
            Some(ArgKind::Unsigned) => match &instr.arg {
                Some(Argument::Unsigned(value)) => symbols.extend(encode_unsigned(value)),
                Some(Argument::Signed(value)) => symbols.extend(encode_unsigned(value.magnitude())),
                None => symbols.extend(encode_unsigned(&BigUint::default())),
            },
        }
        symbols.push(Symbol::Newline);
    }
    symbols.into_iter().map(Symbol::as_char).collect()
}
