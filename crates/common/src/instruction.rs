//! Instructions: an opcode plus its optional numeric argument.

use std::fmt;

use num_bigint::{BigInt, BigUint};

use crate::opcode::{ArgKind, Opcode};

/// A decoded numeric literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Argument {
    /// A signed value, carried by `push`.
    Signed(BigInt),
    /// A label identifier, carried by `label`, `call`, `jump`, `jz` and `jn`.
    Unsigned(BigUint),
}

impl Argument {
    /// The literal kind this argument was decoded as.
    pub fn kind(&self) -> ArgKind {
        match self {
            Argument::Signed(_) => ArgKind::Signed,
            Argument::Unsigned(_) => ArgKind::Unsigned,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Signed(value) => write!(f, "{value}"),
            Argument::Unsigned(value) => write!(f, "{value}"),
        }
    }
}

/// A single Whitespace instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// The literal that followed the command, if the opcode takes one.
    pub arg: Option<Argument>,
}

impl Instruction {
    /// Create a new instruction. No consistency check is made between the
    /// opcode and the argument; see [`Instruction::is_well_formed`].
    pub fn new(opcode: Opcode, arg: Option<Argument>) -> Self {
        Self { opcode, arg }
    }

    /// An instruction without an argument.
    pub fn plain(opcode: Opcode) -> Self {
        Self { opcode, arg: None }
    }

    /// `push value`.
    pub fn push(value: impl Into<BigInt>) -> Self {
        Self {
            opcode: Opcode::Push,
            arg: Some(Argument::Signed(value.into())),
        }
    }

    /// A flow-control instruction referring to a label identifier.
    pub fn with_label(opcode: Opcode, label: impl Into<BigUint>) -> Self {
        Self {
            opcode,
            arg: Some(Argument::Unsigned(label.into())),
        }
    }

    /// True if the argument matches what the opcode expects.
    pub fn is_well_formed(&self) -> bool {
        self.opcode.arg_kind() == self.arg.as_ref().map(Argument::kind)
    }

    /// The signed argument, if present.
    pub fn signed_arg(&self) -> Option<&BigInt> {
        match &self.arg {
            Some(Argument::Signed(value)) => Some(value),
            _ => None,
        }
    }

    /// The label identifier argument, if present.
    pub fn label_arg(&self) -> Option<&BigUint> {
        match &self.arg {
            Some(Argument::Unsigned(label)) => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.arg {
            Some(arg) => write!(f, "{} {}", self.opcode, arg),
            None => write!(f, "{}", self.opcode),
        }
    }
}
