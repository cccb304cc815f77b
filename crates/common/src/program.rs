//! Program representation: an immutable instruction sequence and its label table.

use std::collections::HashMap;

use num_bigint::BigUint;

use crate::error::ProgramError;
use crate::instruction::Instruction;
use crate::opcode::Opcode;

/// A Whitespace program: a sequence of instructions.
///
/// The label table is built once on construction. When a label identifier is
/// defined more than once, the definition with the lowest index wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: HashMap<BigUint, usize>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        let mut labels = HashMap::new();
        for (index, instr) in instructions.iter().enumerate() {
            if instr.opcode != Opcode::Label {
                continue;
            }
            if let Some(id) = instr.label_arg() {
                labels.entry(id.clone()).or_insert(index);
            }
        }

        Self {
            instructions,
            labels,
        }
    }

    /// The instruction stream.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The instruction at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Index of the `label` instruction that defines `id`.
    pub fn label_target(&self, id: &BigUint) -> Option<usize> {
        self.labels.get(id).copied()
    }

    /// Label identifiers defined more than once, in the order their first
    /// redefinition appears.
    pub fn duplicate_labels(&self) -> Vec<BigUint> {
        let mut duplicates: Vec<BigUint> = Vec::new();
        for (index, instr) in self.instructions.iter().enumerate() {
            if instr.opcode != Opcode::Label {
                continue;
            }
            let Some(id) = instr.label_arg() else {
                continue;
            };
            if self.labels.get(id) != Some(&index) && !duplicates.contains(id) {
                duplicates.push(id.clone());
            }
        }
        duplicates
    }

    /// Reject programs that define any label identifier twice.
    pub fn check_labels(&self) -> Result<(), ProgramError> {
        for (index, instr) in self.instructions.iter().enumerate() {
            if instr.opcode != Opcode::Label {
                continue;
            }
            let Some(id) = instr.label_arg() else {
                continue;
            };
            if let Some(&first) = self.labels.get(id) {
                if first != index {
                    return Err(ProgramError::DuplicateLabel {
                        label: id.clone(),
                        first,
                        second: index,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(id: u32) -> Instruction {
        Instruction::with_label(Opcode::Label, id)
    }

    #[test]
    fn empty_program() {
        let program = Program::new(vec![]);
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program.label_target(&BigUint::from(0u32)), None);
    }

    #[test]
    fn label_table_maps_identifier_to_index() {
        let program = Program::new(vec![
            Instruction::push(1),
            label(7),
            Instruction::plain(Opcode::Quit),
            label(0),
        ]);
        assert_eq!(program.label_target(&BigUint::from(7u32)), Some(1));
        assert_eq!(program.label_target(&BigUint::from(0u32)), Some(3));
        assert_eq!(program.label_target(&BigUint::from(3u32)), None);
    }

    #[test]
    fn first_label_definition_wins() {
        let program = Program::new(vec![
            Instruction::with_label(Opcode::Jump, 1u32),
            label(1),
            Instruction::plain(Opcode::Quit),
            label(1),
        ]);
        assert_eq!(program.label_target(&BigUint::from(1u32)), Some(1));
    }

    #[test]
    fn call_and_jump_do_not_define_labels() {
        let program = Program::new(vec![
            Instruction::with_label(Opcode::Call, 4u32),
            Instruction::with_label(Opcode::Jump, 4u32),
        ]);
        assert_eq!(program.label_target(&BigUint::from(4u32)), None);
    }

    #[test]
    fn duplicate_labels_listed_once() {
        let program = Program::new(vec![
            label(1),
            label(2),
            label(1),
            label(1),
            label(3),
            label(2),
        ]);
        assert_eq!(
            program.duplicate_labels(),
            vec![BigUint::from(1u32), BigUint::from(2u32)]
        );
    }

    #[test]
    fn check_labels_accepts_unique_labels() {
        let program = Program::new(vec![label(1), label(2)]);
        assert!(program.duplicate_labels().is_empty());
        assert_eq!(program.check_labels(), Ok(()));
    }

    #[test]
    fn check_labels_reports_first_duplicate() {
        let program = Program::new(vec![label(5), Instruction::push(0), label(5)]);
        assert_eq!(
            program.check_labels(),
            Err(ProgramError::DuplicateLabel {
                label: BigUint::from(5u32),
                first: 0,
                second: 2,
            })
        );
    }
}
