use super::descriptor::Descriptor;
use super::ids::DoubletId;
use super::pair::PairType;
use super::program::Program;
use std::collections::BTreeMap;

/// Descriptors keyed by the program that produced them. A program absent
/// from the map did not recognize the contact.
pub type ProgramDescriptors = BTreeMap<Program, Descriptor>;

/// Everything known about one doublet in one structure, merged across programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubletRecord {
    pub id: DoubletId,
    pub pair_type: PairType,
    pub descriptors: ProgramDescriptors,
}

impl DoubletRecord {
    pub fn new(id: DoubletId, pair_type: PairType) -> Self {
        Self {
            id,
            pair_type,
            descriptors: ProgramDescriptors::new(),
        }
    }

    pub fn with_descriptor(mut self, program: Program, descriptor: Descriptor) -> Self {
        self.descriptors.insert(program, descriptor);
        self
    }

    pub fn descriptor(&self, program: Program) -> Option<&Descriptor> {
        self.descriptors.get(&program)
    }

    pub fn is_recognized(&self) -> bool {
        !self.descriptors.is_empty()
    }

    /// Programs that recognized the doublet, in [`Program::ALL`] order.
    pub fn recognized_by(&self) -> impl Iterator<Item = Program> + '_ {
        self.descriptors.keys().copied()
    }
}
