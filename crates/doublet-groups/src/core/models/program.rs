use super::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// External annotation program contributing descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Program {
    /// RNAView
    RV,
    /// MC-Annotate
    MC,
    /// MoDeRNA
    MO,
    /// FR3D
    FR,
}

impl Program {
    pub const ALL: [Program; 4] = [Program::RV, Program::MC, Program::MO, Program::FR];

    pub fn code(&self) -> &'static str {
        match self {
            Program::RV => "RV",
            Program::MC => "MC",
            Program::MO => "MO",
            Program::FR => "FR",
        }
    }
}

impl FromStr for Program {
    type Err = FormatError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RV" => Ok(Program::RV),
            "MC" => Ok(Program::MC),
            "MO" => Ok(Program::MO),
            "FR" => Ok(Program::FR),
            _ => Err(FormatError::Program(s.to_string())),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
