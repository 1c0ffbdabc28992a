use crate::memory;
use std::error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AnticError {
    // ↓ scan lines rendered without meeting a vertical sync
    FrameOverrun(usize),
    Memory(memory::MemoryError),
}

pub type Result<T> = std::result::Result<T, AnticError>;

impl fmt::Display for AnticError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnticError::FrameOverrun(lines) => write!(
                f,
                "no vertical sync after {} scan lines, the display list does not end with a JVB",
                lines
            ),
            AnticError::Memory(e) => write!(f, "memory error while updating ANTIC registers: {}", e),
        }
    }
}

impl error::Error for AnticError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AnticError::Memory(e) => Some(e),
            AnticError::FrameOverrun(_) => None,
        }
    }
}

impl std::convert::From<memory::MemoryError> for AnticError {
    fn from(err: memory::MemoryError) -> AnticError {
        AnticError::Memory(err)
    }
}
