use super::MEMMAX;
use std::error;
use std::fmt;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOverflow(usize, usize),  // read len, address
    WriteOverflow(usize, usize), // write len, address
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MemoryError::ReadOverflow(len, addr) => write!(
                f,
                "could not READ {} bytes at address #0x{:04X}, address max is #0x{:04X}",
                len, addr, MEMMAX
            ),
            MemoryError::WriteOverflow(len, addr) => write!(
                f,
                "could not WRITE {} bytes at address #0x{:04X}, address max is #0x{:04X}",
                len, addr, MEMMAX
            ),
        }
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
