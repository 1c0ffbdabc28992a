use super::*;
use crate::value::Address;

pub struct RAM {
    ram: Box<[u8; MEMMAX + 1]>,
}

impl Default for RAM {
    fn default() -> Self {
        Self {
            ram: Box::new([0x00; MEMMAX + 1]),
        }
    }
}

impl RAM {
    /// The RAM covers the whole address space, any address is a valid index.
    pub(crate) fn byte(&self, address: Address) -> u8 {
        self.ram[address.as_usize()]
    }
}

impl AddressableIO for RAM {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if self.ram.len() >= addr + len {
            Ok(self.ram[addr..addr + len].to_vec())
        } else {
            Err(MemoryError::ReadOverflow(len, addr))
        }
    }

    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        if location + data.len() > self.ram.len() {
            Err(MemoryError::WriteOverflow(data.len(), location))
        } else {
            self.ram[location..location + data.len()].copy_from_slice(data);

            Ok(())
        }
    }

    fn get_size(&self) -> usize {
        self.ram.len()
    }
}
