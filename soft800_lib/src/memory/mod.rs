mod error;
mod memory_bus;
mod ram;

pub use error::MemoryError;
pub use memory_bus::{Memory, WriteHook};
pub use ram::RAM;

pub const MEMMAX: usize = 65535;

/*
 * AddressableIO
 * this trait defines the interface for all memory systems
 */
pub trait AddressableIO {
    fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError>;
    fn get_size(&self) -> usize;
}
