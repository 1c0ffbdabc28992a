mod addressing_mode;
pub mod antic;
mod cpu_instruction;
mod delegate;
mod disassembler;
pub mod memory;
mod processing_unit;
mod registers;
mod value;

pub use addressing_mode::{resolve_relative, AddressingMode, Resolution, ResolutionError};
pub use cpu_instruction::microcode::{MicrocodeError, Result as MicrocodeResult};
pub use cpu_instruction::{
    CPUInstruction, Instruction, InstructionSet, LogLine, Microcode, INIT_VECTOR_ADDR,
    INTERRUPT_VECTOR_ADDR, NMI_VECTOR_ADDR,
};
pub use delegate::{Delegate, Handle};
pub use disassembler::{disassemble, DisassemblyLine, MemoryParserIterator};
pub use memory::{AddressableIO, Memory, MemoryError};
pub use processing_unit::*;
pub use registers::*;
pub use value::{Address, Byte, ValueError};
