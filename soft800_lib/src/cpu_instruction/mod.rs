pub(crate) mod cpu_instruction;
mod instruction_set;
pub mod microcode;

pub const NMI_VECTOR_ADDR: usize = 0xfffa;
pub const INIT_VECTOR_ADDR: usize = 0xfffc;
pub const INTERRUPT_VECTOR_ADDR: usize = 0xfffe;

pub use self::cpu_instruction::{CPUInstruction, LogLine};
pub(crate) use self::cpu_instruction::format_bytes;
pub use self::instruction_set::{Instruction, InstructionSet, Microcode};
