use super::instruction_set::{Instruction, Microcode};
use super::microcode::Result as MicrocodeResult;
use crate::addressing_mode::AddressingMode;
use crate::processing_unit::Processor;
use crate::value::Address;
use std::fmt;

/*
 * CPUInstruction
 * An instruction decoded at a given address: the table entry plus the raw
 * operand read after the opcode.
 */
#[derive(Clone)]
pub struct CPUInstruction {
    pub address: Address,
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub addressing_mode: AddressingMode,
    pub operand: u16,
    microcode: Microcode,
}

impl CPUInstruction {
    pub fn new(
        address: u16,
        opcode: u8,
        mnemonic: &'static str,
        addressing_mode: AddressingMode,
        operand: u16,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            address: Address::from(address),
            opcode,
            mnemonic,
            addressing_mode,
            operand,
            microcode,
        }
    }

    pub fn from_instruction(
        address: Address,
        opcode: u8,
        instruction: &Instruction,
        operand: u16,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: instruction.mnemonic,
            addressing_mode: instruction.addressing_mode,
            operand,
            microcode: instruction.microcode,
        }
    }

    pub fn execute(&self, cpu: &mut Processor) -> MicrocodeResult<()> {
        (self.microcode)(cpu, self)
    }

    /// Opcode followed by the operand bytes.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = vec![self.opcode];
        bytes.extend_from_slice(&self.operand.to_le_bytes()[..self.addressing_mode.width()]);

        bytes
    }

    pub fn operand_text(&self) -> String {
        self.addressing_mode.format(self.operand, self.address)
    }
}

pub(crate) fn format_bytes(bytes: &[u8]) -> String {
    format!(
        "({})",
        bytes
            .iter()
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
    )
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {: <15}",
            self.address.as_u16(),
            format_bytes(&self.bytes()),
            self.mnemonic,
            self.operand_text()
        )
    }
}

impl fmt::Debug for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CPUInstruction [{}]", self)
    }
}

/*
 * LogLine
 * What happened during a step: the instruction executed and the resulting
 * registers.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub address: Address,
    pub bytes: Vec<u8>,
    pub mnemonic: String,
    pub operand: String,
    pub outcome: String,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, cpu: &Processor) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            bytes: cpu_instruction.bytes(),
            mnemonic: cpu_instruction.mnemonic.to_owned(),
            operand: cpu_instruction.operand_text(),
            outcome: format!(
                "[A=0x{:02x}][X=0x{:02x}][Y=0x{:02x}][SP=0x{:02x}][S={}]",
                cpu.a(),
                cpu.x(),
                cpu.y(),
                cpu.sp(),
                cpu.registers().format_status()
            ),
        }
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#0x{:04X}: {: <14}{: <4} {: <15}  {}",
            self.address.as_u16(),
            format_bytes(&self.bytes),
            self.mnemonic,
            self.operand,
            self.outcome
        )
    }
}
