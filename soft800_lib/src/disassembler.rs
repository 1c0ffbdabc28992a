/*
 * Disassembler
 * Walks memory from a starting address and decodes one instruction at a time
 * without touching any processor state. The walk stops when the next
 * instruction would not fit below the top of the address space. A byte that
 * is not a known opcode gives a diagnostic line and the walk resumes on the
 * next byte.
 */
use crate::cpu_instruction::{format_bytes, InstructionSet};
use crate::memory::Memory;
use crate::value::Address;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisassemblyLine {
    pub address: Address,
    pub bytes: Vec<u8>,
    pub mnemonic: String,
    pub operand: String,
}

impl DisassemblyLine {
    /// False for the diagnostic lines of unknown opcodes.
    pub fn is_valid(&self) -> bool {
        self.mnemonic != "???"
    }

    pub fn width(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Display for DisassemblyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "#0x{:04X}: {: <14}{: <4} {}",
            self.address.as_u16(),
            format_bytes(&self.bytes),
            self.mnemonic,
            self.operand
        );

        write!(f, "{}", line.trim_end())
    }
}

pub struct MemoryParserIterator<'a> {
    address: Option<Address>,
    memory: &'a Memory,
    instruction_set: &'a InstructionSet,
}

impl<'a> MemoryParserIterator<'a> {
    pub fn new(
        start: Address,
        memory: &'a Memory,
        instruction_set: &'a InstructionSet,
    ) -> MemoryParserIterator<'a> {
        MemoryParserIterator {
            address: Some(start),
            memory,
            instruction_set,
        }
    }
}

impl<'a> Iterator for MemoryParserIterator<'a> {
    type Item = DisassemblyLine;

    fn next(&mut self) -> Option<DisassemblyLine> {
        let address = self.address?;
        let opcode = self.memory.peek(address);
        let instruction = self.instruction_set.get(opcode);

        if !instruction.is_valid() {
            self.address = address.checked_add(1);

            return Some(DisassemblyLine {
                address,
                bytes: vec![opcode],
                mnemonic: "???".to_owned(),
                operand: format!("; unknown opcode 0x{:02x}", opcode),
            });
        }

        let width = instruction.addressing_mode.width();
        // the operand would lie past 0xFFFF
        if address.checked_add(width).is_none() {
            self.address = None;
            return None;
        }

        let mut bytes = vec![opcode];
        for offset in 1..=width {
            bytes.push(self.memory.peek(address.wrapping_add(offset as u16)));
        }
        let operand = match width {
            0 => 0,
            1 => bytes[1] as u16,
            _ => u16::from_le_bytes([bytes[1], bytes[2]]),
        };
        self.address = address.checked_add(1 + width);

        Some(DisassemblyLine {
            address,
            bytes,
            mnemonic: instruction.mnemonic.to_owned(),
            operand: instruction.addressing_mode.format(operand, address),
        })
    }
}

/// Disassemble the instructions starting in `[start, end[`.
pub fn disassemble(
    start: Address,
    end: Address,
    memory: &Memory,
    instruction_set: &InstructionSet,
) -> Vec<DisassemblyLine> {
    MemoryParserIterator::new(start, memory, instruction_set)
        .take_while(|line| line.address < end)
        .collect()
}
