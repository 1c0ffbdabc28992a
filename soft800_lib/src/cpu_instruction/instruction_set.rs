use super::cpu_instruction::CPUInstruction;
use super::microcode::*;
use crate::addressing_mode::AddressingMode;
use crate::addressing_mode::AddressingMode::*;
use crate::processing_unit::Processor;
use std::fmt;
use std::sync::{Arc, OnceLock};

pub type Microcode = fn(&mut Processor, &CPUInstruction) -> Result<()>;

/*
 * Instruction
 * One entry of the opcode table. Mnemonics sharing a behavior share the same
 * microcode, only the addressing mode differs.
 */
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub opcode: u8,
    pub addressing_mode: AddressingMode,
    pub microcode: Microcode,
    valid: bool,
}

impl Instruction {
    pub const fn new(
        mnemonic: &'static str,
        opcode: u8,
        addressing_mode: AddressingMode,
        microcode: Microcode,
    ) -> Instruction {
        Instruction {
            mnemonic,
            opcode,
            addressing_mode,
            microcode,
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Instruction [0x{:02x} {} {:?}]",
            self.opcode, self.mnemonic, self.addressing_mode
        )
    }
}

fn invalid(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    Err(MicrocodeError::InvalidInstruction {
        opcode: cpu_instruction.opcode,
        address: cpu_instruction.address,
        processor: cpu.name().to_owned(),
    })
}

static INVALID_INSTRUCTION: Instruction = Instruction {
    mnemonic: "???",
    opcode: 0x00,
    addressing_mode: Implied,
    microcode: invalid,
    valid: false,
};

/*
 * InstructionSet
 * 256 slots table, built once. Slots without an instruction give the invalid
 * instruction whose execution always fails.
 */
pub struct InstructionSet {
    slots: Vec<Option<Instruction>>,
}

impl InstructionSet {
    /// Build a table from the given entries, the last one wins when several
    /// entries share an opcode.
    pub fn from_entries(entries: &[Instruction]) -> InstructionSet {
        let mut slots = vec![None; 256];

        for entry in entries {
            slots[entry.opcode as usize] = Some(*entry);
        }

        InstructionSet { slots }
    }

    /// The documented NMOS 6502 instruction set.
    pub fn nmos() -> InstructionSet {
        InstructionSet::from_entries(OPCODES)
    }

    /// The NMOS instruction set, built on first use and shared afterwards.
    pub fn shared() -> Arc<InstructionSet> {
        static SHARED: OnceLock<Arc<InstructionSet>> = OnceLock::new();

        SHARED
            .get_or_init(|| Arc::new(InstructionSet::nmos()))
            .clone()
    }

    pub fn get(&self, opcode: u8) -> &Instruction {
        self.slots[opcode as usize]
            .as_ref()
            .unwrap_or(&INVALID_INSTRUCTION)
    }

    /// Number of valid instructions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for InstructionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstructionSet [{} instructions]", self.len())
    }
}

static OPCODES: &[Instruction] = &[
    Instruction::new("ADC", 0x69, Immediate, adc::adc),
    Instruction::new("ADC", 0x65, ZeroPage, adc::adc),
    Instruction::new("ADC", 0x75, ZeroPageXIndexed, adc::adc),
    Instruction::new("ADC", 0x6d, Absolute, adc::adc),
    Instruction::new("ADC", 0x7d, AbsoluteXIndexed, adc::adc),
    Instruction::new("ADC", 0x79, AbsoluteYIndexed, adc::adc),
    Instruction::new("ADC", 0x61, ZeroPageXIndexedIndirect, adc::adc),
    Instruction::new("ADC", 0x71, ZeroPageIndirectYIndexed, adc::adc),
    Instruction::new("AND", 0x29, Immediate, and::and),
    Instruction::new("AND", 0x25, ZeroPage, and::and),
    Instruction::new("AND", 0x35, ZeroPageXIndexed, and::and),
    Instruction::new("AND", 0x2d, Absolute, and::and),
    Instruction::new("AND", 0x3d, AbsoluteXIndexed, and::and),
    Instruction::new("AND", 0x39, AbsoluteYIndexed, and::and),
    Instruction::new("AND", 0x21, ZeroPageXIndexedIndirect, and::and),
    Instruction::new("AND", 0x31, ZeroPageIndirectYIndexed, and::and),
    Instruction::new("ASL", 0x0a, Accumulator, asl::asl),
    Instruction::new("ASL", 0x06, ZeroPage, asl::asl),
    Instruction::new("ASL", 0x16, ZeroPageXIndexed, asl::asl),
    Instruction::new("ASL", 0x0e, Absolute, asl::asl),
    Instruction::new("ASL", 0x1e, AbsoluteXIndexed, asl::asl),
    Instruction::new("BCC", 0x90, Relative, bcc::bcc),
    Instruction::new("BCS", 0xb0, Relative, bcs::bcs),
    Instruction::new("BEQ", 0xf0, Relative, beq::beq),
    Instruction::new("BIT", 0x24, ZeroPage, bit::bit),
    Instruction::new("BIT", 0x2c, Absolute, bit::bit),
    Instruction::new("BMI", 0x30, Relative, bmi::bmi),
    Instruction::new("BNE", 0xd0, Relative, bne::bne),
    Instruction::new("BPL", 0x10, Relative, bpl::bpl),
    Instruction::new("BRK", 0x00, Implied, brk::brk),
    Instruction::new("BVC", 0x50, Relative, bvc::bvc),
    Instruction::new("BVS", 0x70, Relative, bvs::bvs),
    Instruction::new("CLC", 0x18, Implied, clc::clc),
    Instruction::new("CLD", 0xd8, Implied, cld::cld),
    Instruction::new("CLI", 0x58, Implied, cli::cli),
    Instruction::new("CLV", 0xb8, Implied, clv::clv),
    Instruction::new("CMP", 0xc9, Immediate, cmp::cmp),
    Instruction::new("CMP", 0xc5, ZeroPage, cmp::cmp),
    Instruction::new("CMP", 0xd5, ZeroPageXIndexed, cmp::cmp),
    Instruction::new("CMP", 0xcd, Absolute, cmp::cmp),
    Instruction::new("CMP", 0xdd, AbsoluteXIndexed, cmp::cmp),
    Instruction::new("CMP", 0xd9, AbsoluteYIndexed, cmp::cmp),
    Instruction::new("CMP", 0xc1, ZeroPageXIndexedIndirect, cmp::cmp),
    Instruction::new("CMP", 0xd1, ZeroPageIndirectYIndexed, cmp::cmp),
    Instruction::new("CPX", 0xe0, Immediate, cpx::cpx),
    Instruction::new("CPX", 0xe4, ZeroPage, cpx::cpx),
    Instruction::new("CPX", 0xec, Absolute, cpx::cpx),
    Instruction::new("CPY", 0xc0, Immediate, cpy::cpy),
    Instruction::new("CPY", 0xc4, ZeroPage, cpy::cpy),
    Instruction::new("CPY", 0xcc, Absolute, cpy::cpy),
    Instruction::new("DEC", 0xc6, ZeroPage, dec::dec),
    Instruction::new("DEC", 0xd6, ZeroPageXIndexed, dec::dec),
    Instruction::new("DEC", 0xce, Absolute, dec::dec),
    Instruction::new("DEC", 0xde, AbsoluteXIndexed, dec::dec),
    Instruction::new("DEX", 0xca, Implied, dex::dex),
    Instruction::new("DEY", 0x88, Implied, dey::dey),
    Instruction::new("EOR", 0x49, Immediate, eor::eor),
    Instruction::new("EOR", 0x45, ZeroPage, eor::eor),
    Instruction::new("EOR", 0x55, ZeroPageXIndexed, eor::eor),
    Instruction::new("EOR", 0x4d, Absolute, eor::eor),
    Instruction::new("EOR", 0x5d, AbsoluteXIndexed, eor::eor),
    Instruction::new("EOR", 0x59, AbsoluteYIndexed, eor::eor),
    Instruction::new("EOR", 0x41, ZeroPageXIndexedIndirect, eor::eor),
    Instruction::new("EOR", 0x51, ZeroPageIndirectYIndexed, eor::eor),
    Instruction::new("INC", 0xe6, ZeroPage, inc::inc),
    Instruction::new("INC", 0xf6, ZeroPageXIndexed, inc::inc),
    Instruction::new("INC", 0xee, Absolute, inc::inc),
    Instruction::new("INC", 0xfe, AbsoluteXIndexed, inc::inc),
    Instruction::new("INX", 0xe8, Implied, inx::inx),
    Instruction::new("INY", 0xc8, Implied, iny::iny),
    Instruction::new("JMP", 0x4c, Absolute, jmp::jmp),
    Instruction::new("JMP", 0x6c, Indirect, jmp::jmp),
    Instruction::new("JSR", 0x20, Absolute, jsr::jsr),
    Instruction::new("LDA", 0xa9, Immediate, lda::lda),
    Instruction::new("LDA", 0xa5, ZeroPage, lda::lda),
    Instruction::new("LDA", 0xb5, ZeroPageXIndexed, lda::lda),
    Instruction::new("LDA", 0xad, Absolute, lda::lda),
    Instruction::new("LDA", 0xbd, AbsoluteXIndexed, lda::lda),
    Instruction::new("LDA", 0xb9, AbsoluteYIndexed, lda::lda),
    Instruction::new("LDA", 0xa1, ZeroPageXIndexedIndirect, lda::lda),
    Instruction::new("LDA", 0xb1, ZeroPageIndirectYIndexed, lda::lda),
    Instruction::new("LDX", 0xa2, Immediate, ldx::ldx),
    Instruction::new("LDX", 0xa6, ZeroPage, ldx::ldx),
    Instruction::new("LDX", 0xb6, ZeroPageYIndexed, ldx::ldx),
    Instruction::new("LDX", 0xae, Absolute, ldx::ldx),
    Instruction::new("LDX", 0xbe, AbsoluteYIndexed, ldx::ldx),
    Instruction::new("LDY", 0xa0, Immediate, ldy::ldy),
    Instruction::new("LDY", 0xa4, ZeroPage, ldy::ldy),
    Instruction::new("LDY", 0xb4, ZeroPageXIndexed, ldy::ldy),
    Instruction::new("LDY", 0xac, Absolute, ldy::ldy),
    Instruction::new("LDY", 0xbc, AbsoluteXIndexed, ldy::ldy),
    Instruction::new("LSR", 0x4a, Accumulator, lsr::lsr),
    Instruction::new("LSR", 0x46, ZeroPage, lsr::lsr),
    Instruction::new("LSR", 0x56, ZeroPageXIndexed, lsr::lsr),
    Instruction::new("LSR", 0x4e, Absolute, lsr::lsr),
    Instruction::new("LSR", 0x5e, AbsoluteXIndexed, lsr::lsr),
    Instruction::new("NOP", 0xea, Implied, nop::nop),
    Instruction::new("ORA", 0x09, Immediate, ora::ora),
    Instruction::new("ORA", 0x05, ZeroPage, ora::ora),
    Instruction::new("ORA", 0x15, ZeroPageXIndexed, ora::ora),
    Instruction::new("ORA", 0x0d, Absolute, ora::ora),
    Instruction::new("ORA", 0x1d, AbsoluteXIndexed, ora::ora),
    Instruction::new("ORA", 0x19, AbsoluteYIndexed, ora::ora),
    Instruction::new("ORA", 0x01, ZeroPageXIndexedIndirect, ora::ora),
    Instruction::new("ORA", 0x11, ZeroPageIndirectYIndexed, ora::ora),
    Instruction::new("PHA", 0x48, Implied, pha::pha),
    Instruction::new("PHP", 0x08, Implied, php::php),
    Instruction::new("PLA", 0x68, Implied, pla::pla),
    Instruction::new("PLP", 0x28, Implied, plp::plp),
    Instruction::new("ROL", 0x2a, Accumulator, rol::rol),
    Instruction::new("ROL", 0x26, ZeroPage, rol::rol),
    Instruction::new("ROL", 0x36, ZeroPageXIndexed, rol::rol),
    Instruction::new("ROL", 0x2e, Absolute, rol::rol),
    Instruction::new("ROL", 0x3e, AbsoluteXIndexed, rol::rol),
    Instruction::new("ROR", 0x6a, Accumulator, ror::ror),
    Instruction::new("ROR", 0x66, ZeroPage, ror::ror),
    Instruction::new("ROR", 0x76, ZeroPageXIndexed, ror::ror),
    Instruction::new("ROR", 0x6e, Absolute, ror::ror),
    Instruction::new("ROR", 0x7e, AbsoluteXIndexed, ror::ror),
    Instruction::new("RTI", 0x40, Implied, rti::rti),
    Instruction::new("RTS", 0x60, Implied, rts::rts),
    Instruction::new("SBC", 0xe9, Immediate, sbc::sbc),
    Instruction::new("SBC", 0xe5, ZeroPage, sbc::sbc),
    Instruction::new("SBC", 0xf5, ZeroPageXIndexed, sbc::sbc),
    Instruction::new("SBC", 0xed, Absolute, sbc::sbc),
    Instruction::new("SBC", 0xfd, AbsoluteXIndexed, sbc::sbc),
    Instruction::new("SBC", 0xf9, AbsoluteYIndexed, sbc::sbc),
    Instruction::new("SBC", 0xe1, ZeroPageXIndexedIndirect, sbc::sbc),
    Instruction::new("SBC", 0xf1, ZeroPageIndirectYIndexed, sbc::sbc),
    Instruction::new("SEC", 0x38, Implied, sec::sec),
    Instruction::new("SED", 0xf8, Implied, sed::sed),
    Instruction::new("SEI", 0x78, Implied, sei::sei),
    Instruction::new("STA", 0x85, ZeroPage, sta::sta),
    Instruction::new("STA", 0x95, ZeroPageXIndexed, sta::sta),
    Instruction::new("STA", 0x8d, Absolute, sta::sta),
    Instruction::new("STA", 0x9d, AbsoluteXIndexed, sta::sta),
    Instruction::new("STA", 0x99, AbsoluteYIndexed, sta::sta),
    Instruction::new("STA", 0x81, ZeroPageXIndexedIndirect, sta::sta),
    Instruction::new("STA", 0x91, ZeroPageIndirectYIndexed, sta::sta),
    Instruction::new("STX", 0x86, ZeroPage, stx::stx),
    Instruction::new("STX", 0x96, ZeroPageYIndexed, stx::stx),
    Instruction::new("STX", 0x8e, Absolute, stx::stx),
    Instruction::new("STY", 0x84, ZeroPage, sty::sty),
    Instruction::new("STY", 0x94, ZeroPageXIndexed, sty::sty),
    Instruction::new("STY", 0x8c, Absolute, sty::sty),
    Instruction::new("TAX", 0xaa, Implied, tax::tax),
    Instruction::new("TAY", 0xa8, Implied, tay::tay),
    Instruction::new("TSX", 0xba, Implied, tsx::tsx),
    Instruction::new("TXA", 0x8a, Implied, txa::txa),
    Instruction::new("TXS", 0x9a, Implied, txs::txs),
    Instruction::new("TYA", 0x98, Implied, tya::tya),
];
