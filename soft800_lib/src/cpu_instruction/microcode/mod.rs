use super::CPUInstruction;
use crate::addressing_mode::AddressingMode;
use crate::processing_unit::Processor;
use crate::registers::*;
use crate::value::Address;

mod error;
pub use error::{MicrocodeError, Result};

pub mod adc;
pub mod and;
pub mod asl;
pub mod bcc;
pub mod bcs;
pub mod beq;
pub mod bit;
pub mod bmi;
pub mod bne;
pub mod bpl;
pub mod brk;
pub mod bvc;
pub mod bvs;
pub mod clc;
pub mod cld;
pub mod cli;
pub mod clv;
pub mod cmp;
pub mod cpx;
pub mod cpy;
pub mod dec;
pub mod dex;
pub mod dey;
pub mod eor;
pub mod inc;
pub mod inx;
pub mod iny;
pub mod jmp;
pub mod jsr;
pub mod lda;
pub mod ldx;
pub mod ldy;
pub mod lsr;
pub mod nop;
pub mod ora;
pub mod pha;
pub mod php;
pub mod pla;
pub mod plp;
pub mod rol;
pub mod ror;
pub mod rti;
pub mod rts;
pub mod sbc;
pub mod sec;
pub mod sed;
pub mod sei;
pub mod sta;
pub mod stx;
pub mod sty;
pub mod tax;
pub mod tay;
pub mod tsx;
pub mod txa;
pub mod txs;
pub mod tya;

/*
 * Helpers shared by the microcode functions.
 */

fn read_value(cpu: &Processor, cpu_instruction: &CPUInstruction) -> Result<u8> {
    Ok(cpu_instruction
        .addressing_mode
        .value(cpu, cpu_instruction.operand)?)
}

fn target_address(cpu: &Processor, cpu_instruction: &CPUInstruction) -> Result<Address> {
    Ok(cpu_instruction
        .addressing_mode
        .address(cpu, cpu_instruction.operand)?)
}

fn set_nz_flags(cpu: &mut Processor, value: u8) {
    cpu.set_flag(FLAG_N, value & 0x80 != 0);
    cpu.set_flag(FLAG_Z, value == 0);
}

/// Apply `operation` to the accumulator or to the byte at the operand's
/// address and store the result back where it was read.
fn read_modify_write(
    cpu: &mut Processor,
    cpu_instruction: &CPUInstruction,
    operation: fn(&mut Processor, u8) -> u8,
) -> Result<()> {
    if cpu_instruction.addressing_mode == AddressingMode::Accumulator {
        let a = cpu.a();
        let byte = operation(cpu, a);
        cpu.set_a(byte);
        set_nz_flags(cpu, byte);
    } else {
        let address = target_address(cpu, cpu_instruction)?;
        let byte = cpu.memory().peek(address);
        let byte = operation(cpu, byte);
        cpu.memory_mut().poke(address, &[byte])?;
        set_nz_flags(cpu, byte);
    }

    Ok(())
}

fn branch(cpu: &mut Processor, cpu_instruction: &CPUInstruction, condition: bool) -> Result<()> {
    if condition {
        let destination = target_address(cpu, cpu_instruction)?;
        cpu.jump(destination);
    }

    Ok(())
}

fn compare(cpu: &mut Processor, register: u8, byte: u8) {
    cpu.set_flag(FLAG_C, register >= byte);
    set_nz_flags(cpu, register.wrapping_sub(byte));
}
