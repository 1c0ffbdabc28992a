use super::*;

/// # LSR - Logical shift right
///
/// Bit 0 goes in the carry, bit 7 is cleared so the result is never negative.
pub fn lsr(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    read_modify_write(cpu, cpu_instruction, |cpu, byte| {
        cpu.set_flag(FLAG_C, byte & 0x01 != 0);
        byte >> 1
    })
}
