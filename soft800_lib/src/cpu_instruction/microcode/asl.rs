use super::*;

/// # ASL - Arithmetic shift left
///
/// Bit 7 goes in the carry, bit 0 is cleared. Works on the accumulator or on
/// memory.
pub fn asl(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    read_modify_write(cpu, cpu_instruction, |cpu, byte| {
        cpu.set_flag(FLAG_C, byte & 0x80 != 0);
        byte << 1
    })
}
