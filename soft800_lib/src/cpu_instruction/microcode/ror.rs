use super::*;

/// # ROR - Rotate right through the carry
pub fn ror(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    read_modify_write(cpu, cpu_instruction, |cpu, byte| {
        let carry = if cpu.flag_is_set(FLAG_C) { 0x80 } else { 0x00 };
        cpu.set_flag(FLAG_C, byte & 0x01 != 0);
        byte >> 1 | carry
    })
}
