use super::*;

/// # ROL - Rotate left through the carry
pub fn rol(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    read_modify_write(cpu, cpu_instruction, |cpu, byte| {
        let carry = cpu.flag_is_set(FLAG_C) as u8;
        cpu.set_flag(FLAG_C, byte & 0x80 != 0);
        byte << 1 | carry
    })
}
