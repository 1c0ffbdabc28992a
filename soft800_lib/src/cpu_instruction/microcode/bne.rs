use super::*;

/// # BNE - Branch if not equal (Z clear)
pub fn bne(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let condition = !cpu.flag_is_set(FLAG_Z);
    branch(cpu, cpu_instruction, condition)
}
