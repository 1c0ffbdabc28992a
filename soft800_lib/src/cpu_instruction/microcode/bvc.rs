use super::*;

/// # BVC - Branch if overflow clear
pub fn bvc(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let condition = !cpu.flag_is_set(FLAG_V);
    branch(cpu, cpu_instruction, condition)
}
