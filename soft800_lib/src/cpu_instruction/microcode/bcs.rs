use super::*;

/// # BCS - Branch if carry set
pub fn bcs(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let condition = cpu.flag_is_set(FLAG_C);
    branch(cpu, cpu_instruction, condition)
}
