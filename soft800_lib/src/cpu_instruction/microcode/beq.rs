use super::*;

/// # BEQ - Branch if equal (Z set)
pub fn beq(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let condition = cpu.flag_is_set(FLAG_Z);
    branch(cpu, cpu_instruction, condition)
}
