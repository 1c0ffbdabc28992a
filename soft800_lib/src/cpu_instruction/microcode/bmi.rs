use super::*;

/// # BMI - Branch if minus (N set)
pub fn bmi(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let condition = cpu.flag_is_set(FLAG_N);
    branch(cpu, cpu_instruction, condition)
}
