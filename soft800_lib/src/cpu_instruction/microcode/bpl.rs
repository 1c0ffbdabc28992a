use super::*;

/// # BPL - Branch if plus (N clear)
pub fn bpl(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let condition = !cpu.flag_is_set(FLAG_N);
    branch(cpu, cpu_instruction, condition)
}
