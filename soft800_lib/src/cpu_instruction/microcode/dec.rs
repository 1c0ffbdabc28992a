use super::*;

/// # DEC - Decrement memory
pub fn dec(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    read_modify_write(cpu, cpu_instruction, |_, byte| byte.wrapping_sub(1))
}
