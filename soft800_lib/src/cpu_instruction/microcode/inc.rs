use super::*;

/// # INC - Increment memory
pub fn inc(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    read_modify_write(cpu, cpu_instruction, |_, byte| byte.wrapping_add(1))
}
