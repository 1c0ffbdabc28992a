use super::*;

/// # NOP - No operation
pub fn nop(_cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    Ok(())
}
