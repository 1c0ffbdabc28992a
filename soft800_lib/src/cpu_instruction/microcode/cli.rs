use super::*;

/// # CLI - Clear the interrupt disable flag
pub fn cli(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.set_flag(FLAG_I, false);

    Ok(())
}
