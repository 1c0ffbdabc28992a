use super::*;

/// # SEI - Set the interrupt disable flag
pub fn sei(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.set_flag(FLAG_I, true);

    Ok(())
}
