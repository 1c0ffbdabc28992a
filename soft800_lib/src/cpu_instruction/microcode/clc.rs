use super::*;

/// # CLC - Clear the carry flag
pub fn clc(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.set_flag(FLAG_C, false);

    Ok(())
}
