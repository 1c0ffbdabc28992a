use super::*;

/// # SEC - Set the carry flag
pub fn sec(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.set_flag(FLAG_C, true);

    Ok(())
}
