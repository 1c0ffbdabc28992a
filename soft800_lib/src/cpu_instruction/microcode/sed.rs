use super::*;

/// # SED - Set the decimal flag
pub fn sed(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.set_flag(FLAG_D, true);

    Ok(())
}
