use super::*;

/// # PLP - Pull the status register from the stack
pub fn plp(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let status = cpu.pull();
    cpu.set_status(status);

    Ok(())
}
