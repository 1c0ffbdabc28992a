use super::*;

/// # STX - store the X register
pub fn stx(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let address = target_address(cpu, cpu_instruction)?;
    let x = cpu.x();
    cpu.memory_mut().poke(address, &[x])?;

    Ok(())
}
