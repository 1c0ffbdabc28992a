use super::*;

/// # STA - store the accumulator
pub fn sta(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let address = target_address(cpu, cpu_instruction)?;
    let a = cpu.a();
    cpu.memory_mut().poke(address, &[a])?;

    Ok(())
}
