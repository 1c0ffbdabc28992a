use super::*;

/// # STY - store the Y register
pub fn sty(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let address = target_address(cpu, cpu_instruction)?;
    let y = cpu.y();
    cpu.memory_mut().poke(address, &[y])?;

    Ok(())
}
