use super::*;

/// # CPY - Compare with the Y register
pub fn cpy(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    let y = cpu.y();
    compare(cpu, y, byte);

    Ok(())
}
