use super::*;

/// # CPX - Compare with the X register
pub fn cpx(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    let x = cpu.x();
    compare(cpu, x, byte);

    Ok(())
}
