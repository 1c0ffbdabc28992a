use super::*;

/// # LDY - load the Y register
pub fn ldy(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    cpu.set_y(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}
