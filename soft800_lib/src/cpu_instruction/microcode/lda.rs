use super::*;

/// # LDA - load the accumulator
pub fn lda(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    cpu.set_a(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}
