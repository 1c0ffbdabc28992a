use super::*;

/// # EOR - bitwise exclusive OR with the accumulator
pub fn eor(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    let result = cpu.a() ^ byte;
    cpu.set_a(result);
    set_nz_flags(cpu, result);

    Ok(())
}
