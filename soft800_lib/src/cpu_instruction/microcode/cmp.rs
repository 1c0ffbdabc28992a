use super::*;

/// # CMP - Compare with the accumulator
///
/// C is set when A >= operand, Z when they are equal and N from bit 7 of the
/// difference.
pub fn cmp(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    let a = cpu.a();
    compare(cpu, a, byte);

    Ok(())
}
