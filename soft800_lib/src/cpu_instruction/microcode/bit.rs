use super::*;

/// # BIT - Test bits
///
/// Z is set from the accumulator AND the operand, N and V are copied from the
/// bits 7 and 6 of the operand. The accumulator is not changed.
pub fn bit(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;

    cpu.set_flag(FLAG_Z, cpu.a() & byte == 0);
    cpu.set_flag(FLAG_N, byte & 0x80 != 0);
    cpu.set_flag(FLAG_V, byte & 0x40 != 0);

    Ok(())
}
