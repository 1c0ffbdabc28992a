use super::*;

/// # TAX - Transfer the accumulator to X
pub fn tax(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = cpu.a();
    cpu.set_x(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}
