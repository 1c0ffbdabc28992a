use super::*;

/// # PLA - Pull the accumulator from the stack
pub fn pla(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = cpu.pull();
    cpu.set_a(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}
