use super::*;

/// # TYA - Transfer Y to the accumulator
pub fn tya(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = cpu.y();
    cpu.set_a(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}
