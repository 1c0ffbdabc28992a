use super::*;

/// # TXA - Transfer X to the accumulator
pub fn txa(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = cpu.x();
    cpu.set_a(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}
