use super::*;

/// # TAY - Transfer the accumulator to Y
pub fn tay(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = cpu.a();
    cpu.set_y(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}
