use super::*;

/// # DEY - Decrement the Y register
pub fn dey(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let result = cpu.y().wrapping_sub(1);
    cpu.set_y(result);
    set_nz_flags(cpu, result);

    Ok(())
}
