use super::*;

/// # INY - Increment the Y register
pub fn iny(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let result = cpu.y().wrapping_add(1);
    cpu.set_y(result);
    set_nz_flags(cpu, result);

    Ok(())
}
