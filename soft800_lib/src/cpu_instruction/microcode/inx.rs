use super::*;

/// # INX - Increment the X register
pub fn inx(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let result = cpu.x().wrapping_add(1);
    cpu.set_x(result);
    set_nz_flags(cpu, result);

    Ok(())
}
