use super::*;

/// # TSX - Transfer the stack pointer to X
pub fn tsx(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let sp = cpu.sp();
    cpu.set_x(sp);
    set_nz_flags(cpu, sp);

    Ok(())
}
