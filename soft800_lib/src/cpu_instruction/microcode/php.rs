use super::*;

/// # PHP - Push the status register on the stack
///
/// The pushed copy always has the B flag set.
pub fn php(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let status = cpu.status() | FLAG_B;
    cpu.push(status)?;

    Ok(())
}
