use super::*;

/// # TXS - Transfer X to the stack pointer
///
/// This is the only transfer that does not change the flags.
pub fn txs(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let x = cpu.x();
    cpu.set_sp(x);

    Ok(())
}
