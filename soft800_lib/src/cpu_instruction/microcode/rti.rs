use super::*;

/// # RTI - Return from interrupt
///
/// Pull the status register then the command pointer. Unlike RTS the pulled
/// address is the exact return location.
pub fn rti(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let status = cpu.pull();
    cpu.set_status(status);
    let low = cpu.pull();
    let high = cpu.pull();
    cpu.jump(Address::from(u16::from_le_bytes([low, high])));

    Ok(())
}
