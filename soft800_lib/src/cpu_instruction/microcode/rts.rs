use super::*;

/// # RTS - Return from subroutine
pub fn rts(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let low = cpu.pull();
    let high = cpu.pull();
    let destination = Address::from(u16::from_le_bytes([low, high])).wrapping_add(1);
    cpu.jump(destination);

    Ok(())
}
