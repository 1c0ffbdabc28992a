use super::*;

/// # JSR - Jump to subroutine
///
/// The pushed return address is the last byte of the JSR instruction, RTS
/// adds one to it.
pub fn jsr(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let destination = target_address(cpu, cpu_instruction)?;
    let return_address = cpu_instruction.address.wrapping_add(2);
    cpu.push(return_address.high_byte())?;
    cpu.push(return_address.low_byte())?;
    cpu.jump(destination);

    Ok(())
}
