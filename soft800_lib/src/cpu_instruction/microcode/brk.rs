use super::*;

/// # BRK
///
/// Generate a [soft interrupt](http://6502.org/tutorials/interrupts.html#2.2).
///
/// * Command Pointer register is pushed to the stack pointing 2 bytes after the
/// BRK instruction (the byte following BRK is a padding byte).
/// * Status register is pushed to the stack with the B flag set.
/// * I flag is set, whatever its previous state.
/// * Command pointer is loaded from the interrupt vector.
pub fn brk(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.enter_interrupt(
        cpu_instruction.address.wrapping_add(2),
        true,
        crate::cpu_instruction::INTERRUPT_VECTOR_ADDR,
    )?;

    Ok(())
}
