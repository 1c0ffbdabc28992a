use super::*;

/// # PHA - Push the accumulator on the stack
pub fn pha(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let a = cpu.a();
    cpu.push(a)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_pha() {
        let mut cpu = get_stuff(0x1000, vec![0x48]);
        cpu.set_a(0x42);
        cpu.step().unwrap();
        assert_eq!(0xfe, cpu.sp());
        assert_eq!(0x42, cpu.stack_peek());
        assert_eq!(0x42, cpu.memory().peek(Address::from(0x01ffu16)));
    }
}
