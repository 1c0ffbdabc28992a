use super::*;

/// # CLV - Clear the overflow flag
pub fn clv(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.set_flag(FLAG_V, false);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_clv() {
        let mut cpu = get_stuff(0x1000, vec![0xb8]);
        cpu.set_flag(FLAG_V, true);
        let log_line = cpu.step().unwrap();
        assert_eq!("CLV", log_line.mnemonic);
        assert!(!cpu.flag_is_set(FLAG_V));
        assert_eq!(Address::from(0x1001u16), cpu.pc());
    }
}
