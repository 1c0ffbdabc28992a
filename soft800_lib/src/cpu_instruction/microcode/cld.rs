use super::*;

/// # CLD - Clear the decimal flag
pub fn cld(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    cpu.set_flag(FLAG_D, false);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_cld() {
        let mut cpu = get_stuff(0x1000, vec![0xd8]);
        cpu.set_flag(FLAG_D, true);
        let log_line = cpu.step().unwrap();
        assert_eq!("CLD", log_line.mnemonic);
        assert!(!cpu.flag_is_set(FLAG_D));
        assert_eq!(Address::from(0x1001u16), cpu.pc());
    }
}
