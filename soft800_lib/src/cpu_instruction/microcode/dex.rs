use super::*;

/// # DEX - Decrement the X register
pub fn dex(cpu: &mut Processor, _cpu_instruction: &CPUInstruction) -> Result<()> {
    let result = cpu.x().wrapping_sub(1);
    cpu.set_x(result);
    set_nz_flags(cpu, result);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_dex() {
        let mut cpu = get_stuff(0x1000, vec![0xca]);
        cpu.set_x(0x00);
        let log_line = cpu.step().unwrap();
        assert_eq!("DEX", log_line.mnemonic);
        assert_eq!(0xff, cpu.x());
        assert!(cpu.flag_is_set(FLAG_N));
        assert!(!cpu.flag_is_set(FLAG_Z));
        assert_eq!(Address::from(0x1001u16), cpu.pc());
    }
}
