use super::*;

/// # LDX - load the X register
pub fn ldx(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    cpu.set_x(byte);
    set_nz_flags(cpu, byte);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_ldx() {
        let mut cpu = get_stuff(0x1000, vec![0xa2, 0x80]);
        cpu.step().unwrap();
        assert_eq!(0x80, cpu.x());
        assert!(cpu.flag_is_set(FLAG_N));
        assert!(!cpu.flag_is_set(FLAG_Z));
    }

    #[test]
    fn test_ldx_zero_page_y() {
        let mut cpu = get_stuff(0x1000, vec![0xb6, 0x10]);
        cpu.memory_mut()
            .poke(Address::from(0x0012u16), &[0x00])
            .unwrap();
        cpu.set_x(0x23);
        cpu.set_y(0x02);
        let log_line = cpu.step().unwrap();
        assert_eq!(0x00, cpu.x());
        assert!(cpu.flag_is_set(FLAG_Z));
        assert_eq!("$10,Y", log_line.operand);
    }
}
