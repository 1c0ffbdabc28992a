use super::*;

/// # ORA - bitwise OR with the accumulator
pub fn ora(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;
    let result = cpu.a() | byte;
    cpu.set_a(result);
    set_nz_flags(cpu, result);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_ora() {
        let mut cpu = get_stuff(0x1000, vec![0x09, 0x0f]);
        cpu.set_a(0x50);
        cpu.step().unwrap();
        assert_eq!(0x5f, cpu.a());
        assert!(!cpu.flag_is_set(FLAG_Z));
        assert!(!cpu.flag_is_set(FLAG_N));
    }

    #[test]
    fn test_ora_flags() {
        let mut cpu = get_stuff(0x1000, vec![0x09, 0x00, 0x05, 0x20]);
        cpu.memory_mut()
            .poke(Address::from(0x0020u16), &[0x80])
            .unwrap();
        cpu.set_a(0x00);
        cpu.step().unwrap();
        assert!(cpu.flag_is_set(FLAG_Z));
        cpu.step().unwrap();
        assert_eq!(0x80, cpu.a());
        assert!(!cpu.flag_is_set(FLAG_Z));
        assert!(cpu.flag_is_set(FLAG_N));
    }

    #[test]
    fn test_ora_indexed_indirect() {
        let mut cpu = get_stuff(0x1000, vec![0x01, 0x20]);
        cpu.memory_mut()
            .poke(Address::from(0x0022u16), &[0x00, 0x30])
            .unwrap();
        cpu.memory_mut()
            .poke(Address::from(0x3000u16), &[0x03])
            .unwrap();
        cpu.set_x(0x02);
        cpu.set_a(0x40);
        let log_line = cpu.step().unwrap();
        assert_eq!(0x43, cpu.a());
        assert_eq!("($20,X)", log_line.operand);
    }
}
