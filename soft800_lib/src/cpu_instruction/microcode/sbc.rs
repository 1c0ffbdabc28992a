use super::*;

/// # SBC - Subtract with carry
///
/// In binary mode this is an addition of the one's complement of the operand.
/// The carry acts as an inverted borrow: it must be set before a subtraction
/// and is cleared when the result went below zero.
///
/// Decimal mode mirrors ADC: 6 is subtracted when the low nibble borrows and
/// 0x60 when the whole result is negative, N & V are cleared.
pub fn sbc(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;

    if cpu.flag_is_set(FLAG_D) {
        decimal_subtract(cpu, byte);
    } else {
        super::adc::binary_add(cpu, !byte);
    }

    Ok(())
}

fn decimal_subtract(cpu: &mut Processor, byte: u8) {
    let a = cpu.a();
    let borrow = !cpu.flag_is_set(FLAG_C) as i16;
    let mut difference = a as i16 - byte as i16 - borrow;

    if (a & 0x0f) as i16 - (byte & 0x0f) as i16 - borrow < 0 {
        difference -= 0x06;
    }
    if difference < 0 {
        difference -= 0x60;
    }
    let result = (difference as u16 & 0xff) as u8;

    cpu.set_a(result);
    cpu.set_flag(FLAG_C, difference >= 0);
    cpu.set_flag(FLAG_Z, result == 0);
    cpu.set_flag(FLAG_N, false);
    cpu.set_flag(FLAG_V, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    fn subtract(a: u8, byte: u8, carry: bool, decimal: bool) -> Processor {
        let mut cpu = get_stuff(0x1000, vec![0xe9, byte]);
        cpu.set_a(a);
        cpu.set_flag(FLAG_C, carry);
        cpu.set_flag(FLAG_D, decimal);
        cpu.step().unwrap();

        cpu
    }

    #[test]
    fn test_sbc() {
        let cpu = subtract(0x50, 0x20, true, false);
        assert_eq!(0x30, cpu.a());
        assert!(cpu.flag_is_set(FLAG_C));
        assert!(!cpu.flag_is_set(FLAG_N));
        assert!(!cpu.flag_is_set(FLAG_V));
        assert_eq!(Address::from(0x1002u16), cpu.pc());
    }

    #[test]
    fn test_sbc_borrow() {
        let cpu = subtract(0x50, 0x20, false, false);
        assert_eq!(0x2f, cpu.a());
        assert!(cpu.flag_is_set(FLAG_C));

        let cpu = subtract(0x00, 0x01, true, false);
        assert_eq!(0xff, cpu.a());
        assert!(!cpu.flag_is_set(FLAG_C));
        assert!(cpu.flag_is_set(FLAG_N));
    }

    #[test]
    fn test_sbc_zero_and_overflow() {
        let cpu = subtract(0x42, 0x42, true, false);
        assert_eq!(0x00, cpu.a());
        assert!(cpu.flag_is_set(FLAG_Z));
        assert!(cpu.flag_is_set(FLAG_C));

        let cpu = subtract(0x80, 0x01, true, false);
        assert_eq!(0x7f, cpu.a());
        assert!(cpu.flag_is_set(FLAG_V));

        let cpu = subtract(0x7f, 0xff, true, false);
        assert_eq!(0x80, cpu.a());
        assert!(cpu.flag_is_set(FLAG_V));
        assert!(!cpu.flag_is_set(FLAG_C));
    }

    #[test]
    fn test_sbc_decimal() {
        let cpu = subtract(0x50, 0x01, true, true);
        assert_eq!(0x49, cpu.a());
        assert!(cpu.flag_is_set(FLAG_C));

        let cpu = subtract(0x00, 0x01, true, true);
        assert_eq!(0x99, cpu.a());
        assert!(!cpu.flag_is_set(FLAG_C));
        assert!(!cpu.flag_is_set(FLAG_N));

        let cpu = subtract(0x32, 0x02, false, true);
        assert_eq!(0x29, cpu.a());
        assert!(cpu.flag_is_set(FLAG_C));

        let cpu = subtract(0x12, 0x12, true, true);
        assert_eq!(0x00, cpu.a());
        assert!(cpu.flag_is_set(FLAG_Z));
        assert!(cpu.flag_is_set(FLAG_C));
    }
}
