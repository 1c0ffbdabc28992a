use super::*;

/// # ADC - Add with carry
///
/// The 6502 has only one instruction for addition, an addition with carry.
/// Note: the formula for the oVerflow bit comes from
/// http://www.righto.com/2012/12/the-6502-overflow-flag-explained.html
///
/// In decimal mode the low nibble is corrected by 6 when it goes past 9 and
/// the whole result by 0x60 when it goes past 0x99. The carry comes from the
/// corrected result, N & V are always cleared.
pub fn adc(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let byte = read_value(cpu, cpu_instruction)?;

    if cpu.flag_is_set(FLAG_D) {
        decimal_add(cpu, byte);
    } else {
        binary_add(cpu, byte);
    }

    Ok(())
}

pub(super) fn binary_add(cpu: &mut Processor, byte: u8) {
    let a = cpu.a();
    let carry = cpu.flag_is_set(FLAG_C) as u16;
    let sum = a as u16 + byte as u16 + carry;
    let result = (sum & 0xff) as u8;

    cpu.set_a(result);
    cpu.set_flag(FLAG_C, sum > 0xff);
    cpu.set_flag(FLAG_V, (a ^ result) & (byte ^ result) & 0x80 != 0);
    set_nz_flags(cpu, result);
}

fn decimal_add(cpu: &mut Processor, byte: u8) {
    let a = cpu.a();
    let carry = cpu.flag_is_set(FLAG_C) as u16;
    let mut sum = a as u16 + byte as u16 + carry;

    if (a & 0x0f) as u16 + (byte & 0x0f) as u16 + carry > 0x09 {
        sum += 0x06;
    }
    if sum > 0x99 {
        sum += 0x60;
    }
    let result = (sum & 0xff) as u8;

    cpu.set_a(result);
    cpu.set_flag(FLAG_C, sum > 0x99);
    cpu.set_flag(FLAG_Z, result == 0);
    cpu.set_flag(FLAG_N, false);
    cpu.set_flag(FLAG_V, false);
}
