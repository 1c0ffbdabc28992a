use super::*;

/// # BCC - Branch if carry clear
pub fn bcc(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let condition = !cpu.flag_is_set(FLAG_C);
    branch(cpu, cpu_instruction, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_bcc_not_branching() {
        let mut cpu = get_stuff(0x1000, vec![0x90, 0x0a]);
        cpu.set_flag(FLAG_C, true);
        let log_line = cpu.step().unwrap();
        assert_eq!("BCC", log_line.mnemonic);
        assert_eq!(Address::from(0x1002u16), cpu.pc());
    }

    #[test]
    fn test_bcc_branching() {
        let mut cpu = get_stuff(0x1000, vec![0x90, 0x0a]);
        cpu.set_flag(FLAG_C, false);
        let log_line = cpu.step().unwrap();
        assert_eq!(Address::from(0x100cu16), cpu.pc());
        assert_eq!("$100C", log_line.operand);
    }

    #[test]
    fn test_bcc_branching_backward() {
        let mut cpu = get_stuff(0x1000, vec![0x90, 0xfb]);
        cpu.set_flag(FLAG_C, false);
        cpu.step().unwrap();
        assert_eq!(Address::from(0x0ffdu16), cpu.pc());
    }
}
