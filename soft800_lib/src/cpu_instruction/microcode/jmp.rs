use super::*;

/// # JMP - Jump
///
/// Absolute or indirect. The indirect pointer is read as a plain 16 bits
/// address, a pointer at the end of a page reads its high byte from the next
/// page.
pub fn jmp(cpu: &mut Processor, cpu_instruction: &CPUInstruction) -> Result<()> {
    let destination = target_address(cpu, cpu_instruction)?;
    cpu.jump(destination);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_jmp_absolute() {
        let mut cpu = get_stuff(0x1000, vec![0x4c, 0x0a, 0x02]);
        let log_line = cpu.step().unwrap();
        assert_eq!("JMP", log_line.mnemonic);
        assert_eq!(Address::from(0x020au16), cpu.pc());
        assert_eq!(
            "#0x1000: (4c 0a 02)    JMP  $020A            [A=0x00][X=0x00][Y=0x00][SP=0xff][S=nv-BdIzc]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_jmp_indirect() {
        let mut cpu = get_stuff(0x1000, vec![0x6c, 0x20, 0x02]);
        cpu.memory_mut()
            .poke(Address::from(0x0220u16), &[0x34, 0x12])
            .unwrap();
        let log_line = cpu.step().unwrap();
        assert_eq!(Address::from(0x1234u16), cpu.pc());
        assert_eq!("($0220)", log_line.operand);
    }

    #[test]
    fn test_jmp_indirect_page_boundary() {
        let mut cpu = get_stuff(0x1000, vec![0x6c, 0xff, 0x12]);
        cpu.memory_mut()
            .poke(Address::from(0x12ffu16), &[0x34, 0x56])
            .unwrap();
        cpu.step().unwrap();
        assert_eq!(Address::from(0x5634u16), cpu.pc());
    }

    #[test]
    fn test_jmp_to_itself() {
        let mut cpu = get_stuff(0x1000, vec![0x4c, 0x00, 0x10]);
        cpu.step().unwrap();
        assert_eq!(Address::from(0x1000u16), cpu.pc());
    }
}
