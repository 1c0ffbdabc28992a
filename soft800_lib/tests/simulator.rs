use soft800_lib::{Address, Memory, Processor, FLAG_B, FLAG_D, FLAG_I};

fn get_processor(program: &[u8]) -> Processor {
    let mut memory = Memory::new();
    memory.poke(Address::from(0x0800u16), program).unwrap();
    memory.poke(Address::from(0xfffcu16), &[0x00, 0x08]).unwrap();
    memory.poke(Address::from(0xfffeu16), &[0x00, 0x80]).unwrap();
    let mut cpu = Processor::new().named("simulator").with_memory(memory);
    cpu.reset();

    cpu
}

#[test]
fn execute_program() {
    let mut cpu = get_processor(&[0xa9, 0xc0, 0xaa, 0xe8, 0x69, 0x14, 0x00]);
    assert_eq!(Address::from(0x0800u16), cpu.pc());
    let loglines = cpu
        .run_until(|cpu| cpu.pc() == Address::from(0x8000u16), 100)
        .unwrap();
    let expected_output: Vec<&str> = vec![
        "#0x0800: (a9 c0)       LDA  #$c0             [A=0xc0][X=0x00][Y=0x00][SP=0xff][S=Nv-BdIzc]",
        "#0x0802: (aa)          TAX                   [A=0xc0][X=0xc0][Y=0x00][SP=0xff][S=Nv-BdIzc]",
        "#0x0803: (e8)          INX                   [A=0xc0][X=0xc1][Y=0x00][SP=0xff][S=Nv-BdIzc]",
        "#0x0804: (69 14)       ADC  #$14             [A=0xd4][X=0xc1][Y=0x00][SP=0xff][S=Nv-BdIzc]",
        "#0x0806: (00)          BRK                   [A=0xd4][X=0xc1][Y=0x00][SP=0xfc][S=Nv-BdIzc]",
    ];

    assert_eq!(expected_output.len(), loglines.len());
    for (expected, line) in expected_output.iter().zip(loglines.iter()) {
        assert_eq!(*expected, line.to_string());
    }
    assert_eq!(0xc1, cpu.x());
    assert_eq!(0xd4, cpu.a());
    // return address after the BRK padding byte, then the status
    assert_eq!(0x08, cpu.memory().peek(Address::from(0x01ffu16)));
    assert_eq!(0x08, cpu.memory().peek(Address::from(0x01feu16)));
    assert!(cpu.memory().peek(Address::from(0x01fdu16)) & FLAG_B != 0);
    assert!(cpu.flag_is_set(FLAG_I));
}

#[test]
fn sum_a_table() {
    let mut cpu = get_processor(&[
        0xa2, 0x00, // LDX #$00
        0xa9, 0x00, // LDA #$00
        0x18, // CLC
        0x7d, 0x00, 0x09, // ADC $0900,X
        0xe8, // INX
        0xe0, 0x04, // CPX #$04
        0xd0, 0xf8, // BNE $0805
        0x8d, 0x00, 0x0a, // STA $0A00
        0x4c, 0x10, 0x08, // JMP $0810
    ]);
    cpu.memory_mut()
        .poke(Address::from(0x0900u16), &[0x01, 0x02, 0x03, 0x04])
        .unwrap();
    let loglines = cpu.run_until(|_| false, 1000).unwrap();

    assert_eq!(21, loglines.len());
    assert_eq!(Address::from(0x0810u16), cpu.pc());
    assert_eq!(0x0a, cpu.memory().peek(Address::from(0x0a00u16)));
    assert_eq!(0x04, cpu.x());
}

#[test]
fn decimal_subroutine() {
    let mut cpu = get_processor(&[
        0xf8, // SED
        0xa9, 0x19, // LDA #$19
        0x20, 0x00, 0x09, // JSR $0900
        0xd8, // CLD
        0x4c, 0x07, 0x08, // JMP $0807
    ]);
    cpu.memory_mut()
        .poke(Address::from(0x0900u16), &[0x18, 0x69, 0x23, 0x60])
        .unwrap();
    cpu.run_until(|_| false, 100).unwrap();

    assert_eq!(0x42, cpu.a());
    assert!(!cpu.flag_is_set(FLAG_D));
    assert_eq!(0xff, cpu.sp());
    assert_eq!(Address::from(0x0807u16), cpu.pc());
}

#[test]
fn invalid_opcode_stops_the_run() {
    let mut cpu = get_processor(&[0xea, 0x02]);
    let error = cpu.run_until(|_| false, 10).unwrap_err();

    assert_eq!(
        "invalid opcode 0x02 at address $0801 on processor 'simulator'",
        error.to_string()
    );
    assert_eq!(Address::from(0x0801u16), cpu.pc());
}
