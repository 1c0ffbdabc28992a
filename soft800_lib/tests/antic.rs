use soft800_lib::antic::registers::NMI_DISPLAY_LIST;
use soft800_lib::antic::{Antic, AnticRegisters, NmiSource, Screen};
use soft800_lib::{Address, Memory, Processor};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct CountingScreen {
    pixels: usize,
    lines: Vec<usize>,
    vertical_syncs: usize,
}

impl Screen for CountingScreen {
    fn render_pixel(&mut self, _color: u8) {
        self.pixels += 1;
    }

    fn horizontal_sync(&mut self) {
        self.lines.push(self.pixels);
        self.pixels = 0;
    }

    fn vertical_sync(&mut self) {
        self.vertical_syncs += 1;
    }

    fn vertical_position(&self) -> usize {
        self.lines.len()
    }
}

fn get_memory(display_list: &[u8]) -> Memory {
    let mut memory = Memory::new();
    memory.poke(Address::from(0x2000u16), display_list).unwrap();
    memory.set_display_list(Address::from(0x2000u16)).unwrap();
    memory.set_dmactl(0x22).unwrap();
    memory.set_chbase(Address::from(0xe000u16)).unwrap();

    memory
}

#[test]
fn render_a_text_frame() {
    // 24 blank lines, 3 mode 2 lines, 1 mode F line, vertical blank jump
    let mut memory = get_memory(&[
        0x70, 0x70, 0x70, 0x42, 0x00, 0x40, 0x02, 0x02, 0x0f, 0x41, 0x00, 0x20,
    ]);
    let mut antic = Antic::new(CountingScreen::default());

    assert_eq!(24 + 3 * 8 + 1, antic.render_frame(&mut memory).unwrap());
    let screen = antic.screen();
    assert_eq!(1, screen.vertical_syncs);
    assert_eq!(1, antic.frames());
    assert!(screen.lines[..24].iter().all(|pixels| *pixels == 0));
    assert!(screen.lines[24..].iter().all(|pixels| *pixels == 384));
    assert_eq!(Address::from(0x4000u16 + 4 * 40), antic.memory_scan());
    assert_eq!(Address::from(0x2000u16), memory.display_list());
}

#[test]
fn processor_paces_the_display() {
    let mut cpu = Processor::new().with_memory(get_memory(&[0x70, 0x41, 0x00, 0x20]));
    cpu.memory_mut()
        .poke(
            Address::from(0x0600u16),
            &[
                0xa2, 0x09, // LDX #$09
                0x8d, 0x0a, 0xd4, // STA WSYNC
                0xca, // DEX
                0xd0, 0xfa, // BNE $0602
                0x4c, 0x08, 0x06, // JMP $0608
            ],
        )
        .unwrap();
    cpu.set_pc(Address::from(0x0600u16));
    let antic = Rc::new(RefCell::new(Antic::new(CountingScreen::default())));
    Antic::install(&antic, cpu.memory_mut());

    cpu.run_until(|_| false, 100).unwrap();

    assert_eq!(8, antic.borrow().screen().lines.len());
    assert_eq!(1, antic.borrow().screen().vertical_syncs);
}

#[test]
fn display_list_interrupt_reaches_the_processor() {
    // 16 blank lines with a display list interrupt on the last one
    let mut cpu = Processor::new().with_memory(get_memory(&[0xf0, 0x41, 0x00, 0x20]));
    cpu.memory_mut()
        .poke(
            Address::from(0x0600u16),
            &[
                0xa2, 0x11, // LDX #$11
                0x8d, 0x0a, 0xd4, // STA WSYNC
                0xca, // DEX
                0xd0, 0xfa, // BNE $0602
                0x4c, 0x08, 0x06, // JMP $0608
            ],
        )
        .unwrap();
    // handler: LDA #$2A, STA COLBK, RTI
    cpu.memory_mut()
        .poke(Address::from(0x0700u16), &[0xa9, 0x2a, 0x8d, 0x1a, 0xd0, 0x40])
        .unwrap();
    cpu.memory_mut()
        .poke(Address::from(0xfffau16), &[0x00, 0x07])
        .unwrap();
    cpu.memory_mut().set_nmien(NMI_DISPLAY_LIST).unwrap();
    cpu.set_pc(Address::from(0x0600u16));
    let antic = Rc::new(RefCell::new(Antic::new(CountingScreen::default())));
    Antic::install(&antic, cpu.memory_mut());

    let mut interrupts = 0;
    for _ in 0..100 {
        if cpu.pc() == Address::from(0x0608u16) {
            break;
        }
        cpu.step().unwrap();
        let request = antic.borrow_mut().take_interrupt_request();
        if let Some(source) = request {
            assert_eq!(NmiSource::DisplayList, source);
            interrupts += 1;
            cpu.non_maskable_interrupt().unwrap();
        }
    }

    assert_eq!(1, interrupts);
    assert_eq!(0x2a, cpu.memory().colbk());
    assert_eq!(0x00, cpu.x());
    assert_eq!(0xff, cpu.sp());
    assert_eq!(Address::from(0x0608u16), cpu.pc());
}
