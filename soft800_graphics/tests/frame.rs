use soft800_graphics::{FrameBuffer, FRAME_WIDTH};
use soft800_lib::antic::{Antic, AnticRegisters};
use soft800_lib::{Address, Memory};

fn get_memory() -> Memory {
    let mut memory = Memory::new();
    // 8 blank lines, one mode 2 line from $4000, one mode E line, JVB
    memory
        .poke(
            Address::from(0x2000u16),
            &[0x70, 0x42, 0x00, 0x40, 0x0e, 0x41, 0x00, 0x20],
        )
        .unwrap();
    memory.poke(Address::from(0x4000u16), &[0x21]).unwrap();
    memory.poke(Address::from(0x4028u16), &[0xe4]).unwrap();
    // glyph of character $21, a vertical bar
    memory
        .poke(Address::from(0xe108u16), &[0x18; 8])
        .unwrap();
    memory.set_display_list(Address::from(0x2000u16)).unwrap();
    memory.set_dmactl(0x22).unwrap();
    memory.set_chbase(Address::from(0xe000u16)).unwrap();
    memory.set_colbk(0x00).unwrap();
    memory.set_colpf(0, 0x46).unwrap();
    memory.set_colpf(1, 0x0e).unwrap();
    memory.set_colpf(2, 0x90).unwrap();
    memory.set_colpf(3, 0x28).unwrap();

    memory
}

#[test]
fn render_into_a_frame_buffer() {
    let mut memory = get_memory();
    let mut antic = Antic::new(FrameBuffer::default());

    assert_eq!(17, antic.render_frame(&mut memory).unwrap());
    let frame = antic.screen();
    assert_eq!(1, frame.frames());
    assert_eq!(FRAME_WIDTH, frame.row(0).unwrap().len());
    // blank lines are left cleared
    assert!(frame.row(7).unwrap().iter().all(|color| *color == 0));
    // text lines: border, then the bar drawn in the playfield 1 luminance
    for y in 8..16 {
        let row = frame.row(y).unwrap();
        assert!(row[..32].iter().all(|color| *color == 0x00));
        assert_eq!(&[0x90, 0x90, 0x90, 0x9e, 0x9e, 0x90, 0x90, 0x90], &row[32..40]);
        assert!(row[40..352].iter().all(|color| *color == 0x90));
    }
    // mode E: 3, 2, 1, 0 two pixels each
    let row = frame.row(16).unwrap();
    assert_eq!(
        &[0x90, 0x90, 0x0e, 0x0e, 0x46, 0x46, 0x00, 0x00],
        &row[32..40]
    );
}

#[test]
fn frames_are_repeated() {
    let mut memory = get_memory();
    let mut antic = Antic::new(FrameBuffer::default());
    antic.render_frame(&mut memory).unwrap();
    let first = antic.screen().pixels().to_vec();
    antic.render_frame(&mut memory).unwrap();

    assert_eq!(2, antic.screen().frames());
    assert_eq!(first, antic.screen().pixels());
}
