/*
 * Display list
 * One byte instructions, some followed by a 16 bits address:
 *
 *   low nibble 0   blank lines, high nibble + 1 lines
 *   low nibble 1   jump, bit 6 or bit 7 set waits for the vertical blank (JVB)
 *   low nibble 2-F mode line
 *
 *   bit 7 display list interrupt on the last scan line
 *   bit 6 load memory scan (mode lines), the screen address follows
 *   bit 5 vertical scroll
 *   bit 4 horizontal scroll
 */
use crate::memory::Memory;
use crate::value::Address;
use std::fmt;

pub const DL_INTERRUPT: u8 = 0b1000_0000;
pub const DL_LOAD_MEMORY_SCAN: u8 = 0b0100_0000;
pub const DL_VERTICAL_BLANK: u8 = 0b0100_0000;
pub const DL_VERTICAL_SCROLL: u8 = 0b0010_0000;
pub const DL_HORIZONTAL_SCROLL: u8 = 0b0001_0000;

/// How a mode turns screen memory bytes into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    /// 1 bit per pixel characters, 8 pixels wide.
    HiResText,
    /// 2 bits per pixel characters, 4 pixels each 2 wide.
    MultiColorText,
    /// 1 bit per pixel characters of 64 glyphs, the 2 high bits of the
    /// character code select the color.
    WideText,
    /// Map modes, `bits` per pixel.
    Map { bits: u8 },
    /// 1 bit per pixel bitmap at the highest resolution.
    HiResMap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    pub code: u8,
    /// Scan lines per mode line.
    pub height: u8,
    /// Screen memory bytes per scan line on a normal playfield.
    pub bytes: usize,
    pub kind: ModeKind,
}

impl Mode {
    pub fn from_code(code: u8) -> Option<Mode> {
        MODES.iter().find(|mode| mode.code == code).copied()
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self.kind,
            ModeKind::HiResText | ModeKind::MultiColorText | ModeKind::WideText
        )
    }

    /// High resolution pixels per screen memory byte, a normal playfield is
    /// 320 of them.
    pub fn pixels_per_byte(&self) -> usize {
        320 / self.bytes
    }
}

const fn mode(code: u8, height: u8, bytes: usize, kind: ModeKind) -> Mode {
    Mode {
        code,
        height,
        bytes,
        kind,
    }
}

pub static MODES: [Mode; 14] = [
    mode(0x02, 8, 40, ModeKind::HiResText),
    mode(0x03, 10, 40, ModeKind::HiResText),
    mode(0x04, 8, 40, ModeKind::MultiColorText),
    mode(0x05, 16, 40, ModeKind::MultiColorText),
    mode(0x06, 8, 20, ModeKind::WideText),
    mode(0x07, 16, 20, ModeKind::WideText),
    mode(0x08, 8, 10, ModeKind::Map { bits: 2 }),
    mode(0x09, 4, 10, ModeKind::Map { bits: 1 }),
    mode(0x0a, 4, 20, ModeKind::Map { bits: 2 }),
    mode(0x0b, 2, 20, ModeKind::Map { bits: 1 }),
    mode(0x0c, 1, 20, ModeKind::Map { bits: 1 }),
    mode(0x0d, 2, 40, ModeKind::Map { bits: 2 }),
    mode(0x0e, 1, 40, ModeKind::Map { bits: 2 }),
    mode(0x0f, 1, 40, ModeKind::HiResMap),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayInstruction {
    Blank {
        lines: u8,
        interrupt: bool,
    },
    Jump {
        address: Address,
        vertical_blank: bool,
        interrupt: bool,
    },
    ModeLine {
        mode: Mode,
        memory_scan: Option<Address>,
        vertical_scroll: bool,
        horizontal_scroll: bool,
        interrupt: bool,
    },
}

impl DisplayInstruction {
    /// Decode the instruction at `address`, return it with its length in
    /// bytes.
    pub fn decode(memory: &Memory, address: Address) -> (DisplayInstruction, u16) {
        let opcode = memory.peek(address);
        let interrupt = opcode & DL_INTERRUPT != 0;

        match opcode & 0x0f {
            0x00 => (
                DisplayInstruction::Blank {
                    lines: (opcode >> 4) + 1,
                    interrupt,
                },
                1,
            ),
            0x01 => (
                DisplayInstruction::Jump {
                    address: memory.address_at(address.wrapping_add(1), false),
                    vertical_blank: opcode & (DL_VERTICAL_BLANK | DL_INTERRUPT) != 0,
                    interrupt,
                },
                3,
            ),
            code => {
                let (memory_scan, length) = if opcode & DL_LOAD_MEMORY_SCAN != 0 {
                    (Some(memory.address_at(address.wrapping_add(1), false)), 3)
                } else {
                    (None, 1)
                };
                // every code from 2 to F is in the table
                let mode = Mode::from_code(code).unwrap_or(MODES[0]);

                (
                    DisplayInstruction::ModeLine {
                        mode,
                        memory_scan,
                        vertical_scroll: opcode & DL_VERTICAL_SCROLL != 0,
                        horizontal_scroll: opcode & DL_HORIZONTAL_SCROLL != 0,
                        interrupt,
                    },
                    length,
                )
            }
        }
    }

    pub fn interrupt(&self) -> bool {
        match *self {
            DisplayInstruction::Blank { interrupt, .. }
            | DisplayInstruction::Jump { interrupt, .. }
            | DisplayInstruction::ModeLine { interrupt, .. } => interrupt,
        }
    }
}

impl fmt::Display for DisplayInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dli = if self.interrupt() { " DLI" } else { "" };

        match *self {
            DisplayInstruction::Blank { lines, .. } => write!(f, "BLANK {}{}", lines, dli),
            DisplayInstruction::Jump {
                address,
                vertical_blank,
                ..
            } => {
                let mnemonic = if vertical_blank { "JVB" } else { "JMP" };
                write!(f, "{} {}{}", mnemonic, address, dli)
            }
            DisplayInstruction::ModeLine {
                mode,
                memory_scan,
                vertical_scroll,
                horizontal_scroll,
                ..
            } => {
                write!(f, "MODE {:X}", mode.code)?;
                if let Some(address) = memory_scan {
                    write!(f, " LMS {}", address)?;
                }
                if vertical_scroll {
                    write!(f, " VSCROL")?;
                }
                if horizontal_scroll {
                    write!(f, " HSCROL")?;
                }
                write!(f, "{}", dli)
            }
        }
    }
}
