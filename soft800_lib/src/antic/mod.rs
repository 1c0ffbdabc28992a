/*
 * ANTIC
 * The Atari display coprocessor. It has no clock of its own: each scan line
 * is rendered when the CPU writes WSYNC (see `Antic::install`) or when the
 * host calls `render_scan_line`/`render_frame` directly. The display list is
 * read from the memory shared with the CPU, its cursor lives in the DLISTL &
 * DLISTH registers.
 */
mod display_list;
mod error;
pub mod registers;
mod screen;

pub use display_list::{DisplayInstruction, Mode, ModeKind, MODES};
pub use error::{AnticError, Result};
pub use registers::{AnticRegisters, PlayfieldWidth};
pub use screen::Screen;

use crate::memory::Memory;
use crate::value::Address;
use log::{debug, warn};
use registers::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Scan lines rendered without a vertical sync before giving up.
pub const MAX_SCAN_LINES: usize = 312;
/// Frame length when the display list DMA is off.
pub const SCAN_LINES_PER_FRAME: usize = 262;
/// Byte groups of a full scan line (384 pixels, the wide playfield).
pub const LINE_BYTES: usize = 48;

/// What raised a pending non maskable interrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NmiSource {
    DisplayList,
    VerticalBlank,
}

pub struct Antic<S: Screen> {
    screen: S,
    // instruction the remaining lines belong to
    current: Option<DisplayInstruction>,
    // 0 means the next scan line starts by decoding a new instruction
    remaining_lines: usize,
    row: usize,
    memory_scan: Address,
    vertical_scroll_region: bool,
    scan_line: usize,
    frames: usize,
    interrupt_request: Option<NmiSource>,
}

impl<S: Screen> Antic<S> {
    pub fn new(screen: S) -> Antic<S> {
        Antic {
            screen,
            current: None,
            remaining_lines: 0,
            row: 0,
            memory_scan: Address::default(),
            vertical_scroll_region: false,
            scan_line: 0,
            frames: 0,
            interrupt_request: None,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    pub fn remaining_lines(&self) -> usize {
        self.remaining_lines
    }

    pub fn current_instruction(&self) -> Option<DisplayInstruction> {
        self.current
    }

    pub fn memory_scan(&self) -> Address {
        self.memory_scan
    }

    /// Scan lines since the last vertical sync.
    pub fn scan_line(&self) -> usize {
        self.scan_line
    }

    /// Vertical syncs so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Pending interrupt, cleared by the call. Delivering it to a processor
    /// is up to the caller.
    pub fn take_interrupt_request(&mut self) -> Option<NmiSource> {
        self.interrupt_request.take()
    }

    /// Have the memory write of WSYNC render a scan line.
    pub fn install(antic: &Rc<RefCell<Antic<S>>>, memory: &mut Memory)
    where
        S: 'static,
    {
        let antic = Rc::clone(antic);

        memory.register_write_hook(Address::from(WSYNC), move |memory, _, _| {
            match antic.try_borrow_mut() {
                Ok(mut antic) => {
                    if let Err(e) = antic.render_scan_line(memory) {
                        warn!("ANTIC: scan line not rendered: {}", e);
                    }
                }
                Err(_) => warn!("ANTIC: WSYNC written while rendering, ignored"),
            }
        });
    }

    /*
     * step
     * decode the display list instruction under the cursor and move the
     * cursor past it. A jump waiting for the vertical blank ends the frame.
     */
    pub fn step(&mut self, memory: &mut Memory) -> Result<DisplayInstruction> {
        let cursor = memory.display_list();
        let (instruction, length) = DisplayInstruction::decode(memory, cursor);
        debug!("ANTIC: {} {}", cursor, instruction);

        match instruction {
            DisplayInstruction::Blank { lines, .. } => {
                memory.set_display_list(cursor.wrapping_add(length))?;
                self.start_lines(instruction, lines as usize, 0);
                self.vertical_scroll_region = false;
            }
            DisplayInstruction::Jump {
                address,
                vertical_blank,
                ..
            } => {
                memory.set_display_list(address)?;
                if vertical_blank {
                    self.current = Some(instruction);
                    self.remaining_lines = 0;
                    self.vertical_sync(memory)?;
                } else {
                    // a plain jump still takes one blank scan line
                    self.start_lines(instruction, 1, 0);
                }
            }
            DisplayInstruction::ModeLine {
                mode,
                memory_scan,
                vertical_scroll,
                ..
            } => {
                memory.set_display_list(cursor.wrapping_add(length))?;
                if let Some(address) = memory_scan {
                    self.memory_scan = address;
                }
                let height = mode.height as usize;
                let vscrol = memory.vscrol() as usize;
                let (first, last) = match (self.vertical_scroll_region, vertical_scroll) {
                    // first line of a scrolled region starts at VSCROL
                    (false, true) => (vscrol.min(height - 1), height - 1),
                    // the line after the region ends at VSCROL
                    (true, false) => (0, vscrol.min(height - 1)),
                    _ => (0, height - 1),
                };
                self.vertical_scroll_region = vertical_scroll;
                self.start_lines(instruction, last - first + 1, first);
            }
        }

        Ok(instruction)
    }

    fn start_lines(&mut self, instruction: DisplayInstruction, lines: usize, row: usize) {
        self.current = Some(instruction);
        self.remaining_lines = lines;
        self.row = row;
    }

    /*
     * render_scan_line
     * Render one scan line, decoding the display list first when the
     * previous instruction has no line left. Return true when the line
     * turned out to be the vertical sync instead.
     */
    pub fn render_scan_line(&mut self, memory: &mut Memory) -> Result<bool> {
        if !memory.display_list_dma() {
            return self.render_without_dma(memory);
        }

        if self.remaining_lines == 0 {
            let instruction = self.step(memory)?;
            if let DisplayInstruction::Jump {
                vertical_blank: true,
                ..
            } = instruction
            {
                return Ok(true);
            }
        }

        match self.current {
            Some(DisplayInstruction::ModeLine {
                mode,
                horizontal_scroll,
                ..
            }) => self.render_mode_line(memory, mode, horizontal_scroll),
            Some(DisplayInstruction::Jump { .. })
                if memory.playfield_width() != PlayfieldWidth::Disabled =>
            {
                let colbk = memory.colbk();
                for _ in 0..LINE_BYTES {
                    self.screen.render_byte(0, colbk, colbk);
                }
            }
            _ => {}
        }

        self.end_scan_line(memory)?;
        Ok(false)
    }

    fn render_without_dma(&mut self, memory: &mut Memory) -> Result<bool> {
        if self.scan_line + 1 >= SCAN_LINES_PER_FRAME {
            self.vertical_sync(memory)?;
            return Ok(true);
        }
        self.screen.horizontal_sync();
        self.scan_line += 1;
        memory.set_vcount((self.scan_line / 2) as u8)?;

        Ok(false)
    }

    fn end_scan_line(&mut self, memory: &mut Memory) -> Result<()> {
        self.screen.horizontal_sync();
        self.scan_line += 1;
        memory.set_vcount((self.scan_line / 2) as u8)?;
        self.remaining_lines = self.remaining_lines.saturating_sub(1);
        self.row += 1;

        if self.remaining_lines > 0 {
            return Ok(());
        }

        if let Some(DisplayInstruction::ModeLine { mode, .. }) = self.current {
            let width = self.fetch_width(memory, self.current);
            self.memory_scan = self.memory_scan.wrapping_add(width.bytes(mode.bytes) as u16);
        }

        let interrupt = self.current.map_or(false, |i| i.interrupt());
        if interrupt && memory.nmien() & NMI_DISPLAY_LIST != 0 {
            debug!("ANTIC: display list interrupt on scan line {}", self.scan_line);
            memory.set_nmist(memory.nmist() | NMI_DISPLAY_LIST)?;
            self.interrupt_request = Some(NmiSource::DisplayList);
        }

        Ok(())
    }

    fn vertical_sync(&mut self, memory: &mut Memory) -> Result<()> {
        debug!("ANTIC: vertical sync after {} scan lines", self.scan_line);
        self.screen.vertical_sync();
        self.scan_line = 0;
        self.frames += 1;
        self.vertical_scroll_region = false;
        memory.set_vcount(0)?;

        if memory.nmien() & NMI_VERTICAL_BLANK != 0 {
            memory.set_nmist(memory.nmist() | NMI_VERTICAL_BLANK)?;
            self.interrupt_request = Some(NmiSource::VerticalBlank);
        }

        Ok(())
    }

    /// Render scan lines up to the next vertical sync, return how many were
    /// rendered.
    pub fn render_frame(&mut self, memory: &mut Memory) -> Result<usize> {
        let mut lines = 0;

        while !self.render_scan_line(memory)? {
            lines += 1;
            if lines > MAX_SCAN_LINES {
                return Err(AnticError::FrameOverrun(lines));
            }
        }

        Ok(lines)
    }

    fn fetch_width(&self, memory: &Memory, instruction: Option<DisplayInstruction>) -> PlayfieldWidth {
        match instruction {
            Some(DisplayInstruction::ModeLine {
                horizontal_scroll: true,
                ..
            }) => memory.playfield_width().scrolled(),
            _ => memory.playfield_width(),
        }
    }

    /*
     * Mode lines
     * The line is centered in LINE_BYTES * 8 pixels, borders are drawn with
     * the background color. With horizontal scrolling a wider line is
     * fetched and HSCROL selects which part of it is shown, larger values
     * move the picture right.
     */
    fn render_mode_line(&mut self, memory: &Memory, mode: Mode, horizontal_scroll: bool) {
        let width = memory.playfield_width();
        if width == PlayfieldWidth::Disabled {
            return;
        }

        let shown = width.bytes(mode.bytes);
        let fetched = self.fetch_width(memory, self.current).bytes(mode.bytes);
        let pixels_per_byte = mode.pixels_per_byte();
        let offset = if horizontal_scroll {
            // HSCROL counts color clocks, 2 pixels each
            let coarse = memory.hscrol() as usize * 2 / pixels_per_byte;
            (fetched - shown) - coarse.min(fetched - shown)
        } else {
            0
        };
        let border = (LINE_BYTES * 8 - shown * pixels_per_byte) / 2;
        let colbk = memory.colbk();

        self.render_pixels(colbk, border);
        for column in 0..shown {
            let address = self.memory_scan.wrapping_add((offset + column) as u16);
            let byte = memory.peek(address);
            self.render_unit(memory, mode, byte);
        }
        self.render_pixels(colbk, border);
    }

    fn render_pixels(&mut self, color: u8, count: usize) {
        for _ in 0..count {
            self.screen.render_pixel(color);
        }
    }

    fn render_unit(&mut self, memory: &Memory, mode: Mode, byte: u8) {
        let pixel_width = mode.pixels_per_byte() / 8;

        match mode.kind {
            ModeKind::HiResText => {
                let (fg, bg) = hires_colors(memory);
                let glyph = self.hires_glyph(memory, mode, byte);
                self.screen.render_byte(glyph, fg, bg);
            }
            ModeKind::MultiColorText => {
                let glyph = self.glyph(memory, byte & 0x7f, self.row * 8 / mode.height as usize);
                let mut colors = four_colors(memory);
                if byte & 0x80 != 0 {
                    colors[3] = memory.colpf(3);
                }
                self.render_two_bits(glyph, colors, 2);
            }
            ModeKind::WideText => {
                let glyph = self.glyph(memory, byte & 0x3f, self.row * 8 / mode.height as usize);
                let fg = memory.colpf((byte >> 6) as usize);
                self.render_one_bit(glyph, fg, memory.colbk(), pixel_width);
            }
            ModeKind::Map { bits: 1 } => {
                self.render_one_bit(byte, memory.colpf(0), memory.colbk(), pixel_width);
            }
            ModeKind::Map { .. } => {
                self.render_two_bits(byte, four_colors(memory), mode.pixels_per_byte() / 4);
            }
            ModeKind::HiResMap => {
                let (fg, bg) = hires_colors(memory);
                self.screen.render_byte(byte, fg, bg);
            }
        }
    }

    fn render_one_bit(&mut self, byte: u8, fg: u8, bg: u8, pixel_width: usize) {
        for bit in (0..8).rev() {
            let color = if byte & (1 << bit) != 0 { fg } else { bg };
            self.render_pixels(color, pixel_width);
        }
    }

    fn render_two_bits(&mut self, byte: u8, colors: [u8; 4], pixel_width: usize) {
        for shift in [6, 4, 2, 0] {
            let color = colors[(byte >> shift & 0x03) as usize];
            self.render_pixels(color, pixel_width);
        }
    }

    /// Glyph row of a 40 columns character, CHACTL applies to the characters
    /// with the bit 7 set.
    fn hires_glyph(&self, memory: &Memory, mode: Mode, byte: u8) -> u8 {
        let chactl = memory.chactl();
        let code = byte & 0x7f;
        let row = if mode.height == 10 {
            // lower case characters have their 2 first rows at the bottom
            match (code >= 0x60, self.row) {
                (false, row) if row < 8 => Some(row),
                (true, row) if row >= 2 && row < 8 => Some(row),
                (true, row) if row >= 8 => Some(row - 8),
                _ => None,
            }
        } else {
            Some(self.row)
        };
        let mut glyph = match row {
            Some(row) => self.glyph(memory, code, row),
            None => 0,
        };

        if byte & 0x80 != 0 {
            if chactl & CHACTL_BLANK != 0 {
                glyph = 0;
            }
            if chactl & CHACTL_INVERSE != 0 {
                glyph = !glyph;
            }
        }

        glyph
    }

    fn glyph(&self, memory: &Memory, code: u8, row: usize) -> u8 {
        let row = if memory.chactl() & CHACTL_REFLECT != 0 {
            7 - (row & 0x07)
        } else {
            row & 0x07
        };
        let address = memory
            .chbase()
            .wrapping_add(code as u16 * 8 + row as u16);

        memory.peek(address)
    }
}

/// Foreground & background of the high resolution modes: the playfield 2
/// color with the luminance of playfield 1.
fn hires_colors(memory: &Memory) -> (u8, u8) {
    let background = memory.colpf(2);

    ((background & 0xf0) | (memory.colpf(1) & 0x0f), background)
}

fn four_colors(memory: &Memory) -> [u8; 4] {
    [memory.colbk(), memory.colpf(0), memory.colpf(1), memory.colpf(2)]
}
