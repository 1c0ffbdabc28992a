/*
 * FrameBuffer
 * A Screen keeping the color bytes of a whole frame. Pixels beyond the right
 * edge or below the bottom are dropped, the rest of a row not drawn before the
 * horizontal sync is cleared.
 */
use soft800_lib::antic::{Screen, LINE_BYTES};

pub const FRAME_WIDTH: usize = LINE_BYTES * 8;
pub const FRAME_HEIGHT: usize = 240;

pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
    x: usize,
    y: usize,
    frames: usize,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> FrameBuffer {
        FrameBuffer {
            width,
            height,
            pixels: vec![0; width * height],
            x: 0,
            y: 0,
            frames: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Completed frames.
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y < self.height {
            Some(&self.pixels[y * self.width..(y + 1) * self.width])
        } else {
            None
        }
    }

    pub fn to_rgb(&self, rgb: impl Fn(u8) -> u32) -> Vec<u32> {
        self.pixels.iter().map(|color| rgb(*color)).collect()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        FrameBuffer::new(FRAME_WIDTH, FRAME_HEIGHT)
    }
}

impl Screen for FrameBuffer {
    fn render_pixel(&mut self, color: u8) {
        if self.x < self.width && self.y < self.height {
            self.pixels[self.y * self.width + self.x] = color;
        }
        self.x += 1;
    }

    fn horizontal_sync(&mut self) {
        if self.y < self.height && self.x < self.width {
            let start = self.y * self.width;
            self.pixels[start + self.x..start + self.width].fill(0);
        }
        self.x = 0;
        self.y += 1;
    }

    fn vertical_sync(&mut self) {
        self.x = 0;
        self.y = 0;
        self.frames += 1;
    }

    fn vertical_position(&self) -> usize {
        self.y
    }
}
