/*
 * MiniFB screen
 * A window showing the frame buffer. The window is refreshed once per frame,
 * on vertical sync, and runs on the calling thread.
 */
use crate::framebuffer::{FrameBuffer, FRAME_HEIGHT, FRAME_WIDTH};
use crate::palette::Palette;
use log::warn;
use minifb::{Scale, ScaleMode, Window, WindowOptions};
use soft800_lib::antic::Screen;

pub struct MiniFBScreen {
    window: Window,
    frame: FrameBuffer,
    palette: Palette,
}

impl MiniFBScreen {
    pub fn new(title: &str) -> Result<MiniFBScreen, minifb::Error> {
        let window = Window::new(
            title,
            FRAME_WIDTH,
            FRAME_HEIGHT,
            WindowOptions {
                resize: true,
                scale: Scale::X2,
                scale_mode: ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )?;

        Ok(MiniFBScreen {
            window,
            frame: FrameBuffer::default(),
            palette: Palette::new(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    fn present(&mut self) {
        let palette = &self.palette;
        let buffer = self.frame.to_rgb(|color| palette.rgb(color));

        if let Err(e) = self
            .window
            .update_with_buffer(&buffer, FRAME_WIDTH, FRAME_HEIGHT)
        {
            warn!("could not refresh the window: {}", e);
        }
    }
}

impl Screen for MiniFBScreen {
    fn render_pixel(&mut self, color: u8) {
        self.frame.render_pixel(color);
    }

    fn render_byte(&mut self, byte: u8, foreground: u8, background: u8) {
        self.frame.render_byte(byte, foreground, background);
    }

    fn horizontal_sync(&mut self) {
        self.frame.horizontal_sync();
    }

    fn vertical_sync(&mut self) {
        self.present();
        self.frame.vertical_sync();
    }

    fn vertical_position(&self) -> usize {
        self.frame.vertical_position()
    }
}
