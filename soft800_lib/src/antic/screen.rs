/*
 * Screen
 * What the video coprocessor draws on. Colors are Atari color bytes: hue in
 * the high nibble, luminance in the low nibble. Turning them into actual
 * pixels is up to the implementor.
 */
pub trait Screen {
    /// Append one pixel to the current scan line.
    fn render_pixel(&mut self, color: u8);

    /// Append 8 pixels, most significant bit first: set bits are drawn with
    /// the foreground color, cleared bits with the background color.
    fn render_byte(&mut self, byte: u8, foreground: u8, background: u8) {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.render_pixel(foreground);
            } else {
                self.render_pixel(background);
            }
        }
    }

    /// End of the current scan line.
    fn horizontal_sync(&mut self);

    /// End of the frame, the next scan line is the top one.
    fn vertical_sync(&mut self);

    fn vertical_position(&self) -> usize;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Keeps the pixels of every scan line and counts the syncs.
    #[derive(Debug, Default)]
    pub struct RecordingScreen {
        pub lines: Vec<Vec<u8>>,
        pub current: Vec<u8>,
        pub vertical_syncs: usize,
        pub position: usize,
    }

    impl Screen for RecordingScreen {
        fn render_pixel(&mut self, color: u8) {
            self.current.push(color);
        }

        fn horizontal_sync(&mut self) {
            self.lines.push(std::mem::take(&mut self.current));
            self.position += 1;
        }

        fn vertical_sync(&mut self) {
            self.vertical_syncs += 1;
            self.position = 0;
        }

        fn vertical_position(&self) -> usize {
            self.position
        }
    }

    #[test]
    fn test_render_byte() {
        let mut screen = RecordingScreen::default();
        screen.render_byte(0b1010_0001, 0x0f, 0x00);
        assert_eq!(vec![0x0f, 0x00, 0x0f, 0x00, 0x00, 0x00, 0x00, 0x0f], screen.current);
        screen.horizontal_sync();
        assert_eq!(1, screen.vertical_position());
        screen.vertical_sync();
        assert_eq!(0, screen.vertical_position());
    }
}
