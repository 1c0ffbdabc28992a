/*
 * Atari palette
 * A color byte holds the hue in the high nibble and the luminance in the
 * low nibble, its lowest bit is ignored. Hue 0 is the grey scale, the 15
 * other hues are spread around the color wheel. RGB values are computed
 * through the YIQ color space.
 */
use std::f64::consts::PI;

const SATURATION: f64 = 0.3;
// phase of hue 1, in radians
const HUE_PHASE: f64 = -1.0;

/// Color byte to 0x00RRGGBB.
pub fn atari_rgb(color: u8) -> u32 {
    let hue = (color >> 4) as f64;
    let luminance = (color & 0x0e) as f64 / 14.0;
    let (i, q) = if hue == 0.0 {
        (0.0, 0.0)
    } else {
        let angle = HUE_PHASE + (hue - 1.0) * 2.0 * PI / 15.0;
        (SATURATION * angle.cos(), SATURATION * angle.sin())
    };
    let red = luminance + 0.956 * i + 0.621 * q;
    let green = luminance - 0.272 * i - 0.647 * q;
    let blue = luminance - 1.106 * i + 1.703 * q;

    channel(red) << 16 | channel(green) << 8 | channel(blue)
}

fn channel(value: f64) -> u32 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u32
}

/// The 256 colors computed once.
pub struct Palette {
    colors: Vec<u32>,
}

impl Palette {
    pub fn new() -> Palette {
        Palette {
            colors: (0..=255u8).map(atari_rgb).collect(),
        }
    }

    pub fn rgb(&self, color: u8) -> u32 {
        self.colors[color as usize]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_scale() {
        assert_eq!(0x000000, atari_rgb(0x00));
        assert_eq!(0xffffff, atari_rgb(0x0e));
        assert_eq!(atari_rgb(0x0e), atari_rgb(0x0f));
        let grey = atari_rgb(0x06);
        assert_eq!(grey >> 16, grey & 0xff);
        assert_eq!(grey >> 8 & 0xff, grey & 0xff);
    }

    #[test]
    fn test_hues() {
        let palette = Palette::new();
        let colors: Vec<u32> = (1..16).map(|hue| palette.rgb(hue << 4 | 0x08)).collect();
        for (index, color) in colors.iter().enumerate() {
            assert_ne!(atari_rgb(0x08), *color, "hue {} is grey", index + 1);
            assert_eq!(atari_rgb(((index as u8) + 1) << 4 | 0x08), *color);
        }
    }
}
