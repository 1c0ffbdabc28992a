mod framebuffer;
mod palette;

#[cfg(feature = "minifb-backend")]
mod minifb_backend;

pub use framebuffer::{FrameBuffer, FRAME_HEIGHT, FRAME_WIDTH};
pub use palette::{atari_rgb, Palette};

#[cfg(feature = "minifb-backend")]
pub use minifb_backend::MiniFBScreen;
