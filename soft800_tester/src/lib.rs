mod atari_binary;
mod config;
mod machine;
mod output;
mod utils;

pub use atari_binary::{AtariBinary, Segment, INITAD, RUNAD};
pub use config::{DisplayConfig, DumpConfig, MachineConfig, SegmentConfig};
pub use machine::{Machine, RunReport, StopReason, DEFAULT_MAX_STEPS};
pub use output::CliDisplayer;
pub use utils::{format_hex_dump, parse_address};

pub type AppResult<T> = anyhow::Result<T>;
