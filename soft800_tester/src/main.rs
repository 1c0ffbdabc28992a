use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use soft800_graphics::FrameBuffer;
use soft800_lib::antic::Screen;
use soft800_lib::{Memory, Processor};
use soft800_tester::{parse_address, CliDisplayer, Machine, MachineConfig};

/// Atari 800 machine tester
/// Runs 6502 programs described by a machine file, with the ANTIC display
/// coprocessor, or disassembles binary files.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CommandLineArguments {
    /// Log debug messages (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and run a machine file
    Run {
        /// Machine YAML file
        machine: PathBuf,

        /// Maximum number of instructions to execute
        #[arg(short, long)]
        steps: Option<usize>,

        /// Display every executed instruction
        #[arg(short, long)]
        trace: bool,

        /// Show the display in a window (needs the `window` feature)
        #[arg(short, long)]
        window: bool,
    },
    /// Disassemble a binary file
    Disassemble {
        /// Raw binary file
        file: PathBuf,

        /// Where the file is loaded in memory
        #[arg(short, long)]
        address: String,

        /// First address to disassemble, defaults to the load address
        #[arg(long)]
        start: Option<String>,

        /// Number of instructions
        #[arg(short, long, default_value_t = 20)]
        count: usize,
    },
}

fn run_machine<S: Screen + 'static>(
    config: &MachineConfig,
    steps: Option<usize>,
    trace: bool,
    screen: impl FnOnce() -> Result<S>,
) -> Result<()> {
    let mut machine = Machine::new(config, screen)?.with_trace(trace);
    if let Some(steps) = steps {
        machine = machine.with_max_steps(steps);
    }
    let report = machine.run()?;

    let mut displayer = CliDisplayer::new(io::stdout(), trace);
    let name = config.name.as_deref().unwrap_or("machine");
    displayer.display_report(name, &report)?;
    displayer.display_registers(machine.processor())?;
    for dump in config.dumps.iter().flatten() {
        let address = parse_address(&dump.address)?;
        displayer.display_dump(machine.processor(), address, dump.length)?;
    }

    Ok(())
}

#[cfg(feature = "window")]
fn window_screen(title: &str) -> Result<soft800_graphics::MiniFBScreen> {
    soft800_graphics::MiniFBScreen::new(title).map_err(|e| anyhow!("could not open a window: {}", e))
}

#[cfg(not(feature = "window"))]
fn window_screen(_title: &str) -> Result<FrameBuffer> {
    Err(anyhow!("soft800_tester is built without the `window` feature"))
}

fn disassemble(file: PathBuf, address: &str, start: Option<&str>, count: usize) -> Result<()> {
    let address = parse_address(address)?;
    let start = match start {
        Some(start) => parse_address(start)?,
        None => address,
    };
    let data = std::fs::read(&file).with_context(|| format!("could not read '{}'", file.display()))?;
    let mut memory = Memory::new();
    memory
        .poke(address, &data)
        .with_context(|| format!("could not load '{}' at {}", file.display(), address))?;
    let end = address.as_usize() + data.len();
    let processor = Processor::new().with_memory(memory);

    let lines = processor
        .disassemble(start)
        .take_while(|line| line.address.as_usize() < end)
        .take(count);
    CliDisplayer::new(io::stdout(), false).display_disassembly(lines)
}

fn main() -> Result<()> {
    let arguments = CommandLineArguments::parse();
    let level = if arguments.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(level)).init();

    match arguments.command {
        Command::Run {
            machine,
            steps,
            trace,
            window,
        } => {
            let config = MachineConfig::load(&machine)?;
            if window {
                let title = config.name.clone().unwrap_or_else(|| machine.display().to_string());
                run_machine(&config, steps, trace, || window_screen(&title))
            } else {
                run_machine(&config, steps, trace, || Ok(FrameBuffer::default()))
            }
        }
        Command::Disassemble {
            file,
            address,
            start,
            count,
        } => disassemble(file, &address, start.as_deref(), count),
    }
}
