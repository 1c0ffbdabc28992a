/*
 * Machine
 * A processor with its memory loaded from a machine file, its breakpoints
 * and optionally ANTIC drawing on a screen. The display advances one scan
 * line each time the program writes WSYNC. When the program spins on a jump
 * to itself while frames are still expected, the display advances one scan
 * line per spin so the interrupts it raises can take the processor out of
 * the loop.
 */
use crate::atari_binary::AtariBinary;
use crate::config::{MachineConfig, SegmentConfig};
use crate::utils::parse_address;
use crate::AppResult;
use anyhow::Context;
use log::{debug, info, warn};
use soft800_lib::antic::{Antic, Screen};
use soft800_lib::{Address, LogLine, Memory, Processor};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Halted(Address),
    Breakpoint(Address),
    StepLimit(usize),
    FramesRendered(usize),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StopReason::Halted(address) => write!(f, "halted at {}", address),
            StopReason::Breakpoint(address) => write!(f, "breakpoint at {}", address),
            StopReason::StepLimit(steps) => write!(f, "step limit of {} reached", steps),
            StopReason::FramesRendered(frames) => write!(f, "{} frame(s) rendered", frames),
        }
    }
}

/// `log_lines` holds every executed instruction when tracing, the last one
/// otherwise.
#[derive(Debug)]
pub struct RunReport {
    pub steps: usize,
    pub log_lines: Vec<LogLine>,
    pub stop: StopReason,
    pub frames: usize,
}

struct Video<S: Screen> {
    antic: Rc<RefCell<Antic<S>>>,
    frames: usize,
}

pub struct Machine<S: Screen + 'static> {
    processor: Processor,
    display: Option<Video<S>>,
    breakpoint_hit: Rc<Cell<Option<Address>>>,
    max_steps: usize,
    trace: bool,
}

/// Load every segment, return the run address found in Atari binaries.
fn load_segments(memory: &mut Memory, segments: &[SegmentConfig]) -> AppResult<Option<Address>> {
    let mut run_address = None;

    for segment in segments {
        match &segment.address {
            Some(text) => {
                let address = parse_address(text)?;
                let data = std::fs::read(&segment.file)
                    .with_context(|| format!("could not read '{}'", segment.file.display()))?;
                memory.poke(address, &data).with_context(|| {
                    format!("could not load '{}' at {}", segment.file.display(), address)
                })?;
                info!("loaded {} bytes from '{}' at {}", data.len(), segment.file.display(), address);
            }
            None => {
                let binary = AtariBinary::from_file(&segment.file)?;
                for part in binary.segments() {
                    memory.poke(part.address, &part.data).with_context(|| {
                        format!("could not load '{}' at {}", segment.file.display(), part.address)
                    })?;
                    debug!("'{}': {} bytes at {}", segment.file.display(), part.data.len(), part.address);
                }
                if let Some(address) = binary.init_address() {
                    warn!("'{}': init routine at {} is not run", segment.file.display(), address);
                }
                run_address = binary.run_address().or(run_address);
                info!("loaded {} segment(s) from '{}'", binary.segments().len(), segment.file.display());
            }
        }
    }

    Ok(run_address)
}

impl<S: Screen + 'static> Machine<S> {
    /// The screen is only created when the machine has a display.
    pub fn new(config: &MachineConfig, screen: impl FnOnce() -> AppResult<S>) -> AppResult<Machine<S>> {
        let mut memory = Memory::new();
        let run_address = load_segments(&mut memory, config.segments.as_deref().unwrap_or_default())?;
        let name = config.name.as_deref().unwrap_or("machine");
        let mut processor = Processor::new().named(name).with_memory(memory);

        processor.reset();
        if let Some(start) = config.start_address()?.or(run_address) {
            processor.set_pc(start);
        }
        info!("{}: starting at {}", name, processor.pc());

        let breakpoint_hit = Rc::new(Cell::new(None));
        for address in config.breakpoint_addresses()? {
            let hit = Rc::clone(&breakpoint_hit);
            processor.add_breakpoint(Some(address), None, move |cpu: &Processor| {
                info!("{}: breakpoint at {}", cpu.name(), cpu.pc());
                hit.set(Some(cpu.pc()));
            });
        }

        let display = match &config.display {
            Some(display) => {
                let antic = Rc::new(RefCell::new(Antic::new(screen()?)));
                Antic::install(&antic, processor.memory_mut());
                Some(Video {
                    antic,
                    frames: display.frames,
                })
            }
            None => None,
        };

        Ok(Machine {
            processor,
            display,
            breakpoint_hit,
            max_steps: config.max_steps.unwrap_or(DEFAULT_MAX_STEPS),
            trace: false,
        })
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Keep every executed instruction in the run report.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    pub fn antic(&self) -> Option<Rc<RefCell<Antic<S>>>> {
        self.display.as_ref().map(|display| Rc::clone(&display.antic))
    }

    fn frames(&self) -> usize {
        self.display
            .as_ref()
            .map_or(0, |display| display.antic.borrow().frames())
    }

    pub fn run(&mut self) -> AppResult<RunReport> {
        let mut log_lines = Vec::new();
        let mut steps = 0;

        let stop = loop {
            if steps >= self.max_steps {
                break StopReason::StepLimit(self.max_steps);
            }
            let address = self.processor.pc();
            let log_line = self.processor.step()?;
            steps += 1;
            if !self.trace {
                log_lines.clear();
            }
            log_lines.push(log_line);

            if let Some(address) = self.breakpoint_hit.take() {
                break StopReason::Breakpoint(address);
            }
            let halted = self.processor.pc() == address;

            let display = match &self.display {
                Some(display) => display,
                None if halted => break StopReason::Halted(address),
                None => continue,
            };

            if halted {
                display
                    .antic
                    .borrow_mut()
                    .render_scan_line(self.processor.memory_mut())
                    .context("display failure")?;
            }
            let request = display.antic.borrow_mut().take_interrupt_request();
            if let Some(source) = request {
                debug!("{}: {:?} interrupt", self.processor.name(), source);
                self.processor.non_maskable_interrupt()?;
            }
            let frames = display.antic.borrow().frames();
            if frames >= display.frames {
                break StopReason::FramesRendered(frames);
            }
        };

        info!("{}: {} after {} steps", self.processor.name(), stop, steps);

        Ok(RunReport {
            steps,
            log_lines,
            stop,
            frames: self.frames(),
        })
    }
}
