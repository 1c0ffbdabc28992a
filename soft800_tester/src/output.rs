use crate::machine::RunReport;
use crate::utils::format_hex_dump;
use crate::AppResult;
use soft800_lib::{Address, DisassemblyLine, Processor};
use std::io::Write;

/// Writes what the tester has to say on the given output.
#[derive(Debug, Default)]
pub struct CliDisplayer<T>
where
    T: Write,
{
    output: T,
    trace: bool,
}

impl<T> CliDisplayer<T>
where
    T: Write,
{
    pub fn new(output: T, trace: bool) -> Self {
        Self { output, trace }
    }

    pub fn into_inner(self) -> T {
        self.output
    }

    pub fn display_report(&mut self, name: &str, report: &RunReport) -> AppResult<()> {
        if self.trace {
            for line in &report.log_lines {
                writeln!(self.output, "⚡ {line}")?;
            }
        } else if let Some(line) = report.log_lines.last() {
            writeln!(self.output, "⚡ {line}")?;
        }
        writeln!(
            self.output,
            "♯ {name}: {} after {} steps, {} frame(s)",
            report.stop,
            report.steps,
            report.frames
        )?;

        Ok(())
    }

    pub fn display_registers(&mut self, processor: &Processor) -> AppResult<()> {
        writeln!(
            self.output,
            "♯ registers: {:?} PC={}",
            processor.registers(),
            processor.pc()
        )?;

        Ok(())
    }

    pub fn display_dump(&mut self, processor: &Processor, address: Address, length: usize) -> AppResult<()> {
        let bytes: Vec<u8> = (0..length)
            .map_while(|offset| address.checked_add(offset))
            .map(|address| processor.memory().peek(address))
            .collect();
        writeln!(self.output, "{}", format_hex_dump(address.as_usize(), &bytes))?;

        Ok(())
    }

    pub fn display_disassembly(&mut self, lines: impl IntoIterator<Item = DisassemblyLine>) -> AppResult<()> {
        for line in lines {
            writeln!(self.output, "{line}")?;
        }

        Ok(())
    }
}
