use crate::cpu_instruction::microcode::Result as MicrocodeResult;
use crate::cpu_instruction::{
    CPUInstruction, InstructionSet, LogLine, INIT_VECTOR_ADDR, INTERRUPT_VECTOR_ADDR,
    NMI_VECTOR_ADDR,
};
use crate::delegate::{Delegate, Handle};
use crate::disassembler::MemoryParserIterator;
use crate::memory::{Memory, MemoryError};
use crate::registers::*;
use crate::value::Address;
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

/// Registers that can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    X,
    Y,
}

impl Register {
    fn index(self) -> usize {
        match self {
            Register::A => 0,
            Register::X => 1,
            Register::Y => 2,
        }
    }
}

pub type BreakpointPredicate = Box<dyn Fn(&Processor) -> bool>;

/// A breakpoint fires when the command pointer is written and both its
/// address (if any) and its predicate (if any) match.
pub struct BreakpointFilter {
    address: Option<Address>,
    predicate: Option<BreakpointPredicate>,
}

fn breakpoint_matches(filter: &BreakpointFilter, cpu: &Processor) -> bool {
    filter.address.map_or(true, |addr| addr == cpu.pc())
        && filter.predicate.as_ref().map_or(true, |p| p(cpu))
}

/*
 * Processor
 * Owns the registers, the memory and a reference to the instruction set. Every
 * write to A, X, Y is notified to the register observers and every write to
 * the command pointer is checked against the breakpoints. Observers and
 * breakpoints only receive a shared reference, they cannot alter the
 * execution.
 */
pub struct Processor {
    name: String,
    registers: Registers,
    memory: Memory,
    instruction_set: Arc<InstructionSet>,
    observers: [Delegate<u8>; 3],
    breakpoints: Delegate<Processor, BreakpointFilter>,
    // set when the running instruction writes the command pointer itself
    jumped: bool,
}

impl Processor {
    pub fn new() -> Processor {
        Processor {
            name: "cpu".to_owned(),
            registers: Registers::new(0x0000),
            memory: Memory::new(),
            instruction_set: InstructionSet::shared(),
            observers: [Delegate::new(), Delegate::new(), Delegate::new()],
            breakpoints: Delegate::with_filter(breakpoint_matches),
            jumped: false,
        }
    }

    pub fn named(mut self, name: &str) -> Processor {
        self.name = name.to_owned();
        self
    }

    pub fn with_memory(mut self, memory: Memory) -> Processor {
        self.memory = memory;
        self
    }

    pub fn with_instruction_set(mut self, instruction_set: Arc<InstructionSet>) -> Processor {
        self.instruction_set = instruction_set;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn instruction_set(&self) -> &InstructionSet {
        &self.instruction_set
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn a(&self) -> u8 {
        self.registers.accumulator
    }

    pub fn x(&self) -> u8 {
        self.registers.register_x
    }

    pub fn y(&self) -> u8 {
        self.registers.register_y
    }

    pub fn sp(&self) -> u8 {
        self.registers.stack_pointer
    }

    pub fn pc(&self) -> Address {
        Address::from(self.registers.command_pointer)
    }

    pub fn status(&self) -> u8 {
        self.registers.get_status_register()
    }

    pub fn flag_is_set(&self, flag: u8) -> bool {
        self.registers.flag_is_set(flag)
    }

    pub fn set_a(&mut self, value: u8) {
        self.registers.accumulator = value;
        self.observers[Register::A.index()].invoke(&value);
    }

    pub fn set_x(&mut self, value: u8) {
        self.registers.register_x = value;
        self.observers[Register::X.index()].invoke(&value);
    }

    pub fn set_y(&mut self, value: u8) {
        self.registers.register_y = value;
        self.observers[Register::Y.index()].invoke(&value);
    }

    pub fn set_sp(&mut self, value: u8) {
        self.registers.stack_pointer = value;
    }

    pub fn set_status(&mut self, value: u8) {
        self.registers.set_status_register(value);
    }

    pub fn set_flag(&mut self, flag: u8, value: bool) {
        self.registers.set_flag(flag, value);
    }

    pub fn set_pc(&mut self, address: Address) {
        self.registers.command_pointer = address.as_u16();
        let hits = self.breakpoints.invoke(self);

        if hits > 0 {
            debug!("{}: {} breakpoint(s) hit at {}", self.name, hits, address);
        }
    }

    /// Set the command pointer from within an instruction, the step will not
    /// move it past the instruction afterwards.
    pub fn jump(&mut self, address: Address) {
        self.jumped = true;
        self.set_pc(address);
    }

    /*
     * Stack
     * The stack lives in page 1, the stack pointer designates the next free
     * slot and wraps around without any overflow check.
     */
    pub fn push(&mut self, byte: u8) -> Result<(), MemoryError> {
        let address = Address::from(STACK_BASE_ADDR as u16 | self.sp() as u16);
        self.memory.poke(address, &[byte])?;
        self.registers.stack_pointer = self.sp().wrapping_sub(1);

        Ok(())
    }

    pub fn pull(&mut self) -> u8 {
        let byte = self.stack_peek();
        self.registers.stack_pointer = self.sp().wrapping_add(1);

        byte
    }

    /// Last pushed byte, the stack pointer is left untouched.
    pub fn stack_peek(&self) -> u8 {
        let address = STACK_BASE_ADDR as u16 | self.sp().wrapping_add(1) as u16;

        self.memory.peek(Address::from(address))
    }

    /// Software interrupt entry: the command pointer designates the BRK
    /// padding byte, the pushed return address is the byte after it. This
    /// cannot be masked by the I flag.
    pub fn interrupt(&mut self) -> Result<(), MemoryError> {
        let return_address = self.pc().wrapping_add(1);

        self.enter_interrupt(return_address, true, INTERRUPT_VECTOR_ADDR)
    }

    /// Hardware non maskable interrupt: the current command pointer is the
    /// return address and the B flag is pushed cleared.
    pub fn non_maskable_interrupt(&mut self) -> Result<(), MemoryError> {
        let return_address = self.pc();

        self.enter_interrupt(return_address, false, NMI_VECTOR_ADDR)
    }

    pub(crate) fn enter_interrupt(
        &mut self,
        return_address: Address,
        brk: bool,
        vector: usize,
    ) -> Result<(), MemoryError> {
        self.push(return_address.high_byte())?;
        self.push(return_address.low_byte())?;
        self.set_flag(FLAG_B, brk);
        self.push(self.status())?;
        self.set_flag(FLAG_I, true);
        let destination = self.memory.address_at(Address::from(vector as u16), false);
        debug!(
            "{}: interrupt from {} to {} (vector #0x{:04X})",
            self.name, return_address, destination, vector
        );
        self.jump(destination);

        Ok(())
    }

    /// Registers back to their power up state, the command pointer is read
    /// from the reset vector.
    pub fn reset(&mut self) {
        let start = self
            .memory
            .address_at(Address::from(INIT_VECTOR_ADDR as u16), false);
        self.registers = Registers::new(start.as_u16());
        self.set_a(0);
        self.set_x(0);
        self.set_y(0);
        self.set_pc(start);
    }

    /*
     * step
     * fetch, decode and execute the instruction at the command pointer. Unless
     * the instruction changed the command pointer itself, it is moved past the
     * instruction and its operand.
     */
    pub fn step(&mut self) -> MicrocodeResult<LogLine> {
        let address = self.pc();
        let opcode = self.memory.peek(address);
        let instruction = *self.instruction_set.get(opcode);
        let width = instruction.addressing_mode.width();
        let operand = match width {
            0 => 0,
            1 => self.memory.peek(address.wrapping_add(1)) as u16,
            _ => self.memory.address_at(address.wrapping_add(1), false).as_u16(),
        };
        let cpu_instruction = CPUInstruction::from_instruction(address, opcode, &instruction, operand);

        self.jumped = false;
        cpu_instruction.execute(self)?;

        if !self.jumped {
            self.set_pc(address.wrapping_add(1 + width as u16));
        }

        let log_line = LogLine::new(&cpu_instruction, self);
        trace!("{}", log_line);

        Ok(log_line)
    }

    /// Step until the predicate holds, the command pointer does not move
    /// anymore (a jump to itself) or `max_steps` instructions are executed.
    pub fn run_until(
        &mut self,
        predicate: impl Fn(&Processor) -> bool,
        max_steps: usize,
    ) -> MicrocodeResult<Vec<LogLine>> {
        let mut log_lines = Vec::new();

        while log_lines.len() < max_steps && !predicate(self) {
            let address = self.pc();
            log_lines.push(self.step()?);

            if self.pc() == address {
                debug!("{}: halted at {}", self.name, address);
                break;
            }
        }

        Ok(log_lines)
    }

    pub fn disassemble(&self, start: Address) -> MemoryParserIterator<'_> {
        MemoryParserIterator::new(start, &self.memory, &self.instruction_set)
    }

    pub fn add_register_observer(
        &mut self,
        register: Register,
        observer: impl Fn(&u8) + 'static,
    ) -> Handle {
        self.observers[register.index()].add(observer, ())
    }

    pub fn remove_register_observer(&mut self, register: Register, handle: Handle) -> bool {
        self.observers[register.index()].remove(handle)
    }

    pub fn add_breakpoint(
        &mut self,
        address: Option<Address>,
        predicate: Option<BreakpointPredicate>,
        callback: impl Fn(&Processor) + 'static,
    ) -> Handle {
        self.breakpoints
            .add(callback, BreakpointFilter { address, predicate })
    }

    pub fn remove_breakpoint(&mut self, handle: Handle) -> bool {
        self.breakpoints.remove(handle)
    }

    pub fn breakpoint_count(&self) -> usize {
        self.breakpoints.len()
    }
}

impl Default for Processor {
    fn default() -> Self {
        Processor::new()
    }
}

impl fmt::Debug for Processor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Processor '{}' {:?}", self.name, self.registers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new() {
        let cpu = Processor::new().named("main");
        assert_eq!("main", cpu.name());
        assert_eq!(0x34, cpu.status());
        assert_eq!(0xff, cpu.sp());
        assert_eq!("Processor 'main' Registers [A:0x00, X:0x00, Y:0x00 | SP:0xff CP:0x0000 | nv-BdIzc]", format!("{:?}", cpu));
    }

    #[test]
    fn test_status_unused_bit() {
        let mut cpu = Processor::new();
        cpu.set_status(0x00);
        assert_eq!(0x20, cpu.status());
        cpu.set_status(0xff);
        assert_eq!(0xff, cpu.status());
    }

    #[test]
    fn test_stack_round_trip() {
        let mut cpu = Processor::new();
        let start = cpu.sp();
        for byte in 0..=255u8 {
            cpu.push(byte).unwrap();
            assert_eq!(byte, cpu.stack_peek());
        }
        assert_eq!(start, cpu.sp());
        for byte in (0..=255u8).rev() {
            assert_eq!(byte, cpu.pull());
        }
        assert_eq!(start, cpu.sp());
    }

    #[test]
    fn test_stack_wraps() {
        let mut cpu = Processor::new();
        cpu.set_sp(0x00);
        cpu.push(0x12).unwrap();
        assert_eq!(0xff, cpu.sp());
        assert_eq!(0x12, cpu.memory().peek(Address::from(0x0100u16)));
        assert_eq!(0x12, cpu.pull());
        assert_eq!(0x00, cpu.sp());
    }

    #[test]
    fn test_interrupt() {
        let mut cpu = get_stuff(0x1000, vec![0x00]);
        cpu.memory_mut()
            .poke(Address::from(0xfffeu16), &[0x00, 0xf0])
            .unwrap();
        cpu.set_status(0x20);
        cpu.interrupt().unwrap();
        assert_eq!(Address::from(0xf000u16), cpu.pc());
        assert!(cpu.flag_is_set(FLAG_I));
        assert!(cpu.flag_is_set(FLAG_B));
        assert_eq!(0xfc, cpu.sp());
        assert_eq!(0x30, cpu.pull());
        assert_eq!(0x01, cpu.pull());
        assert_eq!(0x10, cpu.pull());
    }

    #[test]
    fn test_interrupt_ignores_i_flag() {
        let mut cpu = get_stuff(0x1000, vec![0x00]);
        cpu.memory_mut()
            .poke(Address::from(0xfffeu16), &[0x00, 0xf0])
            .unwrap();
        cpu.set_flag(FLAG_I, true);
        cpu.interrupt().unwrap();
        assert_eq!(Address::from(0xf000u16), cpu.pc());
    }

    #[test]
    fn test_non_maskable_interrupt() {
        let mut cpu = get_stuff(0x1000, vec![0xea]);
        cpu.memory_mut()
            .poke(Address::from(0xfffau16), &[0x00, 0xe0])
            .unwrap();
        cpu.set_status(0x20);
        cpu.non_maskable_interrupt().unwrap();
        assert_eq!(Address::from(0xe000u16), cpu.pc());
        assert_eq!(0x20, cpu.pull());
        assert_eq!(0x00, cpu.pull());
        assert_eq!(0x10, cpu.pull());
    }

    #[test]
    fn test_reset() {
        let mut cpu = Processor::new();
        cpu.memory_mut()
            .poke(Address::from(0xfffcu16), &[0x00, 0x08])
            .unwrap();
        cpu.set_a(0x12);
        cpu.set_sp(0x10);
        cpu.set_status(0xff);
        cpu.reset();
        assert_eq!(Address::from(0x0800u16), cpu.pc());
        assert_eq!(0x00, cpu.a());
        assert_eq!(0xff, cpu.sp());
        assert_eq!(0x34, cpu.status());
    }

    #[test]
    fn test_step() {
        let mut cpu = get_stuff(0x1000, vec![0xa9, 0x50, 0xaa, 0xe8, 0x69, 0x50]);
        let log_line = cpu.step().unwrap();
        assert_eq!("LDA", log_line.mnemonic);
        assert_eq!(Address::from(0x1002u16), cpu.pc());
        cpu.step().unwrap();
        cpu.step().unwrap();
        assert_eq!(0x51, cpu.x());
        let log_line = cpu.step().unwrap();
        assert_eq!(0xa0, cpu.a());
        assert!(!cpu.flag_is_set(FLAG_C));
        assert!(cpu.flag_is_set(FLAG_V));
        assert_eq!(
            "#0x1004: (69 50)       ADC  #$50             [A=0xa0][X=0x51][Y=0x00][SP=0xff][S=NV-BdIzc]",
            log_line.to_string()
        );
    }

    #[test]
    fn test_register_observers() {
        let mut cpu = Processor::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let observer = seen.clone();
        let handle = cpu.add_register_observer(Register::X, move |v| observer.borrow_mut().push(*v));
        cpu.set_a(0x01);
        cpu.set_x(0x02);
        cpu.set_x(0x02);
        assert!(cpu.remove_register_observer(Register::X, handle));
        cpu.set_x(0x03);
        assert_eq!(vec![0x02, 0x02], *seen.borrow());
    }

    #[test]
    fn test_breakpoints() {
        let mut cpu = get_stuff(0x1000, vec![0xe8, 0xe8, 0xe8, 0xe8]);
        let hits = Rc::new(RefCell::new(Vec::new()));
        let on_address = hits.clone();
        cpu.add_breakpoint(Some(Address::from(0x1002u16)), None, move |cpu| {
            on_address.borrow_mut().push(("address", cpu.pc().as_u16()))
        });
        let on_predicate = hits.clone();
        let handle = cpu.add_breakpoint(None, Some(Box::new(|cpu: &Processor| cpu.x() >= 3)), move |cpu| {
            on_predicate.borrow_mut().push(("x", cpu.pc().as_u16()))
        });
        for _ in 0..4 {
            cpu.step().unwrap();
        }
        assert_eq!(
            vec![("address", 0x1002), ("x", 0x1003), ("x", 0x1004)],
            *hits.borrow()
        );
        assert!(cpu.remove_breakpoint(handle));
        assert_eq!(1, cpu.breakpoint_count());
    }

    #[test]
    fn test_run_until() {
        // LDX #$00; INX; CPX #$05; BNE -5; JMP $1007
        let mut cpu = get_stuff(
            0x1000,
            vec![0xa2, 0x00, 0xe8, 0xe0, 0x05, 0xd0, 0xfb, 0x4c, 0x07, 0x10],
        );
        let log_lines = cpu.run_until(|_| false, 1000).unwrap();
        assert_eq!(0x05, cpu.x());
        assert_eq!(Address::from(0x1007u16), cpu.pc());
        assert_eq!(1 + 5 * 3 + 1, log_lines.len());

        let mut cpu = get_stuff(0x1000, vec![0xe8, 0xe8, 0xe8, 0xe8]);
        let log_lines = cpu.run_until(|cpu| cpu.x() == 2, 1000).unwrap();
        assert_eq!(2, log_lines.len());
        let log_lines = cpu.run_until(|_| false, 1).unwrap();
        assert_eq!(1, log_lines.len());
        assert_eq!(3, cpu.x());
    }
}
