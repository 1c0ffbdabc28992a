use super::processing_unit::Processor;
use super::value::Address;
use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, ResolutionError>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ResolutionError {
    // ↓ the instruction needs a location but the mode gives a value
    NotAnAddress(AddressingMode),
    // ↓ the instruction needs a value but the mode gives nothing
    NoValue(AddressingMode),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ResolutionError::NotAnAddress(mode) => {
                write!(f, "addressing mode '{:?}' does not resolve to an address", mode)
            }
            ResolutionError::NoValue(mode) => {
                write!(f, "addressing mode '{:?}' does not resolve to a value", mode)
            }
        }
    }
}

impl error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/// What an addressing mode makes of an operand.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Resolution {
    Nothing,
    Value(u8),
    Address(Address),
}

/*
 * AddressingMode
 * Stateless description of how the operand bytes following an opcode are
 * turned into a value or a memory location. The same mode is shared by all
 * the instructions using it, the raw operand (0, 1 or 2 bytes read little
 * endian) is given at evaluation time.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    Accumulator,
    Absolute,
    AbsoluteXIndexed,
    AbsoluteYIndexed,
    Immediate,
    Implied,
    Indirect,
    ZeroPageXIndexedIndirect,
    ZeroPageIndirectYIndexed,
    Relative,
    ZeroPage,
    ZeroPageXIndexed,
    ZeroPageYIndexed,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub fn width(&self) -> usize {
        match *self {
            AddressingMode::Accumulator | AddressingMode::Implied => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteXIndexed
            | AddressingMode::AbsoluteYIndexed
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }

    /*
     * evaluate
     * Raw evaluation of the operand against the processor state. Relative
     * targets are computed from the processor's command pointer which still
     * points at the instruction being executed.
     */
    pub fn evaluate(&self, cpu: &Processor, operand: u16) -> Resolution {
        let memory = cpu.memory();
        let zp = |v: u16| Address::from((v & 0x00ff) as u8);

        match *self {
            AddressingMode::Implied => Resolution::Nothing,
            AddressingMode::Accumulator => Resolution::Value(cpu.a()),
            AddressingMode::Immediate => Resolution::Value((operand & 0x00ff) as u8),
            AddressingMode::ZeroPage => Resolution::Address(zp(operand)),
            AddressingMode::ZeroPageXIndexed => {
                Resolution::Address(zp(operand.wrapping_add(cpu.x() as u16)))
            }
            AddressingMode::ZeroPageYIndexed => {
                Resolution::Address(zp(operand.wrapping_add(cpu.y() as u16)))
            }
            AddressingMode::ZeroPageXIndexedIndirect => Resolution::Address(
                memory.address_at(zp(operand.wrapping_add(cpu.x() as u16)), true),
            ),
            AddressingMode::ZeroPageIndirectYIndexed => Resolution::Address(
                memory
                    .address_at(zp(operand), true)
                    .wrapping_add(cpu.y() as u16),
            ),
            AddressingMode::Absolute => Resolution::Address(Address::from(operand)),
            AddressingMode::AbsoluteXIndexed => {
                Resolution::Address(Address::from(operand).wrapping_add(cpu.x() as u16))
            }
            AddressingMode::AbsoluteYIndexed => {
                Resolution::Address(Address::from(operand).wrapping_add(cpu.y() as u16))
            }
            AddressingMode::Indirect => {
                Resolution::Address(memory.address_at(Address::from(operand), false))
            }
            AddressingMode::Relative => {
                Resolution::Address(resolve_relative(cpu.pc(), (operand & 0x00ff) as u8))
            }
        }
    }

    /// Evaluate as a value, following one level of indirection when the mode
    /// gives a location.
    pub fn value(&self, cpu: &Processor, operand: u16) -> Result<u8> {
        match self.evaluate(cpu, operand) {
            Resolution::Value(v) => Ok(v),
            Resolution::Address(addr) => Ok(cpu.memory().peek(addr)),
            Resolution::Nothing => Err(ResolutionError::NoValue(*self)),
        }
    }

    pub fn address(&self, cpu: &Processor, operand: u16) -> Result<Address> {
        match self.evaluate(cpu, operand) {
            Resolution::Address(addr) => Ok(addr),
            _ => Err(ResolutionError::NotAnAddress(*self)),
        }
    }

    /// Disassembly of the operand, `address` is the location of the opcode.
    pub fn format(&self, operand: u16, address: Address) -> String {
        let [low, high] = operand.to_le_bytes();

        match *self {
            AddressingMode::Implied => String::new(),
            AddressingMode::Accumulator => "A".to_owned(),
            AddressingMode::Immediate => format!("#${:02x}", low),
            AddressingMode::ZeroPage => format!("${:02x}", low),
            AddressingMode::Absolute => format!("${:02X}{:02X}", high, low),
            AddressingMode::AbsoluteXIndexed => format!("${:02X}{:02X},X", high, low),
            AddressingMode::AbsoluteYIndexed => format!("${:02X}{:02X},Y", high, low),
            AddressingMode::Indirect => format!("(${:02X}{:02X})", high, low),
            AddressingMode::ZeroPageXIndexed => format!("${:02x},X", low),
            AddressingMode::ZeroPageYIndexed => format!("${:02x},Y", low),
            AddressingMode::ZeroPageXIndexedIndirect => format!("(${:02x},X)", low),
            AddressingMode::ZeroPageIndirectYIndexed => format!("(${:02x}),Y", low),
            AddressingMode::Relative => format!("{}", resolve_relative(address, low)),
        }
    }
}

/// Target of a branch located at `addr`: the offset is relative to the
/// instruction following the 2 bytes branch.
pub fn resolve_relative(addr: Address, offset: u8) -> Address {
    let offset = i8::from_le_bytes([offset]) as i16;

    addr.wrapping_add(2).wrapping_add(offset as u16)
}
