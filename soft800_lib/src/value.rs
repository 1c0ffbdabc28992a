/*
 * Value types
 * Address: a 16 bit location in the 6502 address space.
 * Byte: an 8 bit value that can be read either unsigned [0, 255] or signed
 * [-128, 127].
 * Both are validated when they are built from wider integers and never
 * silently clamped.
 */
use std::error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueError {
    AddressOutOfRange(i64),
    ByteOutOfRange(i64),
    NotAnInteger(f64),
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ValueError::AddressOutOfRange(v) => {
                write!(f, "invalid address {}, it must be in [0, 65535]", v)
            }
            ValueError::ByteOutOfRange(v) => {
                write!(f, "invalid byte {}, it must be in [-128, 255]", v)
            }
            ValueError::NotAnInteger(v) => write!(f, "{} is not an integer", v),
        }
    }
}

impl error::Error for ValueError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u16);

impl Address {
    pub const MAX: Address = Address(0xFFFF);

    pub fn new(value: i64) -> Result<Address, ValueError> {
        if (0..=0xFFFF).contains(&value) {
            Ok(Address(value as u16))
        } else {
            Err(ValueError::AddressOutOfRange(value))
        }
    }

    pub fn as_u16(self) -> u16 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn low_byte(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    pub fn high_byte(self) -> u8 {
        self.0.to_le_bytes()[1]
    }

    /// Address `offset` bytes further, wrapping around the 16 bits space.
    pub fn wrapping_add(self, offset: u16) -> Address {
        Address(self.0.wrapping_add(offset))
    }

    /// Address `offset` bytes further or None when it would leave the address
    /// space.
    pub fn checked_add(self, offset: usize) -> Option<Address> {
        Address::new(self.0 as i64 + offset as i64).ok()
    }
}

impl From<u16> for Address {
    fn from(value: u16) -> Address {
        Address(value)
    }
}

impl From<u8> for Address {
    fn from(value: u8) -> Address {
        Address(value as u16)
    }
}

impl From<Address> for u16 {
    fn from(address: Address) -> u16 {
        address.0
    }
}

impl From<Address> for usize {
    fn from(address: Address) -> usize {
        address.0 as usize
    }
}

impl TryFrom<i64> for Address {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Address, ValueError> {
        Address::new(value)
    }
}

impl TryFrom<i32> for Address {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Address, ValueError> {
        Address::new(value as i64)
    }
}

impl TryFrom<usize> for Address {
    type Error = ValueError;

    fn try_from(value: usize) -> Result<Address, ValueError> {
        i64::try_from(value)
            .map_err(|_| ValueError::AddressOutOfRange(i64::MAX))
            .and_then(Address::new)
    }
}

impl TryFrom<f64> for Address {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Address, ValueError> {
        if value.fract() != 0.0 || !value.is_finite() {
            return Err(ValueError::NotAnInteger(value));
        }

        Address::new(value as i64)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${:04X}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Byte(u8);

impl Byte {
    /// Accepts both the signed and the unsigned representation.
    pub fn new(value: i64) -> Result<Byte, ValueError> {
        match value {
            -128..=-1 => Ok(Byte((value + 256) as u8)),
            0..=255 => Ok(Byte(value as u8)),
            _ => Err(ValueError::ByteOutOfRange(value)),
        }
    }

    pub fn unsigned_value(self) -> u8 {
        self.0
    }

    pub fn signed_value(self) -> i8 {
        i8::from_le_bytes([self.0])
    }

    pub fn is_negative(self) -> bool {
        self.0 & 0x80 != 0
    }
}

impl From<u8> for Byte {
    fn from(value: u8) -> Byte {
        Byte(value)
    }
}

impl From<i8> for Byte {
    fn from(value: i8) -> Byte {
        Byte(value.to_le_bytes()[0])
    }
}

impl From<Byte> for u8 {
    fn from(byte: Byte) -> u8 {
        byte.0
    }
}

impl TryFrom<i64> for Byte {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Byte, ValueError> {
        Byte::new(value)
    }
}

impl TryFrom<i32> for Byte {
    type Error = ValueError;

    fn try_from(value: i32) -> Result<Byte, ValueError> {
        Byte::new(value as i64)
    }
}

impl TryFrom<f64> for Byte {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Byte, ValueError> {
        if value.fract() != 0.0 || !value.is_finite() {
            return Err(ValueError::NotAnInteger(value));
        }

        Byte::new(value as i64)
    }
}

impl fmt::Display for Byte {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}
