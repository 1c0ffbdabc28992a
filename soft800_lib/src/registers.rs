use std::fmt;
/*
 * 6502 registers
 * accumulator, X & Y registers are 8 bits general purpose registers.
 * status flags register :
 * bit 7: Negative flag
 * bit 6: oVerflow flag
 * bit 5: not used, always set
 * bit 4: Break interrupt mode
 * bit 3: Decimal mode
 * bit 2: Interrupt disable
 * bit 1: Zero flag
 * bit 0: Carry flag
 *
 * command pointer: 16 bit address register
 * stack pointer: 8 bits at page 0x0100, set at 0xff at start.
 *
 * The fields are only writable from within the crate: the Processor is the
 * only one allowed to change them since writes may be observed.
 */
pub const STACK_BASE_ADDR: usize = 0x0100;

pub const FLAG_N: u8 = 0b10000000;
pub const FLAG_V: u8 = 0b01000000;
pub const FLAG_UNUSED: u8 = 0b00100000;
pub const FLAG_B: u8 = 0b00010000;
pub const FLAG_D: u8 = 0b00001000;
pub const FLAG_I: u8 = 0b00000100;
pub const FLAG_Z: u8 = 0b00000010;
pub const FLAG_C: u8 = 0b00000001;

#[derive(Clone, PartialEq, Eq)]
pub struct Registers {
    pub(crate) accumulator: u8,
    pub(crate) register_x: u8,
    pub(crate) register_y: u8,
    status_register: u8,
    pub(crate) command_pointer: u16,
    pub(crate) stack_pointer: u8,
}

impl Registers {
    pub fn new(init_address: u16) -> Registers {
        Registers {
            accumulator: 0x00,
            register_x: 0x00,
            register_y: 0x00,
            status_register: FLAG_UNUSED | FLAG_B | FLAG_I,
            command_pointer: init_address,
            stack_pointer: 0xff,
        }
    }

    pub fn accumulator(&self) -> u8 {
        self.accumulator
    }

    pub fn register_x(&self) -> u8 {
        self.register_x
    }

    pub fn register_y(&self) -> u8 {
        self.register_y
    }

    pub fn command_pointer(&self) -> u16 {
        self.command_pointer
    }

    pub fn stack_pointer(&self) -> u8 {
        self.stack_pointer
    }

    pub fn get_status_register(&self) -> u8 {
        self.status_register
    }

    /// Bit 5 is hardwired, whatever is written there it is read back as 1.
    pub(crate) fn set_status_register(&mut self, status: u8) {
        self.status_register = status | FLAG_UNUSED;
    }

    pub fn flag_is_set(&self, flag: u8) -> bool {
        self.status_register & flag == flag
    }

    pub(crate) fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.status_register |= flag;
        } else {
            self.status_register &= !flag;
        }
    }

    pub fn n_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_N)
    }

    pub fn v_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_V)
    }

    pub fn b_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_B)
    }

    pub fn d_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_D)
    }

    pub fn i_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_I)
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_Z)
    }

    pub fn c_flag_is_set(&self) -> bool {
        self.flag_is_set(FLAG_C)
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}-{}{}{}{}{}",
            if self.n_flag_is_set() { "N" } else { "n" },
            if self.v_flag_is_set() { "V" } else { "v" },
            if self.b_flag_is_set() { "B" } else { "b" },
            if self.d_flag_is_set() { "D" } else { "d" },
            if self.i_flag_is_set() { "I" } else { "i" },
            if self.z_flag_is_set() { "Z" } else { "z" },
            if self.c_flag_is_set() { "C" } else { "c" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [A:0x{:02x}, X:0x{:02x}, Y:0x{:02x} | SP:0x{:02x} CP:0x{:04x} | {}]",
            self.accumulator,
            self.register_x,
            self.register_y,
            self.stack_pointer,
            self.command_pointer,
            self.format_status()
        )
    }
}
