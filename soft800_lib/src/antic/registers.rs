/*
 * ANTIC & GTIA registers
 * The video registers are plain memory locations. They are read and written
 * through the memory bus so a program sees exactly what the coprocessor uses
 * and write hooks registered on them still fire.
 */
use crate::memory::{Memory, MemoryError};
use crate::value::Address;

pub const DMACTL: u16 = 0xd400;
pub const CHACTL: u16 = 0xd401;
pub const DLISTL: u16 = 0xd402;
pub const DLISTH: u16 = 0xd403;
pub const HSCROL: u16 = 0xd404;
pub const VSCROL: u16 = 0xd405;
pub const PMBASE: u16 = 0xd407;
pub const CHBASE: u16 = 0xd409;
pub const WSYNC: u16 = 0xd40a;
pub const VCOUNT: u16 = 0xd40b;
pub const PENH: u16 = 0xd40c;
pub const PENV: u16 = 0xd40d;
pub const NMIEN: u16 = 0xd40e;
pub const NMIST: u16 = 0xd40f;

pub const COLPM0: u16 = 0xd012;
pub const COLPF0: u16 = 0xd016;
pub const COLBK: u16 = 0xd01a;
pub const PRIOR: u16 = 0xd01b;

pub const DMACTL_WIDTH_MASK: u8 = 0b0000_0011;
pub const DMACTL_MISSILE: u8 = 0b0000_0100;
pub const DMACTL_PLAYER: u8 = 0b0000_1000;
pub const DMACTL_SINGLE_LINE: u8 = 0b0001_0000;
pub const DMACTL_DISPLAY_LIST: u8 = 0b0010_0000;

pub const CHACTL_BLANK: u8 = 0b0000_0001;
pub const CHACTL_INVERSE: u8 = 0b0000_0010;
pub const CHACTL_REFLECT: u8 = 0b0000_0100;

pub const NMI_RESET_KEY: u8 = 0b0010_0000;
pub const NMI_VERTICAL_BLANK: u8 = 0b0100_0000;
pub const NMI_DISPLAY_LIST: u8 = 0b1000_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayfieldWidth {
    Disabled,
    Narrow,
    Normal,
    Wide,
}

impl PlayfieldWidth {
    pub fn from_dmactl(dmactl: u8) -> PlayfieldWidth {
        match dmactl & DMACTL_WIDTH_MASK {
            0 => PlayfieldWidth::Disabled,
            1 => PlayfieldWidth::Narrow,
            2 => PlayfieldWidth::Normal,
            _ => PlayfieldWidth::Wide,
        }
    }

    /// Width fetched when horizontal scrolling is enabled on a mode line.
    pub fn scrolled(self) -> PlayfieldWidth {
        match self {
            PlayfieldWidth::Narrow => PlayfieldWidth::Normal,
            PlayfieldWidth::Normal | PlayfieldWidth::Wide => PlayfieldWidth::Wide,
            PlayfieldWidth::Disabled => PlayfieldWidth::Disabled,
        }
    }

    /// Bytes fetched for a mode using `normal` bytes on a normal playfield.
    pub fn bytes(self, normal: usize) -> usize {
        match self {
            PlayfieldWidth::Disabled => 0,
            PlayfieldWidth::Narrow => normal * 4 / 5,
            PlayfieldWidth::Normal => normal,
            PlayfieldWidth::Wide => normal * 6 / 5,
        }
    }
}

/*
 * AnticRegisters
 * Getter & setter pairs over the register addresses. Setters go through the
 * memory bus, hence can fail like any write.
 */
pub trait AnticRegisters {
    fn register(&self, address: u16) -> u8;
    fn set_register(&mut self, address: u16, value: u8) -> Result<(), MemoryError>;

    fn dmactl(&self) -> u8 {
        self.register(DMACTL)
    }

    fn set_dmactl(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(DMACTL, value)
    }

    fn playfield_width(&self) -> PlayfieldWidth {
        PlayfieldWidth::from_dmactl(self.dmactl())
    }

    fn missile_dma(&self) -> bool {
        self.dmactl() & DMACTL_MISSILE != 0
    }

    fn player_dma(&self) -> bool {
        self.dmactl() & DMACTL_PLAYER != 0
    }

    fn single_line_resolution(&self) -> bool {
        self.dmactl() & DMACTL_SINGLE_LINE != 0
    }

    fn display_list_dma(&self) -> bool {
        self.dmactl() & DMACTL_DISPLAY_LIST != 0
    }

    fn chactl(&self) -> u8 {
        self.register(CHACTL)
    }

    fn set_chactl(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(CHACTL, value)
    }

    fn display_list(&self) -> Address {
        Address::from(u16::from_le_bytes([
            self.register(DLISTL),
            self.register(DLISTH),
        ]))
    }

    fn set_display_list(&mut self, address: Address) -> Result<(), MemoryError> {
        self.set_register(DLISTL, address.low_byte())?;
        self.set_register(DLISTH, address.high_byte())
    }

    fn hscrol(&self) -> u8 {
        self.register(HSCROL) & 0x0f
    }

    fn set_hscrol(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(HSCROL, value & 0x0f)
    }

    fn vscrol(&self) -> u8 {
        self.register(VSCROL) & 0x0f
    }

    fn set_vscrol(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(VSCROL, value & 0x0f)
    }

    /// Player missile base address, the register holds the high byte.
    fn pmbase(&self) -> Address {
        Address::from(u16::from_le_bytes([0x00, self.register(PMBASE)]))
    }

    fn set_pmbase(&mut self, address: Address) -> Result<(), MemoryError> {
        self.set_register(PMBASE, address.high_byte())
    }

    /// Character set base address, the register holds the high byte.
    fn chbase(&self) -> Address {
        Address::from(u16::from_le_bytes([0x00, self.register(CHBASE)]))
    }

    fn set_chbase(&mut self, address: Address) -> Result<(), MemoryError> {
        self.set_register(CHBASE, address.high_byte())
    }

    fn vcount(&self) -> u8 {
        self.register(VCOUNT)
    }

    fn set_vcount(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(VCOUNT, value)
    }

    fn light_pen(&self) -> (u8, u8) {
        (self.register(PENH), self.register(PENV))
    }

    fn set_light_pen(&mut self, horizontal: u8, vertical: u8) -> Result<(), MemoryError> {
        self.set_register(PENH, horizontal)?;
        self.set_register(PENV, vertical)
    }

    fn nmien(&self) -> u8 {
        self.register(NMIEN)
    }

    fn set_nmien(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(NMIEN, value)
    }

    fn nmist(&self) -> u8 {
        self.register(NMIST)
    }

    fn set_nmist(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(NMIST, value)
    }

    /// Player color, `player` is in 0..4.
    fn colpm(&self, player: usize) -> u8 {
        self.register(COLPM0 + (player & 0x03) as u16)
    }

    fn set_colpm(&mut self, player: usize, value: u8) -> Result<(), MemoryError> {
        self.set_register(COLPM0 + (player & 0x03) as u16, value)
    }

    /// Playfield color, `playfield` is in 0..4.
    fn colpf(&self, playfield: usize) -> u8 {
        self.register(COLPF0 + (playfield & 0x03) as u16)
    }

    fn set_colpf(&mut self, playfield: usize, value: u8) -> Result<(), MemoryError> {
        self.set_register(COLPF0 + (playfield & 0x03) as u16, value)
    }

    fn colbk(&self) -> u8 {
        self.register(COLBK)
    }

    fn set_colbk(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(COLBK, value)
    }

    fn prior(&self) -> u8 {
        self.register(PRIOR)
    }

    fn set_prior(&mut self, value: u8) -> Result<(), MemoryError> {
        self.set_register(PRIOR, value)
    }
}

impl AnticRegisters for Memory {
    fn register(&self, address: u16) -> u8 {
        self.peek(Address::from(address))
    }

    fn set_register(&mut self, address: u16, value: u8) -> Result<(), MemoryError> {
        self.poke(Address::from(address), &[value])
    }
}
