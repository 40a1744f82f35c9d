//! Z80 register file.
//!
//! Every 16-bit pair is addressable as two 8-bit halves; `RegPair` keeps the
//! halves as plain bytes and exposes accessors for both views.

/// A 16-bit register pair stored as high/low bytes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct RegPair {
    hi: u8,
    lo: u8,
}

impl RegPair {
    pub fn new(value: u16) -> Self {
        Self {
            hi: (value >> 8) as u8,
            lo: value as u8,
        }
    }

    pub fn get16(self) -> u16 {
        ((self.hi as u16) << 8) | self.lo as u16
    }

    pub fn set16(&mut self, value: u16) {
        self.hi = (value >> 8) as u8;
        self.lo = value as u8;
    }

    pub fn get_high(self) -> u8 {
        self.hi
    }

    pub fn set_high(&mut self, value: u8) {
        self.hi = value;
    }

    pub fn get_low(self) -> u8 {
        self.lo
    }

    pub fn set_low(&mut self, value: u8) {
        self.lo = value;
    }
}

/// Main, index, and shadow registers plus PC/SP and the I/R pair.
#[derive(Clone, Copy, Default, Debug)]
pub struct Registers {
    pub af: RegPair,
    pub bc: RegPair,
    pub de: RegPair,
    pub hl: RegPair,
    pub ix: RegPair,
    pub iy: RegPair,

    // Shadow set, reachable only through EX AF,AF' and EXX
    pub af_p: RegPair,
    pub bc_p: RegPair,
    pub de_p: RegPair,
    pub hl_p: RegPair,

    pub pc: u16,
    pub sp: u16,

    /// Interrupt vector base (IM 2). Stored but never used for dispatch.
    pub i: u8,
    /// Memory refresh register. Stored but not incremented.
    pub r: u8,
}

impl Registers {
    pub fn new() -> Self {
        Self {
            sp: 0xFFFF,
            ..Default::default()
        }
    }
}
