//! Memory and I/O bus for the Master System.
//!
//! Maps CPU memory accesses to the MMU and I/O ports to the VDP.

use crate::{mmu::Mmu, vdp::vdp::Vdp};

/// Trait for memory-mapped and port-mapped access used by the CPU.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
    fn io_read(&mut self, port: u8) -> u8;
    fn io_write(&mut self, port: u8, data: u8);
}

/// Main SMS bus: mapper MMU and VDP.
pub struct SmsBus {
    pub mmu: Mmu,
    pub vdp: Vdp,
}

impl SmsBus {
    pub fn new() -> Self {
        Self {
            mmu: Mmu::new(),
            vdp: Vdp::new(),
        }
    }
}

impl Default for SmsBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for SmsBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.mmu.read8(addr)
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.mmu.write8(addr, data);
    }

    fn io_read(&mut self, port: u8) -> u8 {
        match port {
            // V counter, H counter, data port, control/status port
            0x7E | 0x7F | 0xBE | 0xBF => self.vdp.port_read(port),
            // Unmapped ports read as pulled-up bus
            _ => 0xFF,
        }
    }

    fn io_write(&mut self, port: u8, data: u8) {
        match port {
            0xBE | 0xBF => self.vdp.port_write(port, data),
            // PSG and controller ports are not emulated
            _ => {}
        }
    }
}
