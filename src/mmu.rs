//! Sega memory mapper and system RAM.
//!
//! Memory map ([SMS Power!](https://www.smspower.org/Development/MemoryMap)):
//!
//! - `$0000-$3FFF` ROM slot 0 (first 1KB fixed: vectors and boot code)
//! - `$4000-$7FFF` ROM slot 1
//! - `$8000-$BFFF` ROM slot 2, or cartridge RAM when enabled
//! - `$C000-$DFFF` 8KB system RAM
//! - `$E000-$FFFF` RAM mirror; `$FFFC-$FFFF` are the mapper registers
//!
//! Bank switching is implemented by copying the selected 16KB cartridge
//! page into a flat 64KB image, so the read path stays a plain array index.

use std::fmt;

const MEM_SIZE: usize = 0x10000;
const PAGE_SIZE: usize = 0x4000;
const SYSTEM_RAM_SIZE: usize = 0x2000;
const CARTRIDGE_RAM_SIZE: usize = 0x4000;

/// First 1KB of slot 0 is never paged out.
const FIXED_AREA: usize = 0x400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartridgeError {
    /// The ROM image was empty.
    Empty,
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::Empty => write!(f, "ROM image is empty"),
        }
    }
}

impl std::error::Error for CartridgeError {}

pub struct Mmu {
    memory: [u8; MEM_SIZE],
    system_ram: [u8; SYSTEM_RAM_SIZE],
    cartridge: Vec<u8>,
    cartridge_ram: [u8; CARTRIDGE_RAM_SIZE],

    pub control_register: u8,
    cartridge_ram_enabled: bool,
    /// false: RAM window at $8000-$9FFF, true: $A000-$BFFF.
    cartridge_ram_page: bool,
    pub page_registers: [u8; 3],
}

impl Mmu {
    pub fn new() -> Self {
        Self {
            memory: [0; MEM_SIZE],
            system_ram: [0; SYSTEM_RAM_SIZE],
            cartridge: Vec::new(),
            cartridge_ram: [0; CARTRIDGE_RAM_SIZE],
            control_register: 0,
            cartridge_ram_enabled: false,
            cartridge_ram_page: false,
            page_registers: [0, 1, 2],
        }
    }

    /// Load a ROM image and map its first three pages.
    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), CartridgeError> {
        if data.is_empty() {
            return Err(CartridgeError::Empty);
        }
        self.cartridge = data.to_vec();

        // Fixed area: interrupt vectors and boot code
        let fixed = FIXED_AREA.min(self.cartridge.len());
        self.memory[..fixed].copy_from_slice(&self.cartridge[..fixed]);

        self.load_page(0, 0);
        self.load_page(1, 1);
        self.load_page(2, 2);
        Ok(())
    }

    /// Copy cartridge `page` into ROM `slot`. Pages past the end of the
    /// cartridge read as 0xFF; slot 0 keeps its fixed first 1KB.
    fn load_page(&mut self, page: u8, slot: usize) {
        let cart_offset = page as usize * PAGE_SIZE;
        let memory_offset = slot * PAGE_SIZE;

        if cart_offset >= self.cartridge.len() {
            self.memory[memory_offset..memory_offset + PAGE_SIZE].fill(0xFF);
            return;
        }

        let skip = if slot == 0 { FIXED_AREA } else { 0 };
        let avail = self.cartridge.len().saturating_sub(cart_offset + skip);
        let copy = avail.min(PAGE_SIZE - skip);
        self.memory[memory_offset + skip..memory_offset + skip + copy]
            .copy_from_slice(&self.cartridge[cart_offset + skip..cart_offset + skip + copy]);
    }

    pub fn read8(&self, addr: u16) -> u8 {
        match addr & 0xE000 {
            // ROM slots are pre-paged into the flat image
            0x0000 | 0x2000 | 0x4000 | 0x6000 | 0x8000 | 0xA000 => self.memory[addr as usize],
            _ => self.system_ram[(addr & 0x1FFF) as usize],
        }
    }

    pub fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        ((hi as u16) << 8) | lo as u16
    }

    pub fn write8(&mut self, addr: u16, data: u8) {
        match addr & 0xE000 {
            // ROM is read-only
            0x0000 | 0x2000 | 0x4000 | 0x6000 => {}

            0x8000 | 0xA000 => {
                if self.cartridge_ram_enabled {
                    // Only the half selected by the RAM page bit is writable
                    let window = if self.cartridge_ram_page { 0xA000 } else { 0x8000 };
                    if addr & 0xE000 == window {
                        self.cartridge_ram[(addr & 0x1FFF) as usize] = data;
                    }
                }
            }

            0xC000 => self.system_ram[(addr & 0x1FFF) as usize] = data,

            _ => {
                if addr >= 0xFFFC {
                    self.write_mapper(addr, data);
                } else {
                    self.system_ram[(addr & 0x1FFF) as usize] = data;
                }
            }
        }
    }

    pub fn write16(&mut self, addr: u16, data: u16) {
        self.write8(addr, data as u8);
        self.write8(addr.wrapping_add(1), (data >> 8) as u8);
    }

    fn write_mapper(&mut self, addr: u16, data: u8) {
        match addr {
            0xFFFC => {
                self.control_register = data;
                self.cartridge_ram_enabled = data & 0x08 != 0;
                self.cartridge_ram_page = data & 0x04 != 0;
            }
            0xFFFD => {
                self.page_registers[0] = data;
                self.load_page(data, 0);
            }
            0xFFFE => {
                self.page_registers[1] = data;
                self.load_page(data, 1);
            }
            0xFFFF => {
                self.page_registers[2] = data;
                self.load_page(data, 2);
            }
            _ => {}
        }
    }
}

impl Default for Mmu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four 16KB pages, each filled with its page number.
    fn test_rom() -> Vec<u8> {
        let mut rom = vec![0u8; 4 * PAGE_SIZE];
        for (page, chunk) in rom.chunks_mut(PAGE_SIZE).enumerate() {
            chunk.fill(page as u8);
        }
        rom
    }

    #[test]
    fn initial_mapping_is_pages_0_1_2() {
        let mut mmu = Mmu::new();
        mmu.load_rom(&test_rom()).unwrap();
        assert_eq!(mmu.read8(0x1000), 0);
        assert_eq!(mmu.read8(0x4000), 1);
        assert_eq!(mmu.read8(0x8000), 2);
        assert_eq!(mmu.page_registers, [0, 1, 2]);
    }

    #[test]
    fn empty_rom_is_rejected() {
        let mut mmu = Mmu::new();
        assert_eq!(mmu.load_rom(&[]), Err(CartridgeError::Empty));
    }

    #[test]
    fn bank_register_switches_slot() {
        let mut mmu = Mmu::new();
        mmu.load_rom(&test_rom()).unwrap();
        mmu.write8(0xFFFE, 3);
        assert_eq!(mmu.read8(0x4000), 3);
        assert_eq!(mmu.page_registers[1], 3);
        mmu.write8(0xFFFF, 0);
        assert_eq!(mmu.read8(0x8000), 0);
    }

    #[test]
    fn out_of_range_page_reads_ff() {
        let mut mmu = Mmu::new();
        mmu.load_rom(&test_rom()).unwrap();
        mmu.write8(0xFFFE, 9);
        assert_eq!(mmu.read8(0x4000), 0xFF);
        assert_eq!(mmu.read8(0x7FFF), 0xFF);
    }

    #[test]
    fn slot0_keeps_fixed_first_kilobyte() {
        let mut mmu = Mmu::new();
        mmu.load_rom(&test_rom()).unwrap();
        // Switch slot 0 to page 1; the first 1KB must stay from page 0
        mmu.write8(0xFFFD, 1);
        assert_eq!(mmu.read8(0x0000), 0);
        assert_eq!(mmu.read8(0x03FF), 0);
        assert_eq!(mmu.read8(0x0400), 1);
    }

    #[test]
    fn rom_ignores_writes() {
        let mut mmu = Mmu::new();
        mmu.load_rom(&test_rom()).unwrap();
        mmu.write8(0x1234, 0xAA);
        assert_eq!(mmu.read8(0x1234), 0);
    }

    #[test]
    fn system_ram_is_mirrored() {
        let mut mmu = Mmu::new();
        mmu.write8(0xC123, 0x42);
        assert_eq!(mmu.read8(0xE123), 0x42);
        mmu.write8(0xE500, 0x99);
        assert_eq!(mmu.read8(0xC500), 0x99);
    }

    #[test]
    fn mapper_registers_are_not_ram() {
        let mut mmu = Mmu::new();
        mmu.write8(0xFFFC, 0);
        // The mirror cell underneath stays untouched
        assert_eq!(mmu.read8(0xDFFC), 0);
    }

    #[test]
    fn cartridge_ram_write_respects_enable_and_window() {
        let mut mmu = Mmu::new();
        mmu.load_rom(&test_rom()).unwrap();

        // Disabled: write is ignored
        mmu.write8(0x8000, 0x55);
        assert_eq!(mmu.cartridge_ram[0], 0);

        // Enabled, window at $8000
        mmu.write8(0xFFFC, 0x08);
        mmu.write8(0x8010, 0x55);
        assert_eq!(mmu.cartridge_ram[0x10], 0x55);
        mmu.write8(0xA010, 0x66);
        assert_eq!(mmu.cartridge_ram[0x10], 0x55);

        // Window moved to $A000
        mmu.write8(0xFFFC, 0x0C);
        mmu.write8(0xA020, 0x77);
        assert_eq!(mmu.cartridge_ram[0x20], 0x77);
        mmu.write8(0x8020, 0x88);
        assert_eq!(mmu.cartridge_ram[0x20], 0x77);
    }
}
