//! Whole-machine orchestration.
//!
//! NTSC timing: 262 scanlines per frame, 228 CPU T-states per scanline
//! (3.58 MHz Z80 against a 15.7 kHz line rate). The VDP interrupt line is
//! sampled once per scanline, after the CPU has run its share.

use crate::bus::SmsBus;
use crate::cpu::cpu::Cpu;
use crate::mmu::CartridgeError;
use crate::vdp::vdp::SCANLINES_PER_FRAME;

pub const CYCLES_PER_SCANLINE: u32 = 228;

pub struct Machine {
    pub cpu: Cpu<SmsBus>,
}

impl Machine {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(SmsBus::new()),
        }
    }

    pub fn load_rom(&mut self, data: &[u8]) -> Result<(), CartridgeError> {
        self.cpu.bus.mmu.load_rom(data)
    }

    /// Emulate one full frame into the caller's 256x192 framebuffer.
    pub fn run_frame(&mut self, framebuffer: &mut [u32]) {
        for _ in 0..SCANLINES_PER_FRAME {
            self.cpu.run_cycles(CYCLES_PER_SCANLINE);
            self.cpu.bus.vdp.process_scanline(framebuffer);
            if self.cpu.bus.vdp.interrupt_pending() {
                self.cpu.set_irq_line(true);
            }
        }
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdp::vdp::{FRAME_HEIGHT, FRAME_WIDTH};

    fn rom_with(code: &[(usize, u8)]) -> Vec<u8> {
        let mut rom = vec![0u8; 0x4000];
        for &(addr, byte) in code {
            rom[addr] = byte;
        }
        rom
    }

    #[test]
    fn frame_executes_until_halt() {
        let mut machine = Machine::new();
        let rom = rom_with(&[
            (0x0000, 0x3E), (0x0001, 0x42), // LD A,$42
            (0x0002, 0x76),                 // HALT
        ]);
        machine.load_rom(&rom).unwrap();

        let mut fb = vec![0u32; FRAME_WIDTH * FRAME_HEIGHT];
        machine.run_frame(&mut fb);

        assert!(machine.cpu.halted);
        assert_eq!(machine.cpu.regs.af.get_high(), 0x42);
        assert!(machine.cpu.cycles > 0);
    }

    #[test]
    fn frame_interrupt_wakes_halted_cpu() {
        let mut machine = Machine::new();
        let rom = rom_with(&[
            // Stack must point into system RAM before anything can push;
            // at the reset SP of $FFFF a push would hit the mapper registers
            (0x0000, 0x31), (0x0001, 0xF0), (0x0002, 0xDF), // LD SP,$DFF0
            (0x0003, 0xED), (0x0004, 0x56), // IM 1
            (0x0005, 0x3E), (0x0006, 0x20), // LD A,$20 (frame interrupts on)
            (0x0007, 0xD3), (0x0008, 0xBF), // OUT ($BF),A
            (0x0009, 0x3E), (0x000A, 0x81), // LD A,$81 (write register 1)
            (0x000B, 0xD3), (0x000C, 0xBF), // OUT ($BF),A
            (0x000D, 0xFB),                 // EI
            (0x000E, 0x76),                 // HALT
            // Mode-1 interrupt handler
            (0x0038, 0x3E), (0x0039, 0x99), // LD A,$99
            (0x003A, 0x76),                 // HALT
        ]);
        machine.load_rom(&rom).unwrap();

        let mut fb = vec![0u32; FRAME_WIDTH * FRAME_HEIGHT];
        machine.run_frame(&mut fb);

        assert_eq!(machine.cpu.regs.af.get_high(), 0x99);
        assert!(machine.cpu.halted);
        // The acknowledge pushed the resume address onto the RAM stack
        assert_eq!(machine.cpu.regs.sp, 0xDFEE);
    }
}
