//! Z80 core: fetch/dispatch loop, T-state accounting, interrupts.
//!
//! Every memory access costs 3 T-states and the opcode fetch one more;
//! instruction-specific penalties (taken branches, 16-bit arithmetic,
//! stack pushes) are added by the individual handlers.

use ansi_term::Colour::{Green, Red};

use crate::bus::Bus;
use crate::cpu::flags::{self, FLAG_ZERO};
use crate::cpu::registers::Registers;

/// Hook consulted on every taken CALL. Returning `true` swallows the call:
/// PC is left at the instruction after the operand and nothing is pushed.
/// Used to service CP/M BDOS requests at $0005 when running test binaries.
pub type CallTrap<B> = fn(&mut Cpu<B>, u16) -> bool;

/// Which index register DD/FD-prefixed opcodes operate on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IndexReg {
    Ix,
    Iy,
}

pub struct Cpu<B: Bus> {
    pub regs: Registers,
    pub bus: B,

    pub iff1: bool,
    pub iff2: bool,
    pub int_mode: u8,
    pub halted: bool,
    /// Cleared when an unimplemented opcode is hit; the core refuses to
    /// execute further until reset.
    pub running: bool,
    int_line: bool,

    /// Total T-states since reset.
    pub cycles: u64,
    /// T-states of the instruction currently executing.
    pub(crate) cycle_count: u32,

    /// Print a trace line before each instruction.
    pub debug: bool,
    pub call_trap: Option<CallTrap<B>>,

    /// Selected by the $DD/$FD prefix handlers before indexed dispatch.
    pub(crate) idx: IndexReg,
    /// Effective (IX+d)/(IY+d) address for DDCB/FDCB handlers.
    pub(crate) idx_ptr: u16,
}

impl<B: Bus> Cpu<B> {
    pub fn new(bus: B) -> Self {
        Self {
            regs: Registers::new(),
            bus,
            iff1: false,
            iff2: false,
            int_mode: 0,
            halted: false,
            running: true,
            int_line: false,
            cycles: 0,
            cycle_count: 0,
            debug: false,
            call_trap: None,
            idx: IndexReg::Ix,
            idx_ptr: 0,
        }
    }

    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.iff1 = false;
        self.iff2 = false;
        self.int_mode = 0;
        self.halted = false;
        self.running = true;
        self.int_line = false;
        self.cycles = 0;
        self.cycle_count = 0;
    }

    // ---- bus access, all T-state accounting flows through here ----

    pub(crate) fn read8(&mut self, addr: u16) -> u8 {
        self.cycle_count += 3;
        self.bus.read(addr)
    }

    pub(crate) fn write8(&mut self, addr: u16, data: u8) {
        self.cycle_count += 3;
        self.bus.write(addr, data);
    }

    pub(crate) fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        ((hi as u16) << 8) | lo as u16
    }

    pub(crate) fn write16(&mut self, addr: u16, data: u16) {
        self.write8(addr, data as u8);
        self.write8(addr.wrapping_add(1), (data >> 8) as u8);
    }

    pub(crate) fn fetch8(&mut self) -> u8 {
        let value = self.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    pub(crate) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        ((hi as u16) << 8) | lo as u16
    }

    /// Opcode fetch (M1): one T-state more than a plain read.
    fn fetch_opcode(&mut self) -> u8 {
        self.cycle_count += 1;
        self.fetch8()
    }

    pub(crate) fn push16(&mut self, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write8(self.regs.sp, (value >> 8) as u8);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write8(self.regs.sp, value as u8);
    }

    pub(crate) fn pop16(&mut self) -> u16 {
        let lo = self.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = self.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        ((hi as u16) << 8) | lo as u16
    }

    pub(crate) fn port_in(&mut self, port: u8) -> u8 {
        self.cycle_count += 4;
        self.bus.io_read(port)
    }

    pub(crate) fn port_out(&mut self, port: u8, data: u8) {
        self.cycle_count += 4;
        self.bus.io_write(port, data);
    }

    // ---- accumulator / flag shorthands ----

    pub(crate) fn a(&self) -> u8 {
        self.regs.af.get_high()
    }

    pub(crate) fn set_a(&mut self, value: u8) {
        self.regs.af.set_high(value);
    }

    pub(crate) fn f(&self) -> u8 {
        self.regs.af.get_low()
    }

    pub(crate) fn set_f(&mut self, value: u8) {
        self.regs.af.set_low(value);
    }

    pub(crate) fn flag(&self, mask: u8) -> bool {
        self.f() & mask != 0
    }

    // ---- execution ----

    /// Execute one instruction; returns the T-states it took.
    pub fn step(&mut self) -> u32 {
        if self.halted || !self.running {
            return 0;
        }
        self.cycle_count = 0;
        let pc = self.regs.pc;
        let opcode = self.fetch_opcode();
        if self.debug {
            self.trace(pc, opcode);
        }
        Self::MAIN[opcode as usize](self);
        self.cycles += self.cycle_count as u64;
        self.cycle_count
    }

    /// Run instructions until at least `budget` T-states have elapsed.
    /// A halted CPU consumes no cycles; it only wakes on an interrupt.
    pub fn run_cycles(&mut self, budget: u32) -> u32 {
        let mut spent = 0;
        while spent < budget && self.running {
            spent += self.poll_interrupt();
            if self.halted {
                break;
            }
            spent += self.step();
        }
        spent
    }

    /// Assert or release the maskable interrupt line.
    pub fn set_irq_line(&mut self, asserted: bool) {
        self.int_line = asserted;
    }

    /// Service a pending interrupt, if the line is asserted. The line is
    /// released after any attempt, accepted or not. Only mode 1 dispatches;
    /// the SMS ties /INT to the VDP and never runs IM 0 or IM 2 vectors.
    pub fn poll_interrupt(&mut self) -> u32 {
        if !self.int_line {
            return 0;
        }
        self.int_line = false;
        if !self.iff1 || self.int_mode != 1 {
            return 0;
        }
        self.cycle_count = 0;
        self.halted = false;
        self.iff1 = false;
        self.iff2 = false;
        self.push16(self.regs.pc);
        self.regs.pc = 0x0038;
        // 13 T-states total for the mode-1 acknowledge
        self.cycle_count += 7;
        self.cycles += self.cycle_count as u64;
        self.cycle_count
    }

    fn trace(&self, pc: u16, opcode: u8) {
        println!(
            "{} {:04X}: {:02X}  AF={:04X} BC={:04X} DE={:04X} HL={:04X} IX={:04X} IY={:04X} SP={:04X}",
            Green.paint("[cpu]"),
            pc,
            opcode,
            self.regs.af.get16(),
            self.regs.bc.get16(),
            self.regs.de.get16(),
            self.regs.hl.get16(),
            self.regs.ix.get16(),
            self.regs.iy.get16(),
            self.regs.sp,
        );
    }

    /// Fallback for opcodes outside the implemented set: report and stop
    /// rather than silently corrupting state.
    pub(crate) fn illegal(&mut self) {
        let addr = self.regs.pc.wrapping_sub(1);
        let opcode = self.bus.read(addr);
        eprintln!(
            "{} unimplemented opcode {:02X} at {:04X}",
            Red.paint("[cpu]"),
            opcode,
            addr,
        );
        self.halted = true;
        self.running = false;
    }

    // ---- index register plumbing (DD/FD prefixes) ----

    pub(crate) fn idx16(&self) -> u16 {
        match self.idx {
            IndexReg::Ix => self.regs.ix.get16(),
            IndexReg::Iy => self.regs.iy.get16(),
        }
    }

    pub(crate) fn set_idx16(&mut self, value: u16) {
        match self.idx {
            IndexReg::Ix => self.regs.ix.set16(value),
            IndexReg::Iy => self.regs.iy.set16(value),
        }
    }

    pub(crate) fn idx_high(&self) -> u8 {
        match self.idx {
            IndexReg::Ix => self.regs.ix.get_high(),
            IndexReg::Iy => self.regs.iy.get_high(),
        }
    }

    pub(crate) fn set_idx_high(&mut self, value: u8) {
        match self.idx {
            IndexReg::Ix => self.regs.ix.set_high(value),
            IndexReg::Iy => self.regs.iy.set_high(value),
        }
    }

    pub(crate) fn idx_low(&self) -> u8 {
        match self.idx {
            IndexReg::Ix => self.regs.ix.get_low(),
            IndexReg::Iy => self.regs.iy.get_low(),
        }
    }

    pub(crate) fn set_idx_low(&mut self, value: u8) {
        match self.idx {
            IndexReg::Ix => self.regs.ix.set_low(value),
            IndexReg::Iy => self.regs.iy.set_low(value),
        }
    }

    /// Fetch the displacement byte and form the (IX+d)/(IY+d) address.
    pub(crate) fn idx_addr(&mut self) -> u16 {
        let d = self.fetch8() as i8;
        self.idx16().wrapping_add(d as i16 as u16)
    }

    // ---- 8-bit arithmetic on the accumulator ----

    pub(crate) fn op_add8(&mut self, value: u8) {
        let (result, f) = flags::add8(self.f(), self.a(), value);
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_adc8(&mut self, value: u8) {
        let (result, f) = flags::adc8(self.f(), self.a(), value);
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_sub8(&mut self, value: u8) {
        let (result, f) = flags::sub8(self.f(), self.a(), value);
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_sbc8(&mut self, value: u8) {
        let (result, f) = flags::sbc8(self.f(), self.a(), value);
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_and8(&mut self, value: u8) {
        let result = self.a() & value;
        self.set_a(result);
        let f = flags::and8(self.f(), result);
        self.set_f(f);
    }

    pub(crate) fn op_or8(&mut self, value: u8) {
        let result = self.a() | value;
        self.set_a(result);
        let f = flags::or_xor8(self.f(), result);
        self.set_f(f);
    }

    pub(crate) fn op_xor8(&mut self, value: u8) {
        let result = self.a() ^ value;
        self.set_a(result);
        let f = flags::or_xor8(self.f(), result);
        self.set_f(f);
    }

    pub(crate) fn op_cp8(&mut self, value: u8) {
        let (_, f) = flags::sub8(self.f(), self.a(), value);
        self.set_f(f);
    }

    pub(crate) fn op_inc8(&mut self, value: u8) -> u8 {
        let (result, f) = flags::inc8(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_dec8(&mut self, value: u8) -> u8 {
        let (result, f) = flags::dec8(self.f(), value);
        self.set_f(f);
        result
    }

    // ---- 16-bit arithmetic ----

    pub(crate) fn op_add16(&mut self, a: u16, b: u16) -> u16 {
        self.cycle_count += 7;
        let (result, f) = flags::add16(self.f(), a, b);
        self.set_f(f);
        result
    }

    pub(crate) fn op_adc16(&mut self, value: u16) {
        self.cycle_count += 7;
        let (result, f) = flags::adc16(self.f(), self.regs.hl.get16(), value);
        self.regs.hl.set16(result);
        self.set_f(f);
    }

    pub(crate) fn op_sbc16(&mut self, value: u16) {
        self.cycle_count += 7;
        let (result, f) = flags::sbc16(self.f(), self.regs.hl.get16(), value);
        self.regs.hl.set16(result);
        self.set_f(f);
    }

    // ---- control flow ----

    pub(crate) fn op_jp(&mut self, condition: bool) {
        let target = self.fetch16();
        if condition {
            self.regs.pc = target;
        }
    }

    pub(crate) fn op_jr(&mut self, condition: bool) {
        let offset = self.fetch8() as i8;
        if condition {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            self.cycle_count += 5;
        }
    }

    pub(crate) fn op_djnz(&mut self) {
        let offset = self.fetch8() as i8;
        let b = self.regs.bc.get_high().wrapping_sub(1);
        self.regs.bc.set_high(b);
        self.cycle_count += 5;
        if b != 0 {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            self.cycle_count += 3;
        }
    }

    pub(crate) fn op_call(&mut self, condition: bool) {
        let target = self.fetch16();
        if !condition {
            return;
        }
        if let Some(trap) = self.call_trap {
            if trap(self, target) {
                return;
            }
        }
        self.push16(self.regs.pc);
        self.cycle_count += 1;
        self.regs.pc = target;
    }

    pub(crate) fn op_ret(&mut self, condition: bool) {
        self.cycle_count += 1;
        if condition {
            self.regs.pc = self.pop16();
        }
    }

    pub(crate) fn op_rst(&mut self, target: u16) {
        self.push16(self.regs.pc);
        self.cycle_count += 1;
        self.regs.pc = target;
    }

    // ---- accumulator rotates / misc ALU ----

    pub(crate) fn op_rlca(&mut self) {
        let (result, f) = flags::rlca(self.f(), self.a());
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_rrca(&mut self) {
        let (result, f) = flags::rrca(self.f(), self.a());
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_rla(&mut self) {
        let (result, f) = flags::rla(self.f(), self.a());
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_rra(&mut self) {
        let (result, f) = flags::rra(self.f(), self.a());
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_daa(&mut self) {
        let (result, f) = flags::daa(self.f(), self.a());
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_cpl(&mut self) {
        let (result, f) = flags::cpl(self.f(), self.a());
        self.set_a(result);
        self.set_f(f);
    }

    pub(crate) fn op_neg(&mut self) {
        let (result, f) = flags::sub8(self.f(), 0, self.a());
        self.set_a(result);
        self.set_f(f);
    }

    // ---- CB rotates and shifts (value in, value out, flags applied) ----

    pub(crate) fn op_rlc(&mut self, value: u8) -> u8 {
        let (result, f) = flags::rlc(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_rrc(&mut self, value: u8) -> u8 {
        let (result, f) = flags::rrc(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_rl(&mut self, value: u8) -> u8 {
        let (result, f) = flags::rl(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_rr(&mut self, value: u8) -> u8 {
        let (result, f) = flags::rr(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_sla(&mut self, value: u8) -> u8 {
        let (result, f) = flags::sla(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_sra(&mut self, value: u8) -> u8 {
        let (result, f) = flags::sra(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_sll(&mut self, value: u8) -> u8 {
        let (result, f) = flags::sll(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_srl(&mut self, value: u8) -> u8 {
        let (result, f) = flags::srl(self.f(), value);
        self.set_f(f);
        result
    }

    pub(crate) fn op_bit(&mut self, bit: u8, value: u8) {
        let f = flags::bit(self.f(), bit, value);
        self.set_f(f);
    }

    // ---- exchanges ----

    pub(crate) fn op_ex_af(&mut self) {
        std::mem::swap(&mut self.regs.af, &mut self.regs.af_p);
    }

    pub(crate) fn op_exx(&mut self) {
        std::mem::swap(&mut self.regs.bc, &mut self.regs.bc_p);
        std::mem::swap(&mut self.regs.de, &mut self.regs.de_p);
        std::mem::swap(&mut self.regs.hl, &mut self.regs.hl_p);
    }

    pub(crate) fn op_ex_de_hl(&mut self) {
        std::mem::swap(&mut self.regs.de, &mut self.regs.hl);
        self.cycle_count += 3;
    }

    pub(crate) fn op_ex_sp_hl(&mut self) {
        let sp = self.regs.sp;
        let from_stack = self.read16(sp);
        let hl = self.regs.hl.get16();
        self.write16(sp, hl);
        self.regs.hl.set16(from_stack);
        self.cycle_count += 3;
    }

    // ---- ED group ----

    pub(crate) fn op_in_c(&mut self) -> u8 {
        let port = self.regs.bc.get_low();
        let value = self.port_in(port);
        let f = flags::io_in(self.f(), value);
        self.set_f(f);
        value
    }

    pub(crate) fn op_out_c(&mut self, value: u8) {
        let port = self.regs.bc.get_low();
        self.port_out(port, value);
    }

    pub(crate) fn op_ld_a_ir(&mut self, value: u8) {
        self.set_a(value);
        let f = flags::ld_a_ir(self.f(), value, self.iff2);
        self.set_f(f);
    }

    pub(crate) fn op_retn(&mut self) {
        self.regs.pc = self.pop16();
        self.iff1 = self.iff2;
    }

    pub(crate) fn op_reti(&mut self) {
        self.regs.pc = self.pop16();
    }

    pub(crate) fn op_rrd(&mut self) {
        let addr = self.regs.hl.get16();
        let value = self.read8(addr);
        let a = self.a();
        self.write8(addr, (a << 4) | (value >> 4));
        let a = (a & 0xF0) | (value & 0x0F);
        self.set_a(a);
        let f = flags::rotate_digit(self.f(), a);
        self.set_f(f);
    }

    pub(crate) fn op_rld(&mut self) {
        let addr = self.regs.hl.get16();
        let value = self.read8(addr);
        let a = self.a();
        self.write8(addr, (value << 4) | (a & 0x0F));
        let a = (a & 0xF0) | (value >> 4);
        self.set_a(a);
        let f = flags::rotate_digit(self.f(), a);
        self.set_f(f);
    }

    // ---- block transfer / compare / I/O ----

    fn block_move(&mut self, step: i16) {
        let value = self.read8(self.regs.hl.get16());
        self.write8(self.regs.de.get16(), value);
        self.regs.hl.set16(self.regs.hl.get16().wrapping_add(step as u16));
        self.regs.de.set16(self.regs.de.get16().wrapping_add(step as u16));
        let bc = self.regs.bc.get16().wrapping_sub(1);
        self.regs.bc.set16(bc);
        let f = flags::block_transfer(self.f(), bc);
        self.set_f(f);
    }

    /// Rewind PC to the ED prefix so the instruction re-executes.
    fn block_repeat(&mut self) {
        self.regs.pc = self.regs.pc.wrapping_sub(2);
        self.cycle_count += 5;
    }

    pub(crate) fn op_ldi(&mut self) {
        self.block_move(1);
    }

    pub(crate) fn op_ldd(&mut self) {
        self.block_move(-1);
    }

    pub(crate) fn op_ldir(&mut self) {
        self.block_move(1);
        if self.regs.bc.get16() != 0 {
            self.block_repeat();
        }
    }

    pub(crate) fn op_lddr(&mut self) {
        self.block_move(-1);
        if self.regs.bc.get16() != 0 {
            self.block_repeat();
        }
    }

    fn block_compare(&mut self, step: i16) {
        let value = self.read8(self.regs.hl.get16());
        self.regs.hl.set16(self.regs.hl.get16().wrapping_add(step as u16));
        let bc = self.regs.bc.get16().wrapping_sub(1);
        self.regs.bc.set16(bc);
        let f = flags::block_compare(self.f(), self.a(), value, bc);
        self.set_f(f);
    }

    pub(crate) fn op_cpi(&mut self) {
        self.block_compare(1);
    }

    pub(crate) fn op_cpd(&mut self) {
        self.block_compare(-1);
    }

    pub(crate) fn op_cpir(&mut self) {
        self.block_compare(1);
        if self.regs.bc.get16() != 0 && !self.flag(FLAG_ZERO) {
            self.block_repeat();
        }
    }

    pub(crate) fn op_cpdr(&mut self) {
        self.block_compare(-1);
        if self.regs.bc.get16() != 0 && !self.flag(FLAG_ZERO) {
            self.block_repeat();
        }
    }

    fn block_in(&mut self, step: i16) {
        let value = self.port_in(self.regs.bc.get_low());
        self.write8(self.regs.hl.get16(), value);
        self.regs.hl.set16(self.regs.hl.get16().wrapping_add(step as u16));
        self.regs.bc.set_high(self.regs.bc.get_high().wrapping_sub(1));
        let f = flags::block_io(self.f());
        self.set_f(f);
    }

    fn block_out(&mut self, step: i16) {
        let value = self.read8(self.regs.hl.get16());
        self.port_out(self.regs.bc.get_low(), value);
        self.regs.hl.set16(self.regs.hl.get16().wrapping_add(step as u16));
        self.regs.bc.set_high(self.regs.bc.get_high().wrapping_sub(1));
        let f = flags::block_io(self.f());
        self.set_f(f);
    }

    pub(crate) fn op_ini(&mut self) {
        self.block_in(1);
    }

    pub(crate) fn op_ind(&mut self) {
        self.block_in(-1);
    }

    pub(crate) fn op_outi(&mut self) {
        self.block_out(1);
    }

    pub(crate) fn op_outd(&mut self) {
        self.block_out(-1);
    }

    pub(crate) fn op_inir(&mut self) {
        self.block_in(1);
        if self.regs.bc.get_high() != 0 {
            self.block_repeat();
        }
    }

    pub(crate) fn op_indr(&mut self) {
        self.block_in(-1);
        if self.regs.bc.get_high() != 0 {
            self.block_repeat();
        }
    }

    pub(crate) fn op_otir(&mut self) {
        self.block_out(1);
        if self.regs.bc.get_high() != 0 {
            self.block_repeat();
        }
    }

    pub(crate) fn op_otdr(&mut self) {
        self.block_out(-1);
        if self.regs.bc.get_high() != 0 {
            self.block_repeat();
        }
    }

    // ---- flag-only instructions ----

    pub(crate) fn op_ccf(&mut self) {
        let f = flags::ccf(self.f());
        self.set_f(f);
    }

    pub(crate) fn op_scf(&mut self) {
        let f = flags::scf(self.f());
        self.set_f(f);
    }
}
