//! 256-entry dispatch tables for the base, CB, ED, DD/FD and DDCB/FDCB
//! opcode spaces.
//!
//! Handlers are non-capturing closures coerced to fn pointers at const
//! evaluation. Unpopulated slots fall through to [`Cpu::illegal`], which
//! reports the opcode and stops the core. The DD and FD spaces share one
//! table pair; the prefix handler selects IX or IY before dispatching.

use crate::bus::Bus;
use crate::cpu::cpu::{Cpu, IndexReg};
use crate::cpu::flags::{FLAG_CARRY, FLAG_PARITY, FLAG_SIGN, FLAG_ZERO};

pub type OpFn<B> = fn(&mut Cpu<B>);
pub type OpTable<B> = [OpFn<B>; 256];

impl<B: Bus> Cpu<B> {
    /// Unprefixed opcode space.
    pub(crate) const MAIN: OpTable<B> = {
        let mut t: OpTable<B> = [Self::illegal as OpFn<B>; 256];

        // 0x00-0x3F: loads, 16-bit inc/dec, rotates, relative jumps
        t[0x00] = |_| {}; // NOP
        t[0x01] = |c| { let v = c.fetch16(); c.regs.bc.set16(v); }; // LD BC,nn
        t[0x02] = |c| c.write8(c.regs.bc.get16(), c.a()); // LD (BC),A
        t[0x03] = |c| { c.cycle_count += 2; let v = c.regs.bc.get16().wrapping_add(1); c.regs.bc.set16(v); }; // INC BC
        t[0x04] = |c| { let v = c.op_inc8(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // INC B
        t[0x05] = |c| { let v = c.op_dec8(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // DEC B
        t[0x06] = |c| { let v = c.fetch8(); c.regs.bc.set_high(v); }; // LD B,n
        t[0x07] = |c| c.op_rlca(); // RLCA
        t[0x08] = |c| c.op_ex_af(); // EX AF,AF'
        t[0x09] = |c| { let v = c.op_add16(c.regs.hl.get16(), c.regs.bc.get16()); c.regs.hl.set16(v); }; // ADD HL,BC
        t[0x0A] = |c| { let v = c.read8(c.regs.bc.get16()); c.set_a(v); }; // LD A,(BC)
        t[0x0B] = |c| { c.cycle_count += 2; let v = c.regs.bc.get16().wrapping_sub(1); c.regs.bc.set16(v); }; // DEC BC
        t[0x0C] = |c| { let v = c.op_inc8(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // INC C
        t[0x0D] = |c| { let v = c.op_dec8(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // DEC C
        t[0x0E] = |c| { let v = c.fetch8(); c.regs.bc.set_low(v); }; // LD C,n
        t[0x0F] = |c| c.op_rrca(); // RRCA
        t[0x10] = |c| c.op_djnz(); // DJNZ e
        t[0x11] = |c| { let v = c.fetch16(); c.regs.de.set16(v); }; // LD DE,nn
        t[0x12] = |c| c.write8(c.regs.de.get16(), c.a()); // LD (DE),A
        t[0x13] = |c| { c.cycle_count += 2; let v = c.regs.de.get16().wrapping_add(1); c.regs.de.set16(v); }; // INC DE
        t[0x14] = |c| { let v = c.op_inc8(c.regs.de.get_high()); c.regs.de.set_high(v); }; // INC D
        t[0x15] = |c| { let v = c.op_dec8(c.regs.de.get_high()); c.regs.de.set_high(v); }; // DEC D
        t[0x16] = |c| { let v = c.fetch8(); c.regs.de.set_high(v); }; // LD D,n
        t[0x17] = |c| c.op_rla(); // RLA
        t[0x18] = |c| c.op_jr(true); // JR e
        t[0x19] = |c| { let v = c.op_add16(c.regs.hl.get16(), c.regs.de.get16()); c.regs.hl.set16(v); }; // ADD HL,DE
        t[0x1A] = |c| { let v = c.read8(c.regs.de.get16()); c.set_a(v); }; // LD A,(DE)
        t[0x1B] = |c| { c.cycle_count += 2; let v = c.regs.de.get16().wrapping_sub(1); c.regs.de.set16(v); }; // DEC DE
        t[0x1C] = |c| { let v = c.op_inc8(c.regs.de.get_low()); c.regs.de.set_low(v); }; // INC E
        t[0x1D] = |c| { let v = c.op_dec8(c.regs.de.get_low()); c.regs.de.set_low(v); }; // DEC E
        t[0x1E] = |c| { let v = c.fetch8(); c.regs.de.set_low(v); }; // LD E,n
        t[0x1F] = |c| c.op_rra(); // RRA
        t[0x20] = |c| { let cond = !c.flag(FLAG_ZERO); c.op_jr(cond); }; // JR NZ,e
        t[0x21] = |c| { let v = c.fetch16(); c.regs.hl.set16(v); }; // LD HL,nn
        t[0x22] = |c| { let a = c.fetch16(); let v = c.regs.hl.get16(); c.write16(a, v); }; // LD (nn),HL
        t[0x23] = |c| { c.cycle_count += 2; let v = c.regs.hl.get16().wrapping_add(1); c.regs.hl.set16(v); }; // INC HL
        t[0x24] = |c| { let v = c.op_inc8(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // INC H
        t[0x25] = |c| { let v = c.op_dec8(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // DEC H
        t[0x26] = |c| { let v = c.fetch8(); c.regs.hl.set_high(v); }; // LD H,n
        t[0x27] = |c| c.op_daa(); // DAA
        t[0x28] = |c| { let cond = c.flag(FLAG_ZERO); c.op_jr(cond); }; // JR Z,e
        t[0x29] = |c| { let v = c.op_add16(c.regs.hl.get16(), c.regs.hl.get16()); c.regs.hl.set16(v); }; // ADD HL,HL
        t[0x2A] = |c| { let a = c.fetch16(); let v = c.read16(a); c.regs.hl.set16(v); }; // LD HL,(nn)
        t[0x2B] = |c| { c.cycle_count += 2; let v = c.regs.hl.get16().wrapping_sub(1); c.regs.hl.set16(v); }; // DEC HL
        t[0x2C] = |c| { let v = c.op_inc8(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // INC L
        t[0x2D] = |c| { let v = c.op_dec8(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // DEC L
        t[0x2E] = |c| { let v = c.fetch8(); c.regs.hl.set_low(v); }; // LD L,n
        t[0x2F] = |c| c.op_cpl(); // CPL
        t[0x30] = |c| { let cond = !c.flag(FLAG_CARRY); c.op_jr(cond); }; // JR NC,e
        t[0x31] = |c| { let v = c.fetch16(); c.regs.sp = v; }; // LD SP,nn
        t[0x32] = |c| { let a = c.fetch16(); c.write8(a, c.a()); }; // LD (nn),A
        t[0x33] = |c| { c.cycle_count += 2; c.regs.sp = c.regs.sp.wrapping_add(1); }; // INC SP
        t[0x34] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_inc8(v); c.cycle_count += 1; c.write8(a, v); }; // INC (HL)
        t[0x35] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_dec8(v); c.cycle_count += 1; c.write8(a, v); }; // DEC (HL)
        t[0x36] = |c| { let v = c.fetch8(); c.write8(c.regs.hl.get16(), v); }; // LD (HL),n
        t[0x37] = |c| c.op_scf(); // SCF
        t[0x38] = |c| { let cond = c.flag(FLAG_CARRY); c.op_jr(cond); }; // JR C,e
        t[0x39] = |c| { let v = c.op_add16(c.regs.hl.get16(), c.regs.sp); c.regs.hl.set16(v); }; // ADD HL,SP
        t[0x3A] = |c| { let a = c.fetch16(); let v = c.read8(a); c.set_a(v); }; // LD A,(nn)
        t[0x3B] = |c| { c.cycle_count += 2; c.regs.sp = c.regs.sp.wrapping_sub(1); }; // DEC SP
        t[0x3C] = |c| { let v = c.op_inc8(c.a()); c.set_a(v); }; // INC A
        t[0x3D] = |c| { let v = c.op_dec8(c.a()); c.set_a(v); }; // DEC A
        t[0x3E] = |c| { let v = c.fetch8(); c.set_a(v); }; // LD A,n
        t[0x3F] = |c| c.op_ccf(); // CCF

        // 0x40-0x7F: LD r,r' grid, (HL) column/row, HALT
        t[0x40] = |_| {}; // LD B,B
        t[0x41] = |c| { let v = c.regs.bc.get_low(); c.regs.bc.set_high(v); }; // LD B,C
        t[0x42] = |c| { let v = c.regs.de.get_high(); c.regs.bc.set_high(v); }; // LD B,D
        t[0x43] = |c| { let v = c.regs.de.get_low(); c.regs.bc.set_high(v); }; // LD B,E
        t[0x44] = |c| { let v = c.regs.hl.get_high(); c.regs.bc.set_high(v); }; // LD B,H
        t[0x45] = |c| { let v = c.regs.hl.get_low(); c.regs.bc.set_high(v); }; // LD B,L
        t[0x46] = |c| { let v = c.read8(c.regs.hl.get16()); c.regs.bc.set_high(v); }; // LD B,(HL)
        t[0x47] = |c| { let v = c.a(); c.regs.bc.set_high(v); }; // LD B,A
        t[0x48] = |c| { let v = c.regs.bc.get_high(); c.regs.bc.set_low(v); }; // LD C,B
        t[0x49] = |_| {}; // LD C,C
        t[0x4A] = |c| { let v = c.regs.de.get_high(); c.regs.bc.set_low(v); }; // LD C,D
        t[0x4B] = |c| { let v = c.regs.de.get_low(); c.regs.bc.set_low(v); }; // LD C,E
        t[0x4C] = |c| { let v = c.regs.hl.get_high(); c.regs.bc.set_low(v); }; // LD C,H
        t[0x4D] = |c| { let v = c.regs.hl.get_low(); c.regs.bc.set_low(v); }; // LD C,L
        t[0x4E] = |c| { let v = c.read8(c.regs.hl.get16()); c.regs.bc.set_low(v); }; // LD C,(HL)
        t[0x4F] = |c| { let v = c.a(); c.regs.bc.set_low(v); }; // LD C,A
        t[0x50] = |c| { let v = c.regs.bc.get_high(); c.regs.de.set_high(v); }; // LD D,B
        t[0x51] = |c| { let v = c.regs.bc.get_low(); c.regs.de.set_high(v); }; // LD D,C
        t[0x52] = |_| {}; // LD D,D
        t[0x53] = |c| { let v = c.regs.de.get_low(); c.regs.de.set_high(v); }; // LD D,E
        t[0x54] = |c| { let v = c.regs.hl.get_high(); c.regs.de.set_high(v); }; // LD D,H
        t[0x55] = |c| { let v = c.regs.hl.get_low(); c.regs.de.set_high(v); }; // LD D,L
        t[0x56] = |c| { let v = c.read8(c.regs.hl.get16()); c.regs.de.set_high(v); }; // LD D,(HL)
        t[0x57] = |c| { let v = c.a(); c.regs.de.set_high(v); }; // LD D,A
        t[0x58] = |c| { let v = c.regs.bc.get_high(); c.regs.de.set_low(v); }; // LD E,B
        t[0x59] = |c| { let v = c.regs.bc.get_low(); c.regs.de.set_low(v); }; // LD E,C
        t[0x5A] = |c| { let v = c.regs.de.get_high(); c.regs.de.set_low(v); }; // LD E,D
        t[0x5B] = |_| {}; // LD E,E
        t[0x5C] = |c| { let v = c.regs.hl.get_high(); c.regs.de.set_low(v); }; // LD E,H
        t[0x5D] = |c| { let v = c.regs.hl.get_low(); c.regs.de.set_low(v); }; // LD E,L
        t[0x5E] = |c| { let v = c.read8(c.regs.hl.get16()); c.regs.de.set_low(v); }; // LD E,(HL)
        t[0x5F] = |c| { let v = c.a(); c.regs.de.set_low(v); }; // LD E,A
        t[0x60] = |c| { let v = c.regs.bc.get_high(); c.regs.hl.set_high(v); }; // LD H,B
        t[0x61] = |c| { let v = c.regs.bc.get_low(); c.regs.hl.set_high(v); }; // LD H,C
        t[0x62] = |c| { let v = c.regs.de.get_high(); c.regs.hl.set_high(v); }; // LD H,D
        t[0x63] = |c| { let v = c.regs.de.get_low(); c.regs.hl.set_high(v); }; // LD H,E
        t[0x64] = |_| {}; // LD H,H
        t[0x65] = |c| { let v = c.regs.hl.get_low(); c.regs.hl.set_high(v); }; // LD H,L
        t[0x66] = |c| { let v = c.read8(c.regs.hl.get16()); c.regs.hl.set_high(v); }; // LD H,(HL)
        t[0x67] = |c| { let v = c.a(); c.regs.hl.set_high(v); }; // LD H,A
        t[0x68] = |c| { let v = c.regs.bc.get_high(); c.regs.hl.set_low(v); }; // LD L,B
        t[0x69] = |c| { let v = c.regs.bc.get_low(); c.regs.hl.set_low(v); }; // LD L,C
        t[0x6A] = |c| { let v = c.regs.de.get_high(); c.regs.hl.set_low(v); }; // LD L,D
        t[0x6B] = |c| { let v = c.regs.de.get_low(); c.regs.hl.set_low(v); }; // LD L,E
        t[0x6C] = |c| { let v = c.regs.hl.get_high(); c.regs.hl.set_low(v); }; // LD L,H
        t[0x6D] = |_| {}; // LD L,L
        t[0x6E] = |c| { let v = c.read8(c.regs.hl.get16()); c.regs.hl.set_low(v); }; // LD L,(HL)
        t[0x6F] = |c| { let v = c.a(); c.regs.hl.set_low(v); }; // LD L,A
        t[0x70] = |c| c.write8(c.regs.hl.get16(), c.regs.bc.get_high()); // LD (HL),B
        t[0x71] = |c| c.write8(c.regs.hl.get16(), c.regs.bc.get_low()); // LD (HL),C
        t[0x72] = |c| c.write8(c.regs.hl.get16(), c.regs.de.get_high()); // LD (HL),D
        t[0x73] = |c| c.write8(c.regs.hl.get16(), c.regs.de.get_low()); // LD (HL),E
        t[0x74] = |c| c.write8(c.regs.hl.get16(), c.regs.hl.get_high()); // LD (HL),H
        t[0x75] = |c| c.write8(c.regs.hl.get16(), c.regs.hl.get_low()); // LD (HL),L
        t[0x76] = |c| c.halted = true; // HALT
        t[0x77] = |c| c.write8(c.regs.hl.get16(), c.a()); // LD (HL),A
        t[0x78] = |c| { let v = c.regs.bc.get_high(); c.set_a(v); }; // LD A,B
        t[0x79] = |c| { let v = c.regs.bc.get_low(); c.set_a(v); }; // LD A,C
        t[0x7A] = |c| { let v = c.regs.de.get_high(); c.set_a(v); }; // LD A,D
        t[0x7B] = |c| { let v = c.regs.de.get_low(); c.set_a(v); }; // LD A,E
        t[0x7C] = |c| { let v = c.regs.hl.get_high(); c.set_a(v); }; // LD A,H
        t[0x7D] = |c| { let v = c.regs.hl.get_low(); c.set_a(v); }; // LD A,L
        t[0x7E] = |c| { let v = c.read8(c.regs.hl.get16()); c.set_a(v); }; // LD A,(HL)
        t[0x7F] = |_| {}; // LD A,A

        // 0x80-0xBF: 8-bit ALU grid
        t[0x80] = |c| c.op_add8(c.regs.bc.get_high()); // ADD A,B
        t[0x81] = |c| c.op_add8(c.regs.bc.get_low()); // ADD A,C
        t[0x82] = |c| c.op_add8(c.regs.de.get_high()); // ADD A,D
        t[0x83] = |c| c.op_add8(c.regs.de.get_low()); // ADD A,E
        t[0x84] = |c| c.op_add8(c.regs.hl.get_high()); // ADD A,H
        t[0x85] = |c| c.op_add8(c.regs.hl.get_low()); // ADD A,L
        t[0x86] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_add8(v); }; // ADD A,(HL)
        t[0x87] = |c| c.op_add8(c.a()); // ADD A,A
        t[0x88] = |c| c.op_adc8(c.regs.bc.get_high()); // ADC A,B
        t[0x89] = |c| c.op_adc8(c.regs.bc.get_low()); // ADC A,C
        t[0x8A] = |c| c.op_adc8(c.regs.de.get_high()); // ADC A,D
        t[0x8B] = |c| c.op_adc8(c.regs.de.get_low()); // ADC A,E
        t[0x8C] = |c| c.op_adc8(c.regs.hl.get_high()); // ADC A,H
        t[0x8D] = |c| c.op_adc8(c.regs.hl.get_low()); // ADC A,L
        t[0x8E] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_adc8(v); }; // ADC A,(HL)
        t[0x8F] = |c| c.op_adc8(c.a()); // ADC A,A
        t[0x90] = |c| c.op_sub8(c.regs.bc.get_high()); // SUB B
        t[0x91] = |c| c.op_sub8(c.regs.bc.get_low()); // SUB C
        t[0x92] = |c| c.op_sub8(c.regs.de.get_high()); // SUB D
        t[0x93] = |c| c.op_sub8(c.regs.de.get_low()); // SUB E
        t[0x94] = |c| c.op_sub8(c.regs.hl.get_high()); // SUB H
        t[0x95] = |c| c.op_sub8(c.regs.hl.get_low()); // SUB L
        t[0x96] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_sub8(v); }; // SUB (HL)
        t[0x97] = |c| c.op_sub8(c.a()); // SUB A
        t[0x98] = |c| c.op_sbc8(c.regs.bc.get_high()); // SBC A,B
        t[0x99] = |c| c.op_sbc8(c.regs.bc.get_low()); // SBC A,C
        t[0x9A] = |c| c.op_sbc8(c.regs.de.get_high()); // SBC A,D
        t[0x9B] = |c| c.op_sbc8(c.regs.de.get_low()); // SBC A,E
        t[0x9C] = |c| c.op_sbc8(c.regs.hl.get_high()); // SBC A,H
        t[0x9D] = |c| c.op_sbc8(c.regs.hl.get_low()); // SBC A,L
        t[0x9E] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_sbc8(v); }; // SBC A,(HL)
        t[0x9F] = |c| c.op_sbc8(c.a()); // SBC A,A
        t[0xA0] = |c| c.op_and8(c.regs.bc.get_high()); // AND B
        t[0xA1] = |c| c.op_and8(c.regs.bc.get_low()); // AND C
        t[0xA2] = |c| c.op_and8(c.regs.de.get_high()); // AND D
        t[0xA3] = |c| c.op_and8(c.regs.de.get_low()); // AND E
        t[0xA4] = |c| c.op_and8(c.regs.hl.get_high()); // AND H
        t[0xA5] = |c| c.op_and8(c.regs.hl.get_low()); // AND L
        t[0xA6] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_and8(v); }; // AND (HL)
        t[0xA7] = |c| c.op_and8(c.a()); // AND A
        t[0xA8] = |c| c.op_xor8(c.regs.bc.get_high()); // XOR B
        t[0xA9] = |c| c.op_xor8(c.regs.bc.get_low()); // XOR C
        t[0xAA] = |c| c.op_xor8(c.regs.de.get_high()); // XOR D
        t[0xAB] = |c| c.op_xor8(c.regs.de.get_low()); // XOR E
        t[0xAC] = |c| c.op_xor8(c.regs.hl.get_high()); // XOR H
        t[0xAD] = |c| c.op_xor8(c.regs.hl.get_low()); // XOR L
        t[0xAE] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_xor8(v); }; // XOR (HL)
        t[0xAF] = |c| c.op_xor8(c.a()); // XOR A
        t[0xB0] = |c| c.op_or8(c.regs.bc.get_high()); // OR B
        t[0xB1] = |c| c.op_or8(c.regs.bc.get_low()); // OR C
        t[0xB2] = |c| c.op_or8(c.regs.de.get_high()); // OR D
        t[0xB3] = |c| c.op_or8(c.regs.de.get_low()); // OR E
        t[0xB4] = |c| c.op_or8(c.regs.hl.get_high()); // OR H
        t[0xB5] = |c| c.op_or8(c.regs.hl.get_low()); // OR L
        t[0xB6] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_or8(v); }; // OR (HL)
        t[0xB7] = |c| c.op_or8(c.a()); // OR A
        t[0xB8] = |c| c.op_cp8(c.regs.bc.get_high()); // CP B
        t[0xB9] = |c| c.op_cp8(c.regs.bc.get_low()); // CP C
        t[0xBA] = |c| c.op_cp8(c.regs.de.get_high()); // CP D
        t[0xBB] = |c| c.op_cp8(c.regs.de.get_low()); // CP E
        t[0xBC] = |c| c.op_cp8(c.regs.hl.get_high()); // CP H
        t[0xBD] = |c| c.op_cp8(c.regs.hl.get_low()); // CP L
        t[0xBE] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_cp8(v); }; // CP (HL)
        t[0xBF] = |c| c.op_cp8(c.a()); // CP A

        // 0xC0-0xFF: control flow, stack, I/O, prefixes
        t[0xC0] = |c| { let cond = !c.flag(FLAG_ZERO); c.op_ret(cond); }; // RET NZ
        t[0xC1] = |c| { let v = c.pop16(); c.regs.bc.set16(v); }; // POP BC
        t[0xC2] = |c| { let cond = !c.flag(FLAG_ZERO); c.op_jp(cond); }; // JP NZ,nn
        t[0xC3] = |c| c.op_jp(true); // JP nn
        t[0xC4] = |c| { let cond = !c.flag(FLAG_ZERO); c.op_call(cond); }; // CALL NZ,nn
        t[0xC5] = |c| { c.push16(c.regs.bc.get16()); c.cycle_count += 1; }; // PUSH BC
        t[0xC6] = |c| { let v = c.fetch8(); c.op_add8(v); }; // ADD A,n
        t[0xC7] = |c| c.op_rst(0x0000); // RST 00
        t[0xC8] = |c| { let cond = c.flag(FLAG_ZERO); c.op_ret(cond); }; // RET Z
        t[0xC9] = |c| c.op_ret(true); // RET
        t[0xCA] = |c| { let cond = c.flag(FLAG_ZERO); c.op_jp(cond); }; // JP Z,nn
        t[0xCB] = |c| { let sub = c.fetch8(); Self::BIT[sub as usize](c); }; // CB prefix
        t[0xCC] = |c| { let cond = c.flag(FLAG_ZERO); c.op_call(cond); }; // CALL Z,nn
        t[0xCD] = |c| c.op_call(true); // CALL nn
        t[0xCE] = |c| { let v = c.fetch8(); c.op_adc8(v); }; // ADC A,n
        t[0xCF] = |c| c.op_rst(0x0008); // RST 08
        t[0xD0] = |c| { let cond = !c.flag(FLAG_CARRY); c.op_ret(cond); }; // RET NC
        t[0xD1] = |c| { let v = c.pop16(); c.regs.de.set16(v); }; // POP DE
        t[0xD2] = |c| { let cond = !c.flag(FLAG_CARRY); c.op_jp(cond); }; // JP NC,nn
        t[0xD3] = |c| { let port = c.fetch8(); c.port_out(port, c.a()); }; // OUT (n),A
        t[0xD4] = |c| { let cond = !c.flag(FLAG_CARRY); c.op_call(cond); }; // CALL NC,nn
        t[0xD5] = |c| { c.push16(c.regs.de.get16()); c.cycle_count += 1; }; // PUSH DE
        t[0xD6] = |c| { let v = c.fetch8(); c.op_sub8(v); }; // SUB n
        t[0xD7] = |c| c.op_rst(0x0010); // RST 10
        t[0xD8] = |c| { let cond = c.flag(FLAG_CARRY); c.op_ret(cond); }; // RET C
        t[0xD9] = |c| c.op_exx(); // EXX
        t[0xDA] = |c| { let cond = c.flag(FLAG_CARRY); c.op_jp(cond); }; // JP C,nn
        t[0xDB] = |c| { let port = c.fetch8(); let v = c.port_in(port); c.set_a(v); }; // IN A,(n)
        t[0xDC] = |c| { let cond = c.flag(FLAG_CARRY); c.op_call(cond); }; // CALL C,nn
        t[0xDD] = |c| { c.idx = IndexReg::Ix; let sub = c.fetch8(); Self::INDEXED[sub as usize](c); }; // DD prefix
        t[0xDE] = |c| { let v = c.fetch8(); c.op_sbc8(v); }; // SBC A,n
        t[0xDF] = |c| c.op_rst(0x0018); // RST 18
        t[0xE0] = |c| { let cond = !c.flag(FLAG_PARITY); c.op_ret(cond); }; // RET PO
        t[0xE1] = |c| { let v = c.pop16(); c.regs.hl.set16(v); }; // POP HL
        t[0xE2] = |c| { let cond = !c.flag(FLAG_PARITY); c.op_jp(cond); }; // JP PO,nn
        t[0xE3] = |c| c.op_ex_sp_hl(); // EX (SP),HL
        t[0xE4] = |c| { let cond = !c.flag(FLAG_PARITY); c.op_call(cond); }; // CALL PO,nn
        t[0xE5] = |c| { c.push16(c.regs.hl.get16()); c.cycle_count += 1; }; // PUSH HL
        t[0xE6] = |c| { let v = c.fetch8(); c.op_and8(v); }; // AND n
        t[0xE7] = |c| c.op_rst(0x0020); // RST 20
        t[0xE8] = |c| { let cond = c.flag(FLAG_PARITY); c.op_ret(cond); }; // RET PE
        t[0xE9] = |c| c.regs.pc = c.regs.hl.get16(); // JP (HL)
        t[0xEA] = |c| { let cond = c.flag(FLAG_PARITY); c.op_jp(cond); }; // JP PE,nn
        t[0xEB] = |c| c.op_ex_de_hl(); // EX DE,HL
        t[0xEC] = |c| { let cond = c.flag(FLAG_PARITY); c.op_call(cond); }; // CALL PE,nn
        t[0xED] = |c| { let sub = c.fetch8(); Self::EXT[sub as usize](c); }; // ED prefix
        t[0xEE] = |c| { let v = c.fetch8(); c.op_xor8(v); }; // XOR n
        t[0xEF] = |c| c.op_rst(0x0028); // RST 28
        t[0xF0] = |c| { let cond = !c.flag(FLAG_SIGN); c.op_ret(cond); }; // RET P
        t[0xF1] = |c| { let v = c.pop16(); c.regs.af.set16(v); }; // POP AF
        t[0xF2] = |c| { let cond = !c.flag(FLAG_SIGN); c.op_jp(cond); }; // JP P,nn
        t[0xF3] = |c| { c.iff1 = false; c.iff2 = false; }; // DI
        t[0xF4] = |c| { let cond = !c.flag(FLAG_SIGN); c.op_call(cond); }; // CALL P,nn
        t[0xF5] = |c| { c.push16(c.regs.af.get16()); c.cycle_count += 1; }; // PUSH AF
        t[0xF6] = |c| { let v = c.fetch8(); c.op_or8(v); }; // OR n
        t[0xF7] = |c| c.op_rst(0x0030); // RST 30
        t[0xF8] = |c| { let cond = c.flag(FLAG_SIGN); c.op_ret(cond); }; // RET M
        t[0xF9] = |c| { c.cycle_count += 2; c.regs.sp = c.regs.hl.get16(); }; // LD SP,HL
        t[0xFA] = |c| { let cond = c.flag(FLAG_SIGN); c.op_jp(cond); }; // JP M,nn
        t[0xFB] = |c| { c.iff1 = true; c.iff2 = true; }; // EI
        t[0xFC] = |c| { let cond = c.flag(FLAG_SIGN); c.op_call(cond); }; // CALL M,nn
        t[0xFD] = |c| { c.idx = IndexReg::Iy; let sub = c.fetch8(); Self::INDEXED[sub as usize](c); }; // FD prefix
        t[0xFE] = |c| { let v = c.fetch8(); c.op_cp8(v); }; // CP n
        t[0xFF] = |c| c.op_rst(0x0038); // RST 38

        t
    };

    /// CB space: rotates, shifts, BIT/RES/SET.
    pub(crate) const BIT: OpTable<B> = {
        let mut t: OpTable<B> = [Self::illegal as OpFn<B>; 256];

        // 0x00-0x3F: rotates and shifts
        t[0x00] = |c| { let v = c.op_rlc(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // RLC B
        t[0x01] = |c| { let v = c.op_rlc(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // RLC C
        t[0x02] = |c| { let v = c.op_rlc(c.regs.de.get_high()); c.regs.de.set_high(v); }; // RLC D
        t[0x03] = |c| { let v = c.op_rlc(c.regs.de.get_low()); c.regs.de.set_low(v); }; // RLC E
        t[0x04] = |c| { let v = c.op_rlc(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // RLC H
        t[0x05] = |c| { let v = c.op_rlc(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // RLC L
        t[0x06] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_rlc(v); c.write8(a, v); }; // RLC (HL)
        t[0x07] = |c| { let v = c.op_rlc(c.a()); c.set_a(v); }; // RLC A
        t[0x08] = |c| { let v = c.op_rrc(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // RRC B
        t[0x09] = |c| { let v = c.op_rrc(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // RRC C
        t[0x0A] = |c| { let v = c.op_rrc(c.regs.de.get_high()); c.regs.de.set_high(v); }; // RRC D
        t[0x0B] = |c| { let v = c.op_rrc(c.regs.de.get_low()); c.regs.de.set_low(v); }; // RRC E
        t[0x0C] = |c| { let v = c.op_rrc(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // RRC H
        t[0x0D] = |c| { let v = c.op_rrc(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // RRC L
        t[0x0E] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_rrc(v); c.write8(a, v); }; // RRC (HL)
        t[0x0F] = |c| { let v = c.op_rrc(c.a()); c.set_a(v); }; // RRC A
        t[0x10] = |c| { let v = c.op_rl(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // RL B
        t[0x11] = |c| { let v = c.op_rl(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // RL C
        t[0x12] = |c| { let v = c.op_rl(c.regs.de.get_high()); c.regs.de.set_high(v); }; // RL D
        t[0x13] = |c| { let v = c.op_rl(c.regs.de.get_low()); c.regs.de.set_low(v); }; // RL E
        t[0x14] = |c| { let v = c.op_rl(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // RL H
        t[0x15] = |c| { let v = c.op_rl(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // RL L
        t[0x16] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_rl(v); c.write8(a, v); }; // RL (HL)
        t[0x17] = |c| { let v = c.op_rl(c.a()); c.set_a(v); }; // RL A
        t[0x18] = |c| { let v = c.op_rr(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // RR B
        t[0x19] = |c| { let v = c.op_rr(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // RR C
        t[0x1A] = |c| { let v = c.op_rr(c.regs.de.get_high()); c.regs.de.set_high(v); }; // RR D
        t[0x1B] = |c| { let v = c.op_rr(c.regs.de.get_low()); c.regs.de.set_low(v); }; // RR E
        t[0x1C] = |c| { let v = c.op_rr(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // RR H
        t[0x1D] = |c| { let v = c.op_rr(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // RR L
        t[0x1E] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_rr(v); c.write8(a, v); }; // RR (HL)
        t[0x1F] = |c| { let v = c.op_rr(c.a()); c.set_a(v); }; // RR A
        t[0x20] = |c| { let v = c.op_sla(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // SLA B
        t[0x21] = |c| { let v = c.op_sla(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // SLA C
        t[0x22] = |c| { let v = c.op_sla(c.regs.de.get_high()); c.regs.de.set_high(v); }; // SLA D
        t[0x23] = |c| { let v = c.op_sla(c.regs.de.get_low()); c.regs.de.set_low(v); }; // SLA E
        t[0x24] = |c| { let v = c.op_sla(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // SLA H
        t[0x25] = |c| { let v = c.op_sla(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // SLA L
        t[0x26] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_sla(v); c.write8(a, v); }; // SLA (HL)
        t[0x27] = |c| { let v = c.op_sla(c.a()); c.set_a(v); }; // SLA A
        t[0x28] = |c| { let v = c.op_sra(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // SRA B
        t[0x29] = |c| { let v = c.op_sra(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // SRA C
        t[0x2A] = |c| { let v = c.op_sra(c.regs.de.get_high()); c.regs.de.set_high(v); }; // SRA D
        t[0x2B] = |c| { let v = c.op_sra(c.regs.de.get_low()); c.regs.de.set_low(v); }; // SRA E
        t[0x2C] = |c| { let v = c.op_sra(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // SRA H
        t[0x2D] = |c| { let v = c.op_sra(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // SRA L
        t[0x2E] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_sra(v); c.write8(a, v); }; // SRA (HL)
        t[0x2F] = |c| { let v = c.op_sra(c.a()); c.set_a(v); }; // SRA A
        t[0x30] = |c| { let v = c.op_sll(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // SLL B
        t[0x31] = |c| { let v = c.op_sll(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // SLL C
        t[0x32] = |c| { let v = c.op_sll(c.regs.de.get_high()); c.regs.de.set_high(v); }; // SLL D
        t[0x33] = |c| { let v = c.op_sll(c.regs.de.get_low()); c.regs.de.set_low(v); }; // SLL E
        t[0x34] = |c| { let v = c.op_sll(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // SLL H
        t[0x35] = |c| { let v = c.op_sll(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // SLL L
        t[0x36] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_sll(v); c.write8(a, v); }; // SLL (HL)
        t[0x37] = |c| { let v = c.op_sll(c.a()); c.set_a(v); }; // SLL A
        t[0x38] = |c| { let v = c.op_srl(c.regs.bc.get_high()); c.regs.bc.set_high(v); }; // SRL B
        t[0x39] = |c| { let v = c.op_srl(c.regs.bc.get_low()); c.regs.bc.set_low(v); }; // SRL C
        t[0x3A] = |c| { let v = c.op_srl(c.regs.de.get_high()); c.regs.de.set_high(v); }; // SRL D
        t[0x3B] = |c| { let v = c.op_srl(c.regs.de.get_low()); c.regs.de.set_low(v); }; // SRL E
        t[0x3C] = |c| { let v = c.op_srl(c.regs.hl.get_high()); c.regs.hl.set_high(v); }; // SRL H
        t[0x3D] = |c| { let v = c.op_srl(c.regs.hl.get_low()); c.regs.hl.set_low(v); }; // SRL L
        t[0x3E] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a); let v = c.op_srl(v); c.write8(a, v); }; // SRL (HL)
        t[0x3F] = |c| { let v = c.op_srl(c.a()); c.set_a(v); }; // SRL A

        // 0x40-0x7F: BIT b,r
        t[0x40] = |c| c.op_bit(0, c.regs.bc.get_high());
        t[0x41] = |c| c.op_bit(0, c.regs.bc.get_low());
        t[0x42] = |c| c.op_bit(0, c.regs.de.get_high());
        t[0x43] = |c| c.op_bit(0, c.regs.de.get_low());
        t[0x44] = |c| c.op_bit(0, c.regs.hl.get_high());
        t[0x45] = |c| c.op_bit(0, c.regs.hl.get_low());
        t[0x46] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(0, v); };
        t[0x47] = |c| c.op_bit(0, c.a());
        t[0x48] = |c| c.op_bit(1, c.regs.bc.get_high());
        t[0x49] = |c| c.op_bit(1, c.regs.bc.get_low());
        t[0x4A] = |c| c.op_bit(1, c.regs.de.get_high());
        t[0x4B] = |c| c.op_bit(1, c.regs.de.get_low());
        t[0x4C] = |c| c.op_bit(1, c.regs.hl.get_high());
        t[0x4D] = |c| c.op_bit(1, c.regs.hl.get_low());
        t[0x4E] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(1, v); };
        t[0x4F] = |c| c.op_bit(1, c.a());
        t[0x50] = |c| c.op_bit(2, c.regs.bc.get_high());
        t[0x51] = |c| c.op_bit(2, c.regs.bc.get_low());
        t[0x52] = |c| c.op_bit(2, c.regs.de.get_high());
        t[0x53] = |c| c.op_bit(2, c.regs.de.get_low());
        t[0x54] = |c| c.op_bit(2, c.regs.hl.get_high());
        t[0x55] = |c| c.op_bit(2, c.regs.hl.get_low());
        t[0x56] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(2, v); };
        t[0x57] = |c| c.op_bit(2, c.a());
        t[0x58] = |c| c.op_bit(3, c.regs.bc.get_high());
        t[0x59] = |c| c.op_bit(3, c.regs.bc.get_low());
        t[0x5A] = |c| c.op_bit(3, c.regs.de.get_high());
        t[0x5B] = |c| c.op_bit(3, c.regs.de.get_low());
        t[0x5C] = |c| c.op_bit(3, c.regs.hl.get_high());
        t[0x5D] = |c| c.op_bit(3, c.regs.hl.get_low());
        t[0x5E] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(3, v); };
        t[0x5F] = |c| c.op_bit(3, c.a());
        t[0x60] = |c| c.op_bit(4, c.regs.bc.get_high());
        t[0x61] = |c| c.op_bit(4, c.regs.bc.get_low());
        t[0x62] = |c| c.op_bit(4, c.regs.de.get_high());
        t[0x63] = |c| c.op_bit(4, c.regs.de.get_low());
        t[0x64] = |c| c.op_bit(4, c.regs.hl.get_high());
        t[0x65] = |c| c.op_bit(4, c.regs.hl.get_low());
        t[0x66] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(4, v); };
        t[0x67] = |c| c.op_bit(4, c.a());
        t[0x68] = |c| c.op_bit(5, c.regs.bc.get_high());
        t[0x69] = |c| c.op_bit(5, c.regs.bc.get_low());
        t[0x6A] = |c| c.op_bit(5, c.regs.de.get_high());
        t[0x6B] = |c| c.op_bit(5, c.regs.de.get_low());
        t[0x6C] = |c| c.op_bit(5, c.regs.hl.get_high());
        t[0x6D] = |c| c.op_bit(5, c.regs.hl.get_low());
        t[0x6E] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(5, v); };
        t[0x6F] = |c| c.op_bit(5, c.a());
        t[0x70] = |c| c.op_bit(6, c.regs.bc.get_high());
        t[0x71] = |c| c.op_bit(6, c.regs.bc.get_low());
        t[0x72] = |c| c.op_bit(6, c.regs.de.get_high());
        t[0x73] = |c| c.op_bit(6, c.regs.de.get_low());
        t[0x74] = |c| c.op_bit(6, c.regs.hl.get_high());
        t[0x75] = |c| c.op_bit(6, c.regs.hl.get_low());
        t[0x76] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(6, v); };
        t[0x77] = |c| c.op_bit(6, c.a());
        t[0x78] = |c| c.op_bit(7, c.regs.bc.get_high());
        t[0x79] = |c| c.op_bit(7, c.regs.bc.get_low());
        t[0x7A] = |c| c.op_bit(7, c.regs.de.get_high());
        t[0x7B] = |c| c.op_bit(7, c.regs.de.get_low());
        t[0x7C] = |c| c.op_bit(7, c.regs.hl.get_high());
        t[0x7D] = |c| c.op_bit(7, c.regs.hl.get_low());
        t[0x7E] = |c| { let v = c.read8(c.regs.hl.get16()); c.op_bit(7, v); };
        t[0x7F] = |c| c.op_bit(7, c.a());

        // 0x80-0xBF: RES b,r
        t[0x80] = |c| { let v = c.regs.bc.get_high() & !(1 << 0); c.regs.bc.set_high(v); };
        t[0x81] = |c| { let v = c.regs.bc.get_low() & !(1 << 0); c.regs.bc.set_low(v); };
        t[0x82] = |c| { let v = c.regs.de.get_high() & !(1 << 0); c.regs.de.set_high(v); };
        t[0x83] = |c| { let v = c.regs.de.get_low() & !(1 << 0); c.regs.de.set_low(v); };
        t[0x84] = |c| { let v = c.regs.hl.get_high() & !(1 << 0); c.regs.hl.set_high(v); };
        t[0x85] = |c| { let v = c.regs.hl.get_low() & !(1 << 0); c.regs.hl.set_low(v); };
        t[0x86] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 0); c.write8(a, v); };
        t[0x87] = |c| { let v = c.a() & !(1 << 0); c.set_a(v); };
        t[0x88] = |c| { let v = c.regs.bc.get_high() & !(1 << 1); c.regs.bc.set_high(v); };
        t[0x89] = |c| { let v = c.regs.bc.get_low() & !(1 << 1); c.regs.bc.set_low(v); };
        t[0x8A] = |c| { let v = c.regs.de.get_high() & !(1 << 1); c.regs.de.set_high(v); };
        t[0x8B] = |c| { let v = c.regs.de.get_low() & !(1 << 1); c.regs.de.set_low(v); };
        t[0x8C] = |c| { let v = c.regs.hl.get_high() & !(1 << 1); c.regs.hl.set_high(v); };
        t[0x8D] = |c| { let v = c.regs.hl.get_low() & !(1 << 1); c.regs.hl.set_low(v); };
        t[0x8E] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 1); c.write8(a, v); };
        t[0x8F] = |c| { let v = c.a() & !(1 << 1); c.set_a(v); };
        t[0x90] = |c| { let v = c.regs.bc.get_high() & !(1 << 2); c.regs.bc.set_high(v); };
        t[0x91] = |c| { let v = c.regs.bc.get_low() & !(1 << 2); c.regs.bc.set_low(v); };
        t[0x92] = |c| { let v = c.regs.de.get_high() & !(1 << 2); c.regs.de.set_high(v); };
        t[0x93] = |c| { let v = c.regs.de.get_low() & !(1 << 2); c.regs.de.set_low(v); };
        t[0x94] = |c| { let v = c.regs.hl.get_high() & !(1 << 2); c.regs.hl.set_high(v); };
        t[0x95] = |c| { let v = c.regs.hl.get_low() & !(1 << 2); c.regs.hl.set_low(v); };
        t[0x96] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 2); c.write8(a, v); };
        t[0x97] = |c| { let v = c.a() & !(1 << 2); c.set_a(v); };
        t[0x98] = |c| { let v = c.regs.bc.get_high() & !(1 << 3); c.regs.bc.set_high(v); };
        t[0x99] = |c| { let v = c.regs.bc.get_low() & !(1 << 3); c.regs.bc.set_low(v); };
        t[0x9A] = |c| { let v = c.regs.de.get_high() & !(1 << 3); c.regs.de.set_high(v); };
        t[0x9B] = |c| { let v = c.regs.de.get_low() & !(1 << 3); c.regs.de.set_low(v); };
        t[0x9C] = |c| { let v = c.regs.hl.get_high() & !(1 << 3); c.regs.hl.set_high(v); };
        t[0x9D] = |c| { let v = c.regs.hl.get_low() & !(1 << 3); c.regs.hl.set_low(v); };
        t[0x9E] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 3); c.write8(a, v); };
        t[0x9F] = |c| { let v = c.a() & !(1 << 3); c.set_a(v); };
        t[0xA0] = |c| { let v = c.regs.bc.get_high() & !(1 << 4); c.regs.bc.set_high(v); };
        t[0xA1] = |c| { let v = c.regs.bc.get_low() & !(1 << 4); c.regs.bc.set_low(v); };
        t[0xA2] = |c| { let v = c.regs.de.get_high() & !(1 << 4); c.regs.de.set_high(v); };
        t[0xA3] = |c| { let v = c.regs.de.get_low() & !(1 << 4); c.regs.de.set_low(v); };
        t[0xA4] = |c| { let v = c.regs.hl.get_high() & !(1 << 4); c.regs.hl.set_high(v); };
        t[0xA5] = |c| { let v = c.regs.hl.get_low() & !(1 << 4); c.regs.hl.set_low(v); };
        t[0xA6] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 4); c.write8(a, v); };
        t[0xA7] = |c| { let v = c.a() & !(1 << 4); c.set_a(v); };
        t[0xA8] = |c| { let v = c.regs.bc.get_high() & !(1 << 5); c.regs.bc.set_high(v); };
        t[0xA9] = |c| { let v = c.regs.bc.get_low() & !(1 << 5); c.regs.bc.set_low(v); };
        t[0xAA] = |c| { let v = c.regs.de.get_high() & !(1 << 5); c.regs.de.set_high(v); };
        t[0xAB] = |c| { let v = c.regs.de.get_low() & !(1 << 5); c.regs.de.set_low(v); };
        t[0xAC] = |c| { let v = c.regs.hl.get_high() & !(1 << 5); c.regs.hl.set_high(v); };
        t[0xAD] = |c| { let v = c.regs.hl.get_low() & !(1 << 5); c.regs.hl.set_low(v); };
        t[0xAE] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 5); c.write8(a, v); };
        t[0xAF] = |c| { let v = c.a() & !(1 << 5); c.set_a(v); };
        t[0xB0] = |c| { let v = c.regs.bc.get_high() & !(1 << 6); c.regs.bc.set_high(v); };
        t[0xB1] = |c| { let v = c.regs.bc.get_low() & !(1 << 6); c.regs.bc.set_low(v); };
        t[0xB2] = |c| { let v = c.regs.de.get_high() & !(1 << 6); c.regs.de.set_high(v); };
        t[0xB3] = |c| { let v = c.regs.de.get_low() & !(1 << 6); c.regs.de.set_low(v); };
        t[0xB4] = |c| { let v = c.regs.hl.get_high() & !(1 << 6); c.regs.hl.set_high(v); };
        t[0xB5] = |c| { let v = c.regs.hl.get_low() & !(1 << 6); c.regs.hl.set_low(v); };
        t[0xB6] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 6); c.write8(a, v); };
        t[0xB7] = |c| { let v = c.a() & !(1 << 6); c.set_a(v); };
        t[0xB8] = |c| { let v = c.regs.bc.get_high() & !(1 << 7); c.regs.bc.set_high(v); };
        t[0xB9] = |c| { let v = c.regs.bc.get_low() & !(1 << 7); c.regs.bc.set_low(v); };
        t[0xBA] = |c| { let v = c.regs.de.get_high() & !(1 << 7); c.regs.de.set_high(v); };
        t[0xBB] = |c| { let v = c.regs.de.get_low() & !(1 << 7); c.regs.de.set_low(v); };
        t[0xBC] = |c| { let v = c.regs.hl.get_high() & !(1 << 7); c.regs.hl.set_high(v); };
        t[0xBD] = |c| { let v = c.regs.hl.get_low() & !(1 << 7); c.regs.hl.set_low(v); };
        t[0xBE] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) & !(1 << 7); c.write8(a, v); };
        t[0xBF] = |c| { let v = c.a() & !(1 << 7); c.set_a(v); };

        // 0xC0-0xFF: SET b,r
        t[0xC0] = |c| { let v = c.regs.bc.get_high() | 1 << 0; c.regs.bc.set_high(v); };
        t[0xC1] = |c| { let v = c.regs.bc.get_low() | 1 << 0; c.regs.bc.set_low(v); };
        t[0xC2] = |c| { let v = c.regs.de.get_high() | 1 << 0; c.regs.de.set_high(v); };
        t[0xC3] = |c| { let v = c.regs.de.get_low() | 1 << 0; c.regs.de.set_low(v); };
        t[0xC4] = |c| { let v = c.regs.hl.get_high() | 1 << 0; c.regs.hl.set_high(v); };
        t[0xC5] = |c| { let v = c.regs.hl.get_low() | 1 << 0; c.regs.hl.set_low(v); };
        t[0xC6] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 0; c.write8(a, v); };
        t[0xC7] = |c| { let v = c.a() | 1 << 0; c.set_a(v); };
        t[0xC8] = |c| { let v = c.regs.bc.get_high() | 1 << 1; c.regs.bc.set_high(v); };
        t[0xC9] = |c| { let v = c.regs.bc.get_low() | 1 << 1; c.regs.bc.set_low(v); };
        t[0xCA] = |c| { let v = c.regs.de.get_high() | 1 << 1; c.regs.de.set_high(v); };
        t[0xCB] = |c| { let v = c.regs.de.get_low() | 1 << 1; c.regs.de.set_low(v); };
        t[0xCC] = |c| { let v = c.regs.hl.get_high() | 1 << 1; c.regs.hl.set_high(v); };
        t[0xCD] = |c| { let v = c.regs.hl.get_low() | 1 << 1; c.regs.hl.set_low(v); };
        t[0xCE] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 1; c.write8(a, v); };
        t[0xCF] = |c| { let v = c.a() | 1 << 1; c.set_a(v); };
        t[0xD0] = |c| { let v = c.regs.bc.get_high() | 1 << 2; c.regs.bc.set_high(v); };
        t[0xD1] = |c| { let v = c.regs.bc.get_low() | 1 << 2; c.regs.bc.set_low(v); };
        t[0xD2] = |c| { let v = c.regs.de.get_high() | 1 << 2; c.regs.de.set_high(v); };
        t[0xD3] = |c| { let v = c.regs.de.get_low() | 1 << 2; c.regs.de.set_low(v); };
        t[0xD4] = |c| { let v = c.regs.hl.get_high() | 1 << 2; c.regs.hl.set_high(v); };
        t[0xD5] = |c| { let v = c.regs.hl.get_low() | 1 << 2; c.regs.hl.set_low(v); };
        t[0xD6] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 2; c.write8(a, v); };
        t[0xD7] = |c| { let v = c.a() | 1 << 2; c.set_a(v); };
        t[0xD8] = |c| { let v = c.regs.bc.get_high() | 1 << 3; c.regs.bc.set_high(v); };
        t[0xD9] = |c| { let v = c.regs.bc.get_low() | 1 << 3; c.regs.bc.set_low(v); };
        t[0xDA] = |c| { let v = c.regs.de.get_high() | 1 << 3; c.regs.de.set_high(v); };
        t[0xDB] = |c| { let v = c.regs.de.get_low() | 1 << 3; c.regs.de.set_low(v); };
        t[0xDC] = |c| { let v = c.regs.hl.get_high() | 1 << 3; c.regs.hl.set_high(v); };
        t[0xDD] = |c| { let v = c.regs.hl.get_low() | 1 << 3; c.regs.hl.set_low(v); };
        t[0xDE] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 3; c.write8(a, v); };
        t[0xDF] = |c| { let v = c.a() | 1 << 3; c.set_a(v); };
        t[0xE0] = |c| { let v = c.regs.bc.get_high() | 1 << 4; c.regs.bc.set_high(v); };
        t[0xE1] = |c| { let v = c.regs.bc.get_low() | 1 << 4; c.regs.bc.set_low(v); };
        t[0xE2] = |c| { let v = c.regs.de.get_high() | 1 << 4; c.regs.de.set_high(v); };
        t[0xE3] = |c| { let v = c.regs.de.get_low() | 1 << 4; c.regs.de.set_low(v); };
        t[0xE4] = |c| { let v = c.regs.hl.get_high() | 1 << 4; c.regs.hl.set_high(v); };
        t[0xE5] = |c| { let v = c.regs.hl.get_low() | 1 << 4; c.regs.hl.set_low(v); };
        t[0xE6] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 4; c.write8(a, v); };
        t[0xE7] = |c| { let v = c.a() | 1 << 4; c.set_a(v); };
        t[0xE8] = |c| { let v = c.regs.bc.get_high() | 1 << 5; c.regs.bc.set_high(v); };
        t[0xE9] = |c| { let v = c.regs.bc.get_low() | 1 << 5; c.regs.bc.set_low(v); };
        t[0xEA] = |c| { let v = c.regs.de.get_high() | 1 << 5; c.regs.de.set_high(v); };
        t[0xEB] = |c| { let v = c.regs.de.get_low() | 1 << 5; c.regs.de.set_low(v); };
        t[0xEC] = |c| { let v = c.regs.hl.get_high() | 1 << 5; c.regs.hl.set_high(v); };
        t[0xED] = |c| { let v = c.regs.hl.get_low() | 1 << 5; c.regs.hl.set_low(v); };
        t[0xEE] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 5; c.write8(a, v); };
        t[0xEF] = |c| { let v = c.a() | 1 << 5; c.set_a(v); };
        t[0xF0] = |c| { let v = c.regs.bc.get_high() | 1 << 6; c.regs.bc.set_high(v); };
        t[0xF1] = |c| { let v = c.regs.bc.get_low() | 1 << 6; c.regs.bc.set_low(v); };
        t[0xF2] = |c| { let v = c.regs.de.get_high() | 1 << 6; c.regs.de.set_high(v); };
        t[0xF3] = |c| { let v = c.regs.de.get_low() | 1 << 6; c.regs.de.set_low(v); };
        t[0xF4] = |c| { let v = c.regs.hl.get_high() | 1 << 6; c.regs.hl.set_high(v); };
        t[0xF5] = |c| { let v = c.regs.hl.get_low() | 1 << 6; c.regs.hl.set_low(v); };
        t[0xF6] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 6; c.write8(a, v); };
        t[0xF7] = |c| { let v = c.a() | 1 << 6; c.set_a(v); };
        t[0xF8] = |c| { let v = c.regs.bc.get_high() | 1 << 7; c.regs.bc.set_high(v); };
        t[0xF9] = |c| { let v = c.regs.bc.get_low() | 1 << 7; c.regs.bc.set_low(v); };
        t[0xFA] = |c| { let v = c.regs.de.get_high() | 1 << 7; c.regs.de.set_high(v); };
        t[0xFB] = |c| { let v = c.regs.de.get_low() | 1 << 7; c.regs.de.set_low(v); };
        t[0xFC] = |c| { let v = c.regs.hl.get_high() | 1 << 7; c.regs.hl.set_high(v); };
        t[0xFD] = |c| { let v = c.regs.hl.get_low() | 1 << 7; c.regs.hl.set_low(v); };
        t[0xFE] = |c| { let a = c.regs.hl.get16(); let v = c.read8(a) | 1 << 7; c.write8(a, v); };
        t[0xFF] = |c| { let v = c.a() | 1 << 7; c.set_a(v); };

        t
    };

    /// ED space: 16-bit carry arithmetic, block ops, I/O, interrupt control.
    pub(crate) const EXT: OpTable<B> = {
        let mut t: OpTable<B> = [Self::illegal as OpFn<B>; 256];

        t[0x40] = |c| { let v = c.op_in_c(); c.regs.bc.set_high(v); }; // IN B,(C)
        t[0x41] = |c| c.op_out_c(c.regs.bc.get_high()); // OUT (C),B
        t[0x42] = |c| c.op_sbc16(c.regs.bc.get16()); // SBC HL,BC
        t[0x43] = |c| { let a = c.fetch16(); let v = c.regs.bc.get16(); c.write16(a, v); }; // LD (nn),BC
        t[0x44] = |c| c.op_neg(); // NEG
        t[0x45] = |c| c.op_retn(); // RETN
        t[0x46] = |c| c.int_mode = 0; // IM 0
        t[0x47] = |c| c.regs.i = c.a(); // LD I,A
        t[0x48] = |c| { let v = c.op_in_c(); c.regs.bc.set_low(v); }; // IN C,(C)
        t[0x49] = |c| c.op_out_c(c.regs.bc.get_low()); // OUT (C),C
        t[0x4A] = |c| c.op_adc16(c.regs.bc.get16()); // ADC HL,BC
        t[0x4B] = |c| { let a = c.fetch16(); let v = c.read16(a); c.regs.bc.set16(v); }; // LD BC,(nn)
        t[0x4D] = |c| c.op_reti(); // RETI
        t[0x4F] = |c| c.regs.r = c.a(); // LD R,A
        t[0x50] = |c| { let v = c.op_in_c(); c.regs.de.set_high(v); }; // IN D,(C)
        t[0x51] = |c| c.op_out_c(c.regs.de.get_high()); // OUT (C),D
        t[0x52] = |c| c.op_sbc16(c.regs.de.get16()); // SBC HL,DE
        t[0x53] = |c| { let a = c.fetch16(); let v = c.regs.de.get16(); c.write16(a, v); }; // LD (nn),DE
        t[0x56] = |c| c.int_mode = 1; // IM 1
        t[0x57] = |c| c.op_ld_a_ir(c.regs.i); // LD A,I
        t[0x58] = |c| { let v = c.op_in_c(); c.regs.de.set_low(v); }; // IN E,(C)
        t[0x59] = |c| c.op_out_c(c.regs.de.get_low()); // OUT (C),E
        t[0x5A] = |c| c.op_adc16(c.regs.de.get16()); // ADC HL,DE
        t[0x5B] = |c| { let a = c.fetch16(); let v = c.read16(a); c.regs.de.set16(v); }; // LD DE,(nn)
        t[0x5E] = |c| c.int_mode = 2; // IM 2
        t[0x5F] = |c| c.op_ld_a_ir(c.regs.r); // LD A,R
        t[0x60] = |c| { let v = c.op_in_c(); c.regs.hl.set_high(v); }; // IN H,(C)
        t[0x61] = |c| c.op_out_c(c.regs.hl.get_high()); // OUT (C),H
        t[0x62] = |c| c.op_sbc16(c.regs.hl.get16()); // SBC HL,HL
        t[0x63] = |c| { let a = c.fetch16(); let v = c.regs.hl.get16(); c.write16(a, v); }; // LD (nn),HL
        t[0x67] = |c| c.op_rrd(); // RRD
        t[0x68] = |c| { let v = c.op_in_c(); c.regs.hl.set_low(v); }; // IN L,(C)
        t[0x69] = |c| c.op_out_c(c.regs.hl.get_low()); // OUT (C),L
        t[0x6A] = |c| c.op_adc16(c.regs.hl.get16()); // ADC HL,HL
        t[0x6B] = |c| { let a = c.fetch16(); let v = c.read16(a); c.regs.hl.set16(v); }; // LD HL,(nn)
        t[0x6F] = |c| c.op_rld(); // RLD
        t[0x70] = |c| { c.op_in_c(); }; // IN (C), flags only
        t[0x71] = |c| c.op_out_c(0); // OUT (C),0
        t[0x72] = |c| c.op_sbc16(c.regs.sp); // SBC HL,SP
        t[0x73] = |c| { let a = c.fetch16(); let v = c.regs.sp; c.write16(a, v); }; // LD (nn),SP
        t[0x78] = |c| { let v = c.op_in_c(); c.set_a(v); }; // IN A,(C)
        t[0x79] = |c| c.op_out_c(c.a()); // OUT (C),A
        t[0x7A] = |c| c.op_adc16(c.regs.sp); // ADC HL,SP
        t[0x7B] = |c| { let a = c.fetch16(); c.regs.sp = c.read16(a); }; // LD SP,(nn)

        t[0xA0] = |c| c.op_ldi(); // LDI
        t[0xA1] = |c| c.op_cpi(); // CPI
        t[0xA2] = |c| c.op_ini(); // INI
        t[0xA3] = |c| c.op_outi(); // OUTI
        t[0xA8] = |c| c.op_ldd(); // LDD
        t[0xA9] = |c| c.op_cpd(); // CPD
        t[0xAA] = |c| c.op_ind(); // IND
        t[0xAB] = |c| c.op_outd(); // OUTD
        t[0xB0] = |c| c.op_ldir(); // LDIR
        t[0xB1] = |c| c.op_cpir(); // CPIR
        t[0xB2] = |c| c.op_inir(); // INIR
        t[0xB3] = |c| c.op_otir(); // OTIR
        t[0xB8] = |c| c.op_lddr(); // LDDR
        t[0xB9] = |c| c.op_cpdr(); // CPDR
        t[0xBA] = |c| c.op_indr(); // INDR
        t[0xBB] = |c| c.op_otdr(); // OTDR

        t
    };

    /// DD/FD space, shared between IX and IY via the `idx` selector.
    /// H and L operands become IXH/IXL except where (IX+d) is involved.
    pub(crate) const INDEXED: OpTable<B> = {
        let mut t: OpTable<B> = [Self::illegal as OpFn<B>; 256];

        t[0x09] = |c| { let v = c.op_add16(c.idx16(), c.regs.bc.get16()); c.set_idx16(v); }; // ADD IX,BC
        t[0x19] = |c| { let v = c.op_add16(c.idx16(), c.regs.de.get16()); c.set_idx16(v); }; // ADD IX,DE
        t[0x21] = |c| { let v = c.fetch16(); c.set_idx16(v); }; // LD IX,nn
        t[0x22] = |c| { let a = c.fetch16(); let v = c.idx16(); c.write16(a, v); }; // LD (nn),IX
        t[0x23] = |c| { let v = c.idx16().wrapping_add(1); c.set_idx16(v); }; // INC IX
        t[0x24] = |c| { let v = c.op_inc8(c.idx_high()); c.set_idx_high(v); }; // INC IXH
        t[0x25] = |c| { let v = c.op_dec8(c.idx_high()); c.set_idx_high(v); }; // DEC IXH
        t[0x26] = |c| { let v = c.fetch8(); c.set_idx_high(v); }; // LD IXH,n
        t[0x29] = |c| { let v = c.op_add16(c.idx16(), c.idx16()); c.set_idx16(v); }; // ADD IX,IX
        t[0x2A] = |c| { let a = c.fetch16(); let v = c.read16(a); c.set_idx16(v); }; // LD IX,(nn)
        t[0x2B] = |c| { let v = c.idx16().wrapping_sub(1); c.set_idx16(v); }; // DEC IX
        t[0x2C] = |c| { let v = c.op_inc8(c.idx_low()); c.set_idx_low(v); }; // INC IXL
        t[0x2D] = |c| { let v = c.op_dec8(c.idx_low()); c.set_idx_low(v); }; // DEC IXL
        t[0x2E] = |c| { let v = c.fetch8(); c.set_idx_low(v); }; // LD IXL,n
        t[0x34] = |c| { let a = c.idx_addr(); let v = c.read8(a); let v = c.op_inc8(v); c.cycle_count += 1; c.write8(a, v); }; // INC (IX+d)
        t[0x35] = |c| { let a = c.idx_addr(); let v = c.read8(a); let v = c.op_dec8(v); c.cycle_count += 1; c.write8(a, v); }; // DEC (IX+d)
        t[0x36] = |c| { let a = c.idx_addr(); let v = c.fetch8(); c.write8(a, v); }; // LD (IX+d),n
        t[0x39] = |c| { let v = c.op_add16(c.idx16(), c.regs.sp); c.set_idx16(v); }; // ADD IX,SP

        // LD r,r' grid with IXH/IXL in the H/L columns
        t[0x40] = |_| {}; // LD B,B
        t[0x41] = |c| { let v = c.regs.bc.get_low(); c.regs.bc.set_high(v); }; // LD B,C
        t[0x42] = |c| { let v = c.regs.de.get_high(); c.regs.bc.set_high(v); }; // LD B,D
        t[0x43] = |c| { let v = c.regs.de.get_low(); c.regs.bc.set_high(v); }; // LD B,E
        t[0x44] = |c| { let v = c.idx_high(); c.regs.bc.set_high(v); }; // LD B,IXH
        t[0x45] = |c| { let v = c.idx_low(); c.regs.bc.set_high(v); }; // LD B,IXL
        t[0x46] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.regs.bc.set_high(v); }; // LD B,(IX+d)
        t[0x47] = |c| { let v = c.a(); c.regs.bc.set_high(v); }; // LD B,A
        t[0x48] = |c| { let v = c.regs.bc.get_high(); c.regs.bc.set_low(v); }; // LD C,B
        t[0x49] = |_| {}; // LD C,C
        t[0x4A] = |c| { let v = c.regs.de.get_high(); c.regs.bc.set_low(v); }; // LD C,D
        t[0x4B] = |c| { let v = c.regs.de.get_low(); c.regs.bc.set_low(v); }; // LD C,E
        t[0x4C] = |c| { let v = c.idx_high(); c.regs.bc.set_low(v); }; // LD C,IXH
        t[0x4D] = |c| { let v = c.idx_low(); c.regs.bc.set_low(v); }; // LD C,IXL
        t[0x4E] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.regs.bc.set_low(v); }; // LD C,(IX+d)
        t[0x4F] = |c| { let v = c.a(); c.regs.bc.set_low(v); }; // LD C,A
        t[0x50] = |c| { let v = c.regs.bc.get_high(); c.regs.de.set_high(v); }; // LD D,B
        t[0x51] = |c| { let v = c.regs.bc.get_low(); c.regs.de.set_high(v); }; // LD D,C
        t[0x52] = |_| {}; // LD D,D
        t[0x53] = |c| { let v = c.regs.de.get_low(); c.regs.de.set_high(v); }; // LD D,E
        t[0x54] = |c| { let v = c.idx_high(); c.regs.de.set_high(v); }; // LD D,IXH
        t[0x55] = |c| { let v = c.idx_low(); c.regs.de.set_high(v); }; // LD D,IXL
        t[0x56] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.regs.de.set_high(v); }; // LD D,(IX+d)
        t[0x57] = |c| { let v = c.a(); c.regs.de.set_high(v); }; // LD D,A
        t[0x58] = |c| { let v = c.regs.bc.get_high(); c.regs.de.set_low(v); }; // LD E,B
        t[0x59] = |c| { let v = c.regs.bc.get_low(); c.regs.de.set_low(v); }; // LD E,C
        t[0x5A] = |c| { let v = c.regs.de.get_high(); c.regs.de.set_low(v); }; // LD E,D
        t[0x5B] = |_| {}; // LD E,E
        t[0x5C] = |c| { let v = c.idx_high(); c.regs.de.set_low(v); }; // LD E,IXH
        t[0x5D] = |c| { let v = c.idx_low(); c.regs.de.set_low(v); }; // LD E,IXL
        t[0x5E] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.regs.de.set_low(v); }; // LD E,(IX+d)
        t[0x5F] = |c| { let v = c.a(); c.regs.de.set_low(v); }; // LD E,A
        t[0x60] = |c| { let v = c.regs.bc.get_high(); c.set_idx_high(v); }; // LD IXH,B
        t[0x61] = |c| { let v = c.regs.bc.get_low(); c.set_idx_high(v); }; // LD IXH,C
        t[0x62] = |c| { let v = c.regs.de.get_high(); c.set_idx_high(v); }; // LD IXH,D
        t[0x63] = |c| { let v = c.regs.de.get_low(); c.set_idx_high(v); }; // LD IXH,E
        t[0x64] = |_| {}; // LD IXH,IXH
        t[0x65] = |c| { let v = c.idx_low(); c.set_idx_high(v); }; // LD IXH,IXL
        t[0x66] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.regs.hl.set_high(v); }; // LD H,(IX+d)
        t[0x67] = |c| { let v = c.a(); c.set_idx_high(v); }; // LD IXH,A
        t[0x68] = |c| { let v = c.regs.bc.get_high(); c.set_idx_low(v); }; // LD IXL,B
        t[0x69] = |c| { let v = c.regs.bc.get_low(); c.set_idx_low(v); }; // LD IXL,C
        t[0x6A] = |c| { let v = c.regs.de.get_high(); c.set_idx_low(v); }; // LD IXL,D
        t[0x6B] = |c| { let v = c.regs.de.get_low(); c.set_idx_low(v); }; // LD IXL,E
        t[0x6C] = |c| { let v = c.idx_high(); c.set_idx_low(v); }; // LD IXL,IXH
        t[0x6D] = |_| {}; // LD IXL,IXL
        t[0x6E] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.regs.hl.set_low(v); }; // LD L,(IX+d)
        t[0x6F] = |c| { let v = c.a(); c.set_idx_low(v); }; // LD IXL,A
        t[0x70] = |c| { let a = c.idx_addr(); c.write8(a, c.regs.bc.get_high()); }; // LD (IX+d),B
        t[0x71] = |c| { let a = c.idx_addr(); c.write8(a, c.regs.bc.get_low()); }; // LD (IX+d),C
        t[0x72] = |c| { let a = c.idx_addr(); c.write8(a, c.regs.de.get_high()); }; // LD (IX+d),D
        t[0x73] = |c| { let a = c.idx_addr(); c.write8(a, c.regs.de.get_low()); }; // LD (IX+d),E
        t[0x74] = |c| { let a = c.idx_addr(); c.write8(a, c.regs.hl.get_high()); }; // LD (IX+d),H
        t[0x75] = |c| { let a = c.idx_addr(); c.write8(a, c.regs.hl.get_low()); }; // LD (IX+d),L
        t[0x77] = |c| { let a = c.idx_addr(); c.write8(a, c.a()); }; // LD (IX+d),A
        t[0x78] = |c| { let v = c.regs.bc.get_high(); c.set_a(v); }; // LD A,B
        t[0x79] = |c| { let v = c.regs.bc.get_low(); c.set_a(v); }; // LD A,C
        t[0x7A] = |c| { let v = c.regs.de.get_high(); c.set_a(v); }; // LD A,D
        t[0x7B] = |c| { let v = c.regs.de.get_low(); c.set_a(v); }; // LD A,E
        t[0x7C] = |c| { let v = c.idx_high(); c.set_a(v); }; // LD A,IXH
        t[0x7D] = |c| { let v = c.idx_low(); c.set_a(v); }; // LD A,IXL
        t[0x7E] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.set_a(v); }; // LD A,(IX+d)
        t[0x7F] = |_| {}; // LD A,A

        // ALU with IXH/IXL/(IX+d)
        t[0x84] = |c| c.op_add8(c.idx_high()); // ADD A,IXH
        t[0x85] = |c| c.op_add8(c.idx_low()); // ADD A,IXL
        t[0x86] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_add8(v); }; // ADD A,(IX+d)
        t[0x8C] = |c| c.op_adc8(c.idx_high()); // ADC A,IXH
        t[0x8D] = |c| c.op_adc8(c.idx_low()); // ADC A,IXL
        t[0x8E] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_adc8(v); }; // ADC A,(IX+d)
        t[0x94] = |c| c.op_sub8(c.idx_high()); // SUB IXH
        t[0x95] = |c| c.op_sub8(c.idx_low()); // SUB IXL
        t[0x96] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_sub8(v); }; // SUB (IX+d)
        t[0x9C] = |c| c.op_sbc8(c.idx_high()); // SBC A,IXH
        t[0x9D] = |c| c.op_sbc8(c.idx_low()); // SBC A,IXL
        t[0x9E] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_sbc8(v); }; // SBC A,(IX+d)
        t[0xA4] = |c| c.op_and8(c.idx_high()); // AND IXH
        t[0xA5] = |c| c.op_and8(c.idx_low()); // AND IXL
        t[0xA6] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_and8(v); }; // AND (IX+d)
        t[0xAC] = |c| c.op_xor8(c.idx_high()); // XOR IXH
        t[0xAD] = |c| c.op_xor8(c.idx_low()); // XOR IXL
        t[0xAE] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_xor8(v); }; // XOR (IX+d)
        t[0xB4] = |c| c.op_or8(c.idx_high()); // OR IXH
        t[0xB5] = |c| c.op_or8(c.idx_low()); // OR IXL
        t[0xB6] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_or8(v); }; // OR (IX+d)
        t[0xBC] = |c| c.op_cp8(c.idx_high()); // CP IXH
        t[0xBD] = |c| c.op_cp8(c.idx_low()); // CP IXL
        t[0xBE] = |c| { let a = c.idx_addr(); let v = c.read8(a); c.op_cp8(v); }; // CP (IX+d)

        // Displacement comes before the sub-opcode in the DDCB encoding
        t[0xCB] = |c| {
            let d = c.fetch8() as i8;
            c.idx_ptr = c.idx16().wrapping_add(d as i16 as u16);
            let sub = c.fetch8();
            Self::INDEXED_BIT[sub as usize](c);
        };

        t[0xE1] = |c| { let v = c.pop16(); c.set_idx16(v); }; // POP IX
        t[0xE5] = |c| c.push16(c.idx16()); // PUSH IX
        t[0xE9] = |c| c.regs.pc = c.idx16(); // JP (IX)

        t
    };

    /// DDCB/FDCB space. The operand is always (IX+d), read through
    /// `idx_ptr`; variants outside the (IX+d) column copy the result into
    /// the named register instead of writing memory back.
    pub(crate) const INDEXED_BIT: OpTable<B> = {
        let mut t: OpTable<B> = [Self::illegal as OpFn<B>; 256];

        t[0x00] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.regs.bc.set_high(v); }; // RLC (IX+d),B
        t[0x01] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.regs.bc.set_low(v); };
        t[0x02] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.regs.de.set_high(v); };
        t[0x03] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.regs.de.set_low(v); };
        t[0x04] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.regs.hl.set_high(v); };
        t[0x05] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.regs.hl.set_low(v); };
        t[0x06] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.write8(c.idx_ptr, v); }; // RLC (IX+d)
        t[0x07] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rlc(v); c.set_a(v); };
        t[0x08] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.regs.bc.set_high(v); };
        t[0x09] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.regs.bc.set_low(v); };
        t[0x0A] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.regs.de.set_high(v); };
        t[0x0B] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.regs.de.set_low(v); };
        t[0x0C] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.regs.hl.set_high(v); };
        t[0x0D] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.regs.hl.set_low(v); };
        t[0x0E] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.write8(c.idx_ptr, v); }; // RRC (IX+d)
        t[0x0F] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rrc(v); c.set_a(v); };
        t[0x10] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.regs.bc.set_high(v); };
        t[0x11] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.regs.bc.set_low(v); };
        t[0x12] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.regs.de.set_high(v); };
        t[0x13] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.regs.de.set_low(v); };
        t[0x14] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.regs.hl.set_high(v); };
        t[0x15] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.regs.hl.set_low(v); };
        t[0x16] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.write8(c.idx_ptr, v); }; // RL (IX+d)
        t[0x17] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rl(v); c.set_a(v); };
        t[0x18] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.regs.bc.set_high(v); };
        t[0x19] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.regs.bc.set_low(v); };
        t[0x1A] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.regs.de.set_high(v); };
        t[0x1B] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.regs.de.set_low(v); };
        t[0x1C] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.regs.hl.set_high(v); };
        t[0x1D] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.regs.hl.set_low(v); };
        t[0x1E] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.write8(c.idx_ptr, v); }; // RR (IX+d)
        t[0x1F] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_rr(v); c.set_a(v); };
        t[0x20] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.regs.bc.set_high(v); };
        t[0x21] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.regs.bc.set_low(v); };
        t[0x22] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.regs.de.set_high(v); };
        t[0x23] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.regs.de.set_low(v); };
        t[0x24] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.regs.hl.set_high(v); };
        t[0x25] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.regs.hl.set_low(v); };
        t[0x26] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.write8(c.idx_ptr, v); }; // SLA (IX+d)
        t[0x27] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sla(v); c.set_a(v); };
        t[0x28] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.regs.bc.set_high(v); };
        t[0x29] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.regs.bc.set_low(v); };
        t[0x2A] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.regs.de.set_high(v); };
        t[0x2B] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.regs.de.set_low(v); };
        t[0x2C] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.regs.hl.set_high(v); };
        t[0x2D] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.regs.hl.set_low(v); };
        t[0x2E] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.write8(c.idx_ptr, v); }; // SRA (IX+d)
        t[0x2F] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sra(v); c.set_a(v); };
        t[0x30] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.regs.bc.set_high(v); };
        t[0x31] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.regs.bc.set_low(v); };
        t[0x32] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.regs.de.set_high(v); };
        t[0x33] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.regs.de.set_low(v); };
        t[0x34] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.regs.hl.set_high(v); };
        t[0x35] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.regs.hl.set_low(v); };
        t[0x36] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.write8(c.idx_ptr, v); }; // SLL (IX+d)
        t[0x37] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_sll(v); c.set_a(v); };
        t[0x38] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.regs.bc.set_high(v); };
        t[0x39] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.regs.bc.set_low(v); };
        t[0x3A] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.regs.de.set_high(v); };
        t[0x3B] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.regs.de.set_low(v); };
        t[0x3C] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.regs.hl.set_high(v); };
        t[0x3D] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.regs.hl.set_low(v); };
        t[0x3E] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.write8(c.idx_ptr, v); }; // SRL (IX+d)
        t[0x3F] = |c| { let v = c.read8(c.idx_ptr); let v = c.op_srl(v); c.set_a(v); };

        // BIT b,(IX+d): every column tests the same memory operand
        let mut i = 0x40;
        while i <= 0x7F {
            t[i] = match (i >> 3) & 7 {
                0 => |c| { let v = c.read8(c.idx_ptr); c.op_bit(0, v); },
                1 => |c| { let v = c.read8(c.idx_ptr); c.op_bit(1, v); },
                2 => |c| { let v = c.read8(c.idx_ptr); c.op_bit(2, v); },
                3 => |c| { let v = c.read8(c.idx_ptr); c.op_bit(3, v); },
                4 => |c| { let v = c.read8(c.idx_ptr); c.op_bit(4, v); },
                5 => |c| { let v = c.read8(c.idx_ptr); c.op_bit(5, v); },
                6 => |c| { let v = c.read8(c.idx_ptr); c.op_bit(6, v); },
                _ => |c| { let v = c.read8(c.idx_ptr); c.op_bit(7, v); },
            };
            i += 1;
        }

        // RES b,(IX+d)
        t[0x80] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.regs.bc.set_high(v); };
        t[0x81] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.regs.bc.set_low(v); };
        t[0x82] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.regs.de.set_high(v); };
        t[0x83] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.regs.de.set_low(v); };
        t[0x84] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.regs.hl.set_high(v); };
        t[0x85] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.regs.hl.set_low(v); };
        t[0x86] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.write8(c.idx_ptr, v); };
        t[0x87] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 0); c.set_a(v); };
        t[0x88] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.regs.bc.set_high(v); };
        t[0x89] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.regs.bc.set_low(v); };
        t[0x8A] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.regs.de.set_high(v); };
        t[0x8B] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.regs.de.set_low(v); };
        t[0x8C] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.regs.hl.set_high(v); };
        t[0x8D] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.regs.hl.set_low(v); };
        t[0x8E] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.write8(c.idx_ptr, v); };
        t[0x8F] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 1); c.set_a(v); };
        t[0x90] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.regs.bc.set_high(v); };
        t[0x91] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.regs.bc.set_low(v); };
        t[0x92] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.regs.de.set_high(v); };
        t[0x93] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.regs.de.set_low(v); };
        t[0x94] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.regs.hl.set_high(v); };
        t[0x95] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.regs.hl.set_low(v); };
        t[0x96] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.write8(c.idx_ptr, v); };
        t[0x97] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 2); c.set_a(v); };
        t[0x98] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.regs.bc.set_high(v); };
        t[0x99] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.regs.bc.set_low(v); };
        t[0x9A] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.regs.de.set_high(v); };
        t[0x9B] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.regs.de.set_low(v); };
        t[0x9C] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.regs.hl.set_high(v); };
        t[0x9D] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.regs.hl.set_low(v); };
        t[0x9E] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.write8(c.idx_ptr, v); };
        t[0x9F] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 3); c.set_a(v); };
        t[0xA0] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.regs.bc.set_high(v); };
        t[0xA1] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.regs.bc.set_low(v); };
        t[0xA2] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.regs.de.set_high(v); };
        t[0xA3] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.regs.de.set_low(v); };
        t[0xA4] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.regs.hl.set_high(v); };
        t[0xA5] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.regs.hl.set_low(v); };
        t[0xA6] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.write8(c.idx_ptr, v); };
        t[0xA7] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 4); c.set_a(v); };
        t[0xA8] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.regs.bc.set_high(v); };
        t[0xA9] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.regs.bc.set_low(v); };
        t[0xAA] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.regs.de.set_high(v); };
        t[0xAB] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.regs.de.set_low(v); };
        t[0xAC] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.regs.hl.set_high(v); };
        t[0xAD] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.regs.hl.set_low(v); };
        t[0xAE] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.write8(c.idx_ptr, v); };
        t[0xAF] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 5); c.set_a(v); };
        t[0xB0] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.regs.bc.set_high(v); };
        t[0xB1] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.regs.bc.set_low(v); };
        t[0xB2] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.regs.de.set_high(v); };
        t[0xB3] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.regs.de.set_low(v); };
        t[0xB4] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.regs.hl.set_high(v); };
        t[0xB5] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.regs.hl.set_low(v); };
        t[0xB6] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.write8(c.idx_ptr, v); };
        t[0xB7] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 6); c.set_a(v); };
        t[0xB8] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.regs.bc.set_high(v); };
        t[0xB9] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.regs.bc.set_low(v); };
        t[0xBA] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.regs.de.set_high(v); };
        t[0xBB] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.regs.de.set_low(v); };
        t[0xBC] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.regs.hl.set_high(v); };
        t[0xBD] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.regs.hl.set_low(v); };
        t[0xBE] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.write8(c.idx_ptr, v); };
        t[0xBF] = |c| { let v = c.read8(c.idx_ptr) & !(1 << 7); c.set_a(v); };

        // SET b,(IX+d)
        t[0xC0] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.regs.bc.set_high(v); };
        t[0xC1] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.regs.bc.set_low(v); };
        t[0xC2] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.regs.de.set_high(v); };
        t[0xC3] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.regs.de.set_low(v); };
        t[0xC4] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.regs.hl.set_high(v); };
        t[0xC5] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.regs.hl.set_low(v); };
        t[0xC6] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.write8(c.idx_ptr, v); };
        t[0xC7] = |c| { let v = c.read8(c.idx_ptr) | 1 << 0; c.set_a(v); };
        t[0xC8] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.regs.bc.set_high(v); };
        t[0xC9] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.regs.bc.set_low(v); };
        t[0xCA] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.regs.de.set_high(v); };
        t[0xCB] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.regs.de.set_low(v); };
        t[0xCC] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.regs.hl.set_high(v); };
        t[0xCD] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.regs.hl.set_low(v); };
        t[0xCE] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.write8(c.idx_ptr, v); };
        t[0xCF] = |c| { let v = c.read8(c.idx_ptr) | 1 << 1; c.set_a(v); };
        t[0xD0] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.regs.bc.set_high(v); };
        t[0xD1] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.regs.bc.set_low(v); };
        t[0xD2] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.regs.de.set_high(v); };
        t[0xD3] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.regs.de.set_low(v); };
        t[0xD4] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.regs.hl.set_high(v); };
        t[0xD5] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.regs.hl.set_low(v); };
        t[0xD6] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.write8(c.idx_ptr, v); };
        t[0xD7] = |c| { let v = c.read8(c.idx_ptr) | 1 << 2; c.set_a(v); };
        t[0xD8] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.regs.bc.set_high(v); };
        t[0xD9] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.regs.bc.set_low(v); };
        t[0xDA] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.regs.de.set_high(v); };
        t[0xDB] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.regs.de.set_low(v); };
        t[0xDC] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.regs.hl.set_high(v); };
        t[0xDD] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.regs.hl.set_low(v); };
        t[0xDE] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.write8(c.idx_ptr, v); };
        t[0xDF] = |c| { let v = c.read8(c.idx_ptr) | 1 << 3; c.set_a(v); };
        t[0xE0] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.regs.bc.set_high(v); };
        t[0xE1] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.regs.bc.set_low(v); };
        t[0xE2] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.regs.de.set_high(v); };
        t[0xE3] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.regs.de.set_low(v); };
        t[0xE4] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.regs.hl.set_high(v); };
        t[0xE5] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.regs.hl.set_low(v); };
        t[0xE6] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.write8(c.idx_ptr, v); };
        t[0xE7] = |c| { let v = c.read8(c.idx_ptr) | 1 << 4; c.set_a(v); };
        t[0xE8] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.regs.bc.set_high(v); };
        t[0xE9] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.regs.bc.set_low(v); };
        t[0xEA] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.regs.de.set_high(v); };
        t[0xEB] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.regs.de.set_low(v); };
        t[0xEC] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.regs.hl.set_high(v); };
        t[0xED] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.regs.hl.set_low(v); };
        t[0xEE] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.write8(c.idx_ptr, v); };
        t[0xEF] = |c| { let v = c.read8(c.idx_ptr) | 1 << 5; c.set_a(v); };
        t[0xF0] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.regs.bc.set_high(v); };
        t[0xF1] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.regs.bc.set_low(v); };
        t[0xF2] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.regs.de.set_high(v); };
        t[0xF3] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.regs.de.set_low(v); };
        t[0xF4] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.regs.hl.set_high(v); };
        t[0xF5] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.regs.hl.set_low(v); };
        t[0xF6] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.write8(c.idx_ptr, v); };
        t[0xF7] = |c| { let v = c.read8(c.idx_ptr) | 1 << 6; c.set_a(v); };
        t[0xF8] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.regs.bc.set_high(v); };
        t[0xF9] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.regs.bc.set_low(v); };
        t[0xFA] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.regs.de.set_high(v); };
        t[0xFB] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.regs.de.set_low(v); };
        t[0xFC] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.regs.hl.set_high(v); };
        t[0xFD] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.regs.hl.set_low(v); };
        t[0xFE] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.write8(c.idx_ptr, v); };
        t[0xFF] = |c| { let v = c.read8(c.idx_ptr) | 1 << 7; c.set_a(v); };

        t
    };
}
