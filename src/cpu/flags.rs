//! Z80 flag register (F) bits and flag computation.
//!
//! Pure functions: take the current F byte and the operands, return the
//! result and/or the new F. Only the bits each instruction actually touches
//! are modified; everything else passes through (INC/DEC never touch carry,
//! the accumulator rotates never touch S/Z/P, and so on). Undocumented bits
//! 3 and 5 are copied from the result where the hardware does.

pub const FLAG_CARRY: u8 = 1 << 0;
pub const FLAG_SUBTRACT: u8 = 1 << 1;
pub const FLAG_PARITY: u8 = 1 << 2; // Parity/overflow (P/V)
pub const FLAG_BIT3: u8 = 1 << 3;   // Undocumented copy of result bit 3
pub const FLAG_HALF_CARRY: u8 = 1 << 4;
pub const FLAG_BIT5: u8 = 1 << 5;   // Undocumented copy of result bit 5
pub const FLAG_ZERO: u8 = 1 << 6;
pub const FLAG_SIGN: u8 = 1 << 7;

const NIBBLE_LOW: u8 = 0x0F;

const PARITY: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).count_ones() % 2 == 0;
        i += 1;
    }
    table
};

/// True when `value` has an even number of set bits.
pub fn parity_even(value: u8) -> bool {
    PARITY[value as usize]
}

fn set_if(f: u8, mask: u8, condition: bool) -> u8 {
    if condition { f | mask } else { f & !mask }
}

fn copy_35(f: u8, result: u8) -> u8 {
    let f = set_if(f, FLAG_BIT3, result & FLAG_BIT3 != 0);
    set_if(f, FLAG_BIT5, result & FLAG_BIT5 != 0)
}

/// INC r: carry is preserved; overflow only at the 0x7F boundary.
pub fn inc8(f: u8, original: u8) -> (u8, u8) {
    let result = original.wrapping_add(1);
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_SIGN, result & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(f, FLAG_HALF_CARRY, original & NIBBLE_LOW == 0x0F);
    let f = set_if(f, FLAG_PARITY, original == 0x7F);
    (result, copy_35(f, result))
}

/// DEC r: carry is preserved; overflow only at the 0x80 boundary.
pub fn dec8(f: u8, original: u8) -> (u8, u8) {
    let result = original.wrapping_sub(1);
    let f = set_if(f, FLAG_SUBTRACT, true);
    let f = set_if(f, FLAG_SIGN, result & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(f, FLAG_HALF_CARRY, original & NIBBLE_LOW == 0x00);
    let f = set_if(f, FLAG_PARITY, original == 0x80);
    (result, copy_35(f, result))
}

pub fn add8(f: u8, a: u8, b: u8) -> (u8, u8) {
    let result = a as u16 + b as u16;
    let r = result as u8;
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_SIGN, r & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, r == 0);
    let f = set_if(f, FLAG_HALF_CARRY, (a & NIBBLE_LOW) + (b & NIBBLE_LOW) > NIBBLE_LOW);
    let f = set_if(f, FLAG_PARITY, (a ^ r) & (b ^ r) & 0x80 != 0);
    let f = set_if(f, FLAG_CARRY, result > 0xFF);
    (r, copy_35(f, r))
}

pub fn sub8(f: u8, a: u8, b: u8) -> (u8, u8) {
    let r = a.wrapping_sub(b);
    let f = set_if(f, FLAG_SUBTRACT, true);
    let f = set_if(f, FLAG_SIGN, r & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, r == 0);
    let f = set_if(f, FLAG_HALF_CARRY, a & NIBBLE_LOW < b & NIBBLE_LOW);
    let f = set_if(f, FLAG_PARITY, (a ^ b) & (a ^ r) & 0x80 != 0);
    let f = set_if(f, FLAG_CARRY, a < b);
    (r, copy_35(f, r))
}

pub fn adc8(f: u8, a: u8, b: u8) -> (u8, u8) {
    let carry = (f & FLAG_CARRY) as u16;
    let result = a as u16 + b as u16 + carry;
    let r = result as u8;
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_SIGN, r & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, r == 0);
    let f = set_if(
        f,
        FLAG_HALF_CARRY,
        (a & NIBBLE_LOW) as u16 + (b & NIBBLE_LOW) as u16 + carry > NIBBLE_LOW as u16,
    );
    let f = set_if(f, FLAG_PARITY, (a ^ r) & (b ^ r) & 0x80 != 0);
    let f = set_if(f, FLAG_CARRY, result > 0xFF);
    (r, copy_35(f, r))
}

pub fn sbc8(f: u8, a: u8, b: u8) -> (u8, u8) {
    let carry = (f & FLAG_CARRY) as u16;
    let r = (a as u16).wrapping_sub(b as u16).wrapping_sub(carry) as u8;
    let f = set_if(f, FLAG_SUBTRACT, true);
    let f = set_if(f, FLAG_SIGN, r & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, r == 0);
    let f = set_if(
        f,
        FLAG_HALF_CARRY,
        ((a & NIBBLE_LOW) as u16) < (b & NIBBLE_LOW) as u16 + carry,
    );
    let f = set_if(f, FLAG_PARITY, (a ^ b) & (a ^ r) & 0x80 != 0);
    let f = set_if(f, FLAG_CARRY, (a as u16) < b as u16 + carry);
    (r, copy_35(f, r))
}

/// ADD HL,rr / ADD IX,rr: only H, C, N and the high-byte 3/5 copies.
pub fn add16(f: u8, a: u16, b: u16) -> (u16, u8) {
    let result = a.wrapping_add(b);
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_HALF_CARRY, (a & 0x0FFF) + (b & 0x0FFF) > 0x0FFF);
    let f = set_if(f, FLAG_CARRY, a as u32 + b as u32 > 0xFFFF);
    (result, copy_35(f, (result >> 8) as u8))
}

pub fn adc16(f: u8, a: u16, b: u16) -> (u16, u8) {
    let carry = (f & FLAG_CARRY) as u32;
    let result = (a as u32).wrapping_add(b as u32).wrapping_add(carry) as u16;
    let f = set_if(f, FLAG_SIGN, result & 0x8000 != 0);
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(
        f,
        FLAG_HALF_CARRY,
        (a & 0x0FFF) as u32 + (b & 0x0FFF) as u32 + carry > 0x0FFF,
    );
    let f = set_if(f, FLAG_PARITY, (a ^ result) & (b ^ result) & 0x8000 != 0);
    let f = set_if(f, FLAG_CARRY, a as u32 + b as u32 + carry > 0xFFFF);
    (result, copy_35(f, result as u8))
}

pub fn sbc16(f: u8, a: u16, b: u16) -> (u16, u8) {
    let carry = (f & FLAG_CARRY) as u32;
    let result = (a as u32).wrapping_sub(b as u32).wrapping_sub(carry) as u16;
    let f = set_if(f, FLAG_SUBTRACT, true);
    let f = set_if(f, FLAG_SIGN, result & 0x8000 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(
        f,
        FLAG_HALF_CARRY,
        ((a & 0x0FFF) as u32) < (b & 0x0FFF) as u32 + carry,
    );
    let f = set_if(f, FLAG_PARITY, (a ^ b) & (a ^ result) & 0x8000 != 0);
    let f = set_if(f, FLAG_CARRY, (a as u32) < b as u32 + carry);
    (result, copy_35(f, (result >> 8) as u8))
}

/// AND: H is set, C cleared.
pub fn and8(f: u8, result: u8) -> u8 {
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_CARRY, false);
    let f = set_if(f, FLAG_HALF_CARRY, true);
    let f = set_if(f, FLAG_SIGN, result & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(f, FLAG_PARITY, parity_even(result));
    copy_35(f, result)
}

/// OR/XOR: H and C both cleared.
pub fn or_xor8(f: u8, result: u8) -> u8 {
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_CARRY, false);
    let f = set_if(f, FLAG_SIGN, result & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(f, FLAG_PARITY, parity_even(result));
    copy_35(f, result)
}

/// LDI/LDD/LDIR/LDDR: P/V tracks the remaining count.
pub fn block_transfer(f: u8, bc_after: u16) -> u8 {
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_PARITY, bc_after != 0);
    copy_35(f, (bc_after >> 8) as u8)
}

/// CPI/CPD/CPIR/CPDR: compare without carry, P/V tracks the count.
pub fn block_compare(f: u8, a: u8, value: u8, bc_after: u16) -> u8 {
    let result = a.wrapping_sub(value);
    let f = set_if(f, FLAG_SIGN, result & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(f, FLAG_HALF_CARRY, a & NIBBLE_LOW < value & NIBBLE_LOW);
    let f = set_if(f, FLAG_PARITY, bc_after != 0);
    set_if(f, FLAG_SUBTRACT, true)
}

/// INI/IND/OUTI/OUTD and repeats.
pub fn block_io(f: u8) -> u8 {
    f | FLAG_ZERO | FLAG_SUBTRACT
}

/// RLCA/RRCA/RLA/RRA touch only C, H and N; S/Z/P are preserved.
pub fn rlca(f: u8, a: u8) -> (u8, u8) {
    let carry = (a >> 7) & 1;
    let result = (a << 1) | carry;
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_SUBTRACT, false);
    (result, set_if(f, FLAG_CARRY, carry != 0))
}

pub fn rrca(f: u8, a: u8) -> (u8, u8) {
    let carry = a & 1;
    let result = (carry << 7) | (a >> 1);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_SUBTRACT, false);
    (result, set_if(f, FLAG_CARRY, carry != 0))
}

pub fn rla(f: u8, a: u8) -> (u8, u8) {
    let carry_in = f & FLAG_CARRY;
    let result = (a << 1) | carry_in;
    let f = set_if(f, FLAG_CARRY, a & 0x80 != 0);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    (result, set_if(f, FLAG_SUBTRACT, false))
}

pub fn rra(f: u8, a: u8) -> (u8, u8) {
    let carry_in = f & FLAG_CARRY;
    let result = (a >> 1) | (carry_in << 7);
    let f = set_if(f, FLAG_CARRY, a & 0x01 != 0);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    (result, set_if(f, FLAG_SUBTRACT, false))
}

fn shift_flags(f: u8, result: u8, carry: bool) -> u8 {
    let f = set_if(f, FLAG_SIGN, result & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_PARITY, parity_even(result));
    let f = set_if(f, FLAG_SUBTRACT, false);
    set_if(f, FLAG_CARRY, carry)
}

/// CB-prefixed rotates and shifts set the full S/Z/P group.
pub fn rlc(f: u8, v: u8) -> (u8, u8) {
    let result = v.rotate_left(1);
    (result, shift_flags(f, result, v & 0x80 != 0))
}

pub fn rrc(f: u8, v: u8) -> (u8, u8) {
    let result = v.rotate_right(1);
    (result, shift_flags(f, result, v & 0x01 != 0))
}

pub fn rl(f: u8, v: u8) -> (u8, u8) {
    let result = (v << 1) | (f & FLAG_CARRY);
    (result, shift_flags(f, result, v & 0x80 != 0))
}

pub fn rr(f: u8, v: u8) -> (u8, u8) {
    let result = (v >> 1) | ((f & FLAG_CARRY) << 7);
    (result, shift_flags(f, result, v & 0x01 != 0))
}

pub fn sla(f: u8, v: u8) -> (u8, u8) {
    let result = v << 1;
    (result, shift_flags(f, result, v & 0x80 != 0))
}

pub fn sra(f: u8, v: u8) -> (u8, u8) {
    let result = (v >> 1) | (v & 0x80);
    (result, shift_flags(f, result, v & 0x01 != 0))
}

/// Undocumented SLL: shifts left, bit 0 set.
pub fn sll(f: u8, v: u8) -> (u8, u8) {
    let result = (v << 1) | 0x01;
    (result, shift_flags(f, result, v & 0x80 != 0))
}

pub fn srl(f: u8, v: u8) -> (u8, u8) {
    let result = v >> 1;
    (result, shift_flags(f, result, v & 0x01 != 0))
}

/// BIT b,r: Z from the tested bit, H set, N cleared; C preserved.
pub fn bit(f: u8, bit: u8, v: u8) -> u8 {
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_HALF_CARRY, true);
    set_if(f, FLAG_ZERO, v >> bit & 1 == 0)
}

pub fn cpl(f: u8, a: u8) -> (u8, u8) {
    (!a, f | FLAG_HALF_CARRY | FLAG_SUBTRACT)
}

pub fn ccf(f: u8) -> u8 {
    let old_carry = f & FLAG_CARRY != 0;
    let f = set_if(f, FLAG_SUBTRACT, false);
    let f = set_if(f, FLAG_HALF_CARRY, old_carry);
    set_if(f, FLAG_CARRY, !old_carry)
}

pub fn scf(f: u8) -> u8 {
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_SUBTRACT, false);
    f | FLAG_CARRY
}

/// RRD/RLD: flags from the accumulator after the digit rotate.
pub fn rotate_digit(f: u8, a: u8) -> u8 {
    let f = set_if(f, FLAG_SIGN, a & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, a == 0);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_PARITY, parity_even(a));
    set_if(f, FLAG_SUBTRACT, false)
}

/// LD A,I / LD A,R: P/V reports IFF2.
pub fn ld_a_ir(f: u8, value: u8, iff2: bool) -> u8 {
    let f = set_if(f, FLAG_SIGN, value & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, value == 0);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_PARITY, iff2);
    set_if(f, FLAG_SUBTRACT, false)
}

/// IN r,(C): S/Z/P from the byte read, H and N cleared; C preserved.
pub fn io_in(f: u8, value: u8) -> u8 {
    let f = set_if(f, FLAG_SIGN, value & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, value == 0);
    let f = set_if(f, FLAG_HALF_CARRY, false);
    let f = set_if(f, FLAG_PARITY, parity_even(value));
    set_if(f, FLAG_SUBTRACT, false)
}

/// DAA: BCD correction keyed off N, H, C and both nibbles.
pub fn daa(f: u8, a: u8) -> (u8, u8) {
    let mut correction = 0x00u8;
    let mut carry_out = false;
    let half_carry_out;
    let result;

    if f & FLAG_SUBTRACT != 0 {
        if f & FLAG_HALF_CARRY != 0 || a & 0x0F > 0x09 {
            correction += 0x06;
        }
        if f & FLAG_CARRY != 0 || a > 0x99 {
            correction += 0x60;
            carry_out = true;
        }
        result = a.wrapping_sub(correction);
        half_carry_out = a & 0x0F < correction & 0x0F;
    } else {
        if f & FLAG_HALF_CARRY != 0 || a & 0x0F > 0x09 {
            correction += 0x06;
        }
        if f & FLAG_CARRY != 0 || a > 0x99 || (a > 0x8F && a & 0x0F > 0x09) {
            correction += 0x60;
            carry_out = true;
        }
        result = a.wrapping_add(correction);
        half_carry_out = (a & 0x0F) + (correction & 0x0F) > 0x0F;
    }

    let f = set_if(f, FLAG_CARRY, carry_out);
    let f = set_if(f, FLAG_HALF_CARRY, half_carry_out);
    let f = set_if(f, FLAG_SIGN, result & 0x80 != 0);
    let f = set_if(f, FLAG_ZERO, result == 0);
    let f = set_if(f, FLAG_PARITY, parity_even(result));
    (result, f)
}
