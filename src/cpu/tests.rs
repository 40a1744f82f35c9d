use crate::bus::Bus;
use crate::cpu::cpu::Cpu;
use crate::cpu::flags::{
    FLAG_CARRY, FLAG_HALF_CARRY, FLAG_PARITY, FLAG_SIGN, FLAG_SUBTRACT, FLAG_ZERO,
};

/// Flat 64KB bus with scriptable I/O ports and a capture buffer for the
/// CALL trap tests.
struct TestBus {
    mem: [u8; 0x10000],
    ports_in: [u8; 256],
    ports_out: Vec<(u8, u8)>,
    console: Vec<u8>,
}

impl TestBus {
    fn new() -> Self {
        Self {
            mem: [0; 0x10000],
            ports_in: [0; 256],
            ports_out: Vec::new(),
            console: Vec::new(),
        }
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.mem[addr as usize] = data;
    }

    fn io_read(&mut self, port: u8) -> u8 {
        self.ports_in[port as usize]
    }

    fn io_write(&mut self, port: u8, data: u8) {
        self.ports_out.push((port, data));
    }
}

fn cpu_with(program: &[u8]) -> Cpu<TestBus> {
    let mut bus = TestBus::new();
    bus.mem[..program.len()].copy_from_slice(program);
    Cpu::new(bus)
}

fn f(cpu: &Cpu<TestBus>) -> u8 {
    cpu.regs.af.get_low()
}

fn a(cpu: &Cpu<TestBus>) -> u8 {
    cpu.regs.af.get_high()
}

const DOCUMENTED: u8 =
    FLAG_SIGN | FLAG_ZERO | FLAG_HALF_CARRY | FLAG_PARITY | FLAG_SUBTRACT | FLAG_CARRY;

// ---- 8-bit arithmetic and flags ----

#[test]
fn inc_a_plain() {
    let mut cpu = cpu_with(&[0x3C]); // INC A
    cpu.regs.af.set_high(0x42);
    cpu.step();
    assert_eq!(a(&cpu), 0x43);
    assert_eq!(f(&cpu) & DOCUMENTED, 0x00);
}

#[test]
fn inc_a_wraps_with_zero_and_half_carry() {
    let mut cpu = cpu_with(&[0x3C]);
    cpu.regs.af.set_high(0xFF);
    cpu.step();
    assert_eq!(a(&cpu), 0x00);
    assert_eq!(f(&cpu) & DOCUMENTED, FLAG_ZERO | FLAG_HALF_CARRY);
}

#[test]
fn inc_preserves_carry() {
    let mut cpu = cpu_with(&[0x3C]);
    cpu.regs.af.set16(0x41_00 | FLAG_CARRY as u16);
    cpu.step();
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
}

#[test]
fn dec_a_from_zero() {
    let mut cpu = cpu_with(&[0x3D]); // DEC A
    cpu.step();
    assert_eq!(a(&cpu), 0xFF);
    assert_eq!(
        f(&cpu) & DOCUMENTED,
        FLAG_SIGN | FLAG_HALF_CARRY | FLAG_SUBTRACT
    );
}

#[test]
fn sbc_a_b_without_carry() {
    let mut cpu = cpu_with(&[0x98]); // SBC A,B
    cpu.regs.af.set_high(0x40);
    cpu.regs.bc.set_high(0x10);
    cpu.step();
    assert_eq!(a(&cpu), 0x30);
    assert_eq!(f(&cpu) & DOCUMENTED, FLAG_SUBTRACT);
}

#[test]
fn add_overflow_at_sign_boundary() {
    let mut cpu = cpu_with(&[0xC6, 0x01]); // ADD A,$01
    cpu.regs.af.set_high(0x7F);
    cpu.step();
    assert_eq!(a(&cpu), 0x80);
    assert_eq!(
        f(&cpu) & DOCUMENTED,
        FLAG_SIGN | FLAG_HALF_CARRY | FLAG_PARITY
    );
}

#[test]
fn adc_includes_carry_in() {
    let mut cpu = cpu_with(&[0xCE, 0x00]); // ADC A,$00
    cpu.regs.af.set16(0xFF_00 | FLAG_CARRY as u16);
    cpu.step();
    assert_eq!(a(&cpu), 0x00);
    assert_ne!(f(&cpu) & FLAG_ZERO, 0);
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
}

#[test]
fn and_sets_half_carry() {
    let mut cpu = cpu_with(&[0xE6, 0xF0]); // AND $F0
    cpu.regs.af.set_high(0x0F);
    cpu.step();
    assert_eq!(a(&cpu), 0x00);
    assert_eq!(f(&cpu) & DOCUMENTED, FLAG_ZERO | FLAG_HALF_CARRY | FLAG_PARITY);
}

#[test]
fn parity_flag_tracks_popcount_for_every_value() {
    // OR n leaves A = n when A starts at zero, so P/V must report the
    // popcount parity of every possible result
    for value in 0..=255u8 {
        let mut cpu = cpu_with(&[0xF6, value]); // OR n
        cpu.step();
        let even = value.count_ones() % 2 == 0;
        assert_eq!(
            f(&cpu) & FLAG_PARITY != 0,
            even,
            "parity flag wrong for {value:#04x}"
        );
    }
}

#[test]
fn cp_leaves_accumulator() {
    let mut cpu = cpu_with(&[0xFE, 0x42]); // CP $42
    cpu.regs.af.set_high(0x42);
    cpu.step();
    assert_eq!(a(&cpu), 0x42);
    assert_ne!(f(&cpu) & FLAG_ZERO, 0);
    assert_ne!(f(&cpu) & FLAG_SUBTRACT, 0);
}

#[test]
fn daa_fixes_bcd_addition() {
    // 15 + 27 = 42 in BCD
    let mut cpu = cpu_with(&[0x3E, 0x15, 0xC6, 0x27, 0x27]);
    cpu.step();
    cpu.step();
    cpu.step();
    assert_eq!(a(&cpu), 0x42);
    assert_eq!(f(&cpu) & FLAG_CARRY, 0);
}

#[test]
fn neg_negates_accumulator() {
    let mut cpu = cpu_with(&[0xED, 0x44]); // NEG
    cpu.regs.af.set_high(0x01);
    cpu.step();
    assert_eq!(a(&cpu), 0xFF);
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
    assert_ne!(f(&cpu) & FLAG_SUBTRACT, 0);
}

// ---- 16-bit arithmetic ----

#[test]
fn sbc_hl_bc_overflow() {
    let mut cpu = cpu_with(&[0xED, 0x42]); // SBC HL,BC
    cpu.regs.hl.set16(0x8000);
    cpu.regs.bc.set16(0x0001);
    cpu.step();
    assert_eq!(cpu.regs.hl.get16(), 0x7FFF);
    assert_ne!(f(&cpu) & FLAG_PARITY, 0);
    assert_ne!(f(&cpu) & FLAG_SUBTRACT, 0);
    assert_eq!(f(&cpu) & (FLAG_SIGN | FLAG_ZERO | FLAG_CARRY), 0);
}

#[test]
fn add_hl_only_touches_carry_group() {
    let mut cpu = cpu_with(&[0x09]); // ADD HL,BC
    cpu.regs.af.set_low(FLAG_ZERO | FLAG_SIGN);
    cpu.regs.hl.set16(0xF000);
    cpu.regs.bc.set16(0x2000);
    cpu.step();
    assert_eq!(cpu.regs.hl.get16(), 0x1000);
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
    // S and Z pass through untouched
    assert_ne!(f(&cpu) & FLAG_ZERO, 0);
    assert_ne!(f(&cpu) & FLAG_SIGN, 0);
}

#[test]
fn adc_hl_sets_zero_on_zero_result() {
    let mut cpu = cpu_with(&[0xED, 0x4A]); // ADC HL,BC
    cpu.regs.hl.set16(0xFFFF);
    cpu.regs.bc.set16(0x0000);
    cpu.regs.af.set_low(FLAG_CARRY);
    cpu.step();
    assert_eq!(cpu.regs.hl.get16(), 0x0000);
    assert_ne!(f(&cpu) & FLAG_ZERO, 0);
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
}

// ---- rotates and CB ops ----

#[test]
fn rlca_touches_only_carry_group() {
    let mut cpu = cpu_with(&[0x07]); // RLCA
    cpu.regs.af.set16(0x80_00 | (FLAG_ZERO as u16));
    cpu.step();
    assert_eq!(a(&cpu), 0x01);
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
    assert_ne!(f(&cpu) & FLAG_ZERO, 0); // preserved
}

#[test]
fn cb_rlc_sets_szp() {
    let mut cpu = cpu_with(&[0xCB, 0x00]); // RLC B
    cpu.regs.bc.set_high(0x80);
    cpu.step();
    assert_eq!(cpu.regs.bc.get_high(), 0x01);
    let flags = f(&cpu);
    assert_ne!(flags & FLAG_CARRY, 0);
    assert_eq!(flags & (FLAG_SIGN | FLAG_ZERO | FLAG_PARITY), 0);
}

#[test]
fn cb_srl_shifts_into_carry() {
    let mut cpu = cpu_with(&[0xCB, 0x3F]); // SRL A
    cpu.regs.af.set_high(0x01);
    cpu.step();
    assert_eq!(a(&cpu), 0x00);
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
    assert_ne!(f(&cpu) & FLAG_ZERO, 0);
}

#[test]
fn bit_test_and_set_and_res() {
    let mut cpu = cpu_with(&[0xCB, 0x7F, 0xCB, 0xC7, 0xCB, 0x87]); // BIT 7,A / SET 0,A / RES 0,A
    cpu.regs.af.set_high(0x80);
    cpu.step();
    assert_eq!(f(&cpu) & FLAG_ZERO, 0);
    assert_ne!(f(&cpu) & FLAG_HALF_CARRY, 0);
    cpu.step();
    assert_eq!(a(&cpu), 0x81);
    cpu.step();
    assert_eq!(a(&cpu), 0x80);
}

#[test]
fn cb_ops_on_hl_pointer() {
    let mut cpu = cpu_with(&[0xCB, 0xC6]); // SET 0,(HL)
    cpu.regs.hl.set16(0x4000);
    cpu.bus.mem[0x4000] = 0x10;
    cpu.step();
    assert_eq!(cpu.bus.mem[0x4000], 0x11);
}

#[test]
fn rrd_rotates_nibbles_through_memory() {
    let mut cpu = cpu_with(&[0xED, 0x67]); // RRD
    cpu.regs.af.set_high(0x84);
    cpu.regs.hl.set16(0x4000);
    cpu.bus.mem[0x4000] = 0x20;
    cpu.step();
    assert_eq!(a(&cpu), 0x80);
    assert_eq!(cpu.bus.mem[0x4000], 0x42);
}

// ---- loads, exchanges, stack ----

#[test]
fn ld_16_roundtrip_through_memory() {
    let mut cpu = cpu_with(&[0x21, 0x34, 0x12, 0x22, 0x00, 0x40, 0x2A, 0x00, 0x40]);
    cpu.step(); // LD HL,$1234
    cpu.step(); // LD ($4000),HL
    assert_eq!(cpu.bus.mem[0x4000], 0x34);
    assert_eq!(cpu.bus.mem[0x4001], 0x12);
    cpu.regs.hl.set16(0);
    cpu.step(); // LD HL,($4000)
    assert_eq!(cpu.regs.hl.get16(), 0x1234);
}

#[test]
fn exchange_instructions() {
    let mut cpu = cpu_with(&[0xEB, 0xD9, 0x08]); // EX DE,HL / EXX / EX AF,AF'
    cpu.regs.de.set16(0x1111);
    cpu.regs.hl.set16(0x2222);
    cpu.step();
    assert_eq!(cpu.regs.de.get16(), 0x2222);
    assert_eq!(cpu.regs.hl.get16(), 0x1111);

    cpu.regs.bc.set16(0x3333);
    cpu.step();
    assert_eq!(cpu.regs.bc.get16(), 0x0000);
    assert_eq!(cpu.regs.bc_p.get16(), 0x3333);

    cpu.regs.af.set16(0x4444);
    cpu.step();
    assert_eq!(cpu.regs.af.get16(), 0x0000);
    assert_eq!(cpu.regs.af_p.get16(), 0x4444);
}

#[test]
fn push_pop_roundtrip() {
    let mut cpu = cpu_with(&[0xC5, 0xD1]); // PUSH BC / POP DE
    cpu.regs.bc.set16(0xBEEF);
    cpu.step();
    assert_eq!(cpu.regs.sp, 0xFFFD);
    cpu.step();
    assert_eq!(cpu.regs.de.get16(), 0xBEEF);
    assert_eq!(cpu.regs.sp, 0xFFFF);
}

#[test]
fn ex_sp_hl_swaps_stack_top() {
    let mut cpu = cpu_with(&[0xE3]); // EX (SP),HL
    cpu.regs.sp = 0x8000;
    cpu.regs.hl.set16(0x1234);
    cpu.bus.mem[0x8000] = 0x78;
    cpu.bus.mem[0x8001] = 0x56;
    cpu.step();
    assert_eq!(cpu.regs.hl.get16(), 0x5678);
    assert_eq!(cpu.bus.mem[0x8000], 0x34);
    assert_eq!(cpu.bus.mem[0x8001], 0x12);
}

// ---- control flow ----

#[test]
fn jr_taken_and_not_taken() {
    let mut cpu = cpu_with(&[0x28, 0x10]); // JR Z,+16
    let cycles = cpu.step(); // Z clear: fall through
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(cycles, 7);

    let mut cpu = cpu_with(&[0x28, 0x10]);
    cpu.regs.af.set_low(FLAG_ZERO);
    let cycles = cpu.step();
    assert_eq!(cpu.regs.pc, 0x0012);
    assert_eq!(cycles, 12);
}

#[test]
fn jr_backwards() {
    let mut cpu = cpu_with(&[0x00, 0x00, 0x18, 0xFC]); // JR -4
    cpu.regs.pc = 0x0002;
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x0000);
}

#[test]
fn djnz_loops_b_times() {
    let mut cpu = cpu_with(&[0x10, 0xFE]); // DJNZ -2 (tight loop)
    cpu.regs.bc.set_high(3);
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x0000);
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x0000);
    let cycles = cpu.step(); // B hits zero, falls through
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(cpu.regs.bc.get_high(), 0);
    assert_eq!(cycles, 12);
}

#[test]
fn call_and_ret() {
    let mut cpu = cpu_with(&[0xCD, 0x00, 0x40]); // CALL $4000
    cpu.bus.mem[0x4000] = 0xC9; // RET
    let cycles = cpu.step();
    assert_eq!(cycles, 17);
    assert_eq!(cpu.regs.pc, 0x4000);
    assert_eq!(cpu.regs.sp, 0xFFFD);
    assert_eq!(cpu.bus.mem[0xFFFD], 0x03); // return address low
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFF);
}

#[test]
fn conditional_call_not_taken() {
    let mut cpu = cpu_with(&[0xDC, 0x00, 0x40]); // CALL C,$4000
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFF);
}

#[test]
fn conditional_ret_checks_flag() {
    let mut cpu = cpu_with(&[0xC8]); // RET Z
    cpu.regs.sp = 0xFFFD;
    cpu.bus.mem[0xFFFD] = 0x00;
    cpu.bus.mem[0xFFFE] = 0x50;
    cpu.step(); // Z clear: no return
    assert_eq!(cpu.regs.pc, 0x0001);

    let mut cpu = cpu_with(&[0xC8]);
    cpu.regs.sp = 0xFFFD;
    cpu.bus.mem[0xFFFD] = 0x00;
    cpu.bus.mem[0xFFFE] = 0x50;
    cpu.regs.af.set_low(FLAG_ZERO);
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x5000);
}

#[test]
fn rst_pushes_and_vectors() {
    let mut cpu = cpu_with(&[0xFF]); // RST 38
    let cycles = cpu.step();
    assert_eq!(cycles, 11);
    assert_eq!(cpu.regs.pc, 0x0038);
    assert_eq!(cpu.regs.sp, 0xFFFD);
}

#[test]
fn jp_indirect_through_hl_and_ix() {
    let mut cpu = cpu_with(&[0xE9]); // JP (HL)
    cpu.regs.hl.set16(0x1234);
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x1234);

    let mut cpu = cpu_with(&[0xDD, 0xE9]); // JP (IX)
    cpu.regs.ix.set16(0x4321);
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x4321);
}

// ---- block instructions ----

#[test]
fn ldir_copies_block() {
    let mut cpu = cpu_with(&[0xED, 0xB0]); // LDIR
    cpu.bus.mem[0x1000..0x1003].copy_from_slice(&[1, 2, 3]);
    cpu.regs.hl.set16(0x1000);
    cpu.regs.de.set16(0x2000);
    cpu.regs.bc.set16(3);
    while cpu.regs.bc.get16() != 0 {
        cpu.step();
    }
    assert_eq!(&cpu.bus.mem[0x2000..0x2003], &[1, 2, 3]);
    assert_eq!(cpu.regs.hl.get16(), 0x1003);
    assert_eq!(cpu.regs.de.get16(), 0x2003);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(f(&cpu) & FLAG_PARITY, 0); // count exhausted
}

#[test]
fn cpir_stops_on_match() {
    let mut cpu = cpu_with(&[0xED, 0xB1]); // CPIR
    cpu.bus.mem[0x1000..0x1003].copy_from_slice(&[5, 6, 7]);
    cpu.regs.af.set_high(6);
    cpu.regs.hl.set16(0x1000);
    cpu.regs.bc.set16(8);
    cpu.step();
    cpu.step();
    assert_ne!(f(&cpu) & FLAG_ZERO, 0);
    assert_eq!(cpu.regs.hl.get16(), 0x1002);
    assert_eq!(cpu.regs.bc.get16(), 6);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn ini_reads_port_into_memory() {
    let mut cpu = cpu_with(&[0xED, 0xA2]); // INI
    cpu.bus.ports_in[0x42] = 0x99;
    cpu.regs.bc.set16(0x0342);
    cpu.regs.hl.set16(0x4000);
    cpu.step();
    assert_eq!(cpu.bus.mem[0x4000], 0x99);
    assert_eq!(cpu.regs.hl.get16(), 0x4001);
    assert_eq!(cpu.regs.bc.get_high(), 0x02);
}

#[test]
fn otir_streams_memory_to_port() {
    let mut cpu = cpu_with(&[0xED, 0xB3]); // OTIR
    cpu.bus.mem[0x4000..0x4002].copy_from_slice(&[0xAA, 0xBB]);
    cpu.regs.bc.set16(0x02BE);
    cpu.regs.hl.set16(0x4000);
    while cpu.regs.bc.get_high() != 0 {
        cpu.step();
    }
    assert_eq!(cpu.bus.ports_out, vec![(0xBE, 0xAA), (0xBE, 0xBB)]);
}

// ---- I/O ----

#[test]
fn out_n_a_and_in_a_n() {
    let mut cpu = cpu_with(&[0xD3, 0x7F, 0xDB, 0x7E]); // OUT ($7F),A / IN A,($7E)
    cpu.regs.af.set_high(0x5A);
    cpu.bus.ports_in[0x7E] = 0xC3;
    let cycles = cpu.step();
    assert_eq!(cycles, 11);
    assert_eq!(cpu.bus.ports_out, vec![(0x7F, 0x5A)]);
    cpu.step();
    assert_eq!(a(&cpu), 0xC3);
}

#[test]
fn in_r_c_sets_flags() {
    let mut cpu = cpu_with(&[0xED, 0x78]); // IN A,(C)
    cpu.regs.bc.set16(0x00BE);
    cpu.bus.ports_in[0xBE] = 0x80;
    cpu.step();
    assert_eq!(a(&cpu), 0x80);
    assert_ne!(f(&cpu) & FLAG_SIGN, 0);
    assert_eq!(f(&cpu) & (FLAG_ZERO | FLAG_PARITY | FLAG_SUBTRACT), 0);
}

// ---- index registers ----

#[test]
fn ld_ix_and_displaced_store() {
    let mut cpu = cpu_with(&[0xDD, 0x21, 0x00, 0x10, 0xDD, 0x36, 0x05, 0x77]);
    cpu.step(); // LD IX,$1000
    assert_eq!(cpu.regs.ix.get16(), 0x1000);
    cpu.step(); // LD (IX+5),$77
    assert_eq!(cpu.bus.mem[0x1005], 0x77);
}

#[test]
fn negative_displacement() {
    let mut cpu = cpu_with(&[0xFD, 0x7E, 0xFE]); // LD A,(IY-2)
    cpu.regs.iy.set16(0x1000);
    cpu.bus.mem[0x0FFE] = 0x42;
    cpu.step();
    assert_eq!(a(&cpu), 0x42);
}

#[test]
fn ixh_ixl_are_addressable() {
    let mut cpu = cpu_with(&[0xDD, 0x26, 0x12, 0xDD, 0x2E, 0x34, 0xDD, 0x84]);
    cpu.step(); // LD IXH,$12
    cpu.step(); // LD IXL,$34
    assert_eq!(cpu.regs.ix.get16(), 0x1234);
    cpu.step(); // ADD A,IXH
    assert_eq!(a(&cpu), 0x12);
}

#[test]
fn inc_displaced_memory() {
    let mut cpu = cpu_with(&[0xDD, 0x34, 0x03]); // INC (IX+3)
    cpu.regs.ix.set16(0x2000);
    cpu.bus.mem[0x2003] = 0x0F;
    cpu.step();
    assert_eq!(cpu.bus.mem[0x2003], 0x10);
    assert_ne!(f(&cpu) & FLAG_HALF_CARRY, 0);
}

#[test]
fn ddcb_rotate_writes_memory() {
    let mut cpu = cpu_with(&[0xDD, 0xCB, 0x03, 0x06]); // RLC (IX+3)
    cpu.regs.ix.set16(0x1000);
    cpu.bus.mem[0x1003] = 0x81;
    cpu.step();
    assert_eq!(cpu.bus.mem[0x1003], 0x03);
    assert_ne!(f(&cpu) & FLAG_CARRY, 0);
}

#[test]
fn ddcb_register_variant_copies_result() {
    // RLC (IX+3) into B: result lands in B, memory is left alone
    let mut cpu = cpu_with(&[0xDD, 0xCB, 0x03, 0x00]);
    cpu.regs.ix.set16(0x1000);
    cpu.bus.mem[0x1003] = 0x81;
    cpu.step();
    assert_eq!(cpu.regs.bc.get_high(), 0x03);
    assert_eq!(cpu.bus.mem[0x1003], 0x81);
}

#[test]
fn fd_prefix_selects_iy() {
    let mut cpu = cpu_with(&[0xFD, 0x21, 0xCD, 0xAB]); // LD IY,$ABCD
    cpu.step();
    assert_eq!(cpu.regs.iy.get16(), 0xABCD);
    assert_eq!(cpu.regs.ix.get16(), 0x0000);
}

// ---- interrupts ----

#[test]
fn mode1_interrupt_vectors_to_38() {
    let mut cpu = cpu_with(&[0x00]);
    cpu.iff1 = true;
    cpu.iff2 = true;
    cpu.int_mode = 1;
    cpu.regs.pc = 0x1234;
    cpu.set_irq_line(true);
    let cycles = cpu.poll_interrupt();
    assert_eq!(cycles, 13);
    assert_eq!(cpu.regs.pc, 0x0038);
    assert_eq!(cpu.regs.sp, 0xFFFD);
    assert_eq!(cpu.bus.mem[0xFFFD], 0x34);
    assert_eq!(cpu.bus.mem[0xFFFE], 0x12);
    assert!(!cpu.iff1);
    assert!(!cpu.iff2);

    // The line was released by the acknowledge
    assert_eq!(cpu.poll_interrupt(), 0);
}

#[test]
fn interrupt_masked_when_disabled() {
    let mut cpu = cpu_with(&[0x00]);
    cpu.int_mode = 1;
    cpu.set_irq_line(true);
    assert_eq!(cpu.poll_interrupt(), 0);
    assert_eq!(cpu.regs.pc, 0x0000);
    // The attempt still releases the line
    cpu.iff1 = true;
    assert_eq!(cpu.poll_interrupt(), 0);
}

#[test]
fn ei_di_toggle_both_flip_flops() {
    let mut cpu = cpu_with(&[0xFB, 0xF3]); // EI / DI
    cpu.step();
    assert!(cpu.iff1 && cpu.iff2);
    cpu.step();
    assert!(!cpu.iff1 && !cpu.iff2);
}

#[test]
fn halt_stops_until_interrupt() {
    let mut cpu = cpu_with(&[0x76]); // HALT
    cpu.step();
    assert!(cpu.halted);
    assert_eq!(cpu.run_cycles(228), 0);

    cpu.iff1 = true;
    cpu.int_mode = 1;
    cpu.set_irq_line(true);
    cpu.run_cycles(228);
    assert!(!cpu.halted);
    assert_eq!(cpu.bus.mem[0xFFFD], 0x01); // resumes after the HALT
}

#[test]
fn im_instructions_set_mode() {
    let mut cpu = cpu_with(&[0xED, 0x56, 0xED, 0x5E, 0xED, 0x46]);
    cpu.step();
    assert_eq!(cpu.int_mode, 1);
    cpu.step();
    assert_eq!(cpu.int_mode, 2);
    cpu.step();
    assert_eq!(cpu.int_mode, 0);
}

#[test]
fn ld_a_i_reports_iff2() {
    let mut cpu = cpu_with(&[0xED, 0x57]); // LD A,I
    cpu.regs.i = 0x00;
    cpu.iff2 = true;
    cpu.step();
    assert_eq!(a(&cpu), 0x00);
    assert_ne!(f(&cpu) & FLAG_ZERO, 0);
    assert_ne!(f(&cpu) & FLAG_PARITY, 0);
}

// ---- cycle accounting ----

#[test]
fn basic_instruction_timings() {
    let mut cpu = cpu_with(&[0x00]); // NOP
    assert_eq!(cpu.step(), 4);

    let mut cpu = cpu_with(&[0x3E, 0x42]); // LD A,n
    assert_eq!(cpu.step(), 7);

    let mut cpu = cpu_with(&[0x01, 0x00, 0x00]); // LD BC,nn
    assert_eq!(cpu.step(), 10);

    let mut cpu = cpu_with(&[0x03]); // INC BC
    assert_eq!(cpu.step(), 6);

    let mut cpu = cpu_with(&[0x09]); // ADD HL,BC
    assert_eq!(cpu.step(), 11);

    let mut cpu = cpu_with(&[0xC5]); // PUSH BC
    assert_eq!(cpu.step(), 11);

    let mut cpu = cpu_with(&[0x36, 0x42]); // LD (HL),n
    cpu.regs.hl.set16(0x4000);
    assert_eq!(cpu.step(), 10);
}

#[test]
fn cycles_accumulate_across_steps() {
    let mut cpu = cpu_with(&[0x00, 0x00, 0x00]);
    cpu.step();
    cpu.step();
    cpu.step();
    assert_eq!(cpu.cycles, 12);
}

#[test]
fn run_cycles_overshoots_then_reports() {
    let mut cpu = cpu_with(&[0x00; 64]);
    let spent = cpu.run_cycles(10); // three NOPs: 4 + 4 + 4
    assert_eq!(spent, 12);
}

// ---- fatal opcodes ----

#[test]
fn unimplemented_opcode_stops_core() {
    let mut cpu = cpu_with(&[0xED, 0x00]);
    cpu.step();
    assert!(!cpu.running);
    assert_eq!(cpu.step(), 0);
}

#[test]
fn unimplemented_indexed_opcode_stops_core() {
    let mut cpu = cpu_with(&[0xDD, 0x76]); // HALT has no DD form here
    cpu.step();
    assert!(!cpu.running);
}

// ---- CALL trap ----

fn bdos_trap(cpu: &mut Cpu<TestBus>, target: u16) -> bool {
    if target != 0x0005 {
        return false;
    }
    if cpu.regs.bc.get_low() == 2 {
        let ch = cpu.regs.de.get_low();
        cpu.bus.console.push(ch);
    }
    true
}

#[test]
fn call_trap_swallows_the_call() {
    let mut cpu = cpu_with(&[
        0x0E, 0x02, // LD C,2
        0x1E, b'A', // LD E,'A'
        0xCD, 0x05, 0x00, // CALL $0005
        0x76, // HALT
    ]);
    cpu.call_trap = Some(bdos_trap);
    while !cpu.halted {
        cpu.step();
    }
    assert_eq!(cpu.bus.console, b"A");
    // Swallowed: nothing pushed, execution continued past the CALL
    assert_eq!(cpu.regs.sp, 0xFFFF);
}

#[test]
fn call_trap_passes_other_targets_through() {
    let mut cpu = cpu_with(&[0xCD, 0x00, 0x40]); // CALL $4000
    cpu.call_trap = Some(bdos_trap);
    cpu.step();
    assert_eq!(cpu.regs.pc, 0x4000);
    assert_eq!(cpu.regs.sp, 0xFFFD);
}
