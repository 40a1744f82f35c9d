use crate::vdp::vdp::{Vdp, FRAME_HEIGHT, FRAME_WIDTH, SCANLINES_PER_FRAME};

const CONTROL: u8 = 0xBF;
const DATA: u8 = 0xBE;

fn frame() -> Vec<u32> {
    vec![0u32; FRAME_WIDTH * FRAME_HEIGHT]
}

/// Issue a two-byte control command: code in the top bits of `hi`.
fn command(vdp: &mut Vdp, lo: u8, hi: u8) {
    vdp.port_write(CONTROL, lo);
    vdp.port_write(CONTROL, hi);
}

#[test]
fn register_write_through_control_port() {
    let mut vdp = Vdp::new();
    command(&mut vdp, 0x60, 0x80 | 1);
    assert_eq!(vdp.registers[1], 0x60);
    assert!(vdp.display_enable);
    assert!(vdp.frame_interrupt_enable);
}

#[test]
fn high_registers_are_retained() {
    // Registers 11-15 decode to nothing, but the full sixteen-entry file
    // still stores them
    let mut vdp = Vdp::new();
    command(&mut vdp, 0x55, 0x80 | 12);
    command(&mut vdp, 0xAA, 0x80 | 15);
    assert_eq!(vdp.registers[12], 0x55);
    assert_eq!(vdp.registers[15], 0xAA);
    assert!(!vdp.display_enable);
}

#[test]
fn vram_write_autoincrements() {
    let mut vdp = Vdp::new();
    command(&mut vdp, 0x00, 0x40 | 0x01); // write address $0100
    vdp.port_write(DATA, 0xAA);
    vdp.port_write(DATA, 0xBB);
    assert_eq!(vdp.vram[0x0100], 0xAA);
    assert_eq!(vdp.vram[0x0101], 0xBB);
}

#[test]
fn vram_read_is_buffered() {
    let mut vdp = Vdp::new();
    vdp.vram[0x0200] = 0x11;
    vdp.vram[0x0201] = 0x22;
    vdp.vram[0x0202] = 0x33;
    command(&mut vdp, 0x00, 0x02); // read address $0200
    assert_eq!(vdp.port_read(DATA), 0x11);
    assert_eq!(vdp.port_read(DATA), 0x22);
    assert_eq!(vdp.port_read(DATA), 0x33);
}

#[test]
fn vram_address_wraps() {
    let mut vdp = Vdp::new();
    command(&mut vdp, 0xFF, 0x40 | 0x3F); // write address $3FFF
    vdp.port_write(DATA, 0x5A);
    vdp.port_write(DATA, 0xA5);
    assert_eq!(vdp.vram[0x3FFF], 0x5A);
    assert_eq!(vdp.vram[0x0000], 0xA5);
}

#[test]
fn cram_write_is_masked_to_palette() {
    let mut vdp = Vdp::new();
    command(&mut vdp, 0x00, 0xC0); // CRAM write, address 0
    vdp.port_write(DATA, 0x03);
    vdp.port_write(DATA, 0x30);
    assert_eq!(vdp.cram[0], 0x03);
    assert_eq!(vdp.cram[1], 0x30);
}

#[test]
fn data_access_resets_control_latch() {
    let mut vdp = Vdp::new();
    // A stray first control byte followed by a data access must not leave
    // the latch half-set
    vdp.port_write(CONTROL, 0x12);
    vdp.port_read(DATA);
    command(&mut vdp, 0x55, 0x80 | 7);
    assert_eq!(vdp.registers[7], 0x55);
}

#[test]
fn frame_interrupt_raised_at_vblank() {
    let mut vdp = Vdp::new();
    let mut fb = frame();
    vdp.write_register(1, 0x20); // frame interrupts on, display off
    for _ in 0..FRAME_HEIGHT {
        vdp.process_scanline(&mut fb);
    }
    assert_eq!(vdp.v_counter, FRAME_HEIGHT as u16);
    assert!(vdp.interrupt_pending());

    // Status read reports VBlank and clears the request
    let status = vdp.port_read(CONTROL);
    assert_ne!(status & 0x80, 0);
    assert!(!vdp.interrupt_pending());
    assert_eq!(vdp.port_read(CONTROL) & 0x80, 0);
}

#[test]
fn frame_interrupt_masked_when_disabled() {
    let mut vdp = Vdp::new();
    let mut fb = frame();
    for _ in 0..FRAME_HEIGHT {
        vdp.process_scanline(&mut fb);
    }
    assert!(!vdp.interrupt_pending());
}

#[test]
fn line_interrupt_follows_reload_counter() {
    let mut vdp = Vdp::new();
    let mut fb = frame();
    vdp.write_register(0, 0x10); // line interrupts on
    vdp.write_register(10, 2);

    // Counter starts at zero: the first active line reloads and fires
    vdp.process_scanline(&mut fb);
    assert!(vdp.interrupt_pending());
    vdp.port_read(CONTROL);

    // Two more lines count down, the third fires again
    vdp.process_scanline(&mut fb);
    vdp.process_scanline(&mut fb);
    assert!(!vdp.interrupt_pending());
    vdp.process_scanline(&mut fb);
    assert!(vdp.interrupt_pending());
}

#[test]
fn v_counter_wraps_after_full_frame() {
    let mut vdp = Vdp::new();
    let mut fb = frame();
    for _ in 0..SCANLINES_PER_FRAME {
        vdp.process_scanline(&mut fb);
    }
    assert_eq!(vdp.v_counter, SCANLINES_PER_FRAME);
    vdp.process_scanline(&mut fb);
    assert_eq!(vdp.v_counter, 1);
}

#[test]
fn counter_ports() {
    let mut vdp = Vdp::new();
    let mut fb = frame();
    for _ in 0..5 {
        vdp.process_scanline(&mut fb);
    }
    assert_eq!(vdp.port_read(0x7E), 5);
    assert_eq!(vdp.port_read(0x7F), 0);
}

#[test]
fn renders_background_tile_row() {
    let mut vdp = Vdp::new();
    let mut fb = frame();

    // Palette: entry 0 black, entry 1 full red
    vdp.cram[0] = 0x00;
    vdp.cram[1] = 0x03;

    // Tile 1: bitplane 0 solid across all 8 rows, color index 1
    for row in 0..8 {
        vdp.vram[32 + row * 4] = 0xFF;
    }
    // Name table entry (0,0): tile 1, no attributes
    vdp.vram[0x3800] = 1;
    vdp.vram[0x3801] = 0;

    vdp.write_register(1, 0x40); // display on
    vdp.process_scanline(&mut fb); // draws line 1

    for x in 0..8 {
        assert_eq!(fb[FRAME_WIDTH + x], 0xFFFF_0000);
    }
    // Next tile column is still tile 0 (all-transparent, palette entry 0)
    assert_eq!(fb[FRAME_WIDTH + 8], 0xFF00_0000);
}

#[test]
fn horizontal_scroll_shifts_background() {
    let mut vdp = Vdp::new();
    let mut fb = frame();

    vdp.cram[1] = 0x03;
    for row in 0..8 {
        vdp.vram[32 + row * 4] = 0xFF;
    }
    vdp.vram[0x3800] = 1;

    vdp.write_register(1, 0x40);
    vdp.write_register(8, 4); // fine scroll of 4 pixels
    vdp.process_scanline(&mut fb);

    // Fine scroll shifts the tile 4 pixels left, wrapping at the edge
    assert_eq!(fb[FRAME_WIDTH], 0xFFFF_0000);
    assert_eq!(fb[FRAME_WIDTH + 3], 0xFFFF_0000);
    assert_eq!(fb[FRAME_WIDTH + 4], 0xFF00_0000);
    assert_eq!(fb[FRAME_WIDTH + 252], 0xFFFF_0000);
    assert_eq!(fb[FRAME_WIDTH + 255], 0xFFFF_0000);
}
