//! VDP state machine and Mode 4 renderer.
//!
//! The control port is a two-byte latch: the first write holds the low
//! half of the command word, the second decodes address and code. Reads
//! through the data port go through a one-byte buffer, so the first read
//! after setting an address returns the prefetched byte.

pub const FRAME_WIDTH: usize = 256;
pub const FRAME_HEIGHT: usize = 192;

/// NTSC scanlines per frame.
pub const SCANLINES_PER_FRAME: u16 = 262;

const VRAM_SIZE: usize = 0x4000;
const CRAM_SIZE: usize = 0x40;
const NAME_TABLE_BASE: u16 = 0x3800;

/// Background wraps at 224 lines (28 tile rows) in the 192-line mode.
const BG_HEIGHT: u16 = 224;

pub struct Vdp {
    pub vram: [u8; VRAM_SIZE],
    pub cram: [u8; CRAM_SIZE],
    pub registers: [u8; 16],

    // Control port latch
    second_write: bool,
    control_word: u16,
    address: u16,
    code: u8,
    read_buffer: u8,

    // Status flags
    vblank_flag: bool,
    sprite_overflow_flag: bool,
    sprite_collision_flag: bool,
    fifth_sprite: u8,
    irq_pending: bool,

    pub v_counter: u16,
    pub h_counter: u8,
    line_counter: u8,

    // Register 0
    pub vertical_scroll_lock: bool,
    pub horizontal_scroll_lock: bool,
    pub hide_left_column: bool,
    pub line_interrupt_enable: bool,
    pub shift_sprites_left: bool,
    pub mode4_enable: bool,
    pub extra_height_enable: bool,
    pub sync_disable: bool,

    // Register 1
    pub display_enable: bool,
    pub frame_interrupt_enable: bool,
    pub mode1_enable: bool,
    pub mode3_enable: bool,
    pub sprite_size: bool,
    pub sprite_doubled: bool,

    // Registers 2-10
    pub name_table_base: u8,
    pub color_table_base: u8,
    pub pattern_gen_base: u8,
    pub sprite_attr_base: u8,
    pub sprite_pattern_base: u8,
    pub backdrop_color: u8,
    pub bg_x_scroll: u8,
    pub bg_y_scroll: u8,
    pub line_counter_reload: u8,
}

impl Vdp {
    pub fn new() -> Self {
        Self {
            vram: [0; VRAM_SIZE],
            cram: [0; CRAM_SIZE],
            registers: [0; 16],
            second_write: false,
            control_word: 0,
            address: 0,
            code: 0,
            read_buffer: 0,
            vblank_flag: false,
            sprite_overflow_flag: false,
            sprite_collision_flag: false,
            fifth_sprite: 0,
            irq_pending: false,
            v_counter: 0,
            h_counter: 0,
            line_counter: 0,
            vertical_scroll_lock: false,
            horizontal_scroll_lock: false,
            hide_left_column: false,
            line_interrupt_enable: false,
            shift_sprites_left: false,
            mode4_enable: false,
            extra_height_enable: false,
            sync_disable: false,
            display_enable: false,
            frame_interrupt_enable: false,
            mode1_enable: false,
            mode3_enable: false,
            sprite_size: false,
            sprite_doubled: false,
            name_table_base: 0,
            color_table_base: 0,
            pattern_gen_base: 0,
            sprite_attr_base: 0,
            sprite_pattern_base: 0,
            backdrop_color: 0,
            bg_x_scroll: 0,
            bg_y_scroll: 0,
            line_counter_reload: 0,
        }
    }

    /// True while the VDP is requesting a maskable interrupt. The request
    /// drops when the CPU reads the status port.
    pub fn interrupt_pending(&self) -> bool {
        self.irq_pending
    }

    pub fn port_read(&mut self, port: u8) -> u8 {
        match port {
            0x7E => self.v_counter as u8,
            0x7F => self.h_counter,
            0xBE => {
                self.second_write = false;
                self.data_read()
            }
            0xBF => self.status_read(),
            _ => 0xFF,
        }
    }

    pub fn port_write(&mut self, port: u8, value: u8) {
        match port {
            0xBE => {
                self.second_write = false;
                self.data_write(value);
            }
            0xBF => self.control_write(value),
            _ => {}
        }
    }

    fn control_write(&mut self, value: u8) {
        if !self.second_write {
            self.control_word = (self.control_word & 0xFF00) | value as u16;
            self.second_write = true;
            return;
        }
        self.control_word = (self.control_word & 0x00FF) | ((value as u16) << 8);
        self.address = self.control_word & 0x3FFF;
        self.code = ((self.control_word >> 14) & 0x3) as u8;
        self.second_write = false;

        match self.code {
            // VRAM read: prefetch into the buffer
            0 => {
                self.read_buffer = self.vram[self.address as usize];
                self.bump_address();
            }
            2 => {
                let reg = ((self.control_word >> 8) & 0x0F) as u8;
                let data = (self.control_word & 0xFF) as u8;
                self.write_register(reg, data);
            }
            _ => {}
        }
    }

    /// Status read clears the latch, the VBlank/collision flags and the
    /// interrupt request.
    fn status_read(&mut self) -> u8 {
        let status = (self.vblank_flag as u8) << 7
            | (self.sprite_overflow_flag as u8) << 6
            | (self.sprite_collision_flag as u8) << 5
            | self.fifth_sprite;
        self.second_write = false;
        self.vblank_flag = false;
        self.irq_pending = false;
        self.sprite_collision_flag = false;
        self.fifth_sprite = 0;
        status
    }

    fn data_read(&mut self) -> u8 {
        let value = self.read_buffer;
        self.read_buffer = self.vram[self.address as usize];
        self.bump_address();
        value
    }

    fn data_write(&mut self, value: u8) {
        match self.code {
            1 => {
                self.vram[self.address as usize] = value;
                self.read_buffer = value;
                self.bump_address();
            }
            3 => {
                self.cram[(self.address & 0x3F) as usize] = value;
                self.read_buffer = value;
                self.bump_address();
            }
            _ => {}
        }
    }

    fn bump_address(&mut self) {
        self.address += 1;
        if self.address > 0x3FFF {
            self.address = 0;
        }
    }

    pub fn write_register(&mut self, reg: u8, value: u8) {
        if reg as usize >= self.registers.len() {
            return;
        }
        self.registers[reg as usize] = value;
        match reg {
            0 => {
                self.vertical_scroll_lock = value & 0x80 != 0;
                self.horizontal_scroll_lock = value & 0x40 != 0;
                self.hide_left_column = value & 0x20 != 0;
                self.line_interrupt_enable = value & 0x10 != 0;
                self.shift_sprites_left = value & 0x08 != 0;
                self.mode4_enable = value & 0x04 != 0;
                self.extra_height_enable = value & 0x02 != 0;
                self.sync_disable = value & 0x01 != 0;
            }
            1 => {
                self.display_enable = value & 0x40 != 0;
                self.frame_interrupt_enable = value & 0x20 != 0;
                self.mode1_enable = value & 0x10 != 0;
                self.mode3_enable = value & 0x08 != 0;
                self.sprite_size = value & 0x02 != 0;
                self.sprite_doubled = value & 0x01 != 0;
            }
            2 => self.name_table_base = value,
            3 => self.color_table_base = value,
            4 => self.pattern_gen_base = value,
            5 => self.sprite_attr_base = value,
            6 => self.sprite_pattern_base = value,
            7 => self.backdrop_color = value,
            8 => self.bg_x_scroll = value,
            9 => self.bg_y_scroll = value,
            10 => self.line_counter_reload = value,
            _ => {}
        }
    }

    /// Advance one scanline: tick the line-interrupt counter, render into
    /// `framebuffer` during the active area, raise the frame interrupt at
    /// the start of VBlank.
    pub fn process_scanline(&mut self, framebuffer: &mut [u32]) {
        if self.v_counter < FRAME_HEIGHT as u16 {
            if self.line_counter == 0 {
                self.line_counter = self.line_counter_reload;
                if self.line_interrupt_enable {
                    self.irq_pending = true;
                }
            } else {
                self.line_counter -= 1;
            }
        } else {
            self.line_counter = self.line_counter_reload;
        }

        self.v_counter += 1;
        if self.v_counter < FRAME_HEIGHT as u16 && self.display_enable {
            self.draw_scanline(framebuffer, self.v_counter);
        }

        if self.v_counter == FRAME_HEIGHT as u16 && self.frame_interrupt_enable {
            self.vblank_flag = true;
            self.irq_pending = true;
        }

        if self.v_counter > SCANLINES_PER_FRAME {
            self.v_counter -= SCANLINES_PER_FRAME;
        }
    }

    /// Render one background scanline: 32 tile columns, 4 bitplanes per
    /// tile row, attributes for flip and palette select.
    fn draw_scanline(&mut self, framebuffer: &mut [u32], scanline: u16) {
        let scroll_x = self.bg_x_scroll as u16;
        let scroll_y = self.bg_y_scroll as u16;
        let effective_y = (scanline + scroll_y) % BG_HEIGHT;
        let tile_row = effective_y / 8;
        let row_in_tile = effective_y % 8;

        for screen_tile_x in 0..32u16 {
            let tile_column = (screen_tile_x + scroll_x / 8) % 32;
            let entry = NAME_TABLE_BASE + (tile_row * 32 + tile_column) * 2;
            let tile_index = self.vram[entry as usize] as u16;
            let attributes = self.vram[entry as usize + 1];

            let palette_select = attributes & 0x08 != 0;
            let flip_x = attributes & 0x02 != 0;
            let flip_y = attributes & 0x04 != 0;

            let tile_address = tile_index * 32;
            let actual_row = if flip_y { 7 - row_in_tile } else { row_in_tile };
            let row_base = (tile_address + actual_row * 4) as usize;
            let planes = [
                self.vram[row_base],
                self.vram[row_base + 1],
                self.vram[row_base + 2],
                self.vram[row_base + 3],
            ];

            for pixel in 0..8u16 {
                let bit = if flip_x { pixel } else { 7 - pixel };
                let mut color_index = 0u8;
                for (plane, byte) in planes.iter().enumerate() {
                    color_index |= ((byte >> bit) & 1) << plane;
                }
                if palette_select && color_index != 0 {
                    color_index += 16;
                }

                let screen_x = (screen_tile_x * 8 + pixel + 256 - scroll_x % 8) % 256;
                let offset = scanline as usize * FRAME_WIDTH + screen_x as usize;
                framebuffer[offset] = self.color(color_index);
            }
        }
    }

    /// CRAM holds 6-bit BBGGRR entries; expand to opaque ARGB.
    fn color(&self, index: u8) -> u32 {
        let color6 = self.cram[(index & 0x3F) as usize];
        let r = (color6 & 0x03) as u32 * 85;
        let g = ((color6 >> 2) & 0x03) as u32 * 85;
        let b = ((color6 >> 4) & 0x03) as u32 * 85;
        0xFF00_0000 | r << 16 | g << 8 | b
    }
}

impl Default for Vdp {
    fn default() -> Self {
        Self::new()
    }
}
