//! Master System emulator entry point.
//!
//! Loads a ROM image and runs the machine with a display window.
//! Usage: segalis [path/to/game.sms]

use std::time::{Duration, Instant};
use std::{env, fs, process};

use ansi_term::Colour::Red;
use minifb::{Key, Window, WindowOptions};
use segalis::machine::Machine;
use segalis::vdp::vdp::{FRAME_HEIGHT, FRAME_WIDTH};

/// NTSC runs at ~59.92 Hz. Target one frame per 16.67 ms for ~60 fps.
const FRAME_DURATION: Duration = Duration::from_nanos(16_666_667);

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("usage: segalis <rom.sms>");
        process::exit(1);
    });

    let rom = fs::read(&path).unwrap_or_else(|err| {
        eprintln!("{} failed to read {path}: {err}", Red.paint("[segalis]"));
        process::exit(1);
    });

    let mut machine = Machine::new();
    if let Err(err) = machine.load_rom(&rom) {
        eprintln!("{} failed to load {path}: {err}", Red.paint("[segalis]"));
        process::exit(1);
    }

    let mut window = Window::new(
        "Segalis",
        FRAME_WIDTH,
        FRAME_HEIGHT,
        WindowOptions {
            resize: true,
            scale: minifb::Scale::X2,
            scale_mode: minifb::ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        },
    )
    .expect("Failed to create window");

    window.set_target_fps(60);

    let mut framebuffer = vec![0u32; FRAME_WIDTH * FRAME_HEIGHT];

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame_start = Instant::now();

        // Framebuffer fills scanline-by-scanline as the VDP races the CPU
        machine.run_frame(&mut framebuffer);
        if !machine.cpu.running {
            break;
        }

        window
            .update_with_buffer(&framebuffer, FRAME_WIDTH, FRAME_HEIGHT)
            .expect("Failed to update window");

        // Pace to ~60 fps so we don't burn CPU
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - elapsed);
        }
    }
}
