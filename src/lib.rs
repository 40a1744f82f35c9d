//! Segalis: A Sega Master System (Mark III / SMS) emulator written in Rust.
//!
//! Implements the SMS chipset as documented on
//! [SMS Power!](https://www.smspower.org/Development/Index): Zilog Z80 CPU,
//! Sega memory mapper, and the 315-5124 VDP.
//!
//! ## Modules (SMS Power! references)
//!
//! - **bus** – [Memory map](https://www.smspower.org/Development/MemoryMap) and
//!   [I/O port map](https://www.smspower.org/Development/PortMap): MMU + VDP behind the CPU bus
//! - **cpu** – [Z80](https://www.smspower.org/Development/Z80-Index): full base/CB/ED/DD/FD
//!   dispatch tables, mode-1 interrupts, T-state accounting
//! - **machine** – frame orchestration: 262 scanlines × 228 CPU cycles (NTSC)
//! - **mmu** – [Sega mapper](https://www.smspower.org/Development/Mappers): three 16KB ROM
//!   windows, bank registers at $FFFC-$FFFF, 8KB system RAM + mirror
//! - **vdp** – [VDP](https://www.smspower.org/Development/VDPRegisters): control/data ports,
//!   Mode 4 background rendering, line/frame interrupts, 256×192

pub mod bus;
pub mod cpu;
pub mod machine;
pub mod mmu;
pub mod vdp;
