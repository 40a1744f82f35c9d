//! Z80 CPU emulation for the Master System.
//!
//! Full documented base/CB/ED/DD/FD instruction dispatch through fixed
//! 256-entry opcode tables; mode-1 maskable interrupts; 3 T-states per
//! memory access plus 1 for the opcode fetch.

pub mod cpu;
pub mod flags;
pub mod registers;
pub mod tables;

#[cfg(test)]
mod tests;
