//! Video Display Processor (Sega 315-5124).
//!
//! Mode 4 background rendering, control/data port state machine, and the
//! line/frame interrupt counters, as documented on
//! [SMS Power!](https://www.smspower.org/Development/VDPRegisters).

pub mod vdp;

#[cfg(test)]
mod tests;
