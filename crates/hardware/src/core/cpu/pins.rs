//! Pin-level interface.
//!
//! The core is driven through two 8-bit input buses, an enable and an
//! active-low reset, and observed through one 8-bit output bus. The clock is
//! implicit: each call to [`Cpu::clock`](super::Cpu::clock) is one rising edge.

use crate::isa::instruction::word;

/// Input pin state for one cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pins {
    /// Low byte of the instruction word (`ui_in`).
    pub ui_in: u8,
    /// High byte of the instruction word (`uio_in`).
    pub uio_in: u8,
    /// Enable. While low the core neither decodes nor commits.
    pub ena: bool,
    /// Active-low reset. While low the register file is forced to zero.
    pub rst_n: bool,
}

impl Pins {
    /// Pins carrying `low`/`high`, enabled and out of reset.
    pub const fn new(low: u8, high: u8) -> Self {
        Self {
            ui_in: low,
            uio_in: high,
            ena: true,
            rst_n: true,
        }
    }

    /// Returns the instruction word formed by the two input buses.
    pub const fn word(&self) -> u16 {
        word(self.ui_in, self.uio_in)
    }

    /// Returns `true` when the core decodes and executes this cycle.
    pub const fn active(&self) -> bool {
        self.ena && self.rst_n
    }
}

impl Default for Pins {
    /// An all-zero instruction bus, enabled and out of reset.
    fn default() -> Self {
        Self::new(0, 0)
    }
}
