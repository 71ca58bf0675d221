//! General-Purpose Register File.
//!
//! This module implements the eight-entry register file. It performs the following:
//! 1. **Storage:** Maintains eight 8-bit signed registers (`x0`-`x7`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` always reads as zero.
//! 3. **Debugging:** Provides a two-column dump of the complete register state.

use std::fmt;

use crate::common::{NUM_REGS, Reg};

/// General-Purpose Register file.
///
/// Register `x0` is hardwired to zero: reads return 0 and writes are dropped.
/// Values are 8-bit two's complement, so every `i8` is in range and a write
/// can never fail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i8; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with all registers set to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register. Register `x0` always returns 0.
    #[inline(always)]
    pub const fn read(&self, reg: Reg) -> i8 {
        if reg.is_zero() { 0 } else { self.regs[reg.idx()] }
    }

    /// Writes a register.
    ///
    /// # Returns
    ///
    /// `true` if the value was stored, `false` when the write targeted `x0`
    /// and was discarded.
    #[inline(always)]
    pub fn write(&mut self, reg: Reg, val: i8) -> bool {
        if reg.is_zero() {
            false
        } else {
            self.regs[reg.idx()] = val;
            true
        }
    }

    /// Clears every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Returns a copy of all eight register values, `x0` first.
    pub const fn snapshot(&self) -> [i8; NUM_REGS] {
        self.regs
    }
}

impl fmt::Display for Gpr {
    /// Displays registers in pairs, signed decimal alongside the raw byte.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            let a = self.read(Reg::from_bits(i as u8));
            let b = self.read(Reg::from_bits(i as u8 + 1));
            writeln!(
                f,
                "x{}={:>4} ({:#04x})  x{}={:>4} ({:#04x})",
                i,
                a,
                a as u8,
                i + 1,
                b,
                b as u8
            )?;
        }
        Ok(())
    }
}
