//! Register Index Type.
//!
//! Every register selector in the instruction word is 3 bits wide. `Reg` keeps
//! that invariant in the type so the register file can index its storage
//! without bounds checks leaking into the datapath.

use std::fmt;

use super::constants::NUM_REGS;

/// A register index in the range `0..=7`.
///
/// Index 0 names the hardwired zero register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg(u8);

impl Reg {
    /// The hardwired zero register, `x0`.
    pub const ZERO: Self = Self(0);

    /// Creates a register index, returning `None` when `idx` is not below 8.
    pub const fn new(idx: u8) -> Option<Self> {
        if (idx as usize) < NUM_REGS {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Creates a register index from the low three bits of `bits`.
    ///
    /// This is how the decoder reads a selector field: upper bits are ignored.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (NUM_REGS as u8 - 1))
    }

    /// Returns the raw index.
    #[inline(always)]
    pub const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Returns the 3-bit encoding of this register.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` for the hardwired zero register.
    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Iterates over all eight registers in index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..NUM_REGS as u8).map(Self)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
