//! Register name mappings.
//!
//! Registers are named `x0`-`x7`; `zero` is accepted as an alias for `x0`.

use crate::common::Reg;

/// Canonical register names, indexed by register number.
pub const REG_NAMES: [&str; 8] = ["x0", "x1", "x2", "x3", "x4", "x5", "x6", "x7"];

/// Alias for the hardwired zero register.
pub const ZERO_ALIAS: &str = "zero";

/// Returns the canonical name of a register.
#[inline]
pub fn name(reg: Reg) -> &'static str {
    REG_NAMES[reg.idx()]
}

/// Parses a register name (case-insensitive).
pub fn parse(name: &str) -> Option<Reg> {
    let name = name.trim();
    if name.eq_ignore_ascii_case(ZERO_ALIAS) {
        return Some(Reg::ZERO);
    }
    REG_NAMES
        .iter()
        .position(|n| n.eq_ignore_ascii_case(name))
        .and_then(|idx| Reg::new(idx as u8))
}
