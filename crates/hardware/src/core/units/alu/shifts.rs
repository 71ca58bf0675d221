//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA) on the 8-bit register width.
//!
//! The shift amount is taken modulo 8: an amount of 8 behaves like 0, not like
//! a shift that clears (or sign-fills) the whole register.

use crate::common::SHAMT_MASK;
use crate::core::signals::AluOp;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount; only the low three bits are used.
///
/// # Returns
///
/// The shifted value, or `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i8, b: i8) -> i8 {
    let sh = (b as u8 & SHAMT_MASK) as u32;
    match op {
        AluOp::Sll => ((a as u8) << sh) as i8,
        AluOp::Srl => ((a as u8) >> sh) as i8,
        AluOp::Sra => a >> sh,
        _ => 0,
    }
}
