//! ALU logical and comparison operations.
//!
//! Bitwise operations act on the two's-complement bit pattern. `Slt` compares
//! signed values and yields 0 or 1.

use crate::core::signals::AluOp;

/// Executes a logical or comparison operation. Returns `0` for other opcodes.
pub const fn execute(op: AluOp, a: i8, b: i8) -> i8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => (a < b) as i8,
        _ => 0,
    }
}
