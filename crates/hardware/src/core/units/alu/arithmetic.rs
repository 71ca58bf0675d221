//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 256 and are reinterpreted as signed:
//! `127 + 1 == -128`, `-128 - 1 == 127`. There is no carry or overflow flag.

use crate::core::signals::AluOp;

/// Executes an arithmetic operation. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i8, b: i8) -> i8 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
