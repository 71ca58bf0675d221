//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit ALU shared by R-type and I-type
//! instructions. All operands and results are two's-complement `i8`.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Xor, Slt
//! - [`shifts`]:     Sll, Srl, Sra

/// Wrapping addition and subtraction.
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::signals::AluOp;

/// Arithmetic Logic Unit for 8-bit integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (`rs1`)
    /// * `b`  - Second operand (`rs2` or the immediate; the shift amount for shifts)
    ///
    /// # Examples
    ///
    /// ```
    /// use alu8_core::core::signals::AluOp;
    /// use alu8_core::core::units::alu::Alu;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 127, 1), -128);
    /// assert_eq!(Alu::execute(AluOp::Sra, -128, 4), -8);
    /// assert_eq!(Alu::execute(AluOp::Srl, -128, 1), 64);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5, 3), 1);
    /// ```
    pub fn execute(op: AluOp, a: i8, b: i8) -> i8 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, a, b),
        }
    }
}
