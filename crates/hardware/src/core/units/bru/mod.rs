//! Branch comparison unit.
//!
//! Evaluates the three B-type predicates. The core has no program counter, so
//! a "taken" branch only drives `1` onto the output port; nothing is redirected.

use crate::isa::op::BranchOp;

/// Comparator for B-type instructions.
#[derive(Debug)]
pub struct Comparator;

impl Comparator {
    /// Evaluates a branch predicate on two signed register values.
    ///
    /// # Examples
    ///
    /// ```
    /// use alu8_core::core::units::bru::Comparator;
    /// use alu8_core::isa::BranchOp;
    ///
    /// assert!(Comparator::evaluate(BranchOp::Blt, -128, 127));
    /// assert!(!Comparator::evaluate(BranchOp::Bne, 5, 5));
    /// ```
    pub const fn evaluate(op: BranchOp, a: i8, b: i8) -> bool {
        match op {
            BranchOp::Beq => a == b,
            BranchOp::Bne => a != b,
            BranchOp::Blt => a < b,
        }
    }
}
