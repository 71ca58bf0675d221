//! Execution units.
//!
//! The ALU executes R-type and I-type operations; the comparator executes
//! B-type predicates.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch comparator.
pub mod bru;
