//! Function Codes (funct2).
//!
//! The `funct2` field (bits 12-11) is the secondary selector for R-type and
//! B-type. It is zero for every operation except the two that share a `funct3`
//! with another operation.

/// Base encoding: every operation that owns its `funct3` outright.
pub const BASE: u8 = 0b00;
/// XOR (with `funct3::OR_XOR`).
pub const XOR: u8 = 0b01;
/// BNE (with `funct3::BEQ_BNE`).
pub const BNE: u8 = 0b10;
