//! Function Codes (funct3).
//!
//! The `funct3` field (bits 15-13) selects the operation within an opcode class.
//! Some values are shared between classes and, within R-type and B-type, between
//! operations that `funct2` then separates.

// R-type

/// Bitwise AND.
pub const AND: u8 = 0b000;
/// Bitwise OR and XOR; `funct2` disambiguates.
pub const OR_XOR: u8 = 0b001;
/// Wrapping addition.
pub const ADD: u8 = 0b010;
/// Wrapping subtraction.
pub const SUB: u8 = 0b011;
/// Set if less than (signed).
pub const SLT: u8 = 0b111;

// I-type

/// Add immediate.
pub const ADDI: u8 = 0b010;
/// Subtract immediate.
pub const SUBI: u8 = 0b011;
/// Shift left logical.
pub const SLL: u8 = 0b100;
/// Shift right logical.
pub const SRL: u8 = 0b101;
/// Shift right arithmetic.
pub const SRA: u8 = 0b110;

// B-type

/// Branch if equal / not equal; `funct2` disambiguates.
pub const BEQ_BNE: u8 = 0b011;
/// Branch if less than (signed).
pub const BLT: u8 = 0b111;
