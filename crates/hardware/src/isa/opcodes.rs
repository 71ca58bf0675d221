//! Opcode class values.
//!
//! The two low bits of the instruction word select the instruction format that
//! governs the remaining fourteen bits.

/// Register-register operations (R-type).
pub const OP_REG: u8 = 0b00;
/// Register-immediate operations (I-type).
pub const OP_IMM: u8 = 0b01;
/// Load immediate into a register (L-type).
pub const OP_LOAD: u8 = 0b10;
/// Store register to the output port (S-type) or branch comparison (B-type).
///
/// The two formats share the class value; a store always carries an all-zero
/// high byte, a branch never does.
pub const OP_STORE_BRANCH: u8 = 0b11;
