//! Instruction encoding and field extraction utilities.
//!
//! The instruction word is sixteen bits, assembled from the two input ports as
//! `high:low`. Field positions (bit 0 is the LSB of `low`):
//!
//! ```text
//!  15   13 12  11 10    8 7     5 4     2 1    0
//! | funct3 |funct2|  rs2  |  rs1  |  rd   |opcode|   R, B
//! | funct3 |   imm[4:0]   |  rs1  |  rd   |opcode|   I
//! |          imm[7:0]     |   -   |  rd   |opcode|   L
//! |       00000000        |  rs1  |   -   |opcode|   S
//! ```

use crate::common::Reg;

/// Bit mask for the opcode class field (bits 1-0).
pub const OPCODE_MASK: u16 = 0x3;
/// Bit mask for any 3-bit register selector.
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the funct2 field.
pub const FUNCT2_MASK: u16 = 0x3;
/// Bit mask for the funct3 field.
pub const FUNCT3_MASK: u16 = 0x7;
/// Bit mask for the I-type immediate field (5 bits).
pub const IMM5_MASK: u16 = 0x1F;

/// Bit position of the destination register field.
pub const RD_SHIFT: u16 = 2;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u16 = 5;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u16 = 8;
/// Bit position of the funct2 field.
pub const FUNCT2_SHIFT: u16 = 11;
/// Bit position of the funct3 field.
pub const FUNCT3_SHIFT: u16 = 13;
/// Bit position of both immediate fields (the start of the high byte).
pub const IMM_SHIFT: u16 = 8;

/// Assembles the instruction word from the two input port bytes.
#[inline(always)]
pub const fn word(low: u8, high: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}

/// Splits an instruction word into its `(low, high)` port bytes.
#[inline(always)]
pub const fn split(word: u16) -> (u8, u8) {
    (word as u8, (word >> 8) as u8)
}

/// Trait for extracting instruction fields from an encoded word.
///
/// Every accessor is defined for every word; which ones are meaningful depends
/// on the opcode class.
pub trait InstructionBits {
    /// Extracts the opcode class (bits 1-0).
    fn opcode(&self) -> u8;

    /// Extracts the destination register (bits 4-2).
    fn rd(&self) -> Reg;

    /// Extracts the first source register (bits 7-5).
    fn rs1(&self) -> Reg;

    /// Extracts the second source register (bits 10-8).
    fn rs2(&self) -> Reg;

    /// Extracts the funct2 field (bits 12-11).
    fn funct2(&self) -> u8;

    /// Extracts the funct3 field (bits 15-13).
    fn funct3(&self) -> u8;

    /// Extracts the raw, unextended I-type immediate (bits 12-8).
    fn imm5(&self) -> u8;

    /// Extracts the L-type immediate: the whole high byte.
    fn imm8(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        (self & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> Reg {
        Reg::from_bits(((self >> RD_SHIFT) & REG_MASK) as u8)
    }

    #[inline(always)]
    fn rs1(&self) -> Reg {
        Reg::from_bits(((self >> RS1_SHIFT) & REG_MASK) as u8)
    }

    #[inline(always)]
    fn rs2(&self) -> Reg {
        Reg::from_bits(((self >> RS2_SHIFT) & REG_MASK) as u8)
    }

    #[inline(always)]
    fn funct2(&self) -> u8 {
        ((self >> FUNCT2_SHIFT) & FUNCT2_MASK) as u8
    }

    #[inline(always)]
    fn funct3(&self) -> u8 {
        ((self >> FUNCT3_SHIFT) & FUNCT3_MASK) as u8
    }

    #[inline(always)]
    fn imm5(&self) -> u8 {
        ((self >> IMM_SHIFT) & IMM5_MASK) as u8
    }

    #[inline(always)]
    fn imm8(&self) -> u8 {
        (self >> IMM_SHIFT) as u8
    }
}

/// Decoded instruction fields.
///
/// Produced by [`decode`](crate::isa::decode::decode). Only the fields used by
/// the decoded class carry meaning; the rest hold whatever bits happen to sit
/// in their positions and must not be read by the executor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 16-bit instruction word.
    pub raw: u16,
    /// Opcode class.
    pub opcode: u8,
    /// Destination register.
    pub rd: Reg,
    /// First source register.
    pub rs1: Reg,
    /// Second source register.
    pub rs2: Reg,
    /// Function code field 3.
    pub funct3: u8,
    /// Function code field 2.
    pub funct2: u8,
    /// Class-appropriate immediate: the sign-extended 5-bit field for I-type,
    /// the full high byte for L-type, zero otherwise.
    pub imm: i8,
}

impl Decoded {
    /// Returns the high port byte of the raw word.
    #[inline(always)]
    pub const fn high(&self) -> u8 {
        (self.raw >> 8) as u8
    }
}
