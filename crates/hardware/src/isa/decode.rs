//! Instruction Decoder.
//!
//! Splits a 16-bit instruction word into the fields of its opcode class and
//! produces the class-appropriate immediate. Decoding never fails: fields a
//! class does not populate are carried along as don't-care bits.

use crate::common::constants::{I_IMM_BITS, XLEN};
use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::opcodes;

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 16-bit instruction word (`high:low`).
///
/// # Returns
///
/// A `Decoded` record with every field extracted and the immediate resolved
/// according to the opcode class.
pub fn decode(inst: u16) -> Decoded {
    let opcode = inst.opcode();

    let imm = match opcode {
        opcodes::OP_IMM => i_imm(inst.imm5()),
        opcodes::OP_LOAD => inst.imm8() as i8,
        _ => 0,
    };

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3: inst.funct3(),
        funct2: inst.funct2(),
        imm,
    }
}

/// Resolves an I-type immediate from raw field bits.
///
/// Only the low five bits of `raw` are kept, then sign-extended. Any wider
/// value supplied by a caller is truncated exactly as the 5-bit field would
/// truncate it.
#[inline(always)]
pub const fn i_imm(raw: u8) -> i8 {
    sign_extend(raw, I_IMM_BITS)
}

/// Sign-extends the low `bits` bits of `val` to a full 8-bit signed value.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val` (1 to 8).
#[inline(always)]
pub const fn sign_extend(val: u8, bits: u32) -> i8 {
    let shift = XLEN - bits;
    ((val << shift) as i8) >> shift
}
