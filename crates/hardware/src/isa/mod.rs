//! Instruction Set Definitions.
//!
//! Contains the opcode and function code tables, field extraction, decoding,
//! the closed operation set, and the text assembler/disassembler.
//!
//! # Formats
//!
//! * R-type (`00`): `and or xor add sub slt`
//! * I-type (`01`): `addi subi sll srl sra`
//! * L-type (`10`): `load`
//! * S-type (`11`, zero high byte): `store`
//! * B-type (`11`, nonzero high byte): `beq bne blt`

/// Register name mappings.
pub mod abi;

/// Text assembler producing [`op::Op`] values.
pub mod asm;

/// Instruction word decoding.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Secondary function codes.
pub mod funct2;

/// Primary function codes.
pub mod funct3;

/// Field masks, shifts and bit extraction.
pub mod instruction;

/// The closed operation set and its encoding.
pub mod op;

/// Opcode class values.
pub mod opcodes;

pub use decode::decode;
pub use op::{BranchOp, ImmOp, Op, OpClass, RegOp};
