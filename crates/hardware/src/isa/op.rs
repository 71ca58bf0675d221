//! Closed operation set.
//!
//! Every instruction word maps to exactly one `Op`. The per-class enums carry
//! the `funct3`/`funct2` tables, so classification and encoding are a single
//! `match` each way, and anything outside those tables becomes `Op::Illegal`.

use crate::common::Reg;
use crate::isa::decode::i_imm;
use crate::isa::instruction::{
    Decoded, FUNCT2_SHIFT, FUNCT3_SHIFT, IMM_SHIFT, IMM5_MASK, RD_SHIFT, RS1_SHIFT, RS2_SHIFT,
};
use crate::isa::{funct2, funct3, opcodes};

/// R-type operations: two register operands, result written to `rd`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegOp {
    /// `rs1 & rs2`.
    And,
    /// `rs1 | rs2`.
    Or,
    /// `rs1 ^ rs2`.
    Xor,
    /// `rs1 + rs2`, wrapping.
    Add,
    /// `rs1 - rs2`, wrapping.
    Sub,
    /// `1` if `rs1 < rs2` (signed), else `0`.
    Slt,
}

impl RegOp {
    /// Every R-type operation.
    pub const ALL: [Self; 6] = [Self::And, Self::Or, Self::Xor, Self::Add, Self::Sub, Self::Slt];

    /// Looks up the operation selected by `(funct3, funct2)`.
    pub const fn from_funct(f3: u8, f2: u8) -> Option<Self> {
        match (f3, f2) {
            (funct3::AND, funct2::BASE) => Some(Self::And),
            (funct3::OR_XOR, funct2::BASE) => Some(Self::Or),
            (funct3::OR_XOR, funct2::XOR) => Some(Self::Xor),
            (funct3::ADD, funct2::BASE) => Some(Self::Add),
            (funct3::SUB, funct2::BASE) => Some(Self::Sub),
            (funct3::SLT, funct2::BASE) => Some(Self::Slt),
            _ => None,
        }
    }

    /// Returns the `(funct3, funct2)` encoding.
    pub const fn funct(self) -> (u8, u8) {
        match self {
            Self::And => (funct3::AND, funct2::BASE),
            Self::Or => (funct3::OR_XOR, funct2::BASE),
            Self::Xor => (funct3::OR_XOR, funct2::XOR),
            Self::Add => (funct3::ADD, funct2::BASE),
            Self::Sub => (funct3::SUB, funct2::BASE),
            Self::Slt => (funct3::SLT, funct2::BASE),
        }
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Slt => "slt",
        }
    }
}

/// I-type operations: one register operand and an immediate, result written to `rd`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImmOp {
    /// `rs1 + imm`, wrapping.
    Addi,
    /// `rs1 - imm`, wrapping.
    Subi,
    /// Shift left logical by `imm mod 8`.
    Sll,
    /// Shift right logical by `imm mod 8`.
    Srl,
    /// Shift right arithmetic by `imm mod 8`.
    Sra,
}

impl ImmOp {
    /// Every I-type operation.
    pub const ALL: [Self; 5] = [Self::Addi, Self::Subi, Self::Sll, Self::Srl, Self::Sra];

    /// Looks up the operation selected by `funct3`.
    pub const fn from_funct3(f3: u8) -> Option<Self> {
        match f3 {
            funct3::ADDI => Some(Self::Addi),
            funct3::SUBI => Some(Self::Subi),
            funct3::SLL => Some(Self::Sll),
            funct3::SRL => Some(Self::Srl),
            funct3::SRA => Some(Self::Sra),
            _ => None,
        }
    }

    /// Returns the `funct3` encoding.
    pub const fn funct3(self) -> u8 {
        match self {
            Self::Addi => funct3::ADDI,
            Self::Subi => funct3::SUBI,
            Self::Sll => funct3::SLL,
            Self::Srl => funct3::SRL,
            Self::Sra => funct3::SRA,
        }
    }

    /// Returns `true` for the three shifts, whose immediate is an amount.
    pub const fn is_shift(self) -> bool {
        matches!(self, Self::Sll | Self::Srl | Self::Sra)
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Addi => "addi",
            Self::Subi => "subi",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Sra => "sra",
        }
    }
}

/// B-type comparisons: two register operands, boolean result on the output port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchOp {
    /// `rs1 == rs2`.
    Beq,
    /// `rs1 != rs2`.
    Bne,
    /// `rs1 < rs2` (signed).
    Blt,
}

impl BranchOp {
    /// Every B-type comparison.
    pub const ALL: [Self; 3] = [Self::Beq, Self::Bne, Self::Blt];

    /// Looks up the comparison selected by `(funct3, funct2)`.
    pub const fn from_funct(f3: u8, f2: u8) -> Option<Self> {
        match (f3, f2) {
            (funct3::BEQ_BNE, funct2::BASE) => Some(Self::Beq),
            (funct3::BEQ_BNE, funct2::BNE) => Some(Self::Bne),
            (funct3::BLT, funct2::BASE) => Some(Self::Blt),
            _ => None,
        }
    }

    /// Returns the `(funct3, funct2)` encoding.
    ///
    /// Every comparison has a nonzero `funct3`, so an encoded branch never has
    /// an all-zero high byte and cannot be mistaken for a store.
    pub const fn funct(self) -> (u8, u8) {
        match self {
            Self::Beq => (funct3::BEQ_BNE, funct2::BASE),
            Self::Bne => (funct3::BEQ_BNE, funct2::BNE),
            Self::Blt => (funct3::BLT, funct2::BASE),
        }
    }

    /// Returns the assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
        }
    }
}

/// Instruction format, with the store/branch overlap made explicit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Register-register.
    Reg,
    /// Register-immediate.
    Imm,
    /// Load immediate.
    Load,
    /// Store register to the output port.
    Store,
    /// Branch comparison.
    Branch,
    /// Unassigned encoding.
    Illegal,
}

/// A fully classified instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// R-type.
    Reg {
        /// Operation.
        op: RegOp,
        /// Destination register.
        rd: Reg,
        /// First operand.
        rs1: Reg,
        /// Second operand.
        rs2: Reg,
    },
    /// I-type.
    Imm {
        /// Operation.
        op: ImmOp,
        /// Destination register.
        rd: Reg,
        /// Register operand.
        rs1: Reg,
        /// Immediate operand. Only the low five bits are encodable; execution
        /// sees the sign-extended 5-bit value.
        imm: i8,
    },
    /// L-type.
    Load {
        /// Destination register.
        rd: Reg,
        /// Value loaded.
        imm: i8,
    },
    /// S-type.
    Store {
        /// Register driven onto the output port.
        rs1: Reg,
    },
    /// B-type.
    Branch {
        /// Comparison.
        op: BranchOp,
        /// Left operand.
        rs1: Reg,
        /// Right operand.
        rs2: Reg,
    },
    /// A word whose `(class, funct3, funct2)` selects no operation.
    Illegal(u16),
}

impl Op {
    /// Classifies a decoded instruction.
    ///
    /// Class `11` is a store when the high port byte is all zero and a branch
    /// otherwise; this is the port-level convention every conforming driver
    /// follows.
    pub const fn from_decoded(d: &Decoded) -> Self {
        match d.opcode {
            opcodes::OP_REG => match RegOp::from_funct(d.funct3, d.funct2) {
                Some(op) => Self::Reg {
                    op,
                    rd: d.rd,
                    rs1: d.rs1,
                    rs2: d.rs2,
                },
                None => Self::Illegal(d.raw),
            },
            opcodes::OP_IMM => match ImmOp::from_funct3(d.funct3) {
                Some(op) => Self::Imm {
                    op,
                    rd: d.rd,
                    rs1: d.rs1,
                    imm: d.imm,
                },
                None => Self::Illegal(d.raw),
            },
            opcodes::OP_LOAD => Self::Load {
                rd: d.rd,
                imm: d.imm,
            },
            _ => {
                if d.high() == 0 {
                    Self::Store { rs1: d.rs1 }
                } else {
                    match BranchOp::from_funct(d.funct3, d.funct2) {
                        Some(op) => Self::Branch {
                            op,
                            rs1: d.rs1,
                            rs2: d.rs2,
                        },
                        None => Self::Illegal(d.raw),
                    }
                }
            }
        }
    }

    /// Encodes the instruction into a 16-bit word.
    ///
    /// Fields are masked to their widths, so an I-type immediate outside the
    /// 5-bit field is truncated here exactly as the hardware field would.
    pub const fn encode(&self) -> u16 {
        match *self {
            Self::Reg { op, rd, rs1, rs2 } => {
                let (f3, f2) = op.funct();
                (f3 as u16) << FUNCT3_SHIFT
                    | (f2 as u16) << FUNCT2_SHIFT
                    | (rs2.bits() as u16) << RS2_SHIFT
                    | (rs1.bits() as u16) << RS1_SHIFT
                    | (rd.bits() as u16) << RD_SHIFT
                    | opcodes::OP_REG as u16
            }
            Self::Imm { op, rd, rs1, imm } => {
                (op.funct3() as u16) << FUNCT3_SHIFT
                    | ((imm as u8 as u16) & IMM5_MASK) << IMM_SHIFT
                    | (rs1.bits() as u16) << RS1_SHIFT
                    | (rd.bits() as u16) << RD_SHIFT
                    | opcodes::OP_IMM as u16
            }
            Self::Load { rd, imm } => {
                (imm as u8 as u16) << IMM_SHIFT
                    | (rd.bits() as u16) << RD_SHIFT
                    | opcodes::OP_LOAD as u16
            }
            Self::Store { rs1 } => {
                (rs1.bits() as u16) << RS1_SHIFT | opcodes::OP_STORE_BRANCH as u16
            }
            Self::Branch { op, rs1, rs2 } => {
                let (f3, f2) = op.funct();
                (f3 as u16) << FUNCT3_SHIFT
                    | (f2 as u16) << FUNCT2_SHIFT
                    | (rs2.bits() as u16) << RS2_SHIFT
                    | (rs1.bits() as u16) << RS1_SHIFT
                    | opcodes::OP_STORE_BRANCH as u16
            }
            Self::Illegal(raw) => raw,
        }
    }

    /// Encodes the instruction into its `(low, high)` port bytes.
    pub const fn bytes(&self) -> (u8, u8) {
        crate::isa::instruction::split(self.encode())
    }

    /// Returns the instruction format.
    pub const fn class(&self) -> OpClass {
        match self {
            Self::Reg { .. } => OpClass::Reg,
            Self::Imm { .. } => OpClass::Imm,
            Self::Load { .. } => OpClass::Load,
            Self::Store { .. } => OpClass::Store,
            Self::Branch { .. } => OpClass::Branch,
            Self::Illegal(_) => OpClass::Illegal,
        }
    }

    /// Returns the destination register of a register-writing format.
    ///
    /// This is `Some(rd)` for R-type, I-type and L-type, including when `rd`
    /// is `x0`; the register file discards that write.
    pub const fn destination(&self) -> Option<Reg> {
        match *self {
            Self::Reg { rd, .. } | Self::Imm { rd, .. } | Self::Load { rd, .. } => Some(rd),
            _ => None,
        }
    }

    /// Returns `true` when committing this instruction changes a register.
    pub const fn writes_register(&self) -> bool {
        match self.destination() {
            Some(rd) => !rd.is_zero(),
            None => false,
        }
    }

    /// Returns the immediate an I-type instruction actually executes with.
    ///
    /// Applies the 5-bit field truncation to an `Op` built by hand, so that
    /// executing it matches executing its encoding.
    pub const fn effective_imm(imm: i8) -> i8 {
        i_imm(imm as u8)
    }
}

impl From<u16> for Op {
    fn from(word: u16) -> Self {
        Self::from_decoded(&crate::isa::decode::decode(word))
    }
}
