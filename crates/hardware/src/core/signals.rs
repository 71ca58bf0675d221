//! Datapath control signals.
//!
//! This module defines the control word derived from a classified instruction. It performs:
//! 1. **Operation Selection:** Which ALU or comparator function runs.
//! 2. **Operand Selection:** Whether ALU operand B comes from `rs2` or the immediate.
//! 3. **Result Selection:** Which unit drives the output port, and whether `rd` is written.

use crate::common::Reg;
use crate::isa::op::{BranchOp, ImmOp, Op, RegOp};

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition (default, no-op for non-ALU formats).
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Set less than (signed).
    Slt,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Shift right arithmetic.
    Sra,
}

impl From<RegOp> for AluOp {
    fn from(op: RegOp) -> Self {
        match op {
            RegOp::And => Self::And,
            RegOp::Or => Self::Or,
            RegOp::Xor => Self::Xor,
            RegOp::Add => Self::Add,
            RegOp::Sub => Self::Sub,
            RegOp::Slt => Self::Slt,
        }
    }
}

impl From<ImmOp> for AluOp {
    fn from(op: ImmOp) -> Self {
        match op {
            ImmOp::Addi => Self::Add,
            ImmOp::Subi => Self::Sub,
            ImmOp::Sll => Self::Sll,
            ImmOp::Srl => Self::Srl,
            ImmOp::Sra => Self::Sra,
        }
    }
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Second source register.
    #[default]
    Reg2,
    /// Immediate from the instruction.
    Imm,
}

/// Source driving the output port (the result multiplexer select).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutSel {
    /// Nothing selected: the illegal-op policy decides.
    #[default]
    None,
    /// ALU result (R-type, I-type).
    Alu,
    /// Loaded immediate (L-type).
    Imm,
    /// Value of `rs1` (S-type).
    Rs1,
    /// Comparator result, `0` or `1` (B-type).
    Branch,
}

/// Control word for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operation to perform.
    pub alu: AluOp,
    /// Source for ALU operand B.
    pub b_src: OpBSrc,
    /// Comparator operation, for B-type.
    pub cmp: Option<BranchOp>,
    /// Output multiplexer select.
    pub out_sel: OutSel,
    /// Destination register write enable.
    pub reg_write: bool,
    /// Destination register.
    pub rd: Reg,
    /// First source register.
    pub rs1: Reg,
    /// Second source register.
    pub rs2: Reg,
    /// Immediate, already resolved to the value the datapath uses.
    pub imm: i8,
}

impl ControlSignals {
    /// Derives the control word for an instruction.
    ///
    /// `reg_write` is asserted for every register-writing format, even when
    /// `rd` is `x0`; the register file drops that write.
    pub fn from_op(op: &Op) -> Self {
        match *op {
            Op::Reg { op, rd, rs1, rs2 } => Self {
                alu: op.into(),
                out_sel: OutSel::Alu,
                reg_write: true,
                rd,
                rs1,
                rs2,
                ..Self::default()
            },
            Op::Imm { op, rd, rs1, imm } => Self {
                alu: op.into(),
                b_src: OpBSrc::Imm,
                out_sel: OutSel::Alu,
                reg_write: true,
                rd,
                rs1,
                imm: Op::effective_imm(imm),
                ..Self::default()
            },
            Op::Load { rd, imm } => Self {
                out_sel: OutSel::Imm,
                reg_write: true,
                rd,
                imm,
                ..Self::default()
            },
            Op::Store { rs1 } => Self {
                out_sel: OutSel::Rs1,
                rs1,
                ..Self::default()
            },
            Op::Branch { op, rs1, rs2 } => Self {
                cmp: Some(op),
                out_sel: OutSel::Branch,
                rs1,
                rs2,
                ..Self::default()
            },
            Op::Illegal(_) => Self::default(),
        }
    }
}
