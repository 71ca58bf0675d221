//! Instruction Disassembler.
//!
//! Converts an instruction word into the mnemonic text the assembler accepts,
//! for trace output and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use alu8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x4358), "add x6, x2, x3");
//! ```

use std::fmt;

use crate::isa::abi::name;
use crate::isa::op::Op;

/// Text emitted for words that select no operation.
pub const UNKNOWN: &str = "unknown";

/// Disassembles an instruction word.
///
/// Returns a mnemonic like `"addi x6, x5, 4"` or `"unknown"` for unassigned
/// encodings.
pub fn disassemble(inst: u16) -> String {
    Op::from(inst).to_string()
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Reg { op, rd, rs1, rs2 } => write!(
                f,
                "{} {}, {}, {}",
                op.mnemonic(),
                name(rd),
                name(rs1),
                name(rs2)
            ),
            Self::Imm { op, rd, rs1, imm } => {
                let imm = Self::effective_imm(imm);
                if op.is_shift() {
                    // Shift amounts print as the unsigned field value.
                    write!(
                        f,
                        "{} {}, {}, {}",
                        op.mnemonic(),
                        name(rd),
                        name(rs1),
                        imm as u8 & 0x1F
                    )
                } else {
                    write!(f, "{} {}, {}, {}", op.mnemonic(), name(rd), name(rs1), imm)
                }
            }
            Self::Load { rd, imm } => write!(f, "load {}, {}", name(rd), imm),
            Self::Store { rs1 } => write!(f, "store {}", name(rs1)),
            Self::Branch { op, rs1, rs2 } => {
                write!(f, "{} {}, {}", op.mnemonic(), name(rs1), name(rs2))
            }
            Self::Illegal(_) => f.write_str(UNKNOWN),
        }
    }
}
