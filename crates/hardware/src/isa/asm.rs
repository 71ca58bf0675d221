//! Line Assembler.
//!
//! Parses the mnemonic text produced by the disassembler back into [`Op`]s.
//!
//! Syntax, one instruction per line:
//!
//! ```text
//! load  x2, 3          # L-type
//! add   x6, x2, x3     ; R-type: and or xor add sub slt
//! addi  x6, x5, 4      # I-type: addi subi sll srl sra
//! store x6             # S-type
//! blt   x5, x4         # B-type: beq bne blt
//! ```
//!
//! Mnemonics and register names are case-insensitive, operands may be
//! separated by commas or whitespace, and immediates may be decimal, `0x` hex or
//! `0b` binary with an optional leading `-`.

use std::str::FromStr;

use tracing::warn;

use crate::common::constants::I_IMM_BITS;
use crate::common::error::{Error, ParseError, Result};
use crate::common::Reg;
use crate::isa::abi;
use crate::isa::op::{BranchOp, ImmOp, Op, RegOp};

/// Smallest immediate accepted by the assembler.
const IMM_MIN: i64 = i8::MIN as i64;
/// Largest immediate accepted by the assembler (an unsigned byte).
const IMM_MAX: i64 = u8::MAX as i64;

/// Comment leaders; everything after one of these on a line is ignored.
const COMMENT_CHARS: [char; 2] = ['#', ';'];

/// Parses one line of assembly.
///
/// # Returns
///
/// `Ok(None)` for blank and comment-only lines, `Ok(Some(op))` otherwise.
pub fn parse_line(line: &str) -> std::result::Result<Option<Op>, ParseError> {
    let code = line
        .split(COMMENT_CHARS)
        .next()
        .unwrap_or_default()
        .trim();
    if code.is_empty() {
        return Ok(None);
    }

    let mut tokens = code
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());
    let mnemonic = tokens.next().unwrap_or_default().to_ascii_lowercase();
    let operands: Vec<&str> = tokens.collect();

    if let Some(op) = RegOp::ALL.into_iter().find(|op| op.mnemonic() == mnemonic) {
        expect_operands(&mnemonic, &operands, 3)?;
        return Ok(Some(Op::Reg {
            op,
            rd: reg(operands[0])?,
            rs1: reg(operands[1])?,
            rs2: reg(operands[2])?,
        }));
    }

    if let Some(op) = ImmOp::ALL.into_iter().find(|op| op.mnemonic() == mnemonic) {
        expect_operands(&mnemonic, &operands, 3)?;
        let value = imm(operands[2])?;
        return Ok(Some(Op::Imm {
            op,
            rd: reg(operands[0])?,
            rs1: reg(operands[1])?,
            imm: fit_i_imm(op, value),
        }));
    }

    if let Some(op) = BranchOp::ALL.into_iter().find(|op| op.mnemonic() == mnemonic) {
        expect_operands(&mnemonic, &operands, 2)?;
        return Ok(Some(Op::Branch {
            op,
            rs1: reg(operands[0])?,
            rs2: reg(operands[1])?,
        }));
    }

    if mnemonic == "load" {
        expect_operands(&mnemonic, &operands, 2)?;
        return Ok(Some(Op::Load {
            rd: reg(operands[0])?,
            imm: imm(operands[1])? as u8 as i8,
        }));
    }

    if mnemonic == "store" {
        expect_operands(&mnemonic, &operands, 1)?;
        return Ok(Some(Op::Store {
            rs1: reg(operands[0])?,
        }));
    }

    Err(ParseError::UnknownMnemonic(mnemonic))
}

/// Parses a whole program, one instruction per line.
///
/// Errors carry the 1-based line number of the offending line.
pub fn parse_program(src: &str) -> Result<Vec<Op>> {
    src.lines()
        .enumerate()
        .filter_map(|(i, line)| match parse_line(line) {
            Ok(Some(op)) => Some(Ok(op)),
            Ok(None) => None,
            Err(source) => Some(Err(Error::Parse { line: i + 1, source })),
        })
        .collect()
}

impl FromStr for Op {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_line(s)?.ok_or_else(|| ParseError::UnknownMnemonic(String::new()))
    }
}

fn expect_operands(
    mnemonic: &str,
    operands: &[&str],
    expected: usize,
) -> std::result::Result<(), ParseError> {
    if operands.len() == expected {
        Ok(())
    } else {
        Err(ParseError::OperandCount {
            mnemonic: mnemonic.to_owned(),
            expected,
            found: operands.len(),
        })
    }
}

fn reg(token: &str) -> std::result::Result<Reg, ParseError> {
    abi::parse(token).ok_or_else(|| ParseError::InvalidRegister(token.to_owned()))
}

/// Parses an immediate and checks it against the 8-bit range.
fn imm(token: &str) -> std::result::Result<i64, ParseError> {
    let invalid = || ParseError::InvalidImmediate(token.to_owned());
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let lower = digits.to_ascii_lowercase();
    let magnitude = if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(bin, 2)
    } else {
        lower.parse::<i64>()
    }
    .map_err(|_| invalid())?;
    let value = if negative { -magnitude } else { magnitude };

    if (IMM_MIN..=IMM_MAX).contains(&value) {
        Ok(value)
    } else {
        Err(ParseError::ImmediateOutOfRange {
            value,
            min: IMM_MIN,
            max: IMM_MAX,
        })
    }
}

/// Narrows an I-type immediate to what the 5-bit field will hold.
///
/// Values that fit 8 bits but not the field are accepted and truncated, with a
/// warning naming the value the hardware will actually see.
fn fit_i_imm(op: ImmOp, value: i64) -> i8 {
    let byte = value as u8 as i8;
    let kept = Op::effective_imm(byte);
    let fits = if op.is_shift() {
        (0..1 << I_IMM_BITS).contains(&value)
    } else {
        i64::from(kept) == value
    };
    if !fits {
        warn!(
            op = op.mnemonic(),
            value,
            truncated = kept,
            "immediate does not fit the {I_IMM_BITS}-bit field and will be truncated"
        );
    }
    byte
}
