//! Program Loader.
//!
//! This module reads programs from disk. It performs:
//! 1. **Assembly loading:** Any file not ending in `.hex` is parsed as assembly text.
//! 2. **Hex loading:** `.hex` files hold one 16-bit word per line (`0x` prefix optional).

use std::fs;
use std::path::Path;

use crate::common::error::{Error, Result};
use crate::isa::asm;
use crate::isa::op::Op;

/// File extension selecting the hex word format.
pub const HEX_EXTENSION: &str = "hex";

/// Loads a program from a file.
///
/// # Arguments
///
/// * `path` - Path to a `.hex` word list or an assembly source file.
pub fn load_program(path: impl AsRef<Path>) -> Result<Vec<Op>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_hex = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(HEX_EXTENSION));
    if is_hex {
        parse_hex(&text)
    } else {
        asm::parse_program(&text)
    }
}

/// Parses a hex word list.
///
/// Blank lines and `#`/`;` comments are skipped. Words that select no
/// operation load as `Op::Illegal`; only text that is not a 16-bit hex number
/// is an error.
pub fn parse_hex(src: &str) -> Result<Vec<Op>> {
    src.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let text = line.split(['#', ';']).next().unwrap_or_default().trim();
            if text.is_empty() {
                return None;
            }
            let digits = text
                .strip_prefix("0x")
                .or_else(|| text.strip_prefix("0X"))
                .unwrap_or(text)
                .replace('_', "");
            Some(
                u16::from_str_radix(&digits, 16)
                    .map(Op::from)
                    .map_err(|_| Error::InvalidWord {
                        line: i + 1,
                        text: text.to_owned(),
                    }),
            )
        })
        .collect()
}
