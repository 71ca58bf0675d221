//! Per-cycle trace records.
//!
//! One `TraceEntry` is produced for every instruction the simulator issues.
//! Entries serialize to JSON for machine consumption and display as a single
//! aligned line for humans.

use std::fmt;

use serde::Serialize;

use crate::common::Reg;
use crate::isa::abi;

/// A register write staged by an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Writeback {
    /// Destination register index.
    pub reg: u8,
    /// Value written.
    pub value: i8,
    /// `false` when the write targeted `x0` and was dropped.
    pub committed: bool,
}

/// What the core did with one issued instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    /// Clock edge at which the instruction was committed.
    pub cycle: u64,
    /// Instruction word (`high:low`).
    pub word: u16,
    /// Disassembly of `word`.
    pub disasm: String,
    /// Output port value sampled before the clock edge, as signed.
    pub output: i8,
    /// Output port value sampled before the clock edge, as the raw byte.
    pub output_raw: u8,
    /// `false` if the core was disabled or in reset and ignored the word.
    pub executed: bool,
    /// Register write staged by the instruction, if any.
    pub writeback: Option<Writeback>,
}

impl Writeback {
    /// Creates a writeback record.
    pub const fn new(reg: Reg, value: i8, committed: bool) -> Self {
        Self {
            reg: reg.bits(),
            value,
            committed,
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:>6}] {:#06x}  {:<18} out={:>4} ({:#04x})",
            self.cycle, self.word, self.disasm, self.output, self.output_raw
        )?;
        if !self.executed {
            return f.write_str("  (ignored)");
        }
        if let Some(wb) = self.writeback {
            let name = abi::name(Reg::from_bits(wb.reg));
            if wb.committed {
                write!(f, "  {} <- {}", name, wb.value)?;
            } else {
                write!(f, "  {} <- {} (discarded)", name, wb.value)?;
            }
        }
        Ok(())
    }
}
