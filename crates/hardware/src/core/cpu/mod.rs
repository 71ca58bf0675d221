//! Pin-Level Core.
//!
//! This module defines the `Cpu` structure, the synchronous core behind the
//! pin interface. It coordinates the following:
//! 1. **State Management:** Owns the register file and the last driven output.
//! 2. **Combinational Output:** Decodes the input buses and drives `uo_out`.
//! 3. **Clock Edge:** Applies reset, or commits the staged register write.

/// Single-cycle datapath and result multiplexer.
pub mod execution;

/// Pin-level interface.
pub mod pins;

use tracing::{debug, info, trace};

use crate::config::{Config, IllegalOpPolicy};
use crate::core::arch::Gpr;
use crate::isa::decode::decode;
use crate::isa::op::Op;

pub use execution::{CycleResult, execute};
pub use pins::Pins;

/// A cycle the core executed and committed on a clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// The instruction executed.
    pub op: Op,
    /// Its output and staged writeback.
    pub result: CycleResult,
    /// `true` if a register actually changed; `false` for non-writing formats
    /// and for writes aimed at `x0`.
    pub committed: bool,
}

/// The 8-bit core.
///
/// Every cycle is a total function of the register file and the instruction
/// on the input buses; the only state carried between cycles is the register
/// file and, for `IllegalOpPolicy::HoldOutput`, the last driven output.
#[derive(Clone, Debug)]
pub struct Cpu {
    regs: Gpr,
    last_output: u8,
    policy: IllegalOpPolicy,
    trace: bool,
}

impl Cpu {
    /// Creates a core in its reset state.
    pub const fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            last_output: 0,
            policy: config.core.illegal_op,
            trace: config.general.trace_instructions,
        }
    }

    /// Returns the register file.
    pub const fn regs(&self) -> &Gpr {
        &self.regs
    }

    /// Forces the register file and the held output to zero.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.last_output = 0;
    }

    /// Evaluates the cycle the pins describe without committing it.
    ///
    /// Returns `None` while the core is in reset or disabled.
    pub fn evaluate(&self, pins: &Pins) -> Option<(Op, CycleResult)> {
        if !pins.active() {
            return None;
        }
        let op = Op::from_decoded(&decode(pins.word()));
        Some((op, execute(&self.regs, &op, self.policy, self.last_output)))
    }

    /// Returns the value on `uo_out` for the current pins.
    ///
    /// Reads as 0 while the core is in reset or disabled.
    pub fn output(&self, pins: &Pins) -> u8 {
        self.evaluate(pins).map_or(0, |(_, r)| r.output)
    }

    /// Applies one rising clock edge.
    ///
    /// With `rst_n` low the register file is cleared; with `ena` low nothing
    /// happens. Otherwise the staged register write is committed.
    ///
    /// # Returns
    ///
    /// The retired cycle, or `None` if the core was in reset or disabled.
    pub fn clock(&mut self, pins: &Pins) -> Option<Retired> {
        if !pins.rst_n {
            debug!("reset asserted, clearing register file");
            self.reset();
            return None;
        }

        let (op, result) = self.evaluate(pins)?;
        let committed = result
            .writeback
            .is_some_and(|(rd, v)| self.regs.write(rd, v));
        self.last_output = result.output;

        if self.trace {
            info!(word = pins.word(), %op, output = result.signed_output(), committed, "retire");
        } else {
            trace!(word = pins.word(), %op, output = result.signed_output(), committed, "retire");
        }

        Some(Retired {
            op,
            result,
            committed,
        })
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
