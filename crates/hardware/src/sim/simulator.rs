//! Simulator: owns the core and the pin state side-by-side.
//!
//! The simulator drives the core the way a test bench does: put a word on the
//! input buses, let it propagate, sample `uo_out`, then apply one rising clock
//! edge. The sampled output therefore reflects the register file as it was
//! before the instruction's own writeback.

use tracing::debug;

use crate::common::Reg;
use crate::config::Config;
use crate::core::cpu::{Cpu, Pins, Retired};
use crate::isa::disasm::disassemble;
use crate::isa::op::Op;
use crate::sim::trace::{TraceEntry, Writeback};
use crate::stats::SimStats;

/// Top-level simulator: core state, input pins, cycle count and statistics.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The core.
    pub cpu: Cpu,
    /// Statistics collected since construction.
    pub stats: SimStats,
    pins: Pins,
    reset_cycles: u32,
}

impl Simulator {
    /// Creates a simulator with the core enabled and out of reset.
    pub fn new(config: &Config) -> Self {
        Self {
            cpu: Cpu::new(config),
            stats: SimStats::default(),
            pins: Pins::default(),
            reset_cycles: config.core.reset_cycles,
        }
    }

    /// Returns the current pin state.
    pub const fn pins(&self) -> Pins {
        self.pins
    }

    /// Returns the number of clock edges applied so far.
    pub const fn cycle(&self) -> u64 {
        self.stats.cycles
    }

    /// Reads a register of the core.
    pub const fn reg(&self, reg: Reg) -> i8 {
        self.cpu.regs().read(reg)
    }

    /// Returns the current value of `uo_out`.
    pub fn output(&self) -> u8 {
        self.cpu.output(&self.pins)
    }

    /// Drives `ena`.
    pub fn set_enable(&mut self, ena: bool) {
        if self.pins.ena != ena {
            debug!(ena, "enable changed");
        }
        self.pins.ena = ena;
    }

    /// Drives `rst_n`.
    pub fn set_reset_n(&mut self, rst_n: bool) {
        self.pins.rst_n = rst_n;
    }

    /// Applies one rising clock edge with the current pins.
    pub fn tick(&mut self) -> Option<Retired> {
        self.stats.cycles += 1;
        if !self.pins.rst_n {
            self.stats.cycles_reset += 1;
        } else if !self.pins.ena {
            self.stats.cycles_disabled += 1;
        }
        let retired = self.cpu.clock(&self.pins);
        if let Some(r) = &retired {
            self.stats.record(r);
        }
        retired
    }

    /// Applies `n` clock edges with the current pins.
    pub fn tick_n(&mut self, n: u32) {
        for _ in 0..n {
            let _ = self.tick();
        }
    }

    /// Runs the reset sequence.
    ///
    /// Enables the core, zeroes both input buses, holds `rst_n` low for the
    /// configured number of cycles, then releases it and lets the same number of
    /// cycles pass.
    pub fn apply_reset(&mut self) {
        debug!(cycles = self.reset_cycles, "applying reset");
        self.pins = Pins {
            ui_in: 0,
            uio_in: 0,
            ena: true,
            rst_n: false,
        };
        self.tick_n(self.reset_cycles);
        self.pins.rst_n = true;
        self.tick_n(self.reset_cycles);
    }

    /// Issues one instruction word and clocks it in.
    ///
    /// # Returns
    ///
    /// A trace entry carrying the output sampled before the clock edge.
    pub fn issue_word(&mut self, low: u8, high: u8) -> TraceEntry {
        self.pins.ui_in = low;
        self.pins.uio_in = high;
        let word = self.pins.word();
        let output = self.output();
        let retired = self.tick();

        TraceEntry {
            cycle: self.stats.cycles,
            word,
            disasm: disassemble(word),
            output: output as i8,
            output_raw: output,
            executed: retired.is_some(),
            writeback: retired.and_then(|r| {
                r.result
                    .writeback
                    .map(|(rd, v)| Writeback::new(rd, v, r.committed))
            }),
        }
    }

    /// Issues one instruction and clocks it in.
    pub fn issue(&mut self, op: &Op) -> TraceEntry {
        let (low, high) = op.bytes();
        self.issue_word(low, high)
    }

    /// Issues every instruction of a program in order.
    pub fn run(&mut self, program: &[Op]) -> Vec<TraceEntry> {
        program.iter().map(|op| self.issue(op)).collect()
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
