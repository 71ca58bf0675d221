//! Simulation statistics collection and reporting.
//!
//! This module tracks what the core did over a run. It provides:
//! 1. **Cycles:** Clock edges, split into executing, reset and disabled cycles.
//! 2. **Instruction mix:** Counts by format (R, I, L, S, B, illegal).
//! 3. **Writeback:** Committed register writes and writes discarded at `x0`.
//! 4. **Comparator:** How many branch comparisons evaluated true.

use std::fmt;

use crate::core::cpu::Retired;
use crate::isa::op::OpClass;

/// Simulation statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total clock edges applied.
    pub cycles: u64,
    /// Clock edges with `rst_n` low.
    pub cycles_reset: u64,
    /// Clock edges with `ena` low (and `rst_n` high).
    pub cycles_disabled: u64,
    /// Instructions executed and committed.
    pub instructions_retired: u64,

    /// R-type instructions retired.
    pub inst_reg: u64,
    /// I-type instructions retired.
    pub inst_imm: u64,
    /// L-type instructions retired.
    pub inst_load: u64,
    /// S-type instructions retired.
    pub inst_store: u64,
    /// B-type instructions retired.
    pub inst_branch: u64,
    /// Unassigned encodings retired.
    pub inst_illegal: u64,

    /// Register writes that changed a register.
    pub reg_writes: u64,
    /// Register writes discarded because they targeted `x0`.
    pub x0_writes_discarded: u64,
    /// Branch comparisons that evaluated true.
    pub branches_true: u64,
}

impl SimStats {
    /// Records one retired cycle.
    pub fn record(&mut self, retired: &Retired) {
        self.instructions_retired += 1;
        match retired.op.class() {
            OpClass::Reg => self.inst_reg += 1,
            OpClass::Imm => self.inst_imm += 1,
            OpClass::Load => self.inst_load += 1,
            OpClass::Store => self.inst_store += 1,
            OpClass::Branch => {
                self.inst_branch += 1;
                if retired.result.output != 0 {
                    self.branches_true += 1;
                }
            }
            OpClass::Illegal => self.inst_illegal += 1,
        }
        if retired.committed {
            self.reg_writes += 1;
        } else if retired.result.writeback.is_some() {
            self.x0_writes_discarded += 1;
        }
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "ALU8 CORE STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "  cycles.reset           {}", self.cycles_reset)?;
        writeln!(f, "  cycles.disabled        {}", self.cycles_disabled)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("reg", self.inst_reg),
            ("imm", self.inst_imm),
            ("load", self.inst_load),
            ("store", self.inst_store),
            ("branch", self.inst_branch),
            ("illegal", self.inst_illegal),
        ] {
            writeln!(f, "  op.{:<19}{} ({:.2}%)", name, n, pct(n))?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "WRITEBACK")?;
        writeln!(f, "  wb.committed           {}", self.reg_writes)?;
        writeln!(f, "  wb.x0_discarded        {}", self.x0_writes_discarded)?;
        writeln!(f, "  branch.true            {}", self.branches_true)?;
        writeln!(f, "==========================================================")
    }
}
