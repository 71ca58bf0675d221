//! Single-Cycle Execution.
//!
//! This module implements one cycle of the datapath as a pure function of the
//! register file and the classified instruction. It performs the following:
//! 1. **Operand Read:** Reads `rs1` and either `rs2` or the immediate.
//! 2. **Execute:** Runs the ALU and the comparator.
//! 3. **Result Multiplexing:** Selects the unit that drives the output port.
//! 4. **Writeback Staging:** Produces the register write the next clock edge commits.

use crate::common::Reg;
use crate::config::IllegalOpPolicy;
use crate::core::arch::Gpr;
use crate::core::signals::{ControlSignals, OpBSrc, OutSel};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Comparator;
use crate::isa::op::Op;

/// Outcome of one cycle, before the clock edge commits it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleResult {
    /// Value driven onto the output port.
    pub output: u8,
    /// Register write staged for the clock edge, if the format writes one.
    ///
    /// A write to `x0` is staged like any other and dropped at commit.
    pub writeback: Option<(Reg, i8)>,
}

impl CycleResult {
    /// Returns the output port value reinterpreted as signed.
    pub const fn signed_output(&self) -> i8 {
        self.output as i8
    }
}

/// Executes one cycle.
///
/// # Arguments
///
/// * `regs`   - Register file as seen at the start of the cycle.
/// * `op`     - The instruction on the input buses.
/// * `policy` - Output policy for illegal encodings.
/// * `held`   - The last value the core drove, used by `IllegalOpPolicy::HoldOutput`.
pub fn execute(regs: &Gpr, op: &Op, policy: IllegalOpPolicy, held: u8) -> CycleResult {
    let ctrl = ControlSignals::from_op(op);

    let a = regs.read(ctrl.rs1);
    let b = match ctrl.b_src {
        OpBSrc::Reg2 => regs.read(ctrl.rs2),
        OpBSrc::Imm => ctrl.imm,
    };

    let value = match ctrl.out_sel {
        OutSel::Alu => Some(Alu::execute(ctrl.alu, a, b)),
        OutSel::Imm => Some(ctrl.imm),
        OutSel::Rs1 => Some(a),
        OutSel::Branch => ctrl
            .cmp
            .map(|cmp| Comparator::evaluate(cmp, a, b) as i8),
        OutSel::None => None,
    };

    let output = value.map_or_else(
        || match policy {
            IllegalOpPolicy::DriveZero => 0,
            IllegalOpPolicy::HoldOutput => held,
        },
        |v| v as u8,
    );

    let writeback = if ctrl.reg_write {
        value.map(|v| (ctrl.rd, v))
    } else {
        None
    };

    CycleResult { output, writeback }
}
