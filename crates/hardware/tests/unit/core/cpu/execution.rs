//! Single-cycle execution: result multiplexing and writeback staging.

use alu8_core::common::Reg;
use alu8_core::config::IllegalOpPolicy;
use alu8_core::core::arch::Gpr;
use alu8_core::core::cpu::{CycleResult, execute};
use alu8_core::isa::{BranchOp, ImmOp, Op, RegOp};
use pretty_assertions::assert_eq;

fn r(n: u8) -> Reg {
    Reg::from_bits(n)
}

fn regs() -> Gpr {
    let mut gpr = Gpr::new();
    let _ = gpr.write(r(2), 3);
    let _ = gpr.write(r(3), 6);
    let _ = gpr.write(r(5), -5);
    gpr
}

fn run(op: Op) -> CycleResult {
    execute(&regs(), &op, IllegalOpPolicy::DriveZero, 0)
}

#[test]
fn r_type_drives_and_stages_the_alu_result() {
    let result = run(Op::Reg {
        op: RegOp::Sub,
        rd: r(7),
        rs1: r(2),
        rs2: r(3),
    });
    assert_eq!(result.signed_output(), -3);
    assert_eq!(result.writeback, Some((r(7), -3)));
}

#[test]
fn i_type_uses_the_immediate_as_operand_b() {
    let result = run(Op::Imm {
        op: ImmOp::Addi,
        rd: r(6),
        rs1: r(5),
        imm: 4,
    });
    assert_eq!(result.signed_output(), -1);
    assert_eq!(result.writeback, Some((r(6), -1)));
}

#[test]
fn load_drives_the_immediate() {
    let result = run(Op::Load { rd: r(1), imm: -128 });
    assert_eq!(result.output, 0x80);
    assert_eq!(result.writeback, Some((r(1), -128)));
}

#[test]
fn store_drives_rs1_without_writing() {
    let result = run(Op::Store { rs1: r(5) });
    assert_eq!(result.signed_output(), -5);
    assert_eq!(result.writeback, None);
}

#[test]
fn branch_drives_the_comparison_without_writing() {
    let taken = run(Op::Branch {
        op: BranchOp::Blt,
        rs1: r(5),
        rs2: r(2),
    });
    assert_eq!(taken, CycleResult { output: 1, writeback: None });

    let not_taken = run(Op::Branch {
        op: BranchOp::Beq,
        rs1: r(2),
        rs2: r(3),
    });
    assert_eq!(not_taken, CycleResult { output: 0, writeback: None });
}

#[test]
fn write_to_x0_is_staged_and_reads_back_zero() {
    let result = run(Op::Reg {
        op: RegOp::Add,
        rd: Reg::ZERO,
        rs1: r(2),
        rs2: r(3),
    });
    assert_eq!(result.output, 9);
    assert_eq!(result.writeback, Some((Reg::ZERO, 9)));

    let mut gpr = regs();
    assert!(!gpr.write(Reg::ZERO, 9));
    assert_eq!(gpr.read(Reg::ZERO), 0);
}

#[test]
fn reads_see_the_register_file_before_writeback() {
    let result = run(Op::Reg {
        op: RegOp::Add,
        rd: r(2),
        rs1: r(2),
        rs2: r(2),
    });
    assert_eq!(result.output, 6);
    assert_eq!(regs().read(r(2)), 3);
}
