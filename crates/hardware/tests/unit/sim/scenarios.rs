//! End-to-end instruction sequences driven through the pins.

use alu8_core::common::Reg;
use alu8_core::isa::{BranchOp, ImmOp, Op, RegOp};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::common::harness::TestContext;
use crate::common::model::Model;

use BranchOp::{Beq, Blt, Bne};
use ImmOp::{Addi, Sll, Sra, Srl, Subi};
use RegOp::{Add, And, Or, Slt, Sub, Xor};

#[test]
fn load_then_store_returns_every_value() {
    let mut ctx = TestContext::new();
    for r in 1..8 {
        for v in i8::MIN..=i8::MAX {
            assert_eq!(ctx.load(r, v), v);
            assert_eq!(ctx.store(r), v, "x{r}");
        }
    }
}

#[test]
fn x0_stays_zero() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.store(0), 0);
    assert_eq!(ctx.load(0, 10), 10);
    assert_eq!(ctx.store(0), 0);

    let _ = ctx.load(1, 10);
    assert_eq!(ctx.r(Add, 0, 1, 1), 20);
    assert_eq!(ctx.store(0), 0);
    assert_eq!(ctx.i(Addi, 0, 1, 5), 15);
    assert_eq!(ctx.store(0), 0);
}

#[test]
fn register_register_sequence() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(2, 3);
    let _ = ctx.load(3, 6);

    assert_eq!(ctx.r(And, 4, 2, 3), 2);
    assert_eq!(ctx.store(4), 2);
    assert_eq!(ctx.r(Or, 5, 2, 3), 7);
    assert_eq!(ctx.r(Add, 6, 2, 3), 9);
    assert_eq!(ctx.r(Sub, 7, 2, 3), -3);
    assert_eq!(ctx.store(6), 9);
    assert_eq!(ctx.store(7), -3);
    assert_eq!(ctx.r(Xor, 4, 2, 3), 5);
    assert_eq!(ctx.r(Slt, 5, 2, 3), 1);
    assert_eq!(ctx.store(5), 1);
}

#[test]
fn overflow_wraps() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(2, 127);
    let _ = ctx.load(3, 1);
    assert_eq!(ctx.r(Add, 4, 2, 3), -128);

    let _ = ctx.load(2, -128);
    assert_eq!(ctx.r(Sub, 4, 2, 3), 127);
    assert_eq!(ctx.reg(4), 127);
}

#[test]
fn immediate_sequence() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(2, 3);
    let _ = ctx.load(5, 1);

    assert_eq!(ctx.i(Addi, 6, 5, 4), 5);
    assert_eq!(ctx.i(Subi, 7, 5, 4), -3);
    assert_eq!(ctx.i(Sll, 1, 2, 1), 6);
    assert_eq!(ctx.i(Sll, 1, 2, 7), -128);

    let _ = ctx.load(7, -5);
    assert_eq!(ctx.i(Srl, 1, 7, 1), 125);
    assert_eq!(ctx.i(Srl, 1, 2, 3), 0);
    assert_eq!(ctx.i(Sra, 1, 7, 1), -3);

    let _ = ctx.load(7, -128);
    assert_eq!(ctx.i(Sra, 1, 7, 4), -8);
    assert_eq!(ctx.i(Srl, 1, 7, 1), 64);
}

#[test]
fn shift_amounts_wrap_at_eight() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(5, 1);
    assert_eq!(ctx.i(Sll, 6, 5, 7), -128);
    assert_eq!(ctx.i(Srl, 7, 5, 7), 0);
    assert_eq!(ctx.i(Sll, 6, 5, 8), 1);
    assert_eq!(ctx.i(Srl, 6, 5, 8), 1);
}

#[test]
fn wide_i_type_immediates_execute_truncated() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(4, 100);
    // 60 = 0b11_1100; the 5-bit field keeps 0b11100 = -4.
    assert_eq!(ctx.i(Addi, 5, 4, 60), 96);

    let _ = ctx.load(1, 10);
    // 127 keeps 0b11111 = -1.
    assert_eq!(ctx.i(Addi, 1, 1, 127), 9);
}

#[test]
fn branch_sequence() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(3, 6);
    let _ = ctx.load(4, 3);
    let _ = ctx.load(5, -5);

    assert_eq!(ctx.b(Beq, 3, 4), 0);
    assert_eq!(ctx.b(Bne, 3, 5), 1);
    assert_eq!(ctx.b(Blt, 5, 4), 1);
    assert_eq!(ctx.b(Beq, 1, 1), 1);
    assert_eq!(ctx.b(Bne, 1, 1), 0);

    let _ = ctx.load(2, -128);
    let _ = ctx.load(3, 127);
    assert_eq!(ctx.b(Blt, 2, 3), 1);
    assert_eq!(ctx.b(Blt, 3, 2), 0);
}

#[test]
fn branches_do_not_write_registers() {
    let mut ctx = TestContext::new();
    let _ = ctx.load(1, 4);
    let _ = ctx.load(2, 4);
    let before = ctx.sim.cpu.regs().snapshot();
    let _ = ctx.b(Beq, 1, 2);
    let _ = ctx.b(Blt, 2, 1);
    let _ = ctx.store(1);
    assert_eq!(ctx.sim.cpu.regs().snapshot(), before);
}

#[test]
fn every_destination_and_source_register() {
    let mut ctx = TestContext::new();
    let mut model = Model::default();
    for rd in 0..8u8 {
        for rs1 in 0..8u8 {
            let program = [
                Op::Load {
                    rd: Reg::from_bits(rs1),
                    imm: 5,
                },
                Op::Load {
                    rd: Reg::from_bits(3),
                    imm: 3,
                },
                Op::Reg {
                    op: Add,
                    rd: Reg::from_bits(rd),
                    rs1: Reg::from_bits(rs1),
                    rs2: Reg::from_bits(3),
                },
                Op::Store {
                    rs1: Reg::from_bits(rd),
                },
            ];
            for op in &program {
                assert_eq!(ctx.issue(*op), model.apply(op), "x{rd} <- x{rs1} + x3: {op}");
            }
        }
    }
}

fn reg() -> impl Strategy<Value = Reg> {
    (0u8..8).prop_map(Reg::from_bits)
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (prop::sample::select(RegOp::ALL.to_vec()), reg(), reg(), reg())
            .prop_map(|(op, rd, rs1, rs2)| Op::Reg { op, rd, rs1, rs2 }),
        (prop::sample::select(ImmOp::ALL.to_vec()), reg(), reg(), any::<i8>())
            .prop_map(|(op, rd, rs1, imm)| Op::Imm { op, rd, rs1, imm }),
        (reg(), any::<i8>()).prop_map(|(rd, imm)| Op::Load { rd, imm }),
        reg().prop_map(|rs1| Op::Store { rs1 }),
        (prop::sample::select(BranchOp::ALL.to_vec()), reg(), reg())
            .prop_map(|(op, rs1, rs2)| Op::Branch { op, rs1, rs2 }),
    ]
}

proptest! {
    #[test]
    fn core_matches_reference_model(program in prop::collection::vec(op(), 1..64)) {
        let mut ctx = TestContext::new();
        let mut model = Model::default();
        for op in &program {
            prop_assert_eq!(ctx.issue(*op), model.apply(op), "{}", op);
        }
        for r in Reg::all() {
            prop_assert_eq!(ctx.sim.reg(r), model.get(r));
        }
    }
}
