//! Arithmetic unit tests: ADD, SUB, SLT.

use alu8_core::core::signals::AluOp;
use alu8_core::core::units::alu::Alu;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::add(AluOp::Add, 3, 6, 9)]
#[case::add_negative(AluOp::Add, -5, 3, -2)]
#[case::add_overflow(AluOp::Add, 127, 1, -128)]
#[case::add_min(AluOp::Add, -128, -128, 0)]
#[case::sub(AluOp::Sub, 3, 6, -3)]
#[case::sub_underflow(AluOp::Sub, -128, 1, 127)]
#[case::sub_min(AluOp::Sub, 0, -128, -128)]
#[case::slt_true(AluOp::Slt, -5, 3, 1)]
#[case::slt_false(AluOp::Slt, 3, -5, 0)]
#[case::slt_equal(AluOp::Slt, 7, 7, 0)]
#[case::slt_signed_extremes(AluOp::Slt, -128, 127, 1)]
fn arithmetic(#[case] op: AluOp, #[case] a: i8, #[case] b: i8, #[case] expected: i8) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

proptest! {
    #[test]
    fn add_wraps_mod_256(a in any::<i8>(), b in any::<i8>()) {
        let wide = (i16::from(a) + i16::from(b)) & 0xFF;
        prop_assert_eq!(Alu::execute(AluOp::Add, a, b) as u8, wide as u8);
    }

    #[test]
    fn sub_wraps_mod_256(a in any::<i8>(), b in any::<i8>()) {
        let wide = (i16::from(a) - i16::from(b)) & 0xFF;
        prop_assert_eq!(Alu::execute(AluOp::Sub, a, b) as u8, wide as u8);
    }

    #[test]
    fn add_then_sub_restores(a in any::<i8>(), b in any::<i8>()) {
        let sum = Alu::execute(AluOp::Add, a, b);
        prop_assert_eq!(Alu::execute(AluOp::Sub, sum, b), a);
    }

    #[test]
    fn slt_is_signed_less_than(a in any::<i8>(), b in any::<i8>()) {
        prop_assert_eq!(Alu::execute(AluOp::Slt, a, b), i8::from(a < b));
    }
}
