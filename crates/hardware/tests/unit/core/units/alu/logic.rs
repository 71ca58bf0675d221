//! Logic unit tests: AND, OR, XOR.

use alu8_core::core::signals::AluOp;
use alu8_core::core::units::alu::Alu;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::and(AluOp::And, 0b0101, 0b0011, 0b0001)]
#[case::or(AluOp::Or, 0b0101, 0b0011, 0b0111)]
#[case::xor(AluOp::Xor, 0b0101, 0b0011, 0b0110)]
#[case::and_sign(AluOp::And, -1, -128, -128)]
#[case::or_sign(AluOp::Or, 0x7F, -128, -1)]
#[case::xor_self(AluOp::Xor, -93, -93, 0)]
fn logic(#[case] op: AluOp, #[case] a: i8, #[case] b: i8, #[case] expected: i8) {
    assert_eq!(Alu::execute(op, a, b), expected);
}

proptest! {
    #[test]
    fn bitwise_identities(a in any::<i8>(), b in any::<i8>()) {
        let and = Alu::execute(AluOp::And, a, b);
        let or = Alu::execute(AluOp::Or, a, b);
        let xor = Alu::execute(AluOp::Xor, a, b);
        prop_assert_eq!(xor, Alu::execute(AluOp::Xor, or, and));
        prop_assert_eq!(Alu::execute(AluOp::And, a, -1), a);
        prop_assert_eq!(Alu::execute(AluOp::Or, a, 0), a);
    }
}
