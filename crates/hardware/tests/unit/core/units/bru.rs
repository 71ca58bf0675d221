//! Comparator tests.

use alu8_core::core::units::bru::Comparator;
use alu8_core::isa::BranchOp;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::beq_equal(BranchOp::Beq, 6, 6, true)]
#[case::beq_differs(BranchOp::Beq, 6, 3, false)]
#[case::bne_differs(BranchOp::Bne, 6, -5, true)]
#[case::bne_equal(BranchOp::Bne, 1, 1, false)]
#[case::blt_signed(BranchOp::Blt, -5, 3, true)]
#[case::blt_not_less(BranchOp::Blt, 127, -128, false)]
#[case::blt_equal(BranchOp::Blt, 0, 0, false)]
fn compare(#[case] op: BranchOp, #[case] a: i8, #[case] b: i8, #[case] expected: bool) {
    assert_eq!(Comparator::evaluate(op, a, b), expected);
}

proptest! {
    #[test]
    fn exactly_one_ordering_holds(a in any::<i8>(), b in any::<i8>()) {
        let lt = Comparator::evaluate(BranchOp::Blt, a, b);
        let gt = Comparator::evaluate(BranchOp::Blt, b, a);
        let eq = Comparator::evaluate(BranchOp::Beq, a, b);
        prop_assert_eq!(u8::from(lt) + u8::from(gt) + u8::from(eq), 1);
    }

    #[test]
    fn bne_negates_beq(a in any::<i8>(), b in any::<i8>()) {
        prop_assert_eq!(
            Comparator::evaluate(BranchOp::Bne, a, b),
            !Comparator::evaluate(BranchOp::Beq, a, b)
        );
    }
}
