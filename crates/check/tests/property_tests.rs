//! Property-based tests for nebula-check.

use nebula_check::message::{ELLIPSIS, MAX_WIDTH, stringify};
use nebula_check::prelude::*;
use proptest::prelude::*;

// ============================================================================
// NEGATION: is(c) passes iff is_not(c) fails
// ============================================================================

proptest! {
    #[test]
    fn builtin_negation_is_complement(n in any::<i32>()) {
        prop_assert_eq!(positive().negate().test(&n), !positive().test(&n));
        prop_assert_eq!(even().negate().test(&n), !even().test(&n));
        prop_assert_eq!(zero().negate().test(&n), !zero().test(&n));
    }

    #[test]
    fn chain_negation_is_complement(n in any::<i32>()) {
        let holds = Check::that_int(n).is(odd()).is_ok();
        let negated = Check::that_int(n).is_not(odd()).is_ok();
        prop_assert_ne!(holds, negated);
    }

    #[test]
    fn even_and_odd_partition(n in any::<i32>()) {
        prop_assert_ne!(even().test(&n), odd().test(&n));
    }

    #[test]
    fn multiple_of_zero_only_for_zero(n in any::<i32>()) {
        prop_assert_eq!(multiple_of().exists(&n, &0), n == 0);
        prop_assert!(multiple_of().exists(&n, &1));
    }
}

// ============================================================================
// COMBINATOR LAWS
// ============================================================================

proptest! {
    #[test]
    fn and_holds_iff_both_hold(n in any::<i32>()) {
        let both = positive().and(even()).test(&n);
        prop_assert_eq!(both, positive().test(&n) && even().test(&n));
    }

    #[test]
    fn or_holds_iff_either_holds(n in any::<i32>()) {
        let either = negative().or(odd()).test(&n);
        prop_assert_eq!(either, negative().test(&n) || odd().test(&n));
    }

    #[test]
    fn converse_swaps_operands(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(gt().converse().exists(&a, &b), lt().exists(&a, &b));
    }
}

// ============================================================================
// BOUNDED RENDERING
// ============================================================================

proptest! {
    #[test]
    fn rendering_is_bounded(s in ".{0,300}") {
        let shown = stringify(&s, "alloc::string::String");
        prop_assert!(shown.chars().count() <= MAX_WIDTH + ELLIPSIS.len());
    }

    #[test]
    fn failure_messages_are_bounded(s in "[a-z]{1,300}") {
        let err = Check::that_named(s, "text").is(empty()).unwrap_err();
        let prefix = "text must be empty (was ";
        prop_assert!(err.to_string().starts_with(prefix));
        prop_assert!(err.to_string().chars().count() <= prefix.len() + MAX_WIDTH + ELLIPSIS.len() + 1);
    }

    #[test]
    fn range_accepts_exactly_fitting_segments(len in 0usize..64, from in 0usize..80, to in 0usize..80) {
        let buf = vec![0u8; len];
        let result = from_to(&buf, from, to);
        prop_assert_eq!(result.is_ok(), from <= to && to <= len);
    }
}
