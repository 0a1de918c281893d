use nebula_check::message::{ELLIPSIS, MAX_WIDTH};
use nebula_check::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn lookalike_closure_gets_generic_message() {
    let err = Check::that_int_named(-5, "age")
        .is(|n: &i32| *n > 0)
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid value for age: -5");
}

#[test]
fn composites_get_generic_message() {
    let err = Check::that_int_named(-5, "age")
        .is(positive().and(even()))
        .unwrap_err();
    assert_eq!(err.to_string(), "invalid value for age: -5");

    let err = Check::that_int_named(3, "n").is(not(odd())).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for n: 3");
}

#[test]
fn is_not_reuses_builtin_formatter() {
    let err = Check::that_int_named(0, "n").is_not(zero()).unwrap_err();
    assert_eq!(err.to_string(), "n must not be zero (was 0)");

    let err = Check::that_named(Vec::<u8>::new(), "buf")
        .is(not_empty())
        .unwrap_err();
    assert_eq!(err.to_string(), "buf must not be empty");
}

#[test]
fn negation_symmetry_on_chains() {
    for n in [-2, -1, 0, 1, 2] {
        let holds = Check::that_int(n).is(even()).is_ok();
        let negated = Check::that_int(n).is_not(even()).is_ok();
        assert_ne!(holds, negated, "n = {n}");
    }
}

#[test]
fn custom_template_slots() {
    let err = Check::that_int_named(7, "n")
        .is_msg(even(), "${name}=${arg} (${type}) failed ${test}; hint: ${5}", &[&"use 8"])
        .unwrap_err();
    assert_eq!(err.to_string(), "n=7 (i32) failed Even; hint: use 8");
}

#[test]
fn custom_template_on_relation() {
    let err = Check::that_named("abc", "code")
        .is_msg(starts_with().to("x"), "${name} should begin with ${obj}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "code should begin with \"x\"");
}

#[test]
fn verbatim_template_is_not_parsed() {
    let err = Check::that_int(1)
        .is_msg(even(), "literal ${0} and ${arg}", VERBATIM)
        .unwrap_err();
    assert_eq!(err.to_string(), "literal ${0} and ${arg}");
}

#[test]
fn long_values_are_bounded() {
    let long = "x".repeat(500);
    let err = Check::that_named(long, "blob").is(empty()).unwrap_err();
    let message = err.to_string();
    assert!(message.ends_with(&format!("{ELLIPSIS})")), "{message}");
    assert!(message.chars().count() < MAX_WIDTH + 40, "{message}");
}

#[test]
fn collections_report_their_size() {
    let err = Check::that_named(vec![1, 2, 3], "v")
        .is(contains().to(9))
        .unwrap_err();
    assert_eq!(err.to_string(), "v must contain 9 (was Vec[3] of [1, 2, 3])");
}

#[test]
fn closure_property_has_readable_name() {
    let err = Check::that_named(vec![1, 2], "items")
        .has(|v: &Vec<i32>| v.iter().sum::<i32>(), gt().to(10))
        .unwrap_err();
    assert_eq!(err.to_string(), "property(items) must be > 10 (was 3)");

    let err = Check::that_named(vec![1, 2], "items")
        .has_named_msg(
            |v: &Vec<i32>| v.iter().sum::<i32>(),
            "sum",
            gt().to(10),
            "${name} is only ${arg}",
            &[],
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "items.sum is only 3");
}

#[test]
fn stray_placeholder_opener_is_literal() {
    let err = Check::that_int(7)
        .is_msg(even(), "cost ${abc ${1} units", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "cost ${abc 7 units");
}
