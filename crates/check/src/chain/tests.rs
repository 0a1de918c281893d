use std::cell::Cell;

use pretty_assertions::assert_eq;

use super::*;
use crate::checks::{
    empty, even, gt, gte, lt, lte, negative, not_blank, not_null, odd, positive, starts_with, zero,
};
use crate::foundation::Relation;
use crate::properties::{abs, char_count, len, trim};
use crate::registry::lookups;

#[test]
fn custom_template_skips_registry() {
    let before = lookups::count();
    let err = Check::that_int(-1)
        .is_msg(positive(), "custom ${1}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "custom -1");
    assert_eq!(lookups::count(), before);

    let err = Check::that_int(-1).is(positive()).unwrap_err();
    assert_eq!(err.to_string(), "argument must be positive (was -1)");
    assert_eq!(lookups::count(), before + 1);
}

#[test]
fn supplier_skips_registry_and_factory() {
    let before = lookups::count();
    let err = Check::that_int(3)
        .is_or_else(even(), || CheckError::Unsupported("odd input".into()))
        .unwrap_err();
    assert_eq!(err.kind(), "unsupported");
    assert_eq!(err.to_string(), "odd input");
    assert_eq!(lookups::count(), before);
}

#[test]
fn fail_fast_stops_at_first_failure() {
    let calls = Cell::new(0);
    let counted = |_: &i32| {
        calls.set(calls.get() + 1);
        true
    };

    let result = Check::that_int(5)
        .is(&counted)
        .and_then(|c| c.is(|n: &i32| *n > 10))
        .and_then(|c| c.is(&counted));

    assert!(result.is_err());
    assert_eq!(calls.get(), 1);
}

#[test]
fn negation_keeps_builtin_message() {
    let err = Check::that_int_named(4, "n").is_not(even()).unwrap_err();
    assert_eq!(err.to_string(), "n must not be even (was 4)");

    let err = Check::that_int_named(4, "n").is(even().negate()).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for n: 4");
}

#[test]
fn property_failure_names_derived_value() {
    let err = Check::that_named(vec![1], "items")
        .has(len(), gte().to(3))
        .unwrap_err();
    assert_eq!(err.to_string(), "items.len() must be >= 3 (was 1)");
}

#[test]
fn unregistered_relation_uses_fallback() {
    let err = Check::that(2)
        .is(Relation::to(|a: &i32, b: &i32| a > b, 5))
        .unwrap_err();
    assert_eq!(err.to_string(), "no such relation between 2 and 5");
}

#[test]
fn not_null_entry_point() {
    let err = Check::not_null_named(None::<String>, "name").unwrap_err();
    assert!(matches!(err, CheckError::Null(_)));
    assert_eq!(err.to_string(), "name must not be null");

    let err = Check::that_named(None::<String>, "name")
        .is(not_null())
        .unwrap_err();
    assert!(err.is_illegal_argument());
    assert_eq!(err.to_string(), "name must not be null");

    let value = Check::not_null(Some(3)).map(Chain::ok);
    assert_eq!(value.ok(), Some(3));
}

#[test]
fn pivot_keeps_factory() {
    let err = Check::on_named(factory::illegal_state, "x", "first")
        .is(|s: &&str| !s.is_empty())
        .and_then(|c| c.and_int_named(0, "count").is(positive()))
        .unwrap_err();
    assert_eq!(err.kind(), "illegal_state");
    assert_eq!(err.to_string(), "count must be positive (was 0)");
}

#[test]
fn terminal_operations() {
    let doubled = Check::that_int(21).is(positive()).map(|c| c.ok_map(|n| n * 2));
    assert_eq!(doubled.ok(), Some(42));

    let seen = Cell::new(None);
    Check::that_named("abc", "s")
        .is(|s: &&str| s.len() == 3)
        .map(|c| c.then(|s| seen.set(Some(s))))
        .unwrap();
    assert_eq!(seen.get(), Some("abc"));

    let chain = Check::that_named(1, "one");
    assert_eq!(chain.name(), Some("one"));
    assert_eq!(*chain.value(), 1);
}

#[cfg(feature = "json")]
#[test]
fn misuse_is_reported_as_corrupt_check() {
    use crate::checks::json_has_key;
    use serde_json::json;

    let err = Check::that_named(json!([1, 2]), "doc")
        .is(json_has_key().to("id"))
        .unwrap_err();
    assert_eq!(err.kind(), "corrupt_check");

    let err = Check::that_named(json!({"id": 1}), "doc")
        .is(json_has_key().to("name"))
        .unwrap_err();
    assert!(
        err.to_string().starts_with("doc must have key \"name\" (was "),
        "{err}"
    );
}

#[test]
fn negated_templates() {
    let err = Check::that_named("abc", "code")
        .is_not_msg(starts_with().to("a"), "${name} must not start with ${obj}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "code must not start with \"a\"");

    let err = Check::that_int_named(4, "n")
        .is_not_msg(even(), "${name}=${arg} is ${test}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "n=4 is Even");
}

#[test]
fn negated_suppliers() {
    let before = lookups::count();
    let err = Check::that(Vec::<i32>::new())
        .is_not_or_else(empty(), || CheckError::Unsupported("nothing to do".into()))
        .unwrap_err();
    assert_eq!(err.kind(), "unsupported");
    assert_eq!(err.to_string(), "nothing to do");
    assert!(Check::that(vec![1]).is_not_or_else(empty(), || CheckError::Null(String::new())).is_ok());

    let err = Check::that_int(-1)
        .is_not_or_else(negative(), || CheckError::IllegalState("below zero".into()))
        .unwrap_err();
    assert_eq!(err.kind(), "illegal_state");
    assert_eq!(lookups::count(), before);
}

#[test]
fn property_supplier_overrides_chain_factory() {
    let err = Check::on_named(factory::illegal_state, vec![1, 2], "items")
        .has_or_else(len(), gte().to(5), || CheckError::IndexOutOfBounds("short".into()))
        .unwrap_err();
    assert_eq!(err.kind(), "index_out_of_bounds");
    assert_eq!(err.to_string(), "short");

    // The override applies to that one step only.
    let err = Check::on_named(factory::illegal_state, vec![1, 2], "items")
        .has_or_else(len(), gte().to(1), || CheckError::IndexOutOfBounds("short".into()))
        .and_then(|c| c.is(empty()))
        .unwrap_err();
    assert_eq!(err.kind(), "illegal_state");

    let err = Check::that_int(-7)
        .has_or_else(abs(), lt().to(5), || CheckError::Unsupported("too far".into()))
        .unwrap_err();
    assert_eq!(err.to_string(), "too far");
}

#[test]
fn negated_property_suppliers() {
    let err = Check::that("  ".to_owned())
        .not_has_or_else(trim(), empty(), || CheckError::IllegalState("blank".into()))
        .unwrap_err();
    assert_eq!(err.to_string(), "blank");

    let err = Check::that_int(3)
        .not_has_or_else(abs(), odd(), || CheckError::IllegalState("odd".into()))
        .unwrap_err();
    assert_eq!(err.to_string(), "odd");
    assert!(
        Check::that_int(2)
            .not_has_or_else(abs(), odd(), || CheckError::IllegalState(String::new()))
            .is_ok()
    );
}

#[test]
fn property_templates_skip_registry() {
    let before = lookups::count();
    let err = Check::that_named(vec![1], "items")
        .has_msg(len(), gte().to(3), "${name} has ${arg}, needs ${5}", &[&3])
        .unwrap_err();
    assert_eq!(err.to_string(), "items.len() has 1, needs 3");

    let err = Check::that_named("abc", "s")
        .not_has_msg(char_count(), gt().to(2), "${name} too long: ${arg}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "s.chars().count() too long: 3");

    let err = Check::that_int_named(-9, "delta")
        .has_msg(abs(), lte().to(5), "|${name}| = ${arg}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "|delta.abs()| = 9");

    let err = Check::that_int_named(9, "delta")
        .not_has_msg(abs(), positive(), "${name} is ${arg}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "delta.abs() is 9");
    assert_eq!(lookups::count(), before);
}

#[test]
fn negated_labelled_properties() {
    let err = Check::that_named(vec![1, 2, 3], "v")
        .not_has_named(len(), "size", gt().to(2))
        .unwrap_err();
    assert_eq!(err.to_string(), "v.size must not be > 2 (was 3)");

    let err = Check::that_int_named(-6, "t")
        .not_has_named(abs(), "magnitude", even())
        .unwrap_err();
    assert_eq!(err.to_string(), "t.magnitude must not be even (was 6)");
}

#[test]
fn labelled_property_templates() {
    let err = Check::that_named(vec![1], "items")
        .has_named_msg(
            |v: &Vec<i32>| v.len(),
            "count",
            gte().to(3),
            "${name} is ${arg}",
            &[],
        )
        .unwrap_err();
    assert_eq!(err.to_string(), "items.count is 1");

    let err = Check::that_named(vec![1, 2], "items")
        .not_has_named_msg(len(), "count", even(), "${name} is even", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "items.count is even");

    let err = Check::that_int_named(10, "port")
        .not_has_named_msg(|n: &i32| n % 2, "parity", zero(), "${name} was ${arg}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "port.parity was 0");

    let err = Check::that_int_named(3, "port")
        .has_named_msg(|n: &i32| n % 2, "parity", zero(), "${name} was ${arg}", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "port.parity was 1");
}

#[test]
fn closure_property_gets_generic_name() {
    let err = Check::that_named(vec![1], "items")
        .has(|v: &Vec<i32>| v.len(), gte().to(3))
        .unwrap_err();
    assert_eq!(err.to_string(), "property(items) must be >= 3 (was 1)");

    let err = Check::that_named(vec![1], "items")
        .has_msg(|v: &Vec<i32>| v.len(), gte().to(3), "${name} bad", &[])
        .unwrap_err();
    assert_eq!(err.to_string(), "property(items) bad");
}

#[test]
fn int_chains_with_factory() {
    let err = Check::on_int(factory::unsupported, 0).is(positive()).unwrap_err();
    assert_eq!(err.kind(), "unsupported");
    assert_eq!(err.to_string(), "argument must be positive (was 0)");

    let err = Check::on_int_named(factory::index_out_of_bounds, 9, "i")
        .is(lt().to(4))
        .unwrap_err();
    assert_eq!(err.kind(), "index_out_of_bounds");
    assert_eq!(err.to_string(), "i must be < 4 (was 9)");
}

#[test]
fn object_pivots_keep_factory() {
    let err = Check::on_int_named(factory::illegal_state, 1, "n")
        .is(positive())
        .and_then(|c| c.and_named("", "label").is(not_blank()))
        .unwrap_err();
    assert_eq!(err.kind(), "illegal_state");
    assert_eq!(err.to_string(), "label must not be blank (was \"\")");

    let err = Check::that_int(1)
        .is(positive())
        .and_then(|c| c.and(vec![0u8]).is(empty()))
        .unwrap_err();
    assert_eq!(err.to_string(), "argument must be empty (was Vec[1] of [0])");

    let err = Check::on(factory::null, "x")
        .and_named(None::<i32>, "id")
        .is(not_null())
        .unwrap_err();
    assert_eq!(err.kind(), "null");
    assert_eq!(err.to_string(), "id must not be null");

    let chain = Check::that_named("first", "a").and(2.5);
    assert_eq!(chain.name(), None);
    assert_eq!(*chain.value(), 2.5);
}
