use std::fs;

use nebula_check::message::stringify;
use nebula_check::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn named_int_chain_reports_value() {
    let err = Check::that_int_named(-5, "age").is(positive()).unwrap_err();
    assert!(err.is_illegal_argument());
    assert_eq!(err.to_string(), "age must be positive (was -5)");
}

#[test]
fn unnamed_chain_uses_default_name() {
    let err = Check::that_int(7).is(even()).unwrap_err();
    assert_eq!(err.to_string(), "argument must be even (was 7)");
}

#[test]
fn not_null_entry_point_differs_in_kind_only() {
    let entry = Check::not_null_named(None::<i32>, "id").unwrap_err();
    let step = Check::that_named(None::<i32>, "id")
        .is(not_null())
        .unwrap_err();

    assert_eq!(entry.kind(), "null");
    assert_eq!(step.kind(), "illegal_argument");
    assert_eq!(entry.to_string(), step.to_string());
    assert_eq!(entry.to_string(), "id must not be null");
}

#[test]
fn not_null_entry_point_unwraps_value() {
    let name = Check::not_null_named(Some("ada"), "name")
        .and_then(|c| c.is(not_blank()))
        .map(Chain::ok)
        .unwrap();
    assert_eq!(name, "ada");
}

#[test]
fn custom_factory_builds_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, b"retries = 3").unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&path, perms).unwrap();

    let err = Check::on_named(factory::illegal_state, path.as_path(), "config")
        .is(file())
        .and_then(|c| c.is(writable()))
        .unwrap_err();

    assert_eq!(err.kind(), "illegal_state");
    assert_eq!(
        err.to_string(),
        format!(
            "config must be writable (was {})",
            stringify(&path.as_path(), "&std::path::Path")
        )
    );
}

#[derive(Debug, PartialEq)]
enum AppError {
    Invalid(String),
    Broken,
}

impl From<CorruptCheck> for AppError {
    fn from(_: CorruptCheck) -> Self {
        Self::Broken
    }
}

#[test]
fn tuple_variant_is_a_factory() {
    let err = Check::on_named(AppError::Invalid, "  ", "title")
        .is(not_blank())
        .unwrap_err();
    assert_eq!(
        err,
        AppError::Invalid("title must not be blank (was \"  \")".into())
    );
    assert_ne!(err, AppError::Broken);
}

#[test]
fn property_check_names_derived_value() {
    let err = Check::that_named(vec![1], "items")
        .has(len(), gte().to(3))
        .unwrap_err();
    assert_eq!(err.to_string(), "items.len() must be >= 3 (was 1)");

    let err = Check::that_named("  hi  ".to_owned(), "tag")
        .has_named(trim(), "trimmed", eq().to("hello".to_owned()))
        .unwrap_err();
    assert_eq!(err.to_string(), "tag.trimmed must be equal to \"hello\" (was \"hi\")");
}

#[test]
fn negated_property_check() {
    let err = Check::that_int_named(-4, "delta")
        .not_has(abs(), even())
        .unwrap_err();
    assert_eq!(err.to_string(), "delta.abs() must not be even (was 4)");
}

#[test]
fn chain_continues_across_values() {
    let result = Check::that_named("report.csv", "file")
        .is(ends_with().to(".csv"))
        .and_then(|c| c.and_int_named(3, "retries").is(positive()))
        .and_then(|c| c.is(lte().to(5)))
        .map(Chain::ok);
    assert_eq!(result.unwrap(), 3);
}

#[test]
fn first_failure_wins() {
    let err = Check::that_int_named(-3, "n")
        .is(even())
        .and_then(|c| c.is(positive()))
        .unwrap_err();
    assert_eq!(err.to_string(), "n must be even (was -3)");
}

#[test]
fn relation_with_object_operand() {
    let err = Check::that_int_named(10, "n")
        .is(multiple_of().to(3))
        .unwrap_err();
    assert_eq!(err.to_string(), "n must be a multiple of 3 (was 10)");

    let err = Check::that_int_named(5, "i")
        .is(index_of().to(vec!['a', 'b']))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "i must be a valid index into Vec[2] of ['a', 'b'] (was 5)"
    );
}

#[test]
fn supplier_replaces_message_and_factory() {
    let err = Check::that_int(0)
        .is_or_else(positive(), || AppError::Invalid("need work".into()))
        .unwrap_err();
    assert_eq!(err, AppError::Invalid("need work".into()));
}
