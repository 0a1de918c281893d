use nebula_check::foundation::Shape;
use nebula_check::registry::registry;

#[test]
fn catalog_is_frozen_and_complete() {
    let registry = registry();
    assert!(!registry.is_empty());
    assert!(registry.len() > 30);
}

#[test]
fn registry_is_shared() {
    assert!(std::ptr::eq(registry(), registry()));
}

#[test]
fn shapes_of_builtin_checks() {
    use nebula_check::checks::{gte, positive};

    let registry = registry();
    let positive = positive::<i32>().id();
    let gte = gte::<i32>().id();
    assert_eq!(registry.shape(positive), Some(Shape::Predicate));
    assert!(registry.shape(gte).is_some_and(Shape::is_relation));
    assert_eq!(registry.name(positive), Some("positive()"));
}
