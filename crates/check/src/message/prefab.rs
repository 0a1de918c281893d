//! Prefab formatters for the built-in catalog.
//!
//! Each formatter branches only on the negation flag. Most are generated
//! from a phrase: predicates render `"<name> must [not] <phrase> (was <v>)"`,
//! relations put the object after the phrase.

use super::ViolationContext;

macro_rules! prefab {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => $kind:ident $phrase:literal;
        )+
    ) => {
        $(
            $(#[$meta])*
            pub(crate) fn $name(ctx: &ViolationContext<'_>) -> String {
                ctx.$kind($phrase)
            }
        )+
    };
}

prefab! {
    null => predicate "be null";
    empty => predicate "be empty";
    blank => predicate "be blank";
    positive => predicate "be positive";
    negative => predicate "be negative";
    zero => predicate "be zero";
    even => predicate "be even";
    odd => predicate "be odd";
    exists => predicate "exist";
    file => predicate "be a file";
    directory => predicate "be a directory";
    readable => predicate "be readable";
    writable => predicate "be writable";

    /// Shared by `eq` and `equal_to`.
    eq => relation "be equal to";
    gt => relation "be >";
    /// Shared by `gte` and `at_least`.
    gte => relation "be >=";
    lt => relation "be <";
    /// Shared by `lte` and `at_most`.
    lte => relation "be <=";
    same_as => relation "be the same object as";
    multiple_of => relation "be a multiple of";
    /// Shared by `contains` and `has_substr`.
    contains => relation "contain";
    contains_key => relation "contain key";
    element_of => relation "be an element of";
    starts_with => relation "start with";
    ends_with => relation "end with";
    /// Shared by `index_of` and `json_index`.
    index_of => relation "be a valid index into";
    len_eq => relation "have length";
    len_gte => relation "have length >=";
    len_lte => relation "have length <=";
    json_has_key => relation "have key";
}

// The two forms of these differ in shape, not just in "not".

pub(crate) fn not_null(ctx: &ViolationContext<'_>) -> String {
    if ctx.negated() {
        format!("{} must be null (was {})", ctx.name(), ctx.arg())
    } else {
        format!("{} must not be null", ctx.name())
    }
}

pub(crate) fn not_empty(ctx: &ViolationContext<'_>) -> String {
    if ctx.negated() {
        format!("{} must be empty (was {})", ctx.name(), ctx.arg())
    } else {
        format!("{} must not be empty", ctx.name())
    }
}

pub(crate) fn not_blank(ctx: &ViolationContext<'_>) -> String {
    if ctx.negated() {
        format!("{} must be blank (was {})", ctx.name(), ctx.arg())
    } else {
        format!("{} must not be blank (was {})", ctx.name(), ctx.arg())
    }
}

pub(crate) fn ne(ctx: &ViolationContext<'_>) -> String {
    if ctx.negated() {
        format!("{} must be equal to {} (was {})", ctx.name(), ctx.obj(), ctx.arg())
    } else {
        format!("{} must not be equal to {}", ctx.name(), ctx.obj())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Operand;
    use pretty_assertions::assert_eq;

    #[test]
    fn predicate_phrases() {
        let ctx = ViolationContext::new(&-5, "i32").with_name(Some("age"));
        assert_eq!(positive(&ctx), "age must be positive (was -5)");
        assert_eq!(
            positive(&ctx.with_negated(true)),
            "age must not be positive (was -5)"
        );
    }

    #[test]
    fn relation_phrases() {
        let ctx = ViolationContext::new(&1usize, "usize")
            .with_name(Some("items.len()"))
            .with_object(Some(Operand::of(&3usize)));
        assert_eq!(gte(&ctx), "items.len() must be >= 3 (was 1)");
    }

    #[test]
    fn not_null_omits_value() {
        let ctx = ViolationContext::new(&None::<i32>, "core::option::Option<i32>");
        assert_eq!(not_null(&ctx), "argument must not be null");
        let present = ViolationContext::new(&Some(1), "core::option::Option<i32>")
            .with_name(Some("id"))
            .with_negated(true);
        assert_eq!(not_null(&present), "id must be null (was Some(1))");
    }

    #[test]
    fn ne_names_the_object() {
        let ctx = ViolationContext::new(&"x", "&str").with_object(Some(Operand::of(&"x")));
        assert_eq!(ne(&ctx), "argument must not be equal to \"x\"");
    }
}
