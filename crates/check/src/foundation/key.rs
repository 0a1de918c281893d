//! Identity handles for built-in checks and properties.
//!
//! The registry never compares checks by behaviour. Every catalog factory
//! stamps the check it returns with a [`CheckKey`], and that key is the only
//! thing the registry looks up. Keys cannot be constructed outside this
//! crate, so a closure that happens to behave exactly like `positive()` is
//! still an unregistered check and gets the generic message.

use std::fmt;

macro_rules! keys {
    (
        $(#[$meta:meta])*
        $vis:vis struct $key:ident($tag:ident) {
            $($konst:ident => $variant:ident,)+
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub(crate) enum $tag {
            $($variant,)+
        }

        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $key($tag);

        #[allow(missing_docs)]
        impl $key {
            $(pub(crate) const $konst: Self = Self($tag::$variant);)+

            /// Every key of the catalog, in declaration order.
            pub(crate) const ALL: &'static [Self] = &[$(Self::$konst,)+];
        }

        impl fmt::Debug for $key {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }
    };
}

keys! {
    /// Identity of a built-in check.
    pub struct CheckKey(CheckTag) {
        NULL => Null,
        NOT_NULL => NotNull,
        EMPTY => Empty,
        NOT_EMPTY => NotEmpty,
        BLANK => Blank,
        NOT_BLANK => NotBlank,
        POSITIVE => Positive,
        NEGATIVE => Negative,
        ZERO => Zero,
        EVEN => Even,
        ODD => Odd,
        EXISTS => Exists,
        FILE => File,
        DIRECTORY => Directory,
        READABLE => Readable,
        WRITABLE => Writable,
        EQ => Eq,
        EQUAL_TO => EqualTo,
        NE => Ne,
        GT => Gt,
        GTE => Gte,
        AT_LEAST => AtLeast,
        LT => Lt,
        LTE => Lte,
        AT_MOST => AtMost,
        SAME_AS => SameAs,
        MULTIPLE_OF => MultipleOf,
        CONTAINS => Contains,
        CONTAINS_KEY => ContainsKey,
        ELEMENT_OF => ElementOf,
        HAS_SUBSTR => HasSubstr,
        STARTS_WITH => StartsWith,
        ENDS_WITH => EndsWith,
        INDEX_OF => IndexOf,
        LEN_EQ => LenEq,
        LEN_GTE => LenGte,
        LEN_LTE => LenLte,
        JSON_HAS_KEY => JsonHasKey,
        JSON_INDEX => JsonIndex,
    }
}

keys! {
    /// Identity of a built-in property extractor.
    pub struct PropertyKey(PropertyTag) {
        LEN => Len,
        CHAR_COUNT => CharCount,
        ABS => Abs,
        TRIM => Trim,
    }
}

// ============================================================================
// SHAPE
// ============================================================================

/// The closed set of check shapes.
///
/// The engine only ever evaluates unary checks; relations reach it bound to
/// their object operand. The shape is kept per catalog entry so formatters
/// can be matched against the arity they render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One operand, any type.
    Predicate,
    /// One `i32` operand.
    IntPredicate,
    /// Subject and object, any types.
    Relation,
    /// `i32` subject, `i32` object.
    IntRelation,
    /// `i32` subject, object of any type.
    IntObjRelation,
    /// Subject of any type, `i32` object.
    ObjIntRelation,
}

impl Shape {
    /// Whether the shape carries an object operand.
    #[must_use]
    pub const fn is_relation(self) -> bool {
        !matches!(self, Self::Predicate | Self::IntPredicate)
    }
}
