//! Numeric checks: sign, parity, divisibility and ordering.

use crate::foundation::{Builtin, CheckKey};

// ============================================================================
// TRAITS
// ============================================================================

/// A primitive number with a zero.
pub trait Number: PartialOrd + Copy {
    /// The additive identity.
    const ZERO: Self;
}

/// A primitive integer.
pub trait Integer: Number {
    /// Whether the value is divisible by two.
    fn is_even(self) -> bool;
}

/// A number with a sign, whose magnitude can be taken without overflow.
pub trait Signed: Number {
    /// The type of the absolute value.
    type Magnitude;

    /// The absolute value.
    fn magnitude(self) -> Self::Magnitude;
}

macro_rules! impl_int {
    ($($ty:ty),+) => {
        $(
            impl Number for $ty {
                const ZERO: Self = 0;
            }

            impl Integer for $ty {
                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }
            }
        )+
    };
}

macro_rules! impl_signed {
    ($($ty:ty => $mag:ty),+) => {
        $(
            impl Signed for $ty {
                type Magnitude = $mag;

                #[inline]
                fn magnitude(self) -> $mag {
                    self.unsigned_abs()
                }
            }
        )+
    };
}

impl_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl Number for f32 {
    const ZERO: Self = 0.0;
}

impl Number for f64 {
    const ZERO: Self = 0.0;
}

impl Signed for f32 {
    type Magnitude = Self;

    fn magnitude(self) -> Self {
        self.abs()
    }
}

impl Signed for f64 {
    type Magnitude = Self;

    fn magnitude(self) -> Self {
        self.abs()
    }
}

// ============================================================================
// SIGN AND PARITY
// ============================================================================

fn is_positive<N: Number>(value: &N) -> bool {
    *value > N::ZERO
}

fn is_negative<N: Number>(value: &N) -> bool {
    *value < N::ZERO
}

fn is_zero<N: Number>(value: &N) -> bool {
    *value == N::ZERO
}

fn is_even<N: Integer>(value: &N) -> bool {
    value.is_even()
}

fn is_odd<N: Integer>(value: &N) -> bool {
    !value.is_even()
}

/// The value is greater than zero.
#[must_use]
pub fn positive<N: Number>() -> Builtin<fn(&N) -> bool> {
    Builtin::predicate(CheckKey::POSITIVE, is_positive::<N>)
}

/// The value is less than zero.
#[must_use]
pub fn negative<N: Number>() -> Builtin<fn(&N) -> bool> {
    Builtin::predicate(CheckKey::NEGATIVE, is_negative::<N>)
}

/// The value is zero.
#[must_use]
pub fn zero<N: Number>() -> Builtin<fn(&N) -> bool> {
    Builtin::predicate(CheckKey::ZERO, is_zero::<N>)
}

/// The integer is divisible by two.
#[must_use]
pub fn even<N: Integer>() -> Builtin<fn(&N) -> bool> {
    Builtin::predicate(CheckKey::EVEN, is_even::<N>)
}

/// The integer is not divisible by two.
#[must_use]
pub fn odd<N: Integer>() -> Builtin<fn(&N) -> bool> {
    Builtin::predicate(CheckKey::ODD, is_odd::<N>)
}

// ============================================================================
// DIVISIBILITY
// ============================================================================

fn is_multiple_of(value: &i32, divisor: &i32) -> bool {
    if *divisor == 0 {
        *value == 0
    } else {
        value.wrapping_rem(*divisor) == 0
    }
}

/// The value is an integer multiple of the object. Only zero is a multiple
/// of zero.
#[must_use]
pub fn multiple_of() -> Builtin<fn(&i32, &i32) -> bool> {
    Builtin::relation(CheckKey::MULTIPLE_OF, is_multiple_of)
}

// ============================================================================
// ORDERING
// ============================================================================

fn is_eq<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a == b
}

fn is_ne<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    a != b
}

fn is_gt<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

fn is_gte<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a >= b
}

fn is_lt<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

fn is_lte<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a <= b
}

/// The value equals the object.
#[must_use]
pub fn eq<T: PartialEq + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::EQ, is_eq::<T>)
}

/// Alias of [`eq`] with a wordier message.
#[must_use]
pub fn equal_to<T: PartialEq + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::EQUAL_TO, is_eq::<T>)
}

/// The value differs from the object.
#[must_use]
pub fn ne<T: PartialEq + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::NE, is_ne::<T>)
}

/// The value is greater than the object.
#[must_use]
pub fn gt<T: PartialOrd + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::GT, is_gt::<T>)
}

/// The value is greater than or equal to the object.
#[must_use]
pub fn gte<T: PartialOrd + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::GTE, is_gte::<T>)
}

/// Alias of [`gte`].
#[must_use]
pub fn at_least<T: PartialOrd + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::AT_LEAST, is_gte::<T>)
}

/// The value is less than the object.
#[must_use]
pub fn lt<T: PartialOrd + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::LT, is_lt::<T>)
}

/// The value is less than or equal to the object.
#[must_use]
pub fn lte<T: PartialOrd + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::LTE, is_lte::<T>)
}

/// Alias of [`lte`].
#[must_use]
pub fn at_most<T: PartialOrd + ?Sized>() -> Builtin<fn(&T, &T) -> bool> {
    Builtin::relation(CheckKey::AT_MOST, is_lte::<T>)
}
