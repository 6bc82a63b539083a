//! # Number types
//!
//! The simplex method is defined over the ordered fields. Exact arithmetic is the default in this
//! crate (`BigRational`); `f64` satisfies the same bounds, but comparisons against zero are then
//! subject to rounding.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

pub use num_bigint::BigInt;

/// Arbitrary precision rational number, the default number type of the solver.
pub type RationalBig = num_rational::BigRational;

/// Basic field operations, together with a (partial) order.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait OrderedField:
    Clone +
    PartialOrd +
    Zero + // Additive identity
    One + // Multiplicative identity
    Neg<Output=Self> + // Additive inverse
    Add<Output=Self> +
    Sub<Output=Self> +
    Mul<Output=Self> +
    Div<Output=Self> +
    Display +
    Debug
{
    /// Whether the value is strictly smaller than the additive identity.
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Whether the value is strictly larger than the additive identity.
    fn is_positive(&self) -> bool {
        *self > Self::zero()
    }
}

impl<T> OrderedField for T
where
    T: Clone + PartialOrd + Zero + One + Neg<Output=T> + Add<Output=T> + Sub<Output=T> +
    Mul<Output=T> + Div<Output=T> + Display + Debug,
{
}

/// Create a `RationalBig` from an integer numerator and an optional denominator.
///
/// # Example
///
/// ```
/// use lpquad::RB;
///
/// assert_eq!(RB!(9, 2) + RB!(1, 2), RB!(5));
/// ```
#[macro_export]
macro_rules! RB {
    ($numerator:expr) => {
        $crate::data::number_types::RationalBig::from_integer(
            $crate::data::number_types::BigInt::from($numerator)
        )
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::data::number_types::RationalBig::new(
            $crate::data::number_types::BigInt::from($numerator),
            $crate::data::number_types::BigInt::from($denominator),
        )
    };
}

#[cfg(test)]
mod test {
    use super::OrderedField;

    #[test]
    fn signs() {
        assert!(RB!(-1, 3).is_negative());
        assert!(!RB!(0).is_negative());
        assert!(RB!(7, 2).is_positive());
        assert!((-0.5_f64).is_negative());
    }

    #[test]
    fn macro_reduces() {
        assert_eq!(RB!(4, 8), RB!(1, 2));
        assert_eq!(RB!(6, 3), RB!(2));
    }
}
