//! Numeric capability trait used to lift arithmetic through [`Opt`](crate::option::Opt).
//!
//! [`Numeric`] collects the identity elements, bounds and classification
//! predicates that `Opt<T>` delegates to. It is implemented for every
//! primitive integer and both float types.

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};
use std::str::FromStr;

/// A primitive number `Opt` can lift arithmetic and predicates through.
///
/// # Examples
///
/// ```rust
/// use optres::num::Numeric;
///
/// fn halfway<T: Numeric>(low: T, high: T) -> T {
///     low + (high - low) / (T::ONE + T::ONE)
/// }
///
/// assert_eq!(halfway(2, 10), 6);
/// assert_eq!(halfway(1.0, 2.0), 1.5);
/// ```
pub trait Numeric:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;
    /// The radix of the representation.
    const RADIX: u32;
    /// The smallest finite value.
    const MIN: Self;
    /// The largest finite value.
    const MAX: Self;

    /// Absolute value. Unsigned types return `self`.
    ///
    /// # Panics
    ///
    /// Signed `MIN` has no positive counterpart; overflow follows the
    /// primitive `abs` (a panic in debug builds, `MIN` in release builds).
    fn abs(self) -> Self;

    /// Returns `true` for values divisible by two.
    fn is_even(self) -> bool;

    /// Returns `true` for integral values not divisible by two.
    fn is_odd(self) -> bool;

    /// Returns `true` unless the value is infinite or NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` for positive or negative infinity.
    fn is_infinite(self) -> bool;

    /// Returns `true` for NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` when the sign is negative. For floats this reads the
    /// sign bit, so `-0.0` is negative.
    fn is_negative(self) -> bool;

    /// Returns `true` when the sign is positive. Zero is positive.
    fn is_positive(self) -> bool;

    /// Returns `true` for an integral value.
    fn is_integer(self) -> bool;

    /// Returns `true` for zero.
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Restricts the value to `[min, max]`.
    fn clamp_to(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }
}

macro_rules! impl_numeric_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const RADIX: u32 = 2;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }

                #[inline]
                fn is_odd(self) -> bool {
                    self % 2 != 0
                }

                #[inline]
                fn is_finite(self) -> bool {
                    true
                }

                #[inline]
                fn is_infinite(self) -> bool {
                    false
                }

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn is_positive(self) -> bool {
                    self >= 0
                }

                #[inline]
                fn is_integer(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_numeric_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const RADIX: u32 = 2;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn abs(self) -> Self {
                    self
                }

                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }

                #[inline]
                fn is_odd(self) -> bool {
                    self % 2 != 0
                }

                #[inline]
                fn is_finite(self) -> bool {
                    true
                }

                #[inline]
                fn is_infinite(self) -> bool {
                    false
                }

                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn is_positive(self) -> bool {
                    true
                }

                #[inline]
                fn is_integer(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;
                const RADIX: u32 = 2;
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }

                #[inline]
                fn is_even(self) -> bool {
                    self.is_integer() && self % 2.0 == 0.0
                }

                #[inline]
                fn is_odd(self) -> bool {
                    self.is_integer() && <$t>::abs(self % 2.0) == 1.0
                }

                #[inline]
                fn is_finite(self) -> bool {
                    <$t>::is_finite(self)
                }

                #[inline]
                fn is_infinite(self) -> bool {
                    <$t>::is_infinite(self)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn is_negative(self) -> bool {
                    self.is_sign_negative()
                }

                #[inline]
                fn is_positive(self) -> bool {
                    self.is_sign_positive()
                }

                #[inline]
                fn is_integer(self) -> bool {
                    <$t>::is_finite(self) && self.trunc() == self
                }
            }
        )*
    };
}

impl_numeric_signed!(i8, i16, i32, i64, i128, isize);
impl_numeric_unsigned!(u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);
