//! Arithmetic and numeric predicates lifted through `Opt<T: Numeric>`.
//!
//! `None` is the absorbing element of every lifted binary operator: if either
//! side is `None` the result is `None`. Operators exist for
//! `Opt<T> op Opt<T>`, `Opt<T> op T` and `T op Opt<T>`.
//!
//! Overflow and division by zero behave exactly as they do for the payload
//! type: integer division by zero panics, and integer overflow panics in
//! debug builds and wraps in release builds.
//!
//! # Examples
//!
//! ```rust
//! use optres::option::Opt;
//!
//! assert_eq!(Opt::Some(2_i32) + Opt::Some(3), Opt::Some(5));
//! assert_eq!(Opt::Some(2_i32) * 10, Opt::Some(20));
//! assert_eq!(10_i32 - Opt::Some(4), Opt::Some(6));
//! assert_eq!(Opt::Some(2_i32) + Opt::None, Opt::None);
//! ```
//!
//! Non-numeric payloads get no operators:
//!
//! ```compile_fail
//! use optres::option::Opt;
//!
//! let _ = Opt::Some(String::from("a")) + Opt::Some(String::from("b"));
//! ```
//!
//! Negation is only lifted for signed payloads:
//!
//! ```compile_fail
//! use optres::option::Opt;
//!
//! let _ = -Opt::Some(1_u32);
//! ```

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use super::Opt;
use crate::num::Numeric;

macro_rules! lift_binary_operator {
    ($operator:ident, $method:ident) => {
        paste::paste! {
            impl<T: Numeric> $operator for Opt<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    self.zip_with(rhs, $operator::$method)
                }
            }

            impl<T: Numeric> $operator<T> for Opt<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: T) -> Self {
                    self.map(|lhs| $operator::$method(lhs, rhs))
                }
            }

            impl<T: Numeric> [<$operator Assign>] for Opt<T> {
                #[inline]
                fn [<$method _assign>](&mut self, rhs: Self) {
                    *self = $operator::$method(*self, rhs);
                }
            }

            impl<T: Numeric> [<$operator Assign>]<T> for Opt<T> {
                #[inline]
                fn [<$method _assign>](&mut self, rhs: T) {
                    *self = $operator::$method(*self, rhs);
                }
            }
        }
    };
}

lift_binary_operator!(Add, add);
lift_binary_operator!(Sub, sub);
lift_binary_operator!(Mul, mul);
lift_binary_operator!(Div, div);
lift_binary_operator!(Rem, rem);

// `impl<T> Add<Opt<T>> for T` is rejected by the orphan rules, so the
// scalar-on-the-left forms are generated per primitive.
macro_rules! lift_scalar_lhs {
    (@operator $t:ty, $operator:ident, $method:ident) => {
        impl $operator<Opt<$t>> for $t {
            type Output = Opt<$t>;

            #[inline]
            fn $method(self, rhs: Opt<$t>) -> Opt<$t> {
                rhs.map(|rhs| $operator::$method(self, rhs))
            }
        }
    };
    ($($t:ty),* $(,)?) => {
        $(
            lift_scalar_lhs!(@operator $t, Add, add);
            lift_scalar_lhs!(@operator $t, Sub, sub);
            lift_scalar_lhs!(@operator $t, Mul, mul);
            lift_scalar_lhs!(@operator $t, Div, div);
            lift_scalar_lhs!(@operator $t, Rem, rem);
        )*
    };
}

lift_scalar_lhs!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T> Neg for Opt<T>
where
    T: Numeric + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}

impl<T: Numeric> Opt<T> {
    // =========================================================================
    // Identity Elements and Bounds
    // =========================================================================

    /// `Some(0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self::Some(T::ZERO)
    }

    /// `Some(1)`.
    #[inline]
    pub const fn one() -> Self {
        Self::Some(T::ONE)
    }

    /// The radix of `T`.
    #[inline]
    pub const fn radix() -> Opt<u32> {
        Opt::Some(T::RADIX)
    }

    /// Same as [`zero`](Self::zero).
    #[inline]
    pub const fn additive_identity() -> Self {
        Self::zero()
    }

    /// Same as [`one`](Self::one).
    #[inline]
    pub const fn multiplicative_identity() -> Self {
        Self::one()
    }

    /// `Some(T::MIN)`.
    #[inline]
    pub const fn min_value() -> Self {
        Self::Some(T::MIN)
    }

    /// `Some(T::MAX)`.
    #[inline]
    pub const fn max_value() -> Self {
        Self::Some(T::MAX)
    }

    // =========================================================================
    // Unary Operations
    // =========================================================================

    /// Unary plus: returns the value unchanged.
    #[inline]
    pub const fn plus(self) -> Self {
        self
    }

    /// Adds one. `None` stays `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::Some(1_i32).increment(), Opt::Some(2));
    /// assert_eq!(Opt::<i32>::None.increment(), Opt::None);
    /// ```
    #[inline]
    pub fn increment(self) -> Self {
        self + T::ONE
    }

    /// Subtracts one. `None` stays `None`.
    #[inline]
    pub fn decrement(self) -> Self {
        self - T::ONE
    }

    /// Absolute value of the payload.
    ///
    /// # Panics
    ///
    /// Overflows like the primitive for a signed `MIN`: panics in debug
    /// builds and returns `MIN` unchanged in release builds.
    #[inline]
    pub fn abs(self) -> Self {
        self.map(Numeric::abs)
    }

    // =========================================================================
    // Comparisons
    // =========================================================================

    /// The smaller payload; `None` if either side is `None`.
    ///
    /// Unlike [`Ord::min`], absence is not ordered below `Some` here: it
    /// absorbs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert_eq!(Opt::Some(3_i32).minimum(Opt::Some(1)), Opt::Some(1));
    /// assert_eq!(Opt::Some(3_i32).minimum(Opt::None), Opt::None);
    /// ```
    #[inline]
    pub fn minimum(self, other: Self) -> Self {
        self.zip_with(other, |lhs, rhs| if rhs < lhs { rhs } else { lhs })
    }

    /// The larger payload; `None` if either side is `None`.
    #[inline]
    pub fn maximum(self, other: Self) -> Self {
        self.zip_with(other, |lhs, rhs| if rhs > lhs { rhs } else { lhs })
    }

    /// Restricts the payload to `[min, max]`; `None` if any operand is `None`.
    #[inline]
    pub fn clamp_between(self, min: Self, max: Self) -> Self {
        match (self, min, max) {
            (Self::Some(value), Self::Some(min), Self::Some(max)) => {
                Self::Some(value.clamp_to(min, max))
            }
            _ => Self::None,
        }
    }

    // =========================================================================
    // Classification
    // =========================================================================

    /// Delegates to [`Numeric::is_even`]; `false` for `None`.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.classify(Numeric::is_even, false)
    }

    /// Delegates to [`Numeric::is_odd`]; `false` for `None`.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.classify(Numeric::is_odd, false)
    }

    /// Delegates to [`Numeric::is_finite`]; `false` for `None`.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.classify(Numeric::is_finite, false)
    }

    /// Delegates to [`Numeric::is_infinite`]; `false` for `None`.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.classify(Numeric::is_infinite, false)
    }

    /// Delegates to [`Numeric::is_nan`].
    ///
    /// Returns `true` for `None`: absence is treated as an undefined quantity.
    /// This is the only predicate whose answer for `None` is `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::option::Opt;
    ///
    /// assert!(Opt::<f64>::None.is_nan());
    /// assert!(!Opt::<f64>::None.is_finite());
    /// assert!(Opt::Some(f64::NAN).is_nan());
    /// assert!(!Opt::Some(1.0_f64).is_nan());
    /// ```
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.classify(Numeric::is_nan, true)
    }

    /// Delegates to [`Numeric::is_negative`]; `false` for `None`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.classify(Numeric::is_negative, false)
    }

    /// Delegates to [`Numeric::is_positive`]; `false` for `None`.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.classify(Numeric::is_positive, false)
    }

    /// Delegates to [`Numeric::is_zero`]; `false` for `None`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.classify(Numeric::is_zero, false)
    }

    /// Delegates to [`Numeric::is_integer`]; `false` for `None`.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.classify(Numeric::is_integer, false)
    }

    fn classify(&self, predicate: fn(T) -> bool, when_none: bool) -> bool {
        match self {
            Self::Some(value) => predicate(*value),
            Self::None => when_none,
        }
    }
}
