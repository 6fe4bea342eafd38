//! Representation traits and their implementations for the native numeric types.
//!
//! A *representation* is the numeric type a [`crate::Quantity`] stores its count in. The core never inspects its
//! layout; it only relies on the capabilities captured here:
//!
//! - [`Representation`]: arithmetic, comparison, the floating-point policy flag and conversion-factor support.
//! - [`QuantityValues`]: the `zero`/`min`/`max` values used by the static factories.
//! - [`ConvertFrom`]: which source representations convert into this one.
//! - [`ImplicitFrom`]: convertibility restricted by the floating-point policy (no floating → integral).
//! - [`Promote`]: binary numeric promotion between two representations.
//!
//! User-defined representations implement these traits directly (or via `#[derive(Representation)]` in the facade
//! crate for newtypes).

use core::ops::{Add, Div, Mul, Rem, Sub};
use typenum::{Bit, B0, B1};

/// Numeric capability set required from a quantity's count type.
///
/// # Floating-point policy
///
/// `Floating` is [`B1`] for types that should be *treated as floating point*: those accept any convertible source
/// implicitly. Types with `Floating = B0` refuse floating sources, which keeps a fractional value from being silently
/// truncated into an integral quantity. The flag is a type rather than a `bool` so the rule can be expressed as a
/// trait bound (see [`AdmitsFrom`]).
///
/// # Conversion factors
///
/// Combining quantities of different scales multiplies counts by an exact integer factor. `from_factor` turns that
/// factor into a value of this type; factors above `FACTOR_LIMIT` are rejected at compile time.
pub trait Representation:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// `B1` when this type is treated as floating point, `B0` otherwise.
    type Floating: Bit;

    /// Value form of `Floating`.
    const TREAT_AS_FLOATING_POINT: bool = <Self::Floating as Bit>::BOOL;

    /// Largest factor `from_factor` represents exactly.
    const FACTOR_LIMIT: u64 = u64::MAX;

    /// The unit step used by increment and decrement.
    fn one() -> Self;

    /// Converts a scale conversion factor (at most `FACTOR_LIMIT`) into this type.
    fn from_factor(factor: u64) -> Self;

    /// Addition that reports overflow as `None`.
    #[inline]
    fn checked_add(self, rhs: Self) -> Option<Self> {
        Some(self + rhs)
    }

    /// Subtraction that reports overflow as `None`.
    #[inline]
    fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(self - rhs)
    }

    /// Multiplication that reports overflow as `None`.
    #[inline]
    fn checked_mul(self, rhs: Self) -> Option<Self> {
        Some(self * rhs)
    }

    /// Division that reports overflow or an invalid divisor as `None`.
    #[inline]
    fn checked_div(self, rhs: Self) -> Option<Self> {
        Some(self / rhs)
    }

    /// Remainder that reports overflow or an invalid divisor as `None`.
    #[inline]
    fn checked_rem(self, rhs: Self) -> Option<Self> {
        Some(self % rhs)
    }
}

/// Distinguished values of a representation.
///
/// ```rust
/// use qscale_core::QuantityValues;
/// assert_eq!(<i16 as QuantityValues>::min(), i16::MIN);
/// assert_eq!(<f32 as QuantityValues>::min(), f32::MIN);
/// ```
pub trait QuantityValues: Sized {
    /// The additive identity.
    fn zero() -> Self;
    /// The lowest finite value.
    fn min() -> Self;
    /// The greatest finite value.
    fn max() -> Self;
}

/// Value conversion between representations.
///
/// Every representation converts from itself. For the native types, integers convert wherever `core::convert::From`
/// is lossless, and every integer or float converts into `f32` and `f64`.
pub trait ConvertFrom<T>: Sized {
    /// Converts `value` into `Self`.
    fn convert_from(value: T) -> Self;
}

impl<T: Representation> ConvertFrom<T> for T {
    #[inline]
    fn convert_from(value: T) -> Self {
        value
    }
}

/// Floating-point policy between a target flag (`Self`) and a source flag.
///
/// Implemented for every pair except an integral target (`B0`) with a floating source (`B1`).
pub trait AdmitsFrom<Source: Bit>: Bit {}

impl AdmitsFrom<B0> for B0 {}
impl AdmitsFrom<B0> for B1 {}
impl AdmitsFrom<B1> for B1 {}

/// Conversions the quantity constructors accept without an explicit cast.
///
/// `T` must be convertible to `Self`, and either `Self` is treated as floating point or `T` is not.
///
/// ```rust
/// use qscale_core::ImplicitFrom;
///
/// fn accepts<To: ImplicitFrom<From>, From>() {}
/// accepts::<f64, i32>();
/// accepts::<i64, i32>();
/// ```
///
/// ```compile_fail
/// use qscale_core::ImplicitFrom;
///
/// fn accepts<To: ImplicitFrom<From>, From>() {}
/// accepts::<i64, f32>();
/// ```
pub trait ImplicitFrom<T>: ConvertFrom<T> {}

impl<T, U> ImplicitFrom<U> for T
where
    T: Representation + ConvertFrom<U>,
    U: Representation,
    T::Floating: AdmitsFrom<U::Floating>,
{
}

/// Binary numeric promotion.
///
/// `Output` is the representation both operands convert into before a binary operation. A representation promotes
/// with itself to itself; native pairs follow the rules below, and pairs with no implementation cannot be combined.
///
/// | operands                           | result                          |
/// |------------------------------------|---------------------------------|
/// | two signed or two unsigned ints    | the wider one                   |
/// | unsigned `uN` and signed `iM`      | `iM` if `M > N`, else `i(2N)`   |
/// | any int and `f32` / `f64`          | that float                      |
/// | `f32` and `f64`                    | `f64`                           |
///
/// `u128` has no signed partner, and `isize`/`usize` only promote with the fixed-width types they convert from
/// losslessly on every platform.
pub trait Promote<Rhs: Representation>: Representation {
    /// The promoted representation.
    type Output: Representation + ConvertFrom<Self> + ConvertFrom<Rhs>;
}

impl<T: Representation> Promote<T> for T {
    type Output = T;
}

/// Shorthand for `<A as Promote<B>>::Output`.
pub type CommonRep<A, B> = <A as Promote<B>>::Output;

// ─────────────────────────────────────────────────────────────────────────────
// Native representations
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_integer_representation {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Representation for $t {
                type Floating = B0;

                const FACTOR_LIMIT: u64 = if (<$t>::MAX as u128) > (u64::MAX as u128) {
                    u64::MAX
                } else {
                    <$t>::MAX as u64
                };

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn from_factor(factor: u64) -> Self {
                    factor as $t
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_div(self, rhs)
                }

                #[inline]
                fn checked_rem(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_rem(self, rhs)
                }
            }

            impl QuantityValues for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn min() -> Self {
                    <$t>::MIN
                }

                #[inline]
                fn max() -> Self {
                    <$t>::MAX
                }
            }
        )+
    };
}

macro_rules! impl_float_representation {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Representation for $t {
                type Floating = B1;

                #[inline]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn from_factor(factor: u64) -> Self {
                    factor as $t
                }
            }

            impl QuantityValues for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }

                #[inline]
                fn min() -> Self {
                    <$t>::MIN
                }

                #[inline]
                fn max() -> Self {
                    <$t>::MAX
                }
            }
        )+
    };
}

impl_integer_representation!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_representation!(f32, f64);

/// `ConvertFrom` through the lossless `From` impls of `core`.
macro_rules! impl_lossless_conversions {
    ($($target:ty => [$($source:ty),+ $(,)?];)+) => {
        $($(
            impl ConvertFrom<$source> for $target {
                #[inline]
                fn convert_from(value: $source) -> Self {
                    <$target>::from(value)
                }
            }
        )+)+
    };
}

/// `ConvertFrom` into a floating type, which admits every numeric source.
macro_rules! impl_float_conversions {
    ($($target:ty => [$($source:ty),+ $(,)?];)+) => {
        $($(
            impl ConvertFrom<$source> for $target {
                #[inline]
                fn convert_from(value: $source) -> Self {
                    value as $target
                }
            }
        )+)+
    };
}

impl_lossless_conversions! {
    i16 => [i8, u8];
    i32 => [i8, i16, u8, u16];
    i64 => [i8, i16, i32, u8, u16, u32];
    i128 => [i8, i16, i32, i64, u8, u16, u32, u64];
    isize => [i8, i16, u8];
    u16 => [u8];
    u32 => [u8, u16];
    u64 => [u8, u16, u32];
    u128 => [u8, u16, u32, u64];
    usize => [u8, u16];
}

impl_float_conversions! {
    f32 => [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f64];
    f64 => [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32];
}

/// Symmetric `Promote` implementations for distinct pairs.
macro_rules! impl_promotions {
    ($(($a:ty, $b:ty) => $out:ty;)+) => {
        $(
            impl Promote<$b> for $a {
                type Output = $out;
            }

            impl Promote<$a> for $b {
                type Output = $out;
            }
        )+
    };
}

/// Every listed type promotes with the float to the float.
macro_rules! impl_float_promotions {
    ($float:ty => [$($t:ty),+ $(,)?]) => {
        impl_promotions! {
            $(($t, $float) => $float;)+
        }
    };
}

impl_promotions! {
    (i8, i16) => i16;
    (i8, i32) => i32;
    (i8, i64) => i64;
    (i8, i128) => i128;
    (i16, i32) => i32;
    (i16, i64) => i64;
    (i16, i128) => i128;
    (i32, i64) => i64;
    (i32, i128) => i128;
    (i64, i128) => i128;

    (u8, u16) => u16;
    (u8, u32) => u32;
    (u8, u64) => u64;
    (u8, u128) => u128;
    (u16, u32) => u32;
    (u16, u64) => u64;
    (u16, u128) => u128;
    (u32, u64) => u64;
    (u32, u128) => u128;
    (u64, u128) => u128;

    (u8, i8) => i16;
    (u8, i16) => i16;
    (u8, i32) => i32;
    (u8, i64) => i64;
    (u8, i128) => i128;
    (u16, i8) => i32;
    (u16, i16) => i32;
    (u16, i32) => i32;
    (u16, i64) => i64;
    (u16, i128) => i128;
    (u32, i8) => i64;
    (u32, i16) => i64;
    (u32, i32) => i64;
    (u32, i64) => i64;
    (u32, i128) => i128;
    (u64, i8) => i128;
    (u64, i16) => i128;
    (u64, i32) => i128;
    (u64, i64) => i128;
    (u64, i128) => i128;

    (isize, i8) => isize;
    (isize, i16) => isize;
    (isize, u8) => isize;
    (usize, u8) => usize;
    (usize, u16) => usize;

    (f32, f64) => f64;
}

impl_float_promotions!(f32 => [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]);
impl_float_promotions!(f64 => [i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize]);
