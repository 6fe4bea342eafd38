//! Binary operator algebra.
//!
//! Every quantity ⊕ quantity operator first converts both operands to their common type: the promoted
//! representation [`CommonRep`] and the common scale [`CommonRatioOf`]. Counts are rescaled by an exact integer factor
//! computed at compile time; when an operand already has the common scale the factor is `1` and no multiplication is
//! emitted.
//!
//! Quantity ⊕ scalar operators (`*`, `/`, `%`) keep the quantity's scale and only promote the representation.
//! Addition, subtraction and comparison with a bare scalar are not defined:
//!
//! ```compile_fail
//! use qscale_core::Quantity;
//! let _ = Quantity::<i32>::new(1) + 1;
//! ```
//!
//! ```compile_fail
//! use qscale_core::Quantity;
//! let _ = Quantity::<i32>::new(1) == 1;
//! ```

use crate::quantity::Quantity;
use crate::representation::{CommonRep, ConvertFrom, Promote, Representation};
use crate::scale::{CommonRatio, CommonRatioOf, Rescale, Scale};
use core::cmp::Ordering;
use core::ops::*;

/// The common type of two quantities.
///
/// Both the intermediate conversion target and the result type of `+`, `-` and `%` between quantities.
///
/// ```rust
/// use qscale_core::prefixes::{Kilo, Unity};
/// use qscale_core::{Common, Quantity};
///
/// let sum: Common<Quantity<i32, Kilo>, Quantity<f32, Unity>> =
///     Quantity::<i32, Kilo>::new(1) + Quantity::<f32, Unity>::new(0.5);
/// let expected: Quantity<f32, Unity> = Quantity::new(1000.5);
/// assert_eq!(sum, expected);
/// ```
pub trait CommonQuantity<Rhs> {
    /// The common quantity type.
    type Output;
}

impl<Rep1, R1, Rep2, R2> CommonQuantity<Quantity<Rep2, R2>> for Quantity<Rep1, R1>
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    type Output = Quantity<CommonRep<Rep1, Rep2>, CommonRatioOf<R1, R2>>;
}

/// Shorthand for `<Q1 as CommonQuantity<Q2>>::Output`.
pub type Common<Q1, Q2> = <Q1 as CommonQuantity<Q2>>::Output;

impl<Rep: Representation, R: Scale> Quantity<Rep, R> {
    /// The count re-expressed in scale `To` and representation `CRep`.
    #[inline]
    pub(crate) fn rescaled<CRep, To>(self) -> CRep
    where
        CRep: Representation + ConvertFrom<Rep>,
        To: Scale,
    {
        let count = CRep::convert_from(self.count());
        let factor = Rescale::<R, To, CRep>::FACTOR;
        if factor == 1 {
            count
        } else {
            count * CRep::from_factor(factor)
        }
    }
}

/// Both counts in the common representation and scale.
#[inline]
pub(crate) fn common_counts<Rep1, R1, Rep2, R2>(
    lhs: Quantity<Rep1, R1>,
    rhs: Quantity<Rep2, R2>,
) -> (CommonRep<Rep1, Rep2>, CommonRep<Rep1, Rep2>)
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    (
        lhs.rescaled::<CommonRep<Rep1, Rep2>, CommonRatioOf<R1, R2>>(),
        rhs.rescaled::<CommonRep<Rep1, Rep2>, CommonRatioOf<R1, R2>>(),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊕ quantity
// ─────────────────────────────────────────────────────────────────────────────

impl<Rep1, R1, Rep2, R2> Add<Quantity<Rep2, R2>> for Quantity<Rep1, R1>
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    type Output = Quantity<CommonRep<Rep1, Rep2>, CommonRatioOf<R1, R2>>;
    #[inline]
    fn add(self, rhs: Quantity<Rep2, R2>) -> Self::Output {
        let (lhs, rhs) = common_counts(self, rhs);
        Quantity::from_count(lhs + rhs)
    }
}

impl<Rep1, R1, Rep2, R2> Sub<Quantity<Rep2, R2>> for Quantity<Rep1, R1>
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    type Output = Quantity<CommonRep<Rep1, Rep2>, CommonRatioOf<R1, R2>>;
    #[inline]
    fn sub(self, rhs: Quantity<Rep2, R2>) -> Self::Output {
        let (lhs, rhs) = common_counts(self, rhs);
        Quantity::from_count(lhs - rhs)
    }
}

/// Dividing two quantities cancels the unit: the result is a bare number.
impl<Rep1, R1, Rep2, R2> Div<Quantity<Rep2, R2>> for Quantity<Rep1, R1>
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    type Output = CommonRep<Rep1, Rep2>;
    #[inline]
    fn div(self, rhs: Quantity<Rep2, R2>) -> Self::Output {
        let (lhs, rhs) = common_counts(self, rhs);
        lhs / rhs
    }
}

impl<Rep1, R1, Rep2, R2> Rem<Quantity<Rep2, R2>> for Quantity<Rep1, R1>
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    type Output = Quantity<CommonRep<Rep1, Rep2>, CommonRatioOf<R1, R2>>;
    #[inline]
    fn rem(self, rhs: Quantity<Rep2, R2>) -> Self::Output {
        let (lhs, rhs) = common_counts(self, rhs);
        Quantity::from_count(lhs % rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity ⊕ scalar
// ─────────────────────────────────────────────────────────────────────────────

impl<Rep, R, T> Mul<T> for Quantity<Rep, R>
where
    Rep: Promote<T>,
    T: Representation,
    R: Scale,
{
    type Output = Quantity<CommonRep<Rep, T>, R>;
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        let lhs = <CommonRep<Rep, T> as ConvertFrom<Rep>>::convert_from(self.count());
        let rhs = <CommonRep<Rep, T> as ConvertFrom<T>>::convert_from(rhs);
        Quantity::from_count(lhs * rhs)
    }
}

impl<Rep, R, T> Div<T> for Quantity<Rep, R>
where
    Rep: Promote<T>,
    T: Representation,
    R: Scale,
{
    type Output = Quantity<CommonRep<Rep, T>, R>;
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        let lhs = <CommonRep<Rep, T> as ConvertFrom<Rep>>::convert_from(self.count());
        let rhs = <CommonRep<Rep, T> as ConvertFrom<T>>::convert_from(rhs);
        Quantity::from_count(lhs / rhs)
    }
}

impl<Rep, R, T> Rem<T> for Quantity<Rep, R>
where
    Rep: Promote<T>,
    T: Representation,
    R: Scale,
{
    type Output = Quantity<CommonRep<Rep, T>, R>;
    #[inline]
    fn rem(self, rhs: T) -> Self::Output {
        let lhs = <CommonRep<Rep, T> as ConvertFrom<Rep>>::convert_from(self.count());
        let rhs = <CommonRep<Rep, T> as ConvertFrom<T>>::convert_from(rhs);
        Quantity::from_count(lhs % rhs)
    }
}

/// `scalar * quantity` for the native numeric types.
macro_rules! impl_scalar_mul {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<Rep, R> Mul<Quantity<Rep, R>> for $t
            where
                $t: Promote<Rep>,
                Rep: Representation,
                R: Scale,
            {
                type Output = Quantity<CommonRep<$t, Rep>, R>;
                #[inline]
                fn mul(self, rhs: Quantity<Rep, R>) -> Self::Output {
                    let lhs = <CommonRep<$t, Rep> as ConvertFrom<$t>>::convert_from(self);
                    let rhs = <CommonRep<$t, Rep> as ConvertFrom<Rep>>::convert_from(rhs.count());
                    Quantity::from_count(lhs * rhs)
                }
            }
        )+
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<Rep1, R1, Rep2, R2> PartialEq<Quantity<Rep2, R2>> for Quantity<Rep1, R1>
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    #[inline]
    fn eq(&self, other: &Quantity<Rep2, R2>) -> bool {
        let (lhs, rhs) = common_counts(*self, *other);
        lhs == rhs
    }
}

/// Ordering is derived from the `==` and `<` primitives of the common representation only. Values that are neither
/// less, greater nor equal (a NaN count) are unordered.
impl<Rep1, R1, Rep2, R2> PartialOrd<Quantity<Rep2, R2>> for Quantity<Rep1, R1>
where
    Rep1: Promote<Rep2>,
    Rep2: Representation,
    R1: CommonRatio<R2>,
    R2: Scale,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<Rep2, R2>) -> Option<Ordering> {
        let (lhs, rhs) = common_counts(*self, *other);
        if lhs < rhs {
            Some(Ordering::Less)
        } else if rhs < lhs {
            Some(Ordering::Greater)
        } else if lhs == rhs {
            Some(Ordering::Equal)
        } else {
            None
        }
    }
}

impl<Rep, R> Eq for Quantity<Rep, R>
where
    Rep: Representation + Eq,
    R: CommonRatio<R>,
{
}

impl<Rep, R> Ord for Quantity<Rep, R>
where
    Rep: Representation + Ord,
    R: CommonRatio<R>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.count().cmp(&other.count())
    }
}
