//! Checked arithmetic on quantities.
//!
//! The arithmetic operators of [`Quantity`] follow the overflow behavior of the representation (a panic in debug
//! builds and wrapping in release builds for the native integers). The methods here report every failure as a
//! [`QuantityError`] instead, including a conversion factor that the common representation cannot hold. Such a
//! factor makes the operator form fail to compile, while the checked form compiles and returns
//! [`QuantityError::FactorOverflow`]. Every division and remainder, by a scalar or by another quantity, rejects a
//! zero divisor with [`QuantityError::DivisionByZero`].
//!
//! ```rust
//! use qscale_core::prefixes::{Kilo, Unity};
//! use qscale_core::{Operation, Quantity, QuantityError};
//!
//! let km = Quantity::<i16, Kilo>::new(40i16);
//! let m = Quantity::<i16, Unity>::new(0i16);
//! assert_eq!(
//!     km.checked_add(m),
//!     Err(QuantityError::Overflow { operation: Operation::Rescale })
//! );
//!
//! let km = Quantity::<i16, Kilo>::new(2i16);
//! assert_eq!(km.checked_add(m).map(|q| q.count()), Ok(2000));
//! ```

use crate::error::{Operation, QuantityError, QuantityResult};
use crate::quantity::Quantity;
use crate::representation::{CommonRep, ConvertFrom, Promote, QuantityValues, Representation};
use crate::scale::{CommonRatio, CommonRatioOf, Rescale, Scale};
use log::debug;

fn rejected(error: QuantityError) -> QuantityError {
    debug!("checked quantity arithmetic rejected: {error}");
    error
}

fn overflow(operation: Operation) -> QuantityError {
    rejected(QuantityError::Overflow { operation })
}

impl<Rep: Representation, R: Scale> Quantity<Rep, R> {
    fn try_rescaled<CRep, To>(self) -> QuantityResult<CRep>
    where
        CRep: Representation + ConvertFrom<Rep>,
        To: Scale,
    {
        let count = CRep::convert_from(self.count());
        let factor = Rescale::<R, To, CRep>::EXACT;
        if factor == 1 {
            return Ok(count);
        }
        if factor > CRep::FACTOR_LIMIT {
            return Err(rejected(QuantityError::FactorOverflow { factor }));
        }
        count
            .checked_mul(CRep::from_factor(factor))
            .ok_or_else(|| overflow(Operation::Rescale))
    }

    fn try_common_counts<Rep2, R2>(
        self,
        rhs: Quantity<Rep2, R2>,
    ) -> QuantityResult<(CommonRep<Rep, Rep2>, CommonRep<Rep, Rep2>)>
    where
        Rep: Promote<Rep2>,
        Rep2: Representation,
        R: CommonRatio<R2>,
        R2: Scale,
    {
        let lhs = self.try_rescaled::<CommonRep<Rep, Rep2>, CommonRatioOf<R, R2>>()?;
        let rhs = rhs.try_rescaled::<CommonRep<Rep, Rep2>, CommonRatioOf<R, R2>>()?;
        Ok((lhs, rhs))
    }

    /// `self + rhs` in the common type, or an error if a count overflows.
    pub fn checked_add<Rep2, R2>(
        self,
        rhs: Quantity<Rep2, R2>,
    ) -> QuantityResult<Quantity<CommonRep<Rep, Rep2>, CommonRatioOf<R, R2>>>
    where
        Rep: Promote<Rep2>,
        Rep2: Representation,
        R: CommonRatio<R2>,
        R2: Scale,
    {
        let (lhs, rhs) = self.try_common_counts(rhs)?;
        lhs.checked_add(rhs)
            .map(Quantity::from_count)
            .ok_or_else(|| overflow(Operation::Add))
    }

    /// `self - rhs` in the common type, or an error if a count overflows.
    pub fn checked_sub<Rep2, R2>(
        self,
        rhs: Quantity<Rep2, R2>,
    ) -> QuantityResult<Quantity<CommonRep<Rep, Rep2>, CommonRatioOf<R, R2>>>
    where
        Rep: Promote<Rep2>,
        Rep2: Representation,
        R: CommonRatio<R2>,
        R2: Scale,
    {
        let (lhs, rhs) = self.try_common_counts(rhs)?;
        lhs.checked_sub(rhs)
            .map(Quantity::from_count)
            .ok_or_else(|| overflow(Operation::Sub))
    }

    /// `self / rhs` between quantities, as a bare number in the common representation.
    ///
    /// ```rust
    /// use qscale_core::prefixes::{Kilo, Unity};
    /// use qscale_core::{Operation, Quantity, QuantityError};
    ///
    /// let km = Quantity::<i32, Kilo>::new(3);
    /// assert_eq!(km.checked_div_quantity(Quantity::<i32, Unity>::new(500)), Ok(6));
    /// assert_eq!(
    ///     km.checked_div_quantity(Quantity::<i32, Unity>::new(0)),
    ///     Err(QuantityError::DivisionByZero { operation: Operation::Div })
    /// );
    /// ```
    pub fn checked_div_quantity<Rep2, R2>(self, rhs: Quantity<Rep2, R2>) -> QuantityResult<CommonRep<Rep, Rep2>>
    where
        Rep: Promote<Rep2>,
        Rep2: Representation,
        R: CommonRatio<R2>,
        R2: Scale,
        CommonRep<Rep, Rep2>: QuantityValues,
    {
        let (lhs, rhs) = self.try_common_counts(rhs)?;
        nonzero_divisor(rhs, Operation::Div)?;
        lhs.checked_div(rhs).ok_or_else(|| overflow(Operation::Div))
    }

    /// `self % rhs` between quantities, in the common type.
    pub fn checked_rem_quantity<Rep2, R2>(
        self,
        rhs: Quantity<Rep2, R2>,
    ) -> QuantityResult<Quantity<CommonRep<Rep, Rep2>, CommonRatioOf<R, R2>>>
    where
        Rep: Promote<Rep2>,
        Rep2: Representation,
        R: CommonRatio<R2>,
        R2: Scale,
        CommonRep<Rep, Rep2>: QuantityValues,
    {
        let (lhs, rhs) = self.try_common_counts(rhs)?;
        nonzero_divisor(rhs, Operation::Rem)?;
        lhs.checked_rem(rhs)
            .map(Quantity::from_count)
            .ok_or_else(|| overflow(Operation::Rem))
    }

    /// `self * rhs` for a scalar `rhs`.
    ///
    /// ```rust
    /// use qscale_core::{Operation, Quantity, QuantityError};
    /// let q = Quantity::<i32>::new(i32::MAX);
    /// assert_eq!(
    ///     q.checked_mul(2i32),
    ///     Err(QuantityError::Overflow { operation: Operation::Mul })
    /// );
    /// ```
    pub fn checked_mul<T>(self, rhs: T) -> QuantityResult<Quantity<CommonRep<Rep, T>, R>>
    where
        Rep: Promote<T>,
        T: Representation,
    {
        let lhs = <CommonRep<Rep, T> as ConvertFrom<Rep>>::convert_from(self.count());
        let rhs = <CommonRep<Rep, T> as ConvertFrom<T>>::convert_from(rhs);
        lhs.checked_mul(rhs)
            .map(Quantity::from_count)
            .ok_or_else(|| overflow(Operation::Mul))
    }

    /// `self / rhs` for a scalar `rhs`; a zero divisor is an error for every representation, floating ones included.
    pub fn checked_div<T>(self, rhs: T) -> QuantityResult<Quantity<CommonRep<Rep, T>, R>>
    where
        Rep: Promote<T>,
        T: Representation,
        CommonRep<Rep, T>: QuantityValues,
    {
        let (lhs, rhs) = scalar_operands(self.count(), rhs, Operation::Div)?;
        lhs.checked_div(rhs)
            .map(Quantity::from_count)
            .ok_or_else(|| overflow(Operation::Div))
    }

    /// `self % rhs` for a scalar `rhs`; a zero divisor is an error.
    pub fn checked_rem<T>(self, rhs: T) -> QuantityResult<Quantity<CommonRep<Rep, T>, R>>
    where
        Rep: Promote<T>,
        T: Representation,
        CommonRep<Rep, T>: QuantityValues,
    {
        let (lhs, rhs) = scalar_operands(self.count(), rhs, Operation::Rem)?;
        lhs.checked_rem(rhs)
            .map(Quantity::from_count)
            .ok_or_else(|| overflow(Operation::Rem))
    }
}

/// Promotes a count and a scalar divisor, rejecting a zero divisor.
fn scalar_operands<Rep, T>(
    count: Rep,
    divisor: T,
    operation: Operation,
) -> QuantityResult<(CommonRep<Rep, T>, CommonRep<Rep, T>)>
where
    Rep: Promote<T>,
    T: Representation,
    CommonRep<Rep, T>: QuantityValues,
{
    let lhs = <CommonRep<Rep, T> as ConvertFrom<Rep>>::convert_from(count);
    let rhs = <CommonRep<Rep, T> as ConvertFrom<T>>::convert_from(divisor);
    nonzero_divisor(rhs, operation)?;
    Ok((lhs, rhs))
}

fn nonzero_divisor<T: Representation + QuantityValues>(divisor: T, operation: Operation) -> QuantityResult<()> {
    if divisor == T::zero() {
        return Err(rejected(QuantityError::DivisionByZero { operation }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefixes::{Kilo, Milli, Unity};

    type M = Quantity<i32, Unity>;
    type Km = Quantity<i32, Kilo>;

    #[test]
    fn checked_add_matches_operator_when_in_range() {
        let sum = Km::new(1).checked_add(M::new(500));
        assert_eq!(sum, Ok(M::new(1500)));
        assert_eq!(sum.map(|q| q.count()), Ok((Km::new(1) + M::new(500)).count()));
    }

    #[test]
    fn checked_sub_matches_operator_when_in_range() {
        assert_eq!(M::new(3).checked_sub(M::new(5)), Ok(M::new(-2)));
        assert_eq!(Km::new(2).checked_sub(M::new(1)), Ok(M::new(1999)));
    }

    #[test]
    fn add_overflow() {
        let err = M::new(i32::MAX).checked_add(M::new(1));
        assert_eq!(err, Err(QuantityError::Overflow { operation: Operation::Add }));
    }

    #[test]
    fn sub_overflow_unsigned() {
        let err = Quantity::<u8>::new(0u8).checked_sub(Quantity::<u8>::new(1u8));
        assert_eq!(err, Err(QuantityError::Overflow { operation: Operation::Sub }));
    }

    #[test]
    fn rescale_overflow() {
        let km = Quantity::<i32, Kilo>::new(3_000_000);
        let err = km.checked_add(M::new(0));
        assert_eq!(err, Err(QuantityError::Overflow { operation: Operation::Rescale }));
    }

    #[test]
    fn factor_overflow_is_reported_not_rejected_at_compile_time() {
        let km = Quantity::<i8, Kilo>::new(1i8);
        let m = Quantity::<i8, Unity>::new(0i8);
        assert_eq!(km.checked_add(m), Err(QuantityError::FactorOverflow { factor: 1000 }));
        assert_eq!(
            km.checked_add(m).unwrap_err().operation(),
            Operation::Rescale
        );
    }

    #[test]
    fn checked_scalar_mul() {
        assert_eq!(Km::new(4).checked_mul(2i32), Ok(Km::new(8)));
        assert_eq!(
            Km::new(i32::MIN).checked_mul(-1i32),
            Err(QuantityError::Overflow { operation: Operation::Mul })
        );
    }

    #[test]
    fn checked_scalar_mul_promotes() {
        let q = Quantity::<i16, Milli>::new(i16::MAX).checked_mul(2i32);
        assert_eq!(q.map(|q| q.count()), Ok(i16::MAX as i32 * 2));
    }

    #[test]
    fn checked_div_by_zero() {
        assert_eq!(
            M::new(7).checked_div(0i32),
            Err(QuantityError::DivisionByZero { operation: Operation::Div })
        );
        assert_eq!(
            Quantity::<f64>::new(1.0).checked_div(0.0f64),
            Err(QuantityError::DivisionByZero { operation: Operation::Div })
        );
    }

    #[test]
    fn checked_div_overflow() {
        assert_eq!(
            M::new(i32::MIN).checked_div(-1i32),
            Err(QuantityError::Overflow { operation: Operation::Div })
        );
        assert_eq!(M::new(9).checked_div(2i32), Ok(M::new(4)));
    }

    #[test]
    fn checked_quantity_quotient() {
        assert_eq!(Km::new(3).checked_div_quantity(M::new(500)), Ok(6));
        assert_eq!(
            M::new(1).checked_div_quantity(Km::new(0)),
            Err(QuantityError::DivisionByZero { operation: Operation::Div })
        );
        assert_eq!(
            M::new(i32::MIN).checked_div_quantity(M::new(-1)),
            Err(QuantityError::Overflow { operation: Operation::Div })
        );
        assert_eq!(
            Km::new(i32::MAX).checked_div_quantity(M::new(1)),
            Err(QuantityError::Overflow { operation: Operation::Rescale })
        );
    }

    #[test]
    fn checked_quantity_remainder() {
        assert_eq!(Km::new(1).checked_rem_quantity(M::new(300)), Ok(M::new(100)));
        assert_eq!(
            M::new(1).checked_rem_quantity(M::new(0)),
            Err(QuantityError::DivisionByZero { operation: Operation::Rem })
        );
        assert_eq!(
            Quantity::<f64>::new(1.0).checked_rem_quantity(Quantity::<f64>::new(0.0)),
            Err(QuantityError::DivisionByZero { operation: Operation::Rem })
        );
    }

    #[test]
    fn checked_rem() {
        assert_eq!(M::new(7).checked_rem(2i32), Ok(M::new(1)));
        assert_eq!(
            M::new(7).checked_rem(0i32),
            Err(QuantityError::DivisionByZero { operation: Operation::Rem })
        );
    }
}
