//! Quantity type and its member operations.

use crate::prefixes::Unity;
use crate::representation::{ImplicitFrom, QuantityValues, Representation};
use crate::scale::Scale;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A count of `R`-sized steps, stored as `Rep`.
///
/// `Quantity<Rep, R>` wraps exactly one `Rep` value together with the phantom scale `R`. The value it denotes is
/// `count * R` in the base unit of its dimension; the scale is never stored and never applied when the count is read.
///
/// Quantities of the same scale combine directly. Quantities of different scales are combined by the binary
/// operators, which convert both counts to the common scale (see [`crate::CommonRatio`]) and the promoted
/// representation (see [`crate::Promote`]) first.
///
/// # Examples
///
/// ```rust
/// use qscale_core::prefixes::{Kilo, Unity};
/// use qscale_core::Quantity;
///
/// type Metres = Quantity<i32, Unity>;
/// type Kilometres = Quantity<i32, Kilo>;
///
/// let total = Kilometres::new(1) + Metres::new(500);
/// assert_eq!(total.count(), 1500);
/// assert_eq!(total, Metres::new(1500));
/// ```
///
/// A quantity's representation is never itself a quantity:
///
/// ```compile_fail
/// use qscale_core::Quantity;
/// let _nested = Quantity::<Quantity<i32>>::from_count(Quantity::from_count(1));
/// ```
pub struct Quantity<Rep: Representation, R: Scale = Unity>(Rep, PhantomData<R>);

impl<Rep: Representation, R: Scale> Quantity<Rep, R> {
    /// Wraps a count of this exact representation.
    ///
    /// ```rust
    /// use qscale_core::Quantity;
    /// const TEN: Quantity<u32> = Quantity::from_count(10);
    /// assert_eq!(TEN.count(), 10);
    /// ```
    #[inline]
    pub const fn from_count(count: Rep) -> Self {
        Self(count, PhantomData)
    }

    /// Creates a quantity from a count of any implicitly convertible representation.
    ///
    /// Integral sources are accepted by floating quantities, but a floating source is never accepted by an integral
    /// quantity:
    ///
    /// ```rust
    /// use qscale_core::Quantity;
    /// assert_eq!(Quantity::<f64>::new(3).count(), 3.0);
    /// assert_eq!(Quantity::<i64>::new(3i32).count(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// use qscale_core::Quantity;
    /// let _ = Quantity::<i32>::new(1.0);
    /// ```
    ///
    /// Integral sources must convert losslessly:
    ///
    /// ```compile_fail
    /// use qscale_core::Quantity;
    /// let _ = Quantity::<i8>::new(1i64);
    /// ```
    ///
    /// An unsuffixed integer literal has no type of its own here and falls back to `i32`, which `i16`, `u16` and the
    /// other narrower integers do not accept. Suffix the literal, or use [`Quantity::from_count`], which takes the
    /// representation itself:
    ///
    /// ```rust
    /// use qscale_core::Quantity;
    /// assert_eq!(Quantity::<i16>::new(5i16).count(), 5);
    /// assert_eq!(Quantity::<u16>::from_count(5).count(), 5);
    /// ```
    ///
    /// ```compile_fail
    /// use qscale_core::Quantity;
    /// let _ = Quantity::<i16>::new(5);
    /// ```
    #[inline]
    pub fn new<T>(value: T) -> Self
    where
        T: Representation,
        Rep: ImplicitFrom<T>,
    {
        Self::from_count(Rep::convert_from(value))
    }

    /// Converts a quantity of the same scale into this representation.
    ///
    /// The same floating-point policy as [`Quantity::new`] applies. "Same scale" compares reduced values, so a
    /// `Ratio<U10, U2>` quantity converts into a `Ratio<U5>` one. Quantities of a *different* scale cannot be converted
    /// this way; combine them with the binary operators instead.
    ///
    /// ```rust
    /// use qscale_core::typenum::{U10, U2, U5};
    /// use qscale_core::{Quantity, Ratio};
    ///
    /// let metres = Quantity::<i32>::new(3);
    /// assert_eq!(Quantity::<f32>::from_quantity(metres).count(), 3.0);
    ///
    /// let fives = Quantity::<i32, Ratio<U10, U2>>::new(4);
    /// assert_eq!(Quantity::<i64, Ratio<U5>>::from_quantity(fives).count(), 4);
    /// ```
    ///
    /// ```compile_fail
    /// use qscale_core::Quantity;
    /// let metres = Quantity::<f32>::new(3.0);
    /// let _ = Quantity::<i32>::from_quantity(metres);
    /// ```
    ///
    /// ```compile_fail
    /// use qscale_core::prefixes::{Kilo, Unity};
    /// use qscale_core::Quantity;
    /// let _ = Quantity::<i32, Unity>::from_quantity(Quantity::<i32, Kilo>::new(1));
    /// ```
    #[inline]
    pub fn from_quantity<T, R2>(other: Quantity<T, R2>) -> Self
    where
        T: Representation,
        Rep: ImplicitFrom<T>,
        R2: Scale<Num = R::Num, Den = R::Den>,
    {
        Self::new(other.count())
    }

    /// Returns the stored count, unscaled.
    #[inline]
    pub const fn count(&self) -> Rep {
        self.0
    }

    /// Unary plus: returns a copy.
    #[inline]
    pub fn pos(self) -> Self {
        self
    }

    /// Pre-increment: adds one unit to the count and returns the updated quantity.
    ///
    /// ```rust
    /// use qscale_core::Quantity;
    /// let mut q = Quantity::<i32>::new(1000);
    /// assert_eq!(q.increment().count(), 1001);
    /// assert_eq!(q.count(), 1001);
    /// ```
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.0 = self.0 + Rep::one();
        self
    }

    /// Post-increment: adds one unit to the count and returns the previous quantity.
    ///
    /// ```rust
    /// use qscale_core::Quantity;
    /// let mut q = Quantity::<i32>::new(1000);
    /// assert_eq!(q.post_increment().count(), 1000);
    /// assert_eq!(q.count(), 1001);
    /// ```
    #[inline]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.0 = self.0 + Rep::one();
        previous
    }

    /// Pre-decrement: subtracts one unit from the count and returns the updated quantity.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        self.0 = self.0 - Rep::one();
        self
    }

    /// Post-decrement: subtracts one unit from the count and returns the previous quantity.
    #[inline]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.0 = self.0 - Rep::one();
        previous
    }
}

impl<Rep: Representation + QuantityValues, R: Scale> Quantity<Rep, R> {
    /// The quantity with a zero count.
    #[inline]
    pub fn zero() -> Self {
        Self::from_count(Rep::zero())
    }

    /// The quantity with the lowest representable count.
    ///
    /// ```rust
    /// use qscale_core::Quantity;
    /// assert_eq!(Quantity::<i32>::min().count(), i32::MIN);
    /// assert_eq!(Quantity::<f32>::min().count(), f32::MIN);
    /// ```
    #[inline]
    pub fn min() -> Self {
        Self::from_count(Rep::min())
    }

    /// The quantity with the greatest representable count.
    #[inline]
    pub fn max() -> Self {
        Self::from_count(Rep::max())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard traits
// ─────────────────────────────────────────────────────────────────────────────

impl<Rep: Representation, R: Scale> Clone for Quantity<Rep, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<Rep: Representation, R: Scale> Copy for Quantity<Rep, R> {}

impl<Rep: Representation + fmt::Debug, R: Scale> fmt::Debug for Quantity<Rep, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("count", &self.0)
            .field("ratio", &R::RATIO)
            .finish()
    }
}

impl<Rep: Representation + QuantityValues, R: Scale> Default for Quantity<Rep, R> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<Rep: Representation + Hash, R: Scale> Hash for Quantity<Rep, R> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<Rep: Representation + QuantityValues, R: Scale> Sum for Quantity<Rep, R> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| Self::from_count(acc.0 + q.0))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unary and compound-assignment operators
// ─────────────────────────────────────────────────────────────────────────────

impl<Rep: Representation + Neg<Output = Rep>, R: Scale> Neg for Quantity<Rep, R> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_count(-self.0)
    }
}

impl<Rep, R, T, R2> AddAssign<Quantity<T, R2>> for Quantity<Rep, R>
where
    Rep: Representation + ImplicitFrom<T>,
    T: Representation,
    R: Scale,
    R2: Scale<Num = R::Num, Den = R::Den>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<T, R2>) {
        self.0 = self.0 + Rep::convert_from(rhs.0);
    }
}

impl<Rep, R, T, R2> SubAssign<Quantity<T, R2>> for Quantity<Rep, R>
where
    Rep: Representation + ImplicitFrom<T>,
    T: Representation,
    R: Scale,
    R2: Scale<Num = R::Num, Den = R::Den>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<T, R2>) {
        self.0 = self.0 - Rep::convert_from(rhs.0);
    }
}

impl<Rep, R, T> MulAssign<T> for Quantity<Rep, R>
where
    Rep: Representation + ImplicitFrom<T>,
    T: Representation,
    R: Scale,
{
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 = self.0 * Rep::convert_from(rhs);
    }
}

impl<Rep, R, T> DivAssign<T> for Quantity<Rep, R>
where
    Rep: Representation + ImplicitFrom<T>,
    T: Representation,
    R: Scale,
{
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 = self.0 / Rep::convert_from(rhs);
    }
}

impl<Rep, R, T> RemAssign<T> for Quantity<Rep, R>
where
    Rep: Representation + ImplicitFrom<T>,
    T: Representation,
    R: Scale,
{
    #[inline]
    fn rem_assign(&mut self, rhs: T) {
        self.0 = self.0 % Rep::convert_from(rhs);
    }
}

impl<Rep, R, T, R2> RemAssign<Quantity<T, R2>> for Quantity<Rep, R>
where
    Rep: Representation + ImplicitFrom<T>,
    T: Representation,
    R: Scale,
    R2: Scale<Num = R::Num, Den = R::Den>,
{
    #[inline]
    fn rem_assign(&mut self, rhs: Quantity<T, R2>) {
        self.0 = self.0 % Rep::convert_from(rhs.0);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<Rep: Representation + Serialize, R: Scale> Serialize for Quantity<Rep, R> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, Rep: Representation + Deserialize<'de>, R: Scale> Deserialize<'de> for Quantity<Rep, R> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let count = Rep::deserialize(deserializer)?;
        Ok(Quantity::from_count(count))
    }
}
