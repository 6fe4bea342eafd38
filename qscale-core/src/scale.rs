//! Type-level scale factors.

use crate::ratio::{self, Rational};
use crate::Representation;
use core::marker::PhantomData;
use core::ops::{BitAnd, Div, Mul};
use typenum::{Gcd, Gcf, IsEqual, NonZero, Prod, Quot, Unsigned, B0, B1, U1};

/// Trait implemented by every **scale** tag.
///
/// A scale is the compile-time rational factor relating a quantity's stored count to the base unit of its
/// dimension. `Num` and `Den` are `typenum` type-level integers in lowest terms, so the factor exists only in the type
/// system and costs nothing at runtime.
///
/// * `RATIO` is the same factor as a value usable in constant expressions.
///
/// # Invariants
///
/// - `Num` and `Den` are unsigned, non-zero and coprime, so every scale is strictly positive.
/// - Two scales denote the same factor iff their `RATIO`s are equal; their types may still differ when one of them
///   was written unreduced (`Ratio<U10, U2>` vs `Ratio<U5>`).
pub trait Scale: 'static {
    /// Reduced type-level numerator.
    type Num: Unsigned + NonZero;
    /// Reduced type-level denominator.
    type Den: Unsigned + NonZero;
    /// Reduced value of `Num / Den`.
    const RATIO: Rational;
}

/// The scale `N / D`.
///
/// `Ratio` is never instantiated; it only tags [`crate::Quantity`]. The denominator defaults to one, and the
/// fraction does not need to be written in lowest terms:
///
/// ```rust
/// use qscale_core::typenum::{U1, U10, U1000, U2};
/// use qscale_core::{Ratio, Scale};
///
/// type Kilo = Ratio<U1000>;
/// type Milli = Ratio<U1, U1000>;
/// assert_eq!(Kilo::RATIO.num(), 1000);
/// assert_eq!(Milli::RATIO.den(), 1000);
/// assert_eq!(<Ratio<U10, U2>>::RATIO.num(), 5);
/// ```
///
/// A zero scale does not exist:
///
/// ```compile_fail
/// use qscale_core::typenum::U0;
/// use qscale_core::{Ratio, Scale};
/// let _ = <Ratio<U0> as Scale>::RATIO;
/// ```
pub struct Ratio<N, D = U1>(PhantomData<(N, D)>);

type Reduced<A, B> = Quot<A, Gcf<A, B>>;

impl<N, D> Scale for Ratio<N, D>
where
    N: Unsigned + NonZero + Gcd<D> + Div<Gcf<N, D>> + 'static,
    D: Unsigned + NonZero + Gcd<N> + Div<Gcf<D, N>> + 'static,
    Reduced<N, D>: Unsigned + NonZero,
    Reduced<D, N>: Unsigned + NonZero,
{
    type Num = Reduced<N, D>;
    type Den = Reduced<D, N>;
    const RATIO: Rational = Rational::new(N::I64, D::I64);
}

/// Computes the **common ratio** of two scales at the type level.
///
/// The common value is the gcd of the (reduced) numerators over the lcm of the (reduced) denominators: the coarsest
/// scale in which counts of both operands are whole multiples. When an operand's scale already has that value, the
/// output is that operand's scale type (the left one first), so a scale combined with itself yields itself even when
/// it was written unreduced, and `Kilo` combined with `Unity` is exactly `Unity`. Otherwise the output is the
/// canonical `Ratio` in lowest terms.
///
/// ```rust
/// use core::marker::PhantomData;
/// use qscale_core::prefixes::{Kilo, Milli, Unity};
/// use qscale_core::typenum::{U1, U10, U2, U3, U6};
/// use qscale_core::{CommonRatioOf, Ratio};
///
/// fn same<T>(_: PhantomData<T>, _: PhantomData<T>) {}
/// same(PhantomData::<CommonRatioOf<Kilo, Unity>>, PhantomData::<Unity>);
/// same(PhantomData::<CommonRatioOf<Kilo, Milli>>, PhantomData::<Milli>);
/// same(PhantomData::<CommonRatioOf<Ratio<U10, U2>, Ratio<U10, U2>>>, PhantomData::<Ratio<U10, U2>>);
/// same(PhantomData::<CommonRatioOf<Ratio<U1, U2>, Ratio<U1, U3>>>, PhantomData::<Ratio<U1, U6>>);
/// ```
pub trait CommonRatio<Rhs: Scale>: Scale {
    /// The common scale.
    type Output: Scale;
}

/// Shorthand for `<A as CommonRatio<B>>::Output`.
pub type CommonRatioOf<A, B> = <A as CommonRatio<B>>::Output;

/// Type-level selection on a `typenum` bit: `A` for `B1`, `B` for `B0`.
pub trait Select<A, B> {
    /// The selected type.
    type Output;
}

impl<A, B> Select<A, B> for B1 {
    type Output = A;
}

impl<A, B> Select<A, B> for B0 {
    type Output = B;
}

type Lcm<A, B> = Prod<Quot<A, Gcf<A, B>>, B>;

type Canonical<L, R> =
    Ratio<Gcf<<L as Scale>::Num, <R as Scale>::Num>, Lcm<<L as Scale>::Den, <R as Scale>::Den>>;

type Equal<A, B> = <A as IsEqual<B>>::Output;

/// `B1` when scale `S` has the reduced value of scale `C`.
type SameValue<S, C> =
    <Equal<<S as Scale>::Num, <C as Scale>::Num> as BitAnd<Equal<<S as Scale>::Den, <C as Scale>::Den>>>::Output;

/// `S` when it has the value of `C`, else `C`.
type Prefer<S, C> = <SameValue<S, C> as Select<S, C>>::Output;

impl<L, R> CommonRatio<R> for L
where
    L: Scale,
    R: Scale,
    L::Num: Gcd<R::Num>,
    L::Den: Gcd<R::Den> + Div<Gcf<L::Den, R::Den>>,
    Quot<L::Den, Gcf<L::Den, R::Den>>: Mul<R::Den>,
    Canonical<L, R>: Scale,
    R::Num: IsEqual<<Canonical<L, R> as Scale>::Num>,
    R::Den: IsEqual<<Canonical<L, R> as Scale>::Den>,
    Equal<R::Num, <Canonical<L, R> as Scale>::Num>: BitAnd<Equal<R::Den, <Canonical<L, R> as Scale>::Den>>,
    SameValue<R, Canonical<L, R>>: Select<R, Canonical<L, R>>,
    Prefer<R, Canonical<L, R>>: Scale,
    L::Num: IsEqual<<Prefer<R, Canonical<L, R>> as Scale>::Num>,
    L::Den: IsEqual<<Prefer<R, Canonical<L, R>> as Scale>::Den>,
    Equal<L::Num, <Prefer<R, Canonical<L, R>> as Scale>::Num>:
        BitAnd<Equal<L::Den, <Prefer<R, Canonical<L, R>> as Scale>::Den>>,
    SameValue<L, Prefer<R, Canonical<L, R>>>: Select<L, Prefer<R, Canonical<L, R>>>,
    Prefer<L, Prefer<R, Canonical<L, R>>>: Scale,
{
    type Output = Prefer<L, Prefer<R, Canonical<L, R>>>;
}

/// Compile-time conversion factor from scale `F` to scale `T`, checked against representation `Rep`.
pub(crate) struct Rescale<F, T, Rep>(PhantomData<(F, T, Rep)>);

impl<F: Scale, T: Scale, Rep: Representation> Rescale<F, T, Rep> {
    /// `F / T`; fails to evaluate when `T` does not divide `F` or the quotient overflows `u64`.
    pub(crate) const EXACT: u64 = ratio::conversion_factor(F::RATIO, T::RATIO);

    /// [`Self::EXACT`], additionally failing to evaluate when `Rep` cannot hold the factor.
    pub(crate) const FACTOR: u64 = {
        let factor = Self::EXACT;
        assert!(
            factor <= Rep::FACTOR_LIMIT,
            "conversion factor does not fit the representation"
        );
        factor
    };
}
