//! Value-level ratio algebra.
//!
//! Every function here is a `const fn` over `i64`, so the same code serves the scale constants of
//! [`crate::Scale`] (evaluated while the compiler monomorphizes) and ordinary runtime callers. A violated precondition
//! panics; inside a constant that panic is reported as a compile-time error at the offending use site.
//!
//! # Most-negative value
//!
//! [`abs`] returns the *unsigned* magnitude, so `abs(i64::MIN) == 2^63` is represented exactly. [`gcd`] inherits this,
//! which keeps both functions total on the whole `i64` range. Only [`Rational::new`] can reject such magnitudes,
//! because a reduced component of `2^63` has no signed representation.

/// Returns `-1`, `0` or `1` according to the sign of `x`.
///
/// Never negates its argument, so `i64::MIN` is handled like any other negative value.
///
/// ```rust
/// use qscale_core::ratio::sign;
/// assert_eq!(sign(-7), -1);
/// assert_eq!(sign(0), 0);
/// assert_eq!(sign(i64::MIN), -1);
/// ```
#[inline]
pub const fn sign(x: i64) -> i64 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

/// Magnitude of `x` as an unsigned integer.
///
/// ```rust
/// use qscale_core::ratio::abs;
/// assert_eq!(abs(-12), 12);
/// assert_eq!(abs(i64::MIN), 1u64 << 63);
/// ```
#[inline]
pub const fn abs(x: i64) -> u64 {
    x.unsigned_abs()
}

/// Euclidean greatest common divisor of the magnitudes of `a` and `b`.
///
/// `gcd(0, 0) == 0`, and `gcd(x, 0) == abs(x)`.
///
/// ```rust
/// use qscale_core::ratio::gcd;
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(-4, 6), 2);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub const fn gcd(a: i64, b: i64) -> u64 {
    let mut a = abs(a);
    let mut b = abs(b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// A rational number kept in lowest terms with a strictly positive denominator.
///
/// Two `Rational`s compare equal exactly when the fractions they were built from are equivalent, because
/// [`Rational::new`] always normalizes.
///
/// ```rust
/// use qscale_core::ratio::Rational;
/// assert_eq!(Rational::new(2000, 2), Rational::new(1000, 1));
/// assert_eq!(Rational::new(3, -6), Rational::new(-1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// The ratio `1/1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Builds `num / den` in lowest terms.
    ///
    /// # Panics
    ///
    /// If `den` is zero, or if a reduced component does not fit in `i64` (only possible when an argument is
    /// `i64::MIN`).
    pub const fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "ratio denominator must not be zero");

        let negative = sign(num) * sign(den) < 0;
        // `den != 0`, so `g >= 1`.
        let g = gcd(num, den);
        let num_mag = abs(num) / g;
        let den_mag = abs(den) / g;
        assert!(
            num_mag <= i64::MAX as u64 && den_mag <= i64::MAX as u64,
            "ratio component out of range"
        );

        let num = num_mag as i64;
        Self {
            num: if negative { -num } else { num },
            den: den_mag as i64,
        }
    }

    /// Reduced numerator; carries the sign.
    #[inline]
    pub const fn num(&self) -> i64 {
        self.num
    }

    /// Reduced denominator; always positive.
    #[inline]
    pub const fn den(&self) -> i64 {
        self.den
    }

    /// `true` when the ratio is strictly greater than zero.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    /// Const-friendly equality.
    #[inline]
    pub const fn const_eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

/// The finest ratio that evenly divides both `a` and `b`.
///
/// The result has the gcd of the numerators over the lcm of the denominators, reduced. Both `a / result` and
/// `b / result` are therefore integers (see [`conversion_factor`]).
///
/// # Panics
///
/// If either ratio is not strictly positive, or if the lcm of the denominators overflows `i64`.
///
/// ```rust
/// use qscale_core::ratio::{common_ratio, Rational};
///
/// let metre = Rational::new(1, 1);
/// let kilometre = Rational::new(1000, 1);
/// let millimetre = Rational::new(1, 1000);
///
/// assert_eq!(common_ratio(kilometre, metre), metre);
/// assert_eq!(common_ratio(kilometre, millimetre), millimetre);
/// assert_eq!(common_ratio(Rational::new(2, 3), Rational::new(3, 4)), Rational::new(1, 12));
/// ```
///
/// A non-positive ratio is rejected while the constant is evaluated:
///
/// ```compile_fail
/// use qscale_core::ratio::{common_ratio, Rational};
/// const BAD: Rational = common_ratio(Rational::new(-1, 1), Rational::ONE);
/// let _ = BAD;
/// ```
pub const fn common_ratio(a: Rational, b: Rational) -> Rational {
    assert!(
        a.is_positive() && b.is_positive(),
        "ratio numerator must be positive"
    );

    let g_num = gcd(a.num, b.num);
    let g_den = gcd(a.den, b.den);
    let den = match (a.den / g_den as i64).checked_mul(b.den) {
        Some(den) => den,
        None => panic!("common ratio denominator overflows i64"),
    };
    Rational::new(g_num as i64, den)
}

/// Exact integer factor `from / to`.
///
/// This is the multiplier that re-expresses a count measured in `from` as a count measured in `to`.
///
/// # Panics
///
/// If either ratio is not strictly positive, if `to` does not evenly divide `from`, or if the factor overflows `u64`.
///
/// ```rust
/// use qscale_core::ratio::{conversion_factor, Rational};
/// assert_eq!(conversion_factor(Rational::new(1000, 1), Rational::ONE), 1000);
/// assert_eq!(conversion_factor(Rational::new(2, 3), Rational::new(1, 12)), 8);
/// ```
pub const fn conversion_factor(from: Rational, to: Rational) -> u64 {
    assert!(
        from.is_positive() && to.is_positive(),
        "ratio numerator must be positive"
    );
    if from.const_eq(&to) {
        return 1;
    }
    assert!(
        from.num % to.num == 0 && to.den % from.den == 0,
        "target ratio does not evenly divide source ratio"
    );

    let num_factor = (from.num / to.num) as u64;
    let den_factor = (to.den / from.den) as u64;
    match num_factor.checked_mul(den_factor) {
        Some(factor) => factor,
        None => panic!("conversion factor overflows u64"),
    }
}
