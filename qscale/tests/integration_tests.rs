//! Integration-level tests for the `qscale` facade crate.

#![recursion_limit = "256"]

use qscale::length::{Centimeters, Kilometers, Meters, Millimeters};
use qscale::ratio::{self, Rational};
use qscale::time::{Days, Hours, Milliseconds, Minutes, Seconds, Weeks};
use qscale::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// User-defined representations
// ─────────────────────────────────────────────────────────────────────────────

/// Integral fixed-point count, convertible from `i32`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Representation)]
struct Fixed(i64);

impl ConvertFrom<i32> for Fixed {
    fn convert_from(value: i32) -> Self {
        Fixed(value.into())
    }
}

impl Promote<i32> for Fixed {
    type Output = Fixed;
}

impl Promote<Fixed> for i32 {
    type Output = Fixed;
}

/// Integral count that opts into the floating-point policy, rounding `f64` sources to the nearest step.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Representation)]
#[representation(floating = true)]
struct Rounded {
    steps: i64,
}

impl ConvertFrom<f64> for Rounded {
    fn convert_from(value: f64) -> Self {
        Rounded {
            steps: value.round() as i64,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenarios with metres and kilometres
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn metres_add() {
    assert_eq!(Meters::<i32>::new(1) + Meters::<i32>::new(2), Meters::<i32>::new(3));
}

#[test]
fn metres_equal_kilometres() {
    assert_eq!(Meters::<i32>::new(1000), Kilometers::<i32>::new(1));
    assert_eq!(Kilometers::<i32>::new(1), Meters::<i32>::new(1000));
}

#[test]
fn kilometres_plus_metres() {
    let sum = Kilometers::<i32>::new(1) + Meters::<i32>::new(500);
    assert_eq!(sum, Meters::<i32>::new(1500));
    let _: Meters<i32> = sum;
}

#[test]
fn metres_remainder() {
    assert_eq!(Meters::<i32>::new(7) % Meters::<i32>::new(2), Meters::<i32>::new(1));
}

#[test]
fn metres_quotient_is_unitless() {
    let q: i32 = Meters::<i32>::new(4) / Meters::<i32>::new(2);
    assert_eq!(q, 2);
}

#[test]
fn floating_from_integral_quantity() {
    let m = Meters::<f64>::from_quantity(Meters::<i32>::new(3));
    assert_eq!(m.count(), 3.0);
}

#[test]
fn centimetres_and_millimetres() {
    let total = Centimeters::<i64>::new(12i64) - Millimeters::<i64>::new(5i64);
    assert_eq!(total.count(), 115);
    assert!(Millimeters::<i64>::new(9i64) < Centimeters::<i64>::new(1i64));
}

// ─────────────────────────────────────────────────────────────────────────────
// Time aliases
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn time_scales_agree() {
    assert_eq!(Minutes::<i64>::new(60i64), Hours::<i64>::new(1i64));
    assert_eq!(Days::<i64>::new(1i64), Hours::<i64>::new(24i64));
    assert_eq!(Weeks::<i64>::new(1i64), Days::<i64>::new(7i64));
    assert_eq!(Seconds::<i64>::new(604_800i64), Weeks::<i64>::new(1i64));
}

#[test]
fn hours_and_minutes() {
    let total = Hours::<i64>::new(1i64) + Minutes::<i64>::new(30i64);
    let _: Minutes<i64> = total;
    assert_eq!(total.count(), 90);
}

#[test]
fn milliseconds_and_seconds() {
    let total = Milliseconds::<i64>::new(1500i64) + Seconds::<i64>::new(1i64);
    assert_eq!(total, Milliseconds::<i64>::new(2500i64));
}

#[test]
fn fractional_hours() {
    let h = Hours::<f64>::new(1.5);
    let m = Minutes::<i32>::new(15);
    let total = h + m;
    assert_abs_diff_eq!(total.count(), 105.0, epsilon = 1e-12);
    let minutes_per_hour: f64 = Hours::<f64>::new(1.0) / Minutes::<f64>::new(1.0);
    assert_relative_eq!(minutes_per_hour, 60.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Derived representations
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn derived_flags_and_limits() {
    assert!(!Fixed::TREAT_AS_FLOATING_POINT);
    assert_eq!(Fixed::FACTOR_LIMIT, i64::MAX as u64);
    assert!(Rounded::TREAT_AS_FLOATING_POINT);
    assert_eq!(<Fixed as QuantityValues>::zero(), Fixed(0));
    assert_eq!(<Rounded as QuantityValues>::max(), Rounded { steps: i64::MAX });
}

#[test]
fn derived_representation_arithmetic() {
    let a = Meters::<Fixed>::from_count(Fixed(150));
    let b = Meters::<Fixed>::from_count(Fixed(50));
    assert_eq!((a + b).count(), Fixed(200));
    assert_eq!((a - b).count(), Fixed(100));
    assert_eq!(a / b, Fixed(3));
    assert_eq!((a % b).count(), Fixed(0));
    assert!(b < a);
}

#[test]
fn derived_representation_across_scales() {
    let km = Kilometers::<Fixed>::from_count(Fixed(2));
    let m = Meters::<Fixed>::from_count(Fixed(5));
    assert_eq!((km + m).count(), Fixed(2005));
    assert_eq!(km, Meters::<Fixed>::from_count(Fixed(2000)));
}

#[test]
fn derived_representation_promotes_with_native() {
    let m = Meters::<Fixed>::new(3i32);
    assert_eq!(m.count(), Fixed(3));

    let sum = Kilometers::<Fixed>::from_count(Fixed(1)) + Meters::<i32>::new(5);
    let _: Meters<Fixed> = sum;
    assert_eq!(sum.count(), Fixed(1005));

    assert_eq!((m * 4i32).count(), Fixed(12));
    assert_eq!((4i32 * m).count(), Fixed(12));
    assert_eq!(Meters::<i32>::new(6) / m, Fixed(2));
}

#[test]
fn derived_increment_and_defaults() {
    let mut m = Meters::<Fixed>::default();
    assert_eq!(m.count(), Fixed(0));
    m.increment();
    m.increment();
    assert_eq!(m.post_decrement().count(), Fixed(2));
    assert_eq!(m.count(), Fixed(1));
    assert_eq!(Meters::<Fixed>::min().count(), Fixed(i64::MIN));
}

#[test]
fn floating_policy_admits_float_source() {
    let m = Meters::<Rounded>::new(1.6f64);
    assert_eq!(m.count(), Rounded { steps: 2 });
    assert_eq!(Meters::<Rounded>::new(-0.4f64).count(), Rounded { steps: 0 });
}

#[test]
fn floating_policy_keeps_integral_arithmetic() {
    let a = Meters::<Rounded>::new(2.6f64);
    let b = Meters::<Rounded>::new(1.2f64);
    assert_eq!((a + b).count(), Rounded { steps: 4 });
    assert_eq!((a * Rounded { steps: 2 }).count(), Rounded { steps: 6 });
    assert_eq!(a / b, Rounded { steps: 3 });
    let mut c = a;
    c.increment();
    assert_eq!(c.count(), Rounded { steps: 4 });
}

#[test]
fn derived_checked_arithmetic() {
    let max = Meters::<Fixed>::from_count(Fixed(i64::MAX));
    let one = Meters::<Fixed>::from_count(Fixed(1));
    assert_eq!(
        max.checked_add(one),
        Err(QuantityError::Overflow {
            operation: Operation::Add
        })
    );
    assert_eq!(
        one.checked_div(Fixed(0)),
        Err(QuantityError::DivisionByZero {
            operation: Operation::Div
        })
    );
    assert_eq!(max.checked_sub(one).map(|q| q.count()), Ok(Fixed(i64::MAX - 1)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Ratio algebra
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn ratio_helpers() {
    assert_eq!(ratio::sign(-12), -1);
    assert_eq!(ratio::sign(0), 0);
    assert_eq!(ratio::abs(i64::MIN), 1u64 << 63);
    assert_eq!(ratio::gcd(-12, 18), 6);
    assert_eq!(
        ratio::common_ratio(Rational::new(1000, 1), Rational::new(1, 1)),
        Rational::ONE
    );
}

#[test]
fn scale_constants() {
    assert_eq!(<time::HourRatio as Scale>::RATIO, Rational::new(3600, 1));
    assert_eq!(<time::WeekRatio as Scale>::RATIO, Rational::new(604_800, 1));
    assert_eq!(<prefixes::Milli as Scale>::RATIO, Rational::new(1, 1000));
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Leg {
        distance: Kilometers<f64>,
        duration: Minutes<i64>,
    }

    #[test]
    fn struct_roundtrip() {
        let leg = Leg {
            distance: Kilometers::<f64>::new(12.5),
            duration: Minutes::<i64>::new(40i64),
        };
        let json = serde_json::to_string(&leg).unwrap();
        assert_eq!(json, r#"{"distance":12.5,"duration":40}"#);
        let back: Leg = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leg);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Properties
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn kilometres_equal_scaled_metres(km in -1_000_000i64..1_000_000) {
        prop_assert_eq!(Kilometers::<i64>::new(km), Meters::<i64>::new(km * 1000));
    }

    #[test]
    fn mixed_scale_sum_matches_manual_rescale(h in -10_000i64..10_000, s in -10_000i64..10_000) {
        let total = Hours::<i64>::new(h) + Seconds::<i64>::new(s);
        prop_assert_eq!(total.count(), h * 3600 + s);
    }
}
