//! Compile-time ratio-scaled quantities.
//!
//! `qscale` is the user-facing crate in this workspace. It re-exports the full API from `qscale-core`, the
//! `Representation` derive from `qscale-derive`, and a small set of length and time aliases.
//!
//! The core idea is: a value is a `Quantity<Rep, R>`, a count stored as `Rep` whose step size is the compile-time
//! rational `R`. Quantities of different scales combine exactly, through the coarsest scale that divides both.
//!
//! # What this crate solves
//!
//! - Mixed-scale integer arithmetic without rounding: `Kilometers + Meters` is computed in metres.
//! - Safe representation mixing: `i32` counts combine with `f64` counts in `f64`, `u8` with `i8` in `i16`.
//! - Compile-time rejection of lossy construction and of combinations with no common representation.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional analysis: the aliases in [`length`] and [`time`] share the same scales, so nothing stops adding
//!   `Meters` to `Seconds` except their names.
//! - Unit symbols and formatting.
//!
//! # Quick start
//!
//! ```rust
//! use qscale::length::{Kilometers, Meters};
//!
//! let total = Kilometers::<i32>::new(1) + Meters::<i32>::new(500);
//! assert_eq!(total, Meters::<i32>::new(1500));
//! assert_eq!(Meters::<i32>::new(4) / Meters::<i32>::new(2), 2);
//!
//! let precise = Meters::<f64>::from_quantity(Meters::<i32>::new(3));
//! assert_eq!(precise.count(), 3.0);
//! ```
//!
//! # Custom representations
//!
//! Any `Copy` numeric newtype can store counts; `#[derive(Representation)]` forwards the capability set to the
//! wrapped field:
//!
//! ```rust
//! use qscale::length::Meters;
//! use qscale::Representation;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Representation)]
//! struct Cents(i64);
//!
//! let total = Meters::<Cents>::from_count(Cents(150)) + Meters::<Cents>::from_count(Cents(50));
//! assert_eq!(total.count(), Cents(200));
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! A floating count never narrows into an integral quantity:
//!
//! ```compile_fail
//! use qscale::length::Meters;
//! let _ = Meters::<i32>::from_quantity(Meters::<f64>::new(3.5));
//! ```
//!
//! Representations with no promotion cannot be combined:
//!
//! ```compile_fail
//! use qscale::length::Meters;
//! let _ = Meters::<u128>::new(1u128) + Meters::<i64>::new(1i64);
//! ```
//!
//! A conversion factor must fit the common representation:
//!
//! ```compile_fail
//! use qscale::length::{Kilometers, Meters};
//! let _ = Kilometers::<i8>::new(1i8) + Meters::<i8>::new(1i8);
//! ```
//!
//! Adding a bare number is not a quantity operation:
//!
//! ```compile_fail
//! use qscale::length::Meters;
//! let _ = Meters::<i32>::new(1) + 2;
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `qscale-core`.
//! - `serde`: enables `serde` support for `Quantity<Rep, R>`; serialization is the count only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! qscale = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Contract violations are compile errors. The operators follow the overflow behavior of the representation; the
//! `checked_*` methods return [`QuantityError`] instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use qscale_core::*;

/// Derive macro implementing `Representation` and `QuantityValues` for single-field wrappers.
///
/// See the `qscale-derive` crate documentation for the generated impls and the `#[representation(...)]` attribute.
pub use qscale_derive::Representation;

/// Length aliases, with the metre as base unit.
pub mod length {
    use crate::prefixes::{Centi, Kilo, Micro, Milli, Nano, Unity};
    use crate::Quantity;

    /// Nanometres.
    pub type Nanometers<Rep> = Quantity<Rep, Nano>;
    /// Micrometres.
    pub type Micrometers<Rep> = Quantity<Rep, Micro>;
    /// Millimetres.
    pub type Millimeters<Rep> = Quantity<Rep, Milli>;
    /// Centimetres.
    pub type Centimeters<Rep> = Quantity<Rep, Centi>;
    /// Metres.
    pub type Meters<Rep> = Quantity<Rep, Unity>;
    /// Kilometres.
    pub type Kilometers<Rep> = Quantity<Rep, Kilo>;
}

/// Time aliases, with the second as base unit.
pub mod time {
    use crate::prefixes::{Micro, Milli, Nano, Unity};
    use crate::typenum::{Prod, U24, U60, U7};
    use crate::{Quantity, Ratio};

    /// One minute, in seconds.
    pub type MinuteRatio = Ratio<U60>;
    /// One hour, in seconds.
    pub type HourRatio = Ratio<Prod<U60, U60>>;
    /// One day, in seconds.
    pub type DayRatio = Ratio<Prod<Prod<U60, U60>, U24>>;
    /// One week, in seconds.
    pub type WeekRatio = Ratio<Prod<Prod<Prod<U60, U60>, U24>, U7>>;

    /// Nanoseconds.
    pub type Nanoseconds<Rep> = Quantity<Rep, Nano>;
    /// Microseconds.
    pub type Microseconds<Rep> = Quantity<Rep, Micro>;
    /// Milliseconds.
    pub type Milliseconds<Rep> = Quantity<Rep, Milli>;
    /// Seconds.
    pub type Seconds<Rep> = Quantity<Rep, Unity>;
    /// Minutes.
    pub type Minutes<Rep> = Quantity<Rep, MinuteRatio>;
    /// Hours.
    pub type Hours<Rep> = Quantity<Rep, HourRatio>;
    /// Days.
    pub type Days<Rep> = Quantity<Rep, DayRatio>;
    /// Weeks.
    pub type Weeks<Rep> = Quantity<Rep, WeekRatio>;
}
