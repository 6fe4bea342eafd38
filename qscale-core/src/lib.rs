//! Core type system for ratio-scaled quantities.
//!
//! `qscale-core` provides a minimal, zero-cost scaling model:
//!
//! - A *scale* is a zero-sized [`Ratio<N, D>`] tag with `typenum` numerator and denominator, implementing [`Scale`].
//! - A *representation* is the numeric type the count is stored in, implementing [`Representation`].
//! - A count tagged with a scale is a [`Quantity<Rep, R>`]; reading it back never applies the scale.
//! - Binary operators combine quantities of different scales and representations through their common type:
//!   the coarsest scale dividing both ([`CommonRatio`]) and the promoted representation ([`Promote`]).
//!
//! Most users should depend on `qscale` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Exact mixed-scale arithmetic: `1 km + 500 m` is computed as `1000 m + 500 m` with an integer factor known at
//!   compile time, and the result type is `Quantity<_, Unity>`.
//! - Static rejection of lossy construction (a floating count into an integral quantity), of quantities nested
//!   inside quantities, of non-positive scales, and of representations with no common promotion.
//! - Zero runtime overhead for scale tags (phantom types only); same-scale operations compile to a bare operation on
//!   the counts.
//!
//! # What this crate does not try to solve
//!
//! - Dimensions. A quantity knows its scale, not whether it is a length or a time; keeping metres apart from seconds
//!   is left to the aliases built on top of it.
//! - Explicit lossy casts between scales or representations.
//! - Formatting with unit symbols.
//!
//! # Quick start
//!
//! ```rust
//! use qscale_core::prefixes::{Kilo, Unity};
//! use qscale_core::Quantity;
//!
//! type Meters = Quantity<i32, Unity>;
//! type Kilometers = Quantity<i32, Kilo>;
//!
//! assert_eq!(Meters::new(1) + Meters::new(2), Meters::new(3));
//! assert_eq!(Meters::new(1000), Kilometers::new(1));
//! assert_eq!(Kilometers::new(1) + Meters::new(500), Meters::new(1500));
//! assert_eq!(Meters::new(7) % Meters::new(2), Meters::new(1));
//! assert_eq!(Meters::new(4) / Meters::new(2), 2);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `qscale-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! qscale-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<Rep, R>`; serialization is the count only.
//!
//! # Panics and errors
//!
//! Contract violations are compile errors. Invalid scales and conversion factors that do not fit the common
//! representation fail in constant evaluation when the offending operation is instantiated.
//!
//! The operators follow the overflow behavior of the representation. The `checked_*` methods return
//! [`QuantityError`] instead, and log the rejection at `debug` level through the `log` facade.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![recursion_limit = "256"]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod checked;
mod error;
mod ops;
mod quantity;
mod representation;
mod scale;

/// Value-level ratio algebra usable in constant expressions.
pub mod ratio;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use error::{Operation, QuantityError, QuantityResult};
pub use ops::{Common, CommonQuantity};
pub use quantity::Quantity;
pub use ratio::Rational;
pub use representation::{
    AdmitsFrom, CommonRep, ConvertFrom, ImplicitFrom, Promote, QuantityValues, Representation,
};
pub use scale::{CommonRatio, CommonRatioOf, Ratio, Scale};

/// Type-level integers used to spell [`Ratio`] numerators and denominators.
pub use typenum;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined scales
// ─────────────────────────────────────────────────────────────────────────────

pub mod prefixes;
