//! SI prefix scales.
//!
//! Each alias is a [`Ratio`] relative to the base unit of whatever dimension it is used with, mirroring the
//! vocabulary of decimal prefixes. [`Unity`] is the base unit itself and the default scale of
//! [`Quantity`](crate::Quantity).
//!
//! ```rust
//! use qscale_core::prefixes::{Kilo, Unity};
//! use qscale_core::Quantity;
//!
//! let metres = Quantity::<i32, Unity>::new(1500);
//! let kilometres = Quantity::<i32, Kilo>::new(1);
//! assert_eq!(kilometres + Quantity::<i32, Unity>::new(500), metres);
//! ```
//!
//! Extreme prefixes only combine while the conversion factor fits: pairing [`Exa`] with [`Atto`] needs a factor of
//! `10^36`, which is rejected at compile time.

use crate::Ratio;
use typenum::{
    U1, U10, U100, U1000, U1000000, U1000000000, U1000000000000, U1000000000000000,
    U1000000000000000000,
};

/// `10^-18`.
pub type Atto = Ratio<U1, U1000000000000000000>;
/// `10^-15`.
pub type Femto = Ratio<U1, U1000000000000000>;
/// `10^-12`.
pub type Pico = Ratio<U1, U1000000000000>;
/// `10^-9`.
pub type Nano = Ratio<U1, U1000000000>;
/// `10^-6`.
pub type Micro = Ratio<U1, U1000000>;
/// `10^-3`.
pub type Milli = Ratio<U1, U1000>;
/// `10^-2`.
pub type Centi = Ratio<U1, U100>;
/// `10^-1`.
pub type Deci = Ratio<U1, U10>;
/// `1`, the base unit.
pub type Unity = Ratio<U1, U1>;
/// `10^1`.
pub type Deca = Ratio<U10>;
/// `10^2`.
pub type Hecto = Ratio<U100>;
/// `10^3`.
pub type Kilo = Ratio<U1000>;
/// `10^6`.
pub type Mega = Ratio<U1000000>;
/// `10^9`.
pub type Giga = Ratio<U1000000000>;
/// `10^12`.
pub type Tera = Ratio<U1000000000000>;
/// `10^15`.
pub type Peta = Ratio<U1000000000000000>;
/// `10^18`.
pub type Exa = Ratio<U1000000000000000000>;
