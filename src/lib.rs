//! # rational
//!
//! An unboundedly precise rational number type, in the spirit of PEP 239, extended
//! with the IEEE-style special values positive infinity, negative infinity and NaN.
//!
//! Every value is kept in a canonical form:
//!
//! - **Lowest terms**: finite values have `gcd(numerator, denominator) == 1`
//! - **Sign on the numerator**: the denominator is never negative
//! - **Special values**: a zero denominator marks `-∞` (`-1/0`), NaN (`0/0`) or `+∞` (`1/0`)
//!
//! Arithmetic follows IEEE conventions at the edges: `1/0` is `+∞`, `∞ - ∞` is NaN,
//! and NaN compares equal to itself so that values can be collected and hashed.
//!
//! ## Examples
//!
//! ```rust
//! use rational::Rational;
//!
//! let mut r = Rational::new(2, 3);
//! r /= 10;
//! assert_eq!(r.to_string(), "1/15");
//!
//! assert!(Rational::new(1, 0).is_pos_infinity());
//! assert!((Rational::infinity() - Rational::infinity()).is_nan());
//! assert_eq!(Rational::nan(), Rational::nan());
//! ```
//!
//! Integers embed exactly, and hash the same way as the [`BigInt`] they came from:
//!
//! ```rust
//! use num_bigint::BigInt;
//! use rational::Rational;
//!
//! assert_eq!(Rational::new(84, 2), 42);
//! assert_eq!(Rational::from(42).hash_key(), BigInt::from(42));
//! ```
//!
//! ## Approximation
//!
//! [`Rational::trim`] finds the simplest fraction that approximates a value as well
//! as any fraction with a bounded denominator:
//!
//! ```rust
//! use rational::Rational;
//! use std::num::NonZeroU64;
//!
//! let pi = Rational::from_f64(std::f64::consts::PI);
//! assert_eq!(pi.trim(NonZeroU64::new(10).unwrap()), Rational::new(22, 7));
//! ```
//!
//! ## Features
//!
//! - `serde`: (de)serialize as a `{ numerator, denominator }` pair, renormalizing on input

pub(crate) mod arith;
pub(crate) mod compare;
pub(crate) mod convert;
pub(crate) mod error;
pub(crate) mod rational;
pub(crate) mod reduce;
#[cfg(feature = "serde")]
pub(crate) mod serde_support;
pub(crate) mod trim;

pub use arith::Power;
pub use error::{ConversionError, ConversionResult, OperationError, OperationResult};
pub use num_bigint::BigInt;
pub use rational::{Rational, SpecialValue};
pub use reduce::gcd;
