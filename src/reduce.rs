//! Canonical-form construction
//!
//! Every [`Rational`](crate::Rational) passes through [`normalize`] exactly once,
//! right after its raw numerator and denominator are computed.

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// Greatest common divisor of `m` and `n`.
///
/// The result is never negative. `gcd(0, n)` is `|n|`, and `gcd(0, 0)` is `0`.
#[must_use]
pub fn gcd(m: &BigInt, n: &BigInt) -> BigInt {
    m.gcd(n)
}

/// Reduce a raw `(num, den)` pair to canonical form.
///
/// - `den == 0`: the numerator collapses to its sign, giving `-1/0`, `0/0` or `1/0`
/// - otherwise: the denominator's sign moves to the numerator and both are divided
///   by their gcd, so `0/n` becomes `0/1`
#[must_use]
pub fn normalize(num: BigInt, den: BigInt) -> (BigInt, BigInt) {
    if den.is_zero() {
        let sign = match num.sign() {
            Sign::Minus => -BigInt::one(),
            Sign::NoSign => BigInt::zero(),
            Sign::Plus => BigInt::one(),
        };
        return (sign, den);
    }

    let (num, den) = if den.is_negative() {
        (-num, -den)
    } else {
        (num, den)
    };

    let g = gcd(&num, &den);
    if g.is_one() {
        (num, den)
    } else {
        (num / &g, den / g)
    }
}

/// Whether `(num, den)` already satisfies the canonical-form invariant
#[must_use]
pub fn is_normalized(num: &BigInt, den: &BigInt) -> bool {
    if den.is_zero() {
        num.abs() <= BigInt::one()
    } else {
        !den.is_negative() && gcd(num, den).is_one()
    }
}
