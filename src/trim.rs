//! Best rational approximation under a denominator bound
//!
//! [`Rational::trim`] finds how close a fraction with a bounded denominator can
//! get, then asks the Stern–Brocot search for the simplest fraction at least that
//! close. The search itself ([`Rational::simplest_between`]) is the classic
//! `rationalize` recursion: peel off the integer part, invert the fractional
//! remainders and recurse, which walks the continued fraction of both bounds at
//! once.

use crate::rational::Rational;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::num::NonZeroU64;

impl Rational {
    /// Simplest fraction approximating `self` as well as any fraction whose
    /// denominator is at most `max_den`.
    ///
    /// Values whose denominator already fits are returned unchanged, as are
    /// infinities and NaN.
    ///
    /// ```rust
    /// use rational::Rational;
    /// use std::num::NonZeroU64;
    ///
    /// let pi = Rational::from_f64(std::f64::consts::PI);
    /// let bound = NonZeroU64::new(113).unwrap();
    /// assert_eq!(pi.trim(bound), Rational::new(355, 113));
    /// ```
    #[must_use]
    pub fn trim(&self, max_den: NonZeroU64) -> Self {
        let bound = BigInt::from(max_den.get());
        if !self.is_finite() || self.denominator <= bound {
            return self.clone();
        }

        let whole = self.floor();
        let frac = self - &whole;
        let tolerance = (self - &best_approximation(self, &bound)).abs();
        let lo = &frac - &tolerance;
        let hi = &frac + &tolerance;
        log::trace!("trim {self} to denominators <= {max_den}: searching {whole} + [{lo}, {hi}]");

        whole + Self::find_ratio_between(&lo, &hi)
    }

    /// Simplest fraction in the closed interval spanned by `a` and `b`.
    ///
    /// The bounds may come in either order. An interval containing zero yields
    /// zero, and a wholly negative interval is searched on its mirror image.
    /// NaN in either bound gives NaN.
    #[must_use]
    pub fn find_ratio_between(a: &Self, b: &Self) -> Self {
        if a.is_nan() || b.is_nan() {
            return Self::nan();
        }
        let (lo, hi) = if b < a { (b, a) } else { (a, b) };
        if lo == hi {
            return hi.clone();
        }
        if hi.numerator < BigInt::zero() {
            -Self::simplest_between(&-hi, &-lo)
        } else if lo.numerator < BigInt::zero() {
            Self::zero()
        } else {
            Self::simplest_between(lo, hi)
        }
    }

    /// Simplest fraction in `[lo, hi]`, for `0 <= lo <= hi`.
    ///
    /// "Simplest" means smallest denominator, then smallest numerator. Use
    /// [`find_ratio_between`](Self::find_ratio_between) for arbitrary bounds.
    #[must_use]
    pub fn simplest_between(lo: &Self, hi: &Self) -> Self {
        debug_assert!(lo <= hi, "simplest_between({lo}, {hi}) needs lo <= hi");

        let floor = lo.floor();
        if floor >= *lo {
            return floor;
        }
        if floor == hi.floor() {
            let inner =
                Self::simplest_between(&(hi - &floor).invert(), &(lo - &floor).invert());
            return Self::from_parts(
                &inner.denominator + &floor.numerator * &inner.numerator,
                inner.numerator,
            );
        }
        floor + 1
    }
}

/// Closest fraction to a finite `value` with denominator at most `max_den`.
///
/// Walks the continued-fraction convergents until the next one would exceed the
/// bound, then compares the last convergent with the largest semiconvergent that
/// still fits. Requires `value.denominator > max_den >= 1`.
fn best_approximation(value: &Rational, max_den: &BigInt) -> Rational {
    let (mut p0, mut q0, mut p1, mut q1) =
        (BigInt::zero(), BigInt::one(), BigInt::one(), BigInt::zero());
    let (mut n, mut d) = (value.numerator.clone(), value.denominator.clone());

    while !d.is_zero() {
        let a = n.div_floor(&d);
        let q2 = &q0 + &a * &q1;
        if q2 > *max_den {
            break;
        }
        (p0, q0, p1, q1) = (p1.clone(), q1.clone(), &p0 + &a * &p1, q2);
        let r = &n - &a * &d;
        n = d;
        d = r;
    }

    let k = (max_den - &q0).div_floor(&q1);
    let semiconvergent = Rational::from_parts(&p0 + &k * &p1, &q0 + &k * &q1);
    let convergent = Rational::from_parts(p1, q1);

    if (&convergent - value).abs() <= (&semiconvergent - value).abs() {
        convergent
    } else {
        semiconvergent
    }
}
