//! NaN-aware comparison
//!
//! [`Rational::compare`] is the single three-way comparator; `PartialEq` and
//! `PartialOrd` are both derived from it so the two can never disagree.

use crate::rational::Rational;
use num_bigint::BigInt;
use std::cmp::Ordering;

impl Rational {
    /// Three-way comparison.
    ///
    /// - both NaN: `Some(Equal)`
    /// - exactly one NaN: `None`
    /// - both infinite: ordered by sign
    /// - otherwise: the sign of `a.num * b.den - b.num * a.den`
    ///
    /// Cross-multiplication is order-preserving because canonical denominators
    /// are never negative.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => return Some(Ordering::Equal),
            (true, false) | (false, true) => return None,
            (false, false) => {}
        }

        // ±∞ against ±∞: cross-multiplying would give 0 × 0
        if self.is_infinite() && other.is_infinite() {
            return Some(self.numerator.cmp(&other.numerator));
        }

        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        Some(lhs.cmp(&rhs))
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

macro_rules! impl_cmp_with_int {
    ($($t:ty),*) => {$(
        impl_cmp_with_int!(@with $t, value => Rational::from(*value));
    )*};
    (@with $t:ty, $value:ident => $convert:expr) => {
        impl PartialEq<$t> for Rational {
            fn eq(&self, $value: &$t) -> bool {
                *self == $convert
            }
        }

        impl PartialEq<Rational> for $t {
            fn eq(&self, other: &Rational) -> bool {
                let $value = self;
                $convert == *other
            }
        }

        impl PartialOrd<$t> for Rational {
            fn partial_cmp(&self, $value: &$t) -> Option<Ordering> {
                self.compare(&$convert)
            }
        }

        impl PartialOrd<Rational> for $t {
            fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
                let $value = self;
                $convert.compare(other)
            }
        }
    };
}

impl_cmp_with_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_cmp_with_int!(@with BigInt, value => Rational::from(value));
