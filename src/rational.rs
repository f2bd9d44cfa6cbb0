use crate::reduce::{is_normalized, normalize};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The three values encoded with a zero denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialValue {
    NegativeInfinity,
    NaN,
    PositiveInfinity,
}

impl fmt::Display for SpecialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpecialValue::NegativeInfinity => "-∞",
            SpecialValue::NaN => "NaN",
            SpecialValue::PositiveInfinity => "∞",
        };
        f.write_str(name)
    }
}

/// An unboundedly-precise rational number
///
/// Values are always held in canonical form:
/// - the denominator is never negative, and the sign lives on the numerator
/// - finite values are in lowest terms (`0` is `0/1`)
/// - a zero denominator encodes one of three special values:
///   `1/0` is +∞, `-1/0` is −∞ and `0/0` is NaN
///
/// Because every value has exactly one representation, equality on the stored
/// fields is equality of the numbers.
///
/// # NaN semantics
///
/// - `NaN == NaN` is **true**: all NaNs are equal to each other
/// - NaN is unordered: `<` and `>` against NaN are always false, and `<=` / `>=`
///   hold only when both sides are NaN
///
/// Arithmetic never fails. Division by zero, `∞ - ∞` and `0 × ∞` produce
/// infinities or NaN as values.
#[derive(Clone)]
pub struct Rational {
    pub(crate) numerator: BigInt,
    pub(crate) denominator: BigInt,
}

impl Rational {
    /// Build `num / den` from integers or other rationals.
    ///
    /// Rational arguments combine by cross-multiplication, so
    /// `Rational::new(a, b)` equals `a / b` even when `b` is zero:
    ///
    /// ```rust
    /// use rational::Rational;
    ///
    /// assert_eq!(Rational::new(2, 6).to_string(), "1/3");
    /// assert_eq!(Rational::new(Rational::new(1, 2), Rational::new(3, 4)), Rational::new(2, 3));
    /// assert!(Rational::new(1, 0).is_pos_infinity());
    /// assert!(Rational::new(0, 0).is_nan());
    /// ```
    #[must_use]
    pub fn new(num: impl Into<Rational>, den: impl Into<Rational>) -> Self {
        let num = num.into();
        let den = den.into();
        Self::from_parts(
            num.numerator * den.denominator,
            num.denominator * den.numerator,
        )
    }

    /// Build from a raw numerator and denominator, reducing to canonical form
    #[must_use]
    pub fn from_parts(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Self {
        let (numerator, denominator) = normalize(num.into(), den.into());
        Self {
            numerator,
            denominator,
        }
    }

    /// Wrap a pair that is already canonical
    pub(crate) fn from_reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(
            is_normalized(&numerator, &denominator),
            "{numerator}/{denominator} is not canonical"
        );
        Self {
            numerator,
            denominator,
        }
    }

    /// Create zero (`0/1`)
    #[must_use]
    pub fn zero() -> Self {
        Self::from_reduced(BigInt::zero(), BigInt::one())
    }

    /// Create one (`1/1`)
    #[must_use]
    pub fn one() -> Self {
        Self::from_reduced(BigInt::one(), BigInt::one())
    }

    /// Create positive infinity (`1/0`)
    #[must_use]
    pub fn infinity() -> Self {
        Self::from_reduced(BigInt::one(), BigInt::zero())
    }

    /// Create negative infinity (`-1/0`)
    #[must_use]
    pub fn neg_infinity() -> Self {
        Self::from_reduced(-BigInt::one(), BigInt::zero())
    }

    /// Create NaN (`0/0`)
    #[must_use]
    pub fn nan() -> Self {
        Self::from_reduced(BigInt::zero(), BigInt::zero())
    }

    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Short alias for [`numerator`](Self::numerator)
    #[must_use]
    pub fn num(&self) -> &BigInt {
        self.numerator()
    }

    /// Short alias for [`denominator`](Self::denominator)
    #[must_use]
    pub fn den(&self) -> &BigInt {
        self.denominator()
    }

    /// Consume and return `(numerator, denominator)`
    #[must_use]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Which special value this is, if any
    #[must_use]
    pub fn special(&self) -> Option<SpecialValue> {
        if !self.denominator.is_zero() {
            return None;
        }
        Some(if self.numerator.is_zero() {
            SpecialValue::NaN
        } else if self.numerator.is_positive() {
            SpecialValue::PositiveInfinity
        } else {
            SpecialValue::NegativeInfinity
        })
    }

    /// Check if this is NaN
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_zero()
    }

    /// Check if this is infinity (either + or -)
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.denominator.is_zero() && !self.numerator.is_zero()
    }

    /// Check if this is positive infinity
    #[must_use]
    pub fn is_pos_infinity(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_positive()
    }

    /// Check if this is negative infinity
    #[must_use]
    pub fn is_neg_infinity(&self) -> bool {
        self.denominator.is_zero() && self.numerator.is_negative()
    }

    /// Check if this is a finite number (not infinity or NaN)
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !self.denominator.is_zero()
    }

    /// Check if this is a finite whole number
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Truthiness: everything except exactly `0/1` counts as nonzero,
    /// including both infinities and NaN
    #[must_use]
    pub fn is_nonzero(&self) -> bool {
        !self.numerator.is_zero() || self.denominator.is_zero()
    }

    /// Componentwise-smaller test used when searching for simple fractions.
    ///
    /// True when both the numerator and the denominator are `<=` those of
    /// `other` and the two values differ. This is a partial order on the
    /// representation, not on the numbers.
    #[must_use]
    pub fn simpler_than(&self, other: &Self) -> bool {
        self.numerator <= other.numerator
            && self.denominator <= other.denominator
            && self != other
    }

    /// Absolute value. −∞ becomes +∞, NaN stays NaN.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_reduced(self.numerator.abs(), self.denominator.clone())
    }

    /// `-1`, `0` or `1` by sign; NaN for NaN
    #[must_use]
    pub fn signum(&self) -> Self {
        if self.is_nan() {
            return Self::nan();
        }
        Self::from_reduced(self.numerator.signum(), BigInt::one())
    }

    /// Largest integer not greater than `self`. Special values are returned unchanged.
    #[must_use]
    pub fn floor(&self) -> Self {
        if self.denominator.is_zero() {
            return self.clone();
        }
        Self::from_reduced(
            Integer::div_floor(&self.numerator, &self.denominator),
            BigInt::one(),
        )
    }

    /// Smallest integer not less than `self`. Special values are returned unchanged.
    #[must_use]
    pub fn ceil(&self) -> Self {
        if self.denominator.is_zero() {
            return self.clone();
        }
        Self::from_reduced(
            Integer::div_ceil(&self.numerator, &self.denominator),
            BigInt::one(),
        )
    }

    /// Integer part, rounding toward zero. Special values are returned unchanged.
    #[must_use]
    pub fn trunc(&self) -> Self {
        if self.denominator.is_zero() {
            return self.clone();
        }
        Self::from_reduced(&self.numerator / &self.denominator, BigInt::one())
    }

    /// The integer hashed by [`Hash`]: `num * den + den - 1`.
    ///
    /// For a whole number `n/1` this is `n` itself, so `Rational::from(n)` and
    /// `BigInt::from(n)` hash identically under any [`Hasher`].
    #[must_use]
    pub fn hash_key(&self) -> BigInt {
        &self.numerator * &self.denominator + &self.denominator - BigInt::one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_key().hash(state);
    }
}
