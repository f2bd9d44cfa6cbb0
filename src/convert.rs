use crate::error::{ConversionError, ConversionResult};
use crate::rational::{Rational, SpecialValue};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Float, FromPrimitive, One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

impl Rational {
    /// Convert an [`f64`] to its exact binary value.
    ///
    /// Every finite float is a fraction with a power-of-two denominator, and that
    /// fraction is returned as is, never rounded to a "nicer" one:
    /// `0.5` becomes `1/2`, but `1.1` becomes `2476979795053773/2251799813685248`.
    /// `NaN` and the infinities map to the matching special values.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::nan();
        }
        if value.is_infinite() {
            return if value.is_sign_positive() {
                Self::infinity()
            } else {
                Self::neg_infinity()
            };
        }

        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mut num = BigInt::from(mantissa);
        if sign < 0 {
            num = -num;
        }
        let shift = usize::from(exponent.unsigned_abs());
        let result = if exponent >= 0 {
            Self::from_parts(num << shift, BigInt::one())
        } else {
            Self::from_parts(num, BigInt::one() << shift)
        };

        if !result.is_integer() {
            log::debug!("inexact construction from f64 {value} gave {result}");
        }
        result
    }

    #[must_use]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }

    /// Nearest [`f64`].
    ///
    /// Special values map to `f64::NAN` and `±f64::INFINITY`. Values too large or
    /// too small for `f64` become infinities or zero.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self.special() {
            Some(SpecialValue::NaN) => return f64::NAN,
            Some(SpecialValue::PositiveInfinity) => return f64::INFINITY,
            Some(SpecialValue::NegativeInfinity) => return f64::NEG_INFINITY,
            None => {}
        }
        if self.numerator.is_zero() {
            return 0.0;
        }

        // Both sides exact in f64: a single correctly rounded division
        if self.numerator.bits() <= 53 && self.denominator.bits() <= 53 {
            if let (Some(n), Some(d)) = (self.numerator.to_f64(), self.denominator.to_f64()) {
                return n / d;
            }
        }

        let magnitude = scaled_quotient(self.numerator.magnitude(), self.denominator.magnitude());
        if self.numerator.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Integer part, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::NotFinite`] for infinities and NaN, which have
    /// no integer value.
    pub fn to_integer(&self) -> ConversionResult<BigInt> {
        match self.special() {
            Some(special) => Err(ConversionError::NotFinite(special)),
            None => Ok(&self.numerator / &self.denominator),
        }
    }
}

/// `n / d` as an `f64`, for magnitudes too wide for a direct division.
///
/// The integer quotient is taken with at least 65 significant bits and a sticky
/// flag for any remainder. It is then rounded once, half to even, at the last
/// bit the result can hold: bit 53 for normal results, the `2^-1074` place for
/// subnormal ones. The rounded mantissa fits in 53 bits, so the final scaling
/// is exact.
#[allow(clippy::cast_possible_wrap)]
fn scaled_quotient(n: &BigUint, d: &BigUint) -> f64 {
    const MANTISSA_BITS: i64 = 53;
    const MIN_ULP_EXP: i64 = -1074;

    let shift = n.bits() as i64 - d.bits() as i64 - 65;
    let (n, d) = if shift >= 0 {
        (n.clone(), d << shift.unsigned_abs())
    } else {
        (n << shift.unsigned_abs(), d.clone())
    };
    let (quotient, remainder) = n.div_rem(&d);
    let sticky = !remainder.is_zero();

    // value = (quotient + sticky) * 2^shift; keep the bits at or above ulp_exp
    let quotient_bits = quotient.bits() as i64;
    let ulp_exp = (shift + quotient_bits - MANTISSA_BITS).max(MIN_ULP_EXP);
    let dropped_bits = ulp_exp - shift;
    if dropped_bits > quotient_bits + 1 {
        // below half of the smallest subnormal
        return 0.0;
    }
    let dropped_bits = dropped_bits.unsigned_abs();

    let mut mantissa = &quotient >> dropped_bits;
    let dropped = &quotient - (&mantissa << dropped_bits);
    let half = BigUint::one() << (dropped_bits - 1);
    let round_up = match dropped.cmp(&half) {
        Ordering::Greater => true,
        Ordering::Equal => sticky || mantissa.is_odd(),
        Ordering::Less => false,
    };
    if round_up {
        mantissa += 1u32;
    }

    let m = mantissa.to_f64().unwrap_or(f64::INFINITY);
    scale_by_power_of_two(m, ulp_exp)
}

/// `x * 2^exp`, stepping through large exponents so no intermediate power overflows
fn scale_by_power_of_two(mut x: f64, mut exp: i64) -> f64 {
    const STEP: i32 = 1000;
    while exp > i64::from(STEP) {
        x *= 2f64.powi(STEP);
        exp -= i64::from(STEP);
        if x.is_infinite() {
            return x;
        }
    }
    while exp < -i64::from(STEP) {
        x *= 2f64.powi(-STEP);
        exp += i64::from(STEP);
        if x == 0.0 {
            return x;
        }
    }
    #[allow(clippy::cast_possible_truncation)]
    let exp = exp as i32;
    x * 2f64.powi(exp)
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Rational {
            fn from(value: $t) -> Self {
                Self::from_reduced(BigInt::from(value), BigInt::one())
            }
        }

        impl TryFrom<&Rational> for $t {
            type Error = ConversionError;

            /// Truncate toward zero and narrow to the target width.
            fn try_from(value: &Rational) -> ConversionResult<Self> {
                let whole = value.to_integer()?;
                <$t>::try_from(&whole).map_err(|_| ConversionError::Overflow {
                    target: stringify!($t),
                })
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_reduced(value, BigInt::one())
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Self::from(value.clone())
    }
}

impl From<BigUint> for Rational {
    fn from(value: BigUint) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl TryFrom<&Rational> for BigInt {
    type Error = ConversionError;

    fn try_from(value: &Rational) -> ConversionResult<Self> {
        value.to_integer()
    }
}

impl TryFrom<Rational> for BigInt {
    type Error = ConversionError;

    fn try_from(value: Rational) -> ConversionResult<Self> {
        value.to_integer()
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        u64::try_from(self).ok()
    }

    fn to_i128(&self) -> Option<i128> {
        i128::try_from(self).ok()
    }

    fn to_u128(&self) -> Option<u128> {
        u128::try_from(self).ok()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(self))
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f32(n: f32) -> Option<Self> {
        Some(Rational::from_f32(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Some(Rational::from_f64(n))
    }
}

impl fmt::Display for Rational {
    /// `num` for whole numbers, `num/den` otherwise (so `+∞` prints as `1/0`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}, {})", self.numerator, self.denominator)
    }
}

macro_rules! impl_radix_fmt {
    ($($Trait:ident),*) => {$(
        impl fmt::$Trait for Rational {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::$Trait::fmt(&self.numerator, f)?;
                if !self.denominator.is_one() {
                    f.write_str("/")?;
                    fmt::$Trait::fmt(&self.denominator, f)?;
                }
                Ok(())
            }
        }
    )*};
}

impl_radix_fmt!(Octal, LowerHex, UpperHex, Binary);
