//! Arithmetic over the extended rationals
//!
//! Each operation is an inherent method that builds a raw numerator and
//! denominator and hands them to the reducer. The `std::ops` and `num_traits`
//! impls at the bottom only forward to those methods, so `a + b`, `a.add(&b)`
//! and `a += b` always agree.
//!
//! Native integers are accepted on either side of every binary operator and are
//! converted with `Rational::from` before the operation runs.

use crate::error::{OperationError, OperationResult};
use crate::rational::Rational;
use num_bigint::BigInt;
use num_traits::{Inv, One, Pow, Signed, Zero};
use std::iter::{Product, Sum};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, ShlAssign, Shr,
    ShrAssign, Sub, SubAssign,
};

/// Result of raising a rational to a rational power
///
/// Integral exponents stay exact. Any other exponent goes through `f64::powf`
/// and loses precision.
#[derive(Debug, Clone, PartialEq)]
pub enum Power {
    Exact(Rational),
    Approximate(f64),
}

impl Power {
    /// The exact result, if there is one
    #[must_use]
    pub fn exact(self) -> Option<Rational> {
        match self {
            Power::Exact(r) => Some(r),
            Power::Approximate(_) => None,
        }
    }

    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Power::Exact(r) => r.to_f64(),
            Power::Approximate(f) => *f,
        }
    }
}

impl Rational {
    /// `a + b`. Two infinities add their signs, so `∞ + ∞ = ∞` and `∞ + -∞ = NaN`.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        if self.is_infinite() && other.is_infinite() {
            return Self::from_parts(&self.numerator + &other.numerator, BigInt::zero());
        }
        Self::from_parts(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_reduced(-&self.numerator, self.denominator.clone())
    }

    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Swap numerator and denominator.
    ///
    /// `0` inverts to `+∞`, either infinity inverts to `0` and NaN stays NaN.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self::from_parts(self.denominator.clone(), self.numerator.clone())
    }

    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_parts(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// `a * invert(b)`, so dividing by zero gives an infinity (or NaN for `0 / 0`)
    #[must_use]
    pub fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.invert())
    }

    /// Integer quotient, truncated toward zero: `(-7/2).trunc_div(1)` is `-3`.
    ///
    /// A non-finite quotient is returned as is.
    #[must_use]
    pub fn trunc_div(&self, other: &Self) -> Self {
        self.divide(other).trunc()
    }

    /// Remainder matching [`trunc_div`](Self::trunc_div):
    /// `a - a.trunc_div(b) * b`, so the result takes the sign of `a`.
    ///
    /// A zero divisor gives `+∞`.
    #[must_use]
    pub fn modulo(&self, other: &Self) -> Self {
        if other.is_zero() {
            return Self::infinity();
        }
        self.subtract(&self.trunc_div(other).multiply(other))
    }

    /// `(trunc_div, modulo)` in one call
    #[must_use]
    pub fn divmod(&self, other: &Self) -> (Self, Self) {
        (self.trunc_div(other), self.modulo(other))
    }

    /// Raise to an integer power. Negative exponents invert the result.
    #[must_use]
    pub fn pow(&self, exp: i32) -> Self {
        self.pow_integer(&BigInt::from(exp))
    }

    /// Raise to an arbitrarily large integer power.
    ///
    /// The result is exact. It is cheap for the bases `0`, `±1`, `±∞` and NaN
    /// whatever the exponent, since their parts never grow.
    #[must_use]
    pub fn pow_integer(&self, exp: &BigInt) -> Self {
        let magnitude = exp.magnitude();
        let raised = Self::from_parts(
            Pow::pow(&self.numerator, magnitude),
            Pow::pow(&self.denominator, magnitude),
        );
        if exp.is_negative() {
            raised.invert()
        } else {
            raised
        }
    }

    /// Raise to a rational power.
    ///
    /// Whole exponents of any size use [`pow_integer`](Self::pow_integer) and
    /// stay exact. Anything else is computed in `f64`.
    #[must_use]
    pub fn pow_rational(&self, exp: &Self) -> Power {
        if exp.is_integer() {
            return Power::Exact(self.pow_integer(&exp.numerator));
        }
        log::debug!("exponent {exp} is not an integer, falling back to f64 powf");
        Power::Approximate(self.to_f64().powf(exp.to_f64()))
    }

    /// `pow(exp) % modulus` for a whole exponent.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Unsupported`] if `exp` is not an integer; there
    /// is no exact modular power for it.
    pub fn pow_mod(&self, exp: &Self, modulus: &Self) -> OperationResult<Self> {
        if !exp.is_integer() {
            return Err(OperationError::Unsupported(
                "modular power with a non-integral exponent",
            ));
        }
        Ok(self.pow_integer(&exp.numerator).modulo(modulus))
    }

    /// Multiply by `2^k`
    #[must_use]
    pub fn shift_left(&self, k: usize) -> Self {
        Self::from_parts(&self.numerator << k, self.denominator.clone())
    }

    /// Divide by `2^k`
    #[must_use]
    pub fn shift_right(&self, k: usize) -> Self {
        Self::from_parts(self.numerator.clone(), &self.denominator << k)
    }
}

macro_rules! impl_binop {
    (@int $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $inherent:ident; $($t:ty),*) => {$(
        impl $Op<$t> for Rational {
            type Output = Rational;
            fn $op(self, rhs: $t) -> Rational {
                Rational::$inherent(&self, &Rational::from(rhs))
            }
        }

        impl $Op<$t> for &Rational {
            type Output = Rational;
            fn $op(self, rhs: $t) -> Rational {
                Rational::$inherent(self, &Rational::from(rhs))
            }
        }

        impl $Op<Rational> for $t {
            type Output = Rational;
            fn $op(self, rhs: Rational) -> Rational {
                Rational::$inherent(&Rational::from(self), &rhs)
            }
        }

        impl $Op<&Rational> for $t {
            type Output = Rational;
            fn $op(self, rhs: &Rational) -> Rational {
                Rational::$inherent(&Rational::from(self), rhs)
            }
        }

        impl $OpAssign<$t> for Rational {
            fn $op_assign(&mut self, rhs: $t) {
                *self = Rational::$inherent(self, &Rational::from(rhs));
            }
        }
    )*};

    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $inherent:ident) => {
        impl $Op<Rational> for Rational {
            type Output = Rational;
            fn $op(self, rhs: Rational) -> Rational {
                Rational::$inherent(&self, &rhs)
            }
        }

        impl $Op<&Rational> for Rational {
            type Output = Rational;
            fn $op(self, rhs: &Rational) -> Rational {
                Rational::$inherent(&self, rhs)
            }
        }

        impl $Op<Rational> for &Rational {
            type Output = Rational;
            fn $op(self, rhs: Rational) -> Rational {
                Rational::$inherent(self, &rhs)
            }
        }

        impl $Op<&Rational> for &Rational {
            type Output = Rational;
            fn $op(self, rhs: &Rational) -> Rational {
                Rational::$inherent(self, rhs)
            }
        }

        impl $OpAssign<Rational> for Rational {
            fn $op_assign(&mut self, rhs: Rational) {
                *self = Rational::$inherent(self, &rhs);
            }
        }

        impl $OpAssign<&Rational> for Rational {
            fn $op_assign(&mut self, rhs: &Rational) {
                *self = Rational::$inherent(self, rhs);
            }
        }

        impl_binop!(@int $Op, $op, $OpAssign, $op_assign, $inherent;
            i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt);
    };
}

impl_binop!(Add, add, AddAssign, add_assign, add);
impl_binop!(Sub, sub, SubAssign, sub_assign, subtract);
impl_binop!(Mul, mul, MulAssign, mul_assign, multiply);
impl_binop!(Div, div, DivAssign, div_assign, divide);
impl_binop!(Rem, rem, RemAssign, rem_assign, modulo);

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        self.negate()
    }
}

impl Inv for Rational {
    type Output = Rational;
    fn inv(self) -> Rational {
        self.invert()
    }
}

impl Inv for &Rational {
    type Output = Rational;
    fn inv(self) -> Rational {
        self.invert()
    }
}

impl Shl<usize> for Rational {
    type Output = Rational;
    fn shl(self, k: usize) -> Rational {
        self.shift_left(k)
    }
}

impl Shl<usize> for &Rational {
    type Output = Rational;
    fn shl(self, k: usize) -> Rational {
        self.shift_left(k)
    }
}

impl Shr<usize> for Rational {
    type Output = Rational;
    fn shr(self, k: usize) -> Rational {
        self.shift_right(k)
    }
}

impl Shr<usize> for &Rational {
    type Output = Rational;
    fn shr(self, k: usize) -> Rational {
        self.shift_right(k)
    }
}

impl ShlAssign<usize> for Rational {
    fn shl_assign(&mut self, k: usize) {
        *self = self.shift_left(k);
    }
}

impl ShrAssign<usize> for Rational {
    fn shr_assign(&mut self, k: usize) {
        *self = self.shift_right(k);
    }
}

impl Pow<i32> for Rational {
    type Output = Rational;
    fn pow(self, exp: i32) -> Rational {
        Rational::pow(&self, exp)
    }
}

impl Pow<i32> for &Rational {
    type Output = Rational;
    fn pow(self, exp: i32) -> Rational {
        Rational::pow(self, exp)
    }
}

impl Pow<&Rational> for &Rational {
    type Output = Power;
    fn pow(self, exp: &Rational) -> Power {
        self.pow_rational(exp)
    }
}

impl Pow<Rational> for Rational {
    type Output = Power;
    fn pow(self, exp: Rational) -> Power {
        self.pow_rational(&exp)
    }
}

// Reflected power: an integer base with a rational exponent.
macro_rules! impl_reflected_pow {
    ($($t:ty),*) => {$(
        impl Pow<&Rational> for $t {
            type Output = Power;
            fn pow(self, exp: &Rational) -> Power {
                Rational::from(self).pow_rational(exp)
            }
        }

        impl Pow<Rational> for $t {
            type Output = Power;
            fn pow(self, exp: Rational) -> Power {
                Rational::from(self).pow_rational(&exp)
            }
        }
    )*};
}

impl_reflected_pow!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, BigInt, &BigInt);

impl Zero for Rational {
    fn zero() -> Self {
        Rational::zero()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero() && self.denominator.is_one()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::one()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc.add(&x))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc.add(x))
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc.multiply(&x))
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, x| acc.multiply(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(num: i64, den: i64) -> Rational {
        Rational::new(num, den)
    }

    #[test]
    fn test_add_sub() {
        assert_eq!(r(1, 2) + r(1, 3), r(5, 6));
        assert_eq!(r(1, 2) - r(1, 3), r(1, 6));
        assert_eq!(&r(1, 4) + &r(3, 4), Rational::one());
        assert_eq!(r(1, 2) + 1, r(3, 2));
        assert_eq!(3 - r(1, 2), r(5, 2));
        assert_eq!(BigInt::from(2) + r(1, 2), r(5, 2));
    }

    #[test]
    fn test_mul_div() {
        assert_eq!(r(2, 3) * r(3, 4), r(1, 2));
        assert_eq!(r(2, 3) / r(4, 3), r(1, 2));
        assert_eq!(r(2, 3) / 10, r(1, 15));
        assert_eq!(1 / r(2, 3), r(3, 2));
        assert_eq!(r(-2, 3) * -3i64, Rational::from(2));
    }

    #[test]
    fn test_assign_forms() {
        let mut x = r(2, 3);
        x /= 10;
        assert_eq!(x.to_string(), "1/15");
        x *= r(15, 1);
        assert_eq!(x, Rational::one());
        x += &r(1, 2);
        assert_eq!(x, r(3, 2));
        x -= 1u32;
        assert_eq!(x, r(1, 2));
        x %= r(1, 3);
        assert_eq!(x, r(1, 6));
        x <<= 3;
        assert_eq!(x, r(4, 3));
        x >>= 4;
        assert_eq!(x, r(1, 12));
    }

    #[test]
    fn test_invert() {
        assert_eq!(r(2, 3).invert(), r(3, 2));
        assert_eq!(r(-2, 3).invert(), r(-3, 2));
        assert!(Rational::zero().invert().is_pos_infinity());
        assert_eq!(Rational::infinity().invert(), Rational::zero());
        assert_eq!(Rational::neg_infinity().invert(), Rational::zero());
        assert!(Rational::nan().invert().is_nan());
        assert_eq!(r(5, 7).inv(), r(7, 5));
    }

    #[test]
    fn test_infinity_arithmetic() {
        let inf = Rational::infinity();
        let ninf = Rational::neg_infinity();

        assert!((&inf + &inf).is_pos_infinity());
        assert!((&ninf + &ninf).is_neg_infinity());
        assert!((&inf + &ninf).is_nan());
        assert!((&inf - &inf).is_nan());
        assert!((&inf + r(3, 2)).is_pos_infinity());
        assert!((r(3, 2) - &inf).is_neg_infinity());
        assert!((&inf * Rational::zero()).is_nan());
        assert!((&inf * r(-2, 1)).is_neg_infinity());
        assert!((&ninf * &ninf).is_pos_infinity());
        assert!((r(1, 2) / Rational::zero()).is_pos_infinity());
        assert!((r(-1, 2) / Rational::zero()).is_neg_infinity());
        assert!((Rational::zero() / Rational::zero()).is_nan());
        assert_eq!(r(7, 3) / &inf, Rational::zero());
    }

    #[test]
    fn test_nan_propagates() {
        let nan = Rational::nan();
        assert!((&nan + Rational::infinity()).is_nan());
        assert!((&nan + r(1, 2)).is_nan());
        assert!((&nan * r(1, 2)).is_nan());
        assert!((r(1, 2) / &nan).is_nan());
        assert!((-&nan).is_nan());
    }

    #[test]
    fn test_trunc_div_truncates_toward_zero() {
        assert_eq!(r(7, 2).trunc_div(&Rational::one()), Rational::from(3));
        assert_eq!(r(-7, 2).trunc_div(&Rational::one()), Rational::from(-3));
        assert_eq!(r(7, 1).trunc_div(&r(-2, 1)), Rational::from(-3));
        assert!(r(1, 2).trunc_div(&Rational::zero()).is_pos_infinity());
        assert!(Rational::nan().trunc_div(&r(1, 2)).is_nan());
    }

    #[test]
    fn test_modulo_follows_truncation() {
        assert_eq!(r(7, 2) % 1, r(1, 2));
        assert_eq!(r(-7, 2) % 1, r(-1, 2));
        assert_eq!(r(7, 1) % r(-2, 1), Rational::one());
        assert_eq!(r(-7, 1) % r(2, 1), Rational::from(-1));
        assert_eq!(r(5, 6) % r(1, 3), r(1, 6));
        assert!((r(5, 6) % 0_i32).is_pos_infinity());
        assert!((r(-5, 6) % Rational::zero()).is_pos_infinity());
        assert_eq!(7 % r(2, 1), Rational::one());
    }

    #[test]
    fn test_divmod() {
        let (q, m) = r(17, 3).divmod(&r(2, 1));
        assert_eq!(q, Rational::from(2));
        assert_eq!(m, r(5, 3));
        assert_eq!(q * 2 + m, r(17, 3));
    }

    #[test]
    fn test_pow_integer() {
        assert_eq!(r(2, 3).pow(3), r(8, 27));
        assert_eq!(r(2, 3).pow(-2), r(9, 4));
        assert_eq!(r(-2, 3).pow(-3), r(-27, 8));
        assert_eq!(r(5, 7).pow(0), Rational::one());
        assert!(Rational::zero().pow(-1).is_pos_infinity());
        assert!(Rational::infinity().pow(2).is_pos_infinity());
        assert!(Rational::neg_infinity().pow(3).is_neg_infinity());
        assert!(Rational::neg_infinity().pow(2).is_pos_infinity());
        assert_eq!(Pow::pow(&r(1, 2), 10), r(1, 1024));
    }

    #[test]
    fn test_pow_rational() {
        assert_eq!(
            r(3, 2).pow_rational(&Rational::from(2)),
            Power::Exact(r(9, 4))
        );
        let approx = Rational::from(2).pow_rational(&r(1, 2));
        assert!(approx.clone().exact().is_none());
        assert!((approx.to_f64() - std::f64::consts::SQRT_2).abs() < 1e-12);

        // reflected: integer base
        assert_eq!(Pow::pow(2i64, &Rational::from(10)), Power::Exact(Rational::from(1024)));
        let reflected = Pow::pow(&BigInt::from(4), &r(1, 2));
        assert!((reflected.to_f64() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_pow_huge_integral_exponents() {
        let huge = Rational::from(BigInt::one() << 40u32);
        let huge_odd = &huge + 1;

        assert_eq!(Rational::from(-1).pow_rational(&huge), Power::Exact(Rational::one()));
        assert_eq!(Rational::from(-1).pow_rational(&huge_odd), Power::Exact(Rational::from(-1)));
        assert_eq!(Rational::one().pow_rational(&-&huge), Power::Exact(Rational::one()));
        assert_eq!(Rational::zero().pow_rational(&huge), Power::Exact(Rational::zero()));
        assert_eq!(
            Rational::zero().pow_rational(&-&huge),
            Power::Exact(Rational::infinity())
        );
        assert_eq!(
            Rational::neg_infinity().pow_rational(&huge_odd),
            Power::Exact(Rational::neg_infinity())
        );
        assert_eq!(Rational::nan().pow_integer(&BigInt::from(7)), Rational::nan());

        let wide = BigInt::from(100);
        assert_eq!(
            r(1, 2).pow_integer(&wide),
            Rational::from_parts(BigInt::one(), BigInt::one() << 100u32)
        );
        assert_eq!(r(1, 2).pow_integer(&-wide), Rational::from(BigInt::one() << 100u32));
        assert_eq!(
            Rational::from(-1).pow_mod(&huge_odd, &Rational::from(3)),
            Ok(Rational::from(-1))
        );
    }

    #[test]
    fn test_reflected_pow_integer_bases() {
        let ten = Rational::from(10);
        assert_eq!(Pow::pow(2, &ten), Power::Exact(Rational::from(1024)));
        assert_eq!(Pow::pow(2u8, &ten), Power::Exact(Rational::from(1024)));
        assert_eq!(Pow::pow(-2i16, ten.clone()), Power::Exact(Rational::from(1024)));
        assert_eq!(Pow::pow(3usize, &-Rational::one()), Power::Exact(r(1, 3)));
        assert_eq!(Pow::pow(10u128, &Rational::from(2)), Power::Exact(Rational::from(100)));
        assert_eq!(Pow::pow(BigInt::from(5), &Rational::from(3)), Power::Exact(Rational::from(125)));
        assert!((Pow::pow(9i32, &r(1, 2)).to_f64() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_pow_mod() {
        let result = Rational::from(3).pow_mod(&Rational::from(4), &Rational::from(5));
        assert_eq!(result, Ok(Rational::one()));
        assert_eq!(
            r(1, 2).pow_mod(&r(1, 2), &Rational::from(5)),
            Err(OperationError::Unsupported(
                "modular power with a non-integral exponent"
            ))
        );
    }

    #[test]
    fn test_shifts() {
        assert_eq!(r(3, 4) << 2, Rational::from(3));
        assert_eq!(r(3, 4) >> 1, r(3, 8));
        assert_eq!(&Rational::from(5) << 0, Rational::from(5));
        assert!((Rational::infinity() >> 3).is_pos_infinity());
    }

    #[test]
    fn test_identities() {
        let x = r(-22, 7);
        assert_eq!(&x + &(-&x), Rational::zero());
        assert_eq!(&x * &x.invert(), Rational::one());
        assert_eq!(x.invert().invert(), x);
    }

    #[test]
    fn test_sum_product() {
        let parts = vec![r(1, 2), r(1, 3), r(1, 6)];
        assert_eq!(parts.iter().sum::<Rational>(), Rational::one());
        assert_eq!(parts.iter().product::<Rational>(), r(1, 36));
        assert_eq!(parts.into_iter().sum::<Rational>(), Rational::one());
        assert_eq!(Vec::<Rational>::new().into_iter().product::<Rational>(), Rational::one());
    }

    #[test]
    fn test_num_traits_zero_one() {
        assert!(Zero::is_zero(&Rational::zero()));
        assert!(!Zero::is_zero(&Rational::nan()));
        assert!(One::is_one(&<Rational as One>::one()));
    }
}
