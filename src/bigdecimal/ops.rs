//! Operator and `num` trait implementations for [BigDecimal]

use super::{BigDecimal, ParseBigDecimalError, DEFAULT_PRECISION};
use crate::bigint::{BigInt, Sign, RADIX_DIGITS};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;
use num_traits::{FromPrimitive, Num, One, Signed, Zero};

/// Shift both unscaled integers to the lesser of the two scales.
fn align(a: &BigDecimal, b: &BigDecimal) -> (BigInt, BigInt, i64) {
    let scale = a.scale.min(b.scale);
    let ua = a.unscaled.mul_pow_ten(RADIX_DIGITS as i64 * (a.scale - scale));
    let ub = b.unscaled.mul_pow_ten(RADIX_DIGITS as i64 * (b.scale - scale));
    (ua, ub, scale)
}

impl<'a, 'b> Add<&'b BigDecimal> for &'a BigDecimal {
    type Output = BigDecimal;

    fn add(self, other: &BigDecimal) -> BigDecimal {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        let (ua, ub, scale) = align(self, other);
        BigDecimal::new(ua + ub, scale)
    }
}

impl<'a, 'b> Sub<&'b BigDecimal> for &'a BigDecimal {
    type Output = BigDecimal;

    fn sub(self, other: &BigDecimal) -> BigDecimal {
        if other.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return -other;
        }
        let (ua, ub, scale) = align(self, other);
        BigDecimal::new(ua - ub, scale)
    }
}

impl<'a, 'b> Mul<&'b BigDecimal> for &'a BigDecimal {
    type Output = BigDecimal;

    /// Exact product: unscaled values multiply and the scales add.
    fn mul(self, other: &BigDecimal) -> BigDecimal {
        if self.is_zero() || other.is_zero() {
            return BigDecimal::zero();
        }
        BigDecimal::new(&self.unscaled * &other.unscaled, self.scale + other.scale)
    }
}

impl<'a, 'b> Div<&'b BigDecimal> for &'a BigDecimal {
    type Output = BigDecimal;

    /// Division at [DEFAULT_PRECISION] fractional digits; use
    /// [BigDecimal::div_prec] to choose the precision.
    ///
    /// # Panics
    /// If `other` is zero.
    fn div(self, other: &BigDecimal) -> BigDecimal {
        match self.div_prec(other, DEFAULT_PRECISION) {
            Ok(q) => q,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl<'a, 'b> Rem<&'b BigDecimal> for &'a BigDecimal {
    type Output = BigDecimal;

    /// `self - other * trunc(self / other)`, exact.
    ///
    /// # Panics
    /// If `other` is zero.
    fn rem(self, other: &BigDecimal) -> BigDecimal {
        if other.is_zero() {
            panic!("division by zero");
        }
        self - &(other * &self.div_trunc_int(other))
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigDecimal, add);
forward_all_binop_to_ref_ref!(impl Sub for BigDecimal, sub);
forward_all_binop_to_ref_ref!(impl Mul for BigDecimal, mul);
forward_all_binop_to_ref_ref!(impl Div for BigDecimal, div);
forward_all_binop_to_ref_ref!(impl Rem for BigDecimal, rem);

impl Neg for BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        BigDecimal { unscaled: -self.unscaled, scale: self.scale }
    }
}

impl<'a> Neg for &'a BigDecimal {
    type Output = BigDecimal;

    #[inline]
    fn neg(self) -> BigDecimal {
        -self.clone()
    }
}

impl Zero for BigDecimal {
    #[inline]
    fn zero() -> BigDecimal {
        BigDecimal { unscaled: BigInt::zero(), scale: 0 }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }
}

impl One for BigDecimal {
    #[inline]
    fn one() -> BigDecimal {
        BigDecimal { unscaled: BigInt::one(), scale: 0 }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.scale == 0 && self.unscaled.is_one()
    }
}

impl Num for BigDecimal {
    type FromStrRadixErr = ParseBigDecimalError;

    /// Only radix 10 is supported: the representation is decimal by
    /// construction.
    ///
    /// # Panics
    /// If `radix != 10`.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigDecimal, ParseBigDecimalError> {
        if radix != 10 {
            panic!("BigDecimal only supports radix 10");
        }
        BigDecimal::from_str(s)
    }
}

impl Signed for BigDecimal {
    #[inline]
    fn abs(&self) -> BigDecimal {
        if self.unscaled.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    fn abs_sub(&self, other: &BigDecimal) -> BigDecimal {
        if self <= other {
            BigDecimal::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigDecimal {
        match self.sign() {
            Sign::Minus => -BigDecimal::one(),
            Sign::NoSign => BigDecimal::zero(),
            Sign::Plus => BigDecimal::one(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign() == Sign::Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }
}

impl FromPrimitive for BigDecimal {
    #[inline]
    fn from_i64(n: i64) -> Option<BigDecimal> {
        Some(BigDecimal::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigDecimal> {
        Some(BigDecimal::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigDecimal> {
        Some(BigDecimal::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigDecimal> {
        Some(BigDecimal::from(n))
    }

    /// Binary floating point carries representation noise this crate exists
    /// to avoid; go through a decimal string instead.
    #[inline]
    fn from_f64(_: f64) -> Option<BigDecimal> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn addition_alignment_test() {
        assert_eq!((dec("0.1") + dec("0.2")).to_string(), "0.3");
        assert_eq!((dec("1.5") + dec("-0.5")).to_string(), "1");
        assert_eq!((dec("123456789.5") + dec("0.5")).to_string(), "123456790");
        assert_eq!(dec("7") + BigDecimal::zero(), dec("7"));
        assert_eq!((dec("1e10") + dec("1e-10")).to_string(), "10000000000.0000000001");
    }

    #[test]
    fn subtraction_test() {
        assert_eq!((dec("1") - dec("0.999999999")).to_string(), "0.000000001");
        assert_eq!((dec("0.5") - dec("1.5")).to_string(), "-1");
        assert_eq!(BigDecimal::zero() - dec("2.5"), dec("-2.5"));
    }

    #[test]
    fn multiplication_test() {
        assert_eq!((dec("1.5") * dec("1.5")).to_string(), "2.25");
        assert_eq!((dec("-0.001") * dec("1000")).to_string(), "-1");
        assert_eq!(dec("12345") * BigDecimal::zero(), BigDecimal::zero());
        assert_eq!((dec("0.000000002") * dec("0.000000003")).to_string(), "0.000000000000000006");
    }

    #[test]
    fn algebraic_laws_test() {
        let a = dec("1.25");
        let b = dec("-3.5");
        let c = dec("0.000000007");
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        assert_eq!((&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn rem_test() {
        assert_eq!((dec("7.5") % dec("2")).to_string(), "1.5");
        assert_eq!((dec("-7.5") % dec("2")).to_string(), "-1.5");
        assert_eq!((dec("1") % dec("0.3")).to_string(), "0.1");
    }

    #[test]
    fn signum_test() {
        assert_eq!(dec("-2.5").abs(), dec("2.5"));
        assert_eq!(dec("-2.5").signum(), dec("-1"));
        assert_eq!(BigDecimal::zero().signum(), BigDecimal::zero());
        assert!(dec("0.000000001").is_positive());
    }
}
