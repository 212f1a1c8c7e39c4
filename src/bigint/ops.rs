//! Operator and `num` trait implementations for [BigInt]

use super::{arith, BigInt, ParseBigIntError, Sign};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use core::str::FromStr;
use num_integer::Integer;
use num_traits::{FromPrimitive, Num, One, Signed, Zero};

impl<'a, 'b> Add<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Dispatch on the sign combination: equal signs add magnitudes, mixed
    /// signs subtract them and take the sign from whichever side survives.
    fn add(self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (Sign::NoSign, _) => other.clone(),
            (_, Sign::NoSign) => self.clone(),
            (a, b) if a == b => {
                BigInt::from_sign_mag(a, arith::add_mag(&self.limbs, &other.limbs))
            }
            (a, _) => {
                let (mag, flipped) = arith::sub_mag(&self.limbs, &other.limbs);
                BigInt::from_sign_mag(if flipped { a.flip() } else { a }, mag)
            }
        }
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn sub(self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (_, Sign::NoSign) => self.clone(),
            (Sign::NoSign, _) => -other,
            (a, b) if a == b => {
                let (mag, flipped) = arith::sub_mag(&self.limbs, &other.limbs);
                BigInt::from_sign_mag(if flipped { a.flip() } else { a }, mag)
            }
            (a, _) => BigInt::from_sign_mag(a, arith::add_mag(&self.limbs, &other.limbs)),
        }
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    fn mul(self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_sign_mag(
            self.sign.product(other.sign),
            arith::mul_mag(&self.limbs, &other.limbs),
        )
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Truncated quotient.
    ///
    /// # Panics
    /// If `other` is zero; use [BigInt::checked_div_rem] for the fallible form.
    fn div(self, other: &BigInt) -> BigInt {
        match self.checked_div_rem(other) {
            Ok((q, _)) => q,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    /// Remainder of truncated division, carrying the sign of `self`.
    ///
    /// # Panics
    /// If `other` is zero; use [BigInt::checked_div_rem] for the fallible form.
    fn rem(self, other: &BigInt) -> BigInt {
        match self.checked_div_rem(other) {
            Ok((_, r)) => r,
            Err(_) => panic!("division by zero"),
        }
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInt, add);
forward_all_binop_to_ref_ref!(impl Sub for BigInt, sub);
forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);
forward_all_binop_to_ref_ref!(impl Div for BigInt, div);
forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.sign = self.sign.flip();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt { sign: Sign::NoSign, limbs: vec![0] }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt { sign: Sign::Plus, limbs: vec![1] }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.sign == Sign::Plus && self.limbs == [1]
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Only radix 10 is supported: the representation is decimal by
    /// construction.
    ///
    /// # Panics
    /// If `radix != 10`.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        if radix != 10 {
            panic!("BigInt only supports radix 10");
        }
        BigInt::from_str(s)
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        match self.sign {
            Sign::Minus => -self,
            _ => self.clone(),
        }
    }

    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            BigInt::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigInt {
        match self.sign {
            Sign::Minus => -BigInt::one(),
            Sign::NoSign => BigInt::zero(),
            Sign::Plus => BigInt::one(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign == Sign::Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }
}

impl Integer for BigInt {
    fn div_floor(&self, other: &BigInt) -> BigInt {
        let (q, r) = Integer::div_rem(self, other);
        if !r.is_zero() && r.is_negative() != other.is_negative() {
            q - BigInt::one()
        } else {
            q
        }
    }

    fn mod_floor(&self, other: &BigInt) -> BigInt {
        let (_, r) = Integer::div_rem(self, other);
        if !r.is_zero() && r.is_negative() != other.is_negative() {
            r + other
        } else {
            r
        }
    }

    #[inline]
    fn gcd(&self, other: &BigInt) -> BigInt {
        BigInt::gcd(self, other)
    }

    #[inline]
    fn lcm(&self, other: &BigInt) -> BigInt {
        BigInt::lcm(self, other)
    }

    fn is_multiple_of(&self, other: &BigInt) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        match self.checked_div_rem(other) {
            Ok((_, r)) => r.is_zero(),
            Err(_) => false,
        }
    }

    #[inline]
    fn is_even(&self) -> bool {
        // parity of a decimal number is the parity of its lowest limb
        self.limbs[0] % 2 == 0
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// Truncated division with remainder.
    ///
    /// # Panics
    /// If `other` is zero; use [BigInt::checked_div_rem] for the fallible form.
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        match self.checked_div_rem(other) {
            Ok(qr) => qr,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_dispatch_test() {
        let a = BigInt::from(1_000_000_000_000i64);
        let b = BigInt::from(-999_999_999_999i64);
        assert_eq!(&a + &b, BigInt::one());
        assert_eq!(&b + &a, BigInt::one());
        assert_eq!(&a - &b, BigInt::from(1_999_999_999_999i64));
        assert_eq!(&b - &a, BigInt::from(-1_999_999_999_999i64));
        assert_eq!(&a + &BigInt::zero(), a);
        assert_eq!(-&a + &a, BigInt::zero());
        assert_eq!((&a * &b).to_string(), "-999999999999000000000000");
        assert_eq!(&b * &BigInt::zero(), BigInt::zero());
    }

    #[test]
    fn algebraic_laws_test() {
        let a = BigInt::from(123_456_789_123i64);
        let b = BigInt::from(-987_654_321i64);
        let c = BigInt::from(555i32);
        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!((&a + &b) + &c, &a + &(&b + &c));
        assert_eq!((&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn floor_division_test() {
        let a = BigInt::from(-7);
        let b = BigInt::from(2);
        assert_eq!(Integer::div_rem(&a, &b), (BigInt::from(-3), BigInt::from(-1)));
        assert_eq!(a.div_floor(&b), BigInt::from(-4));
        assert_eq!(a.mod_floor(&b), BigInt::one());
        assert_eq!(BigInt::from(7).div_floor(&BigInt::from(-2)), BigInt::from(-4));
    }

    #[test]
    fn parity_test() {
        assert!(BigInt::zero().is_even());
        assert!(BigInt::from(1_000_000_001i64).is_odd());
        assert!(BigInt::from(-2_000_000_002i64).is_even());
    }

    #[test]
    fn signed_trait_test() {
        let v = BigInt::from(-5);
        assert_eq!(v.abs(), BigInt::from(5));
        assert_eq!(v.signum(), BigInt::from(-1));
        assert!(v.is_negative() && !v.is_positive());
        assert_eq!(BigInt::from(3).abs_sub(&BigInt::from(5)), BigInt::zero());
        assert_eq!(BigInt::from(5).abs_sub(&BigInt::from(3)), BigInt::from(2));
    }

    #[test]
    fn from_str_radix_test() {
        assert_eq!(
            BigInt::from_str_radix("-42", 10).unwrap(),
            BigInt::from(-42)
        );
    }
}
