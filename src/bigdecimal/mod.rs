//! Scaled decimal values built on [BigInt]
//!
//! A value is `unscaled * 10^(9 * scale)`: the scale counts whole limbs, so
//! rescaling by a limb width is a shift and only sub-limb adjustments ever
//! multiply. Canonical form folds trailing zero limbs of the unscaled
//! integer into the scale, which makes the representation of every value
//! unique and lets equality compare fields directly.

mod ops;
mod rounding;

pub use rounding::RoundingMode;

use crate::bigint::{BigInt, ParseBigIntError, Sign, RADIX_DIGITS};
use crate::error::ArithmeticError;
use core::cmp::Ordering;
use core::str::FromStr;
use num_rational::Ratio;
use num_traits::{One, Signed, Zero};
use std::error::Error;
use std::fmt;

/// Digit count used when a [BigDecimal] is divided through the plain `/`
/// operator, which has no way to take an explicit precision.
pub const DEFAULT_PRECISION: u32 = 100;

/// An arbitrary precision signed decimal: `unscaled * 10^(9 * scale)`.
///
/// Immutable value type; all arithmetic returns fresh canonical instances.
#[derive(Clone, Debug, Hash)]
pub struct BigDecimal {
    unscaled: BigInt,
    scale: i64,
}

impl BigDecimal {
    /// Create a decimal from an unscaled integer and a limb-width scale,
    /// normalizing to canonical form.
    pub fn new(unscaled: BigInt, scale: i64) -> BigDecimal {
        if unscaled.is_zero() {
            return BigDecimal { unscaled: BigInt::zero(), scale: 0 };
        }
        let trailing = unscaled.limbs.iter().take_while(|&&limb| limb == 0).count();
        if trailing == 0 {
            BigDecimal { unscaled, scale }
        } else {
            let limbs = unscaled.limbs[trailing..].to_vec();
            BigDecimal {
                unscaled: BigInt::from_sign_mag(unscaled.sign, limbs),
                scale: scale + trailing as i64,
            }
        }
    }

    /// A value `int * 10^digit_scale` with the scale counted in single
    /// digits: the digit scale splits into whole limbs plus a 0..8 digit
    /// zero-pad folded into the unscaled integer.
    pub(crate) fn from_scaled_digits(int: BigInt, digit_scale: i64) -> BigDecimal {
        if int.is_zero() {
            return BigDecimal::zero();
        }
        let limbs = digit_scale.div_euclid(RADIX_DIGITS as i64);
        let pad = digit_scale.rem_euclid(RADIX_DIGITS as i64);
        BigDecimal::new(int.mul_pow_ten(pad), limbs)
    }

    /// The unscaled integer component `(self / 10^(9 * scale))`.
    #[inline]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// The scale in limb widths of 9 decimal digits.
    #[inline]
    pub fn scale(&self) -> i64 {
        self.scale
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.unscaled.sign()
    }

    /// `floor(log10(|self|))`, i.e. the power-of-ten exponent of the leading
    /// digit; zero for a zero value.
    pub(crate) fn decimal_exponent(&self) -> i64 {
        if self.is_zero() {
            return 0;
        }
        self.unscaled.digits() as i64 - 1 + RADIX_DIGITS as i64 * self.scale
    }

    /// Multiply by `10^n` without loss.
    pub fn mul_pow_ten(&self, n: i64) -> BigDecimal {
        if self.is_zero() {
            return BigDecimal::zero();
        }
        BigDecimal::from_scaled_digits(
            self.unscaled.clone(),
            RADIX_DIGITS as i64 * self.scale + n,
        )
    }

    /// Divide to `precision` correct fractional digits.
    ///
    /// The quotient is computed with one extra digit beyond the requested
    /// precision and the guard digit is rounded half-up away from zero.
    pub fn div_prec(
        &self,
        other: &BigDecimal,
        precision: u32,
    ) -> Result<BigDecimal, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::division_by_zero());
        }
        Ok(self.div_prec_unchecked(other, precision))
    }

    /// Division core for callers that already know the divisor is non-zero.
    pub(crate) fn div_prec_unchecked(&self, other: &BigDecimal, precision: u32) -> BigDecimal {
        debug_assert!(!other.is_zero());
        if self.is_zero() {
            return BigDecimal::zero();
        }
        let guarded = precision as i64 + 1;
        let shift = RADIX_DIGITS as i64 * (self.scale - other.scale) + guarded;
        let (num, den) = if shift >= 0 {
            (self.unscaled.mul_pow_ten(shift), other.unscaled.clone())
        } else {
            (self.unscaled.clone(), other.unscaled.mul_pow_ten(-shift))
        };
        let (q, _) = match num.checked_div_rem(&den) {
            Ok(qr) => qr,
            Err(_) => unreachable!(),
        };
        let sign = q.sign();
        let (mut kept, guard) = q.abs().split_pow_ten(1);
        if guard.limbs[0] >= 5 {
            kept = kept + BigInt::one();
        }
        let signed = if sign == Sign::Minus { -kept } else { kept };
        BigDecimal::from_scaled_digits(signed, -(precision as i64))
    }

    /// Integer part of `self / other`, truncated toward zero.
    pub(crate) fn div_trunc_int(&self, other: &BigDecimal) -> BigDecimal {
        debug_assert!(!other.is_zero());
        if self.is_zero() {
            return BigDecimal::zero();
        }
        let shift = RADIX_DIGITS as i64 * (self.scale - other.scale);
        let (num, den) = if shift >= 0 {
            (self.unscaled.mul_pow_ten(shift), other.unscaled.clone())
        } else {
            (self.unscaled.clone(), other.unscaled.mul_pow_ten(-shift))
        };
        let (q, _) = match num.checked_div_rem(&den) {
            Ok(qr) => qr,
            Err(_) => unreachable!(),
        };
        BigDecimal::new(q, 0)
    }

    /// Exact conversion into a reduced rational.
    pub fn to_ratio(&self) -> Ratio<BigInt> {
        if self.scale >= 0 {
            Ratio::from_integer(self.unscaled.mul_pow_ten(RADIX_DIGITS as i64 * self.scale))
        } else {
            Ratio::new(
                self.unscaled.clone(),
                BigInt::one().mul_pow_ten(RADIX_DIGITS as i64 * -self.scale),
            )
        }
    }

    /// Rounded conversion from a rational, to `precision` fractional digits.
    pub fn from_ratio(ratio: &Ratio<BigInt>, precision: u32) -> BigDecimal {
        let num = BigDecimal::from(ratio.numer().clone());
        let den = BigDecimal::from(ratio.denom().clone());
        // a Ratio keeps its denominator non-zero
        num.div_prec_unchecked(&den, precision)
    }

    /// Scientific-notation rendering: one leading digit and an explicit
    /// power-of-ten suffix, e.g. `1.5e3`.
    pub fn to_sci_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let digits = self.unscaled.to_abs_string();
        let digits = digits.trim_end_matches('0');
        let mut out = String::with_capacity(digits.len() + 8);
        if self.unscaled.is_negative() {
            out.push('-');
        }
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push_str(&self.decimal_exponent().to_string());
        out
    }
}

impl From<BigInt> for BigDecimal {
    #[inline]
    fn from(int: BigInt) -> BigDecimal {
        BigDecimal::new(int, 0)
    }
}

macro_rules! impl_from_prim_decimal {
    ($($t:ty)*) => {$(
        impl From<$t> for BigDecimal {
            #[inline]
            fn from(n: $t) -> BigDecimal {
                BigDecimal::from(BigInt::from(n))
            }
        }
    )*};
}

impl_from_prim_decimal!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

impl PartialEq for BigDecimal {
    /// Canonical form is unique per value, so field equality is value
    /// equality regardless of how the operands were produced.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale && self.unscaled == other.unscaled
    }
}

impl Eq for BigDecimal {}

impl PartialOrd for BigDecimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigDecimal {
    /// Scale-aligned comparison: the operand with the greater scale is
    /// shifted down to the lesser one and the unscaled integers compared.
    fn cmp(&self, other: &Self) -> Ordering {
        let sign_rank = |s: Sign| match s {
            Sign::Minus => 0,
            Sign::NoSign => 1,
            Sign::Plus => 2,
        };
        match sign_rank(self.sign()).cmp(&sign_rank(other.sign())) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let diff = self.scale - other.scale;
        if diff >= 0 {
            self.unscaled
                .mul_pow_ten(RADIX_DIGITS as i64 * diff)
                .cmp(&other.unscaled)
        } else {
            self.unscaled
                .cmp(&other.unscaled.mul_pow_ten(RADIX_DIGITS as i64 * -diff))
        }
    }
}

impl fmt::Display for BigDecimal {
    /// Canonical decimal rendering: no exponent, fraction tail trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.unscaled.is_negative() {
            write!(f, "-")?;
        }
        let digits = self.unscaled.to_abs_string();
        if self.scale >= 0 {
            write!(f, "{}", digits)?;
            for _ in 0..self.scale {
                write!(f, "000000000")?;
            }
            Ok(())
        } else {
            let frac_len = (-self.scale) as usize * RADIX_DIGITS as usize;
            if digits.len() <= frac_len {
                let mut frac = "0".repeat(frac_len - digits.len());
                frac.push_str(&digits);
                write!(f, "0.{}", frac.trim_end_matches('0'))
            } else {
                let (int_part, frac_part) = digits.split_at(digits.len() - frac_len);
                write!(f, "{}.{}", int_part, frac_part.trim_end_matches('0'))
            }
        }
    }
}

/// Failed conversion of a decimal literal into a [BigDecimal].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseBigDecimalError {
    kind: DecimalErrorKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum DecimalErrorKind {
    Empty,
    InvalidDigit,
}

impl ParseBigDecimalError {
    #[inline]
    fn empty() -> Self {
        ParseBigDecimalError { kind: DecimalErrorKind::Empty }
    }

    #[inline]
    fn invalid() -> Self {
        ParseBigDecimalError { kind: DecimalErrorKind::InvalidDigit }
    }

    #[inline]
    pub(crate) fn is_empty_kind(&self) -> bool {
        self.kind == DecimalErrorKind::Empty
    }
}

impl fmt::Display for ParseBigDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DecimalErrorKind::Empty => write!(f, "cannot parse decimal from empty string"),
            DecimalErrorKind::InvalidDigit => write!(f, "invalid digit found in string"),
        }
    }
}

impl Error for ParseBigDecimalError {}

impl From<ParseBigIntError> for ParseBigDecimalError {
    fn from(e: ParseBigIntError) -> Self {
        if e.is_empty_kind() {
            ParseBigDecimalError::empty()
        } else {
            ParseBigDecimalError::invalid()
        }
    }
}

impl FromStr for BigDecimal {
    type Err = ParseBigDecimalError;

    /// Parse an optionally signed literal with an optional decimal point and
    /// an optional `e`-prefixed exponent, e.g. `-123.456e10`. The exponent
    /// and the fractional digit count fold into a single digit-scale
    /// adjustment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseBigDecimalError::empty());
        }
        let (mantissa, exp) = match s.find(|c| c == 'e' || c == 'E') {
            Some(pos) => {
                let exp = i64::from_str(&s[pos + 1..])
                    .map_err(|_| ParseBigDecimalError::invalid())?;
                (&s[..pos], exp)
            }
            None => (s, 0),
        };
        let (negative, body) = match mantissa.as_bytes().first() {
            // a bare exponent marker has no mantissa at all
            None => return Err(ParseBigDecimalError::empty()),
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (int_part, frac_part) = match body.find('.') {
            Some(pos) => (&body[..pos], &body[pos + 1..]),
            None => (body, ""),
        };
        let digits: String = [int_part, frac_part].concat();
        if digits.is_empty() {
            return Err(ParseBigDecimalError::empty());
        }
        let int = BigInt::from_str(&digits)?;
        let int = if negative { -int } else { int };
        Ok(BigDecimal::from_scaled_digits(
            int,
            exp - frac_part.len() as i64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn parse_display_roundtrip_test() {
        for s in ["0", "1", "-1", "0.5", "-0.000000001", "123456789.987654321", "1000000000000"] {
            assert_eq!(dec(s).to_string(), s);
        }
        assert_eq!(dec("1.50").to_string(), "1.5");
        assert_eq!(dec("0.000").to_string(), "0");
        assert_eq!(dec("-123.456e10").to_string(), "-1234560000000");
        assert_eq!(dec("123.456e-5").to_string(), "0.00123456");
        assert_eq!(dec("1e9").to_string(), "1000000000");
        assert_eq!(dec("+2.5").to_string(), "2.5");

        assert!(matches!("".parse::<BigDecimal>(), Err(e) if e.is_empty_kind()));
        assert!(matches!("e10".parse::<BigDecimal>(), Err(e) if e.is_empty_kind()));
        assert!(matches!("1.2.3".parse::<BigDecimal>(), Err(_)));
        assert!(matches!("12a".parse::<BigDecimal>(), Err(_)));
        assert!(matches!("1e".parse::<BigDecimal>(), Err(_)));
    }

    #[test]
    fn canonical_form_test() {
        // trailing zero limbs of the unscaled value fold into the scale
        let v = BigDecimal::new(BigInt::from(2_000_000_000u64), -1);
        assert_eq!(v.unscaled(), &BigInt::from(2));
        assert_eq!(v.scale(), 0);
        assert_eq!(v.to_string(), "2");

        let z = BigDecimal::new(BigInt::zero(), 5);
        assert!(z.is_zero());
        assert_eq!(z.scale(), 0);
    }

    #[test]
    fn scale_invariant_equality_test() {
        assert_eq!(dec("1"), dec("1.000000000"));
        assert_eq!(dec("1"), dec("1.000000000000000000"));
        assert_eq!(dec("-0.5"), dec("-0.500000000"));
        assert_eq!(dec("0"), dec("0.000000000"));
        assert!(dec("1.000000001") != dec("1"));
    }

    #[test]
    fn ordering_test() {
        assert!(dec("-2") < dec("-1"));
        assert!(dec("-1") < dec("0"));
        assert!(dec("0") < dec("0.000000001"));
        assert!(dec("1.5") < dec("1.500000001"));
        assert!(dec("2") < dec("10"));
        assert!(dec("9.999999999") < dec("10"));
    }

    #[test]
    fn division_test() {
        let q = dec("1").div_prec(&dec("3"), 5).unwrap();
        assert_eq!(q.to_string(), "0.33333");
        let q = dec("2").div_prec(&dec("3"), 5).unwrap();
        assert_eq!(q.to_string(), "0.66667");
        let q = dec("1").div_prec(&dec("8"), 5).unwrap();
        assert_eq!(q.to_string(), "0.125");
        let q = dec("-1").div_prec(&dec("3"), 3).unwrap();
        assert_eq!(q.to_string(), "-0.333");
        let q = dec("355").div_prec(&dec("113"), 6).unwrap();
        assert_eq!(q.to_string(), "3.141593");
        assert!(dec("1").div_prec(&dec("0"), 5).is_err());
    }

    #[test]
    fn ratio_interop_test() {
        let half = dec("0.5").to_ratio();
        assert_eq!(half, Ratio::new(BigInt::one(), BigInt::from(2)));
        let third = Ratio::new(BigInt::one(), BigInt::from(3));
        assert_eq!(BigDecimal::from_ratio(&third, 5).to_string(), "0.33333");
        let whole = dec("12000000000").to_ratio();
        assert_eq!(whole, Ratio::from_integer(BigInt::from(12_000_000_000u64)));
    }

    #[test]
    fn sci_string_test() {
        assert_eq!(dec("1500").to_sci_string(), "1.5e3");
        assert_eq!(dec("-0.00025").to_sci_string(), "-2.5e-4");
        assert_eq!(dec("7").to_sci_string(), "7e0");
        assert_eq!(dec("0").to_sci_string(), "0");
    }

    #[test]
    fn decimal_exponent_test() {
        assert_eq!(dec("1").decimal_exponent(), 0);
        assert_eq!(dec("99.5").decimal_exponent(), 1);
        assert_eq!(dec("100").decimal_exponent(), 2);
        assert_eq!(dec("0.001").decimal_exponent(), -3);
        assert_eq!(dec("-450").decimal_exponent(), 2);
    }
}
