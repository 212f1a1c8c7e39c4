//! Trigonometric and inverse trigonometric functions

use super::{pi, working_precision};
use crate::bigdecimal::BigDecimal;
use crate::error::ArithmeticError;
use num_traits::{One, Signed, Zero};

impl BigDecimal {
    /// Sine to `precision` fractional digits. Arguments of decimal exponent
    /// 2 or more are first reduced modulo 2π.
    pub fn sin(&self, precision: u32) -> BigDecimal {
        let wp = working_precision(precision);
        let x = self.reduce_periodic(wp);
        sin_series(&x, wp).round(precision as i64)
    }

    /// Cosine to `precision` fractional digits, with the same argument
    /// reduction as [BigDecimal::sin].
    pub fn cos(&self, precision: u32) -> BigDecimal {
        let wp = working_precision(precision);
        let x = self.reduce_periodic(wp);
        cos_series(&x, wp).round(precision as i64)
    }

    /// `sin/cos`, failing when the cosine evaluates to exactly zero at one
    /// digit beyond the requested precision.
    pub fn tan(&self, precision: u32) -> Result<BigDecimal, ArithmeticError> {
        let wp = working_precision(precision);
        let x = self.reduce_periodic(wp);
        let s = sin_series(&x, wp);
        let c = cos_series(&x, wp);
        if c.round(precision as i64 + 1).is_zero() {
            return Err(ArithmeticError::division_by_zero());
        }
        s.div_prec(&c, precision)
    }

    /// `cos/sin`, failing when the sine evaluates to exactly zero at one
    /// digit beyond the requested precision.
    pub fn cot(&self, precision: u32) -> Result<BigDecimal, ArithmeticError> {
        let wp = working_precision(precision);
        let x = self.reduce_periodic(wp);
        let s = sin_series(&x, wp);
        let c = cos_series(&x, wp);
        if s.round(precision as i64 + 1).is_zero() {
            return Err(ArithmeticError::division_by_zero());
        }
        c.div_prec(&s, precision)
    }

    /// Fold an argument two or more decimal orders above unity back into one
    /// turn, using π computed with enough extra digits to cover the
    /// argument's magnitude.
    fn reduce_periodic(&self, wp: u32) -> BigDecimal {
        let exponent = self.decimal_exponent();
        if self.is_zero() || exponent < 2 {
            return self.clone();
        }
        let two_pi = pi(wp + exponent as u32 + 2) * BigDecimal::from(2u32);
        let turns = self.div_prec_unchecked(&two_pi, 2).round(0);
        self - &(&turns * &two_pi)
    }

    /// Arc tangent; never fails.
    pub fn atan(&self, precision: u32) -> BigDecimal {
        let wp = working_precision(precision);
        atan_working(self, wp).round(precision as i64)
    }

    /// Arc cotangent as `π/2 - atan`.
    pub fn acot(&self, precision: u32) -> BigDecimal {
        let wp = working_precision(precision);
        (half_pi(wp) - atan_working(self, wp)).round(precision as i64)
    }

    /// Arc sine; arguments outside `[-1, 1]` are undefined.
    pub fn asin(&self, precision: u32) -> Result<BigDecimal, ArithmeticError> {
        let wp = working_precision(precision);
        Ok(asin_working(self, wp)?.round(precision as i64))
    }

    /// Arc cosine as `π/2 - asin`; arguments outside `[-1, 1]` are
    /// undefined.
    pub fn acos(&self, precision: u32) -> Result<BigDecimal, ArithmeticError> {
        let wp = working_precision(precision);
        Ok((half_pi(wp) - asin_working(self, wp)?).round(precision as i64))
    }
}

fn half_pi(wp: u32) -> BigDecimal {
    pi(wp).div_prec_unchecked(&BigDecimal::from(2u32), wp)
}

/// Alternating Taylor series `x - x³/3! + x⁵/5! - …`, iterated until a term
/// flushes to zero at the working precision.
fn sin_series(x: &BigDecimal, wp: u32) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::zero();
    }
    let x = x.round(wp as i64);
    let x2 = (&x * &x).round(wp as i64);
    let mut term = x.clone();
    let mut sum = x;
    let mut n = 1u64;
    loop {
        let scaled = (&term * &x2).round(wp as i64);
        term = -scaled.div_prec_unchecked(&BigDecimal::from((2 * n) * (2 * n + 1)), wp);
        if term.is_zero() {
            break;
        }
        sum = &sum + &term;
        n += 1;
    }
    sum
}

/// Alternating Taylor series `1 - x²/2! + x⁴/4! - …`.
fn cos_series(x: &BigDecimal, wp: u32) -> BigDecimal {
    let one = BigDecimal::one();
    if x.is_zero() {
        return one;
    }
    let x = x.round(wp as i64);
    let x2 = (&x * &x).round(wp as i64);
    let mut term = one.clone();
    let mut sum = one;
    let mut n = 1u64;
    loop {
        let scaled = (&term * &x2).round(wp as i64);
        term = -scaled.div_prec_unchecked(&BigDecimal::from((2 * n - 1) * (2 * n)), wp);
        if term.is_zero() {
            break;
        }
        sum = &sum + &term;
        n += 1;
    }
    sum
}

/// Branching arc tangent at working precision: the series handles `|x| < 1`,
/// unit arguments are `±π/4`, and larger ones go through
/// `atan(x) = sign(x)·π/2 - atan(1/x)`.
fn atan_working(x: &BigDecimal, wp: u32) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::zero();
    }
    let one = BigDecimal::one();
    let ax = x.abs();
    if ax == one {
        let quarter_pi = pi(wp).div_prec_unchecked(&BigDecimal::from(4u32), wp);
        return if x.is_negative() { -quarter_pi } else { quarter_pi };
    }
    if ax > one {
        let inv = one.div_prec_unchecked(x, wp);
        // the reciprocal of a value barely past one can round back to a
        // unit, which the series must never see
        if inv.abs() >= one {
            let quarter_pi = pi(wp).div_prec_unchecked(&BigDecimal::from(4u32), wp);
            return if x.is_negative() { -quarter_pi } else { quarter_pi };
        }
        let signed_half = if x.is_negative() { -half_pi(wp) } else { half_pi(wp) };
        return signed_half - atan_working(&inv, wp);
    }
    atan_series(x, wp)
}

/// Taylor series `x - x³/3 + x⁵/5 - …` for `|x| < 1`. When a freshly
/// computed term exactly matches the magnitude of the previous one the
/// precision has saturated; a half-term correction is added and the loop
/// stops instead of running forever.
fn atan_series(x: &BigDecimal, wp: u32) -> BigDecimal {
    let x = x.round(wp as i64);
    let x2 = (&x * &x).round(wp as i64);
    let mut power = x.clone();
    let mut sum = x;
    let mut previous: Option<BigDecimal> = None;
    let mut n = 1u64;
    loop {
        power = -((&power * &x2).round(wp as i64));
        let term = power.div_prec_unchecked(&BigDecimal::from(2 * n + 1), wp);
        if term.is_zero() {
            break;
        }
        let magnitude = term.abs();
        if previous.as_ref() == Some(&magnitude) {
            sum = &sum + &term.div_prec_unchecked(&BigDecimal::from(2u32), wp);
            break;
        }
        sum = &sum + &term;
        previous = Some(magnitude);
        n += 1;
    }
    sum
}

/// Arc sine at working precision via `atan(x / √(1 - x²))`, with closed
/// forms at zero and the unit boundaries.
fn asin_working(x: &BigDecimal, wp: u32) -> Result<BigDecimal, ArithmeticError> {
    let one = BigDecimal::one();
    let ax = x.abs();
    if ax > one {
        return Err(ArithmeticError::undefined());
    }
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    if ax == one {
        let h = half_pi(wp);
        return Ok(if x.is_negative() { -h } else { h });
    }
    let complement = &one - &(x * x);
    let base = complement.root(2, wp)?;
    if base.is_zero() {
        // the complement vanished at this precision: the argument is
        // indistinguishable from a unit
        let h = half_pi(wp);
        return Ok(if x.is_negative() { -h } else { h });
    }
    let arg = x.div_prec_unchecked(&base, wp);
    Ok(atan_working(&arg, wp))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn sin_cos_test() {
        assert_eq!(dec("0").sin(10).to_string(), "0");
        assert_eq!(dec("0").cos(10).to_string(), "1");
        assert_eq!(dec("1").sin(10).to_string(), "0.8414709848");
        assert_eq!(dec("1").cos(10).to_string(), "0.5403023059");
        assert_eq!(dec("-1").sin(10).to_string(), "-0.8414709848");
        assert_eq!(dec("-1").cos(10).to_string(), "0.5403023059");
        assert_eq!(dec("0.5").sin(10).to_string(), "0.4794255386");
    }

    #[test]
    fn large_argument_reduction_test() {
        // decimal exponent >= 2 triggers the mod-2π reduction
        assert_eq!(dec("100").sin(10).to_string(), "-0.5063656411");
        assert_eq!(dec("100").cos(10).to_string(), "0.8623188723");
        assert_eq!(dec("-100").sin(10).to_string(), "0.5063656411");
    }

    #[test]
    fn tan_cot_test() {
        assert_eq!(dec("1").tan(10).unwrap().to_string(), "1.5574077247");
        assert_eq!(dec("1").cot(10).unwrap().to_string(), "0.6420926159");
        assert_eq!(dec("0").tan(10).unwrap().to_string(), "0");
        assert!(dec("0").cot(10).is_err());
    }

    #[test]
    fn atan_test() {
        assert_eq!(dec("0").atan(10).to_string(), "0");
        assert_eq!(dec("1").atan(10).to_string(), "0.7853981634");
        assert_eq!(dec("-1").atan(10).to_string(), "-0.7853981634");
        assert_eq!(dec("0.5").atan(10).to_string(), "0.463647609");
        assert_eq!(dec("2").atan(10).to_string(), "1.1071487178");
        assert_eq!(dec("-2").atan(10).to_string(), "-1.1071487178");
    }

    #[test]
    fn acot_test() {
        assert_eq!(dec("1").acot(10).to_string(), "0.7853981634");
        assert_eq!(dec("0").acot(10).to_string(), "1.5707963268");
    }

    #[test]
    fn asin_acos_test() {
        assert_eq!(dec("0").asin(10).unwrap().to_string(), "0");
        assert_eq!(dec("0.5").asin(10).unwrap().to_string(), "0.5235987756");
        assert_eq!(dec("-0.5").asin(10).unwrap().to_string(), "-0.5235987756");
        assert_eq!(dec("1").asin(10).unwrap().to_string(), "1.5707963268");
        assert_eq!(dec("-1").asin(10).unwrap().to_string(), "-1.5707963268");
        assert_eq!(dec("0.5").acos(10).unwrap().to_string(), "1.0471975512");
        assert_eq!(dec("1").acos(10).unwrap().to_string(), "0");
        assert_eq!(dec("-1").acos(10).unwrap().to_string(), "3.1415926536");
        assert_eq!(dec("0").acos(10).unwrap().to_string(), "1.5707963268");
        assert!(dec("1.5").asin(10).is_err());
        assert!(dec("-1.1").acos(10).is_err());
    }

    #[test]
    fn pythagorean_identity_test() {
        // sin² + cos² stays within a last-digit ulp of one
        let s = dec("0.7").sin(15);
        let c = dec("0.7").cos(15);
        let sum = &(&s * &s) + &(&c * &c);
        let error = (sum - BigDecimal::one()).abs();
        assert!(error <= dec("0.000000000000002"));
    }
}
