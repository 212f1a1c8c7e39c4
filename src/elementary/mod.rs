//! Elementary functions on [BigDecimal] evaluated to a requested precision
//!
//! Every function takes the number of correct fractional digits the caller
//! wants and rounds its result to exactly that count. Internally the series
//! and iterations run at one digit beyond the requested precision, plus a
//! few guard digits so per-term rounding noise cannot reach the digit being
//! rounded. Convergence needs no explicit iteration cap: finite working
//! precision flushes the tail of every series to zero.

mod trig;

use crate::bigdecimal::BigDecimal;
use crate::bigint::BigInt;
use crate::error::ArithmeticError;
use num_traits::{One, Signed, Zero};

pub(crate) const GUARD_DIGITS: u32 = 5;

#[inline]
pub(crate) fn working_precision(precision: u32) -> u32 {
    precision + 1 + GUARD_DIGITS
}

/// Series cutoff `5 * 10^-(precision + 1)`: half a unit of the extra digit.
pub(crate) fn tolerance(precision: u32) -> BigDecimal {
    BigDecimal::from_scaled_digits(BigInt::from(5u32), -(precision as i64 + 1))
}

/// π to `precision` fractional digits, accumulated from the base-16 series
/// `Σ 16^-k (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6))`.
pub fn pi(precision: u32) -> BigDecimal {
    let wp = working_precision(precision);
    let one = BigDecimal::one();
    let two = BigDecimal::from(2u32);
    let four = BigDecimal::from(4u32);
    let sixteen = BigDecimal::from(16u32);
    let mut sum = BigDecimal::zero();
    let mut scale16 = BigDecimal::one();
    let mut k = 0u64;
    while !scale16.is_zero() {
        let a = four.div_prec_unchecked(&BigDecimal::from(8 * k + 1), wp);
        let b = two.div_prec_unchecked(&BigDecimal::from(8 * k + 4), wp);
        let c = one.div_prec_unchecked(&BigDecimal::from(8 * k + 5), wp);
        let d = one.div_prec_unchecked(&BigDecimal::from(8 * k + 6), wp);
        let term = (&scale16 * &(a - b - c - d)).round(wp as i64);
        sum = &sum + &term;
        scale16 = scale16.div_prec_unchecked(&sixteen, wp);
        k += 1;
    }
    sum.round(precision as i64)
}

impl BigDecimal {
    /// `e^self` to `precision` fractional digits, by the Taylor series
    /// `Σ xⁱ/i!`. The series stops once a term flushes to zero at the
    /// working precision.
    pub fn exp(&self, precision: u32) -> BigDecimal {
        let wp = working_precision(precision);
        let mut sum = BigDecimal::one();
        let mut term = BigDecimal::one();
        let mut i = 1u64;
        loop {
            term = (&term * self).div_prec_unchecked(&BigDecimal::from(i), wp);
            if term.is_zero() {
                break;
            }
            sum = &sum + &term;
            i += 1;
        }
        sum.round(precision as i64)
    }

    /// Natural logarithm of a strictly positive argument.
    ///
    /// Arguments within two decimal orders of unity go straight into the
    /// atanh series; anything else is reduced by its decimal exponent via
    /// `ln(m * 10^k) = ln(m) + k * ln(10)`.
    pub fn ln(&self, precision: u32) -> Result<BigDecimal, ArithmeticError> {
        if !self.is_positive() {
            return Err(ArithmeticError::undefined());
        }
        let wp = working_precision(precision);
        let tol = tolerance(precision);
        let exponent = self.decimal_exponent();
        if exponent.abs() <= 2 {
            return Ok(ln_series(self, wp, &tol).round(precision as i64));
        }
        let mantissa = self.mul_pow_ten(-exponent);
        let ln_m = ln_series(&mantissa, wp, &tol);
        let ln_10 = ln_series(&BigDecimal::from(10u32), wp, &tol);
        Ok((ln_m + BigDecimal::from(exponent) * ln_10).round(precision as i64))
    }

    /// The `index`-th root by Newton's method on
    /// `x ← (v + (i-1)·xⁱ) / (i·x^(i-1))`, seeded at `v / index`.
    ///
    /// A zero `index` is undefined; a negative one is the reciprocal of the
    /// positive root. Even roots of negative arguments are undefined, odd
    /// ones negate the root of the magnitude.
    pub fn root(&self, index: i64, precision: u32) -> Result<BigDecimal, ArithmeticError> {
        if index == 0 {
            return Err(ArithmeticError::undefined());
        }
        if index < 0 {
            let wp = working_precision(precision);
            let r = self.root(-index, wp)?;
            return BigDecimal::one().div_prec(&r, precision);
        }
        if self.is_zero() {
            return Ok(BigDecimal::zero());
        }
        if self.is_negative() {
            if index % 2 == 0 {
                return Err(ArithmeticError::undefined());
            }
            return Ok(-((-self).root(index, precision)?));
        }
        if index == 1 {
            return Ok(self.round(precision as i64));
        }

        let wp = working_precision(precision);
        let tol = tolerance(precision);
        let index_dec = BigDecimal::from(index);
        let index_m1 = BigDecimal::from(index - 1);
        let mut x = self.div_prec_unchecked(&index_dec, wp);
        if x.is_zero() {
            x = self.clone();
        }
        loop {
            let pow = x.powi_working(index as u64 - 1, wp);
            let numer = self + &((&index_m1 * &x) * &pow);
            let denom = &index_dec * &pow;
            let next = numer.div_prec(&denom, wp)?;
            let delta = (&next - &x).abs();
            x = next;
            if delta <= tol {
                break;
            }
        }
        Ok(x.round(precision as i64))
    }

    /// Integer power by square-and-multiply; negative exponents go through
    /// the reciprocal, and `0^0` is undefined.
    pub fn powi(&self, exponent: i64, precision: u32) -> Result<BigDecimal, ArithmeticError> {
        if exponent == 0 {
            if self.is_zero() {
                return Err(ArithmeticError::undefined());
            }
            return Ok(BigDecimal::one());
        }
        let wp = working_precision(precision);
        if exponent < 0 {
            if self.is_zero() {
                return Err(ArithmeticError::division_by_zero());
            }
            let recip = BigDecimal::one().div_prec_unchecked(self, wp);
            return Ok(recip
                .powi_working(exponent.unsigned_abs(), wp)
                .round(precision as i64));
        }
        Ok(self
            .powi_working(exponent as u64, wp)
            .round(precision as i64))
    }

    /// Square-and-multiply core with every product rounded back to the
    /// working precision.
    pub(crate) fn powi_working(&self, exponent: u64, wp: u32) -> BigDecimal {
        let mut result = BigDecimal::one();
        let mut base = self.clone();
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = (&result * &base).round(wp as i64);
            }
            e >>= 1;
            if e > 0 {
                base = (&base * &base).round(wp as i64);
            }
        }
        result
    }
}

/// atanh series on `y = (x-1)/(x+1)`:
/// `ln(x) = 2·(y + y³/3 + y⁵/5 + …)`, iterated while the latest term's
/// magnitude exceeds the tolerance.
fn ln_series(x: &BigDecimal, wp: u32, tol: &BigDecimal) -> BigDecimal {
    let one = BigDecimal::one();
    let y = (x - &one).div_prec_unchecked(&(x + &one), wp);
    if y.is_zero() {
        return BigDecimal::zero();
    }
    let y2 = (&y * &y).round(wp as i64);
    let mut power = y.clone();
    let mut sum = y;
    let mut k = 1u64;
    loop {
        power = (&power * &y2).round(wp as i64);
        let term = power.div_prec_unchecked(&BigDecimal::from(2 * k + 1), wp);
        if term.abs() <= *tol {
            break;
        }
        sum = &sum + &term;
        k += 1;
    }
    &sum + &sum
}
