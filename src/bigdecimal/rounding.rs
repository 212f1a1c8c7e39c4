//! Rounding of [BigDecimal] values to a target fractional digit count
//!
//! All four modes share one kernel: split the unscaled magnitude at the cut
//! point (which may fall on a limb boundary or inside a limb), decide from
//! the dropped remainder whether to step the kept part, and apply the step
//! through ordinary [BigInt] addition so multi-limb carries propagate on
//! their own.

use super::BigDecimal;
use crate::bigint::{BigInt, Sign, RADIX_DIGITS};
use core::cmp::Ordering;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// How to resolve digits dropped by [BigDecimal::round_with].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundingMode {
    /// Nearest value; ties step away from zero.
    HalfUp,
    /// Nearest value; exact ties step to an even last retained digit.
    HalfEven,
    /// Smallest representable value not below the input.
    Ceiling,
    /// Largest representable value not above the input.
    Floor,
}

impl BigDecimal {
    /// Round to `digits` fractional digits under the given mode, returning a
    /// new canonical value. A cut point at or below the stored resolution
    /// returns the value unchanged.
    pub fn round_with(&self, digits: i64, mode: RoundingMode) -> BigDecimal {
        if self.is_zero() {
            return BigDecimal::zero();
        }
        let cut = RADIX_DIGITS as i64 * self.scale + digits;
        if cut >= 0 {
            return self.clone();
        }
        let k = -cut;
        let sign = self.sign();
        let (kept, dropped) = self.unscaled.abs().split_pow_ten(k as u64);
        let step = match mode {
            RoundingMode::HalfUp => {
                let twice = &dropped + &dropped;
                twice >= BigInt::one().mul_pow_ten(k)
            }
            RoundingMode::HalfEven => {
                let twice = &dropped + &dropped;
                match twice.cmp(&BigInt::one().mul_pow_ten(k)) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => kept.is_odd(),
                }
            }
            RoundingMode::Ceiling => sign == Sign::Plus && !dropped.is_zero(),
            RoundingMode::Floor => sign == Sign::Minus && !dropped.is_zero(),
        };
        let kept = if step { kept + BigInt::one() } else { kept };
        if kept.is_zero() {
            return BigDecimal::zero();
        }
        let signed = if sign == Sign::Minus { -kept } else { kept };
        BigDecimal::from_scaled_digits(signed, -digits)
    }

    /// Round to the nearest value at `digits` fractional digits, ties away
    /// from zero.
    #[inline]
    pub fn round(&self, digits: i64) -> BigDecimal {
        self.round_with(digits, RoundingMode::HalfUp)
    }

    /// Banker's rounding to `digits` fractional digits.
    #[inline]
    pub fn round_half_even(&self, digits: i64) -> BigDecimal {
        self.round_with(digits, RoundingMode::HalfEven)
    }

    /// Smallest value at `digits` fractional digits that is `>= self`.
    #[inline]
    pub fn ceil(&self, digits: i64) -> BigDecimal {
        self.round_with(digits, RoundingMode::Ceiling)
    }

    /// Largest value at `digits` fractional digits that is `<= self`.
    #[inline]
    pub fn floor(&self, digits: i64) -> BigDecimal {
        self.round_with(digits, RoundingMode::Floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn half_up_test() {
        assert_eq!(dec("2.5").round(0).to_string(), "3");
        assert_eq!(dec("-2.5").round(0).to_string(), "-3");
        assert_eq!(dec("2.4").round(0).to_string(), "2");
        assert_eq!(dec("-2.4").round(0).to_string(), "-2");
        assert_eq!(dec("0.123456789123").round(5).to_string(), "0.12346");
        assert_eq!(dec("1.5").round(3), dec("1.5"));
        assert_eq!(dec("0.0004").round(3).to_string(), "0");
    }

    #[test]
    fn half_even_test() {
        assert_eq!(dec("2.5").round_half_even(0).to_string(), "2");
        assert_eq!(dec("3.5").round_half_even(0).to_string(), "4");
        assert_eq!(dec("-2.5").round_half_even(0).to_string(), "-2");
        assert_eq!(dec("-3.5").round_half_even(0).to_string(), "-4");
        // not an exact tie: ordinary nearest rounding applies
        assert_eq!(dec("2.5000001").round_half_even(0).to_string(), "3");
        assert_eq!(dec("0.125").round_half_even(2).to_string(), "0.12");
        assert_eq!(dec("0.135").round_half_even(2).to_string(), "0.14");
    }

    #[test]
    fn ceiling_floor_test() {
        assert_eq!(dec("2.1").ceil(0).to_string(), "3");
        assert_eq!(dec("2.1").floor(0).to_string(), "2");
        assert_eq!(dec("-2.1").ceil(0).to_string(), "-2");
        assert_eq!(dec("-2.1").floor(0).to_string(), "-3");
        assert_eq!(dec("2").ceil(0).to_string(), "2");
        assert_eq!(dec("-2").floor(0).to_string(), "-2");
        assert_eq!(dec("0.00000000001").ceil(5).to_string(), "0.00001");
        assert_eq!(dec("-0.00000000001").floor(5).to_string(), "-0.00001");
    }

    #[test]
    fn carry_propagation_test() {
        // stepping the last kept digit must ripple across limb boundaries
        assert_eq!(dec("0.999999999999").round(9).to_string(), "1");
        assert_eq!(dec("999999999.9999999995").round(9).to_string(), "1000000000");
        assert_eq!(dec("-0.9999999999").round(5).to_string(), "-1");
    }

    #[test]
    fn limb_boundary_cut_test() {
        // cut exactly on a limb boundary versus inside a limb
        let v = dec("0.123456789987654321");
        assert_eq!(v.round(9).to_string(), "0.12345679");
        assert_eq!(v.round(18), v);
        assert_eq!(v.round(4).to_string(), "0.1235");
        assert_eq!(v.floor(9).to_string(), "0.123456789");
        assert_eq!(v.ceil(9).to_string(), "0.12345679");
    }

    #[test]
    fn rounding_monotonicity_test() {
        for s in ["2.5", "-2.5", "0.123456789123", "-17.000000004"] {
            let v = dec(s);
            for d in [0i64, 3, 9, 12] {
                assert!(v.floor(d) <= v);
                assert!(v <= v.ceil(d));
            }
        }
    }

    #[test]
    fn integer_part_rounding_test() {
        // negative digit counts round into the integer part
        assert_eq!(dec("1234").round(-2).to_string(), "1200");
        assert_eq!(dec("1250").round(-2).to_string(), "1300");
        assert_eq!(dec("-1250").floor(-2).to_string(), "-1300");
    }
}
