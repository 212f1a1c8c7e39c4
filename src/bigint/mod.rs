//! Unbounded signed integers stored as sign + radix-10^9 limbs
//!
//! The radix is the largest power of ten that fits a 32-bit limb with room
//! for carries in 64-bit accumulators, so every limb maps to exactly 9
//! decimal digits and decimal string conversion and power-of-ten shifts need
//! no base conversion, only limb-aligned moves.

mod arith;
mod ops;

pub(crate) use arith::{RADIX_DIGITS, POW10};

use crate::error::ArithmeticError;
use core::cmp::Ordering;
use core::str::FromStr;
use num_traits::{One, Signed, Zero};
use std::error::Error;
use std::fmt;

/// Sign of a [BigInt]: zero values carry `NoSign` and nothing else.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Sign {
    #[inline]
    pub(crate) fn flip(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        }
    }

    #[inline]
    pub(crate) fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (a, b) if a == b => Sign::Plus,
            _ => Sign::Minus,
        }
    }
}

/// An arbitrary precision signed integer.
///
/// Immutable value type: every operation returns a fresh canonical instance.
/// Canonical form keeps no superfluous most-significant zero limb, and zero
/// is exactly `(NoSign, [0])`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<u32>,
}

impl BigInt {
    /// Build from a sign and a raw little-endian magnitude, normalizing to
    /// canonical form.
    pub(crate) fn from_sign_mag(sign: Sign, mut limbs: Vec<u32>) -> BigInt {
        arith::trim(&mut limbs);
        if arith::is_zero_mag(&limbs) {
            BigInt { sign: Sign::NoSign, limbs: vec![0] }
        } else {
            debug_assert!(sign != Sign::NoSign);
            BigInt { sign, limbs }
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of decimal digits of the magnitude (1 for zero).
    #[inline]
    pub fn digits(&self) -> u64 {
        arith::digits_mag(&self.limbs)
    }

    /// Truncated division with remainder.
    ///
    /// Returns `(q, r)` with `self == other * q + r`, `|r| < |other|` and
    /// `r` carrying the sign of `self` (or zero).
    pub fn checked_div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::division_by_zero());
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }
        let (q_mag, r_mag) = arith::div_rem_mag(&self.limbs, &other.limbs);
        let q = BigInt::from_sign_mag(self.sign.product(other.sign), q_mag);
        let r = BigInt::from_sign_mag(self.sign, r_mag);
        Ok((q, r))
    }

    /// Multiply by `10^exp`; a negative exponent redirects to the truncating
    /// [BigInt::div_pow_ten].
    pub fn mul_pow_ten(&self, exp: i64) -> BigInt {
        if exp < 0 {
            return self.div_pow_ten(-exp);
        }
        if self.is_zero() || exp == 0 {
            return self.clone();
        }
        let whole = (exp / RADIX_DIGITS as i64) as usize;
        let part = (exp % RADIX_DIGITS as i64) as usize;
        let mut mag = if part > 0 {
            arith::mul_small(&self.limbs, POW10[part])
        } else {
            self.limbs.clone()
        };
        if whole > 0 {
            let mut shifted = vec![0u32; whole];
            shifted.extend_from_slice(&mag);
            mag = shifted;
        }
        BigInt::from_sign_mag(self.sign, mag)
    }

    /// Divide by `10^exp`, truncating toward zero; a negative exponent
    /// redirects to [BigInt::mul_pow_ten].
    pub fn div_pow_ten(&self, exp: i64) -> BigInt {
        if exp < 0 {
            return self.mul_pow_ten(-exp);
        }
        let (q, _) = self.split_pow_ten(exp as u64);
        q
    }

    /// Split into `(self div 10^k, self mod 10^k)`, both truncated toward
    /// zero and carrying the sign of `self` where non-zero.
    pub(crate) fn split_pow_ten(&self, k: u64) -> (BigInt, BigInt) {
        if self.is_zero() || k == 0 {
            return (self.clone(), BigInt::zero());
        }
        let whole = (k / RADIX_DIGITS as u64) as usize;
        let part = (k % RADIX_DIGITS as u64) as usize;
        if whole >= self.limbs.len() {
            return (BigInt::zero(), self.clone());
        }
        let low = self.limbs[..whole].to_vec();
        let high = self.limbs[whole..].to_vec();
        let (q_mag, mut r_mag) = if part > 0 {
            let (q, sub_limb) = arith::div_rem_small(&high, POW10[part]);
            let mut rem = low;
            rem.push(sub_limb);
            (q, rem)
        } else {
            (high, low)
        };
        arith::trim(&mut r_mag);
        (
            BigInt::from_sign_mag(self.sign, q_mag),
            BigInt::from_sign_mag(self.sign, r_mag),
        )
    }

    /// Greatest common divisor by the Euclidean algorithm; always
    /// non-negative, `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let (_, r) = match a.checked_div_rem(&b) {
                Ok(qr) => qr,
                Err(_) => unreachable!(),
            };
            a = b;
            b = r;
        }
        a
    }

    /// Least common multiple; `lcm(0, x) == 0`.
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let g = self.gcd(other);
        let (q, _) = match self.abs().checked_div_rem(&g) {
            Ok(qr) => qr,
            Err(_) => unreachable!(),
        };
        q * other.abs()
    }

    /// Fold [BigInt::gcd] over a sequence, short-circuiting once the
    /// accumulated divisor reaches one. Empty input yields zero.
    pub fn gcd_all<'a, I: IntoIterator<Item = &'a BigInt>>(values: I) -> BigInt {
        let mut acc = BigInt::zero();
        for v in values {
            acc = acc.gcd(v);
            if acc.is_one() {
                break;
            }
        }
        acc
    }

    /// Fold [BigInt::lcm] over a sequence. Empty input yields one.
    pub fn lcm_all<'a, I: IntoIterator<Item = &'a BigInt>>(values: I) -> BigInt {
        let mut acc = BigInt::one();
        for v in values {
            acc = acc.lcm(v);
            if acc.is_zero() {
                break;
            }
        }
        acc
    }

    /// `n!` by iterative accumulation.
    pub fn factorial(n: u32) -> BigInt {
        let mut acc = BigInt::one();
        for i in 2..=n.max(1) {
            acc = acc * BigInt::from(i);
        }
        acc
    }

    /// Binomial coefficient `C(n, m)`; out-of-range `m > n` yields zero
    /// rather than an error.
    pub fn binomial(n: u32, m: u32) -> BigInt {
        if m > n {
            return BigInt::zero();
        }
        let m = m.min(n - m);
        let mut acc = BigInt::one();
        for i in 0..m {
            acc = acc * BigInt::from(n - i);
            let (q, _) = match acc.checked_div_rem(&BigInt::from(i + 1)) {
                Ok(qr) => qr,
                Err(_) => unreachable!(),
            };
            acc = q;
        }
        acc
    }

    /// Decimal digits of the magnitude, most significant limb unpadded and
    /// every following limb zero-padded to 9 digits.
    pub(crate) fn to_abs_string(&self) -> String {
        let mut s = String::with_capacity(self.limbs.len() * RADIX_DIGITS as usize);
        for (i, limb) in self.limbs.iter().enumerate().rev() {
            if i == self.limbs.len() - 1 {
                s.push_str(&limb.to_string());
            } else {
                s.push_str(&format!("{:09}", limb));
            }
        }
        s
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Minus {
            write!(f, "-")?;
        }
        write!(f, "{}", self.to_abs_string())
    }
}

/// Failed conversion of a decimal literal into a [BigInt].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseBigIntError {
    kind: IntErrorKind,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum IntErrorKind {
    Empty,
    InvalidDigit,
}

impl ParseBigIntError {
    #[inline]
    pub(crate) fn empty() -> Self {
        ParseBigIntError { kind: IntErrorKind::Empty }
    }

    #[inline]
    pub(crate) fn invalid() -> Self {
        ParseBigIntError { kind: IntErrorKind::InvalidDigit }
    }

    #[inline]
    pub(crate) fn is_empty_kind(&self) -> bool {
        self.kind == IntErrorKind::Empty
    }
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IntErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            IntErrorKind::InvalidDigit => write!(f, "invalid digit found in string"),
        }
    }
}

impl Error for ParseBigIntError {}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parse an optionally signed decimal literal, grouping the digits into
    /// limb-sized chunks from the least significant end.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, digits) = match s.as_bytes().first() {
            None => return Err(ParseBigIntError::empty()),
            Some(b'-') => (Sign::Minus, &s[1..]),
            Some(b'+') => (Sign::Plus, &s[1..]),
            _ => (Sign::Plus, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::empty());
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseBigIntError::invalid());
        }
        let bytes = digits.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len() / RADIX_DIGITS as usize + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(RADIX_DIGITS as usize);
            let mut limb = 0u32;
            for &b in &bytes[start..end] {
                limb = limb * 10 + (b - b'0') as u32;
            }
            limbs.push(limb);
            end = start;
        }
        Ok(BigInt::from_sign_mag(sign, limbs))
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    /// Sign first, then magnitude (limb count, then limbs from the most
    /// significant end); the magnitude order is reversed for negatives.
    fn cmp(&self, other: &Self) -> Ordering {
        let sign_rank = |s: Sign| match s {
            Sign::Minus => 0,
            Sign::NoSign => 1,
            Sign::Plus => 2,
        };
        match sign_rank(self.sign).cmp(&sign_rank(other.sign)) {
            Ordering::Equal => {}
            ord => return ord,
        }
        let mag = arith::cmp_mag(&self.limbs, &other.limbs);
        if self.sign == Sign::Minus {
            mag.reverse()
        } else {
            mag
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                let mut n = n as u128;
                let mut limbs = Vec::new();
                loop {
                    limbs.push((n % arith::RADIX as u128) as u32);
                    n /= arith::RADIX as u128;
                    if n == 0 { break; }
                }
                BigInt::from_sign_mag(Sign::Plus, limbs)
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty)*) => {$(
        impl From<$t> for BigInt {
            fn from(n: $t) -> BigInt {
                let mag = BigInt::from(n.unsigned_abs());
                if n < 0 { -mag } else { mag }
            }
        }
    )*};
}

impl_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_from_signed!(i8 i16 i32 i64 i128 isize);
