//! Magnitude arithmetic on little-endian radix-10^9 limb slices
//!
//! Every function here works on unsigned magnitudes; sign dispatch lives in
//! the `BigInt` wrapper. Inputs are expected in trimmed form (no superfluous
//! most-significant zero limb, `[0]` for zero) and outputs keep that form.

use core::cmp::Ordering;

/// One limb holds exactly 9 decimal digits.
pub(crate) const RADIX: u32 = 1_000_000_000;
pub(crate) const RADIX64: u64 = RADIX as u64;
pub(crate) const RADIX_DIGITS: u32 = 9;

/// Powers of ten up to one limb width, for sub-limb digit shifts.
pub(crate) const POW10: [u32; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// Remove most-significant zero limbs, keeping at least one limb.
pub(crate) fn trim(v: &mut Vec<u32>) {
    while v.len() > 1 && v[v.len() - 1] == 0 {
        v.pop();
    }
    if v.is_empty() {
        v.push(0);
    }
}

#[inline]
pub(crate) fn is_zero_mag(a: &[u32]) -> bool {
    a.iter().all(|&limb| limb == 0)
}

/// Number of decimal digits in a single limb (1 for zero).
pub(crate) fn decimal_len(limb: u32) -> u32 {
    let mut len = 1;
    while len < RADIX_DIGITS && limb >= POW10[len as usize] {
        len += 1;
    }
    len
}

/// Number of decimal digits of a trimmed magnitude (1 for zero).
pub(crate) fn digits_mag(a: &[u32]) -> u64 {
    (a.len() as u64 - 1) * RADIX_DIGITS as u64 + decimal_len(a[a.len() - 1]) as u64
}

/// Compare trimmed magnitudes: limb count first, then limbs from the most
/// significant end.
pub(crate) fn cmp_mag(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for i in (0..a.len()).rev() {
        if a[i] != b[i] {
            return a[i].cmp(&b[i]);
        }
    }
    Ordering::Equal
}

pub(crate) fn add_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u32;
    for i in 0..long.len() {
        let mut t = long[i] + carry;
        if i < short.len() {
            t += short[i];
        }
        if t >= RADIX {
            t -= RADIX;
            carry = 1;
        } else {
            carry = 0;
        }
        out.push(t);
    }
    if carry > 0 {
        out.push(carry);
    }
    out
}

/// `a - b` in any order. Subtracts blindly with borrow propagation; a borrow
/// past the top limb means the true result is negative, in which case the
/// limbs are recovered by taking the radix complement instead of
/// re-subtracting. Returns the magnitude and whether the sign flipped.
pub(crate) fn sub_mag(a: &[u32], b: &[u32]) -> (Vec<u32>, bool) {
    let n = a.len().max(b.len());
    let mut out = Vec::with_capacity(n);
    let mut borrow = 0i64;
    for i in 0..n {
        let av = *a.get(i).unwrap_or(&0) as i64;
        let bv = *b.get(i).unwrap_or(&0) as i64;
        let mut t = av - bv - borrow;
        if t < 0 {
            t += RADIX as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(t as u32);
    }
    let negative = borrow != 0;
    if negative {
        // out currently holds RADIX^n - |a - b|; complement it back.
        let mut carry = 1u32;
        for limb in out.iter_mut() {
            let mut t = RADIX - 1 - *limb + carry;
            if t >= RADIX {
                t -= RADIX;
                carry = 1;
            } else {
                carry = 0;
            }
            *limb = t;
        }
    }
    trim(&mut out);
    (out, negative)
}

/// Schoolbook multiplication with 64-bit intermediate products.
pub(crate) fn mul_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0u64;
        for (j, &bj) in b.iter().enumerate() {
            let t = out[i + j] as u64 + ai as u64 * bj as u64 + carry;
            out[i + j] = (t % RADIX64) as u32;
            carry = t / RADIX64;
        }
        out[i + b.len()] = carry as u32;
    }
    trim(&mut out);
    out
}

pub(crate) fn mul_small(a: &[u32], m: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u64;
    for &limb in a {
        let t = limb as u64 * m as u64 + carry;
        out.push((t % RADIX64) as u32);
        carry = t / RADIX64;
    }
    if carry > 0 {
        out.push(carry as u32);
    }
    trim(&mut out);
    out
}

/// Division by a single limb, from the most significant end down.
pub(crate) fn div_rem_small(a: &[u32], d: u32) -> (Vec<u32>, u32) {
    debug_assert!(d != 0);
    let mut q = vec![0u32; a.len()];
    let mut rem = 0u64;
    for i in (0..a.len()).rev() {
        let cur = rem * RADIX64 + a[i] as u64;
        q[i] = (cur / d as u64) as u32;
        rem = cur % d as u64;
    }
    trim(&mut q);
    (q, rem as u32)
}

/// Long division of trimmed magnitudes, Knuth's Algorithm D.
///
/// Both operands are scaled so the divisor's leading limb is at least
/// `RADIX / 2`; each step estimates one quotient limb from the top two limbs
/// of the running remainder, corrects the estimate against the divisor's
/// second limb, and falls back to an add-back when the multiply-subtract
/// still overshoots.
pub(crate) fn div_rem_mag(u: &[u32], v: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!is_zero_mag(v));
    match cmp_mag(u, v) {
        Ordering::Less => return (vec![0], u.to_vec()),
        Ordering::Equal => return (vec![1], vec![0]),
        Ordering::Greater => {}
    }
    if v.len() == 1 {
        let (q, r) = div_rem_small(u, v[0]);
        return (q, vec![r]);
    }

    let n = v.len();
    let m = u.len();
    let d = (RADIX64 / (v[n - 1] as u64 + 1)) as u32;

    // Normalized copies; the dividend gets one extra limb for the scaling
    // carry.
    let mut un = vec![0u32; m + 1];
    let mut carry = 0u64;
    for i in 0..m {
        let t = u[i] as u64 * d as u64 + carry;
        un[i] = (t % RADIX64) as u32;
        carry = t / RADIX64;
    }
    un[m] = carry as u32;

    let mut vn = vec![0u32; n];
    carry = 0;
    for i in 0..n {
        let t = v[i] as u64 * d as u64 + carry;
        vn[i] = (t % RADIX64) as u32;
        carry = t / RADIX64;
    }
    debug_assert_eq!(carry, 0);
    debug_assert!(vn[n - 1] as u64 >= RADIX64 / 2);

    let vtop = vn[n - 1] as u64;
    let vsecond = vn[n - 2] as u64;
    let mut q = vec![0u32; m - n + 1];

    for j in (0..=(m - n)).rev() {
        let top = un[j + n] as u64 * RADIX64 + un[j + n - 1] as u64;
        let mut qhat = top / vtop;
        let mut rhat = top % vtop;
        if qhat >= RADIX64 {
            qhat = RADIX64 - 1;
            rhat = top - qhat * vtop;
        }
        while rhat < RADIX64 && qhat * vsecond > rhat * RADIX64 + un[j + n - 2] as u64 {
            qhat -= 1;
            rhat += vtop;
        }

        // Multiply and subtract in one pass.
        let mut mul_carry = 0u64;
        let mut borrow = 0i64;
        for i in 0..n {
            let p = qhat * vn[i] as u64 + mul_carry;
            mul_carry = p / RADIX64;
            let mut t = un[j + i] as i64 - (p % RADIX64) as i64 - borrow;
            if t < 0 {
                t += RADIX64 as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            un[j + i] = t as u32;
        }
        let t = un[j + n] as i64 - mul_carry as i64 - borrow;

        q[j] = qhat as u32;
        if t < 0 {
            // Estimate was one too large: add the divisor back.
            q[j] -= 1;
            let mut add_carry = 0u32;
            for i in 0..n {
                let mut s = un[j + i] + vn[i] + add_carry;
                if s >= RADIX {
                    s -= RADIX;
                    add_carry = 1;
                } else {
                    add_carry = 0;
                }
                un[j + i] = s;
            }
            // The carry out of the addition cancels the borrow.
            un[j + n] = (t + add_carry as i64) as u32;
        } else {
            un[j + n] = t as u32;
        }
    }

    trim(&mut q);

    // Undo the normalization on the remainder.
    let mut rem: Vec<u32> = un[..n].to_vec();
    trim(&mut rem);
    if d > 1 {
        let (r, rr) = div_rem_small(&rem, d);
        debug_assert_eq!(rr, 0);
        rem = r;
    }
    (q, rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_test() {
        // 999999999999999999 + 1 carries across the limb boundary
        let a = vec![999_999_999, 999_999_999];
        let one = vec![1];
        assert_eq!(add_mag(&a, &one), vec![0, 0, 1]);
        assert_eq!(add_mag(&one, &a), vec![0, 0, 1]);

        assert_eq!(sub_mag(&a, &one), (vec![999_999_998, 999_999_999], false));
        // subtracting the larger magnitude flips the sign via the complement
        assert_eq!(sub_mag(&one, &a), (vec![999_999_998, 999_999_999], true));
        assert_eq!(sub_mag(&a, &a), (vec![0], false));
        assert_eq!(sub_mag(&vec![0, 0, 1], &one), (a, false));
    }

    #[test]
    fn mul_test() {
        // 123456789876543210 * 999999999 spans three limbs
        let a = vec![876_543_210, 123_456_789];
        let b = vec![999_999_999];
        assert_eq!(mul_mag(&a, &b), vec![123_456_790, 753_086_420, 123_456_789]);
        assert_eq!(mul_mag(&a, &vec![0]), vec![0]);
        assert_eq!(mul_small(&a, 0), vec![0]);
        assert_eq!(mul_small(&vec![500_000_000], 2), vec![0, 1]);
    }

    #[test]
    fn short_division_test() {
        let (q, r) = div_rem_small(&vec![0, 1], 3); // 10^9 / 3
        assert_eq!(q, vec![333_333_333]);
        assert_eq!(r, 1);
    }

    #[test]
    fn long_division_test() {
        // check u == q * v + r and r < v over assorted multi-limb cases
        let cases: Vec<(Vec<u32>, Vec<u32>)> = vec![
            (vec![999_999_999, 999_999_999, 999_999_999], vec![1, 1]),
            (vec![0, 0, 1], vec![999_999_999]),
            (vec![123_456_789, 987_654_321, 555_555_555], vec![999_999_998, 4]),
            (vec![0, 0, 0, 1], vec![1, 500_000_000]),
            (vec![7, 0, 0, 999_999_999], vec![999_999_999, 999_999_999]),
            (vec![42], vec![999_999_999, 1]),
        ];
        for (u, v) in cases {
            let (q, r) = div_rem_mag(&u, &v);
            assert_eq!(cmp_mag(&r, &v), Ordering::Less);
            let back = add_mag(&mul_mag(&q, &v), &r);
            assert_eq!(cmp_mag(&back, &u), Ordering::Equal, "failed for {:?} / {:?}", u, v);
        }
    }

    #[test]
    fn digit_count_test() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(999_999_999), 9);
        assert_eq!(digits_mag(&[0]), 1);
        assert_eq!(digits_mag(&[0, 1]), 10);
    }
}
