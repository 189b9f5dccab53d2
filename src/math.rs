//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the limb buffers, so for a
//! `vec![0, 1, 2, 3]`, `3` is the most significant limb, and `0` is the least
//! significant limb. Every limb lies in `[0, RADIX)` and a normalized buffer
//! never ends in a zero limb, so zero is the empty buffer.

use crate::lib::{cmp, iter, Vec};

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except it stores nine decimal
//  digits at once. Products of two limbs plus a carry fit in `Wide`, and the
//  signed carry of a mixed-sign addition fits in `SignedWide`.
pub(crate) type Limb = u32;

type Wide = u64;

type SignedWide = i64;

/// Radix of the limb representation.
pub(crate) const RADIX: Limb = 1_000_000_000;

/// Number of decimal digits held by one full limb.
pub(crate) const RADIX_DIGITS: usize = 9;

// SEQUENCES
// ---------

/// Trim most-significant zero limbs.
#[inline]
pub(crate) fn normalize(x: &mut Vec<Limb>) {
    while let Some(&0) = x.last() {
        x.pop();
    }
}

/// Shift left by `n` whole limbs, multiplying the value by `RADIX^n`.
#[inline]
pub(crate) fn ishl_limbs(x: &mut Vec<Limb>, n: usize) {
    if n != 0 && !x.is_empty() {
        let mut shifted = Vec::with_capacity(x.len() + n);
        shifted.extend(iter::repeat(0).take(n));
        shifted.extend_from_slice(x);
        *x = shifted;
    }
}

/// Split a native magnitude into limbs.
pub(crate) fn from_u128(mut x: u128) -> Vec<Limb> {
    let radix = RADIX as u128;
    let mut limbs = Vec::new();
    while x != 0 {
        limbs.push((x % radix) as Limb);
        x /= radix;
    }
    limbs
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // MULTIPLICATION

    /// Multiply by a single value, which must be below `RADIX`.
    pub(crate) fn mul(x: &[Limb], y: Limb) -> Vec<Limb> {
        debug_assert!(y < RADIX);
        let mut z = Vec::with_capacity(x.len() + 1);
        let mut carry: Wide = 0;
        let mut i = 0;
        while i < x.len() || carry != 0 {
            let mut digit = carry;
            if i < x.len() {
                digit += x[i] as Wide * y as Wide;
            }
            z.push((digit % RADIX as Wide) as Limb);
            carry = digit / RADIX as Wide;
            i += 1;
        }
        normalize(&mut z);
        z
    }

    /// In-place multiplication by a single value below `RADIX`.
    #[inline]
    pub(crate) fn imul(x: &mut Vec<Limb>, y: Limb) {
        *x = mul(x, y);
    }

    // DIVISION

    /// Short division by a single non-zero value below `RADIX`.
    ///
    /// Returns the quotient and the remainder.
    pub(crate) fn div_rem(x: &[Limb], y: Limb) -> (Vec<Limb>, Limb) {
        debug_assert!(y != 0 && y < RADIX);
        let mut quotient: Vec<Limb> = iter::repeat(0).take(x.len()).collect();
        let mut remainder: Wide = 0;
        for (i, &xi) in x.iter().enumerate().rev() {
            let digit = remainder * RADIX as Wide + xi as Wide;
            quotient[i] = (digit / y as Wide) as Limb;
            remainder = digit % y as Wide;
        }
        normalize(&mut quotient);
        (quotient, remainder as Limb)
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    ///
    /// A shorter buffer is smaller, otherwise the first differing limb from
    /// the most significant end decides.
    pub(crate) fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() != y.len() {
            return x.len().cmp(&y.len());
        }
        for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
            match xi.cmp(yi) {
                cmp::Ordering::Equal => {}
                ord => return ord,
            }
        }
        cmp::Ordering::Equal
    }

    /// Check if x is less than y.
    #[inline]
    pub(crate) fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    // ADDITION

    /// Positional addition of `x` and `sign * y` with a signed carry.
    ///
    /// `x` must not be smaller than `y`, which keeps every intermediate carry
    /// in `{-1, 0, 1}` and the result non-negative.
    pub(crate) fn add_signed(x: &[Limb], y: &[Limb], sign: SignedWide) -> Vec<Limb> {
        debug_assert!(!less(x, y));
        let radix = RADIX as SignedWide;
        let mut z = Vec::with_capacity(x.len() + 1);
        let mut carry: SignedWide = 0;
        let mut i = 0;
        while i < x.len() || carry != 0 {
            let mut digit = carry;
            if i < x.len() {
                digit += x[i] as SignedWide;
            }
            if i < y.len() {
                digit += sign * y[i] as SignedWide;
            }
            let pushed = digit.rem_euclid(radix);
            z.push(pushed as Limb);
            carry = (digit - pushed) / radix;
            i += 1;
        }
        normalize(&mut z);
        z
    }

    /// Add two magnitudes.
    #[inline]
    pub(crate) fn add(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        if less(x, y) {
            add_signed(y, x, 1)
        } else {
            add_signed(x, y, 1)
        }
    }

    // SUBTRACTION

    /// Subtract `y` from `x`, which must not be smaller than `y`.
    #[inline]
    pub(crate) fn sub(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        add_signed(x, y, -1)
    }

    // MULTIPLICATION

    /// Grade-school multiplication algorithm.
    ///
    /// For every limb of `y`, multiply `x` by that limb, shift the partial
    /// product into position and accumulate it.
    pub(crate) fn mul(x: &[Limb], y: &[Limb]) -> Vec<Limb> {
        let mut z = Vec::new();
        for (i, &yi) in y.iter().enumerate() {
            let mut partial = small::mul(x, yi);
            ishl_limbs(&mut partial, i);
            z = add(&z, &partial);
        }
        normalize(&mut z);
        z
    }

    // DIVISION

    /// Largest `d` in `[0, RADIX)` with `d * y <= x`.
    ///
    /// `d * y` grows monotonically with `d`, so a binary search over the
    /// limb range finds it in about 30 steps.
    fn guess_digit(x: &[Limb], y: &[Limb]) -> Limb {
        let mut lower: Limb = 0;
        let mut upper: Limb = RADIX;
        while lower + 1 < upper {
            let middle = lower + (upper - lower) / 2;
            if compare(&small::mul(y, middle), x) == cmp::Ordering::Greater {
                upper = middle;
            } else {
                lower = middle;
            }
        }
        lower
    }

    /// Long division, one limb of the dividend at a time.
    ///
    /// Returns the quotient and the remainder. `y` must be non-zero.
    pub(crate) fn div_rem(x: &[Limb], y: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
        debug_assert!(!y.is_empty());
        // The quotient is built most-significant first and reversed at the
        // end, so every new digit is a cheap push.
        let mut quotient = Vec::with_capacity(x.len());
        let mut trailing = Vec::with_capacity(y.len() + 1);
        for &xi in x.iter().rev() {
            trailing.insert(0, xi);
            normalize(&mut trailing);
            let digit = guess_digit(&trailing, y);
            quotient.push(digit);
            trailing = sub(&trailing, &small::mul(y, digit));
        }
        quotient.reverse();
        normalize(&mut quotient);
        (quotient, trailing)
    }
}
