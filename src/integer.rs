use crate::error::{Error, ErrorCode, Result};
use crate::lib::Vec;
use crate::math::{self, large, Limb};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// An arbitrary-precision signed integer.
///
/// The value is a sign flag plus a magnitude of base 10<sup>9</sup> limbs,
/// least significant first. Zero is always the empty magnitude with a
/// non-negative sign, and the most significant limb of a non-zero value is
/// never zero.
///
/// ```
/// use big_integer::BigInteger;
///
/// let a = BigInteger::from(-123);
/// let b = BigInteger::from(456);
/// assert_eq!(&a + &b, 333);
/// assert!(a < b);
/// assert_eq!(BigInteger::new().sign(), 0);
/// ```
#[derive(Clone, Default)]
pub struct BigInteger {
    negative: bool,
    limbs: Vec<Limb>,
}

impl BigInteger {
    /// The canonical zero.
    #[inline]
    pub const fn new() -> Self {
        BigInteger {
            negative: false,
            limbs: Vec::new(),
        }
    }

    /// Assemble a value from a sign and a magnitude, normalizing both.
    pub(crate) fn from_parts(negative: bool, mut limbs: Vec<Limb>) -> Self {
        math::normalize(&mut limbs);
        let negative = negative && !limbs.is_empty();
        BigInteger { negative, limbs }
    }

    /// Returns `0` for zero, `-1` for negative and `1` for positive values.
    #[inline]
    pub fn sign(&self) -> i32 {
        if self.limbs.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Returns true if the value is strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() < 0
    }

    /// Returns true if the value is strictly above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign() > 0
    }

    /// Flip the sign in place. Zero stays zero.
    #[inline]
    pub fn negate(&mut self) {
        self.negative = !self.negative && !self.limbs.is_empty();
    }

    /// The absolute value.
    pub fn abs(&self) -> BigInteger {
        BigInteger {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    // MAGNITUDE STORE

    /// Limb at `index`, least significant first.
    #[inline]
    pub(crate) fn digit_at(&self, index: usize) -> Limb {
        self.limbs[index]
    }

    /// Limb at `index` multiplied by the sign of the value.
    #[inline]
    pub(crate) fn signed_digit_at(&self, index: usize) -> i64 {
        self.sign() as i64 * self.digit_at(index) as i64
    }

    #[inline]
    pub(crate) fn number_of_digits(&self) -> usize {
        self.limbs.len()
    }

    /// The most significant limb. The value must be non-zero.
    #[inline]
    pub(crate) fn leading_digit(&self) -> Limb {
        debug_assert!(!self.limbs.is_empty());
        self.limbs[self.limbs.len() - 1]
    }

    #[inline]
    pub(crate) fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    // COMPARATOR

    /// Compare the absolute values of `self` and `other`.
    #[inline]
    pub fn cmp_abs(&self, other: &BigInteger) -> Ordering {
        large::compare(&self.limbs, &other.limbs)
    }

    // ARITHMETIC CORE

    pub(crate) fn add_impl(&self, rhs: &BigInteger) -> BigInteger {
        if self.cmp_abs(rhs) == Ordering::Less {
            return rhs.add_impl(self);
        }
        if self.is_negative() {
            return -(-self).add_impl(&-rhs);
        }
        let sign = if rhs.is_negative() { -1 } else { 1 };
        BigInteger::from_parts(false, large::add_signed(&self.limbs, &rhs.limbs, sign))
    }

    pub(crate) fn sub_impl(&self, rhs: &BigInteger) -> BigInteger {
        if self.is_negative() {
            -(-self).add_impl(rhs)
        } else {
            self.add_impl(&-rhs)
        }
    }

    pub(crate) fn mul_impl(&self, rhs: &BigInteger) -> BigInteger {
        if self.is_negative() {
            return -(-self).mul_impl(rhs);
        }
        if rhs.is_negative() {
            return -self.mul_impl(&-rhs);
        }
        BigInteger::from_parts(false, large::mul(&self.limbs, &rhs.limbs))
    }

    /// Truncating division returning the quotient and the remainder.
    ///
    /// The quotient is rounded toward zero and the remainder carries the sign
    /// of the dividend, so `quotient * rhs + remainder == self`.
    ///
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// # fn main() -> big_integer::Result<()> {
    /// let (q, r) = BigInteger::from(-100).div_rem(&BigInteger::from(3))?;
    /// assert_eq!(q, -33);
    /// assert_eq!(r, -1);
    /// #     Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with `ErrorCode::DivisionByZero` if `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if rhs.is_zero() {
            return Err(Error::new(ErrorCode::DivisionByZero));
        }
        if self.is_negative() {
            let (quotient, remainder) = (-self).div_rem(rhs)?;
            return Ok((-quotient, -remainder));
        }
        if rhs.is_negative() {
            let (quotient, remainder) = self.div_rem(&-rhs)?;
            return Ok((-quotient, remainder));
        }
        let (quotient, remainder) = large::div_rem(&self.limbs, &rhs.limbs);
        Ok((
            BigInteger::from_parts(false, quotient),
            BigInteger::from_parts(false, remainder),
        ))
    }

    /// Truncating division.
    ///
    /// # Errors
    ///
    /// Fails with `ErrorCode::DivisionByZero` if `rhs` is zero.
    #[inline]
    pub fn checked_div(&self, rhs: &BigInteger) -> Result<BigInteger> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Remainder folded into `[0, rhs)`, whatever the sign of `self`.
    ///
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// # fn main() -> big_integer::Result<()> {
    /// assert_eq!(BigInteger::from(100).rem_u32(3)?, 1);
    /// assert_eq!(BigInteger::from(-100).rem_u32(3)?, 2);
    /// #     Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with `ErrorCode::DivisionByZero` if `rhs` is zero.
    pub fn rem_u32(&self, rhs: u32) -> Result<u32> {
        let divisor = BigInteger::from(rhs);
        let (_, remainder) = self.div_rem(&divisor)?;
        // |remainder| < rhs, so it fits an i64 whatever its sign.
        let remainder = remainder.to_i64()?;
        let rhs = i64::from(rhs);
        Ok(((remainder + rhs) % rhs) as u32)
    }

    /// Add one in place and return the updated value.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Subtract one in place and return the updated value.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Add one in place and return the value from before the update.
    #[inline]
    pub fn post_increment(&mut self) -> BigInteger {
        let prior = self.clone();
        *self += 1;
        prior
    }

    /// Subtract one in place and return the value from before the update.
    #[inline]
    pub fn post_decrement(&mut self) -> BigInteger {
        let prior = self.clone();
        *self -= 1;
        prior
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.sign() == other.sign() && self.cmp_abs(other) == Ordering::Equal
    }
}

impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.sign() != other.sign() {
            return self.sign().cmp(&other.sign());
        }
        match self.sign() {
            -1 => self.cmp_abs(other).reverse(),
            _ => self.cmp_abs(other),
        }
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign().hash(state);
        self.limbs.hash(state);
    }
}
