//! Conversion from digit strings in bases 2 through 36.

use crate::error::{Error, ErrorCode, Result};
use crate::integer::BigInteger;
use crate::lib::Vec;
use crate::math::{large, small, Limb};
use core::str::FromStr;

/// Smallest supported base.
pub(crate) const MIN_BASE: u32 = 2;

/// Largest supported base: the ten decimal digits plus 26 letters.
pub(crate) const MAX_BASE: u32 = 36;

#[inline]
pub(crate) fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(Error::new(ErrorCode::InvalidBase(base)))
    }
}

// Convert u8 to digit. Letters are accepted in either case.
#[inline]
fn to_digit(c: u8, base: u32) -> Option<Limb> {
    (c as char).to_digit(base)
}

impl BigInteger {
    /// Parse an optionally `-`-prefixed digit string in the given base.
    ///
    /// Digits above 9 are the letters `a` through `z`, in either case. Input
    /// without any digit, such as `""` or `"-"`, is zero.
    ///
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// # fn main() -> big_integer::Result<()> {
    /// assert_eq!(BigInteger::from_str_radix("ff", 16)?, 255);
    /// assert_eq!(BigInteger::from_str_radix("-Zz", 36)?, -1295);
    /// #     Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with `ErrorCode::InvalidBase` if `base` is outside `2..=36`, and
    /// with `ErrorCode::InvalidDigit` naming the first byte that is not a
    /// digit of `base`.
    pub fn from_str_radix(text: &str, base: u32) -> Result<BigInteger> {
        check_base(base)?;

        let bytes = text.as_bytes();
        let negative = bytes.first() == Some(&b'-');
        let start = usize::from(negative);
        let digits = &bytes[start..];

        // Validate everything before doing any arithmetic.
        let values = digits
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                to_digit(c, base)
                    .ok_or_else(|| Error::new(ErrorCode::InvalidDigit { index: start + i }))
            })
            .collect::<Result<Vec<Limb>>>()?;

        // Horner evaluation from the least significant digit up.
        let mut total = Vec::new();
        let mut power: Vec<Limb> = Vec::from([1]);
        for &value in values.iter().rev() {
            total = large::add(&total, &small::mul(&power, value));
            small::imul(&mut power, base);
        }
        Ok(BigInteger::from_parts(negative, total))
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    /// Parse a decimal integer with an optional leading `-`.
    #[inline]
    fn from_str(s: &str) -> Result<BigInteger> {
        BigInteger::from_str_radix(s, 10)
    }
}
