//! Conversion to digit strings in bases 2 through 36.

use crate::error::Result;
use crate::integer::BigInteger;
use crate::lib::Vec;
use crate::math::{small, Limb, RADIX_DIGITS};
use crate::parse::check_base;
use alloc::string::String;
use core::fmt::{self, Binary, Debug, Display, LowerHex, Octal, UpperHex};

#[inline]
fn digit_to_char(digit: Limb) -> u8 {
    if digit < 10 {
        b'0' + digit as u8
    } else {
        b'a' + (digit - 10) as u8
    }
}

/// The prefix C++ streams print under `showbase`.
#[inline]
pub(crate) fn base_prefix(base: u32) -> &'static str {
    match base {
        8 => "0",
        16 => "0x",
        _ => "",
    }
}

impl BigInteger {
    /// Digits of the absolute value in `base`, most significant first and
    /// without sign or prefix. `base` must already be validated.
    pub(crate) fn magnitude_digits(&self, base: u32) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        if base == 10 {
            return self.decimal_digits();
        }

        // Peel off the least significant digit with a short division until
        // nothing is left, then flip the collected digits.
        let mut reversed = Vec::new();
        let mut magnitude = self.limbs().to_vec();
        while !magnitude.is_empty() {
            let (quotient, remainder) = small::div_rem(&magnitude, base as Limb);
            reversed.push(digit_to_char(remainder));
            magnitude = quotient;
        }
        reversed.iter().rev().map(|&c| char::from(c)).collect()
    }

    /// Base 10 maps onto the limbs directly: every limb below the leading
    /// one is exactly nine zero-padded digits.
    fn decimal_digits(&self) -> String {
        let mut buffer = itoa::Buffer::new();
        let mut out = String::with_capacity(self.number_of_digits() * RADIX_DIGITS);
        out.push_str(buffer.format(self.leading_digit()));
        for &limb in self.limbs().iter().rev().skip(1) {
            let digits = buffer.format(limb);
            for _ in digits.len()..RADIX_DIGITS {
                out.push('0');
            }
            out.push_str(digits);
        }
        out
    }

    /// Render the value in `base` with lowercase letters for digits above 9.
    ///
    /// With `show_base`, octal values get a `0` prefix and hexadecimal values
    /// a `0x` prefix, placed after the sign. Other bases have no prefix.
    ///
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// # fn main() -> big_integer::Result<()> {
    /// assert_eq!(BigInteger::from(255).to_string_radix(16, false)?, "ff");
    /// assert_eq!(BigInteger::from(-255).to_string_radix(16, true)?, "-0xff");
    /// assert_eq!(BigInteger::from(8).to_string_radix(8, true)?, "010");
    /// #     Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with `ErrorCode::InvalidBase` if `base` is outside `2..=36`.
    pub fn to_string_radix(&self, base: u32, show_base: bool) -> Result<String> {
        check_base(base)?;
        let digits = self.magnitude_digits(base);
        let mut out = String::with_capacity(digits.len() + 3);
        if self.is_negative() {
            out.push('-');
        }
        if show_base {
            out.push_str(base_prefix(base));
        }
        out.push_str(&digits);
        Ok(out)
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &self.magnitude_digits(10))
    }
}

impl LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0x", &self.magnitude_digits(16))
    }
}

impl UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits = self.magnitude_digits(16).to_ascii_uppercase();
        f.pad_integral(!self.is_negative(), "0x", &digits)
    }
}

impl Octal for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0o", &self.magnitude_digits(8))
    }
}

impl Binary for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "0b", &self.magnitude_digits(2))
    }
}

impl Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInteger({})", self)
    }
}
