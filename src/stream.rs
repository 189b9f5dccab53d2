//! Reading and writing `BigInteger`s as whitespace separated text.
//!
//! This mirrors integer I/O on a text stream: the active [`Radix`] decides
//! how tokens are read and how values are printed, and `show_base` adds the
//! conventional `0x` / `0` prefix after the sign.
//!
//! ```
//! use big_integer::{BigInteger, Radix, Scanner};
//!
//! # fn main() -> big_integer::Result<()> {
//! let mut scanner = Scanner::with_radix("0xff -0x10 7f", Radix::Hexadecimal);
//! assert_eq!(scanner.next_integer()?, 255);
//! assert_eq!(scanner.next_integer()?, -16);
//! assert_eq!(scanner.next_integer()?, 127);
//!
//! let value = BigInteger::from(-31);
//! assert_eq!(value.display(Radix::Hexadecimal, true).to_string(), "-0x1f");
//! assert_eq!(value.display(Radix::Octal, true).to_string(), "-037");
//! #     Ok(())
//! # }
//! ```

use crate::error::{Error, ErrorCode, Result};
use crate::format::base_prefix;
use crate::integer::BigInteger;
use alloc::string::String;
use core::fmt::{self, Display};

#[cfg(feature = "std")]
use crate::lib::Vec;
#[cfg(feature = "std")]
use std::io;

/// Numeric base mode of a text stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 10, no prefix.
    #[default]
    Decimal,
    /// Base 8, prefix `0`.
    Octal,
    /// Base 16, prefix `0x`.
    Hexadecimal,
}

impl Radix {
    /// The numeric base of this mode.
    #[inline]
    pub fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Octal => 8,
            Radix::Hexadecimal => 16,
        }
    }

    /// Length of the base prefix at the start of `digits`, if there is one.
    ///
    /// A lone `0` in octal mode is the number zero rather than a prefix.
    fn prefix_len(self, digits: &str) -> usize {
        let bytes = digits.as_bytes();
        match self {
            Radix::Hexadecimal if bytes.len() >= 2 && bytes[0] == b'0' => match bytes[1] {
                b'x' | b'X' => 2,
                _ => 0,
            },
            Radix::Octal if bytes.len() >= 2 && bytes[0] == b'0' => 1,
            _ => 0,
        }
    }
}

/// Parse a single token the way a stream in `radix` mode reads an integer.
///
/// A leading `-` is taken off as a sign, a base prefix is skipped when it is
/// present, the remaining digits are parsed in the mode's base and the sign
/// is applied by multiplication.
///
/// ```
/// use big_integer::{stream, Radix};
///
/// # fn main() -> big_integer::Result<()> {
/// assert_eq!(stream::parse_token("-0x1F", Radix::Hexadecimal)?, -31);
/// assert_eq!(stream::parse_token("1F", Radix::Hexadecimal)?, 31);
/// assert_eq!(stream::parse_token("017", Radix::Octal)?, 15);
/// #     Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails with `ErrorCode::InvalidDigit` if the token is not an integer in
/// the mode's base. The index counts from the start of the token.
pub fn parse_token(token: &str, radix: Radix) -> Result<BigInteger> {
    parse_token_at(token, radix, 0)
}

fn parse_token_at(token: &str, radix: Radix, offset: usize) -> Result<BigInteger> {
    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, token),
    };
    let stripped = token.len() - unsigned.len() + radix.prefix_len(unsigned);
    let digits = &token[stripped..];
    if digits.starts_with('-') {
        return Err(Error::at(ErrorCode::InvalidDigit { index: stripped }, offset));
    }
    let magnitude = BigInteger::from_str_radix(digits, radix.base())
        .map_err(|err| err.fix_position(stripped, offset))?;
    Ok(magnitude * sign)
}

#[inline]
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Iterator that reads whitespace separated integers from a string.
///
/// Every token is consumed whether or not it parses, so iteration continues
/// after an invalid token.
pub struct Scanner<'a> {
    input: &'a str,
    index: usize,
    radix: Radix,
}

impl<'a> Scanner<'a> {
    /// Scan decimal integers from `input`.
    pub fn new(input: &'a str) -> Self {
        Scanner::with_radix(input, Radix::Decimal)
    }

    /// Scan integers from `input` in the given mode.
    pub fn with_radix(input: &'a str, radix: Radix) -> Self {
        Scanner {
            input,
            index: 0,
            radix,
        }
    }

    /// The current mode.
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Switch modes; affects the tokens that follow.
    pub fn set_radix(&mut self, radix: Radix) {
        self.radix = radix;
    }

    /// Returns the number of bytes so far consumed from the input.
    pub fn byte_offset(&self) -> usize {
        self.index
    }

    /// Read the next integer.
    ///
    /// # Errors
    ///
    /// Fails with `ErrorCode::EofWhileParsingNumber` if only whitespace is
    /// left, or with the parse error of the token otherwise. Errors carry the
    /// byte offset of the token.
    pub fn next_integer(&mut self) -> Result<BigInteger> {
        match self.next() {
            Some(result) => result,
            None => Err(Error::at(ErrorCode::EofWhileParsingNumber, self.index)),
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let bytes = self.input.as_bytes();
        while self.index < bytes.len() && is_space(bytes[self.index]) {
            self.index += 1;
        }
        if self.index == bytes.len() {
            return None;
        }
        let start = self.index;
        while self.index < bytes.len() && !is_space(bytes[self.index]) {
            self.index += 1;
        }
        Some((start, &self.input[start..self.index]))
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<BigInteger>;

    fn next(&mut self) -> Option<Result<BigInteger>> {
        let (start, token) = self.next_token()?;
        Some(parse_token_at(token, self.radix, start))
    }
}

/// Read every integer from an IO stream.
///
/// The content of the reader is read eagerly into a string and then scanned
/// in the given mode.
///
/// # Errors
///
/// Fails on an IO error, on input that is not UTF-8 (reported as an IO
/// error) and on the first token that does not parse.
#[cfg(feature = "std")]
pub fn from_reader<R>(mut reader: R, radix: Radix) -> Result<Vec<BigInteger>>
where
    R: io::Read,
{
    let mut s = String::new();
    if let Err(io_err) = reader.read_to_string(&mut s) {
        return Err(Error::io(io_err));
    }
    Scanner::with_radix(&s, radix).collect()
}

/// Helper returned by [`BigInteger::display`].
pub struct Formatted<'a> {
    value: &'a BigInteger,
    radix: Radix,
    show_base: bool,
}

impl BigInteger {
    /// Render the value the way a text stream in `radix` mode would, with the
    /// sign ahead of the optional base prefix.
    pub fn display(&self, radix: Radix, show_base: bool) -> Formatted<'_> {
        Formatted {
            value: self,
            radix,
            show_base,
        }
    }
}

impl<'a> Display for Formatted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let base = self.radix.base();
        let mut out = String::new();
        if self.value.is_negative() {
            out.push('-');
        }
        if self.show_base {
            out.push_str(base_prefix(base));
        }
        out.push_str(&self.value.magnitude_digits(base));
        f.pad(&out)
    }
}
