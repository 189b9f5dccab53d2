//! When parsing, dividing or narrowing a `BigInteger` goes wrong.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::{error, io};

/// This type represents all possible errors that can occur when operating on
/// a `BigInteger`.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `big_integer::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Byte offset of the offending token when the error was raised while
    /// scanning a text stream.
    ///
    /// Errors that do not originate from stream input report offset 0.
    pub fn offset(&self) -> usize {
        self.err.offset
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Argument` - a base outside `2..=36` or an illegal digit
    /// - `Category::Arithmetic` - division or remainder by zero
    /// - `Category::Range` - a value that does not fit the requested native type
    /// - `Category::Io` - failure to read bytes from an IO stream
    /// - `Category::Eof` - the input ended where a number was required
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidBase(_) | ErrorCode::InvalidDigit { .. } => Category::Argument,
            ErrorCode::DivisionByZero => Category::Arithmetic,
            ErrorCode::Overflow => Category::Range,
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::EofWhileParsingNumber => Category::Eof,
        }
    }

    /// Returns true if this error was caused by an invalid base or digit.
    pub fn is_argument(&self) -> bool {
        self.classify() == Category::Argument
    }

    /// Returns true if this error was caused by a zero divisor.
    pub fn is_arithmetic(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    /// Returns true if this error was caused by a value outside the range of
    /// the target type.
    pub fn is_range(&self) -> bool {
        self.classify() == Category::Range
    }

    /// Returns true if this error was caused by a failure to read bytes from
    /// an IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by prematurely reaching the end
    /// of the input.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }
}

/// Categorizes the cause of a `big_integer::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a base outside `2..=36` or by a character that
    /// is not a digit of the requested base.
    Argument,

    /// The error was caused by dividing by zero.
    Arithmetic,

    /// The error was caused by a value that does not fit the requested
    /// native integer type.
    Range,

    /// The error was caused by a failure to read bytes from an IO stream.
    Io,

    /// The error was caused by prematurely reaching the end of the input.
    Eof,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `big_integer::Error` into an `io::Error`.
    ///
    /// Argument, arithmetic and range errors are turned into `InvalidData` IO
    /// errors. EOF errors are turned into `UnexpectedEof` IO errors.
    fn from(j: Error) -> Self {
        if let ErrorCode::Io(err) = j.err.code {
            err
        } else {
            match j.classify() {
                Category::Io => unreachable!(),
                Category::Argument | Category::Arithmetic | Category::Range => {
                    io::Error::new(io::ErrorKind::InvalidData, j)
                }
                Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, j),
            }
        }
    }
}

struct ErrorImpl {
    code: ErrorCode,
    offset: usize,
}

/// This type describes all possible errors that can occur when operating on a
/// `BigInteger`.
pub enum ErrorCode {
    /// The requested base is outside `2..=36`.
    InvalidBase(u32),

    /// The byte at `index` is not a digit of the requested base.
    InvalidDigit {
        /// Zero-based byte index into the parsed text.
        index: usize,
    },

    /// Division or remainder by the zero value.
    DivisionByZero,

    /// The value lies outside the range of the target native integer.
    Overflow,

    /// The input ended while a number was expected.
    EofWhileParsingNumber,

    /// Some IO error occurred while reading a stream.
    #[cfg(feature = "std")]
    Io(io::Error),
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidBase(base) => f.debug_tuple("InvalidBase").field(base).finish(),
            ErrorCode::InvalidDigit { index } => {
                f.debug_struct("InvalidDigit").field("index", index).finish()
            }
            ErrorCode::DivisionByZero => f.write_str("DivisionByZero"),
            ErrorCode::Overflow => f.write_str("Overflow"),
            ErrorCode::EofWhileParsingNumber => f.write_str("EofWhileParsingNumber"),
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => f.debug_tuple("Io").finish(),
        }
    }
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::InvalidBase(l0), ErrorCode::InvalidBase(r0)) => l0 == r0,
            (ErrorCode::InvalidDigit { index: l0 }, ErrorCode::InvalidDigit { index: r0 }) => {
                l0 == r0
            }
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset: 0 }),
        }
    }

    #[cold]
    pub(crate) fn at(code: ErrorCode, offset: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, offset }),
        }
    }

    /// Wrap an IO error from a reader.
    #[doc(hidden)]
    #[cold]
    #[cfg(feature = "std")]
    pub fn io(error: io::Error) -> Self {
        Error::new(ErrorCode::Io(error))
    }

    /// Rebase an error raised while parsing one token so that it points into
    /// the surrounding input: digit indices shift by the bytes stripped from
    /// the front of the token and the token's own offset is recorded.
    #[cold]
    pub(crate) fn fix_position(self, stripped: usize, offset: usize) -> Self {
        let code = match self.err.code {
            ErrorCode::InvalidDigit { index } => ErrorCode::InvalidDigit {
                index: index + stripped,
            },
            code => code,
        };
        Error::at(code, offset)
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidBase(base) => {
                write!(f, "invalid base {}, expected a base in 2..=36", base)
            }
            ErrorCode::InvalidDigit { index } => write!(f, "invalid digit at index {}", index),
            ErrorCode::DivisionByZero => f.write_str("division by zero"),
            ErrorCode::Overflow => f.write_str("integer overflow"),
            ErrorCode::EofWhileParsingNumber => f.write_str("EOF while parsing a number"),
            #[cfg(feature = "std")]
            ErrorCode::Io(err) => Display::fmt(err, f),
        }
    }
}

impl serde::de::StdError for Error {
    #[cfg(feature = "std")]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.err.code {
            ErrorCode::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.offset == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at offset {}", self.code, self.offset)
        }
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, offset: {})", self.err.code, self.err.offset)
    }
}
