//! # big_integer
//!
//! Arbitrary-precision signed integers stored in sign-magnitude form over
//! base 10<sup>9</sup> limbs.
//!
//! ```
//! use big_integer::BigInteger;
//!
//! # fn main() -> big_integer::Result<()> {
//! let a = BigInteger::from_str_radix("12345678901234567890", 10)?;
//! let b = &a * 2;
//! assert_eq!(b.to_string(), "24691357802469135780");
//!
//! let (q, r) = BigInteger::from(100).div_rem(&BigInteger::from(3))?;
//! assert_eq!((q, r), (BigInteger::from(33), BigInteger::from(1)));
//!
//! assert_eq!(BigInteger::from(-100).rem_u32(3)?, 2);
//! assert_eq!(BigInteger::from(255).to_string_radix(16, true)?, "0xff");
//! #     Ok(())
//! # }
//! ```
//!
//! # Operators
//!
//! `+ - * /` and their compound forms are implemented between two
//! `BigInteger`s (owned or borrowed) and between a `BigInteger` and an `i64`
//! on either side. Comparisons likewise accept an `i64` on either side. As
//! with the primitive integers, `/` and `%` panic on a zero divisor; use
//! [`BigInteger::checked_div`], [`BigInteger::div_rem`] or
//! [`BigInteger::rem_u32`] to receive an [`Error`] instead.
//!
//! # Text streams
//!
//! The [`stream`] module reads whitespace separated integers in a chosen
//! [`Radix`] and renders values the way a C++ stream in `hex`/`oct` with
//! `showbase` would.
//!
//! # Serde
//!
//! `BigInteger` serializes as a decimal string and deserializes from either a
//! string or any native integer.

#![doc(html_root_url = "https://docs.rs/big_integer/0.1.0")]
// Ignored clippy lints
#![allow(clippy::comparison_chain, clippy::needless_doctest_main)]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("big_integer requires that either `std` (default) or `alloc` feature is enabled");

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

extern crate serde_core as serde;

/// Facade around the core features for name mangling.
pub(crate) mod lib {
    pub(crate) use alloc::vec::Vec;
    pub(crate) use core::{cmp, iter};
}

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::integer::BigInteger;
#[doc(inline)]
pub use crate::stream::{Radix, Scanner};

#[cfg(feature = "std")]
#[doc(inline)]
pub use crate::stream::from_reader;

mod convert;
mod de;
pub mod error;
mod format;
mod integer;
mod math;
mod operator;
mod parse;
mod ser;
pub mod stream;
