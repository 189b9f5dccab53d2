//! Serialize a `BigInteger` as its decimal string.

use crate::integer::BigInteger;
use serde::ser::{Serialize, Serializer};

impl Serialize for BigInteger {
    /// Decimal text keeps every digit, whatever the native integer range of
    /// the target format.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
