use crate::error::{Error, ErrorCode, Result};
use crate::integer::BigInteger;
use crate::math::{self, RADIX};

macro_rules! from_signed {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(value: $ty) -> Self {
                    // `unsigned_abs` keeps the minimum value of the type exact.
                    let magnitude = (value as i128).unsigned_abs();
                    BigInteger::from_parts(value < 0, math::from_u128(magnitude))
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for BigInteger {
                #[inline]
                fn from(value: $ty) -> Self {
                    BigInteger::from_parts(false, math::from_u128(value as u128))
                }
            }
        )*
    };
}

from_signed!(i8 i16 i32 i64 i128 isize);
from_unsigned!(u8 u16 u32 u64 u128 usize);

impl BigInteger {
    /// Narrow to an `i64`.
    ///
    /// ```
    /// use big_integer::BigInteger;
    ///
    /// let max = BigInteger::from(i64::MAX);
    /// assert_eq!(max.to_i64().unwrap(), i64::MAX);
    /// assert!((max + 1).to_i64().unwrap_err().is_range());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails with `ErrorCode::Overflow` if the value lies outside
    /// `i64::MIN..=i64::MAX`.
    pub fn to_i64(&self) -> Result<i64> {
        if *self > BigInteger::from(i64::MAX) || *self < BigInteger::from(i64::MIN) {
            return Err(Error::new(ErrorCode::Overflow));
        }
        // Accumulate signed terms so that i64::MIN never passes through its
        // unrepresentable absolute value. The power stops growing once the
        // next step would overflow; limbs beyond that point are zero.
        let mut result: i64 = 0;
        let mut power: i64 = 1;
        for index in 0..self.number_of_digits() {
            result += self.signed_digit_at(index) * power;
            if let Some(next) = power.checked_mul(i64::from(RADIX)) {
                power = next;
            }
        }
        Ok(result)
    }
}

impl TryFrom<&BigInteger> for i64 {
    type Error = Error;

    #[inline]
    fn try_from(value: &BigInteger) -> Result<i64> {
        value.to_i64()
    }
}

impl TryFrom<BigInteger> for i64 {
    type Error = Error;

    #[inline]
    fn try_from(value: BigInteger) -> Result<i64> {
        value.to_i64()
    }
}
