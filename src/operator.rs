//! Operator overloads for `BigInteger`.
//!
//! Every binary operator is implemented once in terms of the borrowed
//! `&BigInteger op &BigInteger` form; the owned, `i64` and compound-assignment
//! variants forward to it.

use crate::integer::BigInteger;
use crate::lib::iter::{Product, Sum};
use core::cmp::Ordering;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign,
};

impl Neg for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(mut self) -> BigInteger {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl BigInteger {
    fn div_impl(&self, rhs: &BigInteger) -> BigInteger {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $impl_fn:ident) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                self.$impl_fn(rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$impl_fn(&rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                self.$impl_fn(rhs)
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                self.$impl_fn(&rhs)
            }
        }

        impl $imp<i64> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: i64) -> BigInteger {
                self.$impl_fn(&BigInteger::from(rhs))
            }
        }

        impl $imp<i64> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: i64) -> BigInteger {
                self.$impl_fn(&BigInteger::from(rhs))
            }
        }

        impl $imp<&BigInteger> for i64 {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                BigInteger::from(self).$impl_fn(rhs)
            }
        }

        impl $imp<BigInteger> for i64 {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                BigInteger::from(self).$impl_fn(&rhs)
            }
        }

        impl $assign_imp<&BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: &BigInteger) {
                *self = self.$impl_fn(rhs);
            }
        }

        impl $assign_imp<BigInteger> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: BigInteger) {
                *self = self.$impl_fn(&rhs);
            }
        }

        impl $assign_imp<i64> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: i64) {
                *self = self.$impl_fn(&BigInteger::from(rhs));
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add_impl);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_impl);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_impl);
// Panics on a zero divisor, like the primitive integers.
forward_binop!(Div, div, DivAssign, div_assign, div_impl);

impl Rem<u32> for &BigInteger {
    type Output = u32;

    /// Remainder folded into `[0, rhs)`. Panics if `rhs` is zero.
    fn rem(self, rhs: u32) -> u32 {
        match self.rem_u32(rhs) {
            Ok(remainder) => remainder,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

impl Rem<u32> for BigInteger {
    type Output = u32;

    #[inline]
    fn rem(self, rhs: u32) -> u32 {
        &self % rhs
    }
}

impl PartialEq<i64> for BigInteger {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        *self == BigInteger::from(*other)
    }
}

impl PartialEq<BigInteger> for i64 {
    #[inline]
    fn eq(&self, other: &BigInteger) -> bool {
        other == self
    }
}

impl PartialOrd<i64> for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(self.cmp(&BigInteger::from(*other)))
    }
}

impl PartialOrd<BigInteger> for i64 {
    #[inline]
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> BigInteger {
        iter.fold(BigInteger::new(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> BigInteger {
        iter.fold(BigInteger::new(), |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> BigInteger {
        iter.fold(BigInteger::from(1), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> BigInteger {
        iter.fold(BigInteger::from(1), |acc, x| acc * x)
    }
}
