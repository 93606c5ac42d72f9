//! The unsigned arbitrary-precision integer.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::div::{div_rem_limbs, reciprocal_limbs};
use crate::error::IntegerError;
use crate::limbs;

/// A non-negative integer of unbounded size, stored as little-endian
/// base-10^8 limbs.
///
/// The representation is always canonical: at least one limb, and the
/// top limb is non-zero unless the value is the single limb `0`. Every
/// constructor and operation restores this form, so derived equality
/// and hashing are value equality.
///
/// Arithmetic operators follow the conventions of the built-in integer
/// types: `-` panics when the result would go negative, `/` and `%`
/// panic on a zero divisor, `*` panics past the transform limit. The
/// `checked_` methods report the same conditions as [`IntegerError`]
/// values instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsignedInteger {
    digits: Vec<u32>,
}

impl Default for UnsignedInteger {
    fn default() -> Self {
        Self::new()
    }
}

impl UnsignedInteger {
    /// The value zero.
    #[must_use]
    pub fn new() -> Self {
        Self { digits: vec![0] }
    }

    pub(crate) fn from_limbs(mut digits: Vec<u32>) -> Self {
        limbs::canonicalize(&mut digits);
        Self { digits }
    }

    pub(crate) fn limbs(&self) -> &[u32] {
        &self.digits
    }

    /// Number of base-10^8 limbs in the canonical representation.
    #[must_use]
    pub fn limb_len(&self) -> usize {
        self.digits.len()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.digits)
    }

    /// Add one in place.
    pub fn inc(&mut self) {
        limbs::increment(&mut self.digits);
    }

    /// Subtract one in place.
    ///
    /// # Errors
    ///
    /// [`IntegerError::DecrementOfZero`] when the value is zero.
    pub fn try_dec(&mut self) -> Result<(), IntegerError> {
        if self.is_zero() {
            return Err(IntegerError::DecrementOfZero);
        }
        limbs::decrement(&mut self.digits);
        Ok(())
    }

    /// Subtract one in place.
    ///
    /// # Panics
    ///
    /// Panics when the value is zero.
    pub fn dec(&mut self) {
        unwrap_op(self.try_dec());
    }

    /// Difference, or an error when `other` is larger.
    ///
    /// # Errors
    ///
    /// [`IntegerError::SubtractionUnderflow`] when `self < other`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, IntegerError> {
        if limbs::compare(&self.digits, &other.digits) == Ordering::Less {
            return Err(IntegerError::SubtractionUnderflow);
        }
        let mut digits = self.digits.clone();
        limbs::sub_assign(&mut digits, &other.digits);
        Ok(Self { digits })
    }

    /// Product, or an error when an operand exceeds the transform limit.
    ///
    /// # Errors
    ///
    /// [`IntegerError::TransformLimitExceeded`] when either operand is
    /// longer than [`decint_fft::TRANSFORM_LIMIT`] limbs.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, IntegerError> {
        Ok(Self::from_limbs(crate::mul::multiply(
            &self.digits,
            &other.digits,
        )?))
    }

    /// Quotient and remainder in one division.
    ///
    /// # Errors
    ///
    /// [`IntegerError::DivisionByZero`] when `divisor` is zero, or a
    /// transform-limit error from the internal multiplications.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), IntegerError> {
        if divisor.is_zero() {
            return Err(IntegerError::DivisionByZero);
        }
        let (q, r) = div_rem_limbs(&self.digits, &divisor.digits)?;
        Ok((Self { digits: q }, Self { digits: r }))
    }

    /// Quotient of `self / divisor`.
    ///
    /// # Errors
    ///
    /// [`IntegerError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, IntegerError> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Remainder of `self % divisor`.
    ///
    /// # Errors
    ///
    /// [`IntegerError::ModulusByZero`] when `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, IntegerError> {
        if divisor.is_zero() {
            return Err(IntegerError::ModulusByZero);
        }
        Ok(self.div_rem(divisor)?.1)
    }

    /// `floor(BASE^precision / self)`, possibly one low but never more:
    /// the result `r` satisfies `r * self <= BASE^precision < (r + 2) * self`.
    ///
    /// # Errors
    ///
    /// [`IntegerError::DivisionByZero`] when `self` is zero.
    pub fn reciprocal(&self, precision: usize) -> Result<Self, IntegerError> {
        if self.is_zero() {
            return Err(IntegerError::DivisionByZero);
        }
        Ok(Self::from_limbs(reciprocal_limbs(&self.digits, precision)?))
    }
}

fn unwrap_op<T>(result: Result<T, IntegerError>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

impl Ord for UnsignedInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        limbs::compare(&self.digits, &other.digits)
    }
}

impl PartialOrd for UnsignedInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&UnsignedInteger> for &UnsignedInteger {
    type Output = UnsignedInteger;

    fn add(self, other: &UnsignedInteger) -> UnsignedInteger {
        let mut result = self.clone();
        result += other;
        result
    }
}

impl Sub<&UnsignedInteger> for &UnsignedInteger {
    type Output = UnsignedInteger;

    /// # Panics
    ///
    /// Panics when `other` is larger than `self`.
    fn sub(self, other: &UnsignedInteger) -> UnsignedInteger {
        unwrap_op(self.checked_sub(other))
    }
}

impl Mul<&UnsignedInteger> for &UnsignedInteger {
    type Output = UnsignedInteger;

    /// # Panics
    ///
    /// Panics when an operand exceeds the transform limit.
    fn mul(self, other: &UnsignedInteger) -> UnsignedInteger {
        unwrap_op(self.checked_mul(other))
    }
}

impl Div<&UnsignedInteger> for &UnsignedInteger {
    type Output = UnsignedInteger;

    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn div(self, other: &UnsignedInteger) -> UnsignedInteger {
        unwrap_op(self.checked_div(other))
    }
}

impl Rem<&UnsignedInteger> for &UnsignedInteger {
    type Output = UnsignedInteger;

    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn rem(self, other: &UnsignedInteger) -> UnsignedInteger {
        unwrap_op(self.checked_rem(other))
    }
}

/// Forward the owned/borrowed operand combinations to the `&T op &T`
/// implementation.
macro_rules! forward_value_binop {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl $imp<$t> for &$t {
            type Output = $t;

            fn $method(self, other: $t) -> $t {
                $imp::$method(self, &other)
            }
        }

        impl $imp<&$t> for $t {
            type Output = $t;

            fn $method(self, other: &$t) -> $t {
                $imp::$method(&self, other)
            }
        }

        impl $imp<$t> for $t {
            type Output = $t;

            fn $method(self, other: $t) -> $t {
                $imp::$method(&self, &other)
            }
        }
    };
}
pub(crate) use forward_value_binop;

forward_value_binop!(impl Add, add for UnsignedInteger);
forward_value_binop!(impl Sub, sub for UnsignedInteger);
forward_value_binop!(impl Mul, mul for UnsignedInteger);
forward_value_binop!(impl Div, div for UnsignedInteger);
forward_value_binop!(impl Rem, rem for UnsignedInteger);

impl AddAssign<&UnsignedInteger> for UnsignedInteger {
    fn add_assign(&mut self, other: &UnsignedInteger) {
        limbs::add_assign(&mut self.digits, &other.digits);
    }
}

impl SubAssign<&UnsignedInteger> for UnsignedInteger {
    fn sub_assign(&mut self, other: &UnsignedInteger) {
        if limbs::compare(&self.digits, &other.digits) == Ordering::Less {
            panic!("{}", IntegerError::SubtractionUnderflow);
        }
        limbs::sub_assign(&mut self.digits, &other.digits);
    }
}

impl MulAssign<&UnsignedInteger> for UnsignedInteger {
    fn mul_assign(&mut self, other: &UnsignedInteger) {
        *self = unwrap_op(self.checked_mul(other));
    }
}

impl DivAssign<&UnsignedInteger> for UnsignedInteger {
    fn div_assign(&mut self, other: &UnsignedInteger) {
        *self = unwrap_op(self.checked_div(other));
    }
}

impl RemAssign<&UnsignedInteger> for UnsignedInteger {
    fn rem_assign(&mut self, other: &UnsignedInteger) {
        *self = unwrap_op(self.checked_rem(other));
    }
}

/// Forward the owned-operand assign forms to the borrowed ones.
macro_rules! forward_value_assign {
    (impl $imp:ident, $method:ident for $t:ty) => {
        impl $imp<$t> for $t {
            fn $method(&mut self, other: $t) {
                $imp::$method(self, &other);
            }
        }
    };
}
pub(crate) use forward_value_assign;

forward_value_assign!(impl AddAssign, add_assign for UnsignedInteger);
forward_value_assign!(impl SubAssign, sub_assign for UnsignedInteger);
forward_value_assign!(impl MulAssign, mul_assign for UnsignedInteger);
forward_value_assign!(impl DivAssign, div_assign for UnsignedInteger);
forward_value_assign!(impl RemAssign, rem_assign for UnsignedInteger);

impl Zero for UnsignedInteger {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        UnsignedInteger::is_zero(self)
    }
}

impl One for UnsignedInteger {
    fn one() -> Self {
        Self { digits: vec![1] }
    }
}
