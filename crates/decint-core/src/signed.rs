//! The signed wrapper: an unsigned magnitude plus a sign flag.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use num_traits::{One, Zero};

use crate::error::IntegerError;
use crate::unsigned::{forward_value_assign, forward_value_binop, UnsignedInteger};

/// A signed integer of unbounded size.
///
/// Composition, not layout tricks: the magnitude is a plain
/// [`UnsignedInteger`] field and the sign a flag beside it. The sign is
/// zero-normalized (a zero magnitude always carries `negative ==
/// false`), so derived equality is value equality.
///
/// Division truncates toward zero; the remainder keeps the dividend's
/// sign (or is zero), so `q * divisor + r == dividend` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SignedInteger {
    magnitude: UnsignedInteger,
    negative: bool,
}

impl SignedInteger {
    /// The value zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            magnitude: UnsignedInteger::new(),
            negative: false,
        }
    }

    pub(crate) fn from_parts(magnitude: UnsignedInteger, negative: bool) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self {
            magnitude,
            negative,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Borrow the absolute value.
    #[must_use]
    pub fn magnitude(&self) -> &UnsignedInteger {
        &self.magnitude
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            magnitude: self.magnitude.clone(),
            negative: false,
        }
    }

    /// `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(&self) -> i32 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Add one in place.
    pub fn inc(&mut self) {
        if self.negative {
            self.magnitude.dec();
            self.negative = !self.magnitude.is_zero();
        } else {
            self.magnitude.inc();
        }
    }

    /// Subtract one in place. Crosses zero freely.
    pub fn dec(&mut self) {
        if self.negative {
            self.magnitude.inc();
        } else if self.magnitude.is_zero() {
            self.magnitude.inc();
            self.negative = true;
        } else {
            self.magnitude.dec();
        }
    }

    fn add_with_sign(&self, other_magnitude: &UnsignedInteger, other_negative: bool) -> Self {
        if self.negative == other_negative {
            return Self::from_parts(&self.magnitude + other_magnitude, self.negative);
        }
        match self.magnitude.cmp(other_magnitude) {
            Ordering::Less => {
                Self::from_parts(other_magnitude - &self.magnitude, other_negative)
            }
            _ => Self::from_parts(&self.magnitude - other_magnitude, self.negative),
        }
    }

    /// Product, or an error when a magnitude exceeds the transform limit.
    ///
    /// # Errors
    ///
    /// [`IntegerError::TransformLimitExceeded`].
    pub fn checked_mul(&self, other: &Self) -> Result<Self, IntegerError> {
        let magnitude = self.magnitude.checked_mul(&other.magnitude)?;
        Ok(Self::from_parts(magnitude, self.negative ^ other.negative))
    }

    /// Truncated quotient and remainder in one division.
    ///
    /// # Errors
    ///
    /// [`IntegerError::DivisionByZero`] when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), IntegerError> {
        let (q, r) = self.magnitude.div_rem(&divisor.magnitude)?;
        Ok((
            Self::from_parts(q, self.negative ^ divisor.negative),
            Self::from_parts(r, self.negative),
        ))
    }

    /// Truncated quotient.
    ///
    /// # Errors
    ///
    /// [`IntegerError::DivisionByZero`] when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, IntegerError> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Remainder with the dividend's sign.
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
}

impl From<UnsignedInteger> for SignedInteger {
    fn from(magnitude: UnsignedInteger) -> Self {
        Self {
            magnitude,
            negative: false,
        }
    }
}

impl TryFrom<&SignedInteger> for UnsignedInteger {
    type Error = IntegerError;

    fn try_from(value: &SignedInteger) -> Result<Self, IntegerError> {
        if value.negative {
            return Err(IntegerError::NegativeValue);
        }
        Ok(value.magnitude.clone())
    }
}

impl Ord for SignedInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for SignedInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &SignedInteger {
    type Output = SignedInteger;

    fn neg(self) -> SignedInteger {
        SignedInteger::from_parts(self.magnitude.clone(), !self.negative)
    }
}

impl Neg for SignedInteger {
    type Output = SignedInteger;

    fn neg(self) -> SignedInteger {
        let negative = !self.negative;
        SignedInteger::from_parts(self.magnitude, negative)
    }
}

impl Add<&SignedInteger> for &SignedInteger {
    type Output = SignedInteger;

    fn add(self, other: &SignedInteger) -> SignedInteger {
        self.add_with_sign(&other.magnitude, other.negative)
    }
}

impl Sub<&SignedInteger> for &SignedInteger {
    type Output = SignedInteger;

    fn sub(self, other: &SignedInteger) -> SignedInteger {
        // Subtraction is addition with the second sign flipped.
        self.add_with_sign(&other.magnitude, !other.negative && !other.is_zero())
    }
}

impl Mul<&SignedInteger> for &SignedInteger {
    type Output = SignedInteger;

    /// # Panics
    ///
    /// Panics when a magnitude exceeds the transform limit.
    fn mul(self, other: &SignedInteger) -> SignedInteger {
        match self.checked_mul(other) {
            Ok(product) => product,
            Err(error) => panic!("{error}"),
        }
    }
}

impl Div<&SignedInteger> for &SignedInteger {
    type Output = SignedInteger;

    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn div(self, other: &SignedInteger) -> SignedInteger {
        match self.checked_div(other) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{error}"),
        }
    }
}

impl Rem<&SignedInteger> for &SignedInteger {
    type Output = SignedInteger;

    /// # Panics
    ///
    /// Panics when `other` is zero.
    fn rem(self, other: &SignedInteger) -> SignedInteger {
        match self.checked_rem(other) {
            Ok(remainder) => remainder,
            Err(error) => panic!("{error}"),
        }
    }
}

forward_value_binop!(impl Add, add for SignedInteger);
forward_value_binop!(impl Sub, sub for SignedInteger);
forward_value_binop!(impl Mul, mul for SignedInteger);
forward_value_binop!(impl Div, div for SignedInteger);
forward_value_binop!(impl Rem, rem for SignedInteger);

impl AddAssign<&SignedInteger> for SignedInteger {
    fn add_assign(&mut self, other: &SignedInteger) {
        *self = &*self + other;
    }
}

impl SubAssign<&SignedInteger> for SignedInteger {
    fn sub_assign(&mut self, other: &SignedInteger) {
        *self = &*self - other;
    }
}

impl MulAssign<&SignedInteger> for SignedInteger {
    fn mul_assign(&mut self, other: &SignedInteger) {
        *self = &*self * other;
    }
}

impl DivAssign<&SignedInteger> for SignedInteger {
    fn div_assign(&mut self, other: &SignedInteger) {
        *self = &*self / other;
    }
}

impl RemAssign<&SignedInteger> for SignedInteger {
    fn rem_assign(&mut self, other: &SignedInteger) {
        *self = &*self % other;
    }
}

forward_value_assign!(impl AddAssign, add_assign for SignedInteger);
forward_value_assign!(impl SubAssign, sub_assign for SignedInteger);
forward_value_assign!(impl MulAssign, mul_assign for SignedInteger);
forward_value_assign!(impl DivAssign, div_assign for SignedInteger);
forward_value_assign!(impl RemAssign, rem_assign for SignedInteger);

impl Zero for SignedInteger {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        SignedInteger::is_zero(self)
    }
}

impl One for SignedInteger {
    fn one() -> Self {
        Self::from(UnsignedInteger::one())
    }
}
