//! Library error type.

use thiserror::Error;

/// Errors raised by construction, conversion and arithmetic.
///
/// Every error is reported synchronously and leaves operands untouched;
/// operators panic with the same messages where a `checked_` method
/// would have returned the error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegerError {
    /// Unsigned subtraction would produce a negative value.
    #[error("UnsignedInteger subtraction error: attempted to subtract a larger UnsignedInteger from a smaller one.")]
    SubtractionUnderflow,

    /// Decrement of an unsigned zero.
    #[error("UnsignedInteger decrement error: value is already zero.")]
    DecrementOfZero,

    /// Division with a zero divisor.
    #[error("UnsignedInteger division error: divisor is zero.")]
    DivisionByZero,

    /// Modulus with a zero divisor.
    #[error("UnsignedInteger modulus error: modulus is zero.")]
    ModulusByZero,

    /// A negative source cannot be represented as an unsigned value.
    #[error("UnsignedInteger conversion error: the provided value is negative. UnsignedInteger can only represent non-negative integers.")]
    NegativeValue,

    /// A floating-point source is NaN or infinite.
    #[error("conversion error: the provided floating point value is not finite.")]
    NotFinite,

    /// Parsed string was empty.
    #[error("parse error: the provided string is empty. Integers can only be parsed from non-empty strings of decimal digits.")]
    EmptyString,

    /// Parsed string contained a non-digit character.
    #[error("parse error: the provided string contains the non-digit character {0:?}.")]
    NonDigit(char),

    /// Operand length exceeds the FFT transform limit.
    #[error("UnsignedInteger multiplication error: operand length ({length}) exceeds transform limit ({limit}).")]
    TransformLimitExceeded {
        /// Offending operand length in limbs.
        length: usize,
        /// The configured limit ([`decint_fft::TRANSFORM_LIMIT`]).
        limit: usize,
    },
}
