//! # decint-fft
//!
//! Floating-point FFT convolution engine for base-10^8 big-integer
//! multiplication. Each limb is packed into one complex sample (low
//! 4-digit half in the real part, high half in the imaginary part),
//! both operands are transformed once, and a packed pointwise step
//! recovers the real-by-real convolution from conjugate symmetry.
//!
//! All scratch (transform buffers and the twiddle cache) is owned by
//! [`FftEngine`]; [`with_engine`] leases a thread-local instance so the
//! arithmetic driver never shares scratch across threads.

pub mod complex;
pub mod engine;
pub mod packing;
pub mod transform;
pub mod twiddle;

pub use complex::Complex;
pub use engine::{with_engine, FftEngine};
pub use packing::{LIMB_BASE, LIMB_SPLIT};
pub use twiddle::TwiddleCache;

/// Hard upper bound on operand length in limbs.
///
/// Beyond this the convolution coefficients no longer fit the integer
/// range exactly representable in an IEEE-754 double.
pub const TRANSFORM_LIMIT: usize = 4_194_304;
