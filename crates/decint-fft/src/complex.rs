//! Complex sample type used by the transform engine.
//!
//! A deliberately small type: two `f64`s, `Copy`, and only the handful
//! of products the butterflies and the packed pointwise step need. All
//! arithmetic stays in IEEE-754 double precision so transform results
//! agree across platforms.

use std::ops::{Add, Mul, Neg, Sub};

/// One complex sample: `re + im * i`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Unit root at the given angle (radians).
    #[must_use]
    pub fn polar(angle: f64) -> Self {
        Self {
            re: angle.cos(),
            im: angle.sin(),
        }
    }

    /// Complex conjugate.
    #[must_use]
    pub const fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// `self * conj(other)`.
    #[must_use]
    pub fn mul_conj(self, other: Self) -> Self {
        Self {
            re: self.re * other.re + self.im * other.im,
            im: self.im * other.re - self.re * other.im,
        }
    }

    /// Component product treating both samples as pairs of independent
    /// reals: `(r1*r2 + i1*i2, r1*i2 + i1*r2)`.
    ///
    /// This is the DC-bin multiply of the packed convolution, where the
    /// real and imaginary parts carry the two packed sub-sequences.
    #[must_use]
    pub fn mul_real_pair(self, other: Self) -> Self {
        Self {
            re: self.re * other.re + self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}
