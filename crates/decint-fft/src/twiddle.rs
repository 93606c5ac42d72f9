//! Twiddle-factor cache.
//!
//! Twiddles are stored in the block order the transforms consume them:
//! entry `k` is the factor for the `k`-th butterfly block of any level,
//! which is the unit root at angle `pi * bitrev(k)` (reading `k`'s bits
//! as a binary fraction). That ordering makes the table level-independent,
//! so one cache of `L/2` entries serves every transform of length `<= L`.
//!
//! The table is built as the product of two square-root-sized base
//! tables (coarse step `pi/h`, fine step `pi/h^2`), so a regrow costs
//! `O(sqrt(L))` trigonometric evaluations plus `O(L)` multiplies.

use std::f64::consts::PI;

use crate::complex::Complex;

/// Growable table of complex unit roots.
///
/// Grows monotonically: a regrow happens only when the requested
/// transform length exceeds twice the cached length, and existing
/// entries are preserved (the composite construction yields the same
/// value for an index regardless of the base-table size in effect).
#[derive(Debug, Clone)]
pub struct TwiddleCache {
    factors: Vec<Complex>,
}

impl TwiddleCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            factors: vec![Complex::ONE],
        }
    }

    /// Number of cached factors (serves transforms up to twice this length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Factor for butterfly block `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Complex {
        self.factors[index]
    }

    /// Make sure the cache can serve a transform of `transform_len`
    /// samples. No-op unless `transform_len` exceeds twice the cached
    /// length.
    pub fn ensure(&mut self, transform_len: usize) {
        debug_assert!(transform_len.is_power_of_two());
        if transform_len <= self.factors.len() << 1 {
            return;
        }
        tracing::debug!(
            transform_len,
            cached = self.factors.len(),
            "growing twiddle cache"
        );

        let half_log = transform_len.ilog2() / 2;
        let half_size = 1usize << half_log;
        let coarse_step = PI / half_size as f64;
        let fine_step = coarse_step / half_size as f64;

        // Base tables in bit-reversed phase order.
        let mut base = vec![Complex::ZERO; half_size << 1];
        for i in 0..half_size {
            let phase = f64::from(bit_reverse(i as u32, half_log));
            base[i] = Complex::polar(phase * coarse_step);
            base[i | half_size] = Complex::polar(phase * fine_step);
        }

        let old_len = self.factors.len();
        self.factors.resize(transform_len >> 1, Complex::ZERO);
        for i in old_len..self.factors.len() {
            self.factors[i] = base[i & (half_size - 1)] * base[half_size | (i >> half_log)];
        }
    }
}

impl Default for TwiddleCache {
    fn default() -> Self {
        Self::new()
    }
}

fn bit_reverse(value: u32, bits: u32) -> u32 {
    if bits == 0 {
        0
    } else {
        value.reverse_bits() >> (32 - bits)
    }
}
