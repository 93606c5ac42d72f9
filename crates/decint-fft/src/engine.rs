//! Convolution engine and its thread-local lease.

use std::cell::RefCell;

use crate::complex::Complex;
use crate::packing::{decode, encode, pointwise_multiply};
use crate::transform::{dif_forward, dit_inverse};
use crate::twiddle::TwiddleCache;

/// Owns all scratch the convolution pipeline needs: the twiddle cache
/// and one work buffer per operand. Buffers grow monotonically and are
/// reused across multiplications.
#[derive(Debug)]
pub struct FftEngine {
    twiddles: TwiddleCache,
    first: Vec<Complex>,
    second: Vec<Complex>,
}

impl FftEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            twiddles: TwiddleCache::new(),
            first: Vec::new(),
            second: Vec::new(),
        }
    }

    /// Multiply two non-empty little-endian base-10^8 limb sequences.
    ///
    /// The result has `a.len() + b.len()` limbs or one fewer trailing
    /// carry limb than that; the caller strips trailing zeros.
    #[must_use]
    pub fn multiply(&mut self, a: &[u32], b: &[u32]) -> Vec<u32> {
        let result_len = a.len() + b.len();
        debug_assert!(result_len >= 2);
        let transform_len = result_len.next_power_of_two();

        self.twiddles.ensure(transform_len);
        if self.first.len() < transform_len {
            self.first.resize(transform_len, Complex::ZERO);
            self.second.resize(transform_len, Complex::ZERO);
        }
        let first = &mut self.first[..transform_len];
        let second = &mut self.second[..transform_len];
        first.fill(Complex::ZERO);
        second.fill(Complex::ZERO);

        encode(a, first);
        encode(b, second);
        dif_forward(first, &self.twiddles);
        dif_forward(second, &self.twiddles);
        pointwise_multiply(first, second, &self.twiddles);
        dit_inverse(first, &self.twiddles);

        decode(first, result_len)
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static ENGINE: RefCell<FftEngine> = RefCell::new(FftEngine::new());
}

/// Run `f` with this thread's engine.
///
/// The lease is exclusive for the duration of the closure; the closure
/// must not re-enter `with_engine` (the arithmetic driver takes one
/// lease per multiplication, so recursion through division and the
/// Newton reciprocal stays re-entrant).
pub fn with_engine<R>(f: impl FnOnce(&mut FftEngine) -> R) -> R {
    ENGINE.with(|engine| f(&mut engine.borrow_mut()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: u64 = 100_000_000;

    fn schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
        let mut out = vec![0u64; a.len() + b.len()];
        for (i, &x) in a.iter().enumerate() {
            let mut carry = 0u64;
            for (j, &y) in b.iter().enumerate() {
                let t = out[i + j] + u64::from(x) * u64::from(y) + carry;
                out[i + j] = t % BASE;
                carry = t / BASE;
            }
            out[i + b.len()] += carry;
        }
        out.into_iter().map(|v| v as u32).collect()
    }

    fn limbs(seed: u64, len: usize) -> Vec<u32> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                ((state >> 33) % BASE as u64) as u32
            })
            .collect()
    }

    fn trimmed(mut limbs: Vec<u32>) -> Vec<u32> {
        while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
            limbs.pop();
        }
        limbs
    }

    #[test]
    fn single_limb_products() {
        let mut engine = FftEngine::new();
        assert_eq!(trimmed(engine.multiply(&[2], &[3])), vec![6]);
        assert_eq!(trimmed(engine.multiply(&[20_000], &[30_000])), vec![0, 6]);
        assert_eq!(
            trimmed(engine.multiply(&[99_999_999], &[99_999_999])),
            vec![1, 99_999_998]
        );
    }

    #[test]
    fn agrees_with_schoolbook() {
        let mut engine = FftEngine::new();
        for &(n, m) in &[(1, 1), (1, 7), (2, 2), (3, 5), (8, 8), (16, 9), (64, 64), (100, 37)] {
            let a = limbs(n as u64 * 1000 + m as u64, n);
            let b = limbs(m as u64 * 7777 + 13, m);
            assert_eq!(
                trimmed(engine.multiply(&a, &b)),
                trimmed(schoolbook(&a, &b)),
                "mismatch for sizes {n}x{m}"
            );
        }
    }

    #[test]
    fn buffers_grow_monotonically_and_stay_reusable() {
        let mut engine = FftEngine::new();
        let big_a = limbs(1, 80);
        let big_b = limbs(2, 80);
        let expected_big = trimmed(schoolbook(&big_a, &big_b));
        assert_eq!(trimmed(engine.multiply(&big_a, &big_b)), expected_big);

        // A smaller multiply afterwards must not see stale samples.
        let small_a = limbs(3, 5);
        let small_b = limbs(4, 6);
        assert_eq!(
            trimmed(engine.multiply(&small_a, &small_b)),
            trimmed(schoolbook(&small_a, &small_b))
        );

        // And the big size again, through the thread-local lease.
        let again = with_engine(|engine| engine.multiply(&big_a, &big_b));
        assert_eq!(trimmed(again), expected_big);
    }
}
