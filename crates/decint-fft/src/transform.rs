//! In-place radix-2 transforms.
//!
//! The forward pass is decimation-in-frequency and leaves its output in
//! bit-reversed order; the inverse pass is decimation-in-time and takes
//! bit-reversed input back to natural order. The pointwise step works
//! directly in the bit-reversed domain, so no permutation pass exists
//! anywhere in the pipeline. Neither transform normalizes; the `1/L`
//! factors are folded into the pointwise multiply.

use crate::complex::Complex;
use crate::twiddle::TwiddleCache;

/// Forward DFT, decimation in frequency, output bit-reversed.
///
/// `twiddles` must have been grown for `data.len()` (see
/// [`TwiddleCache::ensure`]).
pub fn dif_forward(data: &mut [Complex], twiddles: &TwiddleCache) {
    let n = data.len();
    debug_assert!(n.is_power_of_two());
    let mut block = n >> 1;
    let mut step = n;
    while block != 0 {
        // Block 0 of every level has twiddle 1.
        for i in 0..block {
            let even = data[i];
            let odd = data[i + block];
            data[i] = even + odd;
            data[i + block] = even - odd;
        }
        let mut start = step;
        let mut index = 1;
        while start != n {
            let w = twiddles.get(index);
            for i in start..start + block {
                let even = data[i];
                let odd = data[i + block] * w;
                data[i] = even + odd;
                data[i + block] = even - odd;
            }
            start += step;
            index += 1;
        }
        step = block;
        block >>= 1;
    }
}

/// Inverse DFT, decimation in time, input bit-reversed, output natural.
///
/// Unnormalized: the caller accounts for the `1/L` factor.
pub fn dit_inverse(data: &mut [Complex], twiddles: &TwiddleCache) {
    let n = data.len();
    debug_assert!(n.is_power_of_two());
    let mut block = 1;
    let mut step = 2;
    while block != n {
        for i in 0..block {
            let even = data[i];
            let odd = data[i + block];
            data[i] = even + odd;
            data[i + block] = even - odd;
        }
        let mut start = step;
        let mut index = 1;
        while start != n {
            let w = twiddles.get(index);
            for i in start..start + block {
                let even = data[i];
                let odd = data[i + block];
                data[i] = even + odd;
                data[i + block] = (even - odd).mul_conj(w);
            }
            start += step;
            index += 1;
        }
        block = step;
        step <<= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Forward then inverse recovers the input scaled by the length.
    #[test]
    fn roundtrip_recovers_scaled_input() {
        for log_n in 1..=6 {
            let n = 1usize << log_n;
            let mut twiddles = TwiddleCache::new();
            twiddles.ensure(n);

            let original: Vec<Complex> = (0..n)
                .map(|i| Complex::new(i as f64 + 1.0, (i as f64) * 0.5 - 3.0))
                .collect();
            let mut data = original.clone();

            dif_forward(&mut data, &twiddles);
            dit_inverse(&mut data, &twiddles);

            for (i, (got, want)) in data.iter().zip(&original).enumerate() {
                let scale = n as f64;
                assert!(
                    (got.re - want.re * scale).abs() < 1e-9
                        && (got.im - want.im * scale).abs() < 1e-9,
                    "n={n} index {i}: got ({}, {}), want ({}, {})",
                    got.re,
                    got.im,
                    want.re * scale,
                    want.im * scale
                );
            }
        }
    }

    /// The DC bin of the forward transform is the plain sum.
    #[test]
    fn forward_dc_bin_is_sum() {
        let n = 8;
        let mut twiddles = TwiddleCache::new();
        twiddles.ensure(n);
        let mut data: Vec<Complex> = (0..n).map(|i| Complex::new(i as f64, 0.0)).collect();
        dif_forward(&mut data, &twiddles);
        assert!((data[0].re - 28.0).abs() < 1e-12);
        assert!(data[0].im.abs() < 1e-12);
    }

    #[test]
    fn single_sample_is_identity() {
        let twiddles = TwiddleCache::new();
        let mut data = [Complex::new(42.0, -7.0)];
        dif_forward(&mut data, &twiddles);
        assert_eq!(data[0], Complex::new(42.0, -7.0));
        dit_inverse(&mut data, &twiddles);
        assert_eq!(data[0], Complex::new(42.0, -7.0));
    }
}
