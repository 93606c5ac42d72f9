//! Limb packing and the packed pointwise multiply.
//!
//! A base-10^8 limb is split into two 4-digit halves and stored in one
//! complex sample: low half in the real part, high half in the
//! imaginary part. The forward transform of such a buffer encodes the
//! DFTs of both half-sequences at once; [`pointwise_multiply`]
//! separates them through conjugate symmetry, multiplies in the
//! frequency domain, and recombines, all in bit-reversed index order.

use crate::complex::Complex;
use crate::twiddle::TwiddleCache;

/// Base of one limb.
pub const LIMB_BASE: u32 = 100_000_000;

/// Split point between the two packed halves of a limb.
pub const LIMB_SPLIT: u32 = 10_000;

/// Pack limbs into complex samples. The buffer tail beyond `limbs` must
/// already be zeroed by the caller.
pub(crate) fn encode(limbs: &[u32], buffer: &mut [Complex]) {
    debug_assert!(buffer.len() >= limbs.len());
    for (sample, &limb) in buffer.iter_mut().zip(limbs) {
        *sample = Complex::new(f64::from(limb % LIMB_SPLIT), f64::from(limb / LIMB_SPLIT));
    }
}

/// Frequency-domain product of two packed real pairs, written into
/// `first`. Both buffers hold bit-reversed forward transforms; the
/// output feeds [`crate::transform::dit_inverse`] directly. The `1/L`
/// normalization of the inverse transform is folded in here.
pub fn pointwise_multiply(
    first: &mut [Complex],
    second: &[Complex],
    twiddles: &TwiddleCache,
) {
    let n = first.len();
    debug_assert_eq!(n, second.len());
    let normalization = 1.0 / n as f64;
    let scaling = normalization * 0.25;

    // Bin 0 carries both half-sequence DC terms as independent reals;
    // bin 1 (the Nyquist bin in bit-reversed order) is self-conjugate.
    first[0] = first[0].mul_real_pair(second[0]).scale(normalization);
    first[1] = (first[1] * second[1]).scale(normalization);

    let mut block_start = 2;
    let mut block_end = 3;
    while block_start != n {
        let mut forward = block_start;
        let mut backward = forward + block_start - 1;
        while forward != block_end {
            let first_even = first[forward] + first[backward].conj();
            let first_odd = first[forward] - first[backward].conj();
            let second_even = second[forward] + second[backward].conj();
            let second_odd = second[forward] - second[backward].conj();
            let twiddle = if forward & 1 == 1 {
                -twiddles.get(forward >> 1)
            } else {
                twiddles.get(forward >> 1)
            };
            let product_a = first_even * second_even - first_odd * second_odd * twiddle;
            let product_b = second_even * first_odd + first_even * second_odd;
            first[forward] = (product_a + product_b).scale(scaling);
            first[backward] = (product_a - product_b).scale(scaling).conj();
            forward += 1;
            backward -= 1;
        }
        block_start <<= 1;
        block_end <<= 1;
    }
}

/// Round every sample to integers and recombine the two 4-digit halves
/// into base-10^8 limbs with carry propagation.
pub(crate) fn decode(buffer: &[Complex], result_len: usize) -> Vec<u32> {
    let base = u64::from(LIMB_BASE);
    let mut limbs = Vec::with_capacity(result_len + 1);
    let mut carry: u64 = 0;
    for sample in &buffer[..result_len] {
        let low = (sample.re + 0.5) as i64;
        let high = (sample.im + 0.5) as i64;
        carry += (low + high * i64::from(LIMB_SPLIT)) as u64;
        limbs.push((carry % base) as u32);
        carry /= base;
    }
    while carry != 0 {
        limbs.push((carry % base) as u32);
        carry /= base;
    }
    limbs
}
