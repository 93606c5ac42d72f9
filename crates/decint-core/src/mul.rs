//! Multiplication driver: schoolbook below the threshold, FFT above.

use crate::error::IntegerError;
use crate::limbs::{canonicalize, BASE, SCHOOLBOOK_THRESHOLD};

/// Multiply two canonical limb sequences, choosing the path by size.
///
/// The FFT path rejects operands longer than
/// [`decint_fft::TRANSFORM_LIMIT`]; everything the schoolbook path can
/// reach is accepted.
pub(crate) fn multiply(a: &[u32], b: &[u32]) -> Result<Vec<u32>, IntegerError> {
    if a.len().min(b.len()) < SCHOOLBOOK_THRESHOLD {
        return Ok(schoolbook(a, b));
    }
    for operand in [a, b] {
        if operand.len() > decint_fft::TRANSFORM_LIMIT {
            return Err(IntegerError::TransformLimitExceeded {
                length: operand.len(),
                limit: decint_fft::TRANSFORM_LIMIT,
            });
        }
    }
    tracing::trace!(len_a = a.len(), len_b = b.len(), "fft multiply");
    let mut product = decint_fft::with_engine(|engine| engine.multiply(a, b));
    canonicalize(&mut product);
    Ok(product)
}

/// Classical O(n*m) multiplication, accumulating one output position at
/// a time in a 64-bit running sum.
pub(crate) fn schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
    let base = u64::from(BASE);
    let positions = a.len() + b.len() - 1;
    let mut out = Vec::with_capacity(positions + 1);
    let mut carry: u64 = 0;
    for i in 0..positions {
        let j_low = if i >= a.len() { i - a.len() + 1 } else { 0 };
        let j_high = i.min(b.len() - 1);
        for j in j_low..=j_high {
            carry += u64::from(a[i - j]) * u64::from(b[j]);
        }
        out.push((carry % base) as u32);
        carry /= base;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    canonicalize(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limbs::compare;

    fn limbs(seed: u64, len: usize) -> Vec<u32> {
        let mut state = seed;
        let mut out: Vec<u32> = (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                ((state >> 33) % u64::from(BASE)) as u32
            })
            .collect();
        if out.last() == Some(&0) {
            // keep the operand canonical
            let top = out.len() - 1;
            out[top] = 1;
        }
        out
    }

    #[test]
    fn limb_base_matches_the_engine() {
        assert_eq!(BASE, decint_fft::LIMB_BASE);
    }

    #[test]
    fn schoolbook_known_products() {
        assert_eq!(schoolbook(&[6], &[7]), vec![42]);
        assert_eq!(schoolbook(&[0], &[12_345]), vec![0]);
        // 99999999^2 = 9999999800000001
        assert_eq!(schoolbook(&[99_999_999], &[99_999_999]), vec![1, 99_999_998]);
    }

    #[test]
    fn driver_is_commutative_across_paths() {
        let a = limbs(11, 70);
        let b = limbs(23, 3);
        // 70x3 stays schoolbook, but both argument orders must agree.
        assert_eq!(multiply(&a, &b).unwrap(), multiply(&b, &a).unwrap());
    }

    /// The FFT and schoolbook paths must produce identical limbs for
    /// every operand size from one limb up to four times the crossover
    /// point.
    #[test]
    fn fft_agrees_with_schoolbook_through_4x_threshold() {
        for n in 1..=4 * SCHOOLBOOK_THRESHOLD {
            let a = limbs(0x5eed_0000 + n as u64, n);
            let b = limbs(0xface_0000 + n as u64, n);
            let expected = schoolbook(&a, &b);
            let got = decint_fft::with_engine(|engine| {
                let mut product = engine.multiply(&a, &b);
                canonicalize(&mut product);
                product
            });
            assert_eq!(got, expected, "fft/schoolbook disagree at {n} limbs");
            assert_eq!(compare(&got, &expected), std::cmp::Ordering::Equal);
        }
    }

    #[test]
    fn oversized_operand_is_rejected() {
        // Fabricate an oversized length without allocating gigabytes:
        // the check fires before any transform work happens.
        let a = vec![1u32; decint_fft::TRANSFORM_LIMIT + 1];
        let b = vec![1u32; SCHOOLBOOK_THRESHOLD];
        let err = multiply(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            IntegerError::TransformLimitExceeded { length, .. } if length == decint_fft::TRANSFORM_LIMIT + 1
        ));
    }
}
