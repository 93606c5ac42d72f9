//! Long division and the Newton reciprocal.
//!
//! Small operands go through Knuth-style base-10^8 long division. Large
//! divisions are reduced to multiplication: a reciprocal scaled to
//! `BASE^p` is computed by Newton iteration with doubling precision,
//! the quotient estimate is one multiply, and two short correction
//! loops settle the exact quotient and remainder.

use std::cmp::Ordering;

use crate::error::IntegerError;
use crate::limbs::{
    add_assign, canonicalize, compare, decrement, increment, is_zero, shift_left, shift_right,
    sub_assign, BASE, SCHOOLBOOK_THRESHOLD,
};
use crate::mul::multiply;

/// Three-limb numerator estimate used by the partial-quotient guess:
/// `10*BASE*d[high+1] + 10*d[high] + d[high-1]/(BASE/10)`, with
/// out-of-range indices reading as zero. `len` bounds the high read so
/// the guard limb of a working remainder is never consulted.
fn top_estimate(digits: &[u32], high: usize, len: usize) -> u64 {
    let above = if high + 1 < len {
        u64::from(digits[high + 1])
    } else {
        0
    };
    let below = if high > 0 { u64::from(digits[high - 1]) } else { 0 };
    10 * u64::from(BASE) * above + 10 * u64::from(digits[high]) + below / u64::from(BASE / 10)
}

/// `rem[position..] -= q_hat * y`, borrowing into the limb just above
/// the divisor window.
fn subtract_scaled(rem: &mut [u32], y: &[u32], position: usize, q_hat: i64) {
    let base = i64::from(BASE);
    let mut carry: i64 = 0;
    for (i, &d) in y.iter().enumerate() {
        carry = carry - q_hat * i64::from(d) + i64::from(rem[position + i]);
        let mut digit = carry % base;
        carry /= base;
        if digit < 0 {
            digit += base;
            carry -= 1;
        }
        rem[position + i] = digit as u32;
    }
    if carry != 0 {
        let adjusted = i64::from(rem[position + y.len()]) + carry;
        debug_assert!(adjusted >= 0, "window borrow left a negative limb");
        rem[position + y.len()] = adjusted as u32;
    }
}

/// Knuth-style long division. Precondition: `y` is non-zero.
pub(crate) fn schoolbook_div_rem(x: &[u32], y: &[u32]) -> (Vec<u32>, Vec<u32>) {
    debug_assert!(!is_zero(y));
    if compare(x, y) == Ordering::Less {
        return (vec![0], x.to_vec());
    }
    let n = x.len();
    let m = y.len();
    let mut quotient = vec![0u32; n - m + 1];
    let mut rem = Vec::with_capacity(n + 1);
    rem.extend_from_slice(x);
    rem.push(0); // guard limb absorbing window borrows at position + m

    // The +1 keeps every guess at or below the true partial quotient,
    // so the working remainder never goes negative.
    let divisor_estimate = top_estimate(y, m - 1, m) + 1;
    for position in (0..=n - m).rev() {
        loop {
            let q_hat = top_estimate(&rem, position + m - 1, n) / divisor_estimate;
            if q_hat == 0 {
                break;
            }
            debug_assert!(q_hat < 2 * u64::from(BASE));
            subtract_scaled(&mut rem, y, position, q_hat as i64);
            quotient[position] += q_hat as u32;
        }
        // The guess can stop one short: subtract once more if the
        // m-limb window still holds at least the divisor.
        let mut window_ge = true;
        for i in (0..m).rev() {
            match rem[position + i].cmp(&y[i]) {
                Ordering::Equal => {}
                other => {
                    window_ge = other == Ordering::Greater;
                    break;
                }
            }
        }
        if window_ge {
            subtract_scaled(&mut rem, y, position, 1);
            quotient[position] += 1;
        }
    }
    canonicalize(&mut quotient);
    canonicalize(&mut rem);
    (quotient, rem)
}

/// `floor(BASE^precision / y)`, possibly one low but never more.
///
/// Contract: `result * y <= BASE^precision < (result + 2) * y`.
/// Precondition: `y` is non-zero.
pub(crate) fn reciprocal_limbs(y: &[u32], precision: usize) -> Result<Vec<u32>, IntegerError> {
    debug_assert!(!is_zero(y));
    if y.len() < SCHOOLBOOK_THRESHOLD || precision < y.len() + SCHOOLBOOK_THRESHOLD {
        let mut numerator = vec![0u32; precision + 1];
        numerator[precision] = 1;
        return Ok(schoolbook_div_rem(&numerator, y).0);
    }
    // Recurse on a truncated divisor at roughly half the precision.
    let half = (precision - y.len() + 5) >> 1;
    let shift_back = y.len().saturating_sub(half);
    let truncated = shift_right(y, shift_back);
    let refined = half + truncated.len();
    let approx = reciprocal_limbs(&truncated, refined)?;

    // Newton step: 2*a*BASE^k - floor(y*a^2 / BASE^j). The step is
    // known to land exactly one above the contract range, hence the
    // trailing decrement.
    let mut doubled = approx.clone();
    add_assign(&mut doubled, &approx);
    let mut result = shift_left(&doubled, precision - refined - shift_back);
    let square = multiply(&approx, &approx)?;
    let product = multiply(y, &square)?;
    let correction = shift_right(&product, 2 * (refined + shift_back) - precision);
    sub_assign(&mut result, &correction);
    decrement(&mut result);
    Ok(result)
}

/// Quotient and remainder. Precondition: `y` is non-zero.
pub(crate) fn div_rem_limbs(x: &[u32], y: &[u32]) -> Result<(Vec<u32>, Vec<u32>), IntegerError> {
    debug_assert!(!is_zero(y));
    if compare(x, y) == Ordering::Less {
        return Ok((vec![0], x.to_vec()));
    }
    if x.len() < SCHOOLBOOK_THRESHOLD || y.len() < SCHOOLBOOK_THRESHOLD {
        return Ok(schoolbook_div_rem(x, y));
    }
    let precision = x.len() - y.len() + 5;
    let shift_back = y.len().saturating_sub(precision);
    let mut adjusted = shift_right(y, shift_back);
    if shift_back > 0 {
        // Round the truncated divisor up so the quotient estimate stays
        // at or below the true quotient.
        increment(&mut adjusted);
    }
    let inverse_precision = precision + adjusted.len();
    tracing::trace!(len_x = x.len(), len_y = y.len(), precision, "newton division");
    let inverse = reciprocal_limbs(&adjusted, inverse_precision)?;
    let mut quotient = shift_right(&multiply(x, &inverse)?, inverse_precision + shift_back);

    let mut product = multiply(&quotient, y)?;
    while compare(&product, x) == Ordering::Greater {
        decrement(&mut quotient);
        sub_assign(&mut product, y);
    }
    let mut remainder = x.to_vec();
    sub_assign(&mut remainder, &product);
    while compare(&remainder, y) != Ordering::Less {
        sub_assign(&mut remainder, y);
        increment(&mut quotient);
    }
    canonicalize(&mut quotient);
    canonicalize(&mut remainder);
    Ok((quotient, remainder))
}
