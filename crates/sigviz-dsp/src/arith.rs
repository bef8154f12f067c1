// SPDX-License-Identifier: LGPL-3.0-or-later

//! Element-wise arithmetic under the zero-fallback masking rule.
//!
//! Add, subtract, and multiply treat a computed zero (or NaN) as an
//! absent sample: the first operand is carried through instead, and if
//! that is also zero-like, the second fallback operand. A plain zero
//! reaches the output only when both operands are zero-like themselves.
//! The rule keeps silent stretches of one signal visible in the chart
//! when the other signal cancels them. [`amplify`] is exempt and scales
//! plainly.
//!
//! Every operation processes exactly the first `count` samples of its
//! inputs, so over-allocated buffers are safe to pass. Each comes in
//! three forms: allocating, `*_into` (explicit output buffer), and
//! `*_assign` (destination doubles as the first operand).

use multiversion::multiversion;

use crate::buffer::zeros;
use crate::float::zero_like;

/// Apply the masking rule to a computed sample.
///
/// `second` must already carry the sign the operation calls for
/// (negated for subtraction).
#[inline]
fn zero_fallback(result: f64, first: f64, second: f64) -> f64 {
    if !zero_like(result) {
        result
    } else if !zero_like(first) {
        first
    } else {
        second
    }
}

/// Masked element-wise sum of the first `count` samples: fresh output.
pub fn add(count: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    log::trace!("add: {} samples", count);
    let mut out = zeros(count);
    add_into(count, &mut out, a, b);
    out
}

/// Masked element-wise sum: `dst[i] = a[i] + b[i]` with fallback to
/// `a[i]`, then `b[i]`, when the sum is zero-like.
///
/// # Panics
/// Panics if any buffer is shorter than `count`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn add_into(count: usize, dst: &mut [f64], a: &[f64], b: &[f64]) {
    for ((d, &x), &y) in dst[..count].iter_mut().zip(&a[..count]).zip(&b[..count]) {
        *d = zero_fallback(x + y, x, y);
    }
}

/// Masked element-wise sum in place: `dst` is both the first operand and
/// the output.
///
/// # Panics
/// Panics if either buffer is shorter than `count`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn add_assign(count: usize, dst: &mut [f64], b: &[f64]) {
    for (d, &y) in dst[..count].iter_mut().zip(&b[..count]) {
        *d = zero_fallback(*d + y, *d, y);
    }
}

/// Masked element-wise difference of the first `count` samples: fresh
/// output.
pub fn sub(count: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    log::trace!("sub: {} samples", count);
    let mut out = zeros(count);
    sub_into(count, &mut out, a, b);
    out
}

/// Masked element-wise difference: `dst[i] = a[i] - b[i]` with fallback
/// to `a[i]`, then `-b[i]`, when the difference is zero-like.
///
/// # Panics
/// Panics if any buffer is shorter than `count`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sub_into(count: usize, dst: &mut [f64], a: &[f64], b: &[f64]) {
    for ((d, &x), &y) in dst[..count].iter_mut().zip(&a[..count]).zip(&b[..count]) {
        *d = zero_fallback(x - y, x, -y);
    }
}

/// Masked element-wise difference in place: `dst` is both the minuend
/// and the output.
///
/// # Panics
/// Panics if either buffer is shorter than `count`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn sub_assign(count: usize, dst: &mut [f64], b: &[f64]) {
    for (d, &y) in dst[..count].iter_mut().zip(&b[..count]) {
        *d = zero_fallback(*d - y, *d, -y);
    }
}

/// Masked element-wise product of the first `count` samples: fresh
/// output.
pub fn mul(count: usize, a: &[f64], b: &[f64]) -> Vec<f64> {
    log::trace!("mul: {} samples", count);
    let mut out = zeros(count);
    mul_into(count, &mut out, a, b);
    out
}

/// Masked element-wise product: `dst[i] = a[i] * b[i]` with fallback to
/// `a[i]`, then `b[i]`, when the product is zero-like.
///
/// # Panics
/// Panics if any buffer is shorter than `count`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn mul_into(count: usize, dst: &mut [f64], a: &[f64], b: &[f64]) {
    for ((d, &x), &y) in dst[..count].iter_mut().zip(&a[..count]).zip(&b[..count]) {
        *d = zero_fallback(x * y, x, y);
    }
}

/// Masked element-wise product in place: `dst` is both the first factor
/// and the output.
///
/// # Panics
/// Panics if either buffer is shorter than `count`.
#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
pub fn mul_assign(count: usize, dst: &mut [f64], b: &[f64]) {
    for (d, &y) in dst[..count].iter_mut().zip(&b[..count]) {
        *d = zero_fallback(*d * y, *d, y);
    }
}

/// Scale every sample of `a` by `gain` into a fresh buffer.
///
/// Plain multiplication; the masking rule does not apply here, so a
/// `gain` of zero silences the signal.
pub fn amplify(a: &[f64], gain: f64) -> Vec<f64> {
    let mut out = zeros(a.len());
    scale_into(&mut out, a, gain);
    out
}

#[multiversion(targets("x86_64+avx2+fma", "x86_64+avx", "x86_64+sse4.1", "aarch64+neon",))]
fn scale_into(dst: &mut [f64], src: &[f64], gain: f64) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s * gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_add_plain() {
        assert_eq!(add(3, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), [5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_add_prefix_only() {
        let out = add(2, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        assert_eq!(out, [5.0, 7.0]);
    }

    #[test]
    fn test_add_masks_cancellation() {
        // 2 + (-2) cancels; the first operand is carried through.
        assert_eq!(add(1, &[2.0], &[-2.0]), [2.0]);
        // Zero first operand falls through to the second.
        assert_eq!(add(1, &[0.0], &[3.0]), [3.0]);
        // Both zero-like: the zero is genuine and stays.
        assert_eq!(add(1, &[0.0], &[0.0]), [0.0]);
    }

    #[test]
    fn test_add_assign_aliases_first_operand() {
        let mut dst = [1.0, 2.0, -3.0];
        add_assign(3, &mut dst, &[4.0, -2.0, 3.0]);
        assert_eq!(dst, [5.0, 2.0, -3.0]);
    }

    #[test]
    fn test_add_into_over_allocated() {
        let mut dst = [9.0; 4];
        add_into(2, &mut dst, &[1.0, 1.0, 1.0], &[1.0, 1.0, 1.0]);
        assert_eq!(dst, [2.0, 2.0, 9.0, 9.0]);
    }

    #[test]
    fn test_sub_known() {
        // The equal pair at the end cancels and carries the minuend
        // through instead of storing the zero.
        let out = sub(4, &[3.0, 3.0, 3.0, 3.0], &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!(out, [3.0, 2.0, 1.0, 3.0]);
    }

    #[test]
    fn test_sub_second_fallback_is_negated() {
        // Minuend zero-like: the subtrahend is carried through negated.
        assert_eq!(sub(1, &[0.0], &[4.0]), [-4.0]);
        assert_eq!(sub(1, &[0.0], &[-4.0]), [4.0]);
    }

    #[test]
    fn test_sub_assign() {
        let mut dst = [3.0, 3.0];
        sub_assign(2, &mut dst, &[1.0, 3.0]);
        assert_eq!(dst, [2.0, 3.0]);
    }

    #[test]
    fn test_mul_plain() {
        assert_eq!(mul(3, &[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), [4.0, 10.0, 18.0]);
    }

    #[test]
    fn test_mul_masks_zero_product() {
        // A zero product carries the first operand through, then the
        // second.
        assert_eq!(mul(3, &[2.0, 0.0, 4.0], &[0.0, 3.0, 0.0]), [2.0, 3.0, 4.0]);
        assert_eq!(mul(1, &[0.0], &[0.0]), [0.0]);
    }

    #[test]
    fn test_nan_is_masked() {
        // NaN results count as zero-like and fall back like zeros do.
        let out = add(1, &[f64::INFINITY], &[f64::NEG_INFINITY]);
        assert_eq!(out, [f64::INFINITY]);
    }

    #[test]
    fn test_amplify() {
        let out = amplify(&[1.0, -2.0, 0.5], 2.0);
        assert_approx_eq!(f64, out[0], 2.0, ulps = 2);
        assert_approx_eq!(f64, out[1], -4.0, ulps = 2);
        assert_approx_eq!(f64, out[2], 1.0, ulps = 2);
    }

    #[test]
    fn test_amplify_zero_gain_is_not_masked() {
        assert_eq!(amplify(&[1.0, 2.0], 0.0), [0.0, 0.0]);
    }

    #[test]
    #[should_panic]
    fn test_add_undersized_operand() {
        let mut dst = [0.0; 4];
        add_into(4, &mut dst, &[1.0, 2.0], &[1.0, 2.0, 3.0, 4.0]);
    }
}
