// SPDX-License-Identifier: LGPL-3.0-or-later

//! Buffer allocation, generator fill, and concatenation.

/// Allocate a sequence of `len` samples, all zero.
pub fn zeros(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

/// Build a buffer of `count` samples from a generator function.
///
/// The generator receives the sample index and the total count, and must
/// be a pure function of those two values.
///
/// # Examples
/// ```
/// use sigviz_dsp::buffer::fill;
///
/// let ramp = fill(4, |i, n| i as f64 / n as f64);
/// assert_eq!(ramp, [0.0, 0.25, 0.5, 0.75]);
/// ```
pub fn fill<F>(count: usize, generator: F) -> Vec<f64>
where
    F: Fn(usize, usize) -> f64,
{
    let mut out = zeros(count);
    fill_into(count, generator, &mut out);
    out
}

/// Fill the first `count` samples of `dst` from a generator function.
/// Samples past `count` are left untouched.
///
/// # Panics
/// Panics if `dst.len() < count`.
pub fn fill_into<F>(count: usize, generator: F, dst: &mut [f64])
where
    F: Fn(usize, usize) -> f64,
{
    assert!(dst.len() >= count, "dst too small");
    for (i, d) in dst[..count].iter_mut().enumerate() {
        *d = generator(i, count);
    }
}

/// Concatenate `a` and `b` into a fresh buffer of
/// `a.len() + b.len() + offset` samples. The first `offset` samples stay
/// zero.
pub fn concat(a: &[f64], b: &[f64], offset: usize) -> Vec<f64> {
    let mut dest = zeros(a.len() + b.len() + offset);
    concat_into(a, b, &mut dest, offset);
    dest
}

/// Copy `a` then `b` contiguously into `dest` starting at `offset`.
/// Samples outside the written range are left untouched.
///
/// # Panics
/// Panics if `dest.len() < offset + a.len() + b.len()`.
pub fn concat_into(a: &[f64], b: &[f64], dest: &mut [f64], offset: usize) {
    assert!(dest.len() >= offset + a.len() + b.len(), "dest too small");
    dest[offset..offset + a.len()].copy_from_slice(a);
    dest[offset + a.len()..offset + a.len() + b.len()].copy_from_slice(b);
}
