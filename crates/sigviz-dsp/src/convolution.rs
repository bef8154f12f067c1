// SPDX-License-Identifier: LGPL-3.0-or-later

//! Direct time-domain linear convolution.
//!
//! O(N*M) full convolution of two sample sequences. The kernel lengths
//! the visualization tool works with stay small enough that no
//! FFT-based path is needed.

use crate::buffer::zeros;
use crate::error::Error;

/// Compute the full linear convolution of `a` and `b`.
///
/// The output has length `a.len() + b.len() - 1`, where
/// `out[k]` accumulates `a[i] * b[j]` over all `i + j == k`. The result
/// buffer is zero-initialized up front and accumulated into directly.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if either input is empty.
///
/// # Examples
/// ```
/// use sigviz_dsp::convolution::convolve;
///
/// let out = convolve(&[1.0, 2.0, 3.0], &[1.0, 1.0]).unwrap();
/// assert_eq!(out, [1.0, 3.0, 5.0, 3.0]);
/// ```
pub fn convolve(a: &[f64], b: &[f64]) -> Result<Vec<f64>, Error> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::InvalidArgument("signals can not be empty"));
    }
    log::trace!("convolve: {} x {} samples", a.len(), b.len());

    let mut out = zeros(a.len() + b.len() - 1);
    for (i, &x) in a.iter().enumerate() {
        for (j, &h) in b.iter().enumerate() {
            out[i + j] += x * h;
        }
    }
    Ok(out)
}
