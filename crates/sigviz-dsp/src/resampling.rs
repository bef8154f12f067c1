// SPDX-License-Identifier: LGPL-3.0-or-later

//! Resampling by decimation and interpolation.
//!
//! [`decimate`] downsamples sparsely: kept samples stay at their
//! original positions and everything else becomes zero, so the output
//! keeps the input's length and time axis.
//!
//! The three interpolation variants upsample to
//! [`upsampled_len`]`(len, factor)` samples. The expansion count
//! excludes the two boundary samples, which makes the output shorter
//! than a full `(len - 1) * factor + 1` grid; chart rendering relies on
//! these exact lengths, so they are part of the contract. The linear
//! variant ramps by the absolute per-step difference and therefore
//! always ascends between neighbors, even into a falling sample.

use crate::buffer::zeros;
use crate::error::Error;

/// Keep every `factor`-th sample of `a` and zero the rest.
///
/// For `i` in `[0, a.len() / factor)` the sample at `i * factor` is
/// preserved; all other positions of the equally long output are zero.
///
/// Returns `None` when the operation is not applicable: a `factor` of
/// zero, or one exceeding the input length. The caller decides whether
/// "not performed" is worth reporting.
pub fn decimate(factor: usize, a: &[f64]) -> Option<Vec<f64>> {
    if factor == 0 || factor > a.len() {
        return None;
    }
    log::trace!("decimate: factor {} over {} samples", factor, a.len());
    let mut out = zeros(a.len());
    for i in 0..a.len() / factor {
        out[i * factor] = a[i * factor];
    }
    Some(out)
}

/// Output length of the interpolation variants:
/// `len + (len - 2) * (factor - 1)`.
///
/// # Panics
/// Panics if `len < 2` or `factor == 0`.
pub fn upsampled_len(len: usize, factor: usize) -> usize {
    assert!(len >= 2 && factor >= 1, "upsampled_len out of domain");
    len + (len - 2) * (factor - 1)
}

/// Validate an interpolation call and size its output.
fn check_upsample(factor: usize, a: &[f64]) -> Result<usize, Error> {
    if factor == 0 {
        return Err(Error::InvalidArgument(
            "interpolation factor must be at least 1",
        ));
    }
    if a.len() < 2 {
        return Err(Error::InvalidArgument(
            "interpolation needs at least two samples",
        ));
    }
    Ok(upsampled_len(a.len(), factor))
}

/// Upsample by zero insertion: each sample is followed by `factor - 1`
/// zeros.
///
/// Original samples land at multiples of `factor`; writes past the end
/// of the sized output are dropped, so for `factor >= 2` the final input
/// sample does not appear.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `factor == 0` or
/// `a.len() < 2`.
pub fn interpolate_zero(factor: usize, a: &[f64]) -> Result<Vec<f64>, Error> {
    let out_len = check_upsample(factor, a)?;
    let mut out = zeros(out_len);
    let mut j = 0;
    for &s in a {
        if j >= out.len() {
            break;
        }
        out[j] = s;
        // the factor - 1 inserted slots keep their zero fill
        j += factor;
    }
    Ok(out)
}

/// Upsample by zero-order hold: each sample is followed by `factor - 1`
/// repeats of itself.
///
/// Walks every sample but the last; writes past the end of the sized
/// output are dropped.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `factor == 0` or
/// `a.len() < 2`.
pub fn interpolate_step(factor: usize, a: &[f64]) -> Result<Vec<f64>, Error> {
    let out_len = check_upsample(factor, a)?;
    let mut out = zeros(out_len);
    let mut j = 0;
    'outer: for &s in &a[..a.len() - 1] {
        for _ in 0..factor {
            if j == out.len() {
                break 'outer;
            }
            out[j] = s;
            j += 1;
        }
    }
    Ok(out)
}

/// Upsample by an absolute-difference ramp.
///
/// Walks the interior samples `a[1..len - 1]`. Each is copied and then
/// followed by `factor - 1` values climbing from it in steps of
/// `|a[i] - a[i + 1]| / factor`. The ramp never descends, and the final
/// two output slots keep their zero fill.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `factor == 0` or
/// `a.len() < 2`.
pub fn interpolate_linear(factor: usize, a: &[f64]) -> Result<Vec<f64>, Error> {
    let out_len = check_upsample(factor, a)?;
    let mut out = zeros(out_len);
    let mut j = 0;
    for i in 1..a.len() - 1 {
        out[j] = a[i];
        let step = (a[i] - a[i + 1]).abs() / factor as f64;
        j += 1;
        for _ in 0..factor - 1 {
            out[j] = out[j - 1] + step;
            j += 1;
        }
    }
    Ok(out)
}
