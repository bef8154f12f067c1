// SPDX-License-Identifier: LGPL-3.0-or-later

//! Time-axis reordering: reflection and displacement.

use crate::buffer::zeros;
use crate::float::zero_like;

/// Reverse the sample order of `buf` in place.
///
/// This is the kernel's one destructive operation: it mutates the buffer
/// it is handed instead of taking an output parameter, and allocates
/// nothing. Callers that still need the original order must copy before
/// calling.
pub fn reflect(buf: &mut [f64]) {
    buf.reverse();
}

/// Displace `a` by `offset` positions into a fresh buffer of the same
/// length, zero-filling the vacated end.
///
/// A negative `offset` moves content toward higher indices: the leading
/// samples of `a` land starting at output position `|offset|`, and the
/// first `|offset|` output samples stay zero. A non-negative `offset`
/// moves content toward lower indices: samples from `a[offset]` onward
/// land at the start of the output. On that path a zero-like source
/// sample (zero of either sign, or NaN) leaves the zero fill in place.
///
/// Displaced-out samples are discarded; there is no wraparound. An
/// `offset` of zero copies, and `|offset| >= a.len()` yields all zeros.
pub fn shift(offset: isize, a: &[f64]) -> Vec<f64> {
    log::trace!("shift: offset {} over {} samples", offset, a.len());
    let mut out = zeros(a.len());
    let n = offset.unsigned_abs();
    if offset < 0 {
        for (d, &s) in out.iter_mut().skip(n).zip(a.iter()) {
            *d = s;
        }
    } else {
        for (d, &s) in out.iter_mut().zip(a.iter().skip(n)) {
            if !zero_like(s) {
                *d = s;
            }
        }
    }
    out
}
