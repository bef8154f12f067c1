// SPDX-License-Identifier: LGPL-3.0-or-later

//! Prefix predicate scanning.

/// Test whether `predicate` holds for each of the first `count` samples
/// of `buf`.
///
/// Short-circuits on the first failing sample.
///
/// # Panics
/// Panics if `count > buf.len()`.
///
/// # Examples
/// ```
/// use sigviz_dsp::scan::test_all;
///
/// let signal = [1.0, 1.0, 1.0, 2.0, 2.0];
/// assert!(test_all(3, |x| x == 1.0, &signal));
/// assert!(!test_all(4, |x| x == 1.0, &signal));
/// ```
pub fn test_all<F>(count: usize, predicate: F, buf: &[f64]) -> bool
where
    F: Fn(f64) -> bool,
{
    buf[..count].iter().all(|&x| predicate(x))
}
