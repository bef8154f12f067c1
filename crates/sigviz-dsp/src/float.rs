// SPDX-License-Identifier: LGPL-3.0-or-later

//! Decimal rounding for cross-algorithm comparison.
//!
//! Two evaluations of the same signal operation rarely agree in the
//! lowest bits. Rounding both results to a fixed number of decimals
//! before comparing discards the precision noise while keeping every
//! digit the visualization layer can show.

/// Decimal places used by [`round`] and [`rounded_eq`].
pub const DEFAULT_DECIMALS: i32 = 8;

/// Zero of either sign, or NaN. The masking and displacement paths treat
/// such samples as absent.
#[inline]
pub(crate) fn zero_like(x: f64) -> bool {
    x == 0.0 || x.is_nan()
}

/// Round the first `min(src.len(), dst.len())` samples of `src` to
/// `decimals` places, writing into `dst`.
///
/// Rounding is half-away-from-zero at the scaled magnitude. A negative
/// zero result is normalized to positive zero.
pub fn round_into(src: &[f64], decimals: i32, dst: &mut [f64]) {
    let limit = src.len().min(dst.len());
    let scale = 10f64.powi(decimals);
    for (d, &s) in dst[..limit].iter_mut().zip(&src[..limit]) {
        let r = (s * scale).round() / scale;
        *d = if r == 0.0 { 0.0 } else { r };
    }
}

/// Build a rounding function closed over a decimal count.
///
/// # Examples
/// ```
/// use sigviz_dsp::float::round_to;
///
/// let round3 = round_to(3);
/// let mut out = [0.0];
/// round3(&[0.12345], &mut out);
/// assert_eq!(out, [0.123]);
/// ```
pub fn round_to(decimals: i32) -> impl Fn(&[f64], &mut [f64]) {
    move |src, dst| round_into(src, decimals, dst)
}

/// Round at the default scale of [`DEFAULT_DECIMALS`] decimals.
pub fn round(src: &[f64], dst: &mut [f64]) {
    round_into(src, DEFAULT_DECIMALS, dst);
}

/// Compare two sequences for equality after rounding both at the default
/// scale, over the shorter of the two lengths.
pub fn rounded_eq(a: &[f64], b: &[f64]) -> bool {
    let limit = a.len().min(b.len());
    let scale = 10f64.powi(DEFAULT_DECIMALS);
    a[..limit]
        .iter()
        .zip(&b[..limit])
        .all(|(&x, &y)| (x * scale).round() == (y * scale).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_into() {
        let mut out = [0.0; 2];
        round_into(&[1.123456789, 2.5], 8, &mut out);
        assert_eq!(out[0], 1.12345679);
        assert_eq!(out[1], 2.5);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        let mut out = [0.0; 2];
        round_into(&[0.5, -0.5], 0, &mut out);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], -1.0);
    }

    #[test]
    fn test_round_normalizes_negative_zero() {
        let mut out = [1.0; 2];
        round(&[-0.0, -1e-12], &mut out);
        assert_eq!(out, [0.0, 0.0]);
        assert!(out[0].is_sign_positive());
        assert!(out[1].is_sign_positive());
    }

    #[test]
    fn test_round_zero_stays_zero() {
        let mut out = [1.0];
        round(&[0.0], &mut out);
        assert_eq!(out[0], 0.0);
        assert!(out[0].is_sign_positive());
    }

    #[test]
    fn test_round_limit_is_shorter_length() {
        let mut out = [9.0; 3];
        round_into(&[1.4, 2.6], 0, &mut out);
        assert_eq!(out, [1.0, 3.0, 9.0]);

        let mut short = [9.0];
        round_into(&[1.4, 2.6], 0, &mut short);
        assert_eq!(short, [1.0]);
    }

    #[test]
    fn test_round_to_closure() {
        let round2 = round_to(2);
        let mut out = [0.0];
        round2(&[3.14159], &mut out);
        assert_eq!(out, [3.14]);
    }

    #[test]
    fn test_rounded_eq() {
        assert!(rounded_eq(&[1.0 / 3.0], &[0.333333333]));
        assert!(!rounded_eq(&[1.0 / 3.0], &[0.3333]));
        assert!(rounded_eq(&[0.1 + 0.2], &[0.3]));
    }

    #[test]
    fn test_rounded_eq_empty() {
        assert!(rounded_eq(&[], &[1.0]));
    }
}
