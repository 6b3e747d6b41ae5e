//! Closed forms of the symmetric window families.
//!
//! All windows are symmetric, i.e. the first and last weights are equal and the
//! peak lies on the centre sample when the length is odd.
use crate::Real;
use std::f64::consts::PI;

/// Coefficients of the Hann window, as a generalized cosine window.
pub(crate) const HANN: [Real; 2] = [0.5, 0.5];
/// Coefficients of the Hamming window, as a generalized cosine window.
pub(crate) const HAMMING: [Real; 2] = [0.54, 0.46];
/// Coefficients of the (exact) Blackman window.
pub(crate) const BLACKMAN: [Real; 3] = [0.42, 0.5, 0.08];
/// Coefficients of the minimum four-term Blackman-Harris window according to Nuttall.
pub(crate) const NUTTALL: [Real; 4] = [0.3635819, 0.4891775, 0.1365995, 0.0106411];
/// Coefficients of the minimum four-term Blackman-Harris window.
pub(crate) const BLACKMAN_HARRIS: [Real; 4] = [0.35875, 0.48829, 0.14128, 0.01168];

/// Windows of length zero or one are the same for every family.
fn trivial_window(len: usize) -> Option<Vec<Real>> {
    match len {
        0 => Some(Vec::new()),
        1 => Some(vec![1.0]),
        _ => None,
    }
}

/// The rectangular window.
pub(crate) fn boxcar(len: usize) -> Vec<Real> {
    vec![1.0; len]
}

/// A generalized cosine window, i.e.
/// `w[n] = a[0] - a[1] cos(x) + a[2] cos(2x) - a[3] cos(3x) + ...`
/// where `x = 2πn/(len - 1)`.
pub(crate) fn general_cosine(len: usize, coefficients: &[Real]) -> Vec<Real> {
    if let Some(w) = trivial_window(len) {
        return w;
    }
    let denominator = (len - 1) as Real;
    (0..len)
        .map(|n| {
            let x = 2.0 * PI * n as Real / denominator;
            coefficients
                .iter()
                .enumerate()
                .map(|(k, a)| {
                    let sign = if k % 2 == 0 { 1.0 } else { -1.0 };
                    sign * a * (k as Real * x).cos()
                })
                .sum()
        })
        .collect()
}

/// A gaussian window with the given standard deviation, measured in samples.
pub(crate) fn gaussian(len: usize, sd: Real) -> Vec<Real> {
    if let Some(w) = trivial_window(len) {
        return w;
    }
    let centre = (len - 1) as Real / 2.0;
    (0..len)
        .map(|n| {
            let z = (n as Real - centre) / sd;
            (-0.5 * z * z).exp()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn assert_symmetric(w: &[Real]) {
        for (a, b) in w.iter().zip(w.iter().rev()) {
            assert_approx_eq!(a, b, 1e-12);
        }
    }

    #[test]
    fn degenerate_lengths() {
        assert!(general_cosine(0, &HANN).is_empty());
        assert_eq!(general_cosine(1, &BLACKMAN), vec![1.0]);
        assert!(gaussian(0, 1.0).is_empty());
        assert_eq!(gaussian(1, 1.0), vec![1.0]);
        assert!(boxcar(0).is_empty());
    }

    #[test]
    fn hann_values() {
        let w = general_cosine(5, &HANN);
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (a, e) in w.iter().zip(expected) {
            assert_approx_eq!(a, e, 1e-12);
        }
    }

    #[test]
    fn hamming_values() {
        let w = general_cosine(5, &HAMMING);
        let expected = [0.08, 0.54, 1.0, 0.54, 0.08];
        for (a, e) in w.iter().zip(expected) {
            assert_approx_eq!(a, e, 1e-12);
        }
    }

    #[test]
    fn blackman_values() {
        let w = general_cosine(5, &BLACKMAN);
        let expected = [0.0, 0.34, 1.0, 0.34, 0.0];
        for (a, e) in w.iter().zip(expected) {
            assert_approx_eq!(a, e, 1e-12);
        }
    }

    #[test]
    fn four_term_windows_peak_at_one() {
        for coefficients in [NUTTALL, BLACKMAN_HARRIS] {
            let w = general_cosine(7, &coefficients);
            assert_symmetric(&w);
            // At the centre every cosine is +/-1 and the alternating signs cancel out.
            assert_approx_eq!(w[3], coefficients.iter().sum::<Real>(), 1e-12);
            assert!(w[0] < 1e-3);
        }
    }

    #[test]
    fn gaussian_values() {
        let w = gaussian(7, 1.0);
        assert_symmetric(&w);
        assert_approx_eq!(w[3], 1.0, 1e-12);
        assert_approx_eq!(w[4], (-0.5 as Real).exp(), 1e-12);
        assert_approx_eq!(w[6], (-4.5 as Real).exp(), 1e-12);
    }
}
