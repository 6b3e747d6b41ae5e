//! Defines the [Window] weights which shape each slice of the signal before a metric is applied.
//!
//! # Example
//!
//! The following example builds a normalized hann window of length five and shapes a slice.
//! ```rust
//! use moving_window::{Window, WindowShape};
//!
//! let window = Window::new(WindowShape::Hann, 5).normalized();
//! let shaped = window.apply(&[1.0, 1.0, 1.0, 1.0, 1.0]);
//! assert!((shaped.iter().sum::<f64>() - 1.0).abs() < 1e-12);
//! ```
mod shapes;

use crate::Real;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::trace;

/// The standard deviation of a gaussian window is its length divided by this value.
pub const GAUSSIAN_SD_DIVISOR: Real = 6.0;

/// The closed set of window families which can shape a slice.
#[derive(
    Clone, Copy, Debug, Default, Display, EnumIter, EnumString, IntoStaticStr, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum WindowShape {
    /// Rectangular window, all weights equal one.
    #[default]
    Box,
    /// Gaussian window whose standard deviation is a sixth of its length.
    Gaussian,
    /// Nuttall's minimum four-term Blackman-Harris window.
    Nuttall,
    /// Synonym of [WindowShape::Hann].
    Hanning,
    Hann,
    Hamming,
    Blackman,
    /// Four-term Blackman-Harris window.
    BlackmanHarris,
}

impl WindowShape {
    /// Generates the weights of this window family with the given length.
    pub fn weights(&self, len: usize) -> Vec<Real> {
        match self {
            Self::Box => shapes::boxcar(len),
            Self::Gaussian => shapes::gaussian(len, len as Real / GAUSSIAN_SD_DIVISOR),
            Self::Nuttall => shapes::general_cosine(len, &shapes::NUTTALL),
            Self::Hanning | Self::Hann => shapes::general_cosine(len, &shapes::HANN),
            Self::Hamming => shapes::general_cosine(len, &shapes::HAMMING),
            Self::Blackman => shapes::general_cosine(len, &shapes::BLACKMAN),
            Self::BlackmanHarris => shapes::general_cosine(len, &shapes::BLACKMAN_HARRIS),
        }
    }
}

/// A sequence of weights generated from a [WindowShape].
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    shape: WindowShape,
    weights: Vec<Real>,
    normalized: bool,
}

impl Window {
    /// Creates an unnormalized window.
    ///
    /// # Parameters
    /// - shape: the family to generate the weights from.
    /// - len: the number of weights.
    pub fn new(shape: WindowShape, len: usize) -> Self {
        Self {
            shape,
            weights: shape.weights(len),
            normalized: false,
        }
    }

    /// Rescales the weights so that they sum to one.
    ///
    /// Normalizing an already normalized window leaves it unchanged.
    pub fn normalized(mut self) -> Self {
        if self.normalized {
            return self;
        }
        let sum = self.sum();
        if sum != 0.0 {
            self.weights.iter_mut().for_each(|w| *w /= sum);
        }
        trace!("Normalized {} window by {sum}", self.shape);
        self.normalized = true;
        self
    }

    pub fn shape(&self) -> WindowShape {
        self.shape
    }

    pub fn weights(&self) -> &[Real] {
        &self.weights
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn sum(&self) -> Real {
        self.weights.iter().sum()
    }

    /// Multiplies the slice elementwise by the weights.
    pub fn apply(&self, slice: &[Real]) -> Vec<Real> {
        let mut shaped = Vec::with_capacity(self.len());
        self.apply_into(slice, &mut shaped);
        shaped
    }

    /// As [Window::apply], but writes into an existing buffer, which is cleared first.
    pub fn apply_into(&self, slice: &[Real], shaped: &mut Vec<Real>) {
        shaped.clear();
        shaped.extend(slice.iter().zip(&self.weights).map(|(s, w)| s * w));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn shape_names() {
        let names = WindowShape::iter()
            .map(|shape| shape.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "box",
                "gaussian",
                "nuttall",
                "hanning",
                "hann",
                "hamming",
                "blackman",
                "blackmanharris"
            ]
        );
        for shape in WindowShape::iter() {
            assert_eq!(WindowShape::from_str(&shape.to_string()), Ok(shape));
        }
        assert!(WindowShape::from_str("unknown").is_err());
        assert!(WindowShape::from_str("boxcar").is_err());
    }

    #[test]
    fn every_shape_has_requested_length() {
        for shape in WindowShape::iter() {
            for len in [0, 1, 2, 5, 17] {
                assert_eq!(Window::new(shape, len).len(), len, "{shape}");
            }
        }
    }

    #[test]
    fn hanning_is_hann() {
        assert_eq!(
            WindowShape::Hanning.weights(9),
            WindowShape::Hann.weights(9)
        );
    }

    #[test]
    fn box_is_all_ones() {
        assert_eq!(WindowShape::Box.weights(3), vec![1.0, 1.0, 1.0]);
        assert_eq!(WindowShape::default(), WindowShape::Box);
    }

    #[test]
    fn gaussian_uses_sixth_of_length() {
        let w = WindowShape::Gaussian.weights(7);
        let sd: Real = 7.0 / 6.0;
        assert_approx_eq!(w[3], 1.0, 1e-12);
        assert_approx_eq!(w[0], (-0.5 * (3.0 / sd) * (3.0 / sd)).exp(), 1e-12);
    }

    #[test]
    fn normalized_sums_to_one() {
        for shape in WindowShape::iter() {
            let window = Window::new(shape, 11).normalized();
            assert!(window.is_normalized());
            assert_approx_eq!(window.sum(), 1.0, 1e-12);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for shape in WindowShape::iter() {
            let once = Window::new(shape, 11).normalized();
            let twice = once.clone().normalized();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn apply_multiplies_elementwise() {
        let window = Window::new(WindowShape::Hann, 5);
        let shaped = window.apply(&[2.0, 2.0, 2.0, 2.0, 2.0]);
        let expected = [0.0, 1.0, 2.0, 1.0, 0.0];
        for (a, e) in shaped.iter().zip(expected) {
            assert_approx_eq!(a, e, 1e-12);
        }
    }

    #[test]
    fn apply_into_reuses_buffer() {
        let window = Window::new(WindowShape::Box, 3);
        let mut buffer = vec![9.0; 10];
        window.apply_into(&[1.0, 2.0, 3.0], &mut buffer);
        assert_eq!(buffer, vec![1.0, 2.0, 3.0]);
    }
}
