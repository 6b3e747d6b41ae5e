//! # Moving Window
//!
//! Applies a moving (also called sliding, or rolling) window to a one-dimensional signal.
//! The signal is padded at both ends by reflection, and cut into fixed-length slices taken
//! every `step` samples. Each slice is multiplied elementwise by a window of weights, and a
//! metric reduces the shaped slice to a single output sample.
//!
//! Depending on the metric this smooths the signal, or traces its envelope or trend.
//!
//! # Example
//!
//! The following example applies a normalized hann window of size seven and sums each slice,
//! which gives a weighted moving average.
//! ```rust
//! use moving_window::{BuiltinMetric, WindowShape, WindowSpec, moving_window};
//!
//! let signal = (0..100).map(|x| (x as f64 / 10.0).sin()).collect::<Vec<_>>();
//! let spec = WindowSpec::new(7, 1, WindowShape::Hann, true).unwrap();
//! let smoothed = moving_window(&signal, &spec, &BuiltinMetric::Sum).unwrap();
//! assert_eq!(smoothed.len(), signal.len());
//! ```
pub mod error;
pub mod iterators;
pub mod metric;
pub mod padding;
pub mod parameters;
pub mod reducer;
pub mod validation;
pub mod window;

/// Type of the signal samples, and of the window weights.
pub type Real = f64;

pub use error::{Argument, MovingWindowError};
pub use iterators::{ReduceIter, ReduceIterable, Slicer, Slices};
pub use metric::{BuiltinMetric, Metric};
pub use parameters::{ValidationMode, WindowSpec};
pub use reducer::{MovingWindow, moving_window};
pub use validation::{ValidatedRequest, validate};
pub use window::{Window, WindowShape};
