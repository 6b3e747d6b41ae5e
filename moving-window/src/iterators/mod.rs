//! Provides iterators which slice a signal and reduce each shaped slice to a single value.
//!
//! # Example
//!
//! The following example computes a three point moving average.
//! ```rust
//! use moving_window::{BuiltinMetric, ReduceIterable, Slicer, Window, WindowShape};
//!
//! let window = Window::new(WindowShape::Box, 3);
//! let averaged = Slicer::new(&[3.0, 6.0, 9.0, 3.0], 3, 1)
//!     .slices()
//!     .reduce_windows(&window, &BuiltinMetric::Mean)
//!     .collect::<Vec<_>>();
//! assert_eq!(averaged.len(), 4);
//! ```
pub(crate) mod reduce;
pub(crate) mod slices;

pub use reduce::{ReduceIter, ReduceIterable};
pub use slices::{Slicer, Slices, num_slices};
