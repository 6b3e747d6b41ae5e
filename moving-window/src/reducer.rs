//! Applies a shaped moving window and a metric to a whole signal.
use crate::{
    Metric, Real, ReduceIterable, Slicer, Window, WindowSpec,
    error::{Argument, MovingWindowError},
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, instrument};

/// A moving window whose weights have been generated, so that it can be applied to many signals.
#[derive(Clone, Debug)]
pub struct MovingWindow {
    spec: WindowSpec,
    window: Window,
}

impl MovingWindow {
    /// Generates the window weights from the spec, using the spec's effective (odd) size.
    pub fn new(spec: &WindowSpec) -> Self {
        let window = Window::new(spec.window(), spec.effective_size());
        let window = if spec.normalized_window() {
            window.normalized()
        } else {
            window
        };
        debug!(
            "Created {} window of size {} (requested {}), step {}, normalized: {}",
            spec.window(),
            spec.effective_size(),
            spec.window_size(),
            spec.step(),
            spec.normalized_window()
        );
        Self {
            spec: spec.clone(),
            window,
        }
    }

    pub fn spec(&self) -> &WindowSpec {
        &self.spec
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn slicer(&self, signal: &[Real]) -> Slicer {
        Slicer::new(signal, self.window.len(), self.spec.step())
    }

    /// Applies the window to each slice of the signal, and reduces each shaped slice with
    /// the metric.
    ///
    /// # Parameters
    /// - signal: the signal to process, an empty signal produces no output.
    /// - metric: reduction applied to each shaped slice.
    #[instrument(skip_all, level = "debug", fields(signal_len = signal.len(), num_slices))]
    pub fn apply<M>(&self, signal: &[Real], metric: &M) -> Vec<Real>
    where
        M: Metric + ?Sized,
    {
        let slicer = self.slicer(signal);
        tracing::Span::current().record("num_slices", slicer.len());
        slicer
            .slices()
            .reduce_windows(&self.window, metric)
            .collect()
    }

    /// As [MovingWindow::apply], but the slices are reduced in parallel.
    ///
    /// The output is identical to, and in the same order as, that of [MovingWindow::apply].
    #[instrument(skip_all, level = "debug", fields(signal_len = signal.len(), num_slices))]
    pub fn apply_par<M>(&self, signal: &[Real], metric: &M) -> Vec<Real>
    where
        M: Metric + Sync + ?Sized,
    {
        let slicer = self.slicer(signal);
        tracing::Span::current().record("num_slices", slicer.len());
        (0..slicer.len())
            .into_par_iter()
            .filter_map(|index| slicer.get(index))
            .map(|slice| metric.reduce(&self.window.apply(slice)))
            .collect()
    }
}

/// Applies a moving window to the signal.
///
/// For each slice of the reflect-padded signal, the slice is multiplied elementwise by the
/// window weights, and the metric reduces the result to one output sample.
///
/// # Parameters
/// - signal: the signal to process, this must not be empty.
/// - spec: window size, step and window shape.
/// - metric: reduction applied to each shaped slice.
///
/// # Example
/// ```rust
/// use moving_window::{BuiltinMetric, WindowShape, WindowSpec, moving_window};
///
/// let spec = WindowSpec::new(3, 1, WindowShape::Box, false).unwrap();
/// let smoothed = moving_window(&[3.0, 6.0, 9.0, 3.0], &spec, &BuiltinMetric::Mean).unwrap();
/// assert_eq!(smoothed, vec![5.0, 6.0, 6.0, 7.0]);
/// ```
pub fn moving_window<M>(
    signal: &[Real],
    spec: &WindowSpec,
    metric: &M,
) -> Result<Vec<Real>, MovingWindowError>
where
    M: Metric + ?Sized,
{
    if signal.is_empty() {
        return Err(MovingWindowError::invalid_value(
            Argument::Signal,
            "the signal is empty",
        ));
    }
    Ok(MovingWindow::new(spec).apply(signal, metric))
}
