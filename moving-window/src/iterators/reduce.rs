use crate::{Metric, Real, Window};

/// Iterator which shapes each slice from another iterator by a window, and reduces it by a metric.
pub struct ReduceIter<'a, I, M>
where
    M: Metric + ?Sized,
{
    /// Source of slices.
    source: I,
    /// Weights to apply to each slice.
    window: &'a Window,
    /// Reduction applied to each shaped slice.
    metric: &'a M,
    /// Reused between slices so that only one shaped slice is ever allocated.
    shaped: Vec<Real>,
}

impl<'a, 's, I, M> Iterator for ReduceIter<'a, I, M>
where
    I: Iterator<Item = &'s [Real]>,
    M: Metric + ?Sized,
{
    type Item = Real;

    fn next(&mut self) -> Option<Real> {
        let slice = self.source.next()?;
        self.window.apply_into(slice, &mut self.shaped);
        Some(self.metric.reduce(&self.shaped))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<'a, 's, I, M> ExactSizeIterator for ReduceIter<'a, I, M>
where
    I: ExactSizeIterator<Item = &'s [Real]>,
    M: Metric + ?Sized,
{
}

/// Provides method for creating a [ReduceIter] from an iterator of slices.
pub trait ReduceIterable<'s>: Iterator<Item = &'s [Real]> + Sized {
    /// Creates an iterator which shapes and reduces each slice as it is consumed.
    ///
    /// # Parameters
    /// - window: weights multiplied elementwise with each slice.
    /// - metric: reduction applied to each shaped slice.
    fn reduce_windows<'a, M>(self, window: &'a Window, metric: &'a M) -> ReduceIter<'a, Self, M>
    where
        M: Metric + ?Sized;
}

impl<'s, I> ReduceIterable<'s> for I
where
    I: Iterator<Item = &'s [Real]>,
{
    fn reduce_windows<'a, M>(self, window: &'a Window, metric: &'a M) -> ReduceIter<'a, Self, M>
    where
        M: Metric + ?Sized,
    {
        ReduceIter {
            source: self,
            window,
            metric,
            shaped: Vec::with_capacity(window.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BuiltinMetric, Slicer, WindowShape};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn zero_data() {
        let window = Window::new(WindowShape::Box, 3);
        let slicer = Slicer::new(&[], 3, 1);
        let mut iter = slicer.slices().reduce_windows(&window, &BuiltinMetric::Mean);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn box_mean() {
        let window = Window::new(WindowShape::Box, 3);
        let slicer = Slicer::new(&[3.0, 6.0, 9.0, 3.0], 3, 1);
        let iter = slicer.slices().reduce_windows(&window, &BuiltinMetric::Mean);
        assert_eq!(iter.len(), 4);
        let expected = [5.0, 6.0, 6.0, 7.0];
        for (a, e) in iter.zip(expected) {
            assert_approx_eq!(a, e, 1e-12);
        }
    }

    #[test]
    fn closure_metric_sees_shaped_slice() {
        let window = Window::new(WindowShape::Hann, 3);
        let slicer = Slicer::new(&[4.0, 8.0, 4.0], 3, 1);
        // The hann window of length three is [0, 1, 0], so only the centre survives.
        let centre = |shaped: &[Real]| shaped.iter().sum::<Real>();
        let output = slicer
            .slices()
            .reduce_windows(&window, &centre)
            .collect::<Vec<_>>();
        assert_eq!(output.len(), 3);
        for (a, e) in output.iter().zip([4.0, 8.0, 4.0]) {
            assert_approx_eq!(a, e, 1e-12);
        }
    }
}
