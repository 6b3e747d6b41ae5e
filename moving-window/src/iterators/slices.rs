//! Cuts a reflect-padded signal into fixed-length, possibly overlapping slices.
use crate::{Real, padding::reflect_pad};
use std::iter::FusedIterator;
use tracing::trace;

/// Number of slices of length `size`, taken every `step` samples, which fit in `padded_len`
/// samples.
pub fn num_slices(padded_len: usize, size: usize, step: usize) -> usize {
    if size == 0 || size > padded_len {
        0
    } else {
        (padded_len - size) / step.max(1) + 1
    }
}

/// Owns the padded signal from which the slices are taken.
///
/// The slices are replayable: every call to [Slicer::slices] starts a fresh iterator.
#[derive(Clone, Debug)]
pub struct Slicer {
    /// The reflect-padded signal.
    padded: Vec<Real>,
    /// Length of each slice.
    size: usize,
    /// Offset between the starts of consecutive slices.
    step: usize,
}

impl Slicer {
    /// Pads the signal by half the window size on either side.
    ///
    /// # Parameters
    /// - signal: the unpadded signal.
    /// - size: length of each slice, this should be odd so that each slice has a centre sample.
    /// - step: offset between consecutive slices, a zero step is treated as one.
    pub fn new(signal: &[Real], size: usize, step: usize) -> Self {
        let pad = size.saturating_sub(1) / 2;
        let padded = reflect_pad(signal, pad);
        trace!(
            "Padded signal of length {} by {pad} on each side",
            signal.len()
        );
        Self {
            padded,
            size,
            step: step.max(1),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// The number of samples added to each end of the signal.
    pub fn padding(&self) -> usize {
        self.size.saturating_sub(1) / 2
    }

    pub fn padded(&self) -> &[Real] {
        &self.padded
    }

    pub fn len(&self) -> usize {
        num_slices(self.padded.len(), self.size, self.step)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the slice with the given index, if it exists.
    pub fn get(&self, index: usize) -> Option<&[Real]> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.step;
        self.padded.get(start..start + self.size)
    }

    /// Creates a lazy iterator over the slices, in order.
    pub fn slices(&self) -> Slices<'_> {
        Slices {
            slicer: self,
            next: 0,
            end: self.len(),
        }
    }
}

impl<'a> IntoIterator for &'a Slicer {
    type Item = &'a [Real];
    type IntoIter = Slices<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices()
    }
}

/// Iterator over the slices of a [Slicer].
#[derive(Clone, Debug)]
pub struct Slices<'a> {
    slicer: &'a Slicer,
    /// Index of the next slice to yield.
    next: usize,
    /// One past the index of the last slice.
    end: usize,
}

impl<'a> Iterator for Slices<'a> {
    type Item = &'a [Real];

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let slice = self.slicer.get(self.next)?;
        self.next += 1;
        Some(slice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Slices<'_> {}

impl FusedIterator for Slices<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_data() {
        let slicer = Slicer::new(&[], 3, 1);
        assert!(slicer.is_empty());
        assert_eq!(slicer.slices().next(), None);
    }

    #[test]
    fn slices_are_padded_and_overlapping() {
        let slicer = Slicer::new(&[1.0, 2.0, 3.0, 4.0], 3, 1);
        assert_eq!(slicer.padding(), 1);
        let mut iter = slicer.slices();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some([2.0, 1.0, 2.0].as_slice()));
        assert_eq!(iter.next(), Some([1.0, 2.0, 3.0].as_slice()));
        assert_eq!(iter.next(), Some([2.0, 3.0, 4.0].as_slice()));
        assert_eq!(iter.next(), Some([3.0, 4.0, 3.0].as_slice()));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn step_skips_offsets() {
        let signal = (0..10).map(|x| x as Real).collect::<Vec<_>>();
        let slicer = Slicer::new(&signal, 5, 3);
        let starts = slicer
            .slices()
            .map(|slice| slice[0])
            .collect::<Vec<_>>();
        // Padded signal is [2, 1, 0, 1, ..., 9, 8, 7], slices start at offsets 0, 3, 6, 9.
        assert_eq!(starts, vec![2.0, 1.0, 4.0, 7.0]);
        assert!(slicer.slices().all(|slice| slice.len() == 5));
    }

    #[test]
    fn slice_count_formula() {
        for len in 1..20 {
            let signal = vec![0.0; len];
            for size in (1..30).step_by(2) {
                for step in 1..7 {
                    let slicer = Slicer::new(&signal, size, step);
                    let padded_len = len + 2 * ((size - 1) / 2);
                    assert_eq!(slicer.padded().len(), padded_len);
                    assert_eq!(slicer.slices().count(), (padded_len - size) / step + 1);
                }
            }
        }
    }

    #[test]
    fn replayable() {
        let slicer = Slicer::new(&[1.0, 5.0, 2.0], 3, 2);
        let first = slicer.slices().collect::<Vec<_>>();
        let second = (&slicer).into_iter().collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_window_yields_nothing() {
        assert_eq!(num_slices(4, 5, 1), 0);
        assert_eq!(num_slices(5, 5, 1), 1);
        assert_eq!(num_slices(5, 0, 1), 0);
    }

    #[test]
    fn zero_step_is_one() {
        let slicer = Slicer::new(&[1.0, 2.0, 3.0], 3, 0);
        assert_eq!(slicer.step(), 1);
        assert_eq!(slicer.len(), 3);
    }
}
