//! Reflect padding, which extends a signal past its boundaries by mirroring its interior.
//!
//! The boundary sample itself is not repeated, i.e. `[1, 2, 3]` padded by two becomes
//! `[3, 2, 1, 2, 3, 2, 1]`. Pads longer than the signal keep reflecting back and forth,
//! so the padded signal is periodic with period `2 * (len - 1)`.
use crate::Real;

/// Maps an index of the padded signal, relative to the start of the unpadded signal,
/// onto an index of the unpadded signal.
///
/// # Parameters
/// - index: position in the padded signal, negative values lie in the left pad.
/// - len: length of the unpadded signal, must be non-zero.
pub(crate) fn reflect_index(index: isize, len: usize) -> usize {
    if len <= 1 {
        // A single sample has nothing to mirror, so it is repeated.
        return 0;
    }
    let period = 2 * (len - 1);
    let position = index.rem_euclid(period as isize) as usize;
    if position < len {
        position
    } else {
        period - position
    }
}

/// Pads both ends of the signal by `pad` samples using reflection.
///
/// An empty signal stays empty, as there is nothing to reflect.
pub fn reflect_pad(signal: &[Real], pad: usize) -> Vec<Real> {
    if signal.is_empty() {
        return Vec::new();
    }
    let len = signal.len();
    let mut padded = Vec::with_capacity(len + 2 * pad);
    let first = -(pad as isize);
    let last = (len + pad) as isize;
    padded.extend(
        (first..last).filter_map(|index| signal.get(reflect_index(index, len)).copied()),
    );
    padded
}
