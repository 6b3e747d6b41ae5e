//! Defines the parameters of a moving window, and the checks they are subject to.
use crate::{
    WindowShape,
    error::{Argument, MovingWindowError},
};

pub const DEFAULT_WINDOW_SIZE: usize = 16;
pub const DEFAULT_STEP: usize = 1;
/// Smallest window size accepted when validation is enabled.
pub const MIN_WINDOW_SIZE: usize = 2;
/// Smallest step accepted when validation is enabled.
pub const MIN_STEP: usize = 1;

/// Determines whether arguments are checked before a moving window is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Out of range arguments are rejected with an error.
    #[default]
    Enabled,
    /// Range checks are skipped and arguments are used as given.
    ///
    /// A window size of zero or one gives a window of one sample, and a zero step is
    /// treated as one. Arguments which cannot be interpreted at all (e.g. a negative
    /// size, or a window name which does not exist) are still rejected.
    Disabled,
}

impl ValidationMode {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Encapsulates the window size, step and window shape of a moving window.
///
/// The metric is not part of the spec, as it is passed alongside the signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowSpec {
    /// The requested window size, before it is adjusted to be odd.
    window_size: usize,
    /// Offset between the start of consecutive windows.
    step: usize,
    /// The family from which the window weights are generated.
    window: WindowShape,
    /// If set, the window weights are rescaled to sum to one.
    normalized_window: bool,
}

impl Default for WindowSpec {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            step: DEFAULT_STEP,
            window: WindowShape::default(),
            normalized_window: false,
        }
    }
}

impl WindowSpec {
    /// Creates a spec, rejecting a window size less than two or a step less than one.
    pub fn new(
        window_size: usize,
        step: usize,
        window: WindowShape,
        normalized_window: bool,
    ) -> Result<Self, MovingWindowError> {
        if window_size < MIN_WINDOW_SIZE {
            return Err(MovingWindowError::invalid_value(
                Argument::WindowSize,
                format!("{window_size} is less than {MIN_WINDOW_SIZE}"),
            ));
        }
        if step < MIN_STEP {
            return Err(MovingWindowError::invalid_value(
                Argument::Step,
                format!("{step} is less than {MIN_STEP}"),
            ));
        }
        Ok(Self {
            window_size,
            step,
            window,
            normalized_window,
        })
    }

    /// Creates a spec without checking the window size or step.
    pub fn unchecked(
        window_size: usize,
        step: usize,
        window: WindowShape,
        normalized_window: bool,
    ) -> Self {
        Self {
            window_size,
            step,
            window,
            normalized_window,
        }
    }

    /// Creates a spec according to the given validation mode.
    pub fn with_mode(
        window_size: usize,
        step: usize,
        window: WindowShape,
        normalized_window: bool,
        mode: ValidationMode,
    ) -> Result<Self, MovingWindowError> {
        match mode {
            ValidationMode::Enabled => Self::new(window_size, step, window, normalized_window),
            ValidationMode::Disabled => Ok(Self::unchecked(
                window_size,
                step,
                window,
                normalized_window,
            )),
        }
    }

    pub fn with_window_size(self, window_size: usize) -> Result<Self, MovingWindowError> {
        Self::new(window_size, self.step, self.window, self.normalized_window)
    }

    pub fn with_step(self, step: usize) -> Result<Self, MovingWindowError> {
        Self::new(self.window_size, step, self.window, self.normalized_window)
    }

    pub fn with_window(self, window: WindowShape) -> Self {
        Self { window, ..self }
    }

    pub fn with_normalized_window(self, normalized_window: bool) -> Self {
        Self {
            normalized_window,
            ..self
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The window size actually used.
    ///
    /// Even sizes are incremented by one so that every window has a centre sample.
    pub fn effective_size(&self) -> usize {
        if self.window_size % 2 == 0 {
            self.window_size + 1
        } else {
            self.window_size
        }
    }

    /// The number of samples the signal is padded by on each side.
    pub fn padding(&self) -> usize {
        (self.effective_size() - 1) / 2
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn window(&self) -> WindowShape {
        self.window
    }

    pub fn normalized_window(&self) -> bool {
        self.normalized_window
    }

    /// The number of output samples produced from a signal of the given length.
    pub fn output_len(&self, signal_len: usize) -> usize {
        if signal_len == 0 {
            return 0;
        }
        crate::iterators::num_slices(
            signal_len + 2 * self.padding(),
            self.effective_size(),
            self.step,
        )
    }
}
