//! Defines the subcommands of the tool, and how each is turned into a moving window request.
use clap::{Parser, Subcommand};
use moving_window::{
    BuiltinMetric, MovingWindowError, ValidationMode, Window, WindowSpec,
    parameters::{DEFAULT_STEP, DEFAULT_WINDOW_SIZE},
    validation::{
        self, METRIC_KEY, NORMALIZED_WINDOW_KEY, SIGNAL_KEY, STEP_KEY, WINDOW_KEY,
        WINDOW_SIZE_KEY,
    },
};
use serde_json::{Value, json};

/// Encapsulates the options of a single moving window pass over the input signal.
#[derive(Default, Debug, Clone, Parser)]
pub(crate) struct ApplyParameters {
    /// Number of samples in each window. Even sizes are incremented by one.
    #[clap(long, default_value_t = DEFAULT_WINDOW_SIZE as i64, allow_hyphen_values = true)]
    pub(crate) window_size: i64,

    /// Offset, in samples, between the start of consecutive windows.
    #[clap(long, default_value_t = DEFAULT_STEP as i64, allow_hyphen_values = true)]
    pub(crate) step: i64,

    /// Reduction applied to each shaped window.
    #[clap(long, default_value = "mean")]
    pub(crate) metric: BuiltinMetric,

    /// Family of the window weights, e.g. box, gaussian, hann, hamming, blackman.
    #[clap(long, default_value = "box")]
    pub(crate) window: String,

    /// If set, the window weights are rescaled to sum to one.
    #[clap(long)]
    pub(crate) normalized_window: bool,
}

impl ApplyParameters {
    /// Combines these options with the signal into a request object.
    ///
    /// The request is passed through the same validation as a request read from a file,
    /// so that out of range values are reported identically.
    pub(crate) fn to_request(&self, signal: Value) -> Value {
        json!({
            SIGNAL_KEY: signal,
            WINDOW_SIZE_KEY: self.window_size,
            STEP_KEY: self.step,
            METRIC_KEY: self.metric.to_string(),
            WINDOW_KEY: self.window,
            NORMALIZED_WINDOW_KEY: self.normalized_window
        })
    }
}

/// Encapsulates the options used to inspect a window's weights.
#[derive(Default, Debug, Clone, Parser)]
pub(crate) struct ShapeParameters {
    /// Family of the window weights.
    #[clap(long, default_value = "box")]
    pub(crate) window: String,

    /// Requested window size. Even sizes are incremented by one.
    #[clap(long, default_value_t = DEFAULT_WINDOW_SIZE as i64, allow_hyphen_values = true)]
    pub(crate) window_size: i64,

    /// If set, the weights are rescaled to sum to one.
    #[clap(long)]
    pub(crate) normalized_window: bool,
}

impl ShapeParameters {
    /// Validates the options and generates the window they describe.
    pub(crate) fn window(&self, mode: ValidationMode) -> Result<Window, MovingWindowError> {
        let window_size = validation::validate_window_size(&json!(self.window_size), mode)?;
        let shape = validation::validate_window(&json!(self.window))?;
        let spec =
            WindowSpec::with_mode(window_size, DEFAULT_STEP, shape, self.normalized_window, mode)?;
        let window = Window::new(shape, spec.effective_size());
        Ok(if spec.normalized_window() {
            window.normalized()
        } else {
            window
        })
    }
}

#[derive(Debug, Subcommand)]
pub(crate) enum Mode {
    /// Applies a moving window to a signal given as a JSON array of numbers.
    Apply(ApplyParameters),
    /// Applies a moving window described by a JSON request object, which includes the signal.
    Request,
    /// Writes the weights of a window as a JSON array, the input is not read.
    Shape(ShapeParameters),
}

#[cfg(test)]
mod tests {
    use super::*;
    use moving_window::{Argument, WindowShape};

    #[test]
    fn apply_request_is_validated() {
        let parameters = ApplyParameters {
            window_size: 5,
            step: 2,
            metric: BuiltinMetric::Max,
            window: "hamming".to_owned(),
            normalized_window: true,
        };
        let request =
            validation::validate(&parameters.to_request(json!([1, 2, 3])), ValidationMode::Enabled)
                .unwrap();
        assert_eq!(request.signal, vec![1.0, 2.0, 3.0]);
        assert_eq!(request.metric, BuiltinMetric::Max);
        assert_eq!(
            request.spec,
            WindowSpec::new(5, 2, WindowShape::Hamming, true).unwrap()
        );
    }

    #[test]
    fn apply_request_out_of_range() {
        let parameters = ApplyParameters {
            window_size: 1,
            step: 1,
            window: "box".to_owned(),
            ..Default::default()
        };
        let error =
            validation::validate(&parameters.to_request(json!([1, 2, 3])), ValidationMode::Enabled)
                .unwrap_err();
        assert!(error.is_invalid_value());
        assert_eq!(error.argument(), Argument::WindowSize);

        let request = validation::validate(
            &parameters.to_request(json!([1, 2, 3])),
            ValidationMode::Disabled,
        )
        .unwrap();
        assert_eq!(request.spec.window_size(), 1);
        assert_eq!(request.spec.effective_size(), 1);
    }

    #[test]
    fn shape_window() {
        let parameters = ShapeParameters {
            window: "hann".to_owned(),
            window_size: 4,
            normalized_window: false,
        };
        let window = parameters.window(ValidationMode::Enabled).unwrap();
        assert_eq!(window.len(), 5);
        assert_eq!(window.shape(), WindowShape::Hann);

        let normalized = ShapeParameters {
            normalized_window: true,
            ..parameters
        }
        .window(ValidationMode::Enabled)
        .unwrap();
        assert!((normalized.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn shape_unknown_window() {
        let parameters = ShapeParameters {
            window: "triangle".to_owned(),
            window_size: 5,
            normalized_window: false,
        };
        let error = parameters.window(ValidationMode::Disabled).unwrap_err();
        assert!(error.is_invalid_value());
        assert_eq!(error.argument(), Argument::Window);
    }
}
