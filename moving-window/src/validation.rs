//! Checks untyped arguments, as read from a JSON request, before a moving window is applied.
//!
//! A request is a JSON object with the following keys, all but `signal` are optional:
//! ```json
//! {
//!     "signal": [0.0, 1.0, 2.0],
//!     "window-size": 16,
//!     "step": 1,
//!     "metric": "mean",
//!     "window": "box",
//!     "normalized-window": false
//! }
//! ```
//! Every argument is checked before any computation begins, and the first failure is returned.
use crate::{
    BuiltinMetric, Real, WindowShape,
    error::{Argument, MovingWindowError},
    parameters::{
        DEFAULT_STEP, DEFAULT_WINDOW_SIZE, MIN_STEP, MIN_WINDOW_SIZE, ValidationMode, WindowSpec,
    },
};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::{debug, instrument};

pub const SIGNAL_KEY: &str = "signal";
pub const WINDOW_SIZE_KEY: &str = "window-size";
pub const STEP_KEY: &str = "step";
pub const METRIC_KEY: &str = "metric";
pub const WINDOW_KEY: &str = "window";
pub const NORMALIZED_WINDOW_KEY: &str = "normalized-window";

/// A request whose arguments have all been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedRequest {
    pub signal: Vec<Real>,
    pub spec: WindowSpec,
    pub metric: BuiltinMetric,
}

/// Checks every argument of the request.
///
/// # Parameters
/// - request: a JSON object holding the arguments.
/// - mode: whether window sizes and steps below their minimum are rejected.
#[instrument(skip_all, level = "debug", fields(mode = ?mode), err(level = "warn"))]
pub fn validate(
    request: &Value,
    mode: ValidationMode,
) -> Result<ValidatedRequest, MovingWindowError> {
    let arguments = request
        .as_object()
        .ok_or(MovingWindowError::invalid_type(Argument::Request, "an object"))?;

    let signal = validate_signal(
        arguments
            .get(SIGNAL_KEY)
            .ok_or(MovingWindowError::invalid_type(Argument::Signal, "an array of numbers"))?,
        mode,
    )?;
    let window_size = optional(arguments, WINDOW_SIZE_KEY)
        .map(|value| validate_window_size(value, mode))
        .transpose()?
        .unwrap_or(DEFAULT_WINDOW_SIZE);
    let step = optional(arguments, STEP_KEY)
        .map(|value| validate_step(value, mode))
        .transpose()?
        .unwrap_or(DEFAULT_STEP);
    let metric = optional(arguments, METRIC_KEY)
        .map(validate_metric)
        .transpose()?
        .unwrap_or_default();
    let window = optional(arguments, WINDOW_KEY)
        .map(validate_window)
        .transpose()?
        .unwrap_or_default();
    let normalized_window = optional(arguments, NORMALIZED_WINDOW_KEY)
        .map(validate_normalized_window)
        .transpose()?
        .unwrap_or(false);

    let spec = WindowSpec::with_mode(window_size, step, window, normalized_window, mode)?;
    debug!(
        "Validated request: signal length {}, {spec:?}, metric {metric}",
        signal.len()
    );
    Ok(ValidatedRequest {
        signal,
        spec,
        metric,
    })
}

/// An explicit `null` is treated the same as an absent key.
fn optional<'a>(arguments: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    arguments.get(key).filter(|value| !value.is_null())
}

/// The signal must be a non-empty array of numbers.
///
/// When validation is disabled an empty signal is accepted, and produces no output.
pub fn validate_signal(
    value: &Value,
    mode: ValidationMode,
) -> Result<Vec<Real>, MovingWindowError> {
    const EXPECTED: &str = "an array of numbers";
    let signal = value
        .as_array()
        .ok_or(MovingWindowError::invalid_type(Argument::Signal, EXPECTED))?
        .iter()
        .map(|sample| {
            sample
                .as_f64()
                .ok_or(MovingWindowError::invalid_type(Argument::Signal, EXPECTED))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if mode.is_enabled() && signal.is_empty() {
        return Err(MovingWindowError::invalid_value(
            Argument::Signal,
            "the signal is empty",
        ));
    }
    Ok(signal)
}

/// Extracts a non-negative integer.
///
/// Negative integers, and integers too large for a [usize], are reported as invalid values.
/// JSON integers beyond the range of 64 bits are parsed as floats, so whole floats outside
/// that range are treated as integers which are too large.
fn integer(value: &Value, argument: Argument) -> Result<usize, MovingWindowError> {
    if let Some(unsigned) = value.as_u64() {
        usize::try_from(unsigned).map_err(|_| {
            MovingWindowError::invalid_value(argument, format!("{unsigned} is too large"))
        })
    } else if value.as_i64().is_some() {
        Err(MovingWindowError::invalid_value(
            argument,
            format!("{value} is negative"),
        ))
    } else {
        match value.as_f64() {
            Some(float) if float.fract() == 0.0 && float >= u64::MAX as Real => Err(
                MovingWindowError::invalid_value(argument, format!("{value} is too large")),
            ),
            Some(float) if float.fract() == 0.0 && float < i64::MIN as Real => Err(
                MovingWindowError::invalid_value(argument, format!("{value} is negative")),
            ),
            _ => Err(MovingWindowError::invalid_type(argument, "an integer")),
        }
    }
}

/// Extracts an integer, rejecting values below the minimum only if validation is enabled.
fn bounded_integer(
    value: &Value,
    argument: Argument,
    minimum: usize,
    mode: ValidationMode,
) -> Result<usize, MovingWindowError> {
    let integer = integer(value, argument)?;
    if integer < minimum && mode.is_enabled() {
        return Err(MovingWindowError::invalid_value(
            argument,
            format!("{integer} is less than {minimum}"),
        ));
    }
    Ok(integer)
}

/// The window size must be an integer of at least two.
pub fn validate_window_size(
    value: &Value,
    mode: ValidationMode,
) -> Result<usize, MovingWindowError> {
    bounded_integer(value, Argument::WindowSize, MIN_WINDOW_SIZE, mode)
}

/// The step must be an integer of at least one.
pub fn validate_step(value: &Value, mode: ValidationMode) -> Result<usize, MovingWindowError> {
    bounded_integer(value, Argument::Step, MIN_STEP, mode)
}

/// The metric must name one of the [BuiltinMetric]s.
///
/// Anything else cannot be applied to a slice, and so has the wrong type rather than the
/// wrong value.
pub fn validate_metric(value: &Value) -> Result<BuiltinMetric, MovingWindowError> {
    const EXPECTED: &str = "the name of a metric: mean, sum, min, max, rms, std or median";
    value
        .as_str()
        .and_then(|name| BuiltinMetric::from_str(name).ok())
        .ok_or(MovingWindowError::invalid_type(Argument::Metric, EXPECTED))
}

/// The window must be a string naming one of the [WindowShape]s.
pub fn validate_window(value: &Value) -> Result<WindowShape, MovingWindowError> {
    const SHAPES: &str =
        "box, gaussian, nuttall, hanning, hann, hamming, blackman or blackmanharris";
    let name = value
        .as_str()
        .ok_or(MovingWindowError::invalid_type(Argument::Window, "a string"))?;
    WindowShape::from_str(name).map_err(|_| {
        MovingWindowError::invalid_value(
            Argument::Window,
            format!("\"{name}\" is not one of {SHAPES}"),
        )
    })
}

/// The normalized window flag must be a boolean.
pub fn validate_normalized_window(value: &Value) -> Result<bool, MovingWindowError> {
    value
        .as_bool()
        .ok_or(MovingWindowError::invalid_type(Argument::NormalizedWindow, "a boolean"))
}
