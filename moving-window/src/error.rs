//! Errors raised when the arguments of a moving window fail validation.
use strum::Display;
use thiserror::Error;

/// Names the argument which failed validation.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Argument {
    /// The request as a whole, i.e. the object containing the other arguments.
    Request,
    Signal,
    WindowSize,
    Step,
    Metric,
    Window,
    NormalizedWindow,
}

#[derive(Debug, Error, PartialEq)]
pub enum MovingWindowError {
    /// The argument is not of the required semantic type.
    #[error("Invalid type for argument \"{argument}\": expected {expected}")]
    InvalidType {
        argument: Argument,
        expected: &'static str,
    },
    /// The argument has the right type, but lies outside of its allowed domain.
    #[error("Invalid value for argument \"{argument}\": {reason}")]
    InvalidValue { argument: Argument, reason: String },
}

impl MovingWindowError {
    pub(crate) fn invalid_type(argument: Argument, expected: &'static str) -> Self {
        Self::InvalidType { argument, expected }
    }

    pub(crate) fn invalid_value(argument: Argument, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            argument,
            reason: reason.into(),
        }
    }

    /// The argument which caused the error.
    pub fn argument(&self) -> Argument {
        match self {
            Self::InvalidType { argument, .. } | Self::InvalidValue { argument, .. } => *argument,
        }
    }

    pub fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }

    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}
