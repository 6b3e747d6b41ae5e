//! Metrics reduce a shaped slice of the signal to a single value.
use crate::Real;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Implement for reductions which can be applied to each shaped slice.
///
/// Any function or closure taking `&[Real]` and returning a [Real] is a metric.
pub trait Metric {
    /// Reduces the values to a single value.
    fn reduce(&self, values: &[Real]) -> Real;
}

impl<F> Metric for F
where
    F: Fn(&[Real]) -> Real,
{
    fn reduce(&self, values: &[Real]) -> Real {
        self(values)
    }
}

/// Named metrics, which can be selected from configuration or the command line.
#[derive(
    Clone, Copy, Debug, Default, Display, EnumIter, EnumString, IntoStaticStr, PartialEq, Eq, Hash,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[strum(serialize_all = "lowercase")]
pub enum BuiltinMetric {
    /// The arithmetic mean.
    #[default]
    Mean,
    Sum,
    Min,
    Max,
    /// Root mean square.
    Rms,
    /// Population standard deviation.
    Std,
    Median,
}

impl Metric for BuiltinMetric {
    fn reduce(&self, values: &[Real]) -> Real {
        match self {
            Self::Mean => mean(values),
            Self::Sum => values.iter().sum(),
            Self::Min => values.iter().copied().fold(Real::INFINITY, Real::min),
            Self::Max => values.iter().copied().fold(Real::NEG_INFINITY, Real::max),
            Self::Rms => rms(values),
            Self::Std => std_dev(values),
            Self::Median => median(values),
        }
    }
}

/// The arithmetic mean, `NaN` if there are no values.
pub fn mean(values: &[Real]) -> Real {
    values.iter().sum::<Real>() / values.len() as Real
}

/// The root mean square, `NaN` if there are no values.
pub fn rms(values: &[Real]) -> Real {
    (values.iter().map(|v| v * v).sum::<Real>() / values.len() as Real).sqrt()
}

/// The population standard deviation, `NaN` if there are no values.
pub fn std_dev(values: &[Real]) -> Real {
    let mean = mean(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<Real>() / values.len() as Real;
    variance.sqrt()
}

/// The median, `NaN` if there are no values.
///
/// For an even number of values this is the mean of the two central values.
pub fn median(values: &[Real]) -> Real {
    let mut sorted = values.to_vec();
    sorted.sort_by(Real::total_cmp);
    let mid = sorted.len() / 2;
    match (sorted.get(mid.wrapping_sub(1)), sorted.get(mid)) {
        (_, None) => Real::NAN,
        (Some(lower), Some(upper)) if sorted.len() % 2 == 0 => (lower + upper) / 2.0,
        (_, Some(centre)) => *centre,
    }
}
