//! Serial correlation of inter-spike intervals.
use log;
use serde::{Deserialize, Serialize};

use super::inter_spike_intervals;
use crate::core::utils::correlate_same;
use crate::error::NeuroPlotError;

/// The number of lags returned by default.
pub const DEFAULT_MAX_LAGS: usize = 50;

/// A structured description of a serial correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMetadata {
    pub description: String,
    /// The number of lags in the correlation.
    pub num_lags: usize,
    /// The correlation at lag one, if any.
    pub first_lag: Option<f64>,
    /// The date of generation, as `YYYY-MM-DD`.
    pub generated: String,
}

/// The serial correlation of a spike train, from lag zero onward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerialCorrelation {
    pub values: Vec<f64>,
    /// Present only if requested and supported (see [`metadata_available`]).
    pub metadata: Option<CorrelationMetadata>,
}

/// Whether the crate has been built with the `metadata` feature.
pub fn metadata_available() -> bool {
    cfg!(feature = "metadata")
}

/// Computes the serial correlation of the inter-spike intervals, i.e., their normalized autocorrelation after mean removal,
/// for the first `max_lags` non-negative lags.
///
/// At most `ceil(n / 2)` lags are available for `n` intervals. Intervals without variance, e.g., those of a perfectly
/// periodic spike train, have a correlation of one at lag zero and zero elsewhere.
///
/// # Examples
///
/// ```rust
/// use approx::assert_relative_eq;
/// use rusty_neuroplot::spike_train::correlation::serial_correlation;
///
/// // Alternating short and long intervals are anti-correlated at lag one
/// let times = [0.0, 1.0, 3.0, 4.0, 6.0, 7.0];
/// let correlation = serial_correlation(&times, 50, false).unwrap();
///
/// assert_eq!(correlation.values.len(), 3);
/// assert_relative_eq!(correlation.values[0], 1.0, epsilon = 1e-12);
/// assert_relative_eq!(correlation.values[1], -0.8, epsilon = 1e-12);
/// assert!(correlation.metadata.is_none());
/// ```
pub fn serial_correlation(
    times: &[f64],
    max_lags: usize,
    enable_metadata: bool,
) -> Result<SerialCorrelation, NeuroPlotError> {
    let intervals = inter_spike_intervals(times)?;
    if intervals.is_empty() {
        return Err(NeuroPlotError::InvalidArgument(
            "at least two spikes are required".to_string(),
        ));
    }

    let n = intervals.len();
    let mean = intervals.iter().sum::<f64>() / n as f64;
    let centered = intervals.iter().map(|isi| isi - mean).collect::<Vec<f64>>();
    let energy = centered.iter().map(|c| c * c).sum::<f64>();

    let values = if energy > 0.0 {
        correlate_same(&centered, &centered)
            .into_iter()
            .skip(n / 2)
            .take(max_lags)
            .map(|c| c / energy)
            .collect::<Vec<f64>>()
    } else {
        log::debug!("The {} inter-spike intervals have no variance", n);
        (0..n - n / 2)
            .take(max_lags)
            .map(|lag| if lag == 0 { 1.0 } else { 0.0 })
            .collect::<Vec<f64>>()
    };

    let metadata = if enable_metadata {
        describe(&values)
    } else {
        None
    };
    Ok(SerialCorrelation { values, metadata })
}

#[cfg(feature = "metadata")]
fn describe(values: &[f64]) -> Option<CorrelationMetadata> {
    Some(CorrelationMetadata {
        description: "Serial correlation of the inter-spike intervals, from lag zero onward".to_string(),
        num_lags: values.len(),
        first_lag: values.get(1).copied(),
        generated: chrono::Local::now().date_naive().to_string(),
    })
}

#[cfg(not(feature = "metadata"))]
fn describe(_values: &[f64]) -> Option<CorrelationMetadata> {
    log::debug!("Metadata requested but the metadata feature is disabled");
    None
}
