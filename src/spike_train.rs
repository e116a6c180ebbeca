//! Spike train analysis: binary rasters, rate estimation, serial correlation and sampling.
//!
//! Spike times are given in seconds as a one-dimensional slice.
//!
//! # Examples
//!
//! ```rust
//! use approx::assert_relative_eq;
//! use rusty_neuroplot::spike_train::binary::spikes_to_binary;
//! use rusty_neuroplot::spike_train::rate::rate_from_binary;
//!
//! // Two spikes sampled at 1 kHz over one second
//! let binary = spikes_to_binary(&[0.25, 0.5], 1000.0, 1.0).unwrap();
//! assert_eq!(binary.iter().filter(|b| **b == 1).count(), 2);
//!
//! // The instantaneous rate integrates to the number of spikes
//! let rate = rate_from_binary(&binary, 1000.0, 0.01).unwrap();
//! assert_relative_eq!(rate.iter().sum::<f64>() / 1000.0, 2.0, epsilon = 1e-6);
//! ```
use itertools::Itertools;

use crate::error::NeuroPlotError;

pub mod binary;
pub mod correlation;
pub mod sampler;
pub mod rate;

/// Returns the successive differences of the spike times.
///
/// The spike times must be finite and sorted in non-decreasing order.
pub fn inter_spike_intervals(times: &[f64]) -> Result<Vec<f64>, NeuroPlotError> {
    if times.iter().any(|t| !t.is_finite()) {
        return Err(NeuroPlotError::InvalidArgument(
            "spike times must be finite".to_string(),
        ));
    }
    if let Some((t1, t2)) = times.iter().tuple_windows().find(|(t1, t2)| t2 < t1) {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "spike times must be sorted, got {} before {}",
            t1, t2
        )));
    }
    Ok(times.iter().tuple_windows().map(|(t1, t2)| t2 - t1).collect())
}

/// Checks a parameter is finite and positive.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), NeuroPlotError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "the {} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}
