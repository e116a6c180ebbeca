//! Sampling of homogeneous Poisson spike trains.
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rusty_neuroplot::spike_train::sampler::poisson_spike_times;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let times = poisson_spike_times(20.0, 5.0, &mut rng).unwrap();
//! assert!(times.iter().all(|t| (0.0..5.0).contains(t)));
//! ```
use log;
use rand::Rng;
use rand_distr::{Distribution, Exp};

use super::check_positive;
use crate::core::utils::sample_count;
use crate::error::NeuroPlotError;

/// Samples the spike times (in seconds) of a homogeneous Poisson process with the given firing rate (in Hz) over [0, duration).
///
/// The inter-spike intervals are drawn from an exponential distribution; the returned times are sorted.
pub fn poisson_spike_times<R: Rng + ?Sized>(
    firing_rate: f64,
    duration: f64,
    rng: &mut R,
) -> Result<Vec<f64>, NeuroPlotError> {
    check_positive("duration", duration)?;
    if !firing_rate.is_finite() || firing_rate < 0.0 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "the firing rate must be non-negative, got {}",
            firing_rate
        )));
    }
    if firing_rate == 0.0 {
        return Ok(vec![]);
    }

    // the expected number of spikes must fit in memory
    sample_count(duration, firing_rate)?;

    let isi = Exp::new(firing_rate).map_err(|e| NeuroPlotError::InvalidArgument(e.to_string()))?;

    let mut times = Vec::new();
    let mut time = isi.sample(rng);
    while time < duration {
        times.push(time);
        time += isi.sample(rng);
    }

    log::info!(
        "{} spikes sampled over {} s (expected number of spikes is {})",
        times.len(),
        duration,
        firing_rate * duration
    );
    Ok(times)
}
