//! Conversion of spike times to a binary raster.
use crate::core::utils::sample_count;
use crate::error::NeuroPlotError;

use super::check_positive;

/// Converts spike times (in seconds) to a vector of zeros sampled at `sample_rate` (in Hz) over `duration` (in seconds),
/// in which the spike occurrences are marked with a one.
///
/// The raster has `floor(duration * sample_rate)` samples and a spike at time `t` falls in sample `floor(t * sample_rate)`.
/// Spikes falling in the same sample collapse into a single one.
pub fn spikes_to_binary(times: &[f64], sample_rate: f64, duration: f64) -> Result<Vec<u8>, NeuroPlotError> {
    check_positive("sample rate", sample_rate)?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "the duration must be non-negative, got {}",
            duration
        )));
    }

    let len = sample_count(duration, sample_rate)?;
    let mut binary = vec![0; len];
    for &time in times {
        if !time.is_finite() || time < 0.0 {
            return Err(NeuroPlotError::InvalidArgument(format!(
                "spike times must be finite and non-negative, got {}",
                time
            )));
        }
        let index = (time * sample_rate).floor() as usize;
        match binary.get_mut(index) {
            Some(sample) => *sample = 1,
            None => {
                return Err(NeuroPlotError::OutOfBounds(format!(
                    "the spike at {} s falls in sample {} but the raster has {} samples",
                    time, index, len
                )))
            }
        }
    }
    Ok(binary)
}
