//! Instantaneous firing rate estimation by Gaussian smoothing of a binary raster.
use std::f64::consts::PI;

use log;

use super::check_positive;
use crate::core::utils::{convolve_same, linspace, sample_count};
use crate::error::NeuroPlotError;

/// The span of the smoothing kernel, in standard deviations.
pub const KERNEL_SPAN: f64 = 8.0;

/// Returns a Gaussian kernel with standard deviation `sigma` (in seconds), sampled at `sample_rate` (in Hz) over `duration` (in seconds) centered at zero.
///
/// The kernel has `floor(duration * sample_rate)` samples and sums to one.
pub fn gaussian_kernel(sigma: f64, sample_rate: f64, duration: f64) -> Result<Vec<f64>, NeuroPlotError> {
    check_positive("standard deviation", sigma)?;
    check_positive("sample rate", sample_rate)?;
    check_positive("duration", duration)?;

    let len = sample_count(duration, sample_rate)?;
    if len == 0 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "a kernel of {} s sampled at {} Hz has no sample",
            duration, sample_rate
        )));
    }

    let grid = match len {
        1 => vec![0.0],
        _ => linspace(-duration / 2.0, duration / 2.0, len),
    };
    let kernel = grid
        .into_iter()
        .map(|t| (-t.powi(2) / (2.0 * sigma.powi(2))).exp() / (sigma * (2.0 * PI).sqrt()))
        .collect::<Vec<f64>>();

    // the discrete samples only approximately integrate to one
    let total = kernel.iter().sum::<f64>();
    if !(total > 0.0) {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "the kernel vanishes on every sample (standard deviation {} s at {} Hz)",
            sigma, sample_rate
        )));
    }
    Ok(kernel.into_iter().map(|k| k / total).collect())
}

/// Estimates the instantaneous firing rate (in Hz) from a binary raster sampled at `sample_rate` (in Hz).
///
/// The raster is convolved with a Gaussian kernel of standard deviation `kernel_width` (in seconds) spanning
/// eight standard deviations. The output has the length of the raster.
///
/// If the kernel span is shorter than one sample, no smoothing is applied and the rate is the raster times the sample rate.
pub fn rate_from_binary(binary: &[u8], sample_rate: f64, kernel_width: f64) -> Result<Vec<f64>, NeuroPlotError> {
    check_positive("kernel width", kernel_width)?;
    check_positive("sample rate", sample_rate)?;

    let kernel = match sample_count(KERNEL_SPAN * kernel_width, sample_rate)? {
        0 => {
            log::warn!(
                "A kernel of width {} s spans no sample at {} Hz, the raster is not smoothed",
                kernel_width,
                sample_rate
            );
            vec![1.0]
        }
        _ => gaussian_kernel(kernel_width, sample_rate, KERNEL_SPAN * kernel_width)?,
    };
    log::debug!(
        "Smoothing a raster of {} samples with a kernel of {} samples",
        binary.len(),
        kernel.len()
    );

    let signal = binary.iter().map(|b| *b as f64).collect::<Vec<f64>>();
    Ok(convolve_same(&signal, &kernel)
        .into_iter()
        .map(|p| p * sample_rate)
        .collect())
}
