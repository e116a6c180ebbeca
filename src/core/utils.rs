//! Numerical helpers.
use crate::error::NeuroPlotError;

/// The largest number of samples a grid, raster or kernel may have.
pub const MAX_SAMPLES: usize = 1 << 31;

/// Returns `num` evenly spaced values over the closed interval [start, end].
pub fn linspace(start: f64, end: f64, num: usize) -> Vec<f64> {
    match num {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (num - 1) as f64;
            (0..num).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Converts a real number of samples to a length, rejecting non-finite, negative or over-large counts.
pub fn checked_len(count: f64) -> Result<usize, NeuroPlotError> {
    if !count.is_finite() || count < 0.0 || count > MAX_SAMPLES as f64 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "{} samples requested, at most {} are supported",
            count, MAX_SAMPLES
        )));
    }
    Ok(count as usize)
}

/// The number of samples, i.e., `floor(duration * sample_rate)`, covering `duration` at `sample_rate`.
pub fn sample_count(duration: f64, sample_rate: f64) -> Result<usize, NeuroPlotError> {
    checked_len((duration * sample_rate).floor())
}

/// Returns evenly spaced values over the half-open interval [start, end) with the given step.
///
/// The bounds and the step must be finite and the step positive; an empty interval gives no value.
pub fn arange(start: f64, end: f64, step: f64) -> Result<Vec<f64>, NeuroPlotError> {
    if !start.is_finite() || !end.is_finite() || !step.is_finite() || step <= 0.0 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "invalid grid [{}, {}) with step {}",
            start, end, step
        )));
    }
    if end <= start {
        return Ok(vec![]);
    }
    let num = checked_len(((end - start) / step).ceil())?;
    Ok((0..num).map(|i| start + i as f64 * step).collect())
}

/// Returns the largest absolute value, or `None` if there is no value.
pub fn max_abs<'a, I: IntoIterator<Item = &'a f64>>(values: I) -> Option<f64> {
    values.into_iter().map(|v| v.abs()).reduce(f64::max)
}

/// Discrete linear convolution of `signal` with `kernel`, keeping the central part of the full output with the length of `signal`.
///
/// Unlike numpy's "same" mode, which returns `max(signal.len(), kernel.len())` values, the output always has the length
/// of `signal`, also when the kernel is longer; it is then centered on the kernel.
pub fn convolve_same(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    if signal.is_empty() || kernel.is_empty() {
        return vec![0.0; signal.len()];
    }
    let offset = (kernel.len() - 1) / 2;
    (0..signal.len())
        .map(|n| {
            // index in the full convolution output
            let k = n + offset;
            let lo = k.saturating_sub(kernel.len() - 1);
            let hi = k.min(signal.len() - 1);
            (lo..=hi).map(|i| signal[i] * kernel[k - i]).sum()
        })
        .collect()
}

/// Discrete cross-correlation of `x` with `y` (same length), keeping the central part of the full output with the length of `x`.
///
/// Position `i` of the output holds the correlation at lag `i - x.len() / 2`, i.e., the zero lag sits at `x.len() / 2`.
pub fn correlate_same(x: &[f64], y: &[f64]) -> Vec<f64> {
    let reversed = y.iter().rev().copied().collect::<Vec<f64>>();
    convolve_same(x, &reversed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(-1.0, 1.0, 5), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_arange() {
        assert_eq!(arange(0.0, 1.0, 0.25), Ok(vec![0.0, 0.25, 0.5, 0.75]));
        assert_eq!(arange(0.0, 1.0, 0.3).unwrap().len(), 4);
        assert_eq!(arange(1.0, 0.0, 0.1), Ok(vec![]));
        assert!(arange(0.0, 1.0, 0.0).is_err());
        assert!(arange(0.0, 1.0, f64::NAN).is_err());
        assert!(arange(0.0, f64::INFINITY, 0.1).is_err());
        assert!(arange(f64::NEG_INFINITY, 0.0, 0.1).is_err());
        // finite but too many values
        assert!(arange(0.0, 1e300, 0.05).is_err());
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(1.0, 10.0), Ok(10));
        assert_eq!(sample_count(0.9, 3.0), Ok(2));
        assert_eq!(sample_count(0.0, 100.0), Ok(0));
        assert!(sample_count(1e300, 1e300).is_err());
        assert!(sample_count(1e6, 1e6).is_err());
        assert!(checked_len(f64::NAN).is_err());
        assert!(checked_len(-1.0).is_err());
        assert_eq!(checked_len(MAX_SAMPLES as f64), Ok(MAX_SAMPLES));
    }

    #[test]
    fn test_max_abs() {
        assert_eq!(max_abs(&[1.0, -3.0, 2.0]), Some(3.0));
        assert_eq!(max_abs(&[] as &[f64]), None);
    }

    #[test]
    fn test_convolve_same() {
        // identity kernel
        assert_eq!(
            convolve_same(&[1.0, 2.0, 3.0, 4.0, 5.0], &[0.0, 1.0, 0.0]),
            vec![1.0, 2.0, 3.0, 4.0, 5.0]
        );
        // even kernel
        assert_eq!(convolve_same(&[1.0, 2.0, 3.0], &[1.0, 1.0]), vec![1.0, 3.0, 5.0]);
        // moving sum
        assert_eq!(
            convolve_same(&[0.0, 0.0, 1.0, 0.0, 0.0], &[1.0, 2.0, 3.0]),
            vec![0.0, 1.0, 2.0, 3.0, 0.0]
        );
        // kernel longer than the signal
        assert_eq!(
            convolve_same(&[1.0, 1.0], &[1.0, 2.0, 3.0, 4.0, 5.0]),
            vec![5.0, 7.0]
        );
        assert_eq!(convolve_same(&[], &[1.0]), Vec::<f64>::new());
    }

    #[test]
    fn test_correlate_same() {
        let x = [1.0, 2.0, 3.0];
        let corr = correlate_same(&x, &x);
        // lags -1, 0, 1
        assert_relative_eq!(corr[0], 8.0);
        assert_relative_eq!(corr[1], 14.0);
        assert_relative_eq!(corr[2], 8.0);

        let x = [1.0, -1.0, 1.0, -1.0];
        let corr = correlate_same(&x, &x);
        // lags -2, -1, 0, 1
        assert_eq!(corr, vec![2.0, -3.0, 4.0, -3.0]);
    }
}
