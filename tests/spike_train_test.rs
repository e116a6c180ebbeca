use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rusty_neuroplot::error::NeuroPlotError;
use rusty_neuroplot::spike_train::binary::spikes_to_binary;
use rusty_neuroplot::spike_train::correlation::{serial_correlation, DEFAULT_MAX_LAGS};
use rusty_neuroplot::spike_train::rate::{gaussian_kernel, rate_from_binary};
use rusty_neuroplot::spike_train::sampler::poisson_spike_times;

const SEED: u64 = 42;

#[test]
fn test_empty_spike_train_to_binary() {
    for (sample_rate, duration) in [(1.0, 1.0), (250.0, 0.3), (1000.0, 12.0)] {
        let binary = spikes_to_binary(&[], sample_rate, duration).unwrap();
        assert_eq!(binary.len(), (duration * sample_rate).floor() as usize);
        assert!(binary.iter().all(|b| *b == 0));
    }
}

#[test]
fn test_spike_train_to_binary() {
    assert_eq!(
        spikes_to_binary(&[0.1, 0.2], 10.0, 1.0).unwrap(),
        vec![0, 1, 1, 0, 0, 0, 0, 0, 0, 0]
    );
    assert!(matches!(
        spikes_to_binary(&[0.1, 2.0], 10.0, 1.0),
        Err(NeuroPlotError::OutOfBounds(_))
    ));
}

#[test]
fn test_gaussian_kernel_normalization() {
    for sigma in [0.002, 0.01, 0.1, 1.0] {
        for sample_rate in [100.0, 1000.0, 30000.0] {
            for duration in [0.05, 0.5, 2.0] {
                match gaussian_kernel(sigma, sample_rate, duration) {
                    Ok(kernel) => assert_relative_eq!(kernel.iter().sum::<f64>(), 1.0, epsilon = 1e-9),
                    // a kernel much narrower than the sampling period vanishes on the grid
                    Err(e) => assert!(matches!(e, NeuroPlotError::InvalidArgument(_))),
                }
            }
        }
    }
}

#[test]
fn test_rate_of_silent_raster() {
    let binary = spikes_to_binary(&[], 1000.0, 2.0).unwrap();
    for kernel_width in [0.001, 0.02, 0.5] {
        let rate = rate_from_binary(&binary, 1000.0, kernel_width).unwrap();
        assert_eq!(rate.len(), binary.len());
        assert!(rate.iter().all(|r| *r == 0.0));
    }
}

#[test]
fn test_rate_of_poisson_spike_train() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let times = poisson_spike_times(40.0, 50.0, &mut rng).unwrap();
    let binary = spikes_to_binary(&times, 1000.0, 50.0).unwrap();
    let rate = rate_from_binary(&binary, 1000.0, 0.05).unwrap();

    // away from the borders, the rate integrates to the number of marked samples
    let num_marked = binary.iter().filter(|b| **b == 1).count() as f64;
    assert_relative_eq!(rate.iter().sum::<f64>() / 1000.0, num_marked, max_relative = 0.01);

    // and its mean is close to the firing rate
    let mean_rate = rate.iter().sum::<f64>() / rate.len() as f64;
    assert!((mean_rate - 40.0).abs() < 4.0);
}

#[test]
fn test_serial_correlation_of_periodic_spike_train() {
    let times = (0..200).map(|k| k as f64 * 0.25).collect::<Vec<f64>>();
    let correlation = serial_correlation(&times, DEFAULT_MAX_LAGS, false).unwrap();

    assert_eq!(correlation.values.len(), DEFAULT_MAX_LAGS);
    let max = correlation
        .values
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(correlation.values[0], max);
}

#[test]
fn test_serial_correlation_of_poisson_spike_train() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let times = poisson_spike_times(20.0, 500.0, &mut rng).unwrap();
    let correlation = serial_correlation(&times, 10, true).unwrap();

    assert_relative_eq!(correlation.values[0], 1.0, epsilon = 1e-9);
    // independent intervals are (almost) uncorrelated
    assert!(correlation.values[1..].iter().all(|c| c.abs() < 0.1));

    if let Some(metadata) = correlation.metadata {
        assert_eq!(metadata.num_lags, 10);
        assert_eq!(metadata.first_lag, Some(correlation.values[1]));
    }
}
