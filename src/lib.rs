//! This crate provides plotting cosmetics, statistical renderers and spike train analysis tools written in Rust.
//!
//! # Plotting
//!
//! The renderers draw into any backend implementing the [`core::axis::Axis`] and [`core::axis::Figure`] traits.
//! The [`canvas`] module provides a backend recording every operation.
//!
//! ```rust
//! use nalgebra::DMatrix;
//! use rusty_neuroplot::canvas::Canvas;
//! use rusty_neuroplot::core::axis::Figure;
//! use rusty_neuroplot::plot::cosmetics::{label_panels, remove_spines, PanelLabelOptions};
//! use rusty_neuroplot::plot::hinton::{hinton, HintonOptions};
//!
//! let mut figure = Canvas::subplots(2);
//!
//! // Draw a Hinton diagram in the first panel
//! let means = DMatrix::from_row_slice(2, 2, &[1.0, 0.5, -0.5, 0.25]);
//! let stddevs = DMatrix::from_row_slice(2, 2, &[0.1, 0.2, 0.3, 0.4]);
//! hinton(&mut figure.axes_mut()[0], &means, &stddevs, &HintonOptions::default()).unwrap();
//!
//! // Tidy up every panel and label them a, b
//! for axis in figure.axes_mut() {
//!     remove_spines(axis, None).unwrap();
//! }
//! label_panels(&mut figure, &PanelLabelOptions::default()).unwrap();
//!
//! assert_eq!(figure.axes()[0].patches().len(), 4);
//! assert_eq!(figure.axes()[1].annotations()[0].text.content, "b");
//! ```
//!
//! # Spike Train Analysis
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rusty_neuroplot::spike_train::binary::spikes_to_binary;
//! use rusty_neuroplot::spike_train::correlation::serial_correlation;
//! use rusty_neuroplot::spike_train::rate::rate_from_binary;
//! use rusty_neuroplot::spike_train::sampler::poisson_spike_times;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let times = poisson_spike_times(10.0, 60.0, &mut rng).unwrap();
//!
//! let binary = spikes_to_binary(&times, 1000.0, 60.0).unwrap();
//! let rate = rate_from_binary(&binary, 1000.0, 0.05).unwrap();
//! assert_eq!(rate.len(), binary.len());
//!
//! let correlation = serial_correlation(&times, 20, false).unwrap();
//! assert_eq!(correlation.values.len(), 20);
//! ```

pub mod canvas;
pub mod core;
pub mod error;
pub mod plot;
pub mod spike_train;
