//! Violin plots, i.e., mirrored Gaussian kernel density estimates drawn around category positions.
use itertools::{izip, Itertools};
use log;
use serde::{Deserialize, Serialize};

use crate::core::axis::{Axis, Line, Polygon, StyleOptions};
use crate::core::color::Rgba;
use crate::core::utils::arange;
use crate::error::NeuroPlotError;

/// The resolution of the evaluation grid, as a fraction of the smoothing bandwidth.
const GRID_RESOLUTION: f64 = 0.1;

/// The number of bandwidths the evaluation grid extends beyond the data range.
const GRID_MARGIN: f64 = 3.0;

/// Options of a violin plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViolinOptions {
    /// The half width of the widest point of each violin.
    pub half_width: f64,
    /// One label per group, attached to the filled violins.
    pub labels: Option<Vec<String>>,
    /// The range of values covered by the violins; defaults to the data range widened by three bandwidths on each side.
    pub value_range: Option<(f64, f64)>,
    pub color: Rgba,
    /// Style keywords forwarded to the filled violins.
    pub style: StyleOptions,
}

impl Default for ViolinOptions {
    fn default() -> Self {
        ViolinOptions {
            half_width: 0.5,
            labels: None,
            value_range: None,
            color: Rgba::opaque(0.5, 0.5, 0.5),
            style: StyleOptions::new(),
        }
    }
}

/// Draws one violin per group at the given positions and returns the smoothed densities, one per group, before peak rescaling.
///
/// Each density is the sum of unnormalized Gaussian bumps (standard deviation `bandwidth`) centered at the samples of the group,
/// evaluated on a common grid sampled every tenth of a bandwidth. Every violin is filled, outlined, and overlaid with its samples.
///
/// # Examples
///
/// ```rust
/// use rusty_neuroplot::canvas::CanvasAxis;
/// use rusty_neuroplot::plot::violin::{violin_plot, ViolinOptions};
///
/// let groups = vec![vec![0.0, 0.5, 1.0], vec![2.0, 2.5]];
/// let mut axis = CanvasAxis::new();
/// let densities = violin_plot(&mut axis, &[1.0, 2.0], &groups, 0.5, &ViolinOptions::default()).unwrap();
///
/// assert_eq!(densities.len(), 2);
/// assert_eq!(densities[0].len(), densities[1].len());
/// assert_eq!(axis.fills().len(), 2);
/// ```
pub fn violin_plot<A: Axis>(
    axis: &mut A,
    positions: &[f64],
    groups: &[Vec<f64>],
    bandwidth: f64,
    options: &ViolinOptions,
) -> Result<Vec<Vec<f64>>, NeuroPlotError> {
    validate(positions, groups, bandwidth, options)?;

    let grid = evaluation_grid(groups, bandwidth, options.value_range)?;
    log::debug!(
        "Violin plot of {} groups evaluated on {} grid points",
        groups.len(),
        grid.len()
    );

    let densities = groups
        .iter()
        .map(|samples| kernel_density(samples, &grid, bandwidth))
        .collect::<Vec<Vec<f64>>>();

    for (i, (x, samples, density)) in izip!(positions, groups, &densities).enumerate() {
        let peak = density.iter().copied().fold(0.0, f64::max);
        let scale = if peak > 0.0 {
            options.half_width / peak
        } else {
            0.0
        };

        // right contour upwards, then left contour downwards
        let xs = density
            .iter()
            .map(|d| x + d * scale)
            .chain(density.iter().rev().map(|d| x - d * scale))
            .collect::<Vec<f64>>();
        let ys = grid
            .iter()
            .chain(grid.iter().rev())
            .copied()
            .collect::<Vec<f64>>();

        axis.fill(Polygon {
            xs: xs.clone(),
            ys: ys.clone(),
            face_color: options.color,
            edge_color: options.color,
            label: options.labels.as_ref().map(|labels| labels[i].clone()),
            style: options.style.clone(),
        });
        axis.plot(Line::new(xs, ys, options.color));
        axis.plot(Line {
            marker: Some(".".to_string()),
            ..Line::new(vec![*x; samples.len()], samples.clone(), Rgba::BLACK)
        });
    }

    Ok(densities)
}

fn validate(
    positions: &[f64],
    groups: &[Vec<f64>],
    bandwidth: f64,
    options: &ViolinOptions,
) -> Result<(), NeuroPlotError> {
    if !bandwidth.is_finite() || bandwidth <= 0.0 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "the smoothing bandwidth must be positive, got {}",
            bandwidth
        )));
    }
    if !options.half_width.is_finite() || options.half_width <= 0.0 {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "the half width must be positive, got {}",
            options.half_width
        )));
    }
    if positions.len() != groups.len() {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "{} positions provided for {} groups",
            positions.len(),
            groups.len()
        )));
    }
    if let Some(labels) = &options.labels {
        if labels.len() != groups.len() {
            return Err(NeuroPlotError::InvalidArgument(format!(
                "{} labels provided for {} groups",
                labels.len(),
                groups.len()
            )));
        }
    }
    if groups.iter().flatten().any(|v| !v.is_finite()) {
        return Err(NeuroPlotError::InvalidArgument(
            "samples must be finite".to_string(),
        ));
    }
    Ok(())
}

/// The values at which the densities are evaluated.
fn evaluation_grid(
    groups: &[Vec<f64>],
    bandwidth: f64,
    value_range: Option<(f64, f64)>,
) -> Result<Vec<f64>, NeuroPlotError> {
    let (lo, hi) = match value_range {
        Some(range) => range,
        None => match groups.iter().flatten().copied().minmax().into_option() {
            Some((min, max)) => (min - GRID_MARGIN * bandwidth, max + GRID_MARGIN * bandwidth),
            None => {
                return Err(NeuroPlotError::InvalidArgument(
                    "at least one sample is required to infer the value range".to_string(),
                ))
            }
        },
    };
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "invalid value range [{}, {}]",
            lo, hi
        )));
    }
    arange(lo, hi, GRID_RESOLUTION * bandwidth)
}

/// Sum of unnormalized Gaussian bumps centered at the samples, evaluated on the grid.
fn kernel_density(samples: &[f64], grid: &[f64], bandwidth: f64) -> Vec<f64> {
    grid.iter()
        .map(|t| {
            samples
                .iter()
                .map(|s| (-(t - s).powi(2) / (2.0 * bandwidth.powi(2))).exp())
                .sum()
        })
        .collect()
}
