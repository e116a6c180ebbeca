//! Hinton diagrams: a matrix of squares whose sizes encode means and whose colors encode standard deviations.
use log;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::core::axis::{Axis, Rectangle};
use crate::core::color::{Colormap, Rgba};
use crate::core::utils::max_abs;
use crate::error::NeuroPlotError;

/// Options of a Hinton diagram.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HintonOptions {
    /// The mean mapped to a unit square; defaults to the largest absolute mean.
    pub mean_scale: Option<f64>,
    /// The standard deviation mapped to the top of the colormap; defaults to the largest absolute standard deviation.
    pub stddev_scale: Option<f64>,
    pub colormap: Colormap,
}

/// Draws a Hinton diagram into the axis and returns the last drawn square, e.g., to attach a colorbar.
///
/// The cell (row, col) is drawn as a square centered at (col, row) with side `|mean / mean_scale|`,
/// colored by the colormap evaluated at `stddev / stddev_scale`. Row 0 is displayed at the top.
///
/// # Examples
///
/// ```rust
/// use nalgebra::DMatrix;
/// use rusty_neuroplot::canvas::CanvasAxis;
/// use rusty_neuroplot::plot::hinton::{hinton, HintonOptions};
///
/// let means = DMatrix::from_row_slice(2, 2, &[1.0, -0.5, 0.25, 2.0]);
/// let stddevs = DMatrix::from_row_slice(2, 2, &[0.1, 0.2, 0.3, 0.4]);
///
/// let mut axis = CanvasAxis::new();
/// let last = hinton(&mut axis, &means, &stddevs, &HintonOptions::default()).unwrap();
///
/// assert_eq!(axis.patches().len(), 4);
/// assert_eq!(last.center(), (1.0, 1.0));
/// assert_eq!(last.width, 1.0);
/// ```
pub fn hinton<A: Axis>(
    axis: &mut A,
    means: &DMatrix<f64>,
    stddevs: &DMatrix<f64>,
    options: &HintonOptions,
) -> Result<Rectangle, NeuroPlotError> {
    if means.shape() != stddevs.shape() {
        return Err(NeuroPlotError::InvalidArgument(format!(
            "means and standard deviations must have the same shape, got {:?} and {:?}",
            means.shape(),
            stddevs.shape()
        )));
    }
    if means.is_empty() {
        return Err(NeuroPlotError::InvalidArgument(
            "cannot draw a Hinton diagram of an empty matrix".to_string(),
        ));
    }

    let mean_scale = resolve_scale(options.mean_scale, means, "mean")?;
    let stddev_scale = resolve_scale(options.stddev_scale, stddevs, "standard deviation")?;

    axis.set_background(Rgba::TRANSPARENT);

    let mut last = None;
    for row in 0..means.nrows() {
        for col in 0..means.ncols() {
            let color = options.colormap.eval(stddevs[(row, col)] / stddev_scale);
            let side = (means[(row, col)] / mean_scale).abs();
            last = Some(
                axis.add_patch(Rectangle::square((col as f64, row as f64), side, color))
                    .clone(),
            );
        }
    }
    log::debug!(
        "Hinton diagram of {} squares drawn (mean scale {}, standard deviation scale {})",
        means.len(),
        mean_scale,
        stddev_scale
    );

    axis.set_tight();
    if axis.supports_equal_aspect() {
        axis.set_aspect_equal();
    } else {
        log::warn!("The backend does not support equal aspect ratios; keeping the current aspect");
    }
    axis.autoscale_view();
    axis.invert_yaxis();

    last.ok_or_else(|| NeuroPlotError::InvalidArgument("no square has been drawn".to_string()))
}

fn resolve_scale(scale: Option<f64>, values: &DMatrix<f64>, name: &str) -> Result<f64, NeuroPlotError> {
    let scale = match scale {
        Some(scale) => scale,
        None => max_abs(values.iter()).unwrap_or(0.0),
    };
    if scale == 0.0 || !scale.is_finite() {
        return Err(NeuroPlotError::DegenerateScale(format!(
            "the {} scale must be finite and non-zero, got {}",
            name, scale
        )));
    }
    Ok(scale)
}
