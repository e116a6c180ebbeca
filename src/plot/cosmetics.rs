//! Cosmetic helpers mutating axes in place.
use std::collections::BTreeMap;

use log;
use serde::{Deserialize, Serialize};

use crate::core::axis::{Annotation, Axis, Coordinates, Dimension, Figure, Line, Side, StyleOptions, Text};
use crate::core::color::Rgba;
use crate::error::NeuroPlotError;

/// The spines removed when none are specified.
pub const DEFAULT_SPINES: [Side; 2] = [Side::Right, Side::Top];

/// The keys a boxplot must provide.
pub const BOXPLOT_KEYS: [&str; 4] = ["boxes", "medians", "caps", "whiskers"];

/// Hides the spines on the given sides (right and top by default) and draws the ticks on the bottom and left only.
///
/// Every name is validated before the axis is touched.
///
/// # Examples
///
/// ```rust
/// use rusty_neuroplot::canvas::CanvasAxis;
/// use rusty_neuroplot::core::axis::{Axis, Side};
/// use rusty_neuroplot::plot::cosmetics::remove_spines;
///
/// let mut axis = CanvasAxis::new();
/// remove_spines(&mut axis, Some(&["left", "top"])).unwrap();
///
/// assert!(!axis.spine_visible(Side::Left));
/// assert!(axis.spine_visible(Side::Right));
///
/// assert!(remove_spines(&mut axis, Some(&["middle"])).is_err());
/// ```
pub fn remove_spines<A: Axis>(axis: &mut A, sides: Option<&[&str]>) -> Result<(), NeuroPlotError> {
    let sides = match sides {
        None => DEFAULT_SPINES.to_vec(),
        Some(names) => names
            .iter()
            .map(|name| name.parse::<Side>())
            .collect::<Result<Vec<Side>, NeuroPlotError>>()?,
    };

    for side in sides {
        axis.set_spine_visible(side, false);
    }
    axis.set_ticks_position(Dimension::X, Side::Bottom);
    axis.set_ticks_position(Dimension::Y, Side::Left);
    Ok(())
}

/// Options for labeling the panels of a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelLabelOptions {
    /// The labels, reused cyclically if there are more panels than labels.
    pub labels: Vec<String>,
    /// The position of the label, in fractions of the axis extent.
    pub location: (f64, f64),
    /// Style keywords forwarded to the annotations.
    pub style: StyleOptions,
}

impl Default for PanelLabelOptions {
    fn default() -> Self {
        PanelLabelOptions {
            labels: ('a'..='z').map(String::from).collect(),
            location: (0.9, 0.9),
            style: StyleOptions::new(),
        }
    }
}

/// Annotates every panel of the figure, in order, with the next label.
pub fn label_panels<F: Figure>(figure: &mut F, options: &PanelLabelOptions) -> Result<(), NeuroPlotError> {
    if options.labels.is_empty() {
        return Err(NeuroPlotError::InvalidArgument(
            "at least one panel label is required".to_string(),
        ));
    }

    for (axis, label) in figure.axes_mut().iter_mut().zip(options.labels.iter().cycle()) {
        axis.annotate(Annotation {
            text: Text::new(label.as_str()),
            position: options.location,
            coordinates: Coordinates::AxesFraction,
            style: options.style.clone(),
        });
    }
    Ok(())
}

/// The artists of a boxplot, keyed by component (`boxes`, `medians`, `caps`, `whiskers`, and possibly others such as `fliers`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Boxplot {
    pub artists: BTreeMap<String, Vec<Line>>,
}

impl Boxplot {
    pub fn get(&self, key: &str) -> Option<&Vec<Line>> {
        self.artists.get(key)
    }

    /// The number of boxes.
    pub fn num_boxes(&self) -> usize {
        self.get("boxes").map_or(0, |boxes| boxes.len())
    }

    /// Checks the required keys are present and that each box has one median, two caps and two whiskers.
    fn validate(&self) -> Result<(), NeuroPlotError> {
        if let Some(key) = BOXPLOT_KEYS.iter().find(|key| !self.artists.contains_key(**key)) {
            return Err(NeuroPlotError::InvalidArgument(format!(
                "the boxplot has no {} key",
                key
            )));
        }

        let num_boxes = self.num_boxes();
        for (key, per_box) in [("medians", 1), ("caps", 2), ("whiskers", 2)] {
            let num = self.artists[key].len();
            if num != per_box * num_boxes {
                return Err(NeuroPlotError::InvalidArgument(format!(
                    "expected {} {} for {} boxes, got {}",
                    per_box * num_boxes,
                    key,
                    num_boxes,
                    num
                )));
            }
        }
        Ok(())
    }
}

/// Outcome of [`recolor_boxplot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recolor {
    /// Every box has been recolored.
    Applied,
    /// The number of colors does not match the number of boxes; nothing has been changed.
    Skipped { provided: usize, required: usize },
}

/// Gives box `i` (its median, caps and whiskers included) the color `colors[i]`.
///
/// A malformed boxplot is an error. A wrong number of colors is not: it is logged and the boxplot is left unchanged.
pub fn recolor_boxplot(boxplot: &mut Boxplot, colors: &[Rgba]) -> Result<Recolor, NeuroPlotError> {
    boxplot.validate()?;

    let required = boxplot.num_boxes();
    if colors.len() != required {
        log::warn!(
            "Boxplot left unchanged: {} colors provided for {} boxes",
            colors.len(),
            required
        );
        return Ok(Recolor::Skipped {
            provided: colors.len(),
            required,
        });
    }

    for (key, per_box) in [("boxes", 1), ("medians", 1), ("caps", 2), ("whiskers", 2)] {
        if let Some(artists) = boxplot.artists.get_mut(key) {
            for (i, artist) in artists.iter_mut().enumerate() {
                artist.color = colors[i / per_box];
            }
        }
    }
    Ok(Recolor::Applied)
}

/// Rotates every major tick label of the given dimension.
pub fn rotate_tick_labels<A: Axis>(axis: &mut A, dimension: Dimension, degrees: f64) {
    for label in axis.tick_labels_mut(dimension) {
        label.rotation = degrees;
    }
}

/// Font sizes applied by [`set_font_sizes`]; unset sizes fall back to the label size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub label: f64,
    pub tick_label: Option<f64>,
    pub legend: Option<f64>,
}

impl FontSizes {
    pub fn new(label: f64) -> Self {
        FontSizes {
            label,
            tick_label: None,
            legend: None,
        }
    }
}

/// Sets the font size of the axis labels, of the major tick labels and, if any, of the legend entries.
pub fn set_font_sizes<A: Axis>(axis: &mut A, sizes: &FontSizes) -> Result<(), NeuroPlotError> {
    let tick_label = sizes.tick_label.unwrap_or(sizes.label);
    let legend = sizes.legend.unwrap_or(sizes.label);
    if [sizes.label, tick_label, legend]
        .iter()
        .any(|size| !size.is_finite() || *size <= 0.0)
    {
        return Err(NeuroPlotError::InvalidArgument(
            "font sizes must be positive".to_string(),
        ));
    }

    for dimension in [Dimension::X, Dimension::Y] {
        axis.label_mut(dimension).font_size = sizes.label;
        for text in axis.tick_labels_mut(dimension) {
            text.font_size = tick_label;
        }
    }
    if let Some(entries) = axis.legend_mut() {
        for text in entries.entries.iter_mut() {
            text.font_size = legend;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, CanvasAxis};
    use crate::core::axis::Legend;

    fn boxplot(num_boxes: usize) -> Boxplot {
        let line = || Line::new(vec![0.0, 1.0], vec![0.0, 1.0], Rgba::BLACK);
        let mut artists = BTreeMap::new();
        artists.insert("boxes".to_string(), vec![line(); num_boxes]);
        artists.insert("medians".to_string(), vec![line(); num_boxes]);
        artists.insert("caps".to_string(), vec![line(); 2 * num_boxes]);
        artists.insert("whiskers".to_string(), vec![line(); 2 * num_boxes]);
        artists.insert("fliers".to_string(), vec![line(); num_boxes]);
        Boxplot { artists }
    }

    fn colors(boxplot: &Boxplot, key: &str) -> Vec<Rgba> {
        boxplot.get(key).unwrap().iter().map(|line| line.color).collect()
    }

    #[test]
    fn test_remove_spines_default() {
        let mut axis = CanvasAxis::new();
        remove_spines(&mut axis, None).unwrap();

        assert!(axis.spine_visible(Side::Left));
        assert!(axis.spine_visible(Side::Bottom));
        assert!(!axis.spine_visible(Side::Right));
        assert!(!axis.spine_visible(Side::Top));
        assert_eq!(axis.ticks_position(Dimension::X), Some(Side::Bottom));
        assert_eq!(axis.ticks_position(Dimension::Y), Some(Side::Left));
    }

    #[test]
    fn test_remove_spines_unknown_side() {
        let mut axis = CanvasAxis::new();
        assert_eq!(
            remove_spines(&mut axis, Some(&["top", "diagonal"])),
            Err(NeuroPlotError::InvalidArgument(
                "unknown spine location: diagonal".to_string()
            ))
        );

        // nothing has been touched
        assert!(Side::ALL.iter().all(|side| axis.spine_visible(*side)));
        assert_eq!(axis.ticks_position(Dimension::X), None);
    }

    #[test]
    fn test_label_panels() {
        let mut figure = Canvas::subplots(3);
        let mut style = StyleOptions::new();
        style.insert("weight".to_string(), "bold".into());
        let options = PanelLabelOptions {
            labels: vec!["A".to_string(), "B".to_string()],
            location: (0.1, 0.95),
            style: style.clone(),
        };
        label_panels(&mut figure, &options).unwrap();

        let labels = figure
            .axes()
            .iter()
            .map(|axis| axis.annotations()[0].text.content.clone())
            .collect::<Vec<String>>();
        assert_eq!(labels, vec!["A", "B", "A"]);

        let annotation = &figure.axes()[1].annotations()[0];
        assert_eq!(annotation.position, (0.1, 0.95));
        assert_eq!(annotation.coordinates, Coordinates::AxesFraction);
        assert_eq!(annotation.style, style);
    }

    #[test]
    fn test_label_panels_no_labels() {
        let mut figure = Canvas::subplots(2);
        let options = PanelLabelOptions {
            labels: vec![],
            ..PanelLabelOptions::default()
        };
        assert!(label_panels(&mut figure, &options).is_err());
        assert!(figure.axes().iter().all(|axis| axis.annotations().is_empty()));
    }

    #[test]
    fn test_recolor_boxplot() {
        let mut boxplot = boxplot(2);
        let red = Rgba::opaque(1.0, 0.0, 0.0);
        let blue = Rgba::opaque(0.0, 0.0, 1.0);

        assert_eq!(recolor_boxplot(&mut boxplot, &[red, blue]), Ok(Recolor::Applied));
        assert_eq!(colors(&boxplot, "boxes"), vec![red, blue]);
        assert_eq!(colors(&boxplot, "medians"), vec![red, blue]);
        assert_eq!(colors(&boxplot, "caps"), vec![red, red, blue, blue]);
        assert_eq!(colors(&boxplot, "whiskers"), vec![red, red, blue, blue]);
        // other components are left alone
        assert_eq!(colors(&boxplot, "fliers"), vec![Rgba::BLACK, Rgba::BLACK]);
    }

    #[test]
    fn test_recolor_boxplot_color_mismatch() {
        let mut boxplot = boxplot(3);
        let before = boxplot.clone();

        assert_eq!(
            recolor_boxplot(&mut boxplot, &[Rgba::WHITE]),
            Ok(Recolor::Skipped {
                provided: 1,
                required: 3
            })
        );
        assert_eq!(boxplot, before);
    }

    #[test]
    fn test_recolor_boxplot_malformed() {
        let mut missing = boxplot(2);
        missing.artists.remove("caps");
        assert_eq!(
            recolor_boxplot(&mut missing, &[Rgba::WHITE, Rgba::WHITE]),
            Err(NeuroPlotError::InvalidArgument(
                "the boxplot has no caps key".to_string()
            ))
        );

        let mut uneven = boxplot(2);
        uneven.artists.get_mut("whiskers").unwrap().pop();
        assert_eq!(
            recolor_boxplot(&mut uneven, &[Rgba::WHITE, Rgba::WHITE]),
            Err(NeuroPlotError::InvalidArgument(
                "expected 4 whiskers for 2 boxes, got 3".to_string()
            ))
        );
    }

    #[test]
    fn test_rotate_tick_labels() {
        let mut axis = CanvasAxis::new().with_tick_labels(Dimension::X, &["0", "1", "2"]);
        rotate_tick_labels(&mut axis, Dimension::X, 45.0);
        rotate_tick_labels(&mut axis, Dimension::Y, 90.0);

        assert!(axis
            .tick_labels_mut(Dimension::X)
            .iter()
            .all(|label| label.rotation == 45.0));
        assert!(axis.tick_labels_mut(Dimension::Y).is_empty());
    }

    #[test]
    fn test_set_font_sizes() {
        let mut axis = CanvasAxis::new()
            .with_tick_labels(Dimension::X, &["0", "1"])
            .with_tick_labels(Dimension::Y, &["a"]);
        set_font_sizes(&mut axis, &FontSizes::new(14.0)).unwrap();

        assert_eq!(axis.label_mut(Dimension::X).font_size, 14.0);
        assert_eq!(axis.label_mut(Dimension::Y).font_size, 14.0);
        assert!(axis
            .tick_labels_mut(Dimension::X)
            .iter()
            .all(|label| label.font_size == 14.0));
        assert_eq!(axis.tick_labels_mut(Dimension::Y)[0].font_size, 14.0);
        assert!(axis.legend_mut().is_none());
    }

    #[test]
    fn test_set_font_sizes_with_legend() {
        let mut axis = CanvasAxis::new()
            .with_tick_labels(Dimension::Y, &["0", "1"])
            .with_legend(Legend {
                entries: vec![Text::new("data"), Text::new("fit")],
            });
        let sizes = FontSizes {
            label: 12.0,
            tick_label: Some(8.0),
            legend: Some(6.0),
        };
        set_font_sizes(&mut axis, &sizes).unwrap();

        assert_eq!(axis.label_mut(Dimension::X).font_size, 12.0);
        assert!(axis
            .tick_labels_mut(Dimension::Y)
            .iter()
            .all(|label| label.font_size == 8.0));
        assert!(axis
            .legend_mut()
            .unwrap()
            .entries
            .iter()
            .all(|entry| entry.font_size == 6.0));

        assert!(set_font_sizes(&mut axis, &FontSizes::new(-1.0)).is_err());
    }
}
