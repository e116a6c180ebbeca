//! An in-memory backend recording every drawing and cosmetic operation.
//!
//! A [`Canvas`] is a [`Figure`] made of [`CanvasAxis`] panels. The recorded scene can be inspected directly
//! or exported to JSON.
//!
//! # Examples
//!
//! ```rust
//! use rusty_neuroplot::canvas::Canvas;
//! use rusty_neuroplot::plot::cosmetics::{label_panels, PanelLabelOptions};
//!
//! let mut figure = Canvas::subplots(4);
//! label_panels(&mut figure, &PanelLabelOptions::default()).unwrap();
//!
//! assert_eq!(figure.axes()[3].annotations()[0].text.content, "d");
//! assert!(figure.to_json().unwrap().contains("\"d\""));
//! ```
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::axis::{Annotation, Axis, Dimension, Figure, Legend, Line, Polygon, Rectangle, Side, Text};
use crate::core::color::Rgba;

/// The relative margin added around the data when the view is not tight.
const VIEW_MARGIN: f64 = 0.05;

/// View limits, as ((x_min, x_max), (y_min, y_max)).
pub type ViewLimits = ((f64, f64), (f64, f64));

/// A recording axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasAxis {
    spines: BTreeMap<Side, bool>,
    x_ticks_position: Option<Side>,
    y_ticks_position: Option<Side>,
    x_label: Text,
    y_label: Text,
    x_tick_labels: Vec<Text>,
    y_tick_labels: Vec<Text>,
    legend: Option<Legend>,
    annotations: Vec<Annotation>,
    patches: Vec<Rectangle>,
    fills: Vec<Polygon>,
    lines: Vec<Line>,
    background: Rgba,
    equal_aspect_supported: bool,
    aspect_equal: bool,
    tight: bool,
    view_limits: Option<ViewLimits>,
    y_inverted: bool,
}

impl Default for CanvasAxis {
    fn default() -> Self {
        CanvasAxis {
            spines: Side::ALL.into_iter().map(|side| (side, true)).collect(),
            x_ticks_position: None,
            y_ticks_position: None,
            x_label: Text::new(""),
            y_label: Text::new(""),
            x_tick_labels: vec![],
            y_tick_labels: vec![],
            legend: None,
            annotations: vec![],
            patches: vec![],
            fills: vec![],
            lines: vec![],
            background: Rgba::WHITE,
            equal_aspect_supported: true,
            aspect_equal: false,
            tight: false,
            view_limits: None,
            y_inverted: false,
        }
    }
}

impl CanvasAxis {
    /// Creates an empty axis with all spines visible.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick_labels(mut self, dimension: Dimension, labels: &[&str]) -> Self {
        let labels = labels.iter().map(|label| Text::new(*label)).collect();
        match dimension {
            Dimension::X => self.x_tick_labels = labels,
            Dimension::Y => self.y_tick_labels = labels,
        }
        self
    }

    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    /// Simulates a backend unable to render equal aspect ratios.
    pub fn with_equal_aspect_support(mut self, supported: bool) -> Self {
        self.equal_aspect_supported = supported;
        self
    }

    /// The side the ticks of the given dimension are drawn on, if it has been set.
    pub fn ticks_position(&self, dimension: Dimension) -> Option<Side> {
        match dimension {
            Dimension::X => self.x_ticks_position,
            Dimension::Y => self.y_ticks_position,
        }
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn patches(&self) -> &[Rectangle] {
        &self.patches
    }

    pub fn fills(&self) -> &[Polygon] {
        &self.fills
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn is_aspect_equal(&self) -> bool {
        self.aspect_equal
    }

    pub fn is_y_inverted(&self) -> bool {
        self.y_inverted
    }

    /// The view limits computed by the last autoscale, if any.
    pub fn view_limits(&self) -> Option<ViewLimits> {
        self.view_limits
    }

    /// The bounding box of everything drawn so far.
    fn data_limits(&self) -> Option<ViewLimits> {
        let points = self
            .patches
            .iter()
            .flat_map(|patch| {
                [
                    (patch.x, patch.y),
                    (patch.x + patch.width, patch.y + patch.height),
                ]
            })
            .chain(
                self.fills
                    .iter()
                    .flat_map(|fill| fill.xs.iter().copied().zip(fill.ys.iter().copied())),
            )
            .chain(
                self.lines
                    .iter()
                    .flat_map(|line| line.xs.iter().copied().zip(line.ys.iter().copied())),
            )
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        points.fold(None, |limits, (x, y)| match limits {
            None => Some(((x, x), (y, y))),
            Some(((x_min, x_max), (y_min, y_max))) => Some((
                (f64::min(x_min, x), f64::max(x_max, x)),
                (f64::min(y_min, y), f64::max(y_max, y)),
            )),
        })
    }
}

impl Axis for CanvasAxis {
    fn set_spine_visible(&mut self, side: Side, visible: bool) {
        self.spines.insert(side, visible);
    }

    fn spine_visible(&self, side: Side) -> bool {
        self.spines.get(&side).copied().unwrap_or(true)
    }

    fn set_ticks_position(&mut self, dimension: Dimension, side: Side) {
        match dimension {
            Dimension::X => self.x_ticks_position = Some(side),
            Dimension::Y => self.y_ticks_position = Some(side),
        }
    }

    fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    fn add_patch(&mut self, patch: Rectangle) -> &Rectangle {
        self.patches.push(patch);
        &self.patches[self.patches.len() - 1]
    }

    fn fill(&mut self, polygon: Polygon) {
        self.fills.push(polygon);
    }

    fn plot(&mut self, line: Line) {
        self.lines.push(line);
    }

    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn supports_equal_aspect(&self) -> bool {
        self.equal_aspect_supported
    }

    fn set_aspect_equal(&mut self) {
        self.aspect_equal = self.equal_aspect_supported;
    }

    fn set_tight(&mut self) {
        self.tight = true;
    }

    fn autoscale_view(&mut self) {
        let margin = if self.tight { 0.0 } else { VIEW_MARGIN };
        self.view_limits = self.data_limits().map(|((x_min, x_max), (y_min, y_max))| {
            let dx = margin * (x_max - x_min);
            let dy = margin * (y_max - y_min);
            ((x_min - dx, x_max + dx), (y_min - dy, y_max + dy))
        });
    }

    fn invert_yaxis(&mut self) {
        self.y_inverted = !self.y_inverted;
    }

    fn label_mut(&mut self, dimension: Dimension) -> &mut Text {
        match dimension {
            Dimension::X => &mut self.x_label,
            Dimension::Y => &mut self.y_label,
        }
    }

    fn tick_labels_mut(&mut self, dimension: Dimension) -> &mut [Text] {
        match dimension {
            Dimension::X => &mut self.x_tick_labels,
            Dimension::Y => &mut self.y_tick_labels,
        }
    }

    fn legend_mut(&mut self) -> Option<&mut Legend> {
        self.legend.as_mut()
    }
}

/// A recording figure, i.e., an ordered collection of recording axes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Canvas {
    axes: Vec<CanvasAxis>,
}

impl Canvas {
    pub fn new(axes: Vec<CanvasAxis>) -> Self {
        Canvas { axes }
    }

    /// Creates a figure with `num_axes` empty panels.
    pub fn subplots(num_axes: usize) -> Self {
        Canvas {
            axes: vec![CanvasAxis::new(); num_axes],
        }
    }

    pub fn axes(&self) -> &[CanvasAxis] {
        &self.axes
    }

    /// Exports the recorded scene.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Figure for Canvas {
    type Axis = CanvasAxis;

    fn axes_mut(&mut self) -> &mut [CanvasAxis] {
        &mut self.axes
    }
}
