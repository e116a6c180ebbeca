//! The plotting collaborator: traits implemented by a rendering backend and the values passed to it.
//!
//! The functions of this crate never create or destroy a figure; they only mutate the one supplied by the caller.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::Rgba;
use super::DEFAULT_FONT_SIZE;
use crate::error::NeuroPlotError;

/// Free-form style keywords forwarded verbatim to the backend primitives.
pub type StyleOptions = serde_json::Map<String, serde_json::Value>;

/// A border line of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

impl Side {
    /// All sides, in a fixed order.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Bottom, Side::Top];

    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Top => "top",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Side {
    type Err = NeuroPlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Side::ALL
            .into_iter()
            .find(|side| side.name() == s)
            .ok_or_else(|| NeuroPlotError::InvalidArgument(format!("unknown spine location: {}", s)))
    }
}

/// One of the two dimensions of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    X,
    Y,
}

/// The coordinate system in which a position is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coordinates {
    /// Data coordinates.
    Data,
    /// Fractions of the axis extent, (0, 0) being the lower-left corner and (1, 1) the upper-right one.
    AxesFraction,
}

/// A piece of text rendered on an axis, e.g., an axis label, a tick label or a legend entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub content: String,
    /// The font size, in points.
    pub font_size: f64,
    /// The rotation, in degrees.
    pub rotation: f64,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Text {
            content: content.into(),
            font_size: DEFAULT_FONT_SIZE,
            rotation: 0.0,
        }
    }
}

/// The legend of an axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Legend {
    pub entries: Vec<Text>,
}

/// A text placed at a given position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: Text,
    pub position: (f64, f64),
    pub coordinates: Coordinates,
    pub style: StyleOptions,
}

/// An axis-aligned filled rectangle, anchored at its lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub face_color: Rgba,
    pub edge_color: Rgba,
}

impl Rectangle {
    /// Create a square of the given side centered at the given point.
    pub fn square(center: (f64, f64), side: f64, color: Rgba) -> Self {
        Rectangle {
            x: center.0 - side / 2.0,
            y: center.1 - side / 2.0,
            width: side,
            height: side,
            face_color: color,
            edge_color: color,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A closed filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub face_color: Rgba,
    pub edge_color: Rgba,
    pub label: Option<String>,
    pub style: StyleOptions,
}

/// A polyline, optionally drawn with markers only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: Rgba,
    /// The marker drawn at every vertex; `None` draws a plain line.
    pub marker: Option<String>,
    pub style: StyleOptions,
}

impl Line {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, color: Rgba) -> Self {
        Line {
            xs,
            ys,
            color,
            marker: None,
            style: StyleOptions::new(),
        }
    }
}

/// A single plotting panel, as exposed by a rendering backend.
pub trait Axis {
    /// Shows or hides the spine on the given side.
    fn set_spine_visible(&mut self, side: Side, visible: bool);

    fn spine_visible(&self, side: Side) -> bool;

    /// Draws the ticks of the given dimension on the given side only.
    fn set_ticks_position(&mut self, dimension: Dimension, side: Side);

    fn annotate(&mut self, annotation: Annotation);

    /// Adds a rectangle patch and returns the stored patch.
    fn add_patch(&mut self, patch: Rectangle) -> &Rectangle;

    fn fill(&mut self, polygon: Polygon);

    fn plot(&mut self, line: Line);

    /// Sets the background color of the drawing area.
    fn set_background(&mut self, color: Rgba);

    /// Whether the backend can render equal aspect ratios.
    fn supports_equal_aspect(&self) -> bool;

    fn set_aspect_equal(&mut self);

    /// Fits the view limits tightly around the data.
    fn set_tight(&mut self);

    fn autoscale_view(&mut self);

    fn invert_yaxis(&mut self);

    fn label_mut(&mut self, dimension: Dimension) -> &mut Text;

    /// The major tick labels of the given dimension.
    fn tick_labels_mut(&mut self, dimension: Dimension) -> &mut [Text];

    fn legend_mut(&mut self) -> Option<&mut Legend>;
}

/// A collection of panels, in their display order.
pub trait Figure {
    type Axis: Axis;

    fn axes_mut(&mut self) -> &mut [Self::Axis];
}
