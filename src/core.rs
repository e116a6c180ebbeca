//! Core module defining the building blocks shared by the renderers and the analysis routines.
//!
//! It consists of the following components:
//!
//! - [`axis`]: The plotting collaborator, i.e., the [`axis::Axis`] and [`axis::Figure`] traits and the values they exchange
//! - [`color`]: Colors and colormaps
//! - [`utils`]: Numerical helpers (grids, same-mode convolution and correlation)
//!
//! # Examples
//!
//! ```
//! use rusty_neuroplot::canvas::Canvas;
//! use rusty_neuroplot::core::axis::{Axis, Figure, Side};
//!
//! // Create a figure with two panels
//! let mut figure = Canvas::subplots(2);
//!
//! // Hide the top spine of the first panel
//! figure.axes_mut()[0].set_spine_visible(Side::Top, false);
//!
//! assert!(!figure.axes()[0].spine_visible(Side::Top));
//! assert!(figure.axes()[1].spine_visible(Side::Top));
//! ```
pub mod axis;
pub mod color;
pub mod utils;

/// The font size given to new texts, in points.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;
