//! Plot cosmetics and statistical renderers drawing into a caller-supplied [`Axis`](crate::core::axis::Axis).
//!
//! - [`cosmetics`]: Spines, panel labels, boxplot colors, tick label rotation and font sizes
//! - [`hinton`]: Hinton diagrams of paired mean and standard deviation matrices
//! - [`violin`]: Violin plots of several groups of samples
pub mod cosmetics;
pub mod hinton;
pub mod violin;
