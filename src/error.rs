//! Error module for the Rusty Neuroplot library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum NeuroPlotError {
    /// Error for invalid arguments, e.g., unknown spine names, mismatched lengths or missing boxplot keys.
    InvalidArgument(String),
    /// Error for out of bounds access, e.g., a spike falling after the end of the binary raster.
    OutOfBounds(String),
    /// Error for a zero scale in a Hinton diagram.
    DegenerateScale(String),
}

impl fmt::Display for NeuroPlotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NeuroPlotError::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            NeuroPlotError::OutOfBounds(e) => write!(f, "Index out of bounds: {}", e),
            NeuroPlotError::DegenerateScale(e) => write!(f, "Degenerate scale: {}", e),
        }
    }
}

impl Error for NeuroPlotError {}
