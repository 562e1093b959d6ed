//! Per-quadrant average colour extraction for photo mosaic libraries
//!
//! Each input image is split into four quadrants, the mean RGB colour of every
//! quadrant is computed, and one JSON record per image is appended to an output stream.

#![forbid(unsafe_code)]

/// Quadrant averaging and output record assembly
pub mod analysis;
/// Input/output operations, command-line handling and error types
pub mod io;

pub use io::error::{QuadrantError, Result};
