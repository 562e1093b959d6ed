//! Error types for image analysis and record output

use std::fmt;
use std::path::PathBuf;

use crate::analysis::quadrants::PixelRect;

/// Main error type for all quadrant analysis operations
#[derive(Debug)]
pub enum QuadrantError {
    /// Failed to open or read an input file
    ImageOpen {
        /// Path to the image file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Input file could not be decoded as an image
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Image is narrower or shorter than two pixels so at least one quadrant is empty
    DegenerateImage {
        /// Path to the image file
        path: PathBuf,
        /// Decoded width in pixels
        width: u32,
        /// Decoded height in pixels
        height: u32,
    },

    /// Averaging was requested over a region containing no pixels
    EmptyRegion {
        /// The offending region
        rect: PixelRect,
    },

    /// A pixel lookup fell outside the source raster
    RegionOutOfBounds {
        /// Column of the rejected lookup
        x: u32,
        /// Row of the rejected lookup
        y: u32,
        /// Width of the source raster
        width: u32,
        /// Height of the source raster
        height: u32,
    },

    /// The output file could not be created
    OutputCreate {
        /// Path where creation was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A record could not be serialized to the output stream
    Serialization {
        /// Underlying serializer error
        source: serde_json::Error,
    },

    /// The output stream rejected a write or flush
    OutputWrite {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl QuadrantError {
    /// Whether this error leaves the output stream unusable and must end the run
    ///
    /// Everything else concerns a single input image, which is reported and skipped.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::OutputCreate { .. } | Self::Serialization { .. } | Self::OutputWrite { .. }
        )
    }
}

impl fmt::Display for QuadrantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageOpen { path, source } => {
                write!(f, "Failed to open file '{}': {source}", path.display())
            }
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::DegenerateImage {
                path,
                width,
                height,
            } => {
                write!(
                    f,
                    "Image '{}' is {width}x{height} and cannot be split into quadrants",
                    path.display()
                )
            }
            Self::EmptyRegion { rect } => {
                write!(f, "Cannot average empty region {rect}")
            }
            Self::RegionOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Pixel ({x}, {y}) is outside the {width}x{height} source raster"
                )
            }
            Self::OutputCreate { path, source } => {
                write!(
                    f,
                    "Failed to create output file '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { source } => {
                write!(f, "Failed to encode results: {source}")
            }
            Self::OutputWrite { source } => {
                write!(f, "Failed to write results: {source}")
            }
        }
    }
}

impl std::error::Error for QuadrantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageOpen { source, .. }
            | Self::OutputCreate { source, .. }
            | Self::OutputWrite { source } => Some(source),
            Self::ImageDecode { source, .. } => Some(source),
            Self::Serialization { source } => Some(source),
            Self::DegenerateImage { .. }
            | Self::EmptyRegion { .. }
            | Self::RegionOutOfBounds { .. } => None,
        }
    }
}

impl From<serde_json::Error> for QuadrantError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { source: err }
    }
}

/// Convenience type alias for quadrant analysis results
pub type Result<T> = std::result::Result<T, QuadrantError>;
