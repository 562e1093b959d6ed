//! Input/output operations, command-line handling and error types

/// Command-line parsing and the sequential processing loop
pub mod cli;
/// Runtime defaults and processing constants
pub mod configuration;
/// Error taxonomy for per-image and fatal failures
pub mod error;
/// Image decoding into addressable rasters
pub mod image;
/// Logger initialisation
pub mod logging;
/// Progress display over the input list
pub mod progress;
/// JSON record output
pub mod sink;
