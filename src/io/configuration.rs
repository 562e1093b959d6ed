//! Runtime defaults and fixed processing constants

// Output settings
/// Output file written in the working directory when none is given
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

// Sample depth handling
/// Right shift that reduces a 16-bit channel sample to its high byte
pub const WIDE_CHANNEL_SHIFT: u32 = 8;

// Logging
/// Log filter used unless debug output is requested
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Log filter used with `--debug`
pub const DEBUG_LOG_FILTER: &str = "debug";

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
