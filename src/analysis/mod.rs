//! Analysis modules for quadrant colour extraction

/// Half-open pixel regions, quadrant splitting and channel averaging
pub mod quadrants;
/// Output record assembly
pub mod record;
