//! Output records pairing an input filename with its quadrant colours

use crate::analysis::quadrants::Region;
use serde::{Deserialize, Serialize};

/// Average colours of the four quadrants of one image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuadrantColors {
    /// Upper-left quadrant colour
    pub top_left: Region,
    /// Upper-right quadrant colour
    pub top_right: Region,
    /// Lower-left quadrant colour
    #[serde(rename = "bot_left")]
    pub bottom_left: Region,
    /// Lower-right quadrant colour
    #[serde(rename = "bot_right")]
    pub bottom_right: Region,
}

impl QuadrantColors {
    /// Assemble quadrant colours given in record order
    pub const fn from_array(regions: [Region; 4]) -> Self {
        let [top_left, top_right, bottom_left, bottom_right] = regions;
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

/// One line of the output library: a source image and its quadrant colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Input path exactly as it was given
    pub filename: String,
    /// Average colour per quadrant
    pub quadrant_colors: QuadrantColors,
}

/// Build the record for `filename` from regions in record order
/// (top-left, top-right, bottom-left, bottom-right)
pub fn build_record(filename: impl Into<String>, regions: [Region; 4]) -> ImageRecord {
    ImageRecord {
        filename: filename.into(),
        quadrant_colors: QuadrantColors::from_array(regions),
    }
}
