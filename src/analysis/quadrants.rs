//! Per-region colour averaging over a pixel grid
//!
//! Regions are half-open rectangles: the min corner is included, the max corner is not.
//! Channel means are truncated, never rounded.

use crate::io::error::{QuadrantError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean red, green and blue values over a set of pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Mean red channel value
    pub red: u8,
    /// Mean green channel value
    pub green: u8,
    /// Mean blue channel value
    pub blue: u8,
}

impl Region {
    /// Create a region colour from explicit channel values
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Half-open raster bounds `[min_x, max_x) x [min_y, max_y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// First included column
    pub min_x: u32,
    /// First included row
    pub min_y: u32,
    /// First excluded column
    pub max_x: u32,
    /// First excluded row
    pub max_y: u32,
}

impl PixelRect {
    /// Create bounds from their corners
    pub const fn new(min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds covering a whole `width x height` raster
    pub const fn from_dimensions(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Number of columns covered (zero for inverted bounds)
    pub const fn width(&self) -> u32 {
        self.max_x.saturating_sub(self.min_x)
    }

    /// Number of rows covered (zero for inverted bounds)
    pub const fn height(&self) -> u32 {
        self.max_y.saturating_sub(self.min_y)
    }

    /// Total number of pixels inside the bounds
    pub const fn pixel_count(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Whether the bounds contain no pixels
    pub const fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether the pixel at `(x, y)` lies inside the bounds
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Random-access lookup of pixels as 8-bit RGB
///
/// Sources with wider samples must rescale to 0-255 before returning them.
pub trait PixelSource {
    /// Raster size as `(width, height)`
    fn dimensions(&self) -> (u32, u32);

    /// Colour of the pixel at `(x, y)`, or `None` outside the raster
    fn rgb8(&self, x: u32, y: u32) -> Option<[u8; 3]>;
}

/// Average every channel over the pixels of `rect`
///
/// # Errors
///
/// Returns an error if:
/// - `rect` contains no pixels
/// - `rect` reaches outside the source raster
pub fn average_region<S: PixelSource + ?Sized>(rect: PixelRect, source: &S) -> Result<Region> {
    let count = rect.pixel_count();
    if count == 0 {
        return Err(QuadrantError::EmptyRegion { rect });
    }

    let (width, height) = source.dimensions();
    let mut sums = [0u64; 3];

    for y in rect.min_y..rect.max_y {
        for x in rect.min_x..rect.max_x {
            let pixel = source
                .rgb8(x, y)
                .ok_or(QuadrantError::RegionOutOfBounds {
                    x,
                    y,
                    width,
                    height,
                })?;
            for (sum, channel) in sums.iter_mut().zip(pixel) {
                *sum += u64::from(channel);
            }
        }
    }

    // Each mean is bounded by the largest sample, so it fits in a byte
    let [red, green, blue] = sums.map(|sum| (sum / count) as u8);
    Ok(Region { red, green, blue })
}

/// The four non-overlapping quadrants of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantBounds {
    /// Upper-left quadrant
    pub top_left: PixelRect,
    /// Upper-right quadrant
    pub top_right: PixelRect,
    /// Lower-left quadrant
    pub bottom_left: PixelRect,
    /// Lower-right quadrant
    pub bottom_right: PixelRect,
}

impl QuadrantBounds {
    /// Split `rect` at its floored midpoint
    ///
    /// With odd sizes the right and bottom quadrants get the extra column or row.
    pub const fn split(rect: PixelRect) -> Self {
        let mid_x = rect.min_x + rect.width() / 2;
        let mid_y = rect.min_y + rect.height() / 2;

        Self {
            top_left: PixelRect::new(rect.min_x, rect.min_y, mid_x, mid_y),
            top_right: PixelRect::new(mid_x, rect.min_y, rect.max_x, mid_y),
            bottom_left: PixelRect::new(rect.min_x, mid_y, mid_x, rect.max_y),
            bottom_right: PixelRect::new(mid_x, mid_y, rect.max_x, rect.max_y),
        }
    }

    /// Quadrants in record order: top-left, top-right, bottom-left, bottom-right
    pub const fn as_array(&self) -> [PixelRect; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    /// Whether any quadrant has zero area
    pub fn has_empty_quadrant(&self) -> bool {
        self.as_array().iter().any(PixelRect::is_empty)
    }
}

/// Largest centred square inside a `width x height` raster
pub const fn centered_square(width: u32, height: u32) -> PixelRect {
    if width > height {
        PixelRect::new((width - height) / 2, 0, (width - height) / 2 + height, height)
    } else if height > width {
        PixelRect::new(0, (height - width) / 2, width, (height - width) / 2 + width)
    } else {
        PixelRect::from_dimensions(width, height)
    }
}

/// Average each quadrant, in record order
///
/// # Errors
///
/// Propagates the first failure from [`average_region`].
pub fn average_quadrants<S: PixelSource + ?Sized>(
    bounds: &QuadrantBounds,
    source: &S,
) -> Result<[Region; 4]> {
    let [top_left, top_right, bottom_left, bottom_right] = bounds.as_array();

    Ok([
        average_region(top_left, source)?,
        average_region(top_right, source)?,
        average_region(bottom_left, source)?,
        average_region(bottom_right, source)?,
    ])
}
