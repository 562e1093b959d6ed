//! Image decoding into 8-bit addressable rasters
//!
//! Each file is opened, decoded and released inside [`load_raster`], so a failed
//! decode never leaves a handle behind.

use crate::analysis::quadrants::PixelSource;
use crate::io::configuration::WIDE_CHANNEL_SHIFT;
use crate::io::error::{QuadrantError, Result};
use image::{DynamicImage, ImageBuffer, ImageReader, Rgb, RgbImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// RGB buffer with 16 bits per channel
pub type Rgb16Image = ImageBuffer<Rgb<u16>, Vec<u16>>;

/// Decoded pixels, kept at the precision of the source encoding
#[derive(Debug, Clone)]
pub enum Raster {
    /// Sources with at most 8 bits per channel
    Narrow(RgbImage),
    /// Sources with 16-bit or floating point channels
    Wide(Rgb16Image),
}

impl Raster {
    /// Convert a decoded image, dropping any alpha channel
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let color = image.color();
        if color.bytes_per_pixel() > color.channel_count() {
            Self::Wide(image.to_rgb16())
        } else {
            Self::Narrow(image.to_rgb8())
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        match self {
            Self::Narrow(buffer) => buffer.width(),
            Self::Wide(buffer) => buffer.width(),
        }
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        match self {
            Self::Narrow(buffer) => buffer.height(),
            Self::Wide(buffer) => buffer.height(),
        }
    }
}

impl PixelSource for Raster {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb8(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        match self {
            Self::Narrow(buffer) => buffer.rgb8(x, y),
            Self::Wide(buffer) => buffer.rgb8(x, y),
        }
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn rgb8(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.get_pixel_checked(x, y).map(|pixel| pixel.0)
    }
}

impl PixelSource for Rgb16Image {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    // Keeps the high byte of each sample
    fn rgb8(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.get_pixel_checked(x, y)
            .map(|pixel| pixel.0.map(|channel| (channel >> WIDE_CHANNEL_SHIFT) as u8))
    }
}

/// Open and decode the image at `path`
///
/// The format is guessed from the file contents, not its extension.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The contents are not a supported image format or are corrupt
pub fn load_raster(path: &Path) -> Result<Raster> {
    let file = File::open(path).map_err(|source| QuadrantError::ImageOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|source| QuadrantError::ImageOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let image = reader.decode().map_err(|source| QuadrantError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Raster::from_dynamic(&image))
}
