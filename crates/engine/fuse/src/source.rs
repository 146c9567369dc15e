//! Pixel sources: anything that exposes a width, a height and an RGB per pixel

use crate::color::Rgb;
use crate::error::{FuseError, FuseResult};
use image::RgbImage;
use std::path::Path;

/// Read-only RGB raster
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Color at column `x`, row `y` (row 0 is the top of the image)
    fn pixel(&self, x: u32, y: u32) -> Rgb;
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(*self.get_pixel(x, y))
    }
}

/// In-memory row-major pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Grid of `width * height` pixels filled with `fill`
    pub fn new_filled(width: u32, height: u32, fill: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Build a grid from rows listed top to bottom
    ///
    /// Returns `None` if the rows do not all have the same length.
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            width: width as u32,
            height: rows.len() as u32,
            pixels: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl PixelSource for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[self.index(x, y)]
    }
}

/// Open and decode an image file, converting it to 8-bit RGB
pub fn load_rgb(path: impl AsRef<Path>) -> FuseResult<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| FuseError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    Ok(img.to_rgb8())
}
