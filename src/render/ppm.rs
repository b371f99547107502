//! RGB rasters and the binary PPM (P6) format.
//!
//! ## Purpose
//!
//! This module holds a simple row-major RGB image and encodes it as a binary
//! PPM file: the header `P6\n<width> <height>\n255\n` followed by three bytes
//! per pixel, top row first.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::NumError;

// ============================================================================
// Pixels and Images
// ============================================================================

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Colour from its components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Colour from wide components, each clamped to `0..=255`.
    #[inline]
    pub fn clamped(r: u32, g: u32, b: u32) -> Self {
        let c = |v: u32| v.min(255) as u8;
        Self::new(c(r), c(g), c(b))
    }
}

/// Row-major RGB raster with row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Image {
    /// Black image of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self, NumError> {
        Validator::validate_resolution(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Rgb::default(); width * height],
        })
    }

    /// Image over existing pixels.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, NumError> {
        Validator::validate_resolution(width, height)?;
        Validator::validate_dimension(width * height, pixels.len())?;
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Option<Rgb> {
        (col < self.width && row < self.height).then(|| self.pixels[row * self.width + col])
    }

    /// Overwrite the pixel at `(col, row)`; out-of-range writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, colour: Rgb) {
        if col < self.width && row < self.height {
            self.pixels[row * self.width + col] = colour;
        }
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Binary PPM bytes of `image`.
pub fn encode_ppm(image: &Image) -> Vec<u8> {
    let header = format!("P6\n{} {}\n255\n", image.width, image.height);
    let mut out = Vec::with_capacity(header.len() + image.pixels.len() * 3);
    out.extend_from_slice(header.as_bytes());
    for p in &image.pixels {
        out.extend_from_slice(&[p.r, p.g, p.b]);
    }
    out
}

/// Write `image` as a binary PPM to `writer`.
#[cfg(feature = "std")]
pub fn write_ppm<W: std::io::Write>(image: &Image, writer: &mut W) -> std::io::Result<()> {
    writer.write_all(&encode_ppm(image))?;
    writer.flush()
}
