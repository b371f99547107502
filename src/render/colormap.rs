//! Colour maps for escape-depth rasters.
//!
//! ## Purpose
//!
//! This module maps the inverted escape depth `n = max_depth - depth` of each
//! pixel to a colour. Bounded points have `n = 0` and come out black.
//!
//! ## Key concepts
//!
//! * **Grayscale**: `(n, n, n)`.
//! * **Gradient**: five bands of 50 steps each, from blue through cyan, olive
//!   and red to gray.

// Internal dependencies
use crate::algorithms::escape::DepthMap;
use crate::primitives::errors::NumError;
use crate::render::ppm::{Image, Rgb};

/// Mapping from inverted depth to colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Colormap {
    /// Gray level equal to the inverted depth.
    #[default]
    Grayscale,
    /// Banded colour gradient.
    Gradient,
}

impl Colormap {
    /// Colour of inverted depth `n`.
    pub fn color(&self, n: u32) -> Rgb {
        match self {
            Self::Grayscale => Rgb::clamped(n, n, n),
            Self::Gradient => match n {
                0..=49 => Rgb::clamped(0, 0, n + 200),
                50..=99 => Rgb::clamped(0, n + 150, n + 150),
                100..=149 => Rgb::clamped(100, n + 100, 0),
                150..=199 => Rgb::clamped(n + 50, 50, 0),
                _ => Rgb::clamped(n, n, n),
            },
        }
    }

    /// Colour every pixel of `depths`.
    pub fn paint(&self, depths: &DepthMap) -> Result<Image, NumError> {
        let pixels = depths.as_slice().iter().map(|&n| self.color(n)).collect();
        Image::from_pixels(depths.width(), depths.height(), pixels)
    }
}
