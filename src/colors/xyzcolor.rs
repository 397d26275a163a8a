//! A module that implements the [CIE 1931 XYZ color
//! space](https://en.wikipedia.org/wiki/CIE_1931_color_space), the device-independent space every
//! other conversion goes through. Coordinates here are relative to the D65 illuminant with the 2°
//! observer and are scaled so that the reference white has a Y of 1, not 100.

use rulinalg::vector::Vector;

use crate::color::RGBColor;
use crate::consts::{
    SRGB_ALPHA, SRGB_GAMMA, SRGB_LINEAR_SLOPE, SRGB_LINEAR_THRESHOLD, SRGB_TO_XYZ_MAT,
};
use crate::coord::Coord;

/// A color in the CIE 1931 XYZ color space, under D65.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct XYZColor {
    /// The X coordinate, a mix of the cone responses loosely tracking redness.
    pub x: f64,
    /// The Y coordinate: luminance. 0 is black, 1 is the reference white.
    pub y: f64,
    /// The Z coordinate, loosely tracking blueness.
    pub z: f64,
}

/// Undoes the sRGB gamma for one channel between 0 and 1, giving linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c > SRGB_LINEAR_THRESHOLD {
        ((c + SRGB_ALPHA) / (1.0 + SRGB_ALPHA)).powf(SRGB_GAMMA)
    } else {
        c / SRGB_LINEAR_SLOPE
    }
}

impl From<RGBColor> for XYZColor {
    /// Linearizes each primary and multiplies the result by the sRGB to XYZ matrix.
    fn from(rgb: RGBColor) -> XYZColor {
        let linear: Vec<f64> = rgb
            .arithmetic_primaries()
            .iter()
            .map(|&c| srgb_to_linear(c))
            .collect();
        let xyz = SRGB_TO_XYZ_MAT() * Vector::new(linear);
        XYZColor {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(c: XYZColor) -> Coord {
        Coord {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}
