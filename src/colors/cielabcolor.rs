//! A module that implements the [CIELAB color
//! space](https://en.wikipedia.org/wiki/Lab_color_space#CIELAB). The CIELAB color space is used as a
//! device-independent color space that has an L value for luminance and two opponent color axes for
//! chromaticity (loosely, hue). Formally, the three values that define a CIELAB color are called
//! L\*, A\*, and B\* to distinguish them from [generic
//! Lab](https://en.wikipedia.org/wiki/Lab_color_space), but for convenience they are just `l`, `a`,
//! and `b` in this module. Unlike some libraries, which default to D50, this is CIELAB relative to
//! D65, the white point of sRGB: no chromatic adaptation happens between the hex code and here.

use crate::colors::XYZColor;
use crate::consts::{CIE_EPSILON, CIE_KAPPA, D65_WHITE_POINT};
use crate::coord::Coord;

/// A color in the CIELAB color space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CIELABColor {
    /// The luminance (loosely, brightness) of a given color. 0 is the lowest visible value and gives
    /// black, whereas 100 is the value of diffuse white.
    pub l: f64,
    /// The first opponent color axis. Negative is green, positive is magenta. Unbounded in
    /// principle, but within roughly -128 to 127 for anything an sRGB hex code can express.
    pub a: f64,
    /// The second opponent color axis. Negative is blue, positive is yellow. Same range as `a`.
    pub b: f64,
}

impl CIELABColor {
    /// The chroma: distance from the neutral axis, `sqrt(a² + b²)`. The same as the `c` of the
    /// matching [`CIELCHColor`](super::CIELCHColor).
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

/// The CIELAB nonlinearity: a cube root, except near black where it becomes a line so that the
/// slope stays finite.
fn lab_f(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        (CIE_KAPPA * t + 16.0) / 116.0
    }
}

impl From<XYZColor> for CIELABColor {
    /// Converts a given CIE XYZ color to CIELAB, normalizing by the D65 white point.
    fn from(xyz: XYZColor) -> CIELABColor {
        // https://en.wikipedia.org/wiki/Lab_color_space#CIELAB-CIEXYZ_conversions
        let fx = lab_f(xyz.x / D65_WHITE_POINT[0]);
        let fy = lab_f(xyz.y / D65_WHITE_POINT[1]);
        let fz = lab_f(xyz.z / D65_WHITE_POINT[2]);

        // note how a and b are opponent color axes
        let l = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);
        CIELABColor { l, a, b }
    }
}

impl From<CIELABColor> for Coord {
    fn from(c: CIELABColor) -> Coord {
        Coord {
            x: c.l,
            y: c.a,
            z: c.b,
        }
    }
}
