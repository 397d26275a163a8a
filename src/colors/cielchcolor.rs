//! This file implements the CIELCH color space, a cylindrical transformation of CIELAB that uses
//! chroma and hue instead of two opponent color axes. The CMC metrics weight their terms by the hue
//! and chroma of the base color, which is why this space is needed at all.

use super::cielabcolor::CIELABColor;

/// A cylindrical form of CIELAB, analogous to the relationship between HSL and RGB.
///
/// # Example
///
/// ```
/// # use flossverter::colors::{CIELABColor, CIELCHColor};
/// let lab = CIELABColor{l: 28.7788, a: 54.7346, b: -81.6141};
/// let lch = CIELCHColor::from(lab);
/// assert!((lch.c - 98.2687).abs() <= 1e-3);
/// // a negative b puts the hue in the bottom half of the circle, never below 0
/// assert!((lch.h - 303.8478).abs() <= 1e-3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CIELCHColor {
    /// The luminance component, identical to CIELAB's. Ranges between 0 and 100.
    pub l: f64,
    /// The chroma component. Chroma is defined as the difference from the grayscale color of the same
    /// luminance (in CIELAB, essentially the distance away from the line a = b = 0). In the
    /// cylindrical space, this is equivalent to radius, and is never negative.
    pub c: f64,
    /// The hue component, in degrees, always in [0, 360). 90 degrees corresponds to yellow, 180 to
    /// green, 270 to blue, and 0 to red.
    pub h: f64,
}

/// Takes an angle in degrees as returned by `atan2` (between -180 and 180) and brings it into
/// [0, 360).
pub(crate) fn normalize_hue(unbounded_h: f64) -> f64 {
    let h = if unbounded_h < 0.0 {
        unbounded_h + 360.0
    } else {
        unbounded_h
    };
    // adding 360 to a tiny negative angle rounds to exactly 360
    if h >= 360.0 {
        h - 360.0
    } else {
        h
    }
}

impl From<CIELABColor> for CIELCHColor {
    /// Converts from CIELAB to CIELCH: chroma is the radius and hue the angle of (a, b).
    fn from(lab: CIELABColor) -> CIELCHColor {
        let l = lab.l; // the same in both spaces
        let c = lab.chroma();
        // don't forget to convert to degrees
        let h = normalize_hue(lab.b.atan2(lab.a).to_degrees());
        CIELCHColor { l, c, h }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lab_lch_conversion() {
        let red = CIELCHColor::from(CIELABColor {
            l: 24.7353,
            a: 34.0741,
            b: 29.5059,
        });
        assert!((red.l - 24.7353).abs() <= 1e-3);
        assert!((red.c - 45.0738).abs() <= 1e-3);
        assert!((red.h - 40.8904).abs() <= 1e-3);
    }

    #[test]
    fn test_hue_always_in_range() {
        let axes = [-100., -1., -1e-20, -0.0, 0., 1e-20, 1., 100.];
        for &a in axes.iter() {
            for &b in axes.iter() {
                let lch = CIELCHColor::from(CIELABColor { l: 50., a, b });
                assert!(lch.h >= 0.0 && lch.h < 360.0, "a = {}, b = {}: h = {}", a, b, lch.h);
                assert!(lch.c >= 0.0);
            }
        }
    }

    #[test]
    fn test_quadrants() {
        let hue = |a: f64, b: f64| CIELCHColor::from(CIELABColor { l: 50., a, b }).h;
        assert!((hue(1., 0.) - 0.).abs() <= 1e-10);
        assert!((hue(0., 1.) - 90.).abs() <= 1e-10);
        assert!((hue(-1., 0.) - 180.).abs() <= 1e-10);
        assert!((hue(0., -1.) - 270.).abs() <= 1e-10);
        assert!((hue(1., -1.) - 315.).abs() <= 1e-10);
    }

    #[test]
    fn test_normalize_hue_rounding_edge() {
        assert_eq!(normalize_hue(-1e-20), 0.0);
        assert_eq!(normalize_hue(-90.), 270.);
        assert_eq!(normalize_hue(180.), 180.);
    }
}
