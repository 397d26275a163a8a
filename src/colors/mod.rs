//! This module contains the color spaces a hex color is converted through on its way to being
//! compared: CIE 1931 XYZ, CIELAB, and CIELAB's cylindrical form CIELCH. For convenience, each type
//! is imported into this module's namespace directly, along with free functions that name each
//! conversion step.
//!
//! All of these are derived values: they're computed from an [`RGBColor`] when a metric needs them
//! and thrown away afterwards.
//!
//! [`RGBColor`]: crate::color::RGBColor

pub mod cielabcolor;
pub mod cielchcolor;
pub mod xyzcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cielchcolor::CIELCHColor;
pub use self::xyzcolor::XYZColor;

use crate::color::{RGBColor, RGBParseError};

/// Parses a hex code and converts it to XYZ under D65.
///
/// # Example
/// ```
/// # use flossverter::colors::hex_to_xyz;
/// let xyz = hex_to_xyz("#6e1f0f").unwrap();
/// assert!((xyz.x - 0.070074).abs() <= 1e-3);
/// assert!((xyz.y - 0.043305).abs() <= 1e-3);
/// assert!((xyz.z - 0.009187).abs() <= 1e-3);
/// ```
pub fn hex_to_xyz(color: &str) -> Result<XYZColor, RGBParseError> {
    RGBColor::from_hex_code(color).map(|rgb| rgb.to_xyz())
}

/// Converts XYZ coordinates to CIELAB, using D65 as the reference white.
pub fn xyz_to_lab(xyz: XYZColor) -> CIELABColor {
    CIELABColor::from(xyz)
}

/// Converts CIELAB coordinates to CIELCH, with the hue in degrees.
pub fn lab_to_lch(lab: CIELABColor) -> CIELCHColor {
    CIELCHColor::from(lab)
}
