//! This module defines [`RGBColor`], the color type everything else in flossverter starts from: a
//! 24-bit sRGB color written as six hexadecimal digits, the way thread manufacturers and web pages
//! publish them. Every other representation (XYZ, CIELAB, CIELCH) is derived from one of these on
//! demand and never stored.
//!
//! Hex codes are accepted with or without a leading `#` and in either case: `"#c25b08"`, `"C25B08"`
//! and `"#C25b08"` are all the same color. Anything else is an [`RGBParseError`]; nothing is ever
//! silently coerced.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

use crate::colors::{CIELABColor, CIELCHColor, XYZColor};

lazy_static! {
    static ref HEX_DIGITS: Regex = Regex::new("^[0-9a-fA-F]*$").unwrap();
}

/// An error in parsing a hex code into a color. Each variant is a different way for the string to
/// be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum RGBParseError {
    /// The string contains something other than hex digits after the optional `#`.
    #[error("invalid hex digits in color code {0:?}")]
    InvalidHexDigit(String),
    /// The number of hex digits is odd, so they can't be split into two-digit primaries.
    #[error("odd number of hex digits ({0}) in color code")]
    InvalidLength(usize),
    /// The digits split into pairs, but not into exactly three of them.
    #[error("expected 3 primaries in color code, found {0}")]
    InvalidGroupCount(usize),
}

/// Splits a hex code into its red, green, and blue primaries, each an integer from 0 to 255. The
/// code may start with a single `#` and is case-insensitive.
///
/// # Errors
/// Returns an [`RGBParseError`] if the code contains non-hex characters, has an odd number of
/// digits, or doesn't have exactly six digits.
///
/// # Example
/// ```
/// # use flossverter::color::hex_to_primaries;
/// assert_eq!(hex_to_primaries("#6e1f0f").unwrap(), [110, 31, 15]);
/// assert_eq!(hex_to_primaries("2025C7").unwrap(), [32, 37, 199]);
/// assert!(hex_to_primaries("#6e1f0").is_err());
/// ```
pub fn hex_to_primaries(color: &str) -> Result<[u8; 3], RGBParseError> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    // after this every character is ASCII, so byte slicing below is safe
    if !HEX_DIGITS.is_match(digits) {
        return Err(RGBParseError::InvalidHexDigit(color.to_string()));
    }
    if digits.len() % 2 != 0 {
        return Err(RGBParseError::InvalidLength(digits.len()));
    }
    let groups = digits.len() / 2;
    if groups != 3 {
        return Err(RGBParseError::InvalidGroupCount(groups));
    }
    let mut primaries = [0u8; 3];
    for (i, primary) in primaries.iter_mut().enumerate() {
        *primary = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16)
            .map_err(|_| RGBParseError::InvalidHexDigit(color.to_string()))?;
    }
    Ok(primaries)
}

/// Like [`hex_to_primaries`], but with each primary divided by 255 so that it lies between 0 and
/// 1, the form the sRGB transfer function expects.
pub fn hex_to_arithmetic_primaries(color: &str) -> Result<[f64; 3], RGBParseError> {
    hex_to_primaries(color).map(to_arithmetic)
}

fn to_arithmetic(primaries: [u8; 3]) -> [f64; 3] {
    let [r, g, b] = primaries;
    [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0]
}

/// A color in the sRGB color space, as given by a six-digit hex code. Each primary is stored as the
/// integer the hex code spells out, from 0 to 255.
///
/// # Example
///
/// ```
/// # use flossverter::color::RGBColor;
/// let orange = RGBColor::from_hex_code("#c25b08").unwrap();
/// assert_eq!(orange.primaries(), [194, 91, 8]);
/// assert_eq!(orange.to_string(), "#C25B08");
/// let lab = orange.to_lab();
/// assert!((lab.l - 50.655).abs() <= 1e-3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// The red primary.
    pub r: u8,
    /// The green primary.
    pub g: u8,
    /// The blue primary.
    pub b: u8,
}

impl RGBColor {
    /// Parses a hex code such as `"#ff0000"` or `"124f05"`. See [`hex_to_primaries`] for the
    /// accepted format.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, RGBParseError> {
        let [r, g, b] = hex_to_primaries(hex)?;
        Ok(RGBColor { r, g, b })
    }

    /// The primaries as integers from 0 to 255.
    pub fn primaries(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The primaries scaled to lie between 0 and 1.
    pub fn arithmetic_primaries(&self) -> [f64; 3] {
        to_arithmetic(self.primaries())
    }

    /// Gives the hex code of this color, with a leading `#` and uppercase digits. Parsing the result
    /// gives back the same color.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts to CIE 1931 XYZ under D65.
    pub fn to_xyz(&self) -> XYZColor {
        XYZColor::from(*self)
    }

    /// Converts to CIELAB, by way of XYZ.
    pub fn to_lab(&self) -> CIELABColor {
        CIELABColor::from(self.to_xyz())
    }

    /// Converts to CIELCH, by way of XYZ and CIELAB.
    pub fn to_lch(&self) -> CIELCHColor {
        CIELCHColor::from(self.to_lab())
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        RGBColor::from_hex_code(s)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}
