//! The CMC l:c metric of the Colour Measurement Committee of the Society of Dyers and Colourists.
//! It is built around the tolerance ellipsoid of the base color, so every weight comes from the
//! base color alone and `cmc(a, b)` is generally not `cmc(b, a)`.

use crate::color::RGBColor;

/// The lightness to chroma weighting of CMC. Textile practice uses 2:1 to decide whether a match is
/// acceptable and 1:1 to decide whether a difference is perceptible at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LightnessChromaRatio {
    /// l = 1, c = 1.
    Imperceptibility,
    /// l = 2, c = 1.
    Acceptability,
}

impl LightnessChromaRatio {
    /// The lightness weight l.
    pub fn lightness(self) -> f64 {
        match self {
            LightnessChromaRatio::Imperceptibility => 1.0,
            LightnessChromaRatio::Acceptability => 2.0,
        }
    }

    /// The chroma weight c.
    pub fn chroma(self) -> f64 {
        1.0
    }
}

/// Squared CMC l:c delta E of `other` relative to `base`.
///
/// # Example
/// ```
/// # use flossverter::color::RGBColor;
/// # use flossverter::metrics::{cmc, LightnessChromaRatio};
/// let orange = RGBColor::from_hex_code("#c25b08").unwrap();
/// let red = RGBColor::from_hex_code("#6e1f0f").unwrap();
/// let strict = cmc(&orange, &red, LightnessChromaRatio::Imperceptibility);
/// let lenient = cmc(&orange, &red, LightnessChromaRatio::Acceptability);
/// // a lightness difference counts for less when l = 2
/// assert!(lenient < strict);
/// ```
pub fn cmc(base: &RGBColor, other: &RGBColor, ratio: LightnessChromaRatio) -> f64 {
    let lab1 = base.to_lab();
    let lab2 = other.to_lab();
    let lch1 = base.to_lch();
    let (l1, c1, h1) = (lch1.l, lch1.c, lch1.h);
    let c2 = lab2.chroma();

    let s_l = if l1 < 16.0 {
        0.511
    } else {
        0.040975 * l1 / (1.0 + 0.01765 * l1)
    };
    let f_l = (l1 - lab2.l) / (ratio.lightness() * s_l);

    let s_c = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;
    let f_c = (c1 - c2) / (ratio.chroma() * s_c);

    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };
    let s_h = s_c * (f * t + 1.0 - f);
    let dh = ((lab1.a - lab2.a).powi(2) + (lab1.b - lab2.b).powi(2) - (c1 - c2).powi(2))
        .abs()
        .sqrt();
    let f_h = dh / s_h;

    f_l.powi(2) + f_c.powi(2) + f_h.powi(2)
}

/// CMC 1:1, for judging perceptibility.
pub fn cmc_1_1(base: &RGBColor, other: &RGBColor) -> f64 {
    cmc(base, other, LightnessChromaRatio::Imperceptibility)
}

/// CMC 2:1, for judging acceptability.
pub fn cmc_2_1(base: &RGBColor, other: &RGBColor) -> f64 {
    cmc(base, other, LightnessChromaRatio::Acceptability)
}
