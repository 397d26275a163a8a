//! Metrics defined by CIE standards: the 1976 delta E, which is just distance in CIELAB, and its two
//! successors, CIE94 and CIEDE2000, which correct for CIELAB's known non-uniformities in chroma and
//! hue. All three return the *squared* delta E.
//!
//! In CIEDE2000, hue angles stay in degrees and are converted to radians only right before a sine
//! or cosine. The hue wraparound branches follow Sharma, Wu and Dalal.

use crate::color::RGBColor;
use crate::colors::cielchcolor::normalize_hue;
use crate::coord::Coord;

/// The chroma weighting constant of CIE94 for graphic arts.
const CIE94_K1: f64 = 0.045;
/// The hue weighting constant of CIE94 for graphic arts.
const CIE94_K2: f64 = 0.015;

/// 25 to the 7th power, the pivot of CIEDE2000's chroma correction.
const TWENTY_FIVE_POW_SEVEN: f64 = 6103515625.0;

/// Squared delta E according to CIE76: the squared Euclidean distance between the two colors in
/// CIELAB.
///
/// `score = (L1 - L2)² + (a1 - a2)² + (b1 - b2)²`
pub fn cie76(base: &RGBColor, other: &RGBColor) -> f64 {
    let lab_base: Coord = base.to_lab().into();
    let lab_other: Coord = other.to_lab().into();
    lab_base.squared_distance(&lab_other)
}

/// Squared delta E according to CIE94, with the graphic arts constants K1 = 0.045 and
/// K2 = 0.015:
///
/// `score = dL² + (dC / (1 + K1 C1))² + (dH / (1 + K2 C1))²`
///
/// where `dH = sqrt(da² + db² - dC²)`. Only the base color's chroma `C1` enters the weights, so the
/// score changes if the arguments are swapped.
pub fn cie94(base: &RGBColor, other: &RGBColor) -> f64 {
    let lab1 = base.to_lab();
    let lab2 = other.to_lab();

    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let dc = c1 - c2;
    let dl = lab1.l - lab2.l;
    // mathematically never negative, but can dip just below 0 in floating point
    let dh = ((lab1.a - lab2.a).powi(2) + (lab1.b - lab2.b).powi(2) - dc.powi(2))
        .abs()
        .sqrt();

    dl.powi(2) + (dc / (1.0 + CIE94_K1 * c1)).powi(2) + (dh / (1.0 + CIE94_K2 * c1)).powi(2)
}

/// Computes `sqrt(c⁷ / (c⁷ + 25⁷))`, which CIEDE2000 uses both to correct the a axis and to scale
/// its rotation term.
fn chroma_pivot(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + TWENTY_FIVE_POW_SEVEN)).sqrt()
}

/// Angle of (a, b) in degrees, brought into [0, 360).
fn hue_degrees(b: f64, a: f64) -> f64 {
    normalize_hue(b.atan2(a).to_degrees())
}

/// Squared delta E according to CIEDE2000.
///
/// # Example
/// ```
/// # use flossverter::color::RGBColor;
/// # use flossverter::metrics::ciede2000;
/// let orange = RGBColor::from_hex_code("#c25b08").unwrap();
/// let blue = RGBColor::from_hex_code("#2025c7").unwrap();
/// assert!((ciede2000(&orange, &blue).sqrt() - 55.732417).abs() <= 1e-3);
/// ```
pub fn ciede2000(base: &RGBColor, other: &RGBColor) -> f64 {
    let lab1 = base.to_lab();
    let lab2 = other.to_lab();
    let (l1, a1, b1) = (lab1.l, lab1.a, lab1.b);
    let (l2, a2, b2) = (lab2.l, lab2.a, lab2.b);

    // lightness
    let dl_p = l2 - l1;
    let l_bar = (l1 + l2) / 2.0;
    let l_bar_sq = (l_bar - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_bar_sq) / (20.0 + l_bar_sq).sqrt();
    let f_l = dl_p / s_l;

    // chroma, after stretching the a axis near neutral colors
    let c_bar = (lab1.chroma() + lab2.chroma()) / 2.0;
    let g = 1.0 - chroma_pivot(c_bar);
    let a1_p = a1 + a1 / 2.0 * g;
    let a2_p = a2 + a2 / 2.0 * g;

    let c1_p = a1_p.hypot(b1);
    let c2_p = a2_p.hypot(b2);
    let dc_p = c2_p - c1_p;
    let c_bar_p = (c1_p + c2_p) / 2.0;
    let s_c = 1.0 + 0.045 * c_bar_p;
    let f_c = dc_p / s_c;

    // hue
    let h1_p = hue_degrees(b1, a1_p);
    let h2_p = hue_degrees(b2, a2_p);
    let h_diff = (h1_p - h2_p).abs();

    let dh_p = if h_diff <= 180.0 {
        h2_p - h1_p
    } else if h2_p <= h1_p {
        h2_p - h1_p + 360.0
    } else {
        h2_p - h1_p - 360.0
    };

    let h_bar_p = if h_diff <= 180.0 {
        (h1_p + h2_p) / 2.0
    } else if h1_p + h2_p < 360.0 {
        (h1_p + h2_p + 360.0) / 2.0
    } else {
        (h1_p + h2_p - 360.0) / 2.0
    };

    let d_big_h_p = 2.0 * (c1_p * c2_p).sqrt() * (dh_p / 2.0).to_radians().sin();

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.2 * (4.0 * h_bar_p - 63.0).to_radians().cos();
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let f_h = d_big_h_p / s_h;

    // rotation of the blue region
    let theta = 60.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let r_t = -2.0 * chroma_pivot(c_bar_p) * theta.to_radians().sin();

    f_l.powi(2) + f_c.powi(2) + f_h.powi(2) + r_t * f_c * f_h
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    const ORANGE: &str = "#c25b08";
    const BLUE: &str = "#2025c7";
    const RED: &str = "#6e1f0f";
    const BLACK: &str = "#000000";
    const WHITE: &str = "#ffffff";

    // reference values from Bruce Lindbloom's color calculator, as square roots of the score
    fn check(metric: fn(&RGBColor, &RGBColor) -> f64, cases: &[(&str, &str, f64)]) {
        for &(c1, c2, expected) in cases {
            let base = RGBColor::from_hex_code(c1).unwrap();
            let other = RGBColor::from_hex_code(c2).unwrap();
            let result = metric(&base, &other).sqrt();
            assert!(
                (result - expected).abs() <= 1e-3,
                "{} vs {}: got {}, expected {}",
                c1,
                c2,
                result,
                expected
            );
        }
    }

    #[test]
    fn test_cie76() {
        check(
            cie76,
            &[
                (ORANGE, BLUE, 142.297131),
                (ORANGE, RED, 38.606102),
                (ORANGE, ORANGE, 0.),
                (BLACK, WHITE, 100.),
            ],
        );
    }

    #[test]
    fn test_cie94() {
        check(
            cie94,
            &[
                (ORANGE, BLUE, 71.407307),
                (ORANGE, RED, 27.671121),
                (ORANGE, ORANGE, 0.),
                (BLACK, WHITE, 100.),
            ],
        );
    }

    #[test]
    fn test_cie94_is_asymmetric() {
        // weights come from the base color's chroma only
        check(cie94, &[(BLUE, ORANGE, 59.977982)]);
    }

    #[test]
    fn test_ciede2000() {
        check(
            ciede2000,
            &[
                (ORANGE, BLUE, 55.732417),
                (ORANGE, RED, 25.189495),
                (ORANGE, ORANGE, 0.),
                (BLACK, WHITE, 100.),
                (WHITE, BLACK, 100.),
            ],
        );
    }

    #[test]
    fn test_ciede2000_hue_wraparound() {
        // hues on either side of 0 degrees: the difference has to go the short way around
        let magenta = RGBColor::from_hex_code("#c04080").unwrap();
        let pink = RGBColor::from_hex_code("#e05080").unwrap();
        assert!(magenta.to_lch().h > 350.0);
        assert!(pink.to_lch().h < 10.0);
        check(ciede2000, &[("#c04080", "#e05080", 9.430764), ("#e05080", "#c04080", 9.430764)]);
    }
}
