//! Metrics based on plain Euclidean distances: the RGB ones work directly on the integer primaries
//! of the hex code, and the XYZ one on tristimulus values. None of them are perceptually uniform;
//! they're here as baselines for the CIE metrics to be compared against.

use crate::color::RGBColor;
use crate::coord::Coord;
use crate::distance::squared_distance_array;

/// The weights for R, G and B when the mean red is below half intensity.
const DARK_REDMEAN_WEIGHTS: [u8; 3] = [2, 4, 3];
/// The weights for R, G and B when the mean red is at or above half intensity.
const LIGHT_REDMEAN_WEIGHTS: [u8; 3] = [3, 4, 2];

/// The sum of squares of primary differences:
///
/// `score = (R1 - R2)² + (G1 - G2)² + (B1 - B2)²`
///
/// # Example
/// ```
/// # use flossverter::color::RGBColor;
/// # use flossverter::metrics::rgb_euclidean;
/// let black = RGBColor::from_hex_code("#000000").unwrap();
/// let white = RGBColor::from_hex_code("#ffffff").unwrap();
/// assert_eq!(rgb_euclidean(&black, &white), 3. * 255. * 255.);
/// ```
pub fn rgb_euclidean(base: &RGBColor, other: &RGBColor) -> f64 {
    squared_distance_array(&base.primaries(), &other.primaries(), None)
}

/// The weighted sum of squares of primary differences, with weights picked by the "redmean"
/// heuristic: the average of the two red primaries. If it is below 128 the weights for R, G and B
/// are 2, 4 and 3, otherwise 3, 4 and 2.
///
/// `score = wR (R1 - R2)² + wG (G1 - G2)² + wB (B1 - B2)²`
pub fn rgb_gamma_correction(base: &RGBColor, other: &RGBColor) -> f64 {
    let redmean = (base.r as f64 + other.r as f64) / 2.0;
    let weights = if redmean < 128.0 {
        &DARK_REDMEAN_WEIGHTS
    } else {
        &LIGHT_REDMEAN_WEIGHTS
    };
    squared_distance_array(&base.primaries(), &other.primaries(), Some(weights))
}

/// The sum of squares of XYZ coordinate differences. The results are poor, as expected: XYZ is a
/// hub for conversions, not a space where distance means anything. This isn't in the
/// [`Metric`](super::Metric) registry for that reason.
pub fn xyz_euclidean(base: &RGBColor, other: &RGBColor) -> f64 {
    let c1: Coord = base.to_xyz().into();
    let c2: Coord = other.to_xyz().into();
    c1.squared_distance(&c2)
}
