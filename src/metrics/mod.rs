//! This module contains the color-difference metrics flossverter ranks colors by, and the fixed
//! registry of them that callers pick from by name. Every metric takes a *base* color and an
//! *other* color and returns a non-negative score where lower means more similar; a color compared
//! with itself always scores exactly 0. Scores are squared delta E values (or, for the RGB metrics,
//! squared distances), so take the square root to get the usual delta E.
//!
//! Several of these metrics are deliberately asymmetric: CIE94 and CMC weight their terms by the
//! base color only, as the published standards do. Swapping the arguments can change the score.

pub mod cie;
pub mod cmc;
pub mod euclidean;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::{RGBColor, RGBParseError};

pub use self::cie::{cie76, cie94, ciede2000};
pub use self::cmc::{cmc, cmc_1_1, cmc_2_1, LightnessChromaRatio};
pub use self::euclidean::{rgb_euclidean, rgb_gamma_correction, xyz_euclidean};

/// The error returned when a metric name isn't one of [`Metric::ALL`]'s names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown metric {name:?}")]
pub struct UnknownMetricError {
    /// The name that failed to match.
    pub name: String,
}

/// The registry of metrics that can be selected by name. The names returned by [`Metric::name`]
/// are a stable contract: front ends list them in a dropdown and send them back verbatim.
///
/// # Example
/// ```
/// # use flossverter::metrics::Metric;
/// # use flossverter::color::RGBColor;
/// let metric: Metric = "CIE94".parse().unwrap();
/// assert_eq!(metric, Metric::CIE94);
/// let orange = RGBColor::from_hex_code("#c25b08").unwrap();
/// let red = RGBColor::from_hex_code("#6e1f0f").unwrap();
/// assert!((metric.score(&orange, &red).sqrt() - 27.671121).abs() <= 1e-3);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Plain squared Euclidean distance between the integer primaries.
    RGBEuclidean,
    /// Squared distance between the integer primaries, weighted by the "redmean" heuristic.
    RGBGammaCorrection,
    /// Squared CIE76 delta E: squared Euclidean distance in CIELAB.
    CIE76,
    /// Squared CIE94 delta E, graphic arts constants.
    CIE94,
    /// Squared CIEDE2000 delta E.
    CIEDE2000,
    /// Squared CMC delta E with l:c = 1:1, for imperceptibility.
    CMC1To1,
    /// Squared CMC delta E with l:c = 2:1, for acceptability.
    CMC2To1,
}

impl Metric {
    /// Every metric, in the order front ends should list them.
    pub const ALL: [Metric; 7] = [
        Metric::RGBEuclidean,
        Metric::RGBGammaCorrection,
        Metric::CIE76,
        Metric::CIE94,
        Metric::CIEDE2000,
        Metric::CMC1To1,
        Metric::CMC2To1,
    ];

    /// The metric to use when the caller doesn't pick one.
    pub const DEFAULT: Metric = Metric::CIEDE2000;

    /// The registry name of this metric.
    pub fn name(&self) -> &'static str {
        match *self {
            Metric::RGBEuclidean => "RGB euclidean",
            Metric::RGBGammaCorrection => "RGB with gamma correction",
            Metric::CIE76 => "CIE76",
            Metric::CIE94 => "CIE94",
            Metric::CIEDE2000 => "CIEDE2000",
            Metric::CMC1To1 => "CMC 1:1",
            Metric::CMC2To1 => "CMC 2:1",
        }
    }

    /// Scores `other` against `base`. Lower is more similar.
    pub fn score(&self, base: &RGBColor, other: &RGBColor) -> f64 {
        match *self {
            Metric::RGBEuclidean => rgb_euclidean(base, other),
            Metric::RGBGammaCorrection => rgb_gamma_correction(base, other),
            Metric::CIE76 => cie76(base, other),
            Metric::CIE94 => cie94(base, other),
            Metric::CIEDE2000 => ciede2000(base, other),
            Metric::CMC1To1 => cmc_1_1(base, other),
            Metric::CMC2To1 => cmc_2_1(base, other),
        }
    }

    /// Like [`Metric::score`], but parses both colors from hex codes first.
    pub fn score_hex(&self, base: &str, other: &str) -> Result<f64, RGBParseError> {
        let base = RGBColor::from_hex_code(base)?;
        let other = RGBColor::from_hex_code(other)?;
        Ok(self.score(&base, &other))
    }
}

impl Default for Metric {
    fn default() -> Metric {
        Metric::DEFAULT
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetricError;

    /// Looks a metric up by its exact registry name.
    fn from_str(s: &str) -> Result<Metric, UnknownMetricError> {
        Metric::ALL
            .iter()
            .find(|m| m.name() == s)
            .copied()
            .ok_or_else(|| UnknownMetricError {
                name: s.to_string(),
            })
    }
}
