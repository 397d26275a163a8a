//! The similarity ranker: score every candidate against a base color with one metric and keep the
//! best N. Ranking is deterministic; candidates with equal scores stay in the order they were
//! given in, so the same inputs always give the same list.
//!
//! Nothing here touches shared state, so any number of rankings can run against the same
//! [`Catalogue`] at once.

use std::cmp::Ordering;

use thiserror::Error;

use crate::catalogue::Catalogue;
use crate::color::{RGBColor, RGBParseError};
use crate::metrics::{Metric, UnknownMetricError};

/// One entry of a ranking: a candidate and how far it is from the base color.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarColor {
    /// The candidate's catalogue identifier.
    pub identifier: String,
    /// The candidate's color.
    pub color: RGBColor,
    /// The metric's score for this candidate. Lower is more similar.
    pub score: f64,
}

impl SimilarColor {
    /// The candidate's color as a `#RRGGBB` hex code, ready for rendering.
    pub fn hex(&self) -> String {
        self.color.to_hex_string()
    }
}

/// Everything that can go wrong turning a ranking request into a ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    /// The base color isn't a valid hex code.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(#[from] RGBParseError),
    /// The metric name isn't in the registry.
    #[error(transparent)]
    UnknownMetric(#[from] UnknownMetricError),
    /// The base identifier isn't in the catalogue it was looked up in.
    #[error("unknown identifier {0:?}")]
    UnknownIdentifier(String),
}

/// Scores every candidate against `base` with `metric` and returns the `n` with the lowest scores,
/// best first. Candidates with equal scores keep their relative order from `candidates`. Asking for
/// more than there are returns all of them, ranked; asking for none returns nothing.
///
/// # Example
/// ```
/// # use flossverter::color::RGBColor;
/// # use flossverter::metrics::Metric;
/// # use flossverter::similarity::find_similar;
/// let palette = vec![
///     ("white", RGBColor::from_hex_code("#ffffff").unwrap()),
///     ("black", RGBColor::from_hex_code("#000000").unwrap()),
///     ("grey", RGBColor::from_hex_code("#808080").unwrap()),
/// ];
/// let base = RGBColor::from_hex_code("#202020").unwrap();
/// let ranked = find_similar(&base, Metric::CIE76, palette.iter().map(|(id, c)| (*id, c)), 2);
/// let ids: Vec<&str> = ranked.iter().map(|s| s.identifier.as_str()).collect();
/// assert_eq!(ids, vec!["black", "grey"]);
/// ```
pub fn find_similar<'a, I>(
    base: &RGBColor,
    metric: Metric,
    candidates: I,
    n: usize,
) -> Vec<SimilarColor>
where
    I: IntoIterator<Item = (&'a str, &'a RGBColor)>,
{
    if n == 0 {
        return Vec::new();
    }
    let mut scored: Vec<SimilarColor> = candidates
        .into_iter()
        .map(|(identifier, color)| SimilarColor {
            identifier: identifier.to_string(),
            color: *color,
            score: metric.score(base, color),
        })
        .collect();
    // sort_by is stable, which is what keeps ties in catalogue order
    scored.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
    scored.truncate(n);
    scored
}

/// The string-typed form of [`find_similar`] that front ends call: the base color is a hex code,
/// the metric a registry name, and the candidates a whole catalogue.
///
/// # Errors
/// [`SimilarityError::InvalidColorFormat`] if `base_hex` doesn't parse, and
/// [`SimilarityError::UnknownMetric`] if `metric_name` isn't one of the registry's names. The
/// metric is checked first.
pub fn find_similar_by_name(
    base_hex: &str,
    metric_name: &str,
    catalogue: &Catalogue,
    n: usize,
) -> Result<Vec<SimilarColor>, SimilarityError> {
    let metric: Metric = metric_name.parse()?;
    let base = RGBColor::from_hex_code(base_hex)?;
    Ok(find_similar(&base, metric, catalogue.iter(), n))
}
