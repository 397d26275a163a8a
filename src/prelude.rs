//! This module simply brings the most common flossverter functionality under a single namespace, to
//! prevent excessive imports: the ubiquitous [`RGBColor`] and its parse error, the [`Metric`]
//! registry, the catalogue types and the ranker. The individual metric functions and the
//! intermediate color spaces in [`colors`](crate::colors) are not included.

pub use crate::catalogue::{Catalogue, CatalogueEntry, CatalogueError, CatalogueStore, ColorQuery};
pub use crate::color::{RGBColor, RGBParseError};
pub use crate::metrics::{Metric, UnknownMetricError};
pub use crate::similarity::{find_similar, find_similar_by_name, SimilarColor, SimilarityError};
