//! Palettes of named colors, such as a thread manufacturer's shade card, and the pair of them a
//! conversion works between. A [`CatalogueStore`] holds a *base* palette, the one the user knows
//! their color from, and a *candidate* palette, the one they want to find matches in.
//!
//! Catalogues are read from CSV files with a header row and at least these two columns:
//!
//! ```text
//! number,rgb
//! 310,#000000
//! 3777,#6e1f0f
//! ```
//!
//! Other columns are ignored, and rows keep their order from the file.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::color::{RGBColor, RGBParseError};
use crate::metrics::Metric;
use crate::similarity::{self, SimilarColor, SimilarityError};

/// An error in building a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The catalogue file couldn't be opened.
    #[error("could not open catalogue: {0}")]
    Io(#[from] std::io::Error),
    /// The CSV was malformed or missing a column.
    #[error("could not read catalogue: {0}")]
    Csv(#[from] csv::Error),
    /// Two entries share an identifier.
    #[error("duplicate identifier {0:?} in catalogue")]
    DuplicateIdentifier(String),
    /// An entry's color isn't a valid hex code.
    #[error("invalid color for {identifier:?}: {source}")]
    InvalidColor {
        /// The identifier of the offending entry.
        identifier: String,
        /// Why its color didn't parse.
        source: RGBParseError,
    },
}

// one row of a catalogue CSV
#[derive(Debug, Deserialize)]
struct Record {
    number: String,
    rgb: String,
}

/// A named color in a catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    /// The identifier, unique within its catalogue. Often numeric, but not always ("blanc", "ecru").
    pub identifier: String,
    /// The color.
    pub color: RGBColor,
}

/// An ordered collection of colors with unique identifiers. Iteration follows insertion order and
/// lookup by identifier is a hash lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    entries: Vec<CatalogueEntry>,
    index: HashMap<String, usize>,
}

impl Catalogue {
    /// An empty catalogue.
    pub fn new() -> Catalogue {
        Catalogue::default()
    }

    /// Builds a catalogue from entries, keeping their order.
    ///
    /// # Errors
    /// [`CatalogueError::DuplicateIdentifier`] if an identifier appears more than once.
    pub fn from_entries<I>(entries: I) -> Result<Catalogue, CatalogueError>
    where
        I: IntoIterator<Item = CatalogueEntry>,
    {
        let mut catalogue = Catalogue::new();
        for entry in entries {
            catalogue.push(entry)?;
        }
        Ok(catalogue)
    }

    /// Appends an entry to the end of the catalogue.
    pub fn push(&mut self, entry: CatalogueEntry) -> Result<(), CatalogueError> {
        if self.index.contains_key(&entry.identifier) {
            return Err(CatalogueError::DuplicateIdentifier(entry.identifier));
        }
        self.index.insert(entry.identifier.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Reads a catalogue in the CSV format described in the [module documentation](self). Fields
    /// are trimmed of surrounding whitespace.
    pub fn from_reader<R: Read>(reader: R) -> Result<Catalogue, CatalogueError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut catalogue = Catalogue::new();
        for result in reader.deserialize() {
            let record: Record = result?;
            let color = RGBColor::from_hex_code(&record.rgb).map_err(|source| {
                CatalogueError::InvalidColor {
                    identifier: record.number.clone(),
                    source,
                }
            })?;
            catalogue.push(CatalogueEntry {
                identifier: record.number,
                color,
            })?;
        }
        Ok(catalogue)
    }

    /// Reads a catalogue CSV from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalogue, CatalogueError> {
        let path = path.as_ref();
        let catalogue = Catalogue::from_reader(File::open(path)?)?;
        debug!(path = %path.display(), entries = catalogue.len(), "loaded catalogue");
        Ok(catalogue)
    }

    /// Looks up the color with the given identifier.
    pub fn get(&self, identifier: &str) -> Option<&RGBColor> {
        self.index
            .get(identifier)
            .map(|&i| &self.entries[i].color)
    }

    /// Iterates over (identifier, color) pairs in catalogue order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RGBColor)> {
        self.entries
            .iter()
            .map(|entry| (entry.identifier.as_str(), &entry.color))
    }

    /// The entries, in catalogue order.
    pub fn entries(&self) -> &[CatalogueEntry] {
        &self.entries
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What the user is matching from: either an identifier in the base palette or a color typed in
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorQuery {
    /// An identifier to look up in the base palette.
    Identifier(String),
    /// A hex code, used as is.
    Hex(String),
}

/// The two palettes a conversion runs between.
#[derive(Debug, Clone, Default)]
pub struct CatalogueStore {
    base: Catalogue,
    candidates: Catalogue,
}

impl CatalogueStore {
    /// Pairs a base palette with a candidate palette.
    pub fn new(base: Catalogue, candidates: Catalogue) -> CatalogueStore {
        CatalogueStore { base, candidates }
    }

    /// Loads both palettes from CSV files.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        base: P,
        candidates: Q,
    ) -> Result<CatalogueStore, CatalogueError> {
        Ok(CatalogueStore::new(
            Catalogue::from_path(base)?,
            Catalogue::from_path(candidates)?,
        ))
    }

    /// The palette queries are looked up in.
    pub fn base(&self) -> &Catalogue {
        &self.base
    }

    /// The palette results come from.
    pub fn candidates(&self) -> &Catalogue {
        &self.candidates
    }

    /// The hex code of a base palette entry, as `#RRGGBB`.
    pub fn base_to_hex(&self, identifier: &str) -> Result<String, SimilarityError> {
        self.base
            .get(identifier)
            .map(RGBColor::to_hex_string)
            .ok_or_else(|| SimilarityError::UnknownIdentifier(identifier.to_string()))
    }

    /// Turns a query into the color it stands for.
    pub fn resolve(&self, query: &ColorQuery) -> Result<RGBColor, SimilarityError> {
        match query {
            ColorQuery::Identifier(identifier) => self
                .base
                .get(identifier)
                .copied()
                .ok_or_else(|| SimilarityError::UnknownIdentifier(identifier.clone())),
            ColorQuery::Hex(hex) => Ok(RGBColor::from_hex_code(hex)?),
        }
    }

    /// Finds the `n` candidates closest to the query's color under the named metric, best first.
    ///
    /// # Example
    /// ```
    /// # use flossverter::catalogue::{Catalogue, CatalogueStore, ColorQuery};
    /// let base = Catalogue::from_reader("number,rgb\n946,#c25b08\n".as_bytes()).unwrap();
    /// let candidates =
    ///     Catalogue::from_reader("number,rgb\n1,#000000\n2,#c45a0a\n3,#2025c7\n".as_bytes())
    ///         .unwrap();
    /// let store = CatalogueStore::new(base, candidates);
    /// let query = ColorQuery::Identifier("946".to_string());
    /// let ranked = store.find_similar(&query, "CIEDE2000", 1).unwrap();
    /// assert_eq!(ranked[0].identifier, "2");
    /// ```
    pub fn find_similar(
        &self,
        query: &ColorQuery,
        metric_name: &str,
        n: usize,
    ) -> Result<Vec<SimilarColor>, SimilarityError> {
        let metric: Metric = metric_name.parse()?;
        let base = self.resolve(query)?;
        Ok(similarity::find_similar(
            &base,
            metric,
            self.candidates.iter(),
            n,
        ))
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use maplit::hashmap;

    const BASE: &str = "number,rgb,description\n\
                        310,#000000,Black\n\
                        blanc,#FFFFFF,White\n\
                        946,#c25b08,Medium Burnt Orange\n";

    const CANDIDATES: &str = "number,rgb\n\
                              1,#000000\n\
                              2,#c45a0a\n\
                              3,#2025c7\n\
                              4,#fefefe\n";

    fn store() -> CatalogueStore {
        CatalogueStore::new(
            Catalogue::from_reader(BASE.as_bytes()).unwrap(),
            Catalogue::from_reader(CANDIDATES.as_bytes()).unwrap(),
        )
    }

    #[test]
    fn test_read_keeps_order() {
        let catalogue = Catalogue::from_reader(BASE.as_bytes()).unwrap();
        let ids: Vec<&str> = catalogue.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["310", "blanc", "946"]);
        assert_eq!(catalogue.len(), 3);
        assert!(!catalogue.is_empty());
    }

    #[test]
    fn test_lookup() {
        let catalogue = Catalogue::from_reader(BASE.as_bytes()).unwrap();
        let expected = hashmap! {
            "310" => [0u8, 0, 0],
            "blanc" => [255, 255, 255],
            "946" => [194, 91, 8],
        };
        for (id, primaries) in expected {
            assert_eq!(catalogue.get(id).unwrap().primaries(), primaries);
        }
        assert_eq!(catalogue.get("3777"), None);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let catalogue =
            Catalogue::from_reader("number , rgb\n 310 , #000000 \n".as_bytes()).unwrap();
        assert_eq!(catalogue.get("310").unwrap().primaries(), [0, 0, 0]);
    }

    #[test]
    fn test_duplicate_identifier() {
        let result = Catalogue::from_reader("number,rgb\n310,#000000\n310,#010101\n".as_bytes());
        match result {
            Err(CatalogueError::DuplicateIdentifier(id)) => assert_eq!(id, "310"),
            other => panic!("expected a duplicate identifier, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_color() {
        let result = Catalogue::from_reader("number,rgb\n310,#00000\n".as_bytes());
        match result {
            Err(CatalogueError::InvalidColor { identifier, source }) => {
                assert_eq!(identifier, "310");
                assert_eq!(source, RGBParseError::InvalidLength(5));
            }
            other => panic!("expected an invalid color, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_column() {
        let result = Catalogue::from_reader("number,hex\n310,#000000\n".as_bytes());
        assert!(matches!(result, Err(CatalogueError::Csv(_))));
    }

    #[test]
    fn test_base_to_hex() {
        let store = store();
        assert_eq!(store.base_to_hex("946").unwrap(), "#C25B08");
        assert_eq!(
            store.base_to_hex("3777"),
            Err(SimilarityError::UnknownIdentifier("3777".to_string()))
        );
    }

    #[test]
    fn test_resolve() {
        let store = store();
        let by_id = store
            .resolve(&ColorQuery::Identifier("946".to_string()))
            .unwrap();
        let by_hex = store.resolve(&ColorQuery::Hex("C25B08".to_string())).unwrap();
        assert_eq!(by_id, by_hex);
        assert!(store.resolve(&ColorQuery::Hex("#c25b".to_string())).is_err());
    }

    #[test]
    fn test_find_similar_searches_candidates() {
        let store = store();
        let ranked = store
            .find_similar(&ColorQuery::Identifier("blanc".to_string()), "CIE76", 2)
            .unwrap();
        let ids: Vec<&str> = ranked.iter().map(|s| s.identifier.as_str()).collect();
        assert_eq!(ids, vec!["4", "2"]);
    }

    #[test]
    fn test_find_similar_unknown_identifier() {
        // identifiers are looked up in the base palette only, never the candidates
        let result = store().find_similar(&ColorQuery::Identifier("1".to_string()), "CIE76", 2);
        assert_eq!(
            result,
            Err(SimilarityError::UnknownIdentifier("1".to_string()))
        );
    }
}
