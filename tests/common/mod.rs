//! Shared fixtures for the integration tests: two small palettes written to CSV files in a
//! temporary directory, the way a user would point the CLI at them.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A handful of real DMC colors, with an extra column the loader should ignore.
pub const BASE_CSV: &str = "\
number,description,rgb
310,Black,#000000
blanc,White,#FFFFFF
946,Medium Burnt Orange,#C25B08
820,Very Dark Royal Blue,#2025C7
3777,Very Dark Terra Cotta,#6E1F0F
";

/// A candidate palette in which every base color has one near twin, plus a grey.
pub const CANDIDATE_CSV: &str = "\
number,rgb
1001,#050505
1002,#fafafa
1003,#c55e0a
1004,#2228c4
1005,#701f10
1006,#808080
";

/// The twin of each base color in [`CANDIDATE_CSV`].
pub const TWINS: [(&str, &str); 5] = [
    ("310", "1001"),
    ("blanc", "1002"),
    ("946", "1003"),
    ("820", "1004"),
    ("3777", "1005"),
];

/// Catalogue files on disk. The directory is removed when this is dropped.
pub struct Fixtures {
    pub dir: TempDir,
    pub base: PathBuf,
    pub candidates: PathBuf,
}

impl Fixtures {
    pub fn new() -> Fixtures {
        Fixtures::with_contents(BASE_CSV, CANDIDATE_CSV)
    }

    pub fn with_contents(base_csv: &str, candidate_csv: &str) -> Fixtures {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("dmc.csv");
        let candidates = dir.path().join("ariadna.csv");
        fs::write(&base, base_csv).unwrap();
        fs::write(&candidates, candidate_csv).unwrap();
        Fixtures {
            dir,
            base,
            candidates,
        }
    }
}
