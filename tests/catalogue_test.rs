//! Loading catalogues from files.

mod common;

use common::Fixtures;
use flossverter::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_load_store_from_paths() {
    let fixtures = Fixtures::new();
    let store = CatalogueStore::from_paths(&fixtures.base, &fixtures.candidates).unwrap();

    assert_eq!(store.base().len(), 5);
    assert_eq!(store.candidates().len(), 6);

    let base_ids: Vec<&str> = store.base().iter().map(|(id, _)| id).collect();
    assert_eq!(base_ids, vec!["310", "blanc", "946", "820", "3777"]);
    assert_eq!(store.base_to_hex("3777").unwrap(), "#6E1F0F");
}

#[test]
fn test_missing_file() {
    let fixtures = Fixtures::new();
    let missing = fixtures.dir.path().join("anchor.csv");
    match Catalogue::from_path(&missing) {
        Err(CatalogueError::Io(_)) => {}
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_bad_row_names_the_entry() {
    let fixtures =
        Fixtures::with_contents("number,rgb\n310,#000000\n311,#12345G\n", "number,rgb\n");
    let err = Catalogue::from_path(&fixtures.base).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid color for \"311\": invalid hex digits in color code \"#12345G\""
    );
}

#[test]
fn test_empty_candidates() {
    let fixtures = Fixtures::with_contents(common::BASE_CSV, "number,rgb\n");
    let store = CatalogueStore::from_paths(&fixtures.base, &fixtures.candidates).unwrap();
    assert!(store.candidates().is_empty());
    let ranked = store
        .find_similar(&ColorQuery::Identifier("946".to_string()), "CIEDE2000", 5)
        .unwrap();
    assert!(ranked.is_empty());
}
