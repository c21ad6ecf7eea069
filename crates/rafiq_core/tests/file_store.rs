//! File-backed settings store.

use rafiq_core::error::StorageError;
use rafiq_core::theme::DEFAULT_THEME_KEY;
use rafiq_core::{FileStore, KeyValueStore, Theme, ThemeStore};

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path());
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn set_creates_directory_and_keeps_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("rafiq");
    let mut store = FileStore::open(&nested);

    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    store.set("a", "3").unwrap();

    let reopened = FileStore::open(&nested);
    assert_eq!(reopened.get("a").unwrap().as_deref(), Some("3"));
    assert_eq!(reopened.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn corrupt_file_is_reported_then_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path());
    std::fs::write(store.path(), "not json").unwrap();

    assert!(matches!(store.get("k"), Err(StorageError::Corrupt { .. })));

    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn theme_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut themes = ThemeStore::load(FileStore::open(dir.path()), DEFAULT_THEME_KEY);
    themes.set_theme(Theme::Dark);

    let next_session = ThemeStore::load(FileStore::open(dir.path()), DEFAULT_THEME_KEY);
    assert_eq!(next_session.theme(), Theme::Dark);
}

#[test]
fn corrupt_file_resolves_to_light() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path());
    std::fs::write(store.path(), "{{{").unwrap();

    let themes = ThemeStore::load(store, DEFAULT_THEME_KEY);
    assert_eq!(themes.theme(), Theme::Light);
}
