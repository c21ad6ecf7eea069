//! Theme store: init from persisted flag, write-through on set, surface and subscribers.

use rafiq_core::error::StorageError;
use rafiq_core::theme::DEFAULT_THEME_KEY;
use rafiq_core::{resolve_theme, KeyValueStore, MemoryStore, Theme, ThemeStore, ThemeSurface};
use std::cell::RefCell;
use std::rc::Rc;

/// Memory store that records every write.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: Vec<String>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.push(value.to_string());
        self.inner.set(key, value)
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("private mode".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}

#[derive(Clone, Default)]
struct RecordingSurface(Rc<RefCell<Vec<Theme>>>);

impl ThemeSurface for RecordingSurface {
    fn apply(&mut self, theme: Theme) {
        self.0.borrow_mut().push(theme);
    }
}

#[test]
fn resolve_theme_accepts_exact_spellings_only() {
    assert_eq!(resolve_theme(Some("dark")), Theme::Dark);
    assert_eq!(resolve_theme(Some("light")), Theme::Light);
    assert_eq!(resolve_theme(None), Theme::Light);
    assert_eq!(resolve_theme(Some("Dark")), Theme::Light);
    assert_eq!(resolve_theme(Some(" dark")), Theme::Light);
    assert_eq!(resolve_theme(Some("system")), Theme::Light);
    assert_eq!(resolve_theme(Some("")), Theme::Light);
}

#[test]
fn absent_flag_defaults_to_light() {
    let store = ThemeStore::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn corrupted_flag_defaults_to_light() {
    let storage = MemoryStore::with_entry(DEFAULT_THEME_KEY, "{\"mode\":\"dark\"}");
    let store = ThemeStore::load(storage, DEFAULT_THEME_KEY);
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn set_dark_survives_a_fresh_session() {
    let mut store = ThemeStore::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    store.set_theme(Theme::Dark);

    let reopened = ThemeStore::load(store.into_storage(), DEFAULT_THEME_KEY);
    assert_eq!(reopened.theme(), Theme::Dark);
}

#[test]
fn init_does_not_write_the_flag() {
    let store = ThemeStore::load(CountingStore::default(), DEFAULT_THEME_KEY);
    assert!(store.storage().writes.is_empty());
}

#[test]
fn every_set_persists_once_and_last_value_wins() {
    let mut store = ThemeStore::load(CountingStore::default(), DEFAULT_THEME_KEY);
    store.set_theme(Theme::Light);
    store.set_theme(Theme::Dark);
    store.set_theme(Theme::Light);

    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.storage().writes, vec!["light", "dark", "light"]);
    assert_eq!(
        store.storage().get(DEFAULT_THEME_KEY).unwrap().as_deref(),
        Some("light")
    );
}

#[test]
fn toggle_is_symmetric() {
    let mut store = ThemeStore::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
}

#[test]
fn storage_failures_are_swallowed() {
    let mut store = ThemeStore::load(BrokenStore, DEFAULT_THEME_KEY);
    assert_eq!(store.theme(), Theme::Light);

    store.set_theme(Theme::Dark);
    assert_eq!(store.theme(), Theme::Dark);
}

#[test]
fn surface_gets_initial_and_every_later_theme() {
    let surface = RecordingSurface::default();
    let storage = MemoryStore::with_entry(DEFAULT_THEME_KEY, "dark");
    let mut store = ThemeStore::load(storage, DEFAULT_THEME_KEY).with_surface(surface.clone());

    store.toggle();
    store.set_theme(Theme::Dark);

    assert_eq!(
        *surface.0.borrow(),
        vec![Theme::Dark, Theme::Light, Theme::Dark]
    );
}

#[test]
fn subscribers_are_notified_before_set_returns() {
    let mut store = ThemeStore::load(MemoryStore::new(), DEFAULT_THEME_KEY);
    let seen_a = Rc::new(RefCell::new(Vec::new()));
    let seen_b = Rc::new(RefCell::new(Vec::new()));

    let a = seen_a.clone();
    store.subscribe(move |t| a.borrow_mut().push(t));
    let b = seen_b.clone();
    let id_b = store.subscribe(move |t| b.borrow_mut().push(t));

    store.set_theme(Theme::Dark);
    assert_eq!(*seen_a.borrow(), vec![Theme::Dark]);
    assert_eq!(*seen_b.borrow(), vec![Theme::Dark]);

    assert!(store.unsubscribe(id_b));
    assert!(!store.unsubscribe(id_b));
    store.set_theme(Theme::Light);
    assert_eq!(*seen_a.borrow(), vec![Theme::Dark, Theme::Light]);
    assert_eq!(*seen_b.borrow(), vec![Theme::Dark]);
}

#[test]
fn theme_parses_and_serializes_lowercase() {
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert!("DARK".parse::<Theme>().is_err());
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(Theme::Light.to_string(), "light");
}
