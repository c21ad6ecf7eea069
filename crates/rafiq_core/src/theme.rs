//! Light/dark theme store: resolved once per session, persisted on every change,
//! pushed to the styling surface and to subscribers synchronously.

use crate::error::ParseThemeError;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

pub const DEFAULT_THEME_KEY: &str = "rafiq-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact spelling only: no trimming, no case folding.
impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Initial theme from a persisted flag: a valid spelling is adopted, anything else is Light.
pub fn resolve_theme(persisted: Option<&str>) -> Theme {
    persisted
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

/// Rendering side of a theme change: root class, `color-scheme` hint and the
/// `--initial-color-mode` property.
pub trait ThemeSurface {
    fn apply(&mut self, theme: Theme);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Theme)>;

pub struct ThemeStore<S> {
    storage: S,
    key: String,
    theme: Theme,
    surface: Option<Box<dyn ThemeSurface>>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Reads the persisted flag once. The store never re-reads it afterwards.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let persisted = match storage.get(&key) {
            Ok(v) => v,
            Err(e) => {
                warn!(key = %key, error = %e, "theme flag unreadable, using default");
                None
            }
        };
        let theme = resolve_theme(persisted.as_deref());
        debug!(key = %key, persisted = ?persisted, %theme, "theme resolved");
        Self {
            storage,
            key,
            theme,
            surface: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn with_surface(mut self, surface: impl ThemeSurface + 'static) -> Self {
        let mut surface: Box<dyn ThemeSurface> = Box::new(surface);
        surface.apply(self.theme);
        self.surface = Some(surface);
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Overwrite, persist, restyle and notify, in that order. A failed write is logged and
    /// dropped; the in-memory value stays authoritative.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.set(&self.key, theme.as_str()) {
            warn!(key = %self.key, error = %e, "theme not persisted");
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.apply(theme);
        }
        for (_, listener) in self.listeners.iter_mut() {
            listener(theme);
        }
        debug!(%theme, listeners = self.listeners.len(), "theme set");
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S> fmt::Debug for ThemeStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("key", &self.key)
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
