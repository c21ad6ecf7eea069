//! App theme: palette and spacing per light/dark mode, plus the shared theme store context.

use crate::storage::{open_platform_store, PlatformStore};
use dioxus::prelude::*;
use rafiq_core::{Config, Theme, ThemeStore, ThemeSurface};

/// Rafiq brand colors. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    pub const PINK: &'static str = "#EC4899";
    pub const PURPLE: &'static str = "#9333EA";
    pub const BRAND_GRADIENT: &'static str = "linear-gradient(135deg, #EC4899, #9333EA)";

    // Light
    pub const LIGHT_SURFACE: &'static str = "#F9FAFB";
    pub const LIGHT_ON_SURFACE: &'static str = "#111827";
    pub const LIGHT_MUTED: &'static str = "#4B5563";
    pub const LIGHT_CARD: &'static str = "rgba(255,255,255,0.85)";
    pub const LIGHT_BORDER: &'static str = "#E5E7EB";
    pub const LIGHT_SUCCESS: &'static str = "#16A34A";
    pub const LIGHT_ERROR: &'static str = "#DC2626";

    // Dark
    pub const DARK_SURFACE: &'static str = "#030712";
    pub const DARK_ON_SURFACE: &'static str = "#F3F4F6";
    pub const DARK_MUTED: &'static str = "#9CA3AF";
    pub const DARK_CARD: &'static str = "rgba(17,24,39,0.85)";
    pub const DARK_BORDER: &'static str = "#1F2937";
    pub const DARK_SUCCESS: &'static str = "#22C55E";
    pub const DARK_ERROR: &'static str = "#F87171";

    pub fn surface(theme: Theme) -> &'static str {
        pick(theme, Self::LIGHT_SURFACE, Self::DARK_SURFACE)
    }
    pub fn on_surface(theme: Theme) -> &'static str {
        pick(theme, Self::LIGHT_ON_SURFACE, Self::DARK_ON_SURFACE)
    }
    pub fn muted(theme: Theme) -> &'static str {
        pick(theme, Self::LIGHT_MUTED, Self::DARK_MUTED)
    }
    pub fn card(theme: Theme) -> &'static str {
        pick(theme, Self::LIGHT_CARD, Self::DARK_CARD)
    }
    pub fn border(theme: Theme) -> &'static str {
        pick(theme, Self::LIGHT_BORDER, Self::DARK_BORDER)
    }
    pub fn success(theme: Theme) -> &'static str {
        pick(theme, Self::LIGHT_SUCCESS, Self::DARK_SUCCESS)
    }
    pub fn error(theme: Theme) -> &'static str {
        pick(theme, Self::LIGHT_ERROR, Self::DARK_ERROR)
    }
    /// Page background gradient, end tinted towards purple.
    pub fn page_gradient(theme: Theme) -> &'static str {
        pick(
            theme,
            "linear-gradient(135deg, #F9FAFB, #FFFFFF, rgba(250,245,255,0.6))",
            "linear-gradient(135deg, #030712, #111827, rgba(59,7,100,0.25))",
        )
    }
}

fn pick(theme: Theme, light: &'static str, dark: &'static str) -> &'static str {
    match theme {
        Theme::Light => light,
        Theme::Dark => dark,
    }
}

/// 8px grid spacing.
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const XL: &str = "32px";
    pub const CARD_PADDING: &str = "24px";
    pub const SCREEN_PADDING: &str = "24px";
}

/// Label for the toggle button: names the mode it switches to.
pub fn toggle_title(theme: Theme) -> String {
    format!("Switch to {} mode", theme.toggled())
}

/// Writes the root class, `color-scheme` and `--initial-color-mode` on `<html>`.
pub struct DocumentSurface;

impl ThemeSurface for DocumentSurface {
    fn apply(&mut self, theme: Theme) {
        let js = format!(
            "const root = document.documentElement;\
             root.classList.remove('light', 'dark');\
             root.classList.add('{t}');\
             root.style.colorScheme = '{t}';\
             root.style.setProperty('--initial-color-mode', '{t}');",
            t = theme.as_str()
        );
        let eval = dioxus::document::eval(&js);
        spawn(async move {
            if let Err(e) = eval.await {
                tracing::debug!(error = ?e, "theme surface script failed");
            }
        });
    }
}

pub type ThemeHandle = Signal<ThemeStore<PlatformStore>>;

/// Resolves the theme once and shares the store with the whole tree.
pub fn use_theme_provider(config: &Config) -> ThemeHandle {
    let config = config.clone();
    use_context_provider(move || {
        let mut store = ThemeStore::load(open_platform_store(&config), config.theme_key.clone())
            .with_surface(DocumentSurface);
        store.subscribe(|theme| tracing::info!(%theme, "theme changed"));
        Signal::new(store)
    })
}

pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}
