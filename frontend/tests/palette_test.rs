//! Palette and theme labels (pure logic, no renderer).

use pretty_assertions::assert_eq;
use rafiq_core::Theme;
use rafiq_frontend::theme::{toggle_title, AppColors};

#[test]
fn palette_follows_theme() {
    assert_eq!(AppColors::surface(Theme::Light), AppColors::LIGHT_SURFACE);
    assert_eq!(AppColors::surface(Theme::Dark), AppColors::DARK_SURFACE);
    assert_eq!(AppColors::on_surface(Theme::Dark), AppColors::DARK_ON_SURFACE);
    assert_eq!(AppColors::error(Theme::Light), AppColors::LIGHT_ERROR);
    assert_eq!(AppColors::success(Theme::Dark), AppColors::DARK_SUCCESS);
}

#[test]
fn light_and_dark_differ_everywhere() {
    type Pick = fn(Theme) -> &'static str;
    let picks: [Pick; 7] = [
        AppColors::surface,
        AppColors::on_surface,
        AppColors::muted,
        AppColors::card,
        AppColors::border,
        AppColors::error,
        AppColors::page_gradient,
    ];
    for pick in picks {
        assert_ne!(pick(Theme::Light), pick(Theme::Dark));
    }
}

#[test]
fn toggle_title_names_the_other_mode() {
    assert_eq!(toggle_title(Theme::Light), "Switch to dark mode");
    assert_eq!(toggle_title(Theme::Dark), "Switch to light mode");
}
