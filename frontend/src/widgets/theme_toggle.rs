use dioxus::prelude::*;
use crate::theme::{toggle_title, use_theme, AppColors};
use rafiq_core::Theme;

#[component]
pub fn ThemeToggle(#[props(default)] show_label: bool) -> Element {
    let mut store = use_theme();
    let theme = store.read().theme();
    let title = toggle_title(theme);
    let icon = match theme {
        Theme::Light => "☀",
        Theme::Dark => "🌙",
    };
    let color = AppColors::on_surface(theme);

    rsx! {
        button {
            title: "{title}",
            onclick: move |_| {
                store.write().toggle();
            },
            style: "display: inline-flex; align-items: center; gap: 6px; padding: 6px 10px; border-radius: 10px; border: none; background: transparent; color: {color}; cursor: pointer;",
            span { "{icon}" }
            if show_label {
                span { style: "font-size: 0.8rem; text-transform: capitalize;", "{theme}" }
            }
        }
    }
}
