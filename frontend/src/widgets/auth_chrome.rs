//! Pieces shared by the login and signup screens.

use dioxus::prelude::*;
use crate::content::BRAND;
use crate::theme::AppColors;
use crate::widgets::GradientBackground;
use rafiq_core::Theme;

#[component]
pub fn BrandMark(#[props(default = 48)] size: u32) -> Element {
    let gradient = AppColors::BRAND_GRADIENT;
    let glyph = size / 2;
    rsx! {
        div { style: "display: flex; align-items: center; justify-content: center; gap: 12px;",
            div { style: "width: {size}px; height: {size}px; border-radius: 12px; background: {gradient}; display: flex; align-items: center; justify-content: center; font-size: {glyph}px;",
                "🧠"
            }
            span { style: "font-weight: 800; font-size: 1.5rem; background: {gradient}; -webkit-background-clip: text; background-clip: text; color: transparent;",
                "{BRAND}"
            }
        }
    }
}

#[component]
pub fn CloseButton(theme: Theme, on_close: EventHandler<()>) -> Element {
    let color = AppColors::muted(theme);
    let surface = AppColors::card(theme);
    rsx! {
        button {
            title: "Close",
            onclick: move |_| on_close.call(()),
            style: "position: fixed; top: 24px; right: 24px; z-index: 50; width: 48px; height: 48px; border-radius: 50%; border: none; background: {surface}; color: {color}; font-size: 1.4rem; cursor: pointer; box-shadow: 0 4px 14px rgba(0,0,0,0.12);",
            "✕"
        }
    }
}

#[component]
pub fn ErrorBanner(theme: Theme, message: String) -> Element {
    let color = AppColors::error(theme);
    rsx! {
        div { style: "display: flex; gap: 8px; align-items: center; padding: 12px; margin-bottom: 16px; border-radius: 12px; background: rgba(239,68,68,0.1); color: {color}; font-size: 0.875rem;",
            span { "⚠" }
            span { "{message}" }
        }
    }
}

/// Full-page confirmation after a successful submit.
#[component]
pub fn SuccessPanel(
    theme: Theme,
    title: &'static str,
    message: &'static str,
    on_close: Option<EventHandler<()>>,
    continue_label: Option<&'static str>,
    on_continue: Option<EventHandler<()>>,
) -> Element {
    let muted = AppColors::muted(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    rsx! {
        GradientBackground { theme,
            if let Some(on_close) = on_close {
                CloseButton { theme, on_close }
            }
            div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 24px;",
                div { style: "text-align: center; max-width: 420px;",
                    div { style: "width: 64px; height: 64px; margin: 0 auto 24px; border-radius: 50%; background: linear-gradient(135deg, #22C55E, #16A34A); color: white; font-size: 2rem; display: flex; align-items: center; justify-content: center;",
                        "✓"
                    }
                    h2 { style: "font-size: 1.5rem; font-weight: 700; margin: 0 0 16px;", "{title}" }
                    p { style: "color: {muted}; margin: 0 0 24px;", "{message}" }
                    if let (Some(label), Some(on_continue)) = (continue_label, on_continue) {
                        button {
                            onclick: move |_| on_continue.call(()),
                            style: "padding: 12px 28px; border-radius: 12px; border: none; background: {gradient}; color: white; font-weight: 600; cursor: pointer;",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
