use dioxus::prelude::*;
use crate::theme::AppColors;
use rafiq_core::Theme;

#[component]
pub fn GradientBackground(theme: Theme, children: Element) -> Element {
    let background = AppColors::page_gradient(theme);
    let text = AppColors::on_surface(theme);
    rsx! {
        div {
            class: "{theme}",
            style: "min-height: 100vh; background: {background}; color: {text}; transition: background 0.3s, color 0.3s;",
            {children}
        }
    }
}
