use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};
use rafiq_core::Theme;

/// Frosted card used by the auth forms and landing sections.
#[component]
pub fn GradientCard(theme: Theme, children: Element) -> Element {
    let surface = AppColors::card(theme);
    let border = AppColors::border(theme);
    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: 16px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM}; backdrop-filter: blur(12px); box-shadow: 0 10px 30px rgba(0,0,0,0.08);",
            {children}
        }
    }
}
