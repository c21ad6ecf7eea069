use dioxus::prelude::*;
use crate::theme::AppColors;
use rafiq_core::Theme;

#[component]
pub fn CheckboxField(
    theme: Theme,
    label: String,
    checked: bool,
    error: Option<String>,
    #[props(default)] disabled: bool,
    on_change: EventHandler<bool>,
) -> Element {
    let muted = AppColors::muted(theme);
    let error_color = AppColors::error(theme);
    let accent = AppColors::PINK;
    rsx! {
        div { style: "margin-bottom: 12px;",
            label { style: "display: flex; align-items: center; gap: 8px; font-size: 0.875rem; color: {muted}; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked,
                    disabled,
                    onchange: move |_| on_change.call(!checked),
                    style: "width: 16px; height: 16px; accent-color: {accent};",
                }
                span { "{label}" }
            }
            if let Some(e) = error {
                p { style: "margin: 4px 0 0 24px; font-size: 0.875rem; color: {error_color};", "{e}" }
            }
        }
    }
}
