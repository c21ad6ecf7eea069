use dioxus::prelude::*;
use crate::theme::AppColors;
use rafiq_core::Theme;

/// Labelled input with inline error. `revealable` adds a show/hide toggle for passwords.
#[component]
pub fn TextField(
    theme: Theme,
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] revealable: bool,
    error: Option<String>,
    #[props(default)] disabled: bool,
    on_input: EventHandler<String>,
) -> Element {
    let mut revealed = use_signal(|| false);
    let kind = match (revealable, revealed()) {
        (true, true) => "text",
        (true, false) => "password",
        (false, _) => input_type,
    };
    let on_surface = AppColors::on_surface(theme);
    let border = if error.is_some() { AppColors::error(theme) } else { AppColors::border(theme) };
    let error_color = AppColors::error(theme);
    let reveal_title = if revealed() { "Hide password" } else { "Show password" };

    rsx! {
        div { style: "margin-bottom: 16px;",
            label { r#for: id, style: "display: block; margin-bottom: 6px; font-size: 0.875rem; font-weight: 500; color: {on_surface};", "{label}" }
            div { style: "position: relative;",
                input {
                    id,
                    r#type: kind,
                    placeholder,
                    value: "{value}",
                    disabled,
                    oninput: move |ev| on_input.call(ev.value()),
                    style: "width: 100%; padding: 12px; padding-right: 44px; border-radius: 12px; border: 1px solid {border}; background: transparent; color: {on_surface}; box-sizing: border-box;",
                }
                if revealable {
                    button {
                        r#type: "button",
                        disabled,
                        title: reveal_title,
                        onclick: move |_| revealed.set(!revealed()),
                        style: "position: absolute; right: 10px; top: 50%; transform: translateY(-50%); background: none; border: none; cursor: pointer; color: #9CA3AF;",
                        if revealed() { "🙈" } else { "👁" }
                    }
                }
            }
            if let Some(e) = error {
                p { style: "margin-top: 4px; font-size: 0.875rem; color: {error_color};", "{e}" }
            }
        }
    }
}
