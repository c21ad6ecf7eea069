use dioxus::prelude::*;
use crate::theme::AppColors;
use rafiq_core::validation::password_checklist;
use rafiq_core::Theme;

/// Live pass/fail list under the signup password. Hidden while the field is empty.
#[component]
pub fn PasswordChecklist(theme: Theme, password: String) -> Element {
    if password.is_empty() {
        return rsx! {};
    }
    let ok = AppColors::success(theme);
    let muted = AppColors::muted(theme);
    let items = password_checklist(&password);

    rsx! {
        ul { style: "list-style: none; padding: 0; margin: -8px 0 16px; display: grid; grid-template-columns: 1fr 1fr; gap: 4px;",
            {items.into_iter().map(|item| {
                let color = if item.met { ok } else { muted };
                let mark = if item.met { "✓" } else { "○" };
                rsx! {
                    li { key: "{item.label}", style: "font-size: 0.8rem; color: {color};",
                        "{mark} {item.label}"
                    }
                }
            })}
        }
    }
}
