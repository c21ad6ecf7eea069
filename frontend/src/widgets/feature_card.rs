use dioxus::prelude::*;
use crate::content::Feature;
use crate::theme::AppColors;
use crate::widgets::GradientCard;
use rafiq_core::Theme;

#[component]
pub fn FeatureCard(theme: Theme, feature: Feature) -> Element {
    let muted = AppColors::muted(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    rsx! {
        GradientCard { theme,
            div { style: "display: inline-flex; width: 56px; height: 56px; align-items: center; justify-content: center; border-radius: 16px; background: {gradient}; font-size: 1.6rem; margin-bottom: 20px;",
                "{feature.icon}"
            }
            h3 { style: "font-size: 1.2rem; font-weight: 700; margin: 0 0 12px;", "{feature.title}" }
            p { style: "color: {muted}; line-height: 1.6; margin: 0;", "{feature.description}" }
        }
    }
}
