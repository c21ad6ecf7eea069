use dioxus::prelude::*;
use crate::content::{initial, Testimonial};
use crate::theme::AppColors;
use crate::widgets::GradientCard;
use rafiq_core::Theme;

#[component]
pub fn TestimonialCard(theme: Theme, testimonial: Testimonial) -> Element {
    let muted = AppColors::muted(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    let letter = initial(testimonial.name);
    rsx! {
        GradientCard { theme,
            div { style: "color: #FACC15; margin-bottom: 16px;", "★★★★★" }
            blockquote { style: "margin: 0 0 20px; font-size: 1.05rem; line-height: 1.6;", "\"{testimonial.content}\"" }
            div { style: "display: flex; align-items: center; gap: 12px;",
                div { style: "width: 44px; height: 44px; border-radius: 12px; background: {gradient}; color: white; font-weight: 700; display: flex; align-items: center; justify-content: center;",
                    "{letter}"
                }
                div {
                    div { style: "font-weight: 600;", "{testimonial.name}" }
                    div { style: "font-size: 0.85rem; color: {muted};", "{testimonial.role}" }
                }
            }
        }
    }
}
