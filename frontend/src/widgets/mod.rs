mod auth_chrome;
mod checkbox_field;
mod feature_card;
mod gradient_background;
mod gradient_card;
mod password_checklist;
mod testimonial_card;
mod text_field;
mod theme_toggle;

pub use auth_chrome::{BrandMark, CloseButton, ErrorBanner, SuccessPanel};
pub use checkbox_field::CheckboxField;
pub use feature_card::FeatureCard;
pub use gradient_background::GradientBackground;
pub use gradient_card::GradientCard;
pub use password_checklist::PasswordChecklist;
pub use testimonial_card::TestimonialCard;
pub use text_field::TextField;
pub use theme_toggle::ThemeToggle;
