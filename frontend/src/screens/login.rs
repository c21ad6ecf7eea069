use dioxus::prelude::*;
use rafiq_core::{Field, FormKind, FormState, Theme};
use crate::app::use_services;
use crate::theme::AppColors;
use crate::widgets::{
    BrandMark, CheckboxField, CloseButton, ErrorBanner, GradientBackground, GradientCard,
    SuccessPanel, TextField,
};

#[component]
pub fn LoginScreen(
    theme: Theme,
    on_close: EventHandler<()>,
    on_switch_to_signup: EventHandler<()>,
) -> Element {
    let services = use_services();
    let mut form = use_signal(|| FormState::new(FormKind::Login));

    let state = form.read().clone();
    if state.is_succeeded() {
        return rsx! {
            SuccessPanel {
                theme,
                title: "Welcome back!",
                message: "You have successfully logged in to Rafiq.",
                on_close,
            }
        };
    }

    let busy = state.is_busy();
    let on_surface = AppColors::on_surface(theme);
    let muted = AppColors::muted(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    let pink = AppColors::PINK;

    let submit = move |ev: FormEvent| {
        ev.prevent_default();
        let snapshot = match form.write().begin_submit() {
            Ok(values) => values,
            Err(_) => return,
        };
        let submitter = services.submitter.clone();
        spawn(async move {
            let outcome = submitter.submit(FormKind::Login, &snapshot).await;
            form.write().finish_submit(outcome);
        });
    };

    rsx! {
        GradientBackground { theme,
            CloseButton { theme, on_close }
            div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 24px;",
                div { style: "width: 100%; max-width: 440px;",
                    div { style: "text-align: center; margin-bottom: 32px;",
                        BrandMark {}
                        h1 { style: "font-size: 1.9rem; font-weight: 700; color: {on_surface}; margin: 24px 0 8px;", "Welcome back" }
                        p { style: "color: {muted};", "Sign in to your learning companion" }
                    }
                    GradientCard { theme,
                        h2 { style: "font-size: 1.25rem; margin: 0 0 20px; color: {on_surface};", "Sign In" }
                        form { onsubmit: submit,
                            if let Some(message) = state.general_error() {
                                ErrorBanner { theme, message: message.to_string() }
                            }
                            TextField {
                                theme,
                                id: "email",
                                label: "Email Address",
                                placeholder: "Enter your email",
                                input_type: "email",
                                value: state.text(Field::Email).to_string(),
                                error: state.error(Field::Email).map(str::to_string),
                                disabled: busy,
                                on_input: move |v: String| form.write().set_text(Field::Email, v),
                            }
                            TextField {
                                theme,
                                id: "password",
                                label: "Password",
                                placeholder: "Enter your password",
                                revealable: true,
                                value: state.text(Field::Password).to_string(),
                                error: state.error(Field::Password).map(str::to_string),
                                disabled: busy,
                                on_input: move |v: String| form.write().set_text(Field::Password, v),
                            }
                            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 20px;",
                                CheckboxField {
                                    theme,
                                    label: "Remember me".to_string(),
                                    checked: state.flag(Field::RememberMe),
                                    disabled: busy,
                                    on_change: move |v: bool| form.write().set_flag(Field::RememberMe, v),
                                }
                                a { href: "#forgot-password", style: "font-size: 0.875rem; color: {pink}; text-decoration: none;", "Forgot password?" }
                            }
                            button {
                                r#type: "submit",
                                disabled: busy,
                                style: "width: 100%; height: 52px; border-radius: 12px; border: none; background: {gradient}; color: white; font-size: 1.05rem; font-weight: 600; cursor: pointer;",
                                if busy { "Signing in..." } else { "Sign In" }
                            }
                            p { style: "text-align: center; margin-top: 20px; font-size: 0.875rem; color: {muted};",
                                "Don't have an account? "
                                button {
                                    r#type: "button",
                                    onclick: move |_| on_switch_to_signup.call(()),
                                    style: "background: none; border: none; color: {pink}; font-weight: 600; cursor: pointer;",
                                    "Sign up for free"
                                }
                            }
                        }
                    }
                    p { style: "text-align: center; margin-top: 32px; font-size: 0.75rem; color: {muted};",
                        "By signing in, you agree to our Terms of Service and Privacy Policy"
                    }
                }
            }
        }
    }
}
