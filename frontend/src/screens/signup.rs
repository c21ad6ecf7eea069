use dioxus::prelude::*;
use rafiq_core::{Field, FormKind, FormState, Theme};
use crate::app::use_services;
use crate::theme::AppColors;
use crate::widgets::{
    BrandMark, CheckboxField, CloseButton, ErrorBanner, GradientBackground, GradientCard,
    PasswordChecklist, SuccessPanel, TextField,
};

#[component]
pub fn SignupScreen(
    theme: Theme,
    on_close: EventHandler<()>,
    on_switch_to_login: EventHandler<()>,
) -> Element {
    let services = use_services();
    let mut form = use_signal(|| FormState::new(FormKind::Signup));

    let state = form.read().clone();
    if state.is_succeeded() {
        return rsx! {
            SuccessPanel {
                theme,
                title: "Welcome to Rafiq!",
                message: "Your account has been created successfully. Please check your email to verify your account.",
                on_close,
                continue_label: "Continue to Login",
                on_continue: on_switch_to_login,
            }
        };
    }

    let busy = state.is_busy();
    let on_surface = AppColors::on_surface(theme);
    let muted = AppColors::muted(theme);
    let gradient = AppColors::BRAND_GRADIENT;
    let pink = AppColors::PINK;
    let err = |field: Field| state.error(field).map(str::to_string);

    let submit = move |ev: FormEvent| {
        ev.prevent_default();
        let snapshot = match form.write().begin_submit() {
            Ok(values) => values,
            Err(_) => return,
        };
        let submitter = services.submitter.clone();
        spawn(async move {
            let outcome = submitter.submit(FormKind::Signup, &snapshot).await;
            form.write().finish_submit(outcome);
        });
    };

    rsx! {
        GradientBackground { theme,
            CloseButton { theme, on_close }
            div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 24px;",
                div { style: "width: 100%; max-width: 640px;",
                    div { style: "text-align: center; margin-bottom: 32px;",
                        BrandMark {}
                        h1 { style: "font-size: 1.9rem; font-weight: 700; color: {on_surface}; margin: 24px 0 8px;", "Create your account" }
                        p { style: "color: {muted};", "Join thousands of learners on Rafiq" }
                    }
                    GradientCard { theme,
                        h2 { style: "font-size: 1.25rem; margin: 0 0 20px; color: {on_surface};", "Sign Up" }
                        form { onsubmit: submit,
                            if let Some(message) = state.general_error() {
                                ErrorBanner { theme, message: message.to_string() }
                            }
                            div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                                TextField {
                                    theme,
                                    id: "firstName",
                                    label: "First Name",
                                    placeholder: "Enter your first name",
                                    value: state.text(Field::FirstName).to_string(),
                                    error: err(Field::FirstName),
                                    disabled: busy,
                                    on_input: move |v: String| form.write().set_text(Field::FirstName, v),
                                }
                                TextField {
                                    theme,
                                    id: "lastName",
                                    label: "Last Name",
                                    placeholder: "Enter your last name",
                                    value: state.text(Field::LastName).to_string(),
                                    error: err(Field::LastName),
                                    disabled: busy,
                                    on_input: move |v: String| form.write().set_text(Field::LastName, v),
                                }
                            }
                            TextField {
                                theme,
                                id: "email",
                                label: "Email Address",
                                placeholder: "Enter your email",
                                input_type: "email",
                                value: state.text(Field::Email).to_string(),
                                error: err(Field::Email),
                                disabled: busy,
                                on_input: move |v: String| form.write().set_text(Field::Email, v),
                            }
                            TextField {
                                theme,
                                id: "username",
                                label: "Username",
                                placeholder: "Choose a username",
                                value: state.text(Field::Username).to_string(),
                                error: err(Field::Username),
                                disabled: busy,
                                on_input: move |v: String| form.write().set_text(Field::Username, v),
                            }
                            TextField {
                                theme,
                                id: "password",
                                label: "Password",
                                placeholder: "Create a password",
                                revealable: true,
                                value: state.text(Field::Password).to_string(),
                                error: err(Field::Password),
                                disabled: busy,
                                on_input: move |v: String| form.write().set_text(Field::Password, v),
                            }
                            PasswordChecklist { theme, password: state.text(Field::Password).to_string() }
                            TextField {
                                theme,
                                id: "confirmPassword",
                                label: "Confirm Password",
                                placeholder: "Confirm your password",
                                revealable: true,
                                value: state.text(Field::ConfirmPassword).to_string(),
                                error: err(Field::ConfirmPassword),
                                disabled: busy,
                                on_input: move |v: String| form.write().set_text(Field::ConfirmPassword, v),
                            }
                            CheckboxField {
                                theme,
                                label: "I agree to the Terms of Service".to_string(),
                                checked: state.flag(Field::AgreeToTerms),
                                error: err(Field::AgreeToTerms),
                                disabled: busy,
                                on_change: move |v: bool| form.write().set_flag(Field::AgreeToTerms, v),
                            }
                            CheckboxField {
                                theme,
                                label: "I agree to the Privacy Policy".to_string(),
                                checked: state.flag(Field::AgreeToPrivacy),
                                error: err(Field::AgreeToPrivacy),
                                disabled: busy,
                                on_change: move |v: bool| form.write().set_flag(Field::AgreeToPrivacy, v),
                            }
                            button {
                                r#type: "submit",
                                disabled: busy,
                                style: "width: 100%; height: 52px; margin-top: 8px; border-radius: 12px; border: none; background: {gradient}; color: white; font-size: 1.05rem; font-weight: 600; cursor: pointer;",
                                if busy { "Creating account..." } else { "Create Account" }
                            }
                            p { style: "text-align: center; margin-top: 20px; font-size: 0.875rem; color: {muted};",
                                "Already have an account? "
                                button {
                                    r#type: "button",
                                    onclick: move |_| on_switch_to_login.call(()),
                                    style: "background: none; border: none; color: {pink}; font-weight: 600; cursor: pointer;",
                                    "Sign in here"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
