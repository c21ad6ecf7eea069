use dioxus::prelude::*;
use std::rc::Rc;
use rafiq_core::{Config, SimulatedSubmitter, Submitter};
use crate::screens::{LandingScreen, LoginScreen, SignupScreen};
use crate::theme::use_theme_provider;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Route {
    Landing,
    Login,
    Signup,
}

/// Collaborators shared with the screens through context.
#[derive(Clone)]
pub struct AppServices {
    pub submitter: Rc<dyn Submitter>,
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

fn load_config() -> Config {
    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config unreadable, using defaults");
        Config::default()
    });
    tracing::info!(theme_key = %config.theme_key, submit_delay_ms = config.submit_delay.as_millis() as u64, "rafiq starting");
    config
}

#[component]
pub fn App() -> Element {
    let config = use_hook(load_config);
    let themes = use_theme_provider(&config);
    let submit_delay = config.submit_delay;
    use_context_provider(move || AppServices {
        submitter: Rc::new(SimulatedSubmitter::new(submit_delay)),
    });
    let mut route = use_signal(|| Route::Landing);
    let theme = themes.read().theme();

    let current_screen = match route() {
        Route::Landing => rsx! {
            LandingScreen {
                theme,
                on_login: move |_| route.set(Route::Login),
                on_signup: move |_| route.set(Route::Signup),
            }
        },
        Route::Login => rsx! {
            LoginScreen {
                theme,
                on_close: move |_| route.set(Route::Landing),
                on_switch_to_signup: move |_| route.set(Route::Signup),
            }
        },
        Route::Signup => rsx! {
            SignupScreen {
                theme,
                on_close: move |_| route.set(Route::Landing),
                on_switch_to_login: move |_| route.set(Route::Login),
            }
        },
    };

    rsx! {
        div { style: "font-family: Inter, system-ui, sans-serif;",
            {current_screen}
        }
    }
}
