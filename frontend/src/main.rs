//! Rafiq frontend - Dioxus app.
//! Web: dx serve (cargo run shells out to it). Desktop: cargo run --features desktop.

#[cfg(any(target_arch = "wasm32", feature = "desktop"))]
fn main() {
    use rafiq_frontend::app::App;
    // launch() installs dioxus' tracing logger
    dioxus::launch(App);
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
fn main() {
    // The web build needs the dx bundler. Keep wasm-bindgen happy on Rust 1.82+ by
    // turning off reference-types in the same shell dx runs in.
    let rustflags = match std::env::var("RUSTFLAGS") {
        Ok(flags) if !flags.is_empty() => format!("{} -C target-feature=-reference-types", flags),
        _ => "-C target-feature=-reference-types".to_string(),
    };
    let script = format!(
        "export RUSTFLAGS='{}'; exec dx serve",
        rustflags.replace('\'', "'\"'\"'")
    );
    match std::process::Command::new("sh").args(["-c", &script]).status() {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}
