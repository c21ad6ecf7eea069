// Desktop builds on Linux link against libxdo; fail early with install hints when it is missing.

fn main() {
    let desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if desktop && linux && !libxdo_present() {
        print_libxdo_help();
        std::process::exit(1);
    }
}

fn libxdo_present() -> bool {
    let via_pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status()
        .map(|s| s.success());
    match via_pkg_config {
        Ok(true) => true,
        // No .pc file on some distros; fall back to the linker cache
        _ => std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
            .unwrap_or(false),
    }
}

fn print_libxdo_help() {
    eprintln!();
    eprintln!("  error: the Rafiq desktop shell needs libxdo on Linux.");
    eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
    eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
    eprintln!("  then: cargo run -p rafiq-frontend --features desktop");
    eprintln!();
}
