use log::Level;

const DEFAULT_BASE_PATH: &str = "/Harrisdesign/";

/// Path the site is served under. CI sets `BASE_PATH` at build time when the
/// site is deployed somewhere other than the default project page.
pub fn base_path() -> &'static str {
    match option_env!("BASE_PATH") {
        Some(path) if !path.is_empty() => path,
        _ => DEFAULT_BASE_PATH,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty lifecycle logs while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Resolves a static asset against the base path. Absolute URLs and
/// root-relative paths are left alone.
pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with('/') {
        return path.to_string();
    }
    join(base_path(), path)
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches("./"))
}
