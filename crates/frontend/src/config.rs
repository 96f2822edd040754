//! Compile-time application settings

/// Product name; its initial is the logo placeholder on the login page
pub const BRAND_NAME: &str = "Immersia";

/// Letter shown in the login logo placeholder
pub fn brand_initial() -> String {
    BRAND_NAME.chars().take(1).collect()
}

/// Minimum trimmed length of a password accepted by the login form
pub const MIN_SECRET_LEN: usize = 6;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

/// Console log level, taken from `IMMERSIA_LOG_LEVEL` at build time
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("IMMERSIA_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
