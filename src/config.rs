pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const CALENDLY_URL: &str = "https://calendly.com/hyzalabs-strategy/session";
pub const CONSENT_STORAGE_KEY: &str = "hyzalabs_cookie_consent";
pub const ANALYSIS_TIMEOUT_MS: u32 = 30_000;

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Key baked in at build time, e.g. `GEMINI_API_KEY=... trunk build --release`.
pub fn gemini_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}

pub fn gemini_api_base() -> &'static str {
    option_env!("GEMINI_API_BASE")
        .filter(|base| !base.trim().is_empty())
        .unwrap_or(DEFAULT_GEMINI_API_BASE)
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
