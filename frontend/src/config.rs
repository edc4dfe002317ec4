//! Runtime configuration of the booking client.
//!
//! The only knob is the base path of the booking API. It resolves in this
//! order:
//!
//! 1. `<meta name="ojek-api-base" content="...">` in `index.html`, read once
//!    at startup.
//! 2. The `OJEK_API_BASE` environment variable at compile time.
//! 3. `/api`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::dom;

pub const DEFAULT_API_BASE: &str = "/api";
pub const API_BASE_META: &str = "ojek-api-base";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// API base without a trailing slash (`/api`, `https://host/api`).
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_api_base(option_env!("OJEK_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }
}

impl AppConfig {
    /// Builds the config from compile-time defaults and the page's meta tag.
    pub fn load() -> Self {
        match dom::meta_content(API_BASE_META) {
            Some(base) if normalize_base(&base).is_some() => Self::with_api_base(&base),
            _ => Self::default(),
        }
    }

    pub fn with_api_base(base: &str) -> Self {
        Self {
            api_base: normalize_base(base).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }
}

/// Trims whitespace and trailing slashes. Blank input means "not set".
/// A bare `/` collapses to the empty string, i.e. API routes at the origin root.
pub fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.trim_end_matches('/').to_string())
}
