//! Client configuration resolved at build time.
//!
//! WASM bundles have no process environment at runtime, so values are baked
//! in with `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SESSION_STORAGE_KEY: &str = "jagat_session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the serialized session identity.
    pub session_storage_key: String,
}

impl ClientConfig {
    /// Build config from build-time environment variables.
    ///
    /// Optional:
    /// - `TRIAGE_API_BASE_URL`: default `http://localhost:8000`
    /// - `TRIAGE_SESSION_KEY`: default `jagat_session`
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TRIAGE_API_BASE_URL"),
            option_env!("TRIAGE_SESSION_KEY"),
        )
    }

    /// Build config from raw optional values. Blank values fall back to defaults.
    pub fn from_values(api_base_url: Option<&str>, session_storage_key: Option<&str>) -> Self {
        let api_base_url = non_blank(api_base_url)
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let session_storage_key = non_blank(session_storage_key)
            .unwrap_or(DEFAULT_SESSION_STORAGE_KEY)
            .to_owned();
        Self {
            api_base_url,
            session_storage_key,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
