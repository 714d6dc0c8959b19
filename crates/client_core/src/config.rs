//! Client configuration.
//!
//! The base URL comes from `CINEMAMATCH_API_URL` when set, otherwise the
//! hosted backend is used. Invalid overrides fall back to the default with a
//! warning rather than aborting startup.

use url::Url;

pub const DEFAULT_API_URL: &str = "https://cinemamatch-backend-12e3ece5f93b.herokuapp.com";
pub const API_URL_ENV_VAR: &str = "CINEMAMATCH_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Reads the environment and produces the effective client configuration.
pub fn load_config() -> ClientConfig {
    let override_url = std::env::var(API_URL_ENV_VAR).ok();
    ClientConfig {
        base_url: resolve_base_url(override_url.as_deref()),
    }
}

/// Picks the effective base URL from an optional override. Accepts only
/// absolute http/https URLs; anything else is ignored. Trailing slashes are
/// stripped so request paths can be appended uniformly.
pub fn resolve_base_url(override_url: Option<&str>) -> String {
    let candidate = match override_url.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return DEFAULT_API_URL.to_string(),
    };
    match Url::parse(candidate) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            candidate.trim_end_matches('/').to_string()
        }
        Ok(url) => {
            tracing::warn!(
                scheme = url.scheme(),
                "ignoring {} override with unsupported scheme",
                API_URL_ENV_VAR
            );
            DEFAULT_API_URL.to_string()
        }
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unparseable {} override", API_URL_ENV_VAR);
            DEFAULT_API_URL.to_string()
        }
    }
}
