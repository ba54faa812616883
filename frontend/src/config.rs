//! Application configuration.
//!
//! The relay endpoint and timeout are fixed. The relay access key is
//! required external configuration: it is taken from the
//! `KOPTILNYA_RELAY_ACCESS_KEY` environment variable at build time, or
//! from a `<meta name="relay-access-key">` tag in the host page.

use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

use crate::types::{AppError, AppResult};

/// Form relay endpoint (Web3Forms).
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Upper bound for a single relay round-trip, in milliseconds.
pub const RELAY_TIMEOUT_MS: u32 = 20_000;

/// Build-time environment variable carrying the access key.
pub const ACCESS_KEY_ENV: &str = "KOPTILNYA_RELAY_ACCESS_KEY";

/// Name of the meta tag consulted when no key was baked in at build time.
pub const ACCESS_KEY_META: &str = "relay-access-key";

/// Placeholder shipped in page templates. Treated as missing.
pub const ACCESS_KEY_PLACEHOLDER: &str = "YOUR_WEB3FORMS_ACCESS_KEY";

/// Shown when the relay could not be reached or its answer was unreadable.
pub const NETWORK_ERROR_MESSAGE: &str = "Ошибка сети. Попробуйте снова.";

/// Shown when the relay refused the submission without saying why.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Что-то пошло не так";

/// Shown when the page was deployed without an access key.
pub const FORM_UNAVAILABLE_MESSAGE: &str =
    "Форма временно недоступна. Позвоните нам или напишите на почту.";

/// Resolved settings for talking to the form relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub timeout_ms: u32,
}

impl RelayConfig {
    /// Resolve the configuration from the build environment, then the page.
    pub fn resolve() -> AppResult<Self> {
        Self::from_sources(option_env!("KOPTILNYA_RELAY_ACCESS_KEY"), meta_access_key())
    }

    /// Pick the first usable key; the build-time value wins over the page.
    pub fn from_sources(build_time: Option<&str>, page: Option<String>) -> AppResult<Self> {
        let access_key = build_time
            .map(str::to_string)
            .filter(|k| is_usable_key(k))
            .or_else(|| page.filter(|k| is_usable_key(k)))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "relay access key missing: set {} or <meta name=\"{}\">",
                    ACCESS_KEY_ENV, ACCESS_KEY_META
                ))
            })?;

        Ok(Self {
            endpoint: RELAY_ENDPOINT.to_string(),
            access_key: access_key.trim().to_string(),
            timeout_ms: RELAY_TIMEOUT_MS,
        })
    }
}

fn is_usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != ACCESS_KEY_PLACEHOLDER
}

/// Read the access key from `<meta name="relay-access-key" content="...">`.
fn meta_access_key() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", ACCESS_KEY_META);
    let element = document.query_selector(&selector).ok()??;
    let meta = element.dyn_into::<HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_key_wins() {
        let config = RelayConfig::from_sources(Some("build-key"), Some("page-key".into())).unwrap();
        assert_eq!(config.access_key, "build-key");
        assert_eq!(config.endpoint, RELAY_ENDPOINT);
        assert_eq!(config.timeout_ms, RELAY_TIMEOUT_MS);
    }

    #[test]
    fn test_page_key_used_when_build_key_blank() {
        let config = RelayConfig::from_sources(Some("  "), Some(" page-key ".into())).unwrap();
        assert_eq!(config.access_key, "page-key");
    }

    #[test]
    fn test_placeholder_counts_as_missing() {
        let result = RelayConfig::from_sources(
            Some(ACCESS_KEY_PLACEHOLDER),
            Some(ACCESS_KEY_PLACEHOLDER.to_string()),
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_everywhere() {
        assert!(RelayConfig::from_sources(None, None).is_err());
    }
}
