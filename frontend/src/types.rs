//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Catalog Types** - products and their categories
//! - **Form Types** - contact form input and relay answers
//! - **Error Types** - frontend error handling

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Catalog Types
// =============================================================================

/// A single catalog entry. Defined at build time and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    /// Display name
    pub name: &'static str,
    /// Pre-formatted price, e.g. "450₽/кг"
    pub price_label: &'static str,
    /// Photo URL
    pub image_url: &'static str,
    /// One-line description
    pub description: &'static str,
}

/// A named group of products ("fish", "meat").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductCategory {
    /// Stable key
    pub key: &'static str,
    /// Heading shown above the grid
    pub title: &'static str,
    pub products: &'static [Product],
}

// =============================================================================
// Form Types
// =============================================================================

/// Values of the contact form for one submission attempt.
///
/// Required fields are enforced by the browser through `required`
/// attributes; no further validation happens here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub phone: String,
    /// Optional, may be empty
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    /// Field names as they appear in the form and in the relay payload.
    pub const FIELD_NAMES: [&'static str; 4] = ["name", "phone", "email", "message"];

    /// Named fields in payload order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        let [name, phone, email, message] = Self::FIELD_NAMES;
        [
            (name, self.name.as_str()),
            (phone, self.phone.as_str()),
            (email, self.email.as_str()),
            (message, self.message.as_str()),
        ]
    }

    /// Build from a lookup of field values by name.
    pub fn from_lookup(mut value_of: impl FnMut(&str) -> String) -> Self {
        let [name, phone, email, message] = Self::FIELD_NAMES.map(|field| value_of(field));
        Self { name, phone, email, message }
    }
}

/// JSON answer of the form relay.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a single submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Relay accepted the submission; the form fields are cleared.
    Accepted,
    /// Relay answered but refused the submission.
    Rejected { message: String },
    /// Relay unreachable, too slow, or its answer was unreadable.
    TransportError { message: String },
    /// No access key is configured; nothing was sent.
    Unconfigured { message: String },
}

impl RelayOutcome {
    /// User-facing message for failed outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            RelayOutcome::Accepted => None,
            RelayOutcome::Rejected { message }
            | RelayOutcome::TransportError { message }
            | RelayOutcome::Unconfigured { message } => Some(message.as_str()),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Required configuration is missing or unusable.
    #[error("Configuration error: {0}")]
    Config(String),
    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),
    /// Response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
    /// Request did not complete in time.
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
    /// Browser API call failed.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_response_deserialization() {
        let json = r#"{"success": false, "message": "invalid key", "data": {}}"#;
        let response: RelayResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("invalid key"));

        let response: RelayResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.message, None);
    }

    #[test]
    fn test_relay_response_requires_success_flag() {
        let result: Result<RelayResponse, _> = serde_json::from_str(r#"{"message": "ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_fields_follow_form_names() {
        let input = ContactFormInput {
            name: "Иван".into(),
            phone: "+7 900".into(),
            email: String::new(),
            message: "Скумбрия".into(),
        };
        let names: Vec<_> = input.fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ContactFormInput::FIELD_NAMES);
        assert_eq!(input.fields()[2].1, "");
    }

    #[test]
    fn test_from_lookup_reads_every_field() {
        let mut asked = Vec::new();
        let input = ContactFormInput::from_lookup(|name| {
            asked.push(name.to_string());
            if name == "email" { String::new() } else { format!("{}-value", name) }
        });
        assert_eq!(asked, ContactFormInput::FIELD_NAMES);
        assert_eq!(input.name, "name-value");
        assert_eq!(input.message, "message-value");
        assert_eq!(input.email, "");
    }

    #[test]
    fn test_outcome_message() {
        assert_eq!(RelayOutcome::Accepted.message(), None);
        let rejected = RelayOutcome::Rejected { message: "nope".into() };
        assert_eq!(rejected.message(), Some("nope"));
    }
}
