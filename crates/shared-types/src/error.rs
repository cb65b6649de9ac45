use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of roster errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RosterErrorKind {
    NotFound,
    ValidationError,
    InvalidState,
    ConfigError,
}

impl fmt::Display for RosterErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterErrorKind::NotFound => write!(f, "NotFound"),
            RosterErrorKind::ValidationError => write!(f, "ValidationError"),
            RosterErrorKind::InvalidState => write!(f, "InvalidState"),
            RosterErrorKind::ConfigError => write!(f, "ConfigError"),
        }
    }
}

/// Reason a roster action or configuration was rejected.
///
/// Rejections never reach the user; they are logged and the state is
/// left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RosterError {
    pub kind: RosterErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl RosterError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: RosterErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: RosterErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation failure for a single named field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self {
            kind: RosterErrorKind::InvalidState,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: RosterErrorKind::ConfigError,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for RosterError {}

impl From<toml::de::Error> for RosterError {
    fn from(err: toml::de::Error) -> Self {
        RosterError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = RosterError::not_found("missing applicant");
        assert_eq!(err.kind, RosterErrorKind::NotFound);
        assert_eq!(err.message, "missing applicant");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn field_error_records_field_name() {
        let err = RosterError::field("document_name", "Document name is required");
        assert_eq!(err.kind, RosterErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("document_name").unwrap(),
            "Document name is required"
        );
    }

    #[test]
    fn display_includes_kind_and_message() {
        let err = RosterError::invalid_state("no upload panel is open");
        assert_eq!(err.to_string(), "InvalidState: no upload panel is open");
    }

    #[test]
    fn toml_errors_convert_to_config_kind() {
        let parse = toml::from_str::<toml::Value>("items_per_page = ").unwrap_err();
        let err: RosterError = parse.into();
        assert_eq!(err.kind, RosterErrorKind::ConfigError);
    }

    #[test]
    fn empty_field_errors_are_skipped_in_json() {
        let json = serde_json::to_string(&RosterError::not_found("x")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
