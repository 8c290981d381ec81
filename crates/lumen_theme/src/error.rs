//! Theme error types

use crate::control::ValueKind;
use thiserror::Error;

/// Errors raised while reading a theme configuration
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The TOML source could not be parsed
    #[error("Failed to parse theme configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color '{value}' (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor { value: String },

    /// No component kind with this name
    #[error("Unknown control '{0}'")]
    UnknownControl(String),

    /// No token with this name in the given scope
    #[error("Unknown token '{token}' in {scope}")]
    UnknownToken { scope: String, token: String },

    /// The value's shape does not match the token's kind
    #[error("Invalid value for {scope}.{token}: expected {expected}")]
    InvalidValue {
        scope: String,
        token: String,
        expected: &'static str,
    },
}

impl ThemeError {
    pub(crate) fn invalid_value(scope: &str, token: &str, expected: ValueKind) -> Self {
        Self::InvalidValue {
            scope: scope.to_string(),
            token: token.to_string(),
            expected: expected.name(),
        }
    }
}
