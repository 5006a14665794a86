//! Validation errors for generator input
//!
//! Error codes are stable strings; scripts match on them in JSON reports.
//! Never rename a code, only add new ones.

use serde::{Deserialize, Serialize};

/// Input validation failure
///
/// Everything except `NoCases` is recoverable in an interactive session: the
/// caller reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enum name '{0}' is invalid: it must start with an uppercase letter and contain only letters and numbers")]
    InvalidEnumName(String),

    #[error("Case name '{0}' is invalid: use uppercase letters, digits and underscores only (e.g. ACTIVE, IN_PROGRESS)")]
    InvalidCaseName(String),

    #[error("Case '{0}' is already defined")]
    DuplicateCase(String),

    #[error("Value '{value}' of case '{case}' is already used by case '{existing}'")]
    DuplicateValue {
        case: String,
        value: String,
        existing: String,
    },

    #[error("At least one case is required")]
    NoCases,

    #[error("Namespace '{0}' is invalid: use segments of letters, digits and underscores separated by '\\'")]
    InvalidNamespace(String),

    #[error("Type name must not be empty")]
    EmptyTypeName,
}

/// Stable validation error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidEnumName,
    InvalidCaseName,
    DuplicateCase,
    DuplicateValue,
    NoCases,
    InvalidNamespace,
    EmptyTypeName,
}

impl ErrorCode {
    /// Get the code as a stable string identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidEnumName => "INVALID_ENUM_NAME",
            Self::InvalidCaseName => "INVALID_CASE_NAME",
            Self::DuplicateCase => "DUPLICATE_CASE",
            Self::DuplicateValue => "DUPLICATE_VALUE",
            Self::NoCases => "NO_CASES",
            Self::InvalidNamespace => "INVALID_NAMESPACE",
            Self::EmptyTypeName => "EMPTY_TYPE_NAME",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ValidationError {
    /// Stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidEnumName(_) => ErrorCode::InvalidEnumName,
            Self::InvalidCaseName(_) => ErrorCode::InvalidCaseName,
            Self::DuplicateCase(_) => ErrorCode::DuplicateCase,
            Self::DuplicateValue { .. } => ErrorCode::DuplicateValue,
            Self::NoCases => ErrorCode::NoCases,
            Self::InvalidNamespace(_) => ErrorCode::InvalidNamespace,
            Self::EmptyTypeName => ErrorCode::EmptyTypeName,
        }
    }

    /// Whether the interactive loop may ask again
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::NoCases)
    }
}
