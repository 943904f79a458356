//! Field-level validation shared by faculty and course records.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Validation failure for a single record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is empty after trim.
    Blank { field: &'static str },
    /// Field exceeds its storage width.
    TooLong {
        field: &'static str,
        max_chars: usize,
    },
    /// Email is not shaped like `local@domain.tld`.
    InvalidEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{field} must not be blank"),
            Self::TooLong { field, max_chars } => {
                write!(f, "{field} must be at most {max_chars} characters")
            }
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    limit_text(field, value, max_chars)
}

pub(crate) fn limit_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max_chars {
        return Err(ValidationError::TooLong { field, max_chars });
    }
    Ok(())
}

pub(crate) fn require_email(value: &str, max_chars: usize) -> Result<(), ValidationError> {
    require_text("email", value, max_chars)?;
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::InvalidEmail(value.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{limit_text, require_email, require_text, ValidationError};

    #[test]
    fn require_text_rejects_whitespace_only() {
        assert_eq!(
            require_text("name", "   ", 10),
            Err(ValidationError::Blank { field: "name" })
        );
    }

    #[test]
    fn limit_text_counts_chars_not_bytes() {
        assert!(limit_text("name", "éé", 2).is_ok());
        assert_eq!(
            limit_text("name", "ééé", 2),
            Err(ValidationError::TooLong {
                field: "name",
                max_chars: 2
            })
        );
    }

    #[test]
    fn require_email_checks_shape() {
        assert!(require_email("ada@uni.edu", 100).is_ok());
        assert!(matches!(
            require_email("ada.uni.edu", 100),
            Err(ValidationError::InvalidEmail(_))
        ));
        assert!(matches!(
            require_email("ada@uni", 100),
            Err(ValidationError::InvalidEmail(_))
        ));
    }
}
