//! Course domain model.

use crate::model::now_epoch_ms;
use crate::model::validation::{limit_text, require_text, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a course.
pub type CourseId = Uuid;

/// Credit count applied when a create request leaves it out.
pub const DEFAULT_CREDITS: u32 = 3;

const CODE_MAX_CHARS: usize = 20;
const NAME_MAX_CHARS: usize = 100;
const REQUIRED_EXPERTISE_MAX_CHARS: usize = 255;

/// A teachable unit with a unique code and credit weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    /// Unique course code, e.g. `CS101`.
    pub code: String,
    pub name: String,
    pub credits: u32,
    /// Free-form label. Never compared against faculty expertise.
    pub required_expertise: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Create request for a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub credits: Option<u32>,
    #[serde(default)]
    pub required_expertise: Option<String>,
}

impl NewCourse {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }

    pub fn with_required_expertise(mut self, required_expertise: impl Into<String>) -> Self {
        self.required_expertise = Some(required_expertise.into());
        self
    }
}

impl Course {
    /// Builds a validated record with a fresh ID from create input.
    pub fn from_input(input: &NewCourse) -> Result<Self, ValidationError> {
        let course = Self {
            id: Uuid::new_v4(),
            code: input.code.trim().to_string(),
            name: input.name.trim().to_string(),
            credits: input.credits.unwrap_or(DEFAULT_CREDITS),
            required_expertise: input
                .required_expertise
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            created_at: now_epoch_ms(),
        };
        course.validate()?;
        Ok(course)
    }

    /// Checks field rules for this record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("code", &self.code, CODE_MAX_CHARS)?;
        require_text("name", &self.name, NAME_MAX_CHARS)?;
        limit_text(
            "required_expertise",
            &self.required_expertise,
            REQUIRED_EXPERTISE_MAX_CHARS,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Course, NewCourse, DEFAULT_CREDITS};
    use crate::model::validation::ValidationError;

    #[test]
    fn from_input_applies_default_credits() {
        let course = Course::from_input(&NewCourse::new("CS101", "Intro to CS")).unwrap();
        assert_eq!(course.credits, DEFAULT_CREDITS);
        assert_eq!(course.required_expertise, "");
    }

    #[test]
    fn from_input_rejects_long_code() {
        let err = Course::from_input(&NewCourse::new("X".repeat(21), "Too long")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "code",
                max_chars: 20
            }
        );
    }
}
