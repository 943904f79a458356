//! Faculty domain model.
//!
//! # Invariants
//! - `email` is unique across all faculty (enforced by storage).
//! - `workload` is stored but never changed by the allocation pass.

use crate::model::now_epoch_ms;
use crate::model::validation::{limit_text, require_email, require_text, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a faculty member.
pub type FacultyId = Uuid;

/// Course capacity applied when a create request leaves it out.
pub const DEFAULT_MAX_COURSES: u32 = 3;

const NAME_MAX_CHARS: usize = 100;
const EMAIL_MAX_CHARS: usize = 100;
const EXPERTISE_MAX_CHARS: usize = 255;

/// A person eligible to teach, with a course-count capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    pub id: FacultyId,
    pub name: String,
    pub email: String,
    /// Free-form label. Never compared against course requirements.
    pub expertise: String,
    /// Upper bound on courses received in one allocation pass.
    pub max_courses: u32,
    pub workload: u32,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Create request for a faculty member.
///
/// Optional fields fall back to an empty expertise label and
/// [`DEFAULT_MAX_COURSES`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewFaculty {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub max_courses: Option<u32>,
}

impl NewFaculty {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_expertise(mut self, expertise: impl Into<String>) -> Self {
        self.expertise = Some(expertise.into());
        self
    }

    pub fn with_max_courses(mut self, max_courses: u32) -> Self {
        self.max_courses = Some(max_courses);
        self
    }
}

impl Faculty {
    /// Builds a validated record with a fresh ID from create input.
    ///
    /// Text fields are trimmed and defaults applied before validation.
    pub fn from_input(input: &NewFaculty) -> Result<Self, ValidationError> {
        let faculty = Self {
            id: Uuid::new_v4(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            expertise: input
                .expertise
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            max_courses: input.max_courses.unwrap_or(DEFAULT_MAX_COURSES),
            workload: 0,
            created_at: now_epoch_ms(),
        };
        faculty.validate()?;
        Ok(faculty)
    }

    /// Checks field rules for this record.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name, NAME_MAX_CHARS)?;
        require_email(&self.email, EMAIL_MAX_CHARS)?;
        limit_text("expertise", &self.expertise, EXPERTISE_MAX_CHARS)?;
        Ok(())
    }
}
