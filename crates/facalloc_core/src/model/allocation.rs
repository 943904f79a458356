//! Allocation domain model.
//!
//! # Invariants
//! - An allocation always references one existing faculty and one existing course.
//! - Records are only created by the allocation pass.

use crate::model::course::CourseId;
use crate::model::faculty::FacultyId;
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an allocation record.
pub type AllocationId = Uuid;

/// Lifecycle label of an allocation record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationStatus {
    /// Storage default; not produced by the current allocation pass.
    #[default]
    Pending,
    /// Assigned by an allocation pass.
    Allocated,
}

impl AllocationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Allocated => "allocated",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "allocated" => Some(Self::Allocated),
            _ => None,
        }
    }
}

/// One faculty-to-course assignment before it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationDraft {
    pub faculty_id: FacultyId,
    pub course_id: CourseId,
    pub status: AllocationStatus,
}

/// Persisted link between one faculty member and one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub id: AllocationId,
    pub faculty_id: FacultyId,
    pub course_id: CourseId,
    pub status: AllocationStatus,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Allocation {
    /// Assigns a fresh ID and creation time to a draft.
    pub fn from_draft(draft: &AllocationDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            faculty_id: draft.faculty_id,
            course_id: draft.course_id,
            status: draft.status,
            created_at: now_epoch_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AllocationStatus;

    #[test]
    fn status_defaults_to_pending() {
        assert_eq!(AllocationStatus::default(), AllocationStatus::Pending);
    }

    #[test]
    fn status_text_is_stable() {
        for status in [AllocationStatus::Pending, AllocationStatus::Allocated] {
            assert_eq!(AllocationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AllocationStatus::parse("assigned"), None);
    }
}
