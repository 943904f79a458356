//! Domain model for faculty, courses and course allocations.
//!
//! # Responsibility
//! - Define canonical records shared by repositories, services and the HTTP layer.
//! - Own field-level validation applied before every write.
//!
//! # Invariants
//! - Every record is identified by a stable v4 UUID assigned at creation.
//! - Text fields are stored trimmed.

pub mod allocation;
pub mod course;
pub mod faculty;
pub mod validation;

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time in epoch milliseconds.
///
/// Falls back to `0` when the system clock is set before the unix epoch.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
