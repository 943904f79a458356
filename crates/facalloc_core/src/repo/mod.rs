//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - List paths return rows in insertion order (`rowid ASC`).

pub mod allocation_repo;
pub mod course_repo;
pub mod error;
pub mod faculty_repo;
