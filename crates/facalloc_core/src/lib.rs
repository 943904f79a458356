//! Core domain logic for the faculty course allocation service.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LoggingError};
pub use model::allocation::{Allocation, AllocationDraft, AllocationId, AllocationStatus};
pub use model::course::{Course, CourseId, NewCourse, DEFAULT_CREDITS};
pub use model::faculty::{Faculty, FacultyId, NewFaculty, DEFAULT_MAX_COURSES};
pub use model::validation::ValidationError;
pub use repo::allocation_repo::{AllocationRepository, SqliteAllocationRepository};
pub use repo::course_repo::{CourseRepository, SqliteCourseRepository};
pub use repo::error::{RepoError, RepoResult};
pub use repo::faculty_repo::{FacultyRepository, SqliteFacultyRepository};
pub use service::allocation_service::{
    plan_allocations, AllocationFailure, AllocationService, AllocationStage,
};
pub use service::course_service::CourseService;
pub use service::faculty_service::FacultyService;
