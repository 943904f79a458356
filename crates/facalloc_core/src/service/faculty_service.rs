//! Faculty use-case service.
//!
//! # Invariants
//! - New records always pass through `Faculty::from_input`, so defaults
//!   and validation are applied before the repository sees them.

use crate::model::faculty::{Faculty, FacultyId, NewFaculty};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::faculty_repo::FacultyRepository;
use log::info;

/// Use-case service wrapper for faculty records.
pub struct FacultyService<R: FacultyRepository> {
    repo: R,
}

impl<R: FacultyRepository> FacultyService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one faculty member and returns the stored record.
    pub fn create_faculty(&self, input: &NewFaculty) -> RepoResult<Faculty> {
        let faculty = Faculty::from_input(input)?;
        self.repo.create_faculty(&faculty)?;
        info!(
            "event=faculty_create module=service status=ok faculty_id={} max_courses={}",
            faculty.id, faculty.max_courses
        );
        Ok(faculty)
    }

    /// Loads one faculty member, failing with `NotFound` for unknown ids.
    pub fn get_faculty(&self, id: FacultyId) -> RepoResult<Faculty> {
        self.repo
            .get_faculty(id)?
            .ok_or(RepoError::NotFound { kind: "faculty", id })
    }

    /// Lists all faculty in insertion order.
    pub fn list_faculty(&self) -> RepoResult<Vec<Faculty>> {
        self.repo.list_faculty()
    }
}
