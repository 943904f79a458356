//! Course allocation pass.
//!
//! # Responsibility
//! - Plan a greedy, first-come assignment of courses to faculty.
//! - Persist one pass worth of allocations through the repository boundary.
//!
//! # Invariants
//! - A single cursor walks the course list once, so a course is assigned at
//!   most once per pass.
//! - Faculty are filled to `max_courses` in listing order before later
//!   faculty receive anything.
//! - Expertise labels are not consulted.
//! - `faculty.workload` is left untouched.
//! - Any failure aborts the whole pass; no partial result is returned.

use crate::model::allocation::{Allocation, AllocationDraft, AllocationStatus};
use crate::model::course::Course;
use crate::model::faculty::Faculty;
use crate::repo::allocation_repo::AllocationRepository;
use crate::repo::error::{RepoError, RepoResult};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Step of the pass that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationStage {
    LoadFaculty,
    LoadCourses,
    Persist,
}

impl AllocationStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadFaculty => "load_faculty",
            Self::LoadCourses => "load_courses",
            Self::Persist => "persist",
        }
    }
}

/// The only error kind of an allocation pass.
///
/// Displays the underlying storage message verbatim.
#[derive(Debug)]
pub struct AllocationFailure {
    pub stage: AllocationStage,
    pub source: RepoError,
}

impl Display for AllocationFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl Error for AllocationFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Plans allocations for `faculty` over `courses`, both in listing order.
///
/// Produces `min(sum(max_courses), courses.len())` drafts, all with status
/// `allocated`.
pub fn plan_allocations(faculty: &[Faculty], courses: &[Course]) -> Vec<AllocationDraft> {
    let mut remaining = courses.iter();
    let mut drafts = Vec::new();

    for member in faculty {
        let capacity = usize::try_from(member.max_courses).unwrap_or(usize::MAX);
        for course in remaining.by_ref().take(capacity) {
            drafts.push(AllocationDraft {
                faculty_id: member.id,
                course_id: course.id,
                status: AllocationStatus::Allocated,
            });
        }
    }

    drafts
}

/// Use-case service running the allocation pass.
pub struct AllocationService<R: AllocationRepository> {
    repo: R,
}

impl<R: AllocationRepository> AllocationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Runs one allocation pass and returns the created records in order.
    ///
    /// # Errors
    /// - Returns `AllocationFailure` when loading or persisting fails. No
    ///   records from a failed pass are committed by the SQLite repository.
    pub fn run(&mut self) -> Result<Vec<Allocation>, AllocationFailure> {
        let started_at = Instant::now();
        info!("event=allocation_run module=service status=start");

        let result = self.run_inner();
        match &result {
            Ok(allocations) => info!(
                "event=allocation_run module=service status=ok allocated={} duration_ms={}",
                allocations.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=allocation_run module=service status=error stage={} duration_ms={} error={}",
                err.stage.as_str(),
                started_at.elapsed().as_millis(),
                err
            ),
        }
        result
    }

    /// Lists persisted allocations from all passes in insertion order.
    pub fn list_allocations(&self) -> RepoResult<Vec<Allocation>> {
        self.repo.list_allocations()
    }

    fn run_inner(&mut self) -> Result<Vec<Allocation>, AllocationFailure> {
        let faculty = self
            .repo
            .list_faculty()
            .map_err(|source| failure(AllocationStage::LoadFaculty, source))?;
        let courses = self
            .repo
            .list_courses()
            .map_err(|source| failure(AllocationStage::LoadCourses, source))?;

        let drafts = plan_allocations(&faculty, &courses);
        info!(
            "event=allocation_plan module=service status=ok faculty={} courses={} planned={}",
            faculty.len(),
            courses.len(),
            drafts.len()
        );

        self.repo
            .create_allocations(&drafts)
            .map_err(|source| failure(AllocationStage::Persist, source))
    }
}

fn failure(stage: AllocationStage, source: RepoError) -> AllocationFailure {
    AllocationFailure { stage, source }
}
