//! Course use-case service.

use crate::model::course::{Course, CourseId, NewCourse};
use crate::repo::course_repo::CourseRepository;
use crate::repo::error::{RepoError, RepoResult};
use log::info;

/// Use-case service wrapper for course records.
pub struct CourseService<R: CourseRepository> {
    repo: R,
}

impl<R: CourseRepository> CourseService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one course and returns the stored record.
    pub fn create_course(&self, input: &NewCourse) -> RepoResult<Course> {
        let course = Course::from_input(input)?;
        self.repo.create_course(&course)?;
        info!(
            "event=course_create module=service status=ok course_id={} credits={}",
            course.id, course.credits
        );
        Ok(course)
    }

    pub fn get_course(&self, id: CourseId) -> RepoResult<Course> {
        self.repo
            .get_course(id)?
            .ok_or(RepoError::NotFound { kind: "course", id })
    }

    /// Lists all courses in insertion order.
    pub fn list_courses(&self) -> RepoResult<Vec<Course>> {
        self.repo.list_courses()
    }
}
