//! Course repository contract and SQLite implementation.
//!
//! # Invariants
//! - Writes call `Course::validate()` before SQL mutations.
//! - Duplicate codes surface as `RepoError::Conflict`.

use crate::model::course::{Course, CourseId};
use crate::repo::error::{map_unique_violation, parse_uuid, RepoResult};
use rusqlite::{params, Connection, Row};

const COURSE_SELECT_SQL: &str = "SELECT
    uuid,
    code,
    name,
    credits,
    required_expertise,
    created_at
FROM courses";

/// Repository interface for course records.
pub trait CourseRepository {
    fn create_course(&self, course: &Course) -> RepoResult<CourseId>;
    fn get_course(&self, id: CourseId) -> RepoResult<Option<Course>>;
    /// Lists all courses in insertion order.
    fn list_courses(&self) -> RepoResult<Vec<Course>>;
}

/// SQLite-backed course repository.
pub struct SqliteCourseRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCourseRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CourseRepository for SqliteCourseRepository<'_> {
    fn create_course(&self, course: &Course) -> RepoResult<CourseId> {
        course.validate()?;

        self.conn
            .execute(
                "INSERT INTO courses (
                    uuid,
                    code,
                    name,
                    credits,
                    required_expertise,
                    created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    course.id.to_string(),
                    course.code.as_str(),
                    course.name.as_str(),
                    course.credits,
                    course.required_expertise.as_str(),
                    course.created_at,
                ],
            )
            .map_err(|err| {
                map_unique_violation(err, || format!("course code already exists: {}", course.code))
            })?;

        Ok(course.id)
    }

    fn get_course(&self, id: CourseId) -> RepoResult<Option<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_course_row(row)?));
        }

        Ok(None)
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{COURSE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut courses = Vec::new();

        while let Some(row) = rows.next()? {
            courses.push(parse_course_row(row)?);
        }

        Ok(courses)
    }
}

fn parse_course_row(row: &Row<'_>) -> RepoResult<Course> {
    let uuid_text: String = row.get("uuid")?;
    let course = Course {
        id: parse_uuid(&uuid_text, "courses.uuid")?,
        code: row.get("code")?,
        name: row.get("name")?,
        credits: row.get("credits")?,
        required_expertise: row.get("required_expertise")?,
        created_at: row.get("created_at")?,
    };
    course.validate()?;
    Ok(course)
}
