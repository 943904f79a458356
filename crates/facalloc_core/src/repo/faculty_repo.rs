//! Faculty repository contract and SQLite implementation.
//!
//! # Invariants
//! - Writes call `Faculty::validate()` before SQL mutations.
//! - Duplicate emails surface as `RepoError::Conflict`.

use crate::model::faculty::{Faculty, FacultyId};
use crate::repo::error::{map_unique_violation, parse_uuid, RepoResult};
use rusqlite::{params, Connection, Row};

const FACULTY_SELECT_SQL: &str = "SELECT
    uuid,
    name,
    email,
    expertise,
    max_courses,
    workload,
    created_at
FROM faculty";

/// Repository interface for faculty records.
pub trait FacultyRepository {
    fn create_faculty(&self, faculty: &Faculty) -> RepoResult<FacultyId>;
    fn get_faculty(&self, id: FacultyId) -> RepoResult<Option<Faculty>>;
    /// Lists all faculty in insertion order.
    fn list_faculty(&self) -> RepoResult<Vec<Faculty>>;
}

/// SQLite-backed faculty repository.
pub struct SqliteFacultyRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFacultyRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FacultyRepository for SqliteFacultyRepository<'_> {
    fn create_faculty(&self, faculty: &Faculty) -> RepoResult<FacultyId> {
        faculty.validate()?;

        self.conn
            .execute(
                "INSERT INTO faculty (
                    uuid,
                    name,
                    email,
                    expertise,
                    max_courses,
                    workload,
                    created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    faculty.id.to_string(),
                    faculty.name.as_str(),
                    faculty.email.as_str(),
                    faculty.expertise.as_str(),
                    faculty.max_courses,
                    faculty.workload,
                    faculty.created_at,
                ],
            )
            .map_err(|err| {
                map_unique_violation(err, || {
                    format!("faculty email already exists: {}", faculty.email)
                })
            })?;

        Ok(faculty.id)
    }

    fn get_faculty(&self, id: FacultyId) -> RepoResult<Option<Faculty>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FACULTY_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_faculty_row(row)?));
        }

        Ok(None)
    }

    fn list_faculty(&self) -> RepoResult<Vec<Faculty>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FACULTY_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut faculty = Vec::new();

        while let Some(row) = rows.next()? {
            faculty.push(parse_faculty_row(row)?);
        }

        Ok(faculty)
    }
}

fn parse_faculty_row(row: &Row<'_>) -> RepoResult<Faculty> {
    let uuid_text: String = row.get("uuid")?;
    let faculty = Faculty {
        id: parse_uuid(&uuid_text, "faculty.uuid")?,
        name: row.get("name")?,
        email: row.get("email")?,
        expertise: row.get("expertise")?,
        max_courses: row.get("max_courses")?,
        workload: row.get("workload")?,
        created_at: row.get("created_at")?,
    };
    faculty.validate()?;
    Ok(faculty)
}
