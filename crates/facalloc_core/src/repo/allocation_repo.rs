//! Storage boundary consumed by the allocation pass.
//!
//! # Responsibility
//! - Read the ordered faculty and course collections.
//! - Persist one pass worth of allocation records atomically.
//!
//! # Invariants
//! - `create_allocations` writes every draft or none of them.
//! - Nothing here updates `faculty.workload`.

use crate::model::allocation::{Allocation, AllocationDraft, AllocationStatus};
use crate::model::course::Course;
use crate::model::faculty::Faculty;
use crate::repo::course_repo::{CourseRepository, SqliteCourseRepository};
use crate::repo::error::{parse_uuid, RepoError, RepoResult};
use crate::repo::faculty_repo::{FacultyRepository, SqliteFacultyRepository};
use rusqlite::{params, Connection, Row, TransactionBehavior};

/// Repository interface used by the allocation service.
pub trait AllocationRepository {
    /// Lists all faculty in insertion order.
    fn list_faculty(&self) -> RepoResult<Vec<Faculty>>;
    /// Lists all courses in insertion order.
    fn list_courses(&self) -> RepoResult<Vec<Course>>;
    /// Creates one record per draft and commits them in one transaction.
    fn create_allocations(&mut self, drafts: &[AllocationDraft]) -> RepoResult<Vec<Allocation>>;
    /// Lists persisted allocations in insertion order.
    fn list_allocations(&self) -> RepoResult<Vec<Allocation>>;
}

/// SQLite-backed allocation repository.
pub struct SqliteAllocationRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteAllocationRepository<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }
}

impl AllocationRepository for SqliteAllocationRepository<'_> {
    fn list_faculty(&self) -> RepoResult<Vec<Faculty>> {
        SqliteFacultyRepository::new(&*self.conn).list_faculty()
    }

    fn list_courses(&self) -> RepoResult<Vec<Course>> {
        SqliteCourseRepository::new(&*self.conn).list_courses()
    }

    fn create_allocations(&mut self, drafts: &[AllocationDraft]) -> RepoResult<Vec<Allocation>> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut created = Vec::with_capacity(drafts.len());

        {
            let mut stmt = tx.prepare(
                "INSERT INTO allocations (
                    uuid,
                    faculty_uuid,
                    course_uuid,
                    status,
                    created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5);",
            )?;

            for draft in drafts {
                let allocation = Allocation::from_draft(draft);
                stmt.execute(params![
                    allocation.id.to_string(),
                    allocation.faculty_id.to_string(),
                    allocation.course_id.to_string(),
                    allocation.status.as_str(),
                    allocation.created_at,
                ])?;
                created.push(allocation);
            }
        }

        tx.commit()?;
        Ok(created)
    }

    fn list_allocations(&self) -> RepoResult<Vec<Allocation>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                uuid,
                faculty_uuid,
                course_uuid,
                status,
                created_at
             FROM allocations
             ORDER BY rowid ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut allocations = Vec::new();

        while let Some(row) = rows.next()? {
            allocations.push(parse_allocation_row(row)?);
        }

        Ok(allocations)
    }
}

fn parse_allocation_row(row: &Row<'_>) -> RepoResult<Allocation> {
    let uuid_text: String = row.get("uuid")?;
    let faculty_text: String = row.get("faculty_uuid")?;
    let course_text: String = row.get("course_uuid")?;
    let status_text: String = row.get("status")?;
    let status = AllocationStatus::parse(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid allocation status `{status_text}` in allocations.status"
        ))
    })?;

    Ok(Allocation {
        id: parse_uuid(&uuid_text, "allocations.uuid")?,
        faculty_id: parse_uuid(&faculty_text, "allocations.faculty_uuid")?,
        course_id: parse_uuid(&course_text, "allocations.course_uuid")?,
        status,
        created_at: row.get("created_at")?,
    })
}
