use facalloc_core::db::migrations::latest_version;
use facalloc_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "faculty");
    assert_table_exists(&conn, "courses");
    assert_table_exists(&conn, "allocations");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("allocation.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "allocations");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_database_in_missing_directory_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("allocation.db");

    let err = open_db(&path).unwrap_err();
    match &err {
        DbError::Open { location, .. } => assert_eq!(location, &path.display().to_string()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("failed to open database `"));
    assert!(!path.exists());
}

#[test]
fn allocation_reference_indexes_are_created() {
    let conn = open_db_in_memory().unwrap();

    for index_name in ["idx_allocations_faculty_uuid", "idx_allocations_course_uuid"] {
        let exists: i64 = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'index' AND name = ?1);",
                [index_name],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1, "index {index_name} does not exist");
    }
    assert_eq!(latest_version(), 1);
}

#[test]
fn foreign_keys_are_enforced() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO allocations (uuid, faculty_uuid, course_uuid, status)
         VALUES ('a', 'missing-faculty', 'missing-course', 'allocated');",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn allocation_status_defaults_to_pending() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO faculty (uuid, name, email) VALUES ('f', 'Ada', 'ada@uni.edu');
         INSERT INTO courses (uuid, code, name) VALUES ('c', 'CS101', 'Intro');
         INSERT INTO allocations (uuid, faculty_uuid, course_uuid) VALUES ('a', 'f', 'c');",
    )
    .unwrap();

    let status: String = conn
        .query_row("SELECT status FROM allocations WHERE uuid = 'a';", [], |row| {
            row.get(0)
        })
        .unwrap();
    let max_courses: i64 = conn
        .query_row("SELECT max_courses FROM faculty WHERE uuid = 'f';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(status, "pending");
    assert_eq!(max_courses, 3);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
