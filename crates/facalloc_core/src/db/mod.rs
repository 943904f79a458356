//! Faculty allocation database: connection setup and schema versions.
//!
//! Every connection handed to repositories comes from `open_db` or
//! `open_db_in_memory`, so the `faculty`, `courses` and `allocations`
//! tables are present at the version recorded in `PRAGMA user_version`.

mod error;
pub mod migrations;
mod open;

pub use error::{DbError, DbResult};
pub use open::{open_db, open_db_in_memory};
