//! Application state shared across request handlers.

use crate::api::error::ApiError;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Shared application state.
///
/// Owns the single SQLite connection. Storage work is serialized through the
/// mutex and runs on tokio's blocking pool.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    conn: Mutex<Connection>,
}

impl AppState {
    /// Wraps a migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                conn: Mutex::new(conn),
            }),
        }
    }

    /// Runs `work` with exclusive access to the connection.
    pub async fn with_conn<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut Connection) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || -> Result<T, ApiError> {
            let mut conn = inner
                .conn
                .lock()
                .map_err(|_| ApiError::internal("database connection lock poisoned"))?;
            work(&mut *conn)
        })
        .await
        .map_err(|err| ApiError::internal(format!("storage task failed: {err}")))?
    }
}
