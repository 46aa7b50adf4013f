//! Application context shared by the storage-backed services.

use mg_db::pool::DbPool;

/// State handed to every cats/people handler via Axum state.
///
/// Cloning is cheap: the pool is reference counted internally.
#[derive(Clone)]
pub struct AppContext {
    /// Database connection pool, opened once at startup.
    pub db: DbPool,
}

impl AppContext {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}
