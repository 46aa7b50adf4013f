//! Idempotent schema creation.
//!
//! Each service owns exactly one table in its own database file. There is no
//! version tracking: the DDL uses `CREATE TABLE IF NOT EXISTS` and is safe to
//! run on every startup.

use mg_core::{Error, Result};
use rusqlite::Connection;

use crate::entity;
use crate::models::Person;

/// Cats table, written with raw SQL to match the raw-statement queries in
/// [`crate::queries::cats`].
const CATS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cats (
    "id"   INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    "name" TEXT,
    "type" TEXT
);
"#;

/// The set of tables a service needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// The `cats` table.
    Cats,
    /// The entity-mapped `people` table.
    People,
    /// No tables.
    Empty,
}

/// Create the tables `schema` needs if they are absent.
pub fn run_migrations(conn: &Connection, schema: Schema) -> Result<()> {
    match schema {
        Schema::Cats => conn.execute_batch(CATS_TABLE).map_err(Error::database)?,
        Schema::People => entity::auto_migrate::<Person>(conn)?,
        Schema::Empty => return Ok(()),
    }
    tracing::debug!(?schema, "Schema ensured");
    Ok(())
}
