//! Minimal entity-mapping layer.
//!
//! A type implementing [`Entity`] describes its table once (name, columns,
//! DDL, row mapping) and gets generic persistence for free:
//! [`auto_migrate`], [`find_all`], [`create`] and [`count`]. Every entity
//! table has an integer `id` primary key assigned by SQLite; `COLUMNS` lists
//! the remaining columns in the order `from_row` reads them after `id`.

use mg_core::{Error, Result};
use rusqlite::types::ToSql;
use rusqlite::Connection;

/// A struct mapped onto a single table.
pub trait Entity: Sized {
    /// Values needed to insert a new row (everything except `id`).
    type Draft;

    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    const CREATE_TABLE: &'static str;

    /// Build the entity from a row selected as `id, COLUMNS...`.
    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self>;

    /// Values for `COLUMNS`, in the same order.
    fn values(draft: &Self::Draft) -> Vec<&dyn ToSql>;
}

fn select_sql<E: Entity>() -> String {
    format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
}

/// Create the entity's table if it does not exist.
pub fn auto_migrate<E: Entity>(conn: &Connection) -> Result<()> {
    conn.execute_batch(E::CREATE_TABLE)
        .map_err(Error::database)
}

/// Load every row of the entity's table, ordered by id.
pub fn find_all<E: Entity>(conn: &Connection) -> Result<Vec<E>> {
    let sql = format!("{} ORDER BY id", select_sql::<E>());
    let mut stmt = conn.prepare(&sql).map_err(Error::statement)?;
    let rows = stmt
        .query_map([], E::from_row)
        .map_err(Error::database)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::row_decode)?;
    Ok(rows)
}

/// Insert a new row and return it as stored, including its assigned id.
pub fn create<E: Entity>(conn: &Connection, draft: &E::Draft) -> Result<E> {
    let placeholders = (1..=E::COLUMNS.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        E::TABLE,
        E::COLUMNS.join(", ")
    );

    let values = E::values(draft);
    conn.prepare(&sql)
        .map_err(Error::statement)?
        .execute(values.as_slice())
        .map_err(Error::database)?;

    let id = conn.last_insert_rowid();
    conn.query_row(
        &format!("{} WHERE id = ?1", select_sql::<E>()),
        [id],
        E::from_row,
    )
    .map_err(Error::row_decode)
}

/// Count the rows in the entity's table.
pub fn count<E: Entity>(conn: &Connection) -> Result<i64> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", E::TABLE), [], |row| {
        row.get(0)
    })
    .map_err(Error::database)
}
