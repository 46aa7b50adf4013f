//! Cat queries, written as raw prepared statements.
//!
//! Preparation, execution and row decoding fail with distinct error
//! variants so callers can report which step went wrong.

use mg_core::{Error, Result};
use rusqlite::Connection;

use crate::models::Cat;

/// List every cat in insertion order.
pub fn list_cats(conn: &Connection) -> Result<Vec<Cat>> {
    let mut stmt = conn
        .prepare("SELECT id, name, type FROM cats ORDER BY id")
        .map_err(Error::statement)?;
    let mut rows = stmt.query([]).map_err(Error::database)?;

    let mut cats = Vec::new();
    while let Some(row) = rows.next().map_err(Error::database)? {
        cats.push(Cat::from_row(row).map_err(Error::row_decode)?);
    }
    Ok(cats)
}

/// Insert a cat and return the id SQLite assigned to it.
pub fn insert_cat(conn: &Connection, name: &str, kind: &str) -> Result<i64> {
    let mut stmt = conn
        .prepare("INSERT INTO cats(name, type) VALUES(?1, ?2)")
        .map_err(Error::statement)?;
    stmt.execute(rusqlite::params![name, kind])
        .map_err(Error::database)?;
    Ok(conn.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migrations::{run_migrations, Schema};
    use crate::pool::{get_conn, init_memory_pool};

    #[test]
    fn insert_then_list() {
        let pool = init_memory_pool(Schema::Cats).unwrap();
        let conn = get_conn(&pool).unwrap();
        assert!(list_cats(&conn).unwrap().is_empty());

        let tom = insert_cat(&conn, "Tom", "house").unwrap();
        let felix = insert_cat(&conn, "Felix", "street").unwrap();
        assert!(felix > tom);

        let cats = list_cats(&conn).unwrap();
        assert_eq!(
            cats,
            vec![
                Cat {
                    id: tom,
                    name: "Tom".into(),
                    kind: "house".into(),
                },
                Cat {
                    id: felix,
                    name: "Felix".into(),
                    kind: "street".into(),
                },
            ]
        );
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn, Schema::Cats).unwrap();

        let first = insert_cat(&conn, "Tom", "house").unwrap();
        conn.execute("DELETE FROM cats", []).unwrap();
        let second = insert_cat(&conn, "Tom", "house").unwrap();
        assert!(second > first);
    }

    #[test]
    fn missing_table_fails_at_prepare() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(matches!(
            list_cats(&conn).unwrap_err(),
            Error::Statement { .. }
        ));
        assert!(matches!(
            insert_cat(&conn, "Tom", "house").unwrap_err(),
            Error::Statement { .. }
        ));
    }

    #[test]
    fn wrongly_typed_row_is_decode_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE cats (id TEXT, name TEXT, type TEXT)")
            .unwrap();
        conn.execute("INSERT INTO cats VALUES ('not-a-number', 'Tom', 'house')", [])
            .unwrap();

        assert!(matches!(
            list_cats(&conn).unwrap_err(),
            Error::RowDecode { .. }
        ));
    }
}
