//! Rust structs mapping to database tables.
//!
//! Each model implements `from_row` for constructing itself from a
//! `rusqlite::Row` whose columns are selected in declaration order.

use rusqlite::types::ToSql;

use crate::entity::Entity;

// ---------------------------------------------------------------------------
// Cat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    pub id: i64,
    pub name: String,
    /// Stored in the `type` column.
    pub kind: String,
}

impl Cat {
    /// Both text columns are nullable; NULL reads back as an empty string.
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            kind: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub nick: String,
}

/// A person that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub nick: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nick: nick.into(),
        }
    }
}

impl Entity for Person {
    type Draft = NewPerson;

    const TABLE: &'static str = "people";
    const COLUMNS: &'static [&'static str] = &["name", "nick"];
    const CREATE_TABLE: &'static str = "CREATE TABLE IF NOT EXISTS people (
        id   INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL DEFAULT '',
        nick TEXT NOT NULL DEFAULT ''
    )";

    fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            nick: row.get(2)?,
        })
    }

    fn values(draft: &NewPerson) -> Vec<&dyn ToSql> {
        vec![&draft.name, &draft.nick]
    }
}
