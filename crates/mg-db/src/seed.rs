//! Example data for the people service.

use mg_core::{Error, Result};
use rusqlite::Connection;

use crate::entity;
use crate::models::{NewPerson, Person};

/// Rows inserted into an empty `people` table, as `(name, nick)`.
pub const SEED_PEOPLE: [(&str, &str); 3] = [
    ("Ivan Petrov", "vanya"),
    ("Maria Sidorova", "masha"),
    ("Alexei Smirnov", "lyosha"),
];

/// Insert [`SEED_PEOPLE`] if the table is empty.
///
/// Runs in a single transaction so a crash mid-seed leaves the table empty
/// and the next startup seeds again. Returns the number of inserted rows.
pub fn seed_people(conn: &mut Connection) -> Result<usize> {
    let tx = conn.transaction().map_err(Error::database)?;

    let existing = entity::count::<Person>(&tx)?;
    if existing > 0 {
        tracing::debug!(existing, "People table not empty; skipping seed");
        return Ok(0);
    }

    for (name, nick) in SEED_PEOPLE {
        entity::create::<Person>(&tx, &NewPerson::new(name, nick))?;
    }
    tx.commit().map_err(Error::database)?;

    tracing::info!(count = SEED_PEOPLE.len(), "Seeded people table");
    Ok(SEED_PEOPLE.len())
}
