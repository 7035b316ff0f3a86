//! SQLite connection handling.
//!
//! Both the store and the demo database are single files opened through one
//! pooled connection. The seeder runs in a single pass over that connection
//! and commits once at the end.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a SQLite connection pool for a database file.
///
/// The file is created if missing. The pool is capped at one connection to
/// match the single-connection lifecycle of the scripts this replaces, and so
/// `:memory:` databases keep their contents across queries in tests.
///
/// The `foreign_keys` pragma is turned off: sqlx enables it by default, but
/// the generated data relies on unchecked references (see [`crate::generate`]).
///
/// # Errors
///
/// Returns `sqlx::Error` if the database file cannot be opened or created.
pub async fn create_pool(path: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// Per-table row count, as reported by [`table_counts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCount {
    /// Table name from `sqlite_master`.
    pub table: String,
    /// Number of rows currently in the table.
    pub rows: i64,
}

/// Count the rows of every user table in the database.
///
/// # Errors
///
/// Returns `sqlx::Error` if any query fails.
pub async fn table_counts(pool: &SqlitePool) -> Result<Vec<TableCount>, sqlx::Error> {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
         ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    let mut counts = Vec::with_capacity(tables.len());
    for (table,) in tables {
        // Table names come from sqlite_master, not from user input.
        let (rows,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM \"{table}\""))
            .fetch_one(pool)
            .await?;
        counts.push(TableCount { table, rows });
    }

    Ok(counts)
}
