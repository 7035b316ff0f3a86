//! Verbatim SQL execution against the demo database.
//!
//! The string returned by the translation call is executed exactly as
//! received. Statements are not inspected, so a generated `DROP TABLE` runs
//! without confirmation; that looseness is part of the pipeline's observable
//! behavior and is deliberately not tightened here.
//!
//! TODO: statement allow-listing for generated SQL is tracked as technical
//! debt; adding it changes what the console will execute and needs its own
//! decision.

use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};
use tracing::instrument;

/// Result of executing one statement: column names and stringified rows.
///
/// Statements that return no rows (DDL, inserts) produce an outcome with no
/// columns and no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Column names, in select order. Empty when no rows came back.
    pub columns: Vec<String>,
    /// Every value rendered for display.
    pub rows: Vec<Vec<String>>,
}

impl QueryOutcome {
    /// Whether the statement produced any rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Execute `sql` against the demo database and render every value.
///
/// # Errors
///
/// Returns `sqlx::Error` for any execution failure (syntax errors included);
/// the caller displays the error text instead of propagating it.
#[instrument(skip(pool, sql))]
pub async fn run_statement(pool: &SqlitePool, sql: &str) -> Result<QueryOutcome, sqlx::Error> {
    let rows = sqlx::query(sql).fetch_all(pool).await?;

    let columns = rows.first().map_or_else(Vec::new, |row| {
        row.columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    });

    let rows = rows
        .iter()
        .map(render_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QueryOutcome { columns, rows })
}

fn render_row(row: &SqliteRow) -> Result<Vec<String>, sqlx::Error> {
    (0..row.len()).map(|i| render_value(row, i)).collect()
}

/// Render one column of one row as display text, by declared SQLite type.
fn render_value(row: &SqliteRow, index: usize) -> Result<String, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok("NULL".to_string());
    }

    let type_name = raw.type_info().name().to_string();
    match type_name.as_str() {
        "INTEGER" | "BOOLEAN" => Ok(row.try_get::<i64, _>(index)?.to_string()),
        "REAL" => Ok(row.try_get::<f64, _>(index)?.to_string()),
        "BLOB" => {
            let bytes: Vec<u8> = row.try_get(index)?;
            Ok(format!("<blob: {} bytes>", bytes.len()))
        }
        _ => row.try_get(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datascout_seeder::{create_pool, seed_demo};

    async fn demo_pool() -> SqlitePool {
        let pool = create_pool(":memory:").await.expect("pool");
        seed_demo(&pool).await.expect("seed");
        pool
    }

    #[tokio::test]
    async fn test_select_returns_columns_and_rows() {
        let pool = demo_pool().await;
        let outcome = run_statement(&pool, "SELECT name, email FROM customers ORDER BY customer_id")
            .await
            .expect("select");

        assert_eq!(outcome.columns, vec!["name", "email"]);
        assert_eq!(outcome.rows.len(), 3);
        assert_eq!(outcome.rows[0], vec!["Alice", "alice@example.com"]);
    }

    #[tokio::test]
    async fn test_value_rendering_by_type() {
        let pool = demo_pool().await;
        let outcome = run_statement(
            &pool,
            "SELECT product_name, price, stock_quantity, NULL AS missing \
             FROM products WHERE product_id = 1",
        )
        .await
        .expect("select");

        assert_eq!(
            outcome.rows[0],
            vec!["Laptop", "1200.5", "10", "NULL"]
        );
    }

    #[tokio::test]
    async fn test_malformed_sql_is_an_error_not_a_panic() {
        let pool = demo_pool().await;
        let result = run_statement(&pool, "SELEKT * FROM customers").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_error_text_from_upstream_fails_like_malformed_sql() {
        // A translation failure hands its message to the caller, which may
        // still display it next to an execution error, never a crash.
        let pool = demo_pool().await;
        let result = run_statement(&pool, "Error code: 429 - insufficient_quota").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_non_select_statement_returns_empty_outcome() {
        let pool = demo_pool().await;
        let outcome = run_statement(&pool, "DROP TABLE orders")
            .await
            .expect("destructive statements execute without confirmation");
        assert!(outcome.is_empty());
        assert!(outcome.columns.is_empty());

        let result = run_statement(&pool, "SELECT * FROM orders").await;
        assert!(result.is_err(), "table is really gone");
    }
}
