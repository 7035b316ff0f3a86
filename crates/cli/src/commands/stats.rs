//! Show statistics about a seeded database.

use tracing::info;

use datascout_seeder::create_pool;
use datascout_seeder::db::table_counts;

/// Show per-table row counts for a database file.
///
/// # Errors
///
/// Returns an error if the database connection or the counting queries fail.
pub async fn show(database: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let pool = create_pool(database).await?;
    let counts = table_counts(&pool).await?;

    if counts.is_empty() {
        info!(database, "No tables found");
        return Ok(());
    }

    info!("Database Statistics");
    info!("===================");
    for count in &counts {
        info!("  {}: {} rows", count.table, count.rows);
    }

    Ok(())
}
