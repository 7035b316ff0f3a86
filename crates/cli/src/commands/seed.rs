//! Seed databases with sample data.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use datascout_seeder::{create_pool, seed_demo, seed_store};

/// Seed the store database with generated rows.
///
/// # Arguments
///
/// * `database` - Database file to create or fill
/// * `rows` - Rows to generate per table
/// * `seed` - RNG seed; when absent each run produces different data
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeding fails.
pub async fn store(
    database: &str,
    rows: u32,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let pool = create_pool(database).await?;
    info!(database, "Connected to database");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let report = seed_store(&pool, &mut rng, rows).await?;

    info!("Seeding complete!");
    for table in &report.tables {
        info!(
            "  {}: {} inserted, {} skipped",
            table.table, table.inserted, table.skipped
        );
    }
    info!(
        "  Total: {} inserted, {} skipped",
        report.total_inserted(),
        report.total_skipped()
    );

    Ok(())
}

/// Seed the demo database with its fixed rows.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or seeding fails.
pub async fn demo(database: &str) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let pool = create_pool(database).await?;
    info!(database, "Connected to database");

    let report = seed_demo(&pool).await?;

    info!("Seeding complete!");
    for table in &report.tables {
        info!(
            "  {}: {} inserted, {} skipped",
            table.table, table.inserted, table.skipped
        );
    }

    Ok(())
}
