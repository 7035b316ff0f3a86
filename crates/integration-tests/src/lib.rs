//! Integration tests for DataScout.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p datascout-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `store_seeding` - End-to-end store database seeding
//! - `demo_console` - Demo database and query pipeline execution
//!
//! Everything runs against in-memory SQLite; no server, network access, or
//! API key is required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use rand::SeedableRng;
use rand::rngs::StdRng;
use sqlx::SqlitePool;

use datascout_seeder::{create_pool, seed_demo, seed_store};

/// Open an in-memory store database seeded with `rows` rows per table.
///
/// # Panics
///
/// Panics if seeding fails; callers are tests.
pub async fn seeded_store_pool(rows: u32, seed: u64) -> SqlitePool {
    let pool = create_pool(":memory:").await.expect("pool");
    let mut rng = StdRng::seed_from_u64(seed);
    seed_store(&pool, &mut rng, rows).await.expect("seed store");
    pool
}

/// Open an in-memory demo database with its fixed three-row data set.
///
/// # Panics
///
/// Panics if seeding fails; callers are tests.
pub async fn seeded_demo_pool() -> SqlitePool {
    let pool = create_pool(":memory:").await.expect("pool");
    seed_demo(&pool).await.expect("seed demo");
    pool
}
