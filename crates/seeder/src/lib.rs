//! DataScout Seeder - Schema creation and sample-data population.
//!
//! Two unrelated SQLite databases are covered:
//!
//! - The **store** database: eight retail tables (customers, categories,
//!   products, orders, order details, payments, shippers, reviews) filled with
//!   a configurable number of pseudo-random rows.
//! - The **demo** database: a three-table toy schema with a fixed three-row
//!   data set, queried by the agent console.
//!
//! # Referential integrity
//!
//! Foreign-key columns are populated by drawing an integer from the valid id
//! range of the referenced table, with no existence check, and the SQLite
//! `foreign_keys` pragma is disabled on every connection. See
//! [`datascout_core::WeakRef`].
//!
//! # Conflict policy
//!
//! All inserts use `INSERT OR IGNORE`: rows violating a uniqueness constraint
//! are skipped silently instead of failing the batch. Re-running the seeder
//! never errors, but tables without unique columns accumulate duplicate
//! logical entities with new surrogate keys.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod db;
pub mod generate;
pub mod schema;
pub mod seed;

pub use db::create_pool;
pub use seed::{SeedError, SeedReport, seed_demo, seed_store};
