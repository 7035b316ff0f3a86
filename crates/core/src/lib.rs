//! DataScout Core - Shared types library.
//!
//! This crate provides common types used across all DataScout components:
//! - `seeder` - Schema creation and sample-data population
//! - `agent` - NL-to-SQL web console
//! - `cli` - Command-line tools for seeding and inspection
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, ratings, and payment methods

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
