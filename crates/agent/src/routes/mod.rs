//! HTTP route handlers for the query console.
//!
//! # Route Structure
//!
//! ```text
//! GET  /         - Query console page
//! POST /query    - Translate a question and run the generated SQL
//! GET  /tables   - Row counts for the demo tables
//! ```

pub mod console;
pub mod tables;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the console router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(console::console_page))
        .route("/query", post(console::run_query))
        .route("/tables", get(tables::tables_page))
}
