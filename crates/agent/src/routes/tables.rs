//! Demo table overview route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use datascout_seeder::db::{TableCount, table_counts};

use crate::error::Result;
use crate::state::AppState;

/// Table overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/tables.html")]
pub struct TablesPageTemplate {
    pub counts: Vec<TableCount>,
}

/// Row counts for every table in the demo database.
#[instrument(skip(state))]
pub async fn tables_page(State(state): State<AppState>) -> Result<TablesPageTemplate> {
    let counts = table_counts(state.pool()).await?;
    Ok(TablesPageTemplate { counts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_page_renders_counts() {
        let page = TablesPageTemplate {
            counts: vec![
                TableCount {
                    table: "customers".to_string(),
                    rows: 3,
                },
                TableCount {
                    table: "orders".to_string(),
                    rows: 0,
                },
            ],
        };
        let html = page.render().expect("render");
        assert!(html.contains("customers"));
        assert!(html.contains("<td>3</td>"));
    }
}
