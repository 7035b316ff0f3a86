//! Query console route handlers.
//!
//! The console is a plain full-page form: the question is posted, the page
//! re-renders with the generated SQL and either a result table or the error
//! text. Failures at any stage of the pipeline are page content, never HTTP
//! errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use crate::exec::{self, QueryOutcome};
use crate::state::AppState;

/// Query form fields.
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub question: String,
}

/// Query console page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/console.html")]
pub struct ConsolePageTemplate {
    /// Question echoed back into the form.
    pub question: String,
    /// Generated SQL, shown whenever translation succeeded.
    pub sql: Option<String>,
    /// Execution result, when the generated SQL ran.
    pub outcome: Option<QueryOutcome>,
    /// Translation or execution error text, rendered in place of results.
    pub error: Option<String>,
}

impl ConsolePageTemplate {
    fn blank() -> Self {
        Self {
            question: String::new(),
            sql: None,
            outcome: None,
            error: None,
        }
    }
}

/// Query console page.
#[instrument]
pub async fn console_page() -> impl IntoResponse {
    ConsolePageTemplate::blank()
}

/// Run one question through the pipeline and re-render the console.
///
/// When translation fails the error text is shown and nothing is executed;
/// when execution fails the generated SQL is still shown above the error.
#[instrument(skip(state, form))]
pub async fn run_query(
    State(state): State<AppState>,
    Form(form): Form<QueryForm>,
) -> impl IntoResponse {
    let question = form.question.trim().to_string();

    if question.is_empty() {
        return ConsolePageTemplate::blank();
    }

    let sql = match state.openai().translate(&question).await {
        Ok(sql) => sql,
        Err(e) => {
            tracing::warn!(error = %e, "translation failed");
            return ConsolePageTemplate {
                question,
                sql: None,
                outcome: None,
                error: Some(e.to_string()),
            };
        }
    };

    match exec::run_statement(state.pool(), &sql).await {
        Ok(outcome) => ConsolePageTemplate {
            question,
            sql: Some(sql),
            outcome: Some(outcome),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "generated SQL failed to execute");
            ConsolePageTemplate {
                question,
                sql: Some(sql),
                outcome: None,
                error: Some(e.to_string()),
            }
        }
    }
}
