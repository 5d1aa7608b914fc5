use axum::{extract::State, response::Html};

use crate::pipeline::LoadOutcome;
use crate::render::page::{assemble_error_page, assemble_page};
use crate::state::AppState;

/// GET /
///
/// The first request triggers the document load; later requests reuse the
/// terminal outcome. Both outcomes are a 200: a failed load is the inline
/// error message in the page, not an HTTP error.
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    tracing::debug!("load state before request: {:?}", state.document.state());
    let outcome = state.document.get_or_load(state.source.as_ref()).await;
    let theme = state.theme.applied();
    match outcome {
        LoadOutcome::Rendered(sections) => Html(assemble_page(sections, theme)),
        LoadOutcome::Failed => Html(assemble_error_page(theme)),
    }
}
