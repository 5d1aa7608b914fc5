use axum::{extract::State, response::Redirect};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// POST /theme/toggle
///
/// The page's toggle control posts here; the new preference is applied and
/// persisted, then the client is sent back to the page.
pub async fn handle_toggle(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let applied = state.theme.toggle()?;
    info!("theme toggled to {}", applied.as_str());
    Ok(Redirect::to("/"))
}
