//! The document load pipeline.
//!
//! Fetch, parse, and render run as an explicit typed sequence with a
//! terminal outcome: `Idle → Fetching → {Rendered | Failed}`, no path back
//! to `Fetching`. The outcome is cached in a single-flight cell, so the
//! upstream document is fetched exactly once per process and concurrent
//! first requests share one flight. Assembly (revealing the containers and
//! attaching the print control) happens per request because the theme
//! attribute is request-time state.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::errors::AppError;
use crate::fetch::{DocumentSource, RawDocument};
use crate::models::cv::CvDocument;
use crate::render::{render_sections, RenderedSections};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Fetching,
    Rendered,
    Failed,
}

/// Terminal result of the fetch-parse-render prefix.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Rendered(RenderedSections),
    Failed,
}

/// Parse stage: typed deserialization is the schema boundary. Malformed
/// content fails closed here instead of reaching the renderers.
pub fn parse(raw: &RawDocument) -> Result<CvDocument, AppError> {
    Ok(serde_json::from_str(&raw.0)?)
}

async fn run_stages(source: &dyn DocumentSource) -> Result<RenderedSections, AppError> {
    let raw = source.fetch_raw().await?;
    let doc = parse(&raw)?;
    Ok(render_sections(&doc))
}

/// Runs the pipeline once and folds every failure into the single terminal
/// `Failed` outcome, matching the page's one user-visible error path.
pub async fn load(source: &dyn DocumentSource) -> LoadOutcome {
    info!("cv document load started");
    match run_stages(source).await {
        Ok(sections) => {
            info!("cv document rendered");
            LoadOutcome::Rendered(sections)
        }
        Err(e) => {
            error!("cv document load failed: {e}");
            LoadOutcome::Failed
        }
    }
}

/// Single-flight holder for the terminal outcome.
pub struct DocumentCell {
    cell: OnceCell<LoadOutcome>,
    fetching: AtomicBool,
}

impl DocumentCell {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
            fetching: AtomicBool::new(false),
        }
    }

    /// Observed position in the load state machine.
    pub fn state(&self) -> LoadState {
        match self.cell.get() {
            Some(LoadOutcome::Rendered(_)) => LoadState::Rendered,
            Some(LoadOutcome::Failed) => LoadState::Failed,
            None if self.fetching.load(Ordering::Acquire) => LoadState::Fetching,
            None => LoadState::Idle,
        }
    }

    /// First caller triggers the load; everyone else awaits the same flight
    /// and all later callers get the cached terminal outcome.
    pub async fn get_or_load(&self, source: &dyn DocumentSource) -> &LoadOutcome {
        self.cell
            .get_or_init(|| async {
                self.fetching.store(true, Ordering::Release);
                let outcome = load(source).await;
                self.fetching.store(false, Ordering::Release);
                outcome
            })
            .await
    }
}

impl Default for DocumentCell {
    fn default() -> Self {
        Self::new()
    }
}
