pub mod health;
pub mod page;
pub mod theme;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/theme/toggle", post(theme::handle_toggle))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::fetch::{DocumentSource, RawDocument};
    use crate::models::cv::fixtures::SAMPLE_JSON;
    use crate::pipeline::DocumentCell;
    use crate::render::page::LOAD_ERROR_MESSAGE;
    use crate::theme::{PreferenceStore, ThemeController, ThemePreference};
    use crate::{errors::AppError, state::AppState};

    use super::*;

    struct StubSource(Option<&'static str>);

    #[async_trait::async_trait]
    impl DocumentSource for StubSource {
        async fn fetch_raw(&self) -> Result<RawDocument, AppError> {
            match self.0 {
                Some(body) => Ok(RawDocument(body.to_string())),
                None => Err(AppError::FetchFailed("stub upstream: 500".to_string())),
            }
        }
    }

    struct MemoryStore(std::sync::Mutex<Option<ThemePreference>>);

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<ThemePreference>, AppError> {
            Ok(*self.0.lock().unwrap())
        }

        fn save(&self, pref: ThemePreference) -> Result<(), AppError> {
            *self.0.lock().unwrap() = Some(pref);
            Ok(())
        }
    }

    fn test_state(body: Option<&'static str>, persisted: Option<ThemePreference>) -> AppState {
        let theme = ThemeController::initialize(
            Box::new(MemoryStore(std::sync::Mutex::new(persisted))),
            false,
        )
        .unwrap();
        AppState {
            source: Arc::new(StubSource(body)),
            theme: Arc::new(theme),
            document: Arc::new(DocumentCell::new()),
            config: Config {
                cv_data_url: "http://127.0.0.1:0/info.json".to_string(),
                theme_state_path: "unused.json".into(),
                system_color_scheme: ThemePreference::Light,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_page_renders_document() {
        let app = build_router(test_state(Some(SAMPLE_JSON), None));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("Ada Quill"));
        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("window.print()"));
    }

    #[tokio::test]
    async fn test_page_shows_inline_error_when_fetch_fails() {
        let app = build_router(test_state(None, None));
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        // The page itself loads fine; the failure is an inline message.
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains(LOAD_ERROR_MESSAGE));
        assert!(html.contains(r#"id="header" class="header" style="display: none""#));
    }

    #[tokio::test]
    async fn test_toggle_redirects_and_flips_theme() {
        let state = test_state(Some(SAMPLE_JSON), Some(ThemePreference::Dark));
        let app = build_router(state.clone());

        let response = app
            .clone()
            .oneshot(Request::post("/theme/toggle").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/"
        );
        assert_eq!(state.theme.applied(), ThemePreference::Light);

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_string(response).await;
        assert!(html.contains(r#"data-theme="light""#));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = build_router(test_state(Some(SAMPLE_JSON), None));
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(r#""status":"ok""#));
    }
}
