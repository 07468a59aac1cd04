//! Site Routes
//!
//! Serves the single-page app's entry document for every routed page so
//! deep links such as `/dashboard` load the client router.

use axum::{extract::State, response::Html};
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET / | /dashboard | /developer
pub async fn app_shell(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let index = state.index_path();

    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Ok(Html(html)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(ApiError::ServiceUnavailable(
            format!("UI bundle not built: {} is missing", index.display()),
        )),
        Err(e) => Err(ApiError::Io(e)),
    }
}
