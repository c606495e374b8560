//! HTTP route handlers for the roster API.

use std::collections::BTreeMap;
use std::path::Path as FsPath;

use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{Json, Redirect};
use axum::routing::{delete, get, post};
use roster::core::types::Activity;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::sse;
use crate::state::{AppState, RosterEvent};

/// Where `GET /` sends browsers.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Build the full application router.
///
/// Static assets are mounted under `/static` only when `static_dir` exists.
pub fn app_router(state: AppState, static_dir: &FsPath) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/events", get(sse::events_handler))
        .merge(activities_router())
        .layer(cors)
        .with_state(state);

    if static_dir.exists() {
        info!(static_dir = %static_dir.display(), "serving static files");
        app = app.nest_service("/static", ServeDir::new(static_dir));
    } else {
        warn!(static_dir = %static_dir.display(), "static directory not found, API-only mode");
    }

    app
}

/// Build the activities API router.
pub fn activities_router() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", delete(unregister))
}

async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

/// GET /activities - every activity keyed by name.
async fn list_activities(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    Json(state.registry.list_activities())
}

/// POST /activities/{activity_name}/signup?email=...
async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query.map_err(|r| ApiError::InvalidQuery(r.body_text()))?;

    let confirmation = state.registry.enroll(&activity_name, &email)?;

    let _ = state.event_tx.send(RosterEvent::Enrolled {
        activity: confirmation.activity.clone(),
        email: confirmation.email.clone(),
    });
    Ok(Json(MessageResponse {
        message: format!(
            "Signed up {} for {}",
            confirmation.email, confirmation.activity
        ),
    }))
}

/// DELETE /activities/{activity_name}/unregister?email=...
async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query.map_err(|r| ApiError::InvalidQuery(r.body_text()))?;

    let confirmation = state.registry.withdraw(&activity_name, &email)?;

    let _ = state.event_tx.send(RosterEvent::Withdrawn {
        activity: confirmation.activity.clone(),
        email: confirmation.email.clone(),
    });
    Ok(Json(MessageResponse {
        message: format!(
            "Unregistered {} from {}",
            confirmation.email, confirmation.activity
        ),
    }))
}
