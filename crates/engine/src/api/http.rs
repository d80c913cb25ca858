//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use marquee_domain::{Screen, ScreenName, Seat};

use crate::app::App;
use crate::use_cases::management::ManagementError;

/// Largest request body accepted, sized for seat lists well past a million
/// entries.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    routes_with_body_limit(MAX_BODY_BYTES)
}

fn routes_with_body_limit(limit: usize) -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/screens", get(list_screens).post(create_screen))
        .route("/screens/seats", post(create_screen_with_seats))
        .route("/screens/{id}", get(get_screen))
        .layer(DefaultBodyLimit::max(limit))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Screens
// =============================================================================

/// Body of `POST /screens` and `POST /screens/seats`.
///
/// Any `id` the client sends is ignored; the server always assigns one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScreenRequest {
    pub screen_name: ScreenName,
    #[serde(default)]
    pub seats: Vec<Seat>,
    #[serde(default)]
    pub seat_booked: bool,
}

impl From<CreateScreenRequest> for Screen {
    fn from(request: CreateScreenRequest) -> Self {
        Screen::new(request.screen_name)
            .with_seats(request.seats)
            .with_booked(request.seat_booked)
    }
}

async fn list_screens(State(app): State<Arc<App>>) -> Result<Json<Vec<Screen>>, ApiError> {
    let screens = app.use_cases.management.screen.list().await?;
    Ok(Json(screens))
}

async fn get_screen(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Screen>, ApiError> {
    let screen = app.use_cases.management.screen.get(&id).await?;
    Ok(Json(screen))
}

async fn create_screen(
    State(app): State<Arc<App>>,
    payload: Result<Json<CreateScreenRequest>, JsonRejection>,
) -> Result<Json<Screen>, ApiError> {
    let Json(request) = payload?;
    let screen = app
        .use_cases
        .management
        .screen
        .create(request.into())
        .await?;
    Ok(Json(screen))
}

async fn create_screen_with_seats(
    State(app): State<Arc<App>>,
    payload: Result<Json<CreateScreenRequest>, JsonRejection>,
) -> Result<Json<Screen>, ApiError> {
    let Json(request) = payload?;
    let screen = app
        .use_cases
        .management
        .screen
        .create_with_seats(request.into())
        .await?;
    Ok(Json(screen))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    PayloadTooLarge(String),
    /// The store could not be reached.
    Unavailable(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::PayloadTooLarge(msg) => {
                (axum::http::StatusCode::PAYLOAD_TOO_LARGE, msg).into_response()
            }
            ApiError::Unavailable(detail) => {
                tracing::error!(error = %detail, "Storage unavailable");
                (
                    axum::http::StatusCode::SERVICE_UNAVAILABLE,
                    "Service unavailable",
                )
                    .into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<ManagementError> for ApiError {
    fn from(e: ManagementError) -> Self {
        match e {
            ManagementError::NotFound { .. } => ApiError::NotFound,
            ManagementError::InvalidInput(msg) => ApiError::BadRequest(msg),
            ManagementError::Repo(repo) if repo.is_unavailable() => {
                ApiError::Unavailable(repo.to_string())
            }
            ManagementError::Repo(repo) => ApiError::Internal(repo.to_string()),
        }
    }
}

/// A body over the size limit is 413; every other body problem (missing
/// content type, bad syntax, schema mismatch) maps to 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == axum::http::StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    }
}
