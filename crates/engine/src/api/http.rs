//! HTTP routes.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use osrelay_domain::ValidationError;
use osrelay_shared::{ErrorBody, GainsQuery, HiscoreQuery};

use crate::app::App;
use crate::infrastructure::ports::{RelayBody, RelayError};
use crate::use_cases::LookupError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/hiscores", get(get_hiscores))
        .route("/templeosrs", get(get_gains))
        .route("/catfacts", get(get_fact))
}

async fn health() -> &'static str {
    "OK"
}

async fn get_hiscores(
    State(app): State<Arc<App>>,
    query: Result<Query<HiscoreQuery>, QueryRejection>,
) -> Result<RelayBody, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::rejected_query(&e, Endpoint::Hiscores))?;
    app.use_cases
        .hiscores
        .execute(query.player.as_deref())
        .await
        .map_err(|e| ApiError::lookup(e, Endpoint::Hiscores))
}

async fn get_gains(
    State(app): State<Arc<App>>,
    query: Result<Query<GainsQuery>, QueryRejection>,
) -> Result<RelayBody, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::rejected_query(&e, Endpoint::Gains))?;
    app.use_cases
        .gains
        .execute(query.player.as_deref(), query.time.as_deref())
        .await
        .map_err(|e| ApiError::lookup(e, Endpoint::Gains))
}

async fn get_fact(State(app): State<Arc<App>>) -> Result<RelayBody, ApiError> {
    app.use_cases
        .facts
        .execute()
        .await
        .map_err(|e| ApiError::lookup(e.into(), Endpoint::Facts))
}

/// Upstream bytes go out as received.
impl IntoResponse for RelayBody {
    fn into_response(self) -> Response {
        (
            [(header::CONTENT_TYPE, "application/json")],
            self.into_string(),
        )
            .into_response()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Relay endpoints, for choosing the generic failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Hiscores,
    Gains,
    Facts,
}

impl Endpoint {
    fn path(self) -> &'static str {
        match self {
            Self::Hiscores => "/hiscores",
            Self::Gains => "/templeosrs",
            Self::Facts => "/catfacts",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::Hiscores => "Could not get hiscore data",
            Self::Gains => "Could not get player gains",
            Self::Facts => "Failed to fetch cat fact",
        }
    }
}

/// Status code for each error kind. Shared by every endpoint.
pub fn status_for(err: &LookupError) -> StatusCode {
    match err {
        LookupError::Validation(_) => StatusCode::BAD_REQUEST,
        LookupError::Relay(RelayError::NotFound) => StatusCode::NOT_FOUND,
        LookupError::Relay(
            RelayError::Upstream(_) | RelayError::Transport(_) | RelayError::InvalidData(_),
        ) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn lookup(err: LookupError, endpoint: Endpoint) -> Self {
        let status = status_for(&err);
        let body = match &err {
            LookupError::Validation(v) => ErrorBody::validation(*v),
            LookupError::Relay(RelayError::NotFound) => ErrorBody::new(err.to_string()),
            LookupError::Relay(_) => ErrorBody::new(endpoint.failure_message()),
        };

        if status.is_server_error() {
            tracing::error!(endpoint = endpoint.path(), error = %err, "Relay request failed");
        }

        Self { status, body }
    }

    /// A query string axum could not deserialize. Answered like any other
    /// validation failure so clients always get a JSON body.
    pub fn rejected_query(rejection: &QueryRejection, endpoint: Endpoint) -> Self {
        tracing::debug!(
            endpoint = endpoint.path(),
            reason = %rejection.body_text(),
            "Rejected query string"
        );
        Self::lookup(ValidationError::MalformedQuery.into(), endpoint)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
