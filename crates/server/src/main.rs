// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State as AxumState, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use traitpilot_api::{
    ApiError, FINAL_SELECTION_SAVED_MESSAGE, FinalSelectionData, FinalSelectionRequest,
    SELECTIONS_SAVED_MESSAGE, SaveResponseResponse, SaveSelectionsRequest, SelectionsData,
    get_final_selection, get_selections, list_profiles, parse_body, save_response,
    save_selections, submit_final_selection,
};
use traitpilot_domain::ProfileCatalogue;
use traitpilot_persistence::{FinalSelectionStore, ResponseArchive, SelectionStore, StorePaths};

/// Status value carried by every success envelope.
const STATUS_SUCCESS: &str = "success";

/// Status value carried by every error envelope.
const STATUS_ERROR: &str = "error";

/// TraitPilot Server - HTTP backend for the personality survey
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the response archive and the selection stores.
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Path prefix the routes are additionally mounted under. Empty mounts at
    /// the root only.
    #[arg(long, default_value = "/api")]
    route_prefix: String,
}

/// Application state shared across handlers.
///
/// Each store has its own lock so a read-modify-write cycle on one file
/// never interleaves with another request touching the same file.
#[derive(Clone)]
struct AppState {
    /// The append-only submission archive.
    archive: Arc<Mutex<ResponseArchive>>,
    /// In-progress yes/maybe selections.
    selections: Arc<Mutex<SelectionStore>>,
    /// Final four-profile selections.
    final_selections: Arc<Mutex<FinalSelectionStore>>,
}

impl AppState {
    fn new(paths: StorePaths) -> Self {
        Self {
            archive: Arc::new(Mutex::new(ResponseArchive::new(paths.archive))),
            selections: Arc::new(Mutex::new(SelectionStore::new(paths.selections))),
            final_selections: Arc::new(Mutex::new(FinalSelectionStore::new(
                paths.final_selections,
            ))),
        }
    }
}

/// Query string carrying the participant id.
#[derive(Debug, Clone, Default, Deserialize)]
struct UserIdQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

/// Response for a stored submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SaveResponseApiResponse {
    /// Always `success`.
    status: String,
    /// The participant id that was recorded.
    participant_id: String,
}

/// Response carrying only a confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    /// Always `success`.
    status: String,
    /// Human-readable confirmation.
    message: String,
}

/// Response wrapping a data payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DataResponse<T> {
    /// Always `success`.
    status: String,
    /// The requested data.
    data: T,
}

impl<T> DataResponse<T> {
    fn success(data: T) -> Self {
        Self {
            status: String::from(STATUS_SUCCESS),
            data,
        }
    }
}

impl MessageResponse {
    fn success(message: &str) -> Self {
        Self {
            status: String::from(STATUS_SUCCESS),
            message: message.to_string(),
        }
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always `error`.
    status: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn method_not_allowed() -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            message: String::from("Method not allowed"),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            status: String::from(STATUS_ERROR),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(error = %rejection, "Rejected query string");
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Storage { .. } => {
                error!(error = %err, "Storage error");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: err.to_string(),
                }
            }
            ApiError::MalformedBody { .. }
            | ApiError::InvalidInput { .. }
            | ApiError::Validation { .. } => {
                warn!(error = %err, "Rejected request");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/profiles/` endpoint.
///
/// Returns the full profile catalogue keyed by id.
async fn handle_list_profiles() -> Json<ProfileCatalogue> {
    info!("Handling list_profiles request");
    Json(list_profiles())
}

/// Fallback for non-GET requests to `/profiles/`.
async fn handle_profiles_invalid_method() -> HttpError {
    HttpError {
        status: StatusCode::BAD_REQUEST,
        message: String::from("Invalid request method"),
    }
}

/// Fallback for paths no route matches.
async fn handle_not_found() -> HttpError {
    HttpError {
        status: StatusCode::NOT_FOUND,
        message: String::from("Not found"),
    }
}

/// Fallback for wrong methods on every other route.
async fn handle_method_not_allowed() -> HttpError {
    HttpError::method_not_allowed()
}

/// Handler for POST `/save-response/` endpoint.
///
/// Appends one completed assessment to the archive.
async fn handle_save_response(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponseApiResponse>, HttpError> {
    let submission: Value = parse_body(&body)?;
    let participant_id: Value = submission
        .get("participant_id")
        .cloned()
        .unwrap_or_default();
    info!(participant_id = %participant_id, "Handling save_response request");

    let archive = app_state.archive.lock().await;
    let response: SaveResponseResponse = save_response(&archive, &submission)?;
    drop(archive);

    Ok(Json(SaveResponseApiResponse {
        status: String::from(STATUS_SUCCESS),
        participant_id: response.participant_id,
    }))
}

/// Handler for POST `/selections/` endpoint.
///
/// Replaces the participant's in-progress selections.
async fn handle_save_selections(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, HttpError> {
    let request: SaveSelectionsRequest = parse_body(&body)?;
    info!(
        user_id = ?request.user_id,
        "Handling save_selections request"
    );

    let selections = app_state.selections.lock().await;
    save_selections(&selections, request)?;
    drop(selections);

    Ok(Json(MessageResponse::success(SELECTIONS_SAVED_MESSAGE)))
}

/// Handler for GET `/get-selections/` endpoint.
///
/// Returns the participant's in-progress selections.
async fn handle_get_selections(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<DataResponse<SelectionsData>>, HttpError> {
    let Query(query) = query?;
    info!(user_id = ?query.user_id, "Handling get_selections request");

    let selections = app_state.selections.lock().await;
    let data: SelectionsData = get_selections(&selections, query.user_id.as_deref())?;
    drop(selections);

    Ok(Json(DataResponse::success(data)))
}

/// Handler for POST `/final-selection/` endpoint.
///
/// Replaces the participant's final team of four.
async fn handle_submit_final_selection(
    AxumState(app_state): AxumState<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, HttpError> {
    let request: FinalSelectionRequest = parse_body(&body)?;
    info!(
        user_id = ?request.user_id,
        count = request.final_profiles.as_ref().map_or(0, Vec::len),
        "Handling submit_final_selection request"
    );

    let final_selections = app_state.final_selections.lock().await;
    submit_final_selection(&final_selections, request)?;
    drop(final_selections);

    Ok(Json(MessageResponse::success(FINAL_SELECTION_SAVED_MESSAGE)))
}

/// Handler for GET `/get-final-selection/` endpoint.
///
/// Returns the participant's final team.
async fn handle_get_final_selection(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<UserIdQuery>, QueryRejection>,
) -> Result<Json<DataResponse<FinalSelectionData>>, HttpError> {
    let Query(query) = query?;
    info!(user_id = ?query.user_id, "Handling get_final_selection request");

    let final_selections = app_state.final_selections.lock().await;
    let data: FinalSelectionData =
        get_final_selection(&final_selections, query.user_id.as_deref())?;
    drop(final_selections);

    Ok(Json(DataResponse::success(data)))
}

fn guarded(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(handle_method_not_allowed)
}

/// Builds the router with every route mounted at the root.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/profiles/",
            get(handle_list_profiles).fallback(handle_profiles_invalid_method),
        )
        .route("/save-response/", guarded(post(handle_save_response)))
        .route("/selections/", guarded(post(handle_save_selections)))
        .route("/get-selections/", guarded(get(handle_get_selections)))
        .route(
            "/final-selection/",
            guarded(post(handle_submit_final_selection)),
        )
        .route(
            "/get-final-selection/",
            guarded(get(handle_get_final_selection)),
        )
        .fallback(handle_not_found)
        .with_state(app_state)
}

/// Normalizes a route prefix to `/segment[/segment...]` form.
///
/// Returns `None` when the prefix designates the root.
fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed: &str = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}

/// Builds the application: routes at the root, plus the same routes under
/// `route_prefix` when one is given.
fn build_app(app_state: AppState, route_prefix: &str) -> Router {
    let root: Router = build_router(app_state.clone());
    match normalize_prefix(route_prefix) {
        Some(prefix) => root.nest(&prefix, build_router(app_state)),
        None => root,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing TraitPilot Server");

    let paths: StorePaths = StorePaths::in_dir(&args.data_dir);
    info!(
        archive = %paths.archive.display(),
        selections = %paths.selections.display(),
        final_selections = %paths.final_selections.display(),
        "Using data directory {}",
        args.data_dir.display()
    );

    let app_state: AppState = AppState::new(paths);

    // Build router
    let app: Router = build_app(app_state, &args.route_prefix);

    // Bind to address
    let listener = tokio::net::TcpListener::bind((args.bind.as_str(), args.port)).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Run server
    axum::serve(listener, app).await?;

    Ok(())
}
