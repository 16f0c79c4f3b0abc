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

mod session;

use axum::{
    Json, Router,
    extract::{
        Query, State as AxumState,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use nodue_api::{
    AdminStatsResponse, AdvisedStudentView, ApiError, FacultyDashboardResponse,
    FacultyStudentsQuery, FeeStatusView, LoginRequest, LoginResponse, NoDueRecordView,
    StudentDashboardResponse, StudentRecordView, TokenService, UpdateFeesRequest,
    UpdateNoDueRequest, admin_stats, advisor_students, faculty_dashboard, faculty_students, login,
    student_dashboard, update_fees, update_no_due,
};
use nodue_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::session::SessionActor;

/// No-Due Server - HTTP server for the college no-due clearance tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "NODUE_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(long, env = "NODUE_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Secret used to sign bearer tokens
    #[arg(long, env = "NODUE_TOKEN_SECRET", hide_env_values = true)]
    token_secret: String,

    /// Lifetime of issued tokens, in hours
    #[arg(
        long,
        env = "NODUE_TOKEN_TTL_HOURS",
        default_value_t = 24,
        value_parser = clap::value_parser!(u32).range(1..=8760)
    )]
    token_ttl_hours: u32,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence handle, shared behind an async mutex.
    persistence: Arc<Mutex<Persistence>>,
    /// Signs and verifies bearer tokens.
    tokens: Arc<TokenService>,
}

/// Liveness response for `/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    message: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error message.
    error: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn bad_request(rejection: &impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.to_string(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: String::from("College No Due API is running"),
    })
}

/// Handler for POST `/api/auth/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, HttpError> {
    let Json(request) = body.map_err(|e| HttpError::bad_request(&e))?;
    info!(email = %request.email, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &app_state.tokens, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/dashboard/admin/stats`.
async fn handle_admin_stats(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> Result<Json<AdminStatsResponse>, HttpError> {
    info!(user_id = actor.user_id, "Handling admin_stats request");

    let mut persistence = app_state.persistence.lock().await;
    let response: AdminStatsResponse = admin_stats(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/dashboard/student`.
async fn handle_student_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> Result<Json<StudentDashboardResponse>, HttpError> {
    info!(user_id = actor.user_id, "Handling student_dashboard request");

    let mut persistence = app_state.persistence.lock().await;
    let response: StudentDashboardResponse = student_dashboard(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/dashboard/faculty`.
async fn handle_faculty_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> Result<Json<FacultyDashboardResponse>, HttpError> {
    info!(user_id = actor.user_id, "Handling faculty_dashboard request");

    let mut persistence = app_state.persistence.lock().await;
    let response: FacultyDashboardResponse = faculty_dashboard(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/dashboard/faculty/students`.
async fn handle_faculty_students(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    query: Result<Query<FacultyStudentsQuery>, QueryRejection>,
) -> Result<Json<Vec<StudentRecordView>>, HttpError> {
    let Query(query) = query.map_err(|e| HttpError::bad_request(&e))?;
    info!(
        user_id = actor.user_id,
        class_id = query.class_id,
        subject_id = query.subject_id,
        "Handling faculty_students request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<StudentRecordView> = faculty_students(&mut persistence, &actor, query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/api/dashboard/advisor/students`.
async fn handle_advisor_students(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
) -> Result<Json<Vec<AdvisedStudentView>>, HttpError> {
    info!(user_id = actor.user_id, "Handling advisor_students request");

    let mut persistence = app_state.persistence.lock().await;
    let response: Vec<AdvisedStudentView> = advisor_students(&mut persistence, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/dashboard/update-no-due`.
async fn handle_update_no_due(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    body: Result<Json<UpdateNoDueRequest>, JsonRejection>,
) -> Result<Json<NoDueRecordView>, HttpError> {
    let Json(request) = body.map_err(|e| HttpError::bad_request(&e))?;
    info!(
        user_id = actor.user_id,
        record_id = request.record_id,
        status = %request.status,
        "Handling update_no_due request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: NoDueRecordView = update_no_due(&mut persistence, &actor, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/api/dashboard/update-fees`.
async fn handle_update_fees(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    body: Result<Json<UpdateFeesRequest>, JsonRejection>,
) -> Result<Json<FeeStatusView>, HttpError> {
    let Json(request) = body.map_err(|e| HttpError::bad_request(&e))?;
    info!(
        user_id = actor.user_id,
        student_id = request.student_id,
        status = %request.status,
        "Handling update_fees request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: FeeStatusView = update_fees(&mut persistence, &actor, &request)?;
    drop(persistence);

    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    let dashboard: Router<AppState> = Router::new()
        .route("/admin/stats", get(handle_admin_stats))
        .route("/student", get(handle_student_dashboard))
        .route("/faculty", get(handle_faculty_dashboard))
        .route("/faculty/students", get(handle_faculty_students))
        .route("/advisor/students", get(handle_advisor_students))
        .route("/update-no-due", post(handle_update_no_due))
        .route("/update-fees", post(handle_update_fees));

    Router::new()
        .route("/", get(handle_health))
        .route("/api/auth/login", post(handle_login))
        .nest("/api/dashboard", dashboard)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing No-Due Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let tokens: TokenService = TokenService::new(
        args.token_secret.into_bytes(),
        time::Duration::hours(i64::from(args.token_ttl_hours)),
    );

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        tokens: Arc::new(tokens),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
