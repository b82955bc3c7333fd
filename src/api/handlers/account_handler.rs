//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_LOGGED_IN, MSG_REGISTERED};
use crate::domain::UserResponse;
use crate::errors::AppResult;
use crate::types::{cast, MessageResponse};

/// User registration request
///
/// Scalar values are taken as text; only absent, null or empty fields fail.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[serde(default, deserialize_with = "cast::text")]
    #[validate(
        required(message = "Please provide all fields."),
        length(min = 1, message = "Please provide all fields.")
    )]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// User email address
    #[serde(default, deserialize_with = "cast::text")]
    #[validate(
        required(message = "Please provide all fields."),
        length(min = 1, message = "Please provide all fields.")
    )]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// User password
    #[serde(default, deserialize_with = "cast::text")]
    #[validate(
        required(message = "Please provide all fields."),
        length(min = 1, message = "Please provide all fields.")
    )]
    #[schema(example = "correct horse")]
    pub password: Option<String>,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[serde(default, deserialize_with = "cast::text")]
    #[validate(
        required(message = "Please provide both email and password."),
        length(min = 1, message = "Please provide both email and password.")
    )]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// User password
    #[serde(default, deserialize_with = "cast::text")]
    #[validate(
        required(message = "Please provide both email and password."),
        length(min = 1, message = "Please provide both email and password.")
    )]
    #[schema(example = "correct horse")]
    pub password: Option<String>,
}

/// Successful login
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful!")]
    pub message: String,
    pub user: UserResponse,
}

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Accounts",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Missing fields or email already registered"),
        (status = 500, description = "Store error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .account_service
        .register(
            payload.name.unwrap_or_default(),
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(MSG_REGISTERED))))
}

/// Check credentials
#[utoipa::path(
    post,
    path = "/login",
    tag = "Accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing fields or invalid credentials"),
        (status = 404, description = "No user with that email"),
        (status = 500, description = "Store error")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .account_service
        .login(
            payload.email.unwrap_or_default(),
            payload.password.unwrap_or_default(),
        )
        .await?;

    Ok(Json(LoginResponse {
        message: MSG_LOGGED_IN.to_string(),
        user: UserResponse::from(user),
    }))
}
