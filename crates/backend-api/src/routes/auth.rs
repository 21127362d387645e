use axum::{extract::State, http::StatusCode, Json};
use marketplace_auth::SignedToken;
use marketplace_database::User;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    routes::models::{LoginRequest, RegisterRequest},
    ApiError, AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

impl AuthResponse {
    pub fn new(token: SignedToken, user: User) -> Self {
        Self {
            token: token.token,
            user: user.into(),
        }
    }
}

/// Public view of an account. The password hash stays behind.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
}

impl From<User> for UserSummary {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            location: value.location,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created and token issued", body = AuthResponse),
        (status = 400, description = "Email already registered", body = crate::error::ErrorResponse),
        (status = 500, description = "Registration failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (user, token) = state
        .authenticator()
        .register(&req.name, &req.email, &req.password, &req.location)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::new(token, user))))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted and token issued", body = AuthResponse),
        (status = 400, description = "Invalid email or password", body = crate::error::ErrorResponse),
        (status = 500, description = "Login failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (user, token) = state.authenticator().login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse::new(token, user)))
}
