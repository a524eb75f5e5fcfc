use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, MessageResponse, PublicUser, SignupRequest},
        error::AuthError,
        extractors::AuthUser,
        services,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", get(logout))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

/// Parses the raw body as JSON. Content-Type is not checked.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AuthError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "rejected request body");
        AuthError::InvalidRequest
    })
}

#[instrument(skip(state, body))]
pub async fn signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), AuthError> {
    let req: SignupRequest = parse_body(&body)?;
    services::signup(state.users.as_ref(), req).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Signup successful! Please log in.")),
    ))
}

#[instrument(skip(state, body))]
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AuthError> {
    let req: LoginRequest = parse_body(&body)?;
    let (_, token) = services::login(state.users.as_ref(), &state.keys, req).await?;

    Ok((
        [(header::SET_COOKIE, services::session_cookie(&token))],
        Json(LoginResponse {
            message: "Login successful!".into(),
            token,
        }),
    ))
}

/// Only asks the client to drop its cookie. Tokens already issued stay
/// valid until they expire.
#[instrument]
pub async fn logout() -> impl IntoResponse {
    info!("logout");
    (
        [(header::SET_COOKIE, services::cleared_session_cookie())],
        Json(MessageResponse::new("Logged out successfully!")),
    )
}

#[instrument(skip_all)]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<PublicUser>, AuthError> {
    let user = state
        .users
        .find_by_id(claims.id)
        .await?
        .ok_or_else(|| {
            warn!(user_id = %claims.id, "token for missing user");
            AuthError::Unauthorized("User not found")
        })?;
    Ok(Json(user.into()))
}
