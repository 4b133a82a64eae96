use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::dto::{CreateUserRequest, ListUsersResponse, UserResponse},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(list_users)
            .post(create_user)
            .fallback(crate::app::not_found),
    )
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<ListUsersResponse>, ApiError> {
    let users = state.users.list().await?;
    Ok(Json(ListUsersResponse {
        success: true,
        data: users,
    }))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let Json(payload) = payload.map_err(|e| {
        warn!(error = %e, "rejected create user body");
        ApiError::Validation(e.body_text())
    })?;

    let new_user = payload.validate().inspect_err(|e| {
        warn!(error = %e, "invalid create user request");
    })?;

    let user = state.users.create(new_user).await?;
    info!(user_id = user.id, email = %user.email, "user created");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            data: user,
        }),
    ))
}
