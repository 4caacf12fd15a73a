use axum::{
    extract::{Path, State},
    Json,
};

use models::user::User;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Create a user from the request body; the identifier comes from the body.
pub async fn create_user(
    State(state): State<ServerState>,
    Json(user): Json<User>,
) -> Json<User> {
    Json(state.users.create_user(user).await)
}

/// Fetch a user by id; 404 when absent.
pub async fn get_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    match state.users.get_user(&id).await {
        Some(user) => Ok(Json(user)),
        None => Err(ApiError::not_found("user")),
    }
}

/// Replace the record at `id`; the path id wins over the body id.
pub async fn update_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(user): Json<User>,
) -> Json<User> {
    Json(state.users.update_user(&id, user).await)
}
