//! Point-of-sale user route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use retail_hub_core::UserId;

use super::ListResponse;
use crate::db::UserRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{CreateUserRequest, User};
use crate::services::password::hash_credentials;
use crate::state::AppState;

/// Response from creating a user.
#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub user_id: UserId,
}

/// List all users. Password hashes are never included.
///
/// GET /api/users
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<ListResponse<User>>> {
    let users = UserRepository::new(state.pool()).list().await?;
    Ok(Json(users.into()))
}

/// Create a user, storing an Argon2id hash of the password.
///
/// POST /api/users
///
/// # Errors
///
/// Returns `AppError::Validation` for invalid fields and
/// `AppError::Repository` if the username is taken.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<Json<UserCreated>> {
    let user = hash_credentials(request.validate()?).await?;
    let user_id = UserRepository::new(state.pool()).create(&user).await?;

    tracing::info!(%user_id, username = %user.username, role = %user.role, "User created");
    Ok(Json(UserCreated { user_id }))
}
