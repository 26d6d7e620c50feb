// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User endpoints: registration and listing.

use crate::error::{AppError, Result};
use crate::extract::FormOrJson;
use crate::models::User;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

/// User as the API reports it: id and username, nothing else.
#[derive(Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// List every registered user.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.db.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[derive(Deserialize)]
struct CreateUserBody {
    username: Option<String>,
}

/// Register a new user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    FormOrJson(body): FormOrJson<CreateUserBody>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let username = body
        .username
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::BadRequest("username is required".to_string()))?;

    let user = User {
        id: uuid::Uuid::new_v4().simple().to_string(),
        username: username.to_string(),
    };
    state.db.create_user(&user).await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}
