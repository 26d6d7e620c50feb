// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise endpoints: logging an exercise and retrieving filtered logs.

use crate::error::{AppError, Result};
use crate::extract::FormOrJson;
use crate::models::Exercise;
use crate::time_utils::{format_date_string, parse_date, today_utc};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/{user_id}/exercises", post(create_exercise))
        .route("/api/users/{user_id}/logs", get(get_logs))
}

// ─── Create Exercise ─────────────────────────────────────────

#[serde_as]
#[derive(Deserialize)]
struct CreateExerciseBody {
    description: Option<String>,
    /// Minutes; form bodies always send strings, so accept both a number
    /// and a numeric string.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    duration: Option<i64>,
    /// Calendar date; absent or empty means "today".
    date: Option<String>,
}

/// Response for a logged exercise: the owning user echoed back with the
/// exercise fields, date rendered as a readable string.
#[derive(Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// Log an exercise against a user.
///
/// The user is resolved before the write; an unknown user gets a 404 and
/// nothing is persisted.
async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    FormOrJson(body): FormOrJson<CreateExerciseBody>,
) -> Result<(StatusCode, Json<ExerciseResponse>)> {
    let description = body
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("description is required".to_string()))?;

    let duration = body
        .duration
        .ok_or_else(|| AppError::BadRequest("duration is required".to_string()))?;

    let date = match body.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => parse_date(raw)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid date: {}", raw)))?,
        None => today_utc(),
    };

    let user = state
        .db
        .get_user(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let exercise = Exercise {
        id: uuid::Uuid::new_v4().simple().to_string(),
        user_id: user.id.clone(),
        description: description.to_string(),
        duration,
        date,
    };
    state.db.create_exercise(&exercise).await?;

    tracing::info!(
        user_id = %user.id,
        exercise_id = %exercise.id,
        duration,
        "Exercise logged"
    );

    Ok((
        StatusCode::CREATED,
        Json(ExerciseResponse {
            id: user.id,
            username: user.username,
            description: exercise.description,
            duration,
            date: format_date_string(date),
        }),
    ))
}

// ─── Exercise Log ────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsQuery {
    /// Inclusive lower date bound; unparseable values are ignored
    from: Option<String>,
    /// Inclusive upper date bound; unparseable values are ignored
    to: Option<String>,
    /// Maximum entries to return; applies only when a positive integer
    limit: Option<String>,
}

#[derive(Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

#[derive(Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

fn parse_limit(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.parse::<u32>().ok()).filter(|&n| n > 0)
}

/// Get a user's exercise log, optionally date-bounded and limited.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogResponse>> {
    tracing::debug!(
        user_id = %user_id,
        from = ?params.from,
        to = ?params.to,
        limit = ?params.limit,
        "Fetching exercise log"
    );

    let user = state
        .db
        .get_user(&user_id)
        .await
        .map_err(AppError::with_detail)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let from = params.from.as_deref().and_then(parse_date);
    let to = params.to.as_deref().and_then(parse_date);
    let limit = parse_limit(params.limit.as_deref());

    let exercises = state
        .db
        .exercises_for_user(&user.id, from, to, limit)
        .await
        .map_err(AppError::with_detail)?;

    let log: Vec<LogEntry> = exercises
        .into_iter()
        .map(|e| LogEntry {
            description: e.description,
            duration: e.duration,
            date: format_date_string(e.date),
        })
        .collect();

    Ok(Json(LogResponse {
        id: user.id,
        username: user.username,
        from: from.map(format_date_string),
        to: to.map(format_date_string),
        count: log.len(),
        log,
    }))
}
