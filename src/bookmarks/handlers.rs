use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{ContentType, CreateBookmarkRequest, UpdateBookmarkRequest};
use super::repo::Bookmark;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            patch(update_bookmark).delete(delete_bookmark),
        )
}

#[instrument(skip(state))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let bookmarks = Bookmark::list_by_user(&state.db, user_id).await?;
    Ok(Json(bookmarks))
}

#[instrument(skip(state, payload))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    if payload.url.is_empty() || payload.title.is_empty() {
        return Err(ApiError::validation("URL and title required"));
    }

    let content_type = ContentType::parse(payload.content_type.as_deref());
    let bookmark = Bookmark::create(
        &state.db,
        user_id,
        &payload.url,
        &payload.title,
        payload.description.as_deref(),
        payload.image_url.as_deref(),
        content_type.as_str(),
    )
    .await?;

    info!(user_id = %user_id, bookmark_id = %bookmark.id, "bookmark created");
    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[instrument(skip(state, payload))]
pub async fn update_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookmarkRequest>,
) -> Result<Json<Value>, ApiError> {
    // Re-normalize the tag; an unrecognized value degrades to article
    // rather than being stored verbatim.
    let content_type = payload
        .content_type
        .as_deref()
        .map(|t| ContentType::parse(Some(t)).as_str());

    let updated = Bookmark::update_fields(
        &state.db,
        user_id,
        id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.image_url.as_deref(),
        content_type,
    )
    .await?;

    if !updated {
        return Err(ApiError::not_found("Bookmark not found"));
    }

    info!(user_id = %user_id, bookmark_id = %id, "bookmark updated");
    Ok(Json(json!({ "success": true })))
}

#[instrument(skip(state))]
pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let deleted = Bookmark::delete(&state.db, user_id, id).await?;
    if !deleted {
        return Err(ApiError::not_found("Bookmark not found"));
    }

    info!(user_id = %user_id, bookmark_id = %id, "bookmark deleted");
    Ok(Json(json!({ "success": true })))
}
