use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::search::{bookmark_lines, extract_results, search_prompt};
use crate::auth::AuthUser;
use crate::bookmarks::repo::Bookmark;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ai/summarize", post(summarize))
        .route("/ai/search", post(search))
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub url: Option<String>,
    pub content: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[instrument(skip(state, payload))]
pub async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<Value>, ApiError> {
    let url = payload.url.as_deref().filter(|s| !s.is_empty());
    let content = payload.content.as_deref().filter(|s| !s.is_empty());
    let title = payload.title.as_deref().filter(|s| !s.is_empty());

    if url.is_none() && content.is_none() {
        return Err(ApiError::validation("URL or content required"));
    }

    let prompt = summary_prompt(title, content, url);
    let summary = state
        .ai
        .complete(&prompt)
        .await
        .map_err(ApiError::Upstream)?;

    Ok(Json(json!({ "summary": summary })))
}

#[instrument(skip(state, payload))]
pub async fn search(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<SearchRequest>,
) -> Result<Json<Value>, ApiError> {
    if payload.query.is_empty() {
        return Err(ApiError::validation("Query required"));
    }

    let bookmarks = Bookmark::list_by_user(&state.db, user_id).await?;
    if bookmarks.is_empty() {
        return Ok(Json(json!({ "results": [] })));
    }

    let prompt = search_prompt(&bookmark_lines(&bookmarks), &payload.query);
    let reply = state
        .ai
        .complete(&prompt)
        .await
        .map_err(ApiError::Upstream)?;

    let results = extract_results(&reply);
    info!(user_id = %user_id, hits = results.len(), "ai search completed");
    Ok(Json(json!({ "results": results })))
}

/// Build the summary prompt. Content wins over the URL when both are given.
fn summary_prompt(title: Option<&str>, content: Option<&str>, url: Option<&str>) -> String {
    let mut prompt = String::from(
        "Please provide a concise summary (2-3 sentences) of the following content. \
         Make it engaging and informative.",
    );
    if let Some(title) = title {
        prompt.push_str(&format!("\nTitle: {title}"));
    }
    match (content, url) {
        (Some(content), _) => prompt.push_str(&format!("\nContent to summarize: {content}")),
        (None, Some(url)) => prompt.push_str(&format!("\nArticle URL to summarize: {url}")),
        (None, None) => {}
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_prefers_content_over_url() {
        let prompt = summary_prompt(None, Some("the body"), Some("https://x.com"));
        assert!(prompt.contains("Content to summarize: the body"));
        assert!(!prompt.contains("Article URL"));
    }

    #[test]
    fn prompt_falls_back_to_url() {
        let prompt = summary_prompt(None, None, Some("https://x.com"));
        assert!(prompt.contains("Article URL to summarize: https://x.com"));
    }

    #[test]
    fn prompt_carries_title_line_when_given() {
        let prompt = summary_prompt(Some("My article"), Some("body"), None);
        assert!(prompt.contains("Title: My article"));
        let without = summary_prompt(None, Some("body"), None);
        assert!(!without.contains("Title:"));
    }
}
