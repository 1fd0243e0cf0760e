use crate::state::AppState;
use axum::Router;

pub mod backend;
mod claude;
mod gemini;
pub mod handlers;
pub mod search;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
