use crate::state::AppState;
use axum::Router;

mod claims;
mod dto;
pub mod extractor;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod repo;

pub use extractor::AuthUser;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
