mod dto;
pub mod handlers;
pub mod model;
pub mod photo;
pub mod repo;
mod services;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::meal_routes()
}
