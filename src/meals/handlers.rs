use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use metrics::counter;
use tracing::{error, info, instrument, warn};

use super::{dto::StoreMealRequest, model::Meal, services};
use crate::{error::MealError, state::AppState};

pub fn meal_routes() -> Router<AppState> {
    Router::new().route("/meals", get(load_meals).post(store_meal))
}

#[instrument(skip(state, body))]
pub async fn store_meal(
    State(state): State<AppState>,
    body: Result<Json<StoreMealRequest>, JsonRejection>,
) -> Result<Json<Meal>, MealError> {
    let res = match body {
        Ok(Json(body)) => services::store_meal(state.meals.as_ref(), body).await,
        Err(rejection) => Err(MealError::from(rejection)),
    };
    record("store_meal", &res);
    match res {
        Ok(meal) => {
            info!(name = %meal.name, rating = meal.rating, photo_bytes = meal.photo.len(), "meal stored");
            Ok(Json(meal))
        }
        Err(e) => {
            log_failure("store_meal", &e);
            Err(e)
        }
    }
}

#[instrument(skip(state))]
pub async fn load_meals(State(state): State<AppState>) -> Result<Json<Vec<Meal>>, MealError> {
    let res = services::load_meals(state.meals.as_ref()).await;
    record("load_meals", &res);
    match res {
        Ok(meals) => Ok(Json(meals)),
        Err(e) => {
            log_failure("load_meals", &e);
            Err(e)
        }
    }
}

fn record<T>(route: &'static str, res: &Result<T, MealError>) {
    let status = match res {
        Ok(_) => 200,
        Err(e) => e.status().as_u16(),
    };
    counter!("foodserver_requests_total", 1, "route" => route, "status" => status.to_string());
}

fn log_failure(route: &str, e: &MealError) {
    if e.status().is_server_error() {
        error!(route, error = %e, "request failed");
    } else {
        warn!(route, error = %e, "request rejected");
    }
}
