use tracing::warn;

use super::{dto::StoreMealRequest, model::Meal, repo::MealRepository};
use crate::error::MealError;

/// Validate the request and persist it. Nothing is written when validation fails.
pub async fn store_meal(
    repo: &dyn MealRepository,
    body: StoreMealRequest,
) -> Result<Meal, MealError> {
    let photo = body.decode_photo().map_err(|e| {
        warn!(error = %e, "photo is not valid base64");
        MealError::InvalidInput(format!("photo is not valid base64: {e}"))
    })?;
    let meal = Meal::new(body.name, photo, body.rating)?;
    repo.store(meal).await
}

pub async fn load_meals(repo: &dyn MealRepository) -> Result<Vec<Meal>, MealError> {
    repo.load_all().await
}
