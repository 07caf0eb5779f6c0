use serde::{Deserialize, Serialize};

use super::photo;
use crate::error::MealError;

/// A stored meal. `name` is the natural key: storing the same name again replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(with = "photo::base64")]
    pub photo: Vec<u8>,
    // Unbounded; clients decide the scale.
    pub rating: i32,
}

impl Meal {
    pub fn new(
        name: Option<String>,
        photo: Option<Vec<u8>>,
        rating: i32,
    ) -> Result<Self, MealError> {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| MealError::InvalidInput("name must not be empty".into()))?;
        let photo = photo.ok_or_else(|| MealError::InvalidInput("photo is required".into()))?;
        Ok(Self { name, photo, rating })
    }
}
