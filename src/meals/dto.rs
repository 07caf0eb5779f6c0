use serde::Deserialize;

use super::photo;

/// Body of `POST /meals`. Name and photo are optional here so their absence
/// is reported as invalid input instead of a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct StoreMealRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub rating: i32,
}

impl StoreMealRequest {
    pub fn decode_photo(&self) -> Result<Option<Vec<u8>>, base64ct::Error> {
        self.photo.as_deref().map(photo::decode).transpose()
    }
}
