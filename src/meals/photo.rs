use base64ct::{Base64, Encoding};

/// Photo bytes -> text stored in `meals.photo` and sent as the JSON `photo` field.
pub fn encode(bytes: &[u8]) -> String {
    Base64::encode_string(bytes)
}

pub fn decode(text: &str) -> Result<Vec<u8>, base64ct::Error> {
    Base64::decode_vec(text)
}

/// `#[serde(with = "photo::base64")]` for `Vec<u8>` fields.
pub mod base64 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(d)?;
        super::decode(&text).map_err(|e| de::Error::custom(format!("invalid base64 photo: {e}")))
    }
}
