use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInteger {
    String(String),
    Integer(u64),
}

/// Accepts an identifier written either as a JSON string or a JSON integer.
pub(crate) fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match StringOrInteger::deserialize(deserializer)? {
        StringOrInteger::String(s) => s.trim().to_owned(),
        StringOrInteger::Integer(n) => n.to_string(),
    })
}
