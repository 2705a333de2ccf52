use std::fmt;

use serde_json::Value;

/// A response body that was either valid JSON or kept as plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Decoded(Value),
    RawText(String),
}

impl Body {
    pub fn parse(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(value) => Body::Decoded(value),
            Err(_) => Body::RawText(text.to_owned()),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Decoded(value) => Some(value),
            Body::RawText(_) => None,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Decoded(value) => write!(f, "{value}"),
            Body::RawText(text) => f.write_str(text),
        }
    }
}
