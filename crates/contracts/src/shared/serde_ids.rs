//! Identifier (de)serialization helpers.
//!
//! The API returns ids either as JSON strings or as numbers depending on the
//! resource; the client keeps every id as a `String`.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        parent: Option<String>,
    }

    #[test]
    fn test_accepts_string_and_number() {
        let a: Probe = serde_json::from_str(r#"{"id":"a1","parent":7}"#).unwrap();
        assert_eq!(a.id, "a1");
        assert_eq!(a.parent.as_deref(), Some("7"));

        let b: Probe = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(b.id, "42");
        assert_eq!(b.parent, None);
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<Probe>(r#"{"id":true}"#).is_err());
    }
}
