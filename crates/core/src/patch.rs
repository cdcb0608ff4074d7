//! Field deserializers for partial-update (PUT) bodies.
//!
//! Plain `Option<T>` cannot tell an absent key from an explicit `null`. Update
//! DTOs pair these helpers with `#[serde(default)]` so that:
//!
//! | JSON           | [`nullable`] field | [`non_null`] field |
//! |----------------|--------------------|--------------------|
//! | key absent     | `None`             | `None`             |
//! | `null`         | `Some(None)`       | error              |
//! | value          | `Some(Some(v))`    | `Some(v)`          |

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserialize a nullable column. Only called when the key is present, so the
/// result is always `Some`; the inner option is `None` for an explicit `null`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize a NOT NULL column that may be omitted but never nulled.
pub fn non_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => Err(D::Error::custom("field may be omitted but not null")),
    }
}

/// Split a [`nullable`] field into the `(provided, value)` pair bound by the
/// `CASE WHEN $n THEN $m ELSE col END` update statements.
pub fn bind_pair<T: Clone>(field: &Option<Option<T>>) -> (bool, Option<T>) {
    match field {
        Some(inner) => (true, inner.clone()),
        None => (false, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "nullable")]
        climate: Option<Option<String>>,
        #[serde(default, deserialize_with = "non_null")]
        name: Option<String>,
    }

    #[test]
    fn absent_keys_are_none() {
        let body: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(body.climate, None);
        assert_eq!(body.name, None);
    }

    #[test]
    fn explicit_null_clears_nullable_field() {
        let body: Body = serde_json::from_str(r#"{"climate": null}"#).unwrap();
        assert_eq!(body.climate, Some(None));
    }

    #[test]
    fn value_is_wrapped_twice() {
        let body: Body = serde_json::from_str(r#"{"climate": "arid", "name": "Tatooine"}"#).unwrap();
        assert_eq!(body.climate, Some(Some("arid".to_string())));
        assert_eq!(body.name.as_deref(), Some("Tatooine"));
    }

    #[test]
    fn null_on_required_field_is_rejected() {
        let err = serde_json::from_str::<Body>(r#"{"name": null}"#).unwrap_err();
        assert!(err.to_string().contains("not null"));
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(serde_json::from_str::<Body>(r#"{"climate": 12}"#).is_err());
    }

    #[test]
    fn bind_pair_reports_whether_field_was_supplied() {
        assert_eq!(bind_pair::<i32>(&None), (false, None));
        assert_eq!(bind_pair::<i32>(&Some(None)), (true, None));
        assert_eq!(bind_pair(&Some(Some(3))), (true, Some(3)));
    }
}
