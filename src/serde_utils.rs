/// Serde utility functions for common patterns
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// Deserialize an optional value from a string, treating a blank string as absent.
///
/// - Missing field → `None`
/// - Field is `""` → `None`
/// - Field has value → `Some(value.parse()?)`
///
/// Query strings like `?language=` arrive as an empty string rather than a
/// missing key, which a plain `Option<T>` would reject.
///
/// Usage:
/// ```ignore
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(default, deserialize_with = "crate::serde_utils::empty_as_none")]
///     language: Option<Language>,
/// }
/// ```
pub fn empty_as_none<'de, T, D>(de: D) -> Result<Option<T>, D::Error>
where
    T: FromStr,
    T::Err: Display,
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::db::Language;

    #[derive(Debug, Deserialize)]
    struct Filter {
        #[serde(default, deserialize_with = "super::empty_as_none")]
        language: Option<Language>,
    }

    #[test]
    fn missing_field_is_none() {
        let filter: Filter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.language, None);
    }

    #[test]
    fn empty_string_is_none() {
        let filter: Filter = serde_json::from_str(r#"{"language": ""}"#).unwrap();
        assert_eq!(filter.language, None);
    }

    #[test]
    fn value_is_parsed() {
        let filter: Filter = serde_json::from_str(r#"{"language": "go"}"#).unwrap();
        assert_eq!(filter.language, Some(Language::Go));
    }

    #[test]
    fn padded_value_is_not_trimmed() {
        assert!(serde_json::from_str::<Filter>(r#"{"language": " go"}"#).is_err());
        assert!(serde_json::from_str::<Filter>(r#"{"language": " "}"#).is_err());
    }

    #[test]
    fn invalid_value_is_an_error() {
        let err = serde_json::from_str::<Filter>(r#"{"language": "perl"}"#).unwrap_err();
        assert!(err.to_string().contains("Unknown language"));
    }
}
