//! Lenient field decoders shared by every record schema.
//!
//! Records come from hand-edited JSON, YAML front matter and the visual
//! editor's exports. A `null` or missing field always decodes to the field's
//! default; scalars of the "wrong" kind are rendered to text where text is
//! expected. Anything else is a schema error and drops the record.

use serde::{Deserialize, Deserializer, de::Error};
use std::str::FromStr;

/// Any scalar a text field may hold.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    pub(crate) fn into_string(self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Str(s) => s,
        }
    }
}

/// Text field: `null`, strings, numbers and booleans are accepted.
pub(crate) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<Scalar>::deserialize(d)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Optional text field: an empty string counts as absent.
pub(crate) fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = text(d)?;
    Ok((!value.is_empty()).then_some(value))
}

/// Either shape a list field turns up in.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListField {
    Items(Vec<Scalar>),
    Scalar(Scalar),
}

/// List of text items. `null` or a lone scalar (`tags: rust`) is an empty list.
pub(crate) fn list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(match Option::<ListField>::deserialize(d)? {
        Some(ListField::Items(items)) => items.into_iter().map(Scalar::into_string).collect(),
        Some(ListField::Scalar(_)) | None => Vec::new(),
    })
}

/// Integer field. `null` is zero.
pub(crate) fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    Ok(Option::<i64>::deserialize(d)?.unwrap_or_default())
}

/// Flag that is only false for a literal `false` (boolean or string).
pub(crate) fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Option::<Scalar>::deserialize(d)? {
        Some(Scalar::Bool(value)) => value,
        Some(Scalar::Str(value)) => value.trim() != "false",
        _ => true,
    })
}

/// Select field. Empty or `null` picks the default option.
pub(crate) fn choice<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String> + Default,
{
    match text(d)?.trim() {
        "" => Ok(T::default()),
        value => value.parse().map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Tagged {
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
    }

    fn tags(value: serde_json::Value) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_value::<Tagged>(value).map(|t| t.tags)
    }

    #[test]
    fn test_list_shapes() {
        assert_eq!(tags(json!({"tags": ["a", 1, true]})).unwrap(), vec!["a", "1", "true"]);
        assert!(tags(json!({"tags": null})).unwrap().is_empty());
        assert!(tags(json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_list_scalar_is_empty() {
        assert!(tags(json!({"tags": "rust"})).unwrap().is_empty());
        assert!(tags(json!({"tags": 3})).unwrap().is_empty());
    }

    #[test]
    fn test_list_of_objects_is_error() {
        assert!(tags(json!({"tags": [{"name": "rust"}]})).is_err());
    }
}
