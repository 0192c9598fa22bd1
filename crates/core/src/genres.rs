//! Genre list codec.
//!
//! Genres are stored as a single comma-delimited TEXT column and exposed as
//! an ordered list of labels. Labels are free-form but may not contain the
//! delimiter.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;

/// Delimiter used in the stored column.
pub const GENRE_DELIMITER: char = ',';

/// An ordered list of genre labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genres(Vec<String>);

impl Genres {
    /// Build from individual labels.
    ///
    /// Labels are trimmed and empty ones dropped. A label containing
    /// [`GENRE_DELIMITER`] is rejected, since it would be split into two
    /// labels once stored.
    pub fn from_labels(labels: Vec<String>) -> Result<Self, CoreError> {
        let mut cleaned = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.trim();
            if label.contains(GENRE_DELIMITER) {
                return Err(CoreError::Validation(format!(
                    "Genre '{label}' must not contain '{GENRE_DELIMITER}'"
                )));
            }
            if !label.is_empty() {
                cleaned.push(label.to_string());
            }
        }
        Ok(Self(cleaned))
    }

    /// Parse the stored column value.
    ///
    /// Labels are trimmed and empty labels dropped, so `""` yields an
    /// empty list and `"Jazz, Folk"` yields `["Jazz", "Folk"]`.
    pub fn from_delimited(raw: &str) -> Self {
        Self(
            raw.split(GENRE_DELIMITER)
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Render for storage.
    pub fn to_delimited(&self) -> String {
        self.0.join(&GENRE_DELIMITER.to_string())
    }

    pub fn labels(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Serialize for Genres {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// Accepts either a list of labels or an already delimited string.
impl<'de> Deserialize<'de> for Genres {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Delimited(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::List(labels) => Self::from_labels(labels).map_err(serde::de::Error::custom)?,
            Raw::Delimited(raw) => Self::from_delimited(&raw),
        })
    }
}

/// Serialize a stored delimited column as a list of labels.
///
/// For use with `#[serde(serialize_with = "...")]` on row structs.
pub fn serialize_delimited<S: Serializer>(raw: &str, serializer: S) -> Result<S::Ok, S::Error> {
    Genres::from_delimited(raw).serialize(serializer)
}
