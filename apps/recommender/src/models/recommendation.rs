use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::form::{JobLevel, UseCase};

/// Normalized request body sent to the recommendation service.
/// Built fresh for every submission by [`crate::payload::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub job_title: String,
    pub level: JobLevel,
    pub use_case: UseCase,
    pub key_skills: Vec<String>,
}

/// "Yes"/"No" vocabulary used by the service for capability columns.
///
/// Anything other than the two known literals is kept verbatim in
/// `Unrecognized` and reads as negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SupportFlag {
    Yes,
    No,
    #[default]
    Missing,
    Unrecognized(String),
}

impl SupportFlag {
    pub fn is_supported(&self) -> bool {
        match self {
            SupportFlag::Yes => true,
            SupportFlag::No | SupportFlag::Missing | SupportFlag::Unrecognized(_) => false,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SupportFlag::Yes => "Yes",
            SupportFlag::No => "No",
            SupportFlag::Missing => "",
            SupportFlag::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for SupportFlag {
    fn from(raw: &str) -> Self {
        match raw {
            "Yes" => SupportFlag::Yes,
            "No" => SupportFlag::No,
            other => SupportFlag::Unrecognized(other.to_string()),
        }
    }
}

impl Serialize for SupportFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SupportFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => SupportFlag::from(s.as_str()),
            serde_json::Value::Null => SupportFlag::Missing,
            other => SupportFlag::Unrecognized(other.to_string()),
        })
    }
}

/// One assessment suggestion returned by the service.
///
/// Every field falls back to its default when absent so that a single missing
/// key never discards the whole response. `name`/`category` only appear in the
/// older catalog response shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Minutes.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub test_type: Vec<String>,
    /// Match strength, nominally 0..=5.
    #[serde(deserialize_with = "null_as_default")]
    pub score: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
    pub remote_support: SupportFlag,
    pub adaptive_support: SupportFlag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
