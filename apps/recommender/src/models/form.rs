use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// Seniority of the role being assessed. Serialized as the exact literal the
/// recommendation service expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobLevel {
    #[default]
    Entry,
    Mid,
    Senior,
}

impl JobLevel {
    pub const ALL: [JobLevel; 3] = [JobLevel::Entry, JobLevel::Mid, JobLevel::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobLevel::Entry => "Entry",
            JobLevel::Mid => "Mid",
            JobLevel::Senior => "Senior",
        }
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobLevel {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Entry" => Ok(JobLevel::Entry),
            "Mid" => Ok(JobLevel::Mid),
            "Senior" => Ok(JobLevel::Senior),
            other => Err(FormError::UnknownLevel(other.to_string())),
        }
    }
}

/// Why the assessment is being run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseCase {
    #[default]
    Hiring,
    Development,
}

impl UseCase {
    pub const ALL: [UseCase; 2] = [UseCase::Hiring, UseCase::Development];

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::Hiring => "Hiring",
            UseCase::Development => "Development",
        }
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UseCase {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hiring" => Ok(UseCase::Hiring),
            "Development" => Ok(UseCase::Development),
            other => Err(FormError::UnknownUseCase(other.to_string())),
        }
    }
}

/// Raw form snapshot taken by the view at submit time.
/// `key_skills` is the unsplit comma-delimited text exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub job_title: String,
    #[serde(default)]
    pub level: JobLevel,
    #[serde(default)]
    pub use_case: UseCase,
    pub key_skills: String,
}

impl FormInput {
    /// Checks the required fields before a submission is permitted.
    /// The payload builder itself never fails; this gate belongs to the view.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.job_title.trim().is_empty() {
            return Err(FormError::MissingField("job_title"));
        }
        if self.key_skills.trim().is_empty() {
            return Err(FormError::MissingField("key_skills"));
        }
        Ok(())
    }
}
