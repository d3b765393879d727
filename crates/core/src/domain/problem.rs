// Problem Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::freshness::{Flagged, Timestamped};
use super::work_note::WorkNote;

/// ServiceNow `sys_id` (opaque)
pub type ProblemId = String;

/// Problem record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub sys_id: ProblemId,
    pub number: String,

    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,

    // Read-only on the client
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub urgency: String,
    #[serde(default)]
    pub priority: String,

    #[serde(with = "crate::domain::timestamp")]
    pub sys_created_on: DateTime<Utc>,

    /// Created within the last 24h. Derived on every fetch, never sent.
    #[serde(skip)]
    pub is_new: bool,
}

impl Problem {
    /// Create a problem with empty optional fields
    ///
    /// # Arguments
    ///
    /// * `sys_id` - Opaque record ID
    /// * `number` - Human-readable number (e.g., `PRB0040001`)
    /// * `short_description` - One-line summary
    /// * `sys_created_on` - Creation timestamp
    pub fn new(
        sys_id: impl Into<String>,
        number: impl Into<String>,
        short_description: impl Into<String>,
        sys_created_on: DateTime<Utc>,
    ) -> Self {
        Self {
            sys_id: sys_id.into(),
            number: number.into(),
            short_description: short_description.into(),
            description: String::new(),
            impact: String::new(),
            urgency: String::new(),
            priority: String::new(),
            sys_created_on,
            is_new: false,
        }
    }
}

impl Timestamped for Problem {
    fn created_at(&self) -> DateTime<Utc> {
        self.sys_created_on
    }
}

impl Flagged for Problem {
    fn set_new(&mut self, is_new: bool) {
        self.is_new = is_new;
    }
}

/// `GET /problem/:id` envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetail {
    pub problem: Problem,
    #[serde(rename = "workNotes", default)]
    pub work_notes: Vec<WorkNote>,
}

/// `POST /problem` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProblem {
    pub short_description: String,
    pub description: String,
}

/// `POST /problem` response (the created record, only identity is kept)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedProblem {
    pub sys_id: ProblemId,
    pub number: String,
}

/// `PUT /problem/:id` body (partial record)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl ProblemUpdate {
    pub fn short_description(value: impl Into<String>) -> Self {
        Self {
            short_description: Some(value.into()),
            ..Self::default()
        }
    }

    /// True when no field would be sent
    pub fn is_empty(&self) -> bool {
        self.short_description.is_none()
            && self.description.is_none()
            && self.impact.is_none()
            && self.urgency.is_none()
            && self.priority.is_none()
    }
}
