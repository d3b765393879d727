// Work Note Domain Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::freshness::Timestamped;

/// Journal entry attached to a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkNote {
    pub sys_id: String,
    pub value: String,
    #[serde(with = "crate::domain::timestamp")]
    pub sys_created_on: DateTime<Utc>,
    #[serde(default)]
    pub sys_created_by: String,
}

impl Timestamped for WorkNote {
    fn created_at(&self) -> DateTime<Utc> {
        self.sys_created_on
    }
}

/// `PUT /problem/:id` body that appends a work note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkNoteUpdate {
    pub work_notes: String,
}

impl WorkNoteUpdate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            work_notes: text.into(),
        }
    }
}
