// Problem Gateway Port (Interface)

use crate::domain::{
    CreatedProblem, NewProblem, Problem, ProblemDetail, ProblemUpdate, WorkNoteUpdate,
};
use crate::error::Result;
use async_trait::async_trait;

/// Remote problem API (one method per endpoint)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProblemGateway: Send + Sync {
    /// `GET /problems`
    async fn list_problems(&self) -> Result<Vec<Problem>>;

    /// `GET /problem/:id`
    async fn get_problem(&self, id: &str) -> Result<ProblemDetail>;

    /// `POST /problem`
    async fn create_problem(&self, problem: &NewProblem) -> Result<CreatedProblem>;

    /// `PUT /problem/:id` with a partial record
    async fn update_problem(&self, id: &str, update: &ProblemUpdate) -> Result<()>;

    /// `PUT /problem/:id` with `{ work_notes }`
    async fn add_work_note(&self, id: &str, note: &WorkNoteUpdate) -> Result<()>;

    /// `DELETE /problem/:id`
    async fn delete_problem(&self, id: &str) -> Result<()>;
}
