// Problem Service - Core use cases behind every screen action

pub mod create;


pub use create::CreateProblemRequest;

use crate::domain::{
    is_fresh, order_newest_first, tag_and_order, CreatedProblem, Problem, ProblemDetail,
    ProblemUpdate, WorkNoteUpdate,
};
use crate::error::{AppError, Result};
use crate::port::{ProblemGateway, TimeProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Problem Service
///
/// Every call goes straight to the gateway; nothing is cached between calls.
pub struct ProblemService {
    gateway: Arc<dyn ProblemGateway>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ProblemService {
    pub fn new(gateway: Arc<dyn ProblemGateway>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            gateway,
            time_provider,
        }
    }

    /// Fetch all problems, tagged "new" and ordered newest first
    pub async fn list(&self) -> Result<Vec<Problem>> {
        let problems = self.gateway.list_problems().await?;
        let now = self.time_provider.now_millis();

        let problems = tag_and_order(problems, now);

        debug!(
            count = problems.len(),
            new = problems.iter().filter(|p| p.is_new).count(),
            "Problems fetched"
        );

        Ok(problems)
    }

    /// Fetch one problem with its work notes (newest first)
    pub async fn detail(&self, id: &str) -> Result<ProblemDetail> {
        validate_id(id)?;

        let mut detail = self.gateway.get_problem(id).await?;
        detail.problem.is_new = is_fresh(
            detail.problem.sys_created_on,
            self.time_provider.now_millis(),
        );
        order_newest_first(&mut detail.work_notes);

        debug!(
            sys_id = %id,
            work_notes = detail.work_notes.len(),
            "Problem fetched"
        );

        Ok(detail)
    }

    /// Create a new problem (both descriptions required)
    pub async fn create(&self, req: CreateProblemRequest) -> Result<CreatedProblem> {
        create::execute(self.gateway.as_ref(), req).await
    }

    /// Send a partial record as-is
    pub async fn update(&self, id: &str, update: ProblemUpdate) -> Result<()> {
        validate_id(id)?;

        if update.is_empty() {
            warn!(sys_id = %id, "Update rejected: no fields set");
            return Err(AppError::Validation("Nothing to update.".to_string()));
        }

        self.gateway.update_problem(id, &update).await?;
        info!(sys_id = %id, "Problem updated");

        Ok(())
    }

    /// Append a work note, then re-fetch the problem so the new note shows up
    pub async fn add_work_note(&self, id: &str, text: impl Into<String>) -> Result<ProblemDetail> {
        validate_id(id)?;

        let note = WorkNoteUpdate::new(text);
        self.gateway.add_work_note(id, &note).await?;
        info!(sys_id = %id, "Work note added");

        self.detail(id).await
    }

    /// Delete a problem
    pub async fn delete(&self, id: &str) -> Result<()> {
        validate_id(id)?;

        self.gateway.delete_problem(id).await?;
        info!(sys_id = %id, "Problem deleted");

        Ok(())
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(AppError::Validation(
            "Problem ID cannot be empty".to_string(),
        ));
    }
    Ok(())
}
