// Create Use Case

use crate::domain::{CreatedProblem, NewProblem};
use crate::error::{AppError, Result};
use crate::port::ProblemGateway;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Create request as typed by the user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProblemRequest {
    pub short_description: String,
    pub description: String,
}

/// Reject the request before any network call when a required field is empty
pub fn validate_request(req: &CreateProblemRequest) -> Result<()> {
    if req.short_description.is_empty() || req.description.is_empty() {
        return Err(AppError::Validation(
            "Both short description and description are required.".to_string(),
        ));
    }
    Ok(())
}

/// Execute create use case
///
/// # Arguments
///
/// * `gateway` - Remote problem API
/// * `req` - Create request (forwarded unmodified once valid)
pub async fn execute(
    gateway: &dyn ProblemGateway,
    req: CreateProblemRequest,
) -> Result<CreatedProblem> {
    if let Err(e) = validate_request(&req) {
        warn!(error = %e, "Create rejected by validation");
        return Err(e);
    }

    let body = NewProblem {
        short_description: req.short_description,
        description: req.description,
    };

    let created = gateway.create_problem(&body).await?;

    info!(
        sys_id = %created.sys_id,
        number = %created.number,
        "Problem created"
    );

    Ok(created)
}
