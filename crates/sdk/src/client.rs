//! ProblemDesk Client Implementation

use crate::error::{Result, SdkError};
use async_trait::async_trait;
use problemdesk_core::domain::{
    CreatedProblem, NewProblem, Problem, ProblemDetail, ProblemUpdate, WorkNoteUpdate,
};
use problemdesk_core::port::ProblemGateway;
use reqwest::{Method, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// ProblemDesk API Client
///
/// Thin REST client for the problem proxy. One method per endpoint, no
/// retries and no caching.
///
/// # Example
///
/// ```no_run
/// use problemdesk_sdk::ProblemDeskClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ProblemDeskClient::connect("http://127.0.0.1:3001")?;
/// let problems = client.list_problems().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ProblemDeskClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ProblemDeskClient {
    /// Create a client with the default timeout
    ///
    /// # Arguments
    ///
    /// * `url` - API base URL (e.g., `http://127.0.0.1:3001` or `https://host/api`)
    pub fn connect(url: impl AsRef<str>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout
    pub fn with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let url = url.as_ref();

        let base_url =
            Url::parse(url).map_err(|e| SdkError::InvalidUrl(format!("{}: {}", url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SdkError::InvalidUrl(url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Fetch every problem (`GET /problems`)
    pub async fn list_problems(&self) -> Result<Vec<Problem>> {
        let body = self.send(Method::GET, &["problems"], None::<&()>).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch one problem and its work notes (`GET /problem/:id`)
    pub async fn get_problem(&self, id: &str) -> Result<ProblemDetail> {
        let body = self.send(Method::GET, &["problem", id], None::<&()>).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Create a problem (`POST /problem`)
    ///
    /// The response is the created record; only `sys_id` and `number` are kept.
    pub async fn create_problem(&self, problem: &NewProblem) -> Result<CreatedProblem> {
        let body = self.send(Method::POST, &["problem"], Some(problem)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Update fields of a problem (`PUT /problem/:id`)
    pub async fn update_problem(&self, id: &str, update: &ProblemUpdate) -> Result<()> {
        self.send(Method::PUT, &["problem", id], Some(update)).await?;
        Ok(())
    }

    /// Append a work note (`PUT /problem/:id` with `{ work_notes }`)
    pub async fn add_work_note(&self, id: &str, note: &WorkNoteUpdate) -> Result<()> {
        self.send(Method::PUT, &["problem", id], Some(note)).await?;
        Ok(())
    }

    /// Delete a problem (`DELETE /problem/:id`)
    pub async fn delete_problem(&self, id: &str) -> Result<()> {
        self.send(Method::DELETE, &["problem", id], None::<&()>).await?;
        Ok(())
    }

    /// Build `base_url/segment/...` with each segment percent-encoded
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| SdkError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and return the raw body of a 2xx response
    async fn send<B>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(segments)?;
        debug!(method = %method, url = %url, "Sending request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(method = %method, url = %url, status = status.as_u16(), "Response received");

        if !status.is_success() {
            return Err(SdkError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl ProblemGateway for ProblemDeskClient {
    async fn list_problems(&self) -> problemdesk_core::Result<Vec<Problem>> {
        Ok(ProblemDeskClient::list_problems(self).await?)
    }

    async fn get_problem(&self, id: &str) -> problemdesk_core::Result<ProblemDetail> {
        Ok(ProblemDeskClient::get_problem(self, id).await?)
    }

    async fn create_problem(
        &self,
        problem: &NewProblem,
    ) -> problemdesk_core::Result<CreatedProblem> {
        Ok(ProblemDeskClient::create_problem(self, problem).await?)
    }

    async fn update_problem(
        &self,
        id: &str,
        update: &ProblemUpdate,
    ) -> problemdesk_core::Result<()> {
        Ok(ProblemDeskClient::update_problem(self, id, update).await?)
    }

    async fn add_work_note(
        &self,
        id: &str,
        note: &WorkNoteUpdate,
    ) -> problemdesk_core::Result<()> {
        Ok(ProblemDeskClient::add_work_note(self, id, note).await?)
    }

    async fn delete_problem(&self, id: &str) -> problemdesk_core::Result<()> {
        Ok(ProblemDeskClient::delete_problem(self, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let client = ProblemDeskClient::connect("http://127.0.0.1:3001").unwrap();
        let url = client.endpoint(&["problem", "abc123"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3001/problem/abc123");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ProblemDeskClient::connect("https://proxy.example.com/api/").unwrap();
        let url = client.endpoint(&["problems"]).unwrap();
        assert_eq!(url.as_str(), "https://proxy.example.com/api/problems");
    }

    #[test]
    fn test_endpoint_encodes_id() {
        let client = ProblemDeskClient::connect("http://localhost:3001").unwrap();
        let url = client.endpoint(&["problem", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/problem/a%2Fb%20c");
    }

    #[test]
    fn test_connect_rejects_bad_url() {
        assert!(matches!(
            ProblemDeskClient::connect("not a url"),
            Err(SdkError::InvalidUrl(_))
        ));
        assert!(matches!(
            ProblemDeskClient::connect("mailto:ops@example.com"),
            Err(SdkError::InvalidUrl(_))
        ));
    }
}
