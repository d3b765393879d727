//! ProblemDesk SDK - Rust Client Library
//!
//! Provides a REST client for the problem proxy in front of ServiceNow.
//! [`ProblemDeskClient`] can be used directly or as the
//! [`ProblemGateway`](problemdesk_core::port::ProblemGateway) behind a
//! [`ProblemService`](problemdesk_core::application::ProblemService).
//!
//! # Example
//!
//! ```no_run
//! use problemdesk_sdk::ProblemDeskClient;
//! use problemdesk_core::domain::NewProblem;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProblemDeskClient::connect("http://127.0.0.1:3001")?;
//!
//!     let created = client.create_problem(&NewProblem {
//!         short_description: "VPN drops every hour".to_string(),
//!         description: "Reported by three users in the Berlin office".to_string(),
//!     }).await?;
//!
//!     println!("Problem created: {}", created.number);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{ProblemDeskClient, DEFAULT_TIMEOUT};
pub use error::{Result, SdkError};
