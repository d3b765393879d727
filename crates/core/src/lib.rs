// ProblemDesk Core - Domain Logic & Ports
// NO infrastructure dependencies (HTTP lives in the sdk crate)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};
