// Application Layer - Use Cases

pub mod problem;

// Re-exports
pub use problem::{CreateProblemRequest, ProblemService};
