// Port Layer - Interfaces for external dependencies

pub mod problem_gateway;
pub mod time_provider;

// Re-exports
pub use problem_gateway::ProblemGateway;
pub use time_provider::TimeProvider;

#[cfg(test)]
pub use problem_gateway::MockProblemGateway;
