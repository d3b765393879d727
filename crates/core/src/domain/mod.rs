// Domain Layer - Pure business logic and entities

pub mod error;
pub mod freshness;
pub mod problem;
pub mod timestamp;
pub mod work_note;

// Re-exports
pub use error::DomainError;
pub use freshness::{
    is_fresh, order_newest_first, tag_and_order, Flagged, Timestamped, FRESHNESS_WINDOW_MS,
};
pub use problem::{CreatedProblem, NewProblem, Problem, ProblemDetail, ProblemId, ProblemUpdate};
pub use work_note::{WorkNote, WorkNoteUpdate};
