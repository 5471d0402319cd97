//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, statuses, and error types that
//! form the vocabulary of the document generation domain.

mod errors;
mod generation_status;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use generation_status::GenerationStatus;
pub use ids::RecordId;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
