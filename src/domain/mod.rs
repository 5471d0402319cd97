//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, statuses, errors)
//! - `document` - Field schemas, script rules, template selection, packaging
//! - `history` - The log of generated documents and its records

pub mod document;
pub mod foundation;
pub mod history;
