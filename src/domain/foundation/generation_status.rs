//! GenerationStatus enum for tracking the document generation flow.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Phase of the document generation flow.
///
/// One generation runs at a time: the flow leaves `Idle` when a request is
/// accepted, walks the pipeline phases, and returns to `Idle` from either
/// outcome phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Validating,
    Rendering,
    Packaging,
    Completed,
    Failed,
}

impl GenerationStatus {
    /// Returns true if a new generation can be accepted.
    pub fn is_idle(&self) -> bool {
        matches!(self, GenerationStatus::Idle)
    }

    /// Returns true if a generation is currently in flight.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            GenerationStatus::Validating | GenerationStatus::Rendering | GenerationStatus::Packaging
        )
    }

    /// Returns true if the flow is in an outcome phase.
    pub fn is_outcome(&self) -> bool {
        matches!(self, GenerationStatus::Completed | GenerationStatus::Failed)
    }
}

impl StateMachine for GenerationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GenerationStatus::*;
        matches!(
            (self, target),
            (Idle, Validating)
                | (Validating, Rendering)
                | (Validating, Failed)
                | (Rendering, Packaging)
                | (Rendering, Failed)
                | (Packaging, Completed)
                | (Packaging, Failed)
                | (Completed, Idle)
                | (Failed, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GenerationStatus::*;
        match self {
            Idle => vec![Validating],
            Validating => vec![Rendering, Failed],
            Rendering => vec![Packaging, Failed],
            Packaging => vec![Completed, Failed],
            Completed => vec![Idle],
            Failed => vec![Idle],
        }
    }
}

impl fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GenerationStatus::Idle => "Idle",
            GenerationStatus::Validating => "Validating",
            GenerationStatus::Rendering => "Rendering",
            GenerationStatus::Packaging => "Packaging",
            GenerationStatus::Completed => "Completed",
            GenerationStatus::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}
