//! Error types for catalog construction

use std::fmt;
use thiserror::Error;

/// Record-level validation failures.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate agent id {id}")]
    DuplicateAgentId { id: u32 },

    #[error("{field} of {owner} must be within {min}..={max}, got {value}")]
    OutOfRange {
        owner: String,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid value for {field} of {owner}: {reason}")]
    InvalidValue {
        owner: String,
        field: &'static str,
        reason: String,
    },
}

/// Where an agent-name reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceSource {
    Message,
    Phase,
    TimelineTask,
    Task,
    RoutingEvent,
    Template,
}

impl fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ReferenceSource::Message => "message",
            ReferenceSource::Phase => "phase",
            ReferenceSource::TimelineTask => "timeline task",
            ReferenceSource::Task => "task",
            ReferenceSource::RoutingEvent => "routing event",
            ReferenceSource::Template => "template",
        };
        write!(f, "{}", value)
    }
}

/// An agent name used as a foreign key that matches no agent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DanglingReference {
    pub source: ReferenceSource,
    pub owner: String,
    pub agent_name: String,
}

impl fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' references unknown agent '{}'",
            self.source, self.owner, self.agent_name
        )
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{} dangling agent reference(s), first: {}", .0.len(), first_reference(.0))]
    DanglingReferences(Vec<DanglingReference>),
}

fn first_reference(references: &[DanglingReference]) -> String {
    references
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

pub type CatalogResult<T> = Result<T, CatalogError>;
