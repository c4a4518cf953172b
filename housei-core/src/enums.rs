//! Enum types for HOUSEI entities

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn normalize_token(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-' && *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

// ============================================================================
// AGENT ENUMS
// ============================================================================

/// Working state of an agent as shown on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Active,
    Working,
    Thinking,
    Idle,
}

impl AgentStatus {
    pub fn all() -> &'static [AgentStatus] {
        &[
            AgentStatus::Active,
            AgentStatus::Working,
            AgentStatus::Thinking,
            AgentStatus::Idle,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Working => "working",
            AgentStatus::Thinking => "thinking",
            AgentStatus::Idle => "idle",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "active" => Ok(AgentStatus::Active),
            "working" => Ok(AgentStatus::Working),
            "thinking" => Ok(AgentStatus::Thinking),
            "idle" => Ok(AgentStatus::Idle),
            _ => Err(ParseEnumError::new("AgentStatus", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for Priority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParseEnumError::new("Priority", s)),
        }
    }
}

// ============================================================================
// CHAT ENUMS
// ============================================================================

/// Status badge attached to a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStatus {
    #[serde(rename = "OK")]
    Ok,
    Working,
    Thinking,
    Ready,
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            MessageStatus::Ok => "OK",
            MessageStatus::Working => "Working",
            MessageStatus::Thinking => "Thinking",
            MessageStatus::Ready => "Ready",
        };
        write!(f, "{}", value)
    }
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Agent,
    System,
}

// ============================================================================
// PLAN ENUMS
// ============================================================================

/// Progress state shared by phases, timeline tasks and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    Completed,
    InProgress,
    Pending,
    Blocked,
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            WorkStatus::Completed => "completed",
            WorkStatus::InProgress => "in progress",
            WorkStatus::Pending => "pending",
            WorkStatus::Blocked => "blocked",
        };
        write!(f, "{}", value)
    }
}

impl FromStr for WorkStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "completed" | "complete" | "done" => Ok(WorkStatus::Completed),
            "inprogress" | "active" => Ok(WorkStatus::InProgress),
            "pending" | "todo" => Ok(WorkStatus::Pending),
            "blocked" => Ok(WorkStatus::Blocked),
            _ => Err(ParseEnumError::new("WorkStatus", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    AtRisk,
    OverBudget,
    UnderBudget,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            BudgetStatus::OnTrack => "on track",
            BudgetStatus::AtRisk => "at risk",
            BudgetStatus::OverBudget => "over budget",
            BudgetStatus::UnderBudget => "under budget",
        };
        write!(f, "{}", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Normal,
    Warning,
    Critical,
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SensorStatus::Normal => "normal",
            SensorStatus::Warning => "warning",
            SensorStatus::Critical => "critical",
        };
        write!(f, "{}", value)
    }
}

/// Error when parsing an enum from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_status_round_trips_through_display() {
        for status in AgentStatus::all() {
            let parsed: AgentStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn agent_status_parse_is_case_insensitive() {
        assert_eq!("ACTIVE".parse::<AgentStatus>(), Ok(AgentStatus::Active));
        assert_eq!(" Idle ".parse::<AgentStatus>(), Ok(AgentStatus::Idle));
    }

    #[test]
    fn unknown_agent_status_is_rejected() {
        let err = "sleeping".parse::<AgentStatus>().unwrap_err();
        assert_eq!(err.kind, "AgentStatus");
        assert_eq!(err.value, "sleeping");
    }

    #[test]
    fn work_status_accepts_aliases() {
        assert_eq!("in_progress".parse::<WorkStatus>(), Ok(WorkStatus::InProgress));
        assert_eq!("done".parse::<WorkStatus>(), Ok(WorkStatus::Completed));
    }

    #[test]
    fn message_status_serializes_ok_in_caps() {
        let json = serde_json::to_string(&MessageStatus::Ok).unwrap();
        assert_eq!(json, "\"OK\"");
    }
}
