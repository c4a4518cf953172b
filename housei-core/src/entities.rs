//! Catalog records.
//!
//! Plain data with serde derives. Nothing here mutates after the catalog is
//! built; views only borrow these.

use crate::enums::{
    AgentStatus, BudgetStatus, MessageRole, MessageStatus, Priority, SensorStatus, WorkStatus,
};
use serde::{Deserialize, Serialize};

pub type AgentId = u32;

// ============================================================================
// AGENTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub status: AgentStatus,
    pub task: String,
    #[serde(default)]
    pub metrics: Vec<AgentMetric>,
    pub category: String,
    pub priority: Priority,
    /// Percent of capacity in use, 0-100.
    pub workload: f64,
    /// Mean response time in seconds.
    pub response_time: f64,
    pub completion_rate: f64,
    pub learning_progress: f64,
    pub efficiency: f64,
}

/// A (value, label) pair shown under an agent card, e.g. ("24", "Listings").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMetric {
    pub value: String,
    pub label: String,
}

// ============================================================================
// CHAT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub role: MessageRole,
    pub content: String,
    pub status: MessageStatus,
    pub timestamp: String,
}

// ============================================================================
// PLAN
// ============================================================================

/// Dates are display strings and are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    pub status: WorkStatus,
    pub progress: u8,
    pub assignee: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineTask {
    pub id: String,
    pub phase_id: String,
    pub name: String,
    pub start: String,
    pub end: String,
    pub status: WorkStatus,
    pub progress: u8,
    pub assignee: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub status: WorkStatus,
    pub due_date: String,
    pub progress: u8,
    pub hours: f64,
}

// ============================================================================
// BUDGET
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub category: String,
    pub budgeted: f64,
    pub actual: f64,
    pub status: BudgetStatus,
}

impl BudgetItem {
    /// Positive when spending exceeds the plan.
    pub fn variance(&self) -> f64 {
        self.actual - self.budgeted
    }

    pub fn variance_percent(&self) -> f64 {
        if self.budgeted == 0.0 {
            0.0
        } else {
            self.variance() / self.budgeted * 100.0
        }
    }
}

/// Aggregate over a set of budget lines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetSummary {
    pub budgeted: f64,
    pub actual: f64,
}

impl BudgetSummary {
    pub fn from_items(items: &[BudgetItem]) -> Self {
        items.iter().fold(Self::default(), |acc, item| Self {
            budgeted: acc.budgeted + item.budgeted,
            actual: acc.actual + item.actual,
        })
    }

    pub fn variance(&self) -> f64 {
        self.actual - self.budgeted
    }
}

// ============================================================================
// MODAL FEEDS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub detail: String,
    pub confidence: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartRoutingEvent {
    pub request: String,
    pub routed_to: String,
    pub reason: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollaborationMember {
    pub name: String,
    pub role: String,
    pub online: bool,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareOption {
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub category: String,
    pub description: String,
    pub agents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictiveData {
    pub metric: String,
    pub current: f64,
    pub predicted: f64,
    pub unit: String,
    pub confidence: f64,
}

impl PredictiveData {
    pub fn delta(&self) -> f64 {
        self.predicted - self.current
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub sensor: String,
    pub location: String,
    pub value: f64,
    pub unit: String,
    pub status: SensorStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployTarget {
    pub name: String,
    pub environment: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportFormat {
    pub name: String,
    pub extension: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeDocument {
    pub file_name: String,
    pub language: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub detail: String,
    pub impact: String,
}
