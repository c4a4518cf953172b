//! Agent list view-model: filtered, sorted projections of the catalog.

use housei_core::{Agent, AgentStatus};
use std::cmp::Ordering;
use std::fmt;

/// Status filter for the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentFilter {
    #[default]
    All,
    Status(AgentStatus),
    /// A filter string that names no status; matches nothing.
    Unmatched,
}

impl AgentFilter {
    /// Exactly `"all"` or a status name as serialized. Anything else,
    /// including case or punctuation variants, matches no agent.
    pub fn from_name(name: &str) -> Self {
        if name == "all" {
            return AgentFilter::All;
        }
        AgentStatus::all()
            .iter()
            .find(|status| status.as_str() == name)
            .map(|status| AgentFilter::Status(*status))
            .unwrap_or(AgentFilter::Unmatched)
    }

    pub fn matches(&self, agent: &Agent) -> bool {
        match self {
            AgentFilter::All => true,
            AgentFilter::Status(status) => agent.status == *status,
            AgentFilter::Unmatched => false,
        }
    }

    /// Next value in the key-binding cycle: all, then each status.
    pub fn next(&self) -> Self {
        let statuses = AgentStatus::all();
        match self {
            AgentFilter::All | AgentFilter::Unmatched => AgentFilter::Status(statuses[0]),
            AgentFilter::Status(current) => statuses
                .iter()
                .position(|s| s == current)
                .and_then(|idx| statuses.get(idx + 1))
                .map(|s| AgentFilter::Status(*s))
                .unwrap_or(AgentFilter::All),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgentFilter::All => "all",
            AgentFilter::Status(status) => status.as_str(),
            AgentFilter::Unmatched => "none",
        }
    }
}

impl fmt::Display for AgentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Completion,
    Response,
    Workload,
    Efficiency,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Name,
            SortKey::Completion,
            SortKey::Response,
            SortKey::Workload,
            SortKey::Efficiency,
        ]
    }

    /// Unrecognised keys sort by name.
    /// Exact sort label; anything else sorts by name.
    pub fn from_name(name: &str) -> Self {
        SortKey::all()
            .iter()
            .copied()
            .find(|key| key.label() == name)
            .unwrap_or(SortKey::Name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Completion => "completion",
            SortKey::Response => "response",
            SortKey::Workload => "workload",
            SortKey::Efficiency => "efficiency",
        }
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|k| k == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    fn compare(&self, a: &Agent, b: &Agent) -> Ordering {
        match self {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::Completion => b.completion_rate.total_cmp(&a.completion_rate),
            SortKey::Response => a.response_time.total_cmp(&b.response_time),
            SortKey::Workload => b.workload.total_cmp(&a.workload),
            SortKey::Efficiency => b.efficiency.total_cmp(&a.efficiency),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Case-folded comparison first so "bea" sorts beside "Bea", exact order
/// breaks the remaining ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Agents passing `filter`, ordered by `sort`. The input is left untouched
/// and equal keys keep their catalog order.
pub fn project<'a>(agents: &'a [Agent], filter: AgentFilter, sort: SortKey) -> Vec<&'a Agent> {
    let mut projected: Vec<&Agent> = agents.iter().filter(|a| filter.matches(a)).collect();
    projected.sort_by(|a, b| sort.compare(a, b));
    projected
}

/// String form of [`project`], for callers holding raw selections.
pub fn project_by_name<'a>(agents: &'a [Agent], filter: &str, sort: &str) -> Vec<&'a Agent> {
    project(agents, AgentFilter::from_name(filter), SortKey::from_name(sort))
}

/// Case-insensitive substring search over name, role, task and category.
/// An empty query matches every agent.
pub fn search<'a>(agents: &'a [Agent], query: &str) -> Vec<&'a Agent> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return agents.iter().collect();
    }
    agents
        .iter()
        .filter(|agent| {
            [&agent.name, &agent.role, &agent.task, &agent.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
