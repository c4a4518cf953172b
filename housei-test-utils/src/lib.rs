//! HOUSEI Test Utilities
//!
//! Shared test infrastructure for the HOUSEI workspace:
//! - Proptest generators for catalog records
//! - Fixtures for common scenarios

pub use housei_core::{
    Agent, AgentId, AgentMetric, AgentStatus, CatalogData, EntityCatalog, Priority,
    ReferencePolicy,
};

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub mod generators {
    //! Proptest strategies for generating HOUSEI records.

    use super::*;
    use proptest::prelude::*;

    /// Generate an AgentStatus variant.
    pub fn arb_agent_status() -> impl Strategy<Value = AgentStatus> {
        prop_oneof![
            Just(AgentStatus::Active),
            Just(AgentStatus::Working),
            Just(AgentStatus::Thinking),
            Just(AgentStatus::Idle),
        ]
    }

    pub fn arb_priority() -> impl Strategy<Value = Priority> {
        prop_oneof![Just(Priority::High), Just(Priority::Medium), Just(Priority::Low)]
    }

    /// Generate a percentage in [0, 100].
    pub fn arb_percent() -> impl Strategy<Value = f64> {
        0.0f64..=100.0f64
    }

    /// Generate a positive response time in seconds.
    pub fn arb_response_time() -> impl Strategy<Value = f64> {
        0.05f64..30.0f64
    }

    /// Generate an agent with the given id and otherwise arbitrary fields.
    pub fn arb_agent(id: AgentId) -> impl Strategy<Value = Agent> {
        (
            "[A-Z][a-z]{1,9}",
            arb_agent_status(),
            arb_priority(),
            arb_percent(),
            arb_response_time(),
            arb_percent(),
            arb_percent(),
            arb_percent(),
        )
            .prop_map(
                move |(
                    name,
                    status,
                    priority,
                    workload,
                    response_time,
                    completion_rate,
                    learning_progress,
                    efficiency,
                )| Agent {
                    id,
                    avatar: name.chars().next().map(String::from).unwrap_or_default(),
                    name,
                    role: "Generated Agent".to_string(),
                    status,
                    task: "Generated task".to_string(),
                    metrics: Vec::new(),
                    category: "generated".to_string(),
                    priority,
                    workload,
                    response_time,
                    completion_rate,
                    learning_progress,
                    efficiency,
                },
            )
    }

    /// Generate a list of agents with distinct ids `0..len`.
    pub fn arb_agents(max_len: usize) -> impl Strategy<Value = Vec<Agent>> {
        (0..=max_len).prop_flat_map(|len| {
            (0..len)
                .map(|id| arb_agent(id as AgentId))
                .collect::<Vec<_>>()
        })
    }
}

// ============================================================================
// FIXTURES
// ============================================================================

pub mod fixtures {
    //! Hand-written records for example-based tests.

    use super::*;

    /// An agent with neutral defaults for every field not given.
    pub fn agent(id: AgentId, name: &str, status: AgentStatus) -> Agent {
        Agent {
            id,
            name: name.to_string(),
            role: "Estimator".to_string(),
            avatar: name.chars().next().map(String::from).unwrap_or_default(),
            status,
            task: format!("{} task", name),
            metrics: vec![AgentMetric {
                value: "1".to_string(),
                label: "Jobs".to_string(),
            }],
            category: "cost".to_string(),
            priority: Priority::Medium,
            workload: 50.0,
            response_time: 1.0,
            completion_rate: 80.0,
            learning_progress: 50.0,
            efficiency: 75.0,
        }
    }

    pub fn agent_with_completion(id: AgentId, name: &str, completion_rate: f64) -> Agent {
        Agent {
            completion_rate,
            ..agent(id, name, AgentStatus::Active)
        }
    }

    /// Zoe 87, Aria 88, Bea 89 completion, in that order.
    pub fn completion_trio() -> Vec<Agent> {
        vec![
            agent_with_completion(1, "Zoe", 87.0),
            agent_with_completion(2, "Aria", 88.0),
            agent_with_completion(3, "Bea", 89.0),
        ]
    }

    /// Agents with statuses active, working, idle, active, in that order.
    pub fn mixed_status_agents() -> Vec<Agent> {
        vec![
            agent(1, "Mona", AgentStatus::Active),
            agent(2, "Ned", AgentStatus::Working),
            agent(3, "Olga", AgentStatus::Idle),
            agent(4, "Abe", AgentStatus::Active),
        ]
    }

    pub fn catalog_with_agents(agents: Vec<Agent>) -> EntityCatalog {
        let data = CatalogData {
            agents,
            ..CatalogData::default()
        };
        match EntityCatalog::new(data, ReferencePolicy::Permissive) {
            Ok(catalog) => catalog,
            Err(err) => panic!("fixture catalog is invalid: {}", err),
        }
    }

    pub fn builtin_catalog() -> EntityCatalog {
        match EntityCatalog::builtin(ReferencePolicy::Strict) {
            Ok(catalog) => catalog,
            Err(err) => panic!("built-in catalog is invalid: {}", err),
        }
    }
}
