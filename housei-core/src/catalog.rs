//! The Entity Catalog.
//!
//! A catalog is deserialized from JSON into [`CatalogData`], validated, and
//! frozen into an [`EntityCatalog`]. The built-in mock catalog is embedded at
//! compile time; hosts can inject any other catalog file instead.

use crate::entities::*;
use crate::error::{
    CatalogError, CatalogResult, DanglingReference, ReferenceSource, ValidationError,
};
use crate::enums::MessageRole;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// What to do with agent names that do not resolve to a catalog agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Keep the record and display the raw name.
    #[default]
    Permissive,
    /// Refuse to build the catalog.
    Strict,
}

/// Raw catalog contents as they appear on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogData {
    #[serde(default)]
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub timeline_tasks: Vec<TimelineTask>,
    #[serde(default)]
    pub budget_items: Vec<BudgetItem>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub routing_events: Vec<SmartRoutingEvent>,
    #[serde(default)]
    pub collaboration_members: Vec<CollaborationMember>,
    #[serde(default)]
    pub share_options: Vec<ShareOption>,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub predictive_data: Vec<PredictiveData>,
    #[serde(default)]
    pub sensors: Vec<SensorReading>,
    #[serde(default)]
    pub deploy_targets: Vec<DeployTarget>,
    #[serde(default)]
    pub export_formats: Vec<ExportFormat>,
    #[serde(default)]
    pub code_documents: Vec<CodeDocument>,
    #[serde(default)]
    pub code_suggestions: Vec<Suggestion>,
    #[serde(default)]
    pub timeline_suggestions: Vec<Suggestion>,
}

/// Validated, read-only catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCatalog {
    data: CatalogData,
    dangling: Vec<DanglingReference>,
}

impl EntityCatalog {
    /// Validate `data` and apply the reference policy.
    pub fn new(data: CatalogData, policy: ReferencePolicy) -> CatalogResult<Self> {
        validate(&data)?;
        let dangling = find_dangling_references(&data);
        if policy == ReferencePolicy::Strict && !dangling.is_empty() {
            return Err(CatalogError::DanglingReferences(dangling));
        }
        Ok(Self { data, dangling })
    }

    pub fn builtin(policy: ReferencePolicy) -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG, policy)
    }

    pub fn from_json_str(json: &str, policy: ReferencePolicy) -> CatalogResult<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data, policy)
    }

    pub fn from_path(path: &Path, policy: ReferencePolicy) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents, policy)
    }

    /// References that did not resolve. Always empty under the strict policy.
    pub fn dangling_references(&self) -> &[DanglingReference] {
        &self.dangling
    }

    pub fn agent_by_name(&self, name: &str) -> Option<&Agent> {
        self.data.agents.iter().find(|agent| agent.name == name)
    }

    pub fn agent_by_id(&self, id: AgentId) -> Option<&Agent> {
        self.data.agents.iter().find(|agent| agent.id == id)
    }

    pub fn timeline_tasks_for_phase<'a>(
        &'a self,
        phase_id: &'a str,
    ) -> impl Iterator<Item = &'a TimelineTask> + 'a {
        self.data
            .timeline_tasks
            .iter()
            .filter(move |task| task.phase_id == phase_id)
    }

    pub fn budget_summary(&self) -> BudgetSummary {
        BudgetSummary::from_items(&self.data.budget_items)
    }

    pub fn agents(&self) -> &[Agent] {
        &self.data.agents
    }

    pub fn messages(&self) -> &[Message] {
        &self.data.messages
    }

    pub fn phases(&self) -> &[Phase] {
        &self.data.phases
    }

    pub fn timeline_tasks(&self) -> &[TimelineTask] {
        &self.data.timeline_tasks
    }

    pub fn budget_items(&self) -> &[BudgetItem] {
        &self.data.budget_items
    }

    pub fn tasks(&self) -> &[Task] {
        &self.data.tasks
    }

    pub fn insights(&self) -> &[Insight] {
        &self.data.insights
    }

    pub fn routing_events(&self) -> &[SmartRoutingEvent] {
        &self.data.routing_events
    }

    pub fn collaboration_members(&self) -> &[CollaborationMember] {
        &self.data.collaboration_members
    }

    pub fn share_options(&self) -> &[ShareOption] {
        &self.data.share_options
    }

    pub fn templates(&self) -> &[Template] {
        &self.data.templates
    }

    pub fn predictive_data(&self) -> &[PredictiveData] {
        &self.data.predictive_data
    }

    pub fn sensors(&self) -> &[SensorReading] {
        &self.data.sensors
    }

    pub fn deploy_targets(&self) -> &[DeployTarget] {
        &self.data.deploy_targets
    }

    pub fn export_formats(&self) -> &[ExportFormat] {
        &self.data.export_formats
    }

    pub fn code_documents(&self) -> &[CodeDocument] {
        &self.data.code_documents
    }

    pub fn code_suggestions(&self) -> &[Suggestion] {
        &self.data.code_suggestions
    }

    pub fn timeline_suggestions(&self) -> &[Suggestion] {
        &self.data.timeline_suggestions
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

fn validate(data: &CatalogData) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for agent in &data.agents {
        if !seen.insert(agent.id) {
            return Err(ValidationError::DuplicateAgentId { id: agent.id });
        }
        check_percent(&agent.name, "workload", agent.workload)?;
        check_percent(&agent.name, "completion_rate", agent.completion_rate)?;
        check_percent(&agent.name, "learning_progress", agent.learning_progress)?;
        check_percent(&agent.name, "efficiency", agent.efficiency)?;
        if !agent.response_time.is_finite() || agent.response_time <= 0.0 {
            return Err(ValidationError::InvalidValue {
                owner: agent.name.clone(),
                field: "response_time",
                reason: format!("must be a positive number of seconds, got {}", agent.response_time),
            });
        }
    }

    for item in &data.budget_items {
        for (field, amount) in [("budgeted", item.budgeted), ("actual", item.actual)] {
            if !amount.is_finite() || amount < 0.0 {
                return Err(ValidationError::InvalidValue {
                    owner: item.category.clone(),
                    field,
                    reason: format!("must be a non-negative amount, got {}", amount),
                });
            }
        }
    }

    for task in &data.tasks {
        check_percent(&task.title, "progress", f64::from(task.progress))?;
    }
    for phase in &data.phases {
        check_percent(&phase.name, "progress", f64::from(phase.progress))?;
    }
    for task in &data.timeline_tasks {
        check_percent(&task.name, "progress", f64::from(task.progress))?;
    }

    Ok(())
}

fn check_percent(owner: &str, field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            owner: owner.to_string(),
            field,
            value,
            min: 0.0,
            max: 100.0,
        })
    }
}

fn find_dangling_references(data: &CatalogData) -> Vec<DanglingReference> {
    let known: HashSet<&str> = data.agents.iter().map(|agent| agent.name.as_str()).collect();
    let mut dangling = Vec::new();
    let mut check = |source: ReferenceSource, owner: &str, agent_name: &str| {
        if !known.contains(agent_name) {
            dangling.push(DanglingReference {
                source,
                owner: owner.to_string(),
                agent_name: agent_name.to_string(),
            });
        }
    };

    for message in &data.messages {
        if message.role == MessageRole::Agent {
            check(ReferenceSource::Message, &message.timestamp, &message.sender);
        }
    }
    for phase in &data.phases {
        check(ReferenceSource::Phase, &phase.id, &phase.assignee);
    }
    for task in &data.timeline_tasks {
        check(ReferenceSource::TimelineTask, &task.id, &task.assignee);
    }
    for task in &data.tasks {
        check(ReferenceSource::Task, &task.title, &task.assignee);
    }
    for event in &data.routing_events {
        check(ReferenceSource::RoutingEvent, &event.request, &event.routed_to);
    }
    for template in &data.templates {
        for agent in &template.agents {
            check(ReferenceSource::Template, &template.name, agent);
        }
    }

    dangling
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{AgentStatus, Priority, WorkStatus};

    fn agent(id: AgentId, name: &str) -> Agent {
        Agent {
            id,
            name: name.to_string(),
            role: "Estimator".to_string(),
            avatar: "E".to_string(),
            status: AgentStatus::Active,
            task: "Pricing lumber".to_string(),
            metrics: Vec::new(),
            category: "cost".to_string(),
            priority: Priority::Medium,
            workload: 50.0,
            response_time: 1.5,
            completion_rate: 90.0,
            learning_progress: 40.0,
            efficiency: 85.0,
        }
    }

    fn task(title: &str, assignee: &str) -> Task {
        Task {
            id: 1,
            title: title.to_string(),
            description: String::new(),
            assignee: assignee.to_string(),
            priority: Priority::High,
            status: WorkStatus::Pending,
            due_date: "2024-03-01".to_string(),
            progress: 0,
            hours: 4.0,
        }
    }

    #[test]
    fn builtin_catalog_is_valid_and_fully_linked() {
        let catalog = EntityCatalog::builtin(ReferencePolicy::Strict).unwrap();
        assert!(!catalog.agents().is_empty());
        assert!(!catalog.messages().is_empty());
        assert!(!catalog.phases().is_empty());
        assert!(!catalog.budget_items().is_empty());
        assert!(catalog.dangling_references().is_empty());
    }

    #[test]
    fn duplicate_agent_ids_are_rejected() {
        let data = CatalogData {
            agents: vec![agent(1, "Aria"), agent(1, "Bea")],
            ..CatalogData::default()
        };
        let err = EntityCatalog::new(data, ReferencePolicy::Permissive).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::DuplicateAgentId { id: 1 })
        ));
    }

    #[test]
    fn percentage_above_hundred_is_rejected() {
        let mut bad = agent(1, "Aria");
        bad.efficiency = 101.0;
        let data = CatalogData {
            agents: vec![bad],
            ..CatalogData::default()
        };
        let err = EntityCatalog::new(data, ReferencePolicy::Permissive).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::OutOfRange { field: "efficiency", .. })
        ));
    }

    #[test]
    fn non_positive_response_time_is_rejected() {
        let mut bad = agent(1, "Aria");
        bad.response_time = 0.0;
        let data = CatalogData {
            agents: vec![bad],
            ..CatalogData::default()
        };
        assert!(EntityCatalog::new(data, ReferencePolicy::Permissive).is_err());
    }

    #[test]
    fn permissive_policy_keeps_dangling_references() {
        let data = CatalogData {
            agents: vec![agent(1, "Aria")],
            tasks: vec![task("Pour footings", "Ghost")],
            ..CatalogData::default()
        };
        let catalog = EntityCatalog::new(data, ReferencePolicy::Permissive).unwrap();
        assert_eq!(catalog.dangling_references().len(), 1);
        let reference = &catalog.dangling_references()[0];
        assert_eq!(reference.source, ReferenceSource::Task);
        assert_eq!(reference.agent_name, "Ghost");
        assert_eq!(catalog.tasks()[0].assignee, "Ghost");
    }

    #[test]
    fn strict_policy_fails_on_dangling_references() {
        let data = CatalogData {
            agents: vec![agent(1, "Aria")],
            tasks: vec![task("Pour footings", "Ghost")],
            ..CatalogData::default()
        };
        let err = EntityCatalog::new(data, ReferencePolicy::Strict).unwrap_err();
        match err {
            CatalogError::DanglingReferences(refs) => assert_eq!(refs.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        let err = EntityCatalog::from_json_str(r#"{"widgets": []}"#, ReferencePolicy::Permissive)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn catalog_loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, BUILTIN_CATALOG).unwrap();
        let catalog = EntityCatalog::from_path(&path, ReferencePolicy::Permissive).unwrap();
        assert_eq!(
            catalog.agents().len(),
            EntityCatalog::builtin(ReferencePolicy::Permissive)
                .unwrap()
                .agents()
                .len()
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EntityCatalog::from_path(
            Path::new("/nonexistent/housei/catalog.json"),
            ReferencePolicy::Permissive,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn timeline_tasks_group_by_phase() {
        let catalog = EntityCatalog::builtin(ReferencePolicy::Permissive).unwrap();
        let phase = &catalog.phases()[0];
        assert!(catalog
            .timeline_tasks_for_phase(&phase.id)
            .all(|task| task.phase_id == phase.id));
    }
}
