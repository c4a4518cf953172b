//! Modal visibility registry.
//!
//! Every modal surface has one flag in a single registry. Flags are only
//! changed through [`ModalRegistry::open`], [`ModalRegistry::close`] and
//! [`ModalRegistry::close_all`], so at most one modal is ever visible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalName {
    AiHub,
    PredictiveAnalytics,
    WorkflowEngine,
    SmartRoutingPanel,
    BudgetModal,
    TasksModal,
    CollaborateModal,
    QuickExportModal,
    ShareModal,
    VoiceCommand,
    SmartSearch,
    IotDashboard,
    TemplateLibrary,
    DeployModal,
    CodeOptimizeModal,
    #[serde(rename = "timelineAIOptimize")]
    TimelineAiOptimize,
    ExportModal,
    AgentModal,
}

impl ModalName {
    pub const COUNT: usize = 18;

    pub fn all() -> &'static [ModalName; Self::COUNT] {
        &[
            ModalName::AiHub,
            ModalName::PredictiveAnalytics,
            ModalName::WorkflowEngine,
            ModalName::SmartRoutingPanel,
            ModalName::BudgetModal,
            ModalName::TasksModal,
            ModalName::CollaborateModal,
            ModalName::QuickExportModal,
            ModalName::ShareModal,
            ModalName::VoiceCommand,
            ModalName::SmartSearch,
            ModalName::IotDashboard,
            ModalName::TemplateLibrary,
            ModalName::DeployModal,
            ModalName::CodeOptimizeModal,
            ModalName::TimelineAiOptimize,
            ModalName::ExportModal,
            ModalName::AgentModal,
        ]
    }

    /// Registry key, as typed into the command palette.
    pub fn key(&self) -> &'static str {
        match self {
            ModalName::AiHub => "aiHub",
            ModalName::PredictiveAnalytics => "predictiveAnalytics",
            ModalName::WorkflowEngine => "workflowEngine",
            ModalName::SmartRoutingPanel => "smartRoutingPanel",
            ModalName::BudgetModal => "budgetModal",
            ModalName::TasksModal => "tasksModal",
            ModalName::CollaborateModal => "collaborateModal",
            ModalName::QuickExportModal => "quickExportModal",
            ModalName::ShareModal => "shareModal",
            ModalName::VoiceCommand => "voiceCommand",
            ModalName::SmartSearch => "smartSearch",
            ModalName::IotDashboard => "iotDashboard",
            ModalName::TemplateLibrary => "templateLibrary",
            ModalName::DeployModal => "deployModal",
            ModalName::CodeOptimizeModal => "codeOptimizeModal",
            ModalName::TimelineAiOptimize => "timelineAIOptimize",
            ModalName::ExportModal => "exportModal",
            ModalName::AgentModal => "agentModal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalName::AiHub => "AI Hub",
            ModalName::PredictiveAnalytics => "Predictive Analytics",
            ModalName::WorkflowEngine => "Workflow Engine",
            ModalName::SmartRoutingPanel => "Smart Routing",
            ModalName::BudgetModal => "Budget",
            ModalName::TasksModal => "Tasks",
            ModalName::CollaborateModal => "Collaborate",
            ModalName::QuickExportModal => "Quick Export",
            ModalName::ShareModal => "Share",
            ModalName::VoiceCommand => "Voice Command",
            ModalName::SmartSearch => "Smart Search",
            ModalName::IotDashboard => "IoT Dashboard",
            ModalName::TemplateLibrary => "Template Library",
            ModalName::DeployModal => "Deploy",
            ModalName::CodeOptimizeModal => "Code Optimize",
            ModalName::TimelineAiOptimize => "Timeline AI Optimize",
            ModalName::ExportModal => "Export",
            ModalName::AgentModal => "Agent Inspector",
        }
    }

    /// Modals whose body is a text input.
    pub fn takes_text_input(&self) -> bool {
        matches!(self, ModalName::VoiceCommand | ModalName::SmartSearch)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ModalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Error when a string names no registered modal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown modal: {0}")]
pub struct UnknownModal(pub String);

impl FromStr for ModalName {
    type Err = UnknownModal;

    /// Only exact registry keys parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModalName::all()
            .iter()
            .copied()
            .find(|name| name.key() == s)
            .ok_or_else(|| UnknownModal(s.to_string()))
    }
}

impl ModalName {
    /// Loose match for spoken phrases: surrounding space and case are ignored.
    pub fn from_phrase(phrase: &str) -> Option<ModalName> {
        let trimmed = phrase.trim();
        ModalName::all()
            .iter()
            .copied()
            .find(|name| name.key().eq_ignore_ascii_case(trimmed))
    }
}

/// Visibility flag per modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalRegistry {
    flags: [bool; ModalName::COUNT],
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_all(&mut self) {
        self.flags = [false; ModalName::COUNT];
    }

    /// Show `name` and hide every other modal in one update.
    pub fn open(&mut self, name: ModalName) {
        let mut flags = [false; ModalName::COUNT];
        flags[name.index()] = true;
        self.flags = flags;
        tracing::debug!(modal = %name, "Modal opened");
    }

    /// String entry point. Names outside the registry are ignored and leave
    /// every flag untouched; returns whether a modal was opened.
    pub fn open_by_name(&mut self, name: &str) -> bool {
        match name.parse::<ModalName>() {
            Ok(modal) => {
                self.open(modal);
                true
            }
            Err(err) => {
                tracing::debug!(%err, "Ignoring open request");
                false
            }
        }
    }

    pub fn close(&mut self, name: ModalName) {
        self.flags[name.index()] = false;
    }

    pub fn is_open(&self, name: ModalName) -> bool {
        self.flags[name.index()]
    }

    /// The visible modal, if any.
    pub fn visible(&self) -> Option<ModalName> {
        ModalName::all()
            .iter()
            .copied()
            .find(|name| self.flags[name.index()])
    }

    pub fn visible_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ModalName, bool)> + '_ {
        ModalName::all()
            .iter()
            .map(move |name| (*name, self.flags[name.index()]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registry_has_everything_hidden() {
        let registry = ModalRegistry::new();
        assert_eq!(registry.visible_count(), 0);
        assert_eq!(registry.visible(), None);
    }

    #[test]
    fn open_hides_the_previous_modal() {
        let mut registry = ModalRegistry::new();
        registry.open(ModalName::AiHub);
        registry.open(ModalName::BudgetModal);
        assert!(!registry.is_open(ModalName::AiHub));
        assert!(registry.is_open(ModalName::BudgetModal));
        assert_eq!(registry.visible_count(), 1);
    }

    #[test]
    fn agent_inspector_takes_part_in_exclusivity() {
        let mut registry = ModalRegistry::new();
        registry.open(ModalName::AgentModal);
        registry.open(ModalName::TasksModal);
        assert_eq!(registry.visible(), Some(ModalName::TasksModal));
    }

    #[test]
    fn close_only_touches_its_own_flag() {
        let mut registry = ModalRegistry::new();
        registry.open(ModalName::ShareModal);
        registry.close(ModalName::AiHub);
        assert!(registry.is_open(ModalName::ShareModal));
        registry.close(ModalName::ShareModal);
        assert_eq!(registry.visible_count(), 0);
    }

    #[test]
    fn close_all_is_idempotent() {
        let mut registry = ModalRegistry::new();
        registry.open(ModalName::DeployModal);
        registry.close_all();
        let once = registry;
        registry.close_all();
        assert_eq!(registry, once);
        assert_eq!(registry.visible_count(), 0);
    }

    #[test]
    fn unknown_name_leaves_registry_unchanged() {
        let mut registry = ModalRegistry::new();
        registry.open(ModalName::IotDashboard);
        let before = registry;
        assert!(!registry.open_by_name("doesNotExist"));
        assert_eq!(registry, before);
    }

    #[test]
    fn names_parse_from_registry_keys() {
        for name in ModalName::all() {
            assert_eq!(name.key().parse::<ModalName>(), Ok(*name));
        }
        assert!("timelineaioptimize".parse::<ModalName>().is_err());
        assert_eq!(
            ModalName::from_phrase(" timelineaioptimize "),
            Some(ModalName::TimelineAiOptimize)
        );
    }

    #[test]
    fn case_and_padding_variants_are_not_registry_keys() {
        let mut registry = ModalRegistry::new();
        registry.open(ModalName::ShareModal);
        let before = registry;
        for variant in ["AIHUB", "aihub", "  timelineaioptimize ", " aiHub", "aiHub\n"] {
            assert!(!registry.open_by_name(variant), "{variant:?} opened a modal");
            assert_eq!(registry, before);
        }
        assert!(registry.open_by_name("aiHub"));
        assert_eq!(registry.visible(), Some(ModalName::AiHub));
    }

    #[test]
    fn serde_names_match_registry_keys() {
        for name in ModalName::all() {
            let json = serde_json::to_string(name).unwrap();
            assert_eq!(json, format!("\"{}\"", name.key()));
        }
    }

    #[test]
    fn indices_match_declaration_order() {
        for (position, name) in ModalName::all().iter().enumerate() {
            assert_eq!(name.index(), position);
        }
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_modal_name() -> impl Strategy<Value = ModalName> {
        proptest::sample::select(ModalName::all().to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: after every open, exactly the opened modal is visible.
        #[test]
        fn prop_open_sequence_keeps_one_visible(names in prop::collection::vec(arb_modal_name(), 1..40)) {
            let mut registry = ModalRegistry::new();
            for name in names {
                registry.open(name);
                prop_assert_eq!(registry.visible_count(), 1);
                prop_assert_eq!(registry.visible(), Some(name));
                for (other, visible) in registry.iter() {
                    prop_assert_eq!(visible, other == name);
                }
            }
        }

        /// Property: any spelling other than the exact key is a no-op.
        #[test]
        fn prop_case_variants_are_noops(
            name in arb_modal_name(),
            pad in "[ \t]{0,2}",
            upper in prop::bool::ANY,
        ) {
            let key = if upper { name.key().to_uppercase() } else { name.key().to_lowercase() };
            let variant = format!("{pad}{key}{pad}");
            prop_assume!(variant != name.key());
            let mut registry = ModalRegistry::new();
            let before = registry;
            prop_assert!(!registry.open_by_name(&variant));
            prop_assert_eq!(registry, before);
        }

        /// Property: random garbage never changes the registry.
        #[test]
        fn prop_unknown_names_are_noops(
            start in proptest::option::of(arb_modal_name()),
            garbage in "[a-z]{1,6}[0-9]{1,3}",
        ) {
            let mut registry = ModalRegistry::new();
            if let Some(name) = start {
                registry.open(name);
            }
            let before = registry;
            prop_assert!(!registry.open_by_name(&garbage));
            prop_assert_eq!(registry, before);
        }
    }
}
