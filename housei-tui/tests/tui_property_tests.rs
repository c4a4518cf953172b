use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use housei_core::{AgentStatus, BudgetStatus, ReferencePolicy, SensorStatus, WorkStatus};
use housei_test_utils::fixtures::{builtin_catalog, completion_trio};
use housei_test_utils::generators::arb_agents;
use housei_tui::config::{ConfigError, LayoutConfig, ThemeConfig, TuiConfig};
use housei_tui::keys::{map_key, Action};
use housei_tui::layout::classify;
use housei_tui::modal::{ModalName, ModalRegistry};
use housei_tui::nav::MainView;
use housei_tui::projection::{project, project_by_name, AgentFilter, SortKey};
use housei_tui::state::App;
use housei_tui::theme::{
    agent_status_color, budget_status_color, sensor_status_color, utilization_color,
    work_status_color, BlueprintTheme,
};
use proptest::prelude::*;
use std::io::Write;

fn base_config() -> TuiConfig {
    TuiConfig {
        catalog_path: None,
        reference_policy: ReferencePolicy::Permissive,
        tick_rate_ms: 250,
        log_path: "tmp/housei-tui.log".into(),
        log_filter: None,
        theme: ThemeConfig {
            name: "blueprint".to_string(),
        },
        layout: LayoutConfig {
            cell_width_px: 8,
            mobile_below_px: 768,
            desktop_from_px: 1024,
        },
    }
}

const SAMPLE_TOML: &str = r#"
reference_policy = "strict"
tick_rate_ms = 100
log_path = "tmp/housei-tui.log"
log_filter = "housei_tui=debug"

[theme]
name = "blueprint"

[layout]
cell_width_px = 9
mobile_below_px = 768
desktop_from_px = 1024
"#;

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn base_config_is_valid() {
    assert!(base_config().validate().is_ok());
}

#[test]
fn config_requires_known_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "synthwave".to_string(),
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "theme.name", .. })
    ));
}

#[test]
fn config_rejects_inverted_breakpoints() {
    let mut config = base_config();
    config.layout.desktop_from_px = 700;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "layout.desktop_from_px", .. })
    ));
}

#[test]
fn config_loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_TOML.as_bytes()).unwrap();
    let config = TuiConfig::from_path(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.reference_policy, ReferencePolicy::Strict);
    assert_eq!(config.layout.cell_width_px, 9);
    assert_eq!(config.log_filter.as_deref(), Some("housei_tui=debug"));
    assert!(config.catalog_path.is_none());
}

#[test]
fn config_rejects_unknown_fields() {
    let toml = format!("{SAMPLE_TOML}\nrefresh_interval_ms = 10\n");
    assert!(matches!(
        TuiConfig::from_toml_str(&toml),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn config_rejects_missing_fields() {
    assert!(TuiConfig::from_toml_str("tick_rate_ms = 100\n").is_err());
}

proptest! {
    #[test]
    fn zero_tick_rate_rejected(cell in 1u16..32) {
        let mut config = base_config();
        config.tick_rate_ms = 0;
        config.layout.cell_width_px = cell;
        prop_assert!(config.validate().is_err());
    }

    #[test]
    fn ordered_breakpoints_accepted(mobile in 1u32..2000, gap in 0u32..2000) {
        let mut config = base_config();
        config.layout.mobile_below_px = mobile;
        config.layout.desktop_from_px = mobile + gap;
        prop_assert!(config.validate().is_ok());
    }

    // ========================================================================
    // KEYBINDINGS
    // ========================================================================

    #[test]
    fn keybinding_digit_switches_view(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let event = KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        let action = map_key(event);
        match ch {
            '1'..='3' => {
                let index = ch as usize - '1' as usize;
                prop_assert!(matches!(action, Some(Action::SwitchView(i)) if i == index));
            }
            _ => prop_assert!(action.is_none()),
        }
    }

    #[test]
    fn navigation_keys_consistent(use_vim in prop::bool::ANY) {
        let key = if use_vim {
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)
        } else {
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
        };
        prop_assert!(matches!(map_key(key), Some(Action::MoveDown)));
    }

    #[test]
    fn all_action_keys_mapped(key_char in "[qfsbmFcx:]") {
        let c = key_char.chars().next().unwrap();
        let event = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        prop_assert!(map_key(event).is_some(), "Key '{}' should map to an action", c);
    }

    // ========================================================================
    // STATUS COLORS
    // ========================================================================

    #[test]
    fn agent_status_colors_correct(status in prop::sample::select(AgentStatus::all().to_vec())) {
        let theme = BlueprintTheme::default();
        let expected = match status {
            AgentStatus::Active => theme.success,
            AgentStatus::Working => theme.primary,
            AgentStatus::Thinking => theme.secondary,
            AgentStatus::Idle => theme.text_dim,
        };
        prop_assert_eq!(agent_status_color(status, &theme), expected);
    }

    #[test]
    fn utilization_color_thresholds_correct(percent in 0.0f64..150.0f64) {
        let theme = BlueprintTheme::default();
        let color = utilization_color(percent, &theme);
        if percent < 70.0 {
            prop_assert_eq!(color, theme.success);
        } else if percent < 90.0 {
            prop_assert_eq!(color, theme.warning);
        } else {
            prop_assert_eq!(color, theme.error);
        }
    }

    // ========================================================================
    // PROJECTION
    // ========================================================================

    #[test]
    fn projection_is_repeatable(
        agents in arb_agents(12),
        sort in prop::sample::select(SortKey::all().to_vec()),
    ) {
        let first: Vec<_> = project(&agents, AgentFilter::All, sort).iter().map(|a| a.id).collect();
        let second: Vec<_> = project(&agents, AgentFilter::All, sort).iter().map(|a| a.id).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_sort_key_matches_name_order(agents in arb_agents(12), key in "[a-z]{3,10}") {
        prop_assume!(SortKey::all().iter().all(|k| k.label() != key));
        let unknown: Vec<_> = project_by_name(&agents, "all", &key).iter().map(|a| a.id).collect();
        let by_name: Vec<_> = project_by_name(&agents, "all", "name").iter().map(|a| a.id).collect();
        prop_assert_eq!(unknown, by_name);
    }
}

#[test]
fn boundary_colors() {
    let theme = BlueprintTheme::default();
    assert_eq!(utilization_color(69.9, &theme), theme.success);
    assert_eq!(utilization_color(70.0, &theme), theme.warning);
    assert_eq!(utilization_color(90.0, &theme), theme.error);
    assert_eq!(work_status_color(WorkStatus::Blocked, &theme), theme.error);
    assert_eq!(budget_status_color(BudgetStatus::OverBudget, &theme), theme.error);
    assert_eq!(sensor_status_color(SensorStatus::Critical, &theme), theme.error);
}

// ============================================================================
// DASHBOARD BEHAVIOUR
// ============================================================================

#[test]
fn completion_sort_orders_highest_first() {
    let agents = completion_trio();
    let names: Vec<_> = project_by_name(&agents, "all", "completion")
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, ["Bea", "Aria", "Zoe"]);
}

#[test]
fn breakpoint_edges() {
    assert!(classify(767, false).is_mobile);
    assert!(!classify(768, false).is_mobile);
    assert!(classify(1023, true).sidebar_collapsed);
    assert!(!classify(1023, false).sidebar_collapsed);
    assert!(!classify(1024, true).sidebar_collapsed);
}

#[test]
fn unknown_modal_name_leaves_registry_unchanged() {
    let mut registry = ModalRegistry::new();
    registry.open(ModalName::IotDashboard);
    let before = registry;
    assert!(!registry.open_by_name("doesNotExist"));
    assert_eq!(registry, before);
}

#[test]
fn app_walkthrough() {
    let mut app = App::new(base_config(), builtin_catalog(), 160);

    app.apply(Action::OpenModal(ModalName::BudgetModal));
    app.apply(Action::OpenModal(ModalName::TasksModal));
    assert_eq!(app.modals.visible(), Some(ModalName::TasksModal));
    assert_eq!(app.modals.visible_count(), 1);

    app.apply(Action::SwitchView(1));
    app.apply(Action::ToggleFullscreen);
    assert!(app.router.is_fullscreen());
    app.apply(Action::NextView);
    assert_eq!(app.router.main, MainView::Timeline);
    assert!(!app.router.is_fullscreen());
    assert_eq!(app.modals.visible(), Some(ModalName::TasksModal));

    app.apply(Action::CloseModal);
    assert_eq!(app.modals.visible(), None);

    app.on_resize(70);
    assert!(app.layout.is_mobile());
    app.apply(Action::Quit);
    assert!(app.should_quit);
}
