//! Application state and view state definitions.

use crate::config::TuiConfig;
use crate::keys::Action;
use crate::layout::{columns_to_px, LayoutState};
use crate::modal::{ModalName, ModalRegistry};
use crate::nav::{MainView, MobilePane, ViewRouter};
use crate::notifications::{Notification, NotificationLevel};
use crate::projection::{project, search, AgentFilter, SortKey};
use crate::theme::BlueprintTheme;
use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use housei_core::{Agent, AgentId, EntityCatalog, Message, MessageRole, MessageStatus};
use std::collections::HashSet;
use tui_textarea::TextArea;

/// Notifications older than this drop out of the footer.
const NOTIFICATION_TTL_SECS: i64 = 6;

/// Which text input, if any, receives raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    None,
    Chat,
    Command,
    /// The text field of the visible voice command or smart search modal.
    Modal,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: BlueprintTheme,
    pub catalog: EntityCatalog,
    pub router: ViewRouter,
    pub modals: ModalRegistry,
    pub layout: LayoutState,

    pub agent_view: AgentViewState,
    pub code_view: CodeViewState,
    pub timeline_view: TimelineViewState,
    pub chat: ChatState,

    pub command_palette: Option<TextArea<'static>>,
    pub modal_input: TextArea<'static>,
    /// Row highlighted inside list-style modals.
    pub modal_cursor: usize,
    pub focus: InputFocus,

    pub notifications: Vec<Notification>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TuiConfig, catalog: EntityCatalog, columns: u16) -> Self {
        for reference in catalog.dangling_references() {
            tracing::warn!(%reference, "Dangling agent reference, showing raw name");
        }
        let width = columns_to_px(columns, config.layout.cell_width_px);
        let layout = LayoutState::new(config.layout.breakpoints(), width);
        let chat = ChatState::new(catalog.messages().to_vec());
        let mut app = Self {
            config,
            theme: BlueprintTheme::blueprint(),
            catalog,
            router: ViewRouter::new(),
            modals: ModalRegistry::new(),
            layout,
            agent_view: AgentViewState::new(),
            code_view: CodeViewState::new(),
            timeline_view: TimelineViewState::new(),
            chat,
            command_palette: None,
            modal_input: TextArea::default(),
            modal_cursor: 0,
            focus: InputFocus::None,
            notifications: Vec::new(),
            should_quit: false,
        };
        app.agent_view.selected = app.visible_agents().first().map(|a| a.id);
        app.timeline_view.selected = app.catalog.phases().first().map(|p| p.id.clone());
        app
    }

    /// Agents shown in the card grid under the current filter and sort.
    pub fn visible_agents(&self) -> Vec<&Agent> {
        project(
            self.catalog.agents(),
            self.agent_view.filter,
            self.agent_view.sort,
        )
    }

    pub fn selected_agent(&self) -> Option<&Agent> {
        self.agent_view
            .selected
            .and_then(|id| self.catalog.agent_by_id(id))
    }

    pub fn inspected_agent(&self) -> Option<&Agent> {
        self.agent_view
            .inspected
            .and_then(|id| self.catalog.agent_by_id(id))
    }

    /// Agents matching the smart search field.
    pub fn search_results(&self) -> Vec<&Agent> {
        search(self.catalog.agents(), &text_of(&self.modal_input))
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextView => self.switch_view(self.router.main.next()),
            Action::PrevView => self.switch_view(self.router.main.previous()),
            Action::SwitchView(index) => {
                if let Some(view) = MainView::from_index(index) {
                    self.switch_view(view);
                }
            }
            Action::MoveDown => self.move_selection(true),
            Action::MoveUp => self.move_selection(false),
            Action::Confirm => self.confirm(),
            Action::CycleFilter => {
                self.agent_view.filter = self.agent_view.filter.next();
                self.reselect_visible();
            }
            Action::CycleSort => self.agent_view.sort = self.agent_view.sort.next(),
            Action::ToggleSidebar => self.layout.toggle_sidebar(),
            Action::ToggleMobilePane => self.router.toggle_mobile_pane(),
            Action::ToggleFullscreen => self.router.toggle_fullscreen(),
            Action::Escape => {
                if self.router.escape() {
                    tracing::debug!("Left fullscreen code view");
                }
            }
            Action::FocusChat => {
                self.focus = InputFocus::Chat;
                if self.layout.is_mobile() {
                    self.router.set_mobile_pane(MobilePane::Chat);
                }
            }
            Action::OpenCommand => {
                self.command_palette = Some(TextArea::default());
                self.focus = InputFocus::Command;
            }
            Action::OpenModal(name) => self.open_modal(name),
            Action::CloseModal => self.close_visible_modal(),
        }
    }

    pub fn switch_view(&mut self, view: MainView) {
        self.router.switch_to(view);
        if self.layout.is_mobile() {
            self.router.set_mobile_pane(MobilePane::Workspace);
        }
    }

    pub fn open_modal(&mut self, name: ModalName) {
        self.modals.open(name);
        self.modal_cursor = 0;
        if name.takes_text_input() {
            self.modal_input = TextArea::default();
            self.focus = InputFocus::Modal;
        } else if self.focus == InputFocus::Modal {
            self.focus = InputFocus::None;
        }
    }

    pub fn close_visible_modal(&mut self) {
        if let Some(name) = self.modals.visible() {
            self.modals.close(name);
            tracing::debug!(modal = %name, "Modal closed");
        }
        if self.focus == InputFocus::Modal {
            self.focus = InputFocus::None;
        }
    }

    /// Open the inspector for the highlighted agent.
    pub fn inspect_selected(&mut self) {
        if let Some(id) = self.agent_view.selected {
            self.agent_view.inspected = Some(id);
            self.open_modal(ModalName::AgentModal);
        }
    }

    pub fn on_resize(&mut self, columns: u16) {
        let width = columns_to_px(columns, self.config.layout.cell_width_px);
        if self.layout.resize(width) && !self.layout.is_mobile() {
            self.router.set_mobile_pane(MobilePane::Workspace);
        }
    }

    pub fn on_tick(&mut self, now: DateTime<Utc>) {
        self.notifications
            .retain(|n| n.age_secs(now) < NOTIFICATION_TTL_SECS);
    }

    fn confirm(&mut self) {
        if let Some(modal) = self.modals.visible() {
            self.run_modal_action(modal);
            return;
        }
        match self.router.main {
            MainView::Cards => self.inspect_selected(),
            MainView::Code => self.code_view.next_document(self.catalog.code_documents().len()),
            MainView::Timeline => self.timeline_view.toggle_selected(),
        }
    }

    fn move_selection(&mut self, forward: bool) {
        if let Some(modal) = self.modals.visible() {
            let count = self.modal_item_count(modal);
            self.modal_cursor = step_index(self.modal_cursor, count, forward);
            return;
        }
        match self.router.main {
            MainView::Cards => {
                let ids: Vec<AgentId> = self.visible_agents().iter().map(|a| a.id).collect();
                step_selection(&ids, &mut self.agent_view.selected, forward);
            }
            MainView::Code => self.code_view.scroll(forward),
            MainView::Timeline => {
                let ids: Vec<String> =
                    self.catalog.phases().iter().map(|p| p.id.clone()).collect();
                step_selection(&ids, &mut self.timeline_view.selected, forward);
            }
        }
    }

    /// Keep the highlight on a visible card after the filter changes.
    fn reselect_visible(&mut self) {
        let visible: Vec<AgentId> = self.visible_agents().iter().map(|a| a.id).collect();
        let still_visible = self
            .agent_view
            .selected
            .is_some_and(|id| visible.contains(&id));
        if !still_visible {
            self.agent_view.selected = visible.first().copied();
        }
    }

    /// Rows a list-style modal lets the cursor move over.
    pub fn modal_item_count(&self, modal: ModalName) -> usize {
        match modal {
            ModalName::QuickExportModal | ModalName::ExportModal => {
                self.catalog.export_formats().len()
            }
            ModalName::ShareModal => self.catalog.share_options().len(),
            ModalName::DeployModal => self.catalog.deploy_targets().len(),
            ModalName::TemplateLibrary => self.catalog.templates().len(),
            ModalName::CollaborateModal => self.catalog.collaboration_members().len(),
            ModalName::CodeOptimizeModal => self.catalog.code_suggestions().len(),
            ModalName::TimelineAiOptimize => self.catalog.timeline_suggestions().len(),
            ModalName::TasksModal => self.catalog.tasks().len(),
            _ => 0,
        }
    }

    /// Enter inside a modal. Back-end effects are narrative only: they post
    /// a notification and a log line.
    fn run_modal_action(&mut self, modal: ModalName) {
        let cursor = self.modal_cursor;
        let outcome = match modal {
            ModalName::QuickExportModal | ModalName::ExportModal => self
                .catalog
                .export_formats()
                .get(cursor)
                .map(|f| format!("Export queued: {} (.{})", f.name, f.extension)),
            ModalName::ShareModal => self
                .catalog
                .share_options()
                .get(cursor)
                .map(|s| format!("Shared via {}", s.name)),
            ModalName::DeployModal => self
                .catalog
                .deploy_targets()
                .get(cursor)
                .map(|t| format!("Deployment requested for {} ({})", t.name, t.environment)),
            ModalName::TemplateLibrary => self
                .catalog
                .templates()
                .get(cursor)
                .map(|t| format!("Template applied: {}", t.name)),
            ModalName::CollaborateModal => self
                .catalog
                .collaboration_members()
                .get(cursor)
                .map(|m| format!("Invitation sent to {}", m.name)),
            ModalName::CodeOptimizeModal => self
                .catalog
                .code_suggestions()
                .get(cursor)
                .map(|s| format!("Optimization applied: {}", s.title)),
            ModalName::TimelineAiOptimize => self
                .catalog
                .timeline_suggestions()
                .get(cursor)
                .map(|s| format!("Timeline adjusted: {}", s.title)),
            ModalName::TasksModal => self
                .catalog
                .tasks()
                .get(cursor)
                .map(|t| format!("Task opened: {} ({})", t.title, t.assignee)),
            ModalName::AgentModal => {
                self.close_visible_modal();
                None
            }
            _ => None,
        };
        if let Some(message) = outcome {
            tracing::info!(modal = %modal, %message, "Modal action");
            self.notify(NotificationLevel::Success, message);
        }
    }

    // ========================================================================
    // TEXT INPUT
    // ========================================================================

    /// Route a key to the focused text input.
    pub fn handle_input_key(&mut self, key: KeyEvent) {
        match (self.focus, key.code) {
            (InputFocus::None, _) => {}
            (InputFocus::Chat, KeyCode::Esc) => self.focus = InputFocus::None,
            (InputFocus::Chat, KeyCode::Enter) => self.submit_chat(),
            (InputFocus::Chat, _) => {
                self.chat.composer.input(key);
            }
            (InputFocus::Command, KeyCode::Esc) => self.close_command_palette(),
            (InputFocus::Command, KeyCode::Enter) => self.submit_command(),
            (InputFocus::Command, _) => {
                if let Some(palette) = self.command_palette.as_mut() {
                    palette.input(key);
                }
            }
            (InputFocus::Modal, KeyCode::Esc) => self.close_visible_modal(),
            (InputFocus::Modal, KeyCode::Enter) => self.submit_modal_input(),
            (InputFocus::Modal, _) => {
                self.modal_input.input(key);
            }
        }
    }

    /// Append the composed message to the local transcript.
    pub fn submit_chat(&mut self) {
        let content = text_of(&self.chat.composer);
        if content.trim().is_empty() {
            return;
        }
        self.chat.transcript.push(Message {
            sender: "You".to_string(),
            role: MessageRole::User,
            content: content.trim().to_string(),
            status: MessageStatus::Ok,
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        });
        self.chat.composer = TextArea::default();
        tracing::debug!(messages = self.chat.transcript.len(), "Chat message added");
    }

    /// Open the modal named in the palette. Unknown names do nothing.
    pub fn submit_command(&mut self) {
        let input = self
            .command_palette
            .as_ref()
            .map(text_of)
            .unwrap_or_default();
        self.close_command_palette();
        if self.modals.open_by_name(&input) {
            if let Some(name) = self.modals.visible() {
                self.open_modal(name);
            }
        }
    }

    fn close_command_palette(&mut self) {
        self.command_palette = None;
        if self.focus == InputFocus::Command {
            self.focus = InputFocus::None;
        }
    }

    fn submit_modal_input(&mut self) {
        match self.modals.visible() {
            Some(ModalName::SmartSearch) => {
                let first = self.search_results().first().map(|a| a.id);
                if let Some(id) = first {
                    self.agent_view.filter = AgentFilter::All;
                    self.agent_view.selected = Some(id);
                    self.switch_view(MainView::Cards);
                }
                self.close_visible_modal();
            }
            Some(ModalName::VoiceCommand) => {
                let command = text_of(&self.modal_input);
                self.close_visible_modal();
                self.run_voice_command(&command);
            }
            _ => self.close_visible_modal(),
        }
    }

    /// Voice commands are typed here. Recognised phrases switch views or
    /// open modals; anything else is just acknowledged.
    fn run_voice_command(&mut self, command: &str) {
        let normalized = command.trim().to_lowercase();
        let target = normalized
            .strip_prefix("show ")
            .or_else(|| normalized.strip_prefix("open "))
            .unwrap_or(&normalized)
            .trim();
        let view = match target {
            "cards" | "agents" => Some(MainView::Cards),
            "code" => Some(MainView::Code),
            "timeline" => Some(MainView::Timeline),
            _ => None,
        };
        if let Some(view) = view {
            self.switch_view(view);
        } else if let Some(modal) = ModalName::from_phrase(target) {
            self.open_modal(modal);
        } else if !normalized.is_empty() {
            self.notify(
                NotificationLevel::Info,
                format!("Voice command captured: {}", command.trim()),
            );
        }
    }
}

fn text_of(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("\n")
}

fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        (current - 1).min(len - 1)
    }
}

/// Move `selected` through `items`, wrapping at either end. A selection not
/// found in `items` restarts from the first (forward) or last (backward).
fn step_selection<T: Clone + PartialEq>(items: &[T], selected: &mut Option<T>, forward: bool) {
    if items.is_empty() {
        *selected = None;
        return;
    }
    let position = selected
        .as_ref()
        .and_then(|current| items.iter().position(|item| item == current));
    let next = match (position, forward) {
        (None, true) => 0,
        (None, false) => items.len() - 1,
        (Some(idx), _) => step_index(idx, items.len(), forward),
    };
    *selected = Some(items[next].clone());
}

// ============================================================================
// VIEW STATE DEFINITIONS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct AgentViewState {
    pub filter: AgentFilter,
    pub sort: SortKey,
    pub selected: Option<AgentId>,
    /// Agent shown by the inspector modal.
    pub inspected: Option<AgentId>,
}

impl AgentViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeViewState {
    pub document: usize,
    pub scroll: u16,
}

impl CodeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_document(&mut self, count: usize) {
        self.document = step_index(self.document, count, true);
        self.scroll = 0;
    }

    pub fn scroll(&mut self, down: bool) {
        self.scroll = if down {
            self.scroll.saturating_add(1)
        } else {
            self.scroll.saturating_sub(1)
        };
    }
}

#[derive(Debug, Clone, Default)]
pub struct TimelineViewState {
    pub selected: Option<String>,
    pub expanded: HashSet<String>,
}

impl TimelineViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = &self.selected {
            if !self.expanded.remove(id) {
                self.expanded.insert(id.clone());
            }
        }
    }
}

pub struct ChatState {
    pub transcript: Vec<Message>,
    pub composer: TextArea<'static>,
}

impl ChatState {
    pub fn new(transcript: Vec<Message>) -> Self {
        Self {
            transcript,
            composer: TextArea::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutConfig, ThemeConfig};
    use crossterm::event::KeyModifiers;
    use housei_core::{AgentStatus, ReferencePolicy};
    use housei_test_utils::fixtures::{builtin_catalog, catalog_with_agents, mixed_status_agents};

    fn test_config() -> TuiConfig {
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

    fn desktop_app() -> App {
        App::new(test_config(), builtin_catalog(), 160)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_input_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_input_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn starts_with_defaults() {
        let app = desktop_app();
        assert_eq!(app.router.main, MainView::Cards);
        assert_eq!(app.modals.visible(), None);
        assert_eq!(app.agent_view.filter, AgentFilter::All);
        assert_eq!(app.agent_view.sort, SortKey::Name);
        assert!(!app.layout.is_mobile());
        assert!(app.agent_view.selected.is_some());
    }

    #[test]
    fn narrow_terminal_starts_mobile_and_collapsed() {
        let app = App::new(test_config(), builtin_catalog(), 80);
        assert!(app.layout.is_mobile());
        assert!(app.layout.sidebar_collapsed());
    }

    #[test]
    fn sidebar_toggle_keeps_mobile_collapsed() {
        let mut app = App::new(test_config(), builtin_catalog(), 80);
        app.apply(Action::ToggleSidebar);
        assert!(app.layout.sidebar_collapsed());
    }

    #[test]
    fn resize_reclassifies_layout() {
        let mut app = desktop_app();
        app.on_resize(90);
        assert!(app.layout.is_mobile());
        app.on_resize(110);
        assert!(!app.layout.is_mobile());
        assert!(app.layout.sidebar_collapsed());
        app.on_resize(128);
        assert!(!app.layout.sidebar_collapsed());
    }

    #[test]
    fn view_switch_leaves_modals_alone() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::BudgetModal));
        app.apply(Action::SwitchView(2));
        assert_eq!(app.router.main, MainView::Timeline);
        assert_eq!(app.modals.visible(), Some(ModalName::BudgetModal));
    }

    #[test]
    fn enter_on_cards_opens_the_inspector() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::AiHub));
        app.apply(Action::CloseModal);
        app.apply(Action::Confirm);
        assert_eq!(app.modals.visible(), Some(ModalName::AgentModal));
        assert_eq!(app.agent_view.inspected, app.agent_view.selected);
    }

    #[test]
    fn escape_only_leaves_fullscreen() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::ShareModal));
        app.apply(Action::SwitchView(1));
        app.apply(Action::ToggleFullscreen);
        assert!(app.router.is_fullscreen());
        app.apply(Action::Escape);
        assert!(!app.router.is_fullscreen());
        assert_eq!(app.modals.visible(), Some(ModalName::ShareModal));
        app.apply(Action::Escape);
        assert_eq!(app.modals.visible(), Some(ModalName::ShareModal));
    }

    #[test]
    fn filter_change_keeps_selection_visible() {
        let catalog = catalog_with_agents(mixed_status_agents());
        let mut app = App::new(test_config(), catalog, 160);
        app.apply(Action::CycleFilter);
        assert_eq!(app.agent_view.filter, AgentFilter::Status(AgentStatus::Active));
        let selected = app.selected_agent().map(|a| a.status);
        assert_eq!(selected, Some(AgentStatus::Active));
    }

    #[test]
    fn selection_wraps_over_visible_cards() {
        let catalog = catalog_with_agents(mixed_status_agents());
        let mut app = App::new(test_config(), catalog, 160);
        let order: Vec<AgentId> = app.visible_agents().iter().map(|a| a.id).collect();
        assert_eq!(app.agent_view.selected, order.first().copied());
        app.apply(Action::MoveUp);
        assert_eq!(app.agent_view.selected, order.last().copied());
        app.apply(Action::MoveDown);
        assert_eq!(app.agent_view.selected, order.first().copied());
    }

    #[test]
    fn chat_submission_appends_to_transcript() {
        let mut app = desktop_app();
        let before = app.chat.transcript.len();
        app.apply(Action::FocusChat);
        type_text(&mut app, "Status on lumber?");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat.transcript.len(), before + 1);
        let last = app.chat.transcript.last().unwrap();
        assert_eq!(last.content, "Status on lumber?");
        assert_eq!(last.role, MessageRole::User);
        assert!(text_of(&app.chat.composer).is_empty());
        assert_eq!(app.catalog.messages().len(), before);
    }

    #[test]
    fn empty_chat_submission_is_ignored() {
        let mut app = desktop_app();
        let before = app.chat.transcript.len();
        app.apply(Action::FocusChat);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.chat.transcript.len(), before);
    }

    #[test]
    fn command_palette_opens_named_modal() {
        let mut app = desktop_app();
        app.apply(Action::OpenCommand);
        type_text(&mut app, "iotDashboard");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modals.visible(), Some(ModalName::IotDashboard));
        assert_eq!(app.focus, InputFocus::None);
        assert!(app.command_palette.is_none());
    }

    #[test]
    fn command_palette_ignores_unknown_names() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::TasksModal));
        let before = app.modals;
        app.apply(Action::OpenCommand);
        type_text(&mut app, "doesNotExist");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modals, before);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn command_palette_requires_exact_keys() {
        let mut app = desktop_app();
        for typed in ["BUDGETMODAL", " budgetModal"] {
            app.apply(Action::OpenCommand);
            type_text(&mut app, typed);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.modals.visible(), None, "{typed:?} opened a modal");
        }
    }

    #[test]
    fn smart_search_jumps_to_first_match() {
        let mut app = desktop_app();
        app.apply(Action::CycleFilter);
        app.apply(Action::OpenModal(ModalName::SmartSearch));
        assert_eq!(app.focus, InputFocus::Modal);
        type_text(&mut app, "loan");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modals.visible(), None);
        assert_eq!(app.agent_view.filter, AgentFilter::All);
        assert_eq!(app.selected_agent().map(|a| a.name.as_str()), Some("Finn"));
    }

    #[test]
    fn voice_command_switches_views() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::VoiceCommand));
        type_text(&mut app, "show timeline");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.router.main, MainView::Timeline);
        assert_eq!(app.modals.visible(), None);
    }

    #[test]
    fn voice_command_opens_modals() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::VoiceCommand));
        type_text(&mut app, "open budgetModal");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modals.visible(), Some(ModalName::BudgetModal));
    }

    #[test]
    fn export_confirm_posts_notification() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::ExportModal));
        app.apply(Action::MoveDown);
        app.apply(Action::Confirm);
        let last = app.notifications.last().unwrap();
        assert_eq!(last.level, NotificationLevel::Success);
        assert!(last.message.contains("Spreadsheet"));
    }

    #[test]
    fn tasks_confirm_names_selected_task() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::TasksModal));
        app.apply(Action::MoveDown);
        let expected = app.catalog.tasks()[1].title.clone();
        app.apply(Action::Confirm);
        let last = app.notifications.last().unwrap();
        assert_eq!(last.level, NotificationLevel::Success);
        assert!(last.message.contains(&expected));
        assert_eq!(app.modals.visible(), Some(ModalName::TasksModal));
    }

    #[test]
    fn modal_cursor_wraps() {
        let mut app = desktop_app();
        app.apply(Action::OpenModal(ModalName::ShareModal));
        app.apply(Action::MoveUp);
        assert_eq!(app.modal_cursor, app.catalog.share_options().len() - 1);
    }

    #[test]
    fn old_notifications_expire_on_tick() {
        let mut app = desktop_app();
        app.notify(NotificationLevel::Info, "hello");
        app.on_tick(Utc::now());
        assert_eq!(app.notifications.len(), 1);
        app.on_tick(Utc::now() + chrono::Duration::seconds(NOTIFICATION_TTL_SECS + 1));
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn timeline_confirm_toggles_phase_expansion() {
        let mut app = desktop_app();
        app.apply(Action::SwitchView(2));
        let phase = app.timeline_view.selected.clone().unwrap();
        app.apply(Action::Confirm);
        assert!(app.timeline_view.expanded.contains(&phase));
        app.apply(Action::Confirm);
        assert!(!app.timeline_view.expanded.contains(&phase));
    }

    #[test]
    fn step_selection_on_empty_clears() {
        let mut selected = Some(3u32);
        step_selection::<u32>(&[], &mut selected, true);
        assert_eq!(selected, None);
    }
}
