//! Keybinding definitions for the TUI.
//!
//! Only consulted while no text input has focus; focused inputs receive raw
//! key events instead.

use crate::modal::ModalName;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    Confirm,
    CycleFilter,
    CycleSort,
    ToggleSidebar,
    ToggleMobilePane,
    ToggleFullscreen,
    Escape,
    FocusChat,
    OpenCommand,
    OpenModal(ModalName),
    CloseModal,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Escape),
        KeyCode::Char('f') => Some(Action::CycleFilter),
        KeyCode::Char('s') => Some(Action::CycleSort),
        KeyCode::Char('b') => Some(Action::ToggleSidebar),
        KeyCode::Char('m') => Some(Action::ToggleMobilePane),
        KeyCode::Char('F') => Some(Action::ToggleFullscreen),
        KeyCode::Char('c') => Some(Action::FocusChat),
        KeyCode::Char(':') => Some(Action::OpenCommand),
        KeyCode::Char('x') => Some(Action::CloseModal),
        KeyCode::Char(c @ '1'..='3') => Some(Action::SwitchView(c as usize - '1' as usize)),
        KeyCode::Char(c) => modal_hotkey(c).map(Action::OpenModal),
        _ => None,
    }
}

/// One hotkey per modal. The agent inspector opens from `Enter` instead.
pub fn modal_hotkey(c: char) -> Option<ModalName> {
    let modal = match c {
        'a' => ModalName::AiHub,
        'p' => ModalName::PredictiveAnalytics,
        'w' => ModalName::WorkflowEngine,
        'r' => ModalName::SmartRoutingPanel,
        '$' => ModalName::BudgetModal,
        't' => ModalName::TasksModal,
        'C' => ModalName::CollaborateModal,
        'e' => ModalName::QuickExportModal,
        'S' => ModalName::ShareModal,
        'v' => ModalName::VoiceCommand,
        '/' => ModalName::SmartSearch,
        'i' => ModalName::IotDashboard,
        'T' => ModalName::TemplateLibrary,
        'D' => ModalName::DeployModal,
        'o' => ModalName::CodeOptimizeModal,
        'O' => ModalName::TimelineAiOptimize,
        'E' => ModalName::ExportModal,
        _ => return None,
    };
    Some(modal)
}

/// Hotkey shown next to a modal in the help footer.
pub fn hotkey_for(modal: ModalName) -> Option<char> {
    "apwr$tCeSv/iTDoOE".chars().find(|c| modal_hotkey(*c) == Some(modal))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn every_modal_but_the_inspector_has_a_hotkey() {
        for modal in ModalName::all() {
            let key = hotkey_for(*modal);
            if *modal == ModalName::AgentModal {
                assert!(key.is_none());
            } else {
                let c = key.unwrap_or_else(|| panic!("{modal} has no hotkey"));
                assert_eq!(map_key(press(KeyCode::Char(c))), Some(Action::OpenModal(*modal)));
            }
        }
    }

    #[test]
    fn digits_select_main_views() {
        assert_eq!(map_key(press(KeyCode::Char('1'))), Some(Action::SwitchView(0)));
        assert_eq!(map_key(press(KeyCode::Char('3'))), Some(Action::SwitchView(2)));
        assert_eq!(map_key(press(KeyCode::Char('4'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), Some(Action::Quit));
    }

    #[test]
    fn escape_is_its_own_action() {
        assert_eq!(map_key(press(KeyCode::Esc)), Some(Action::Escape));
    }
}
