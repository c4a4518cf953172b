//! Navigation and view switching.
//!
//! The router only tracks which panel is showing. It never touches modal
//! visibility.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MainView {
    #[default]
    Cards,
    Code,
    Timeline,
}

impl MainView {
    pub fn title(&self) -> &'static str {
        match self {
            MainView::Cards => "Agents",
            MainView::Code => "Code",
            MainView::Timeline => "Timeline",
        }
    }

    pub fn all() -> &'static [MainView] {
        &[MainView::Cards, MainView::Code, MainView::Timeline]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<MainView> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> MainView {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> MainView {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}

/// Which half of the screen a mobile-width layout shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobilePane {
    Chat,
    #[default]
    Workspace,
}

impl MobilePane {
    pub fn toggled(&self) -> MobilePane {
        match self {
            MobilePane::Chat => MobilePane::Workspace,
            MobilePane::Workspace => MobilePane::Chat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewRouter {
    pub main: MainView,
    pub mobile: MobilePane,
    /// Only meaningful while `main` is [`MainView::Code`].
    pub code_fullscreen: bool,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_to(&mut self, view: MainView) {
        if view != MainView::Code {
            self.code_fullscreen = false;
        }
        self.main = view;
        tracing::debug!(view = view.title(), "Main view switched");
    }

    pub fn set_mobile_pane(&mut self, pane: MobilePane) {
        self.mobile = pane;
    }

    pub fn toggle_mobile_pane(&mut self) {
        self.mobile = self.mobile.toggled();
    }

    /// Fullscreen is only available from the code view.
    pub fn toggle_fullscreen(&mut self) {
        if self.main == MainView::Code {
            self.code_fullscreen = !self.code_fullscreen;
        }
    }

    /// Escape handling: leaves fullscreen, otherwise does nothing. Returns
    /// whether anything changed.
    pub fn escape(&mut self) -> bool {
        let was_fullscreen = self.is_fullscreen();
        self.code_fullscreen = false;
        was_fullscreen
    }

    pub fn is_fullscreen(&self) -> bool {
        self.main == MainView::Code && self.code_fullscreen
    }
}
