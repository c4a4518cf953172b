//! Blueprint theme and color utilities.

use housei_core::{AgentStatus, BudgetStatus, MessageStatus, Priority, SensorStatus, WorkStatus};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct BlueprintTheme {
    pub bg: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl BlueprintTheme {
    pub fn blueprint() -> Self {
        Self {
            bg: Color::Rgb(11, 18, 32),
            bg_highlight: Color::Rgb(30, 41, 66),
            primary: Color::Rgb(96, 165, 250),
            primary_dim: Color::Rgb(37, 99, 235),
            secondary: Color::Rgb(167, 139, 250),
            tertiary: Color::Rgb(251, 191, 36),
            success: Color::Rgb(52, 211, 153),
            warning: Color::Rgb(251, 191, 36),
            error: Color::Rgb(248, 113, 113),
            info: Color::Rgb(56, 189, 248),
            text: Color::Rgb(226, 232, 240),
            text_dim: Color::Rgb(148, 163, 184),
            border: Color::Rgb(51, 65, 85),
            border_focus: Color::Rgb(96, 165, 250),
        }
    }
}

impl Default for BlueprintTheme {
    fn default() -> Self {
        Self::blueprint()
    }
}

pub fn agent_status_color(status: AgentStatus, theme: &BlueprintTheme) -> Color {
    match status {
        AgentStatus::Active => theme.success,
        AgentStatus::Working => theme.primary,
        AgentStatus::Thinking => theme.secondary,
        AgentStatus::Idle => theme.text_dim,
    }
}

pub fn message_status_color(status: MessageStatus, theme: &BlueprintTheme) -> Color {
    match status {
        MessageStatus::Ok => theme.success,
        MessageStatus::Working => theme.primary,
        MessageStatus::Thinking => theme.secondary,
        MessageStatus::Ready => theme.tertiary,
    }
}

pub fn priority_color(priority: Priority, theme: &BlueprintTheme) -> Color {
    match priority {
        Priority::High => theme.error,
        Priority::Medium => theme.warning,
        Priority::Low => theme.text_dim,
    }
}

pub fn work_status_color(status: WorkStatus, theme: &BlueprintTheme) -> Color {
    match status {
        WorkStatus::Completed => theme.success,
        WorkStatus::InProgress => theme.primary,
        WorkStatus::Pending => theme.text_dim,
        WorkStatus::Blocked => theme.error,
    }
}

pub fn budget_status_color(status: BudgetStatus, theme: &BlueprintTheme) -> Color {
    match status {
        BudgetStatus::OnTrack => theme.primary,
        BudgetStatus::UnderBudget => theme.success,
        BudgetStatus::AtRisk => theme.warning,
        BudgetStatus::OverBudget => theme.error,
    }
}

pub fn sensor_status_color(status: SensorStatus, theme: &BlueprintTheme) -> Color {
    match status {
        SensorStatus::Normal => theme.success,
        SensorStatus::Warning => theme.warning,
        SensorStatus::Critical => theme.error,
    }
}

/// Workload gauge color: green under 70%, amber under 90%, red above.
pub fn utilization_color(percent: f64, theme: &BlueprintTheme) -> Color {
    if percent < 70.0 {
        theme.success
    } else if percent < 90.0 {
        theme.warning
    } else {
        theme.error
    }
}
