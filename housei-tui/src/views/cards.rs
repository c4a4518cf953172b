//! Agent card grid with the always-visible detail pane.

use crate::state::App;
use crate::theme::{agent_status_color, priority_color, utilization_color};
use crate::views::helpers::{panel, two_column};
use crate::widgets::{DetailPanel, FilterBar, FilterOption, ProgressBar, StatusBadge};
use housei_core::Agent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let filters = FilterOption::for_filter(app.agent_view.filter);
    let sorts = FilterOption::for_sort(app.agent_view.sort);
    FilterBar {
        title: "Agents",
        filters: &filters,
        sorts: &sorts,
        active_style: Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
        inactive_style: Style::default().fg(app.theme.text_dim),
        border_style: Style::default().fg(app.theme.border),
    }
    .render(f, chunks[0]);

    let (grid_area, detail_area) = if app.layout.is_mobile() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        (split[0], split[1])
    } else {
        two_column(chunks[1], 58)
    };

    render_grid(f, app, grid_area);
    render_detail(f, app, detail_area);
}

fn render_grid(f: &mut Frame<'_>, app: &App, area: Rect) {
    let agents = app.visible_agents();
    let title = format!("{} of {} agents", agents.len(), app.catalog.agents().len());

    if agents.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No agents match this filter",
            Style::default().fg(app.theme.text_dim),
        )))
        .block(panel(title, &app.theme, true));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = agents.iter().map(|agent| card(app, agent)).collect();
    let mut state = ListState::default();
    state.select(
        app.agent_view
            .selected
            .and_then(|id| agents.iter().position(|a| a.id == id)),
    );

    let list = List::new(items)
        .block(panel(title, &app.theme, true))
        .highlight_style(Style::default().bg(app.theme.bg_highlight))
        .highlight_symbol("▌");
    f.render_stateful_widget(list, area, &mut state);
}

fn card(app: &App, agent: &Agent) -> ListItem<'static> {
    let theme = &app.theme;
    let metrics: Vec<Span> = agent
        .metrics
        .iter()
        .flat_map(|metric| {
            [
                Span::styled(metric.value.clone(), Style::default().fg(theme.primary)),
                Span::styled(format!(" {}   ", metric.label), Style::default().fg(theme.text_dim)),
            ]
        })
        .collect();

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] {}", agent.avatar, agent.name),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}  ", agent.role), Style::default().fg(theme.text_dim)),
            StatusBadge::new(agent.status.as_str(), agent_status_color(agent.status, theme)).span(),
        ]),
        Line::from(Span::styled(format!("  {}", agent.task), Style::default().fg(theme.text))),
        Line::from(metrics),
        Line::from(vec![
            Span::styled("  load ", Style::default().fg(theme.text_dim)),
            Span::styled(
                format!("{:>3.0}%", agent.workload),
                Style::default().fg(utilization_color(agent.workload, theme)),
            ),
            Span::styled(
                format!(
                    "  done {:.0}%  resp {:.1}s  eff {:.0}%",
                    agent.completion_rate, agent.response_time, agent.efficiency
                ),
                Style::default().fg(theme.text_dim),
            ),
        ]),
        Line::raw(""),
    ])
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(agent) = app.selected_agent() else {
        f.render_widget(panel("Details", &app.theme, false), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    DetailPanel {
        title: "Details [Enter inspect]",
        fields: agent_fields(agent),
        label_style: Style::default().fg(priority_color(agent.priority, &app.theme)),
        border_style: Style::default().fg(app.theme.border),
    }
    .render(f, chunks[0]);

    let load_style = |percent: f64| Style::default().fg(utilization_color(percent, &app.theme));
    ProgressBar {
        title: "Workload".to_string(),
        value: agent.workload,
        max: 100.0,
        thresholds: (70.0, 90.0),
        low_style: load_style(0.0),
        mid_style: load_style(75.0),
        high_style: load_style(95.0),
    }
    .render(f, chunks[1]);

    let learning = Style::default().fg(app.theme.secondary);
    ProgressBar {
        title: "Learning".to_string(),
        value: agent.learning_progress,
        max: 100.0,
        thresholds: (100.0, 100.0),
        low_style: learning,
        mid_style: learning,
        high_style: learning,
    }
    .render(f, chunks[2]);
}

/// Field list shared by the detail pane and the inspector modal.
pub fn agent_fields(agent: &Agent) -> Vec<(&'static str, String)> {
    vec![
        ("Name", agent.name.clone()),
        ("Role", agent.role.clone()),
        ("Status", agent.status.to_string()),
        ("Priority", agent.priority.to_string()),
        ("Category", agent.category.clone()),
        ("Task", agent.task.clone()),
        ("Completion", format!("{:.0}%", agent.completion_rate)),
        ("Response", format!("{:.1}s", agent.response_time)),
        ("Efficiency", format!("{:.0}%", agent.efficiency)),
        ("Learning", format!("{:.0}%", agent.learning_progress)),
    ]
}
