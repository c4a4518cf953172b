//! Timeline view: phase tree with per-phase progress.

use crate::state::App;
use crate::theme::work_status_color;
use crate::views::helpers::{agent_ref, two_column};
use crate::widgets::{DetailPanel, ProgressBar, TreeItem, TreeStyle, TreeWidget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Phases in catalog order, each followed by its tasks when expanded.
pub fn timeline_items(app: &App) -> Vec<TreeItem> {
    let theme = &app.theme;
    let mut items = Vec::new();
    for phase in app.catalog.phases() {
        let tasks: Vec<_> = app.catalog.timeline_tasks_for_phase(&phase.id).collect();
        let expanded = app.timeline_view.expanded.contains(&phase.id);
        items.push(TreeItem {
            id: phase.id.clone(),
            label: phase.name.clone(),
            detail: format!("{}%  {} → {}", phase.progress, phase.start, phase.end),
            depth: 0,
            expanded,
            has_children: !tasks.is_empty(),
            style: Style::default().fg(work_status_color(phase.status, theme)),
        });
        if expanded {
            items.extend(tasks.into_iter().map(|task| TreeItem {
                id: task.id.clone(),
                label: task.name.clone(),
                detail: format!("{}%  {}", task.progress, task.assignee),
                depth: 1,
                expanded: false,
                has_children: false,
                style: Style::default().fg(work_status_color(task.status, theme)),
            }));
        }
    }
    items
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (tree_area, detail_area) = if app.layout.is_mobile() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        (split[0], split[1])
    } else {
        two_column(area, 55)
    };

    let items = timeline_items(app);
    let selected = app
        .timeline_view
        .selected
        .as_ref()
        .and_then(|id| items.iter().position(|item| item.depth == 0 && &item.id == id));
    TreeWidget {
        title: "Timeline [Enter expand]",
        items: &items,
        selected,
        style: TreeStyle::new(
            Style::default().fg(app.theme.text_dim),
            Style::default().bg(app.theme.bg_highlight),
            Style::default().fg(app.theme.text_dim),
        ),
    }
    .render(f, tree_area);

    render_phase_detail(f, app, detail_area);
}

fn render_phase_detail(f: &mut Frame<'_>, app: &App, area: Rect) {
    let theme = &app.theme;
    let phase = app
        .timeline_view
        .selected
        .as_ref()
        .and_then(|id| app.catalog.phases().iter().find(|p| &p.id == id));
    let Some(phase) = phase else {
        f.render_widget(Block::default().title("Phase").borders(Borders::ALL), area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let dependencies = if phase.dependencies.is_empty() {
        "none".to_string()
    } else {
        phase.dependencies.join(", ")
    };
    DetailPanel {
        title: &phase.name,
        fields: vec![
            ("Status", phase.status.to_string()),
            ("Window", format!("{} → {}", phase.start, phase.end)),
            ("Owner", phase.assignee.clone()),
            ("Depends on", dependencies),
        ],
        label_style: Style::default().fg(theme.secondary),
        border_style: Style::default().fg(theme.border),
    }
    .render(f, chunks[0]);

    let status_style = Style::default().fg(work_status_color(phase.status, theme));
    ProgressBar {
        title: "Progress".to_string(),
        value: f64::from(phase.progress),
        max: 100.0,
        thresholds: (100.0, 100.0),
        low_style: status_style,
        mid_style: status_style,
        high_style: status_style,
    }
    .render(f, chunks[1]);

    let lines: Vec<Line> = app
        .catalog
        .timeline_tasks_for_phase(&phase.id)
        .map(|task| {
            Line::from(vec![
                Span::styled(
                    format!("{:<22}", task.name),
                    Style::default().fg(work_status_color(task.status, theme)),
                ),
                Span::styled(format!("{:>4}%  ", task.progress), Style::default().fg(theme.text_dim)),
                agent_ref(&task.assignee, &app.catalog, theme),
            ])
        })
        .collect();
    let tasks = Paragraph::new(lines).block(Block::default().title("Tasks").borders(Borders::ALL));
    f.render_widget(tasks, chunks[2]);
}
