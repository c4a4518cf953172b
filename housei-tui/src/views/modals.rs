//! Modal overlay. At most one modal is visible; its body is drawn from the
//! catalog over the current view.

use crate::modal::ModalName;
use crate::state::{App, InputFocus};
use crate::theme::{
    agent_status_color, budget_status_color, priority_color, sensor_status_color,
    work_status_color, BlueprintTheme,
};
use crate::views::cards::agent_fields;
use crate::views::helpers::{agent_ref, centered_rect, money, panel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App) {
    let Some(modal) = app.modals.visible() else {
        return;
    };
    let area = if app.layout.is_mobile() {
        centered_rect(96, 90, f.size())
    } else {
        centered_rect(70, 70, f.size())
    };
    f.render_widget(Clear, area);

    let block = panel(format!("{}  [x] close", modal.title()), &app.theme, true);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if modal.takes_text_input() {
        render_text_modal(f, app, modal, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);
    let body = Paragraph::new(modal_lines(app, modal)).wrap(Wrap { trim: false });
    f.render_widget(body, chunks[0]);
    let hint = if app.modal_item_count(modal) > 0 {
        "j/k select • Enter apply • x close"
    } else {
        "x close"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(app.theme.text_dim))),
        chunks[1],
    );
}

fn render_text_modal(f: &mut Frame<'_>, app: &App, modal: ModalName, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let prompt = match modal {
        ModalName::VoiceCommand => "Say a command (e.g. \"show timeline\")",
        _ => "Search agents by name, role, task or category",
    };
    let mut input = app.modal_input.clone();
    input.set_block(panel(prompt, &app.theme, app.focus == InputFocus::Modal));
    input.set_cursor_line_style(Style::default());
    f.render_widget(&input, chunks[0]);

    f.render_widget(
        Paragraph::new(modal_lines(app, modal)).wrap(Wrap { trim: false }),
        chunks[1],
    );
}

/// Body text for `modal`.
pub fn modal_lines(app: &App, modal: ModalName) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let catalog = &app.catalog;
    let cursor = app.modal_cursor;
    let dim = Style::default().fg(theme.text_dim);

    match modal {
        ModalName::AiHub => catalog
            .insights()
            .iter()
            .flat_map(|insight| {
                [
                    Line::from(vec![
                        Span::styled(insight.title.clone(), heading(theme)),
                        Span::styled(
                            format!("  {} • {:.0}% confidence", insight.category, insight.confidence * 100.0),
                            dim,
                        ),
                    ]),
                    Line::from(format!("  {}", insight.detail)),
                    Line::raw(""),
                ]
            })
            .collect(),

        ModalName::PredictiveAnalytics => catalog
            .predictive_data()
            .iter()
            .map(|p| {
                let delta = p.delta();
                let color = if delta > 0.0 { theme.warning } else { theme.success };
                Line::from(vec![
                    Span::styled(format!("{:<22}", p.metric), heading(theme)),
                    Span::raw(format!("{} → {} {}", trim_number(p.current), trim_number(p.predicted), p.unit)),
                    Span::styled(
                        format!("  ({}{})", if delta > 0.0 { "+" } else { "" }, trim_number(delta)),
                        Style::default().fg(color),
                    ),
                    Span::styled(format!("  {:.0}%", p.confidence * 100.0), dim),
                ])
            })
            .collect(),

        ModalName::WorkflowEngine => catalog
            .phases()
            .iter()
            .map(|phase| {
                let after = if phase.dependencies.is_empty() {
                    "start".to_string()
                } else {
                    format!("after {}", phase.dependencies.join(", "))
                };
                Line::from(vec![
                    Span::styled(
                        format!("{:<14}", phase.name),
                        Style::default().fg(work_status_color(phase.status, theme)),
                    ),
                    Span::styled(format!("{:>4}%  ", phase.progress), dim),
                    agent_ref(&phase.assignee, catalog, theme),
                    Span::styled(format!("  ({after})"), dim),
                ])
            })
            .collect(),

        ModalName::SmartRoutingPanel => catalog
            .routing_events()
            .iter()
            .map(|event| {
                Line::from(vec![
                    Span::styled(format!("{}  ", event.time), dim),
                    Span::raw(format!("{:<26} → ", event.request)),
                    agent_ref(&event.routed_to, catalog, theme),
                    Span::styled(format!("  {}", event.reason), dim),
                ])
            })
            .collect(),

        ModalName::BudgetModal => budget_lines(app),

        ModalName::TasksModal => catalog
            .tasks()
            .iter()
            .enumerate()
            .flat_map(|(idx, task)| {
                list_entry(
                    idx == cursor,
                    vec![
                        Span::styled(task.title.clone(), heading(theme)),
                        Span::styled(
                            format!("  {}", task.priority),
                            Style::default().fg(priority_color(task.priority, theme)),
                        ),
                        Span::styled(
                            format!("  {}", task.status),
                            Style::default().fg(work_status_color(task.status, theme)),
                        ),
                    ],
                    Some(Line::from(vec![
                        Span::styled("    ", dim),
                        agent_ref(&task.assignee, catalog, theme),
                        Span::styled(
                            format!("  due {}  {}%  {}h", task.due_date, task.progress, task.hours),
                            dim,
                        ),
                    ])),
                    theme,
                )
            })
            .collect(),

        ModalName::CollaborateModal => catalog
            .collaboration_members()
            .iter()
            .enumerate()
            .flat_map(|(idx, member)| {
                let presence = if member.online {
                    Span::styled("● online", Style::default().fg(theme.success))
                } else {
                    Span::styled("○ offline", dim)
                };
                list_entry(
                    idx == cursor,
                    vec![
                        Span::styled(format!("[{}] {}", member.avatar, member.name), heading(theme)),
                        Span::styled(format!("  {}  ", member.role), dim),
                        presence,
                    ],
                    None,
                    theme,
                )
            })
            .collect(),

        ModalName::QuickExportModal | ModalName::ExportModal => catalog
            .export_formats()
            .iter()
            .enumerate()
            .flat_map(|(idx, format)| {
                list_entry(
                    idx == cursor,
                    vec![
                        Span::styled(format!("{} (.{})", format.name, format.extension), heading(theme)),
                        Span::styled(format!("  {}", format.description), dim),
                    ],
                    None,
                    theme,
                )
            })
            .collect(),

        ModalName::ShareModal => catalog
            .share_options()
            .iter()
            .enumerate()
            .flat_map(|(idx, option)| {
                list_entry(
                    idx == cursor,
                    vec![
                        Span::styled(format!("{} {}", option.icon, option.name), heading(theme)),
                        Span::styled(format!("  {}", option.description), dim),
                    ],
                    None,
                    theme,
                )
            })
            .collect(),

        ModalName::VoiceCommand => vec![
            Line::from(Span::styled("Try:", dim)),
            Line::raw("  show cards | show code | show timeline"),
            Line::raw("  open budgetModal | open tasksModal"),
        ],

        ModalName::SmartSearch => {
            let results = app.search_results();
            if results.is_empty() {
                vec![Line::from(Span::styled("No matching agents", dim))]
            } else {
                results
                    .into_iter()
                    .map(|agent| {
                        Line::from(vec![
                            Span::styled(format!("{:<8}", agent.name), heading(theme)),
                            Span::styled(format!("{}  ", agent.role), dim),
                            Span::styled(
                                agent.status.to_string(),
                                Style::default().fg(agent_status_color(agent.status, theme)),
                            ),
                        ])
                    })
                    .collect()
            }
        }

        ModalName::IotDashboard => catalog
            .sensors()
            .iter()
            .map(|reading| {
                Line::from(vec![
                    Span::styled(format!("{:<6}", reading.sensor), heading(theme)),
                    Span::raw(format!("{:<18}", reading.location)),
                    Span::raw(format!("{:>8} {:<5}", trim_number(reading.value), reading.unit)),
                    Span::styled(
                        reading.status.to_string(),
                        Style::default().fg(sensor_status_color(reading.status, theme)),
                    ),
                ])
            })
            .collect(),

        ModalName::TemplateLibrary => catalog
            .templates()
            .iter()
            .enumerate()
            .flat_map(|(idx, template)| {
                let mut agents = vec![Span::styled("    agents: ", dim)];
                for (n, name) in template.agents.iter().enumerate() {
                    if n > 0 {
                        agents.push(Span::styled(", ", dim));
                    }
                    agents.push(agent_ref(name, catalog, theme));
                }
                list_entry(
                    idx == cursor,
                    vec![
                        Span::styled(template.name.clone(), heading(theme)),
                        Span::styled(format!("  [{}]  {}", template.category, template.description), dim),
                    ],
                    Some(Line::from(agents)),
                    theme,
                )
            })
            .collect(),

        ModalName::DeployModal => catalog
            .deploy_targets()
            .iter()
            .enumerate()
            .flat_map(|(idx, target)| {
                list_entry(
                    idx == cursor,
                    vec![
                        Span::styled(target.name.clone(), heading(theme)),
                        Span::styled(format!("  {}  ", target.environment), dim),
                        Span::styled(target.status.clone(), Style::default().fg(theme.info)),
                    ],
                    None,
                    theme,
                )
            })
            .collect(),

        ModalName::CodeOptimizeModal => suggestion_lines(catalog.code_suggestions(), cursor, theme),
        ModalName::TimelineAiOptimize => {
            suggestion_lines(catalog.timeline_suggestions(), cursor, theme)
        }

        ModalName::AgentModal => match app.inspected_agent() {
            Some(agent) => {
                let mut lines: Vec<Line> = agent_fields(agent)
                    .into_iter()
                    .map(|(label, value)| {
                        Line::from(vec![
                            Span::styled(format!("{label:<11}"), Style::default().fg(theme.secondary)),
                            Span::raw(value),
                        ])
                    })
                    .collect();
                lines.push(Line::raw(""));
                lines.extend(agent.metrics.iter().map(|metric| {
                    Line::from(vec![
                        Span::styled(format!("{:<11}", metric.label), dim),
                        Span::styled(metric.value.clone(), Style::default().fg(theme.primary)),
                    ])
                }));
                lines
            }
            None => vec![Line::from(Span::styled("No agent selected", dim))],
        },
    }
}

fn budget_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let dim = Style::default().fg(theme.text_dim);
    let mut lines = vec![Line::from(Span::styled(
        format!("{:<16}{:>12}{:>12}{:>12}  status", "category", "budgeted", "actual", "variance"),
        dim,
    ))];
    lines.extend(app.catalog.budget_items().iter().map(|item| {
        let variance_color = if item.variance() > 0.0 { theme.error } else { theme.success };
        Line::from(vec![
            Span::raw(format!("{:<16}", item.category)),
            Span::raw(format!("{:>12}{:>12}", money(item.budgeted), money(item.actual))),
            Span::styled(
                format!("{:>12}", money(item.variance())),
                Style::default().fg(variance_color),
            ),
            Span::styled(
                format!("  {}", item.status),
                Style::default().fg(budget_status_color(item.status, theme)),
            ),
        ])
    }));
    let summary = app.catalog.budget_summary();
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<16}", "Total"), heading(theme)),
        Span::styled(
            format!(
                "{:>12}{:>12}{:>12}",
                money(summary.budgeted),
                money(summary.actual),
                money(summary.variance())
            ),
            heading(theme),
        ),
    ]));
    lines
}

fn suggestion_lines(
    suggestions: &[housei_core::Suggestion],
    cursor: usize,
    theme: &BlueprintTheme,
) -> Vec<Line<'static>> {
    suggestions
        .iter()
        .enumerate()
        .flat_map(|(idx, suggestion)| {
            let impact_color = match suggestion.impact.as_str() {
                "high" => theme.success,
                "medium" => theme.tertiary,
                _ => theme.text_dim,
            };
            list_entry(
                idx == cursor,
                vec![
                    Span::styled(suggestion.title.clone(), heading(theme)),
                    Span::styled(
                        format!("  {} impact", suggestion.impact),
                        Style::default().fg(impact_color),
                    ),
                ],
                Some(Line::from(Span::styled(
                    format!("    {}", suggestion.detail),
                    Style::default().fg(theme.text_dim),
                ))),
                theme,
            )
        })
        .collect()
}

/// One selectable row: a head line with a cursor marker and an optional
/// detail line underneath.
fn list_entry(
    selected: bool,
    head: Vec<Span<'static>>,
    detail: Option<Line<'static>>,
    theme: &BlueprintTheme,
) -> Vec<Line<'static>> {
    let marker = if selected {
        Span::styled("▶ ", Style::default().fg(theme.primary))
    } else {
        Span::raw("  ")
    };
    let mut spans: Vec<Span<'static>> = std::iter::once(marker).chain(head).collect();
    if selected {
        for span in &mut spans {
            span.style = span.style.bg(theme.bg_highlight);
        }
    }
    std::iter::once(Line::from(spans)).chain(detail).collect()
}

fn heading(theme: &BlueprintTheme) -> Style {
    Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
}

/// Integers print without a decimal point.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
