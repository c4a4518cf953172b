//! Filter and sort chip bar above the card grid.

use crate::projection::{AgentFilter, SortKey};
use housei_core::AgentStatus;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

impl FilterOption {
    /// One chip per status filter, with `current` highlighted.
    pub fn for_filter(current: AgentFilter) -> Vec<FilterOption> {
        std::iter::once(AgentFilter::All)
            .chain(AgentStatus::all().iter().copied().map(AgentFilter::Status))
            .map(|filter| FilterOption {
                label: filter.label().to_string(),
                active: filter == current,
            })
            .collect()
    }

    pub fn for_sort(current: SortKey) -> Vec<FilterOption> {
        SortKey::all()
            .iter()
            .map(|key| FilterOption {
                label: key.label().to_string(),
                active: *key == current,
            })
            .collect()
    }
}

pub struct FilterBar<'a> {
    pub title: &'a str,
    pub filters: &'a [FilterOption],
    pub sorts: &'a [FilterOption],
    pub active_style: Style,
    pub inactive_style: Style,
    pub border_style: Style,
}

impl<'a> FilterBar<'a> {
    fn chips(&self, options: &[FilterOption]) -> Vec<Span<'static>> {
        options
            .iter()
            .map(|option| {
                let style = if option.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                Span::styled(format!(" {} ", option.label), style)
            })
            .collect()
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![Span::styled("[f] ", self.inactive_style)];
        spans.extend(self.chips(self.filters));
        spans.push(Span::styled("  [s] sort:", self.inactive_style));
        spans.extend(self.chips(self.sorts));

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(self.title)
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
