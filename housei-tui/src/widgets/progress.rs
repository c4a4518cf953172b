//! Percentage gauge for workload, phase progress and budget burn.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Gauge},
    Frame,
};

pub struct ProgressBar {
    pub title: String,
    pub value: f64,
    pub max: f64,
    /// Percent boundaries between the low, mid and high styles.
    pub thresholds: (f64, f64),
    pub low_style: Style,
    pub mid_style: Style,
    pub high_style: Style,
}

impl ProgressBar {
    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.value / self.max).clamp(0.0, 1.0)
        }
    }

    pub fn style(&self) -> Style {
        let percent = self.ratio() * 100.0;
        if percent < self.thresholds.0 {
            self.low_style
        } else if percent < self.thresholds.1 {
            self.mid_style
        } else {
            self.high_style
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let gauge = Gauge::default()
            .block(Block::default().title(self.title.as_str()).borders(Borders::ALL))
            .gauge_style(self.style())
            .ratio(self.ratio());
        f.render_widget(gauge, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn bar(value: f64, max: f64) -> ProgressBar {
        ProgressBar {
            title: "Workload".to_string(),
            value,
            max,
            thresholds: (70.0, 90.0),
            low_style: Style::default().fg(Color::Green),
            mid_style: Style::default().fg(Color::Yellow),
            high_style: Style::default().fg(Color::Red),
        }
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(bar(150.0, 100.0).ratio(), 1.0);
        assert_eq!(bar(-5.0, 100.0).ratio(), 0.0);
        assert_eq!(bar(5.0, 0.0).ratio(), 0.0);
    }

    #[test]
    fn style_follows_thresholds() {
        assert_eq!(bar(40.0, 100.0).style().fg, Some(Color::Green));
        assert_eq!(bar(75.0, 100.0).style().fg, Some(Color::Yellow));
        assert_eq!(bar(95.0, 100.0).style().fg, Some(Color::Red));
    }
}
