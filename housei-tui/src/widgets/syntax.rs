//! Lightweight Rust highlighting for the code view.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span, Text},
};

pub struct SyntaxHighlighter {
    pub keyword_color: Color,
    pub type_color: Color,
    pub string_color: Color,
    pub number_color: Color,
    pub comment_color: Color,
    pub gutter_color: Color,
}

impl SyntaxHighlighter {
    /// Highlight `content` line by line with a line-number gutter.
    pub fn highlight(&self, content: &str) -> Text<'static> {
        let width = content.lines().count().max(1).to_string().len();
        let lines: Vec<Line<'static>> = content
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                let mut spans = vec![Span::styled(
                    format!("{:>width$} │ ", idx + 1),
                    Style::default().fg(self.gutter_color),
                )];
                spans.extend(self.highlight_line(line));
                Line::from(spans)
            })
            .collect();
        Text::from(lines)
    }

    pub fn highlight_line(&self, line: &str) -> Vec<Span<'static>> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut chars = line.char_indices().peekable();

        while let Some((pos, ch)) = chars.peek().copied() {
            if line[pos..].starts_with("//") {
                spans.push(Span::styled(
                    line[pos..].to_string(),
                    Style::default().fg(self.comment_color),
                ));
                break;
            }

            if ch == '"' {
                chars.next();
                let mut value = String::from('"');
                for (_, next) in chars.by_ref() {
                    value.push(next);
                    if next == '"' {
                        break;
                    }
                }
                spans.push(Span::styled(value, Style::default().fg(self.string_color)));
                continue;
            }

            if ch.is_ascii_digit() {
                let mut number = String::new();
                while let Some((_, next)) = chars.peek().copied() {
                    if next.is_ascii_digit() || next == '.' || next == '_' {
                        number.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                spans.push(Span::styled(number, Style::default().fg(self.number_color)));
                continue;
            }

            if ch.is_alphabetic() || ch == '_' {
                let mut word = String::new();
                while let Some((_, next)) = chars.peek().copied() {
                    if next.is_alphanumeric() || next == '_' {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let style = if is_keyword(&word) {
                    Style::default().fg(self.keyword_color)
                } else if word.starts_with(char::is_uppercase) || is_primitive(&word) {
                    Style::default().fg(self.type_color)
                } else {
                    Style::default()
                };
                spans.push(Span::styled(word, style));
                continue;
            }

            spans.push(Span::raw(ch.to_string()));
            chars.next();
        }

        spans
    }
}

fn is_keyword(value: &str) -> bool {
    matches!(
        value,
        "fn" | "let"
            | "mut"
            | "match"
            | "if"
            | "else"
            | "for"
            | "in"
            | "while"
            | "loop"
            | "return"
            | "struct"
            | "enum"
            | "impl"
            | "trait"
            | "pub"
            | "use"
            | "mod"
            | "const"
            | "static"
            | "self"
            | "Self"
            | "true"
            | "false"
    )
}

fn is_primitive(value: &str) -> bool {
    matches!(
        value,
        "u8" | "u16" | "u32" | "u64" | "usize" | "i32" | "i64" | "f32" | "f64" | "bool" | "str"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> SyntaxHighlighter {
        SyntaxHighlighter {
            keyword_color: Color::Magenta,
            type_color: Color::Cyan,
            string_color: Color::Green,
            number_color: Color::Yellow,
            comment_color: Color::DarkGray,
            gutter_color: Color::Gray,
        }
    }

    fn styled(spans: &[Span<'_>], text: &str) -> Option<Color> {
        spans
            .iter()
            .find(|span| span.content == text)
            .and_then(|span| span.style.fg)
    }

    #[test]
    fn keywords_types_and_literals_are_colored() {
        let spans = highlighter().highlight_line("fn total(x: f64) -> Draw { \"a b\"; 42 }");
        assert_eq!(styled(&spans, "fn"), Some(Color::Magenta));
        assert_eq!(styled(&spans, "f64"), Some(Color::Cyan));
        assert_eq!(styled(&spans, "Draw"), Some(Color::Cyan));
        assert_eq!(styled(&spans, "\"a b\""), Some(Color::Green));
        assert_eq!(styled(&spans, "42"), Some(Color::Yellow));
        assert_eq!(styled(&spans, "total"), None);
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        let spans = highlighter().highlight_line("let x = 1; // fn inside comment");
        let last = spans.last().unwrap();
        assert_eq!(last.content, "// fn inside comment");
        assert_eq!(last.style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn highlight_keeps_one_line_per_source_line() {
        let text = highlighter().highlight("a\nb\nc\n");
        assert_eq!(text.lines.len(), 3);
    }
}
