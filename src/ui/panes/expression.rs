//! Expression pane rendering
//!
//! Shows the infix input and the postfix form one above the other. The token
//! the current step handled is highlighted in whichever line belongs to the
//! active phase. During translation the postfix line only shows what has been
//! emitted so far.

use crate::snapshot::{Phase, Snapshot};
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Color each character of an expression, highlighting the token starting at
/// `cursor` (1-based). A digit run is highlighted as a whole.
fn highlight_expression(text: &str, cursor: Option<usize>) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();

    let highlighted = cursor.and_then(|col| {
        let start = col.checked_sub(1)?;
        let first = *chars.get(start)?;
        let mut end = start + 1;
        if first.is_ascii_digit() {
            while chars.get(end).is_some_and(|c| c.is_ascii_digit()) {
                end += 1;
            }
        }
        Some(start..end)
    });

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let style = if highlighted.as_ref().is_some_and(|r| r.contains(&i)) {
                Style::default()
                    .bg(DEFAULT_THEME.cursor_bg)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else if c.is_ascii_digit() {
                Style::default().fg(DEFAULT_THEME.number)
            } else if matches!(c, '+' | '-' | '*' | '/') {
                Style::default()
                    .fg(DEFAULT_THEME.operator)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Span::styled(c.to_string(), style)
        })
        .collect()
}

fn label(text: &'static str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };
    Span::styled(text, style)
}

/// Render the expression pane
pub fn render_expression_pane(
    frame: &mut Frame,
    area: Rect,
    infix: &str,
    postfix: Option<&str>,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Expression ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let phase = snapshot.map(|s| s.phase);
    let cursor_in = |p: Phase| snapshot.filter(|s| s.phase == p).map(|s| s.cursor);

    let mut infix_line = vec![label(" infix   ", phase == Some(Phase::Translate))];
    infix_line.extend(highlight_expression(infix, cursor_in(Phase::Translate)));

    // While translating, only the emitted prefix of the postfix exists
    let postfix_text = match snapshot {
        Some(s) if s.phase == Phase::Translate => s.output.as_str(),
        _ => postfix.unwrap_or(""),
    };
    let mut postfix_line = vec![label(" postfix ", phase == Some(Phase::Evaluate))];
    postfix_line.extend(highlight_expression(
        postfix_text,
        cursor_in(Phase::Evaluate),
    ));

    let paragraph = Paragraph::new(vec![Line::from(infix_line), Line::from(postfix_line)])
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted(spans: &[Span]) -> String {
        spans
            .iter()
            .filter(|s| s.style.bg == Some(DEFAULT_THEME.cursor_bg))
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_highlights_whole_number() {
        let spans = highlight_expression("12+345", Some(4));
        assert_eq!(highlighted(&spans), "345");
    }

    #[test]
    fn test_highlights_operator() {
        let spans = highlight_expression("12+345", Some(3));
        assert_eq!(highlighted(&spans), "+");
    }

    #[test]
    fn test_cursor_past_end() {
        let spans = highlight_expression("1+2", Some(4));
        assert_eq!(highlighted(&spans), "");
        assert_eq!(spans.len(), 3);
    }
}
