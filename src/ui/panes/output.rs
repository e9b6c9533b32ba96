//! Output pane rendering

use crate::errors::CalcError;
use crate::format_result;
use crate::snapshot::Snapshot;
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the output pane: the current step and, at the last step, the outcome
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    outcome: Option<&Result<f64, CalcError>>,
    is_at_end: bool,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = Vec::new();

    if let Some(snap) = snapshot {
        lines.push(Line::from(vec![
            Span::styled("Step:   ", label_style),
            Span::styled(
                snap.description.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Stack:  ", label_style),
            Span::styled(snap.stack.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let outcome_line = match outcome {
        Some(Ok(value)) if is_at_end => Line::from(vec![
            Span::styled("Result: ", label_style),
            Span::styled(
                format_result(*value),
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Some(Err(e)) if is_at_end => Line::from(vec![
            Span::styled("Error:  ", label_style),
            Span::styled(e.to_string(), Style::default().fg(DEFAULT_THEME.error)),
        ]),
        Some(_) => Line::from(Span::styled("Result: (step to the end)", label_style)),
        None => Line::from(Span::styled("Result: (not run)", label_style)),
    };
    lines.push(Line::default());
    lines.push(outcome_line);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
