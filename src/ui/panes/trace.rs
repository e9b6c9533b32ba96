//! Trace pane rendering
//!
//! Lists every recorded step with its phase, marking the current one. While
//! `follow` is set the pane scrolls to keep the current step in view; manual
//! scrolling clears it until the next step.

use crate::snapshot::{Phase, Snapshot};
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state for the trace pane
pub struct TraceScrollState {
    pub offset: usize,
    pub follow: bool,
}

impl Default for TraceScrollState {
    fn default() -> Self {
        TraceScrollState {
            offset: 0,
            follow: true,
        }
    }
}

/// Keep `position` inside the window `[offset, offset + visible)`
fn follow_offset(offset: usize, position: usize, visible: usize) -> usize {
    if position < offset {
        position
    } else if position >= offset + visible {
        position + 1 - visible
    } else {
        offset
    }
}

/// Render the trace pane
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    snapshots: &[Snapshot],
    position: usize,
    is_focused: bool,
    scroll: &mut TraceScrollState,
) {
    let block = Block::default()
        .title(" Trace ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if snapshots.is_empty() {
        let paragraph = Paragraph::new("(no steps recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let number_width = snapshots.len().to_string().len();
    let all_items: Vec<ListItem> = snapshots
        .iter()
        .enumerate()
        .map(|(i, snap)| {
            let is_current = i == position;
            let is_error = snap.description.starts_with("error:");

            let phase_style = match snap.phase {
                Phase::Translate => Style::default().fg(DEFAULT_THEME.primary),
                Phase::Evaluate => Style::default().fg(DEFAULT_THEME.secondary),
            };
            let text_style = if is_error {
                Style::default().fg(DEFAULT_THEME.error)
            } else if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };

            let line = Line::from(vec![
                Span::styled(
                    if is_current { "▶ " } else { "  " },
                    Style::default().fg(DEFAULT_THEME.border_focused),
                ),
                Span::styled(
                    format!("{:>width$} ", i + 1, width = number_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<9} ", snap.phase.to_string()), phase_style),
                Span::styled(snap.description.clone(), text_style),
            ]);

            let item = ListItem::new(line);
            if is_current {
                item.style(Style::default().bg(DEFAULT_THEME.current_line_bg))
            } else {
                item
            }
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if scroll.follow {
        scroll.offset = follow_offset(scroll.offset, position, visible_height);
    }
    scroll.offset = scroll
        .offset
        .min(total_items.saturating_sub(visible_height));

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll.offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
