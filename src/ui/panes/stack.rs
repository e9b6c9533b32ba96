//! Stack pane rendering
//!
//! Displays the stack of the current step, top entry first. The title follows
//! the phase: the translator's operator stack or the evaluator's operand stack.

use crate::memory::entry::Entry;
use crate::snapshot::{Phase, Snapshot};
use crate::ui::theme::{border_style, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = match snapshot.map(|s| s.phase) {
        Some(Phase::Translate) => " Operator Stack ",
        Some(Phase::Evaluate) => " Operand Stack ",
        None => " Stack ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let stack = match snapshot {
        Some(s) if !s.stack.is_empty() => &s.stack,
        _ => {
            let paragraph = Paragraph::new("(empty)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let all_items: Vec<ListItem> = stack
        .iter()
        .enumerate()
        .map(|(depth, entry)| {
            let marker = if depth == 0 { " top → " } else { "       " };
            let value_style = match entry {
                Entry::Operator(_) => Style::default()
                    .fg(DEFAULT_THEME.operator)
                    .add_modifier(Modifier::BOLD),
                Entry::Operand(_) => Style::default().fg(DEFAULT_THEME.number),
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(entry.to_string(), value_style),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders

    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
