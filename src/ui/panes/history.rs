//! History pane rendering

use super::border_style;
use crate::history::CommandHistory;
use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the undo/redo history of one structure: applied commands oldest
/// first, the latest marked, then undone commands in the order redo would
/// bring them back
pub fn render_history_pane(
    frame: &mut Frame,
    area: Rect,
    kind: StructureKind,
    history: Option<&CommandHistory>,
) {
    let block = Block::default().borders(Borders::ALL).border_style(border_style(false));

    let Some(history) = history.filter(|h| h.can_undo() || h.can_redo()) else {
        let paragraph = Paragraph::new("No operations")
            .block(block.title(format!(" History: {} ", kind)))
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let block = block
        .title(format!(
            " History: {} ({}/{}) ",
            kind,
            history.undo_len(),
            history.max_depth()
        ))
        .padding(Padding::new(1, 0, 0, 0));

    let latest = history.undo_len().checked_sub(1);
    let mut all_items: Vec<ListItem> = history
        .undo_entries()
        .enumerate()
        .map(|(i, command)| {
            if Some(i) == latest {
                ListItem::new(format!("▶ {}", command.description())).style(
                    Style::default()
                        .fg(DEFAULT_THEME.success)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!("  {}", command.description()))
                    .style(Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();
    all_items.extend(history.redo_entries().rev().map(|command| {
        ListItem::new(format!("  {}", command.description()))
            .style(Style::default().fg(DEFAULT_THEME.comment))
    }));

    // Keep the latest applied command in view
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let offset = history.undo_len().saturating_sub(visible_height);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
