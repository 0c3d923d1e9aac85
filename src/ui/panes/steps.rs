//! Step log pane rendering

use super::border_style;
use crate::animation::{Playback, PlaybackState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the steps of the animation in flight. Revealed steps are bright,
/// the current one is marked and upcoming ones are dimmed.
pub fn render_steps_pane(frame: &mut Frame, area: Rect, playback: Option<&Playback>) {
    let Some(playback) = playback else {
        let paragraph = Paragraph::new("(no animation)")
            .block(
                Block::default()
                    .title(" Steps ")
                    .borders(Borders::ALL)
                    .border_style(border_style(false)),
            )
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let (shown, total) = playback.progress();
    let state = match playback.state() {
        PlaybackState::Playing => "▶",
        PlaybackState::Paused => "⏸",
        PlaybackState::Finished => "✓",
        PlaybackState::Cancelled => "✗",
    };
    let block = Block::default()
        .title(format!(
            " {} {} ({}/{}) ",
            state,
            playback.animation().title(),
            shown,
            total
        ))
        .borders(Borders::ALL)
        .border_style(border_style(playback.is_active()))
        .padding(Padding::new(1, 0, 0, 0));

    if total == 0 {
        let paragraph = Paragraph::new("(nothing to animate)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let cancelled = playback.state() == PlaybackState::Cancelled;
    let all_items: Vec<ListItem> = playback
        .animation()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let style = if i + 1 == shown && !cancelled {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else if i < shown {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            ListItem::new(format!("{:>3}. {}", i + 1, step)).style(style)
        })
        .collect();

    // Keep the current step in view
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let offset = shown.saturating_sub(visible_height);
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
