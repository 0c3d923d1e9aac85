//! Structure tabs

use super::border_style;
use crate::structures::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_tabs(frame: &mut Frame, area: Rect, focused: StructureKind) {
    let titles: Vec<Line> = StructureKind::ALL
        .iter()
        .map(|kind| Line::from(format!(" {} ", kind.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" structty ")
                .borders(Borders::ALL)
                .border_style(border_style(false)),
        )
        .select(focused.index())
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
