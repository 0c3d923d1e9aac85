//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tabs`]: Row of structure kinds with the focused one selected
//! - [`structure`]: The focused structure, with the current animation step highlighted
//! - [`steps`]: Step log of the animation in flight
//! - [`history`]: Undo/redo entries for the focused structure
//! - [`status`]: Status bar with keybindings, playback state and the value prompt
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function. Panes only read;
//! all state changes go through [`crate::ui::App`].

pub mod history;
pub mod status;
pub mod steps;
pub mod structure;
pub mod tabs;

// Re-export render functions for convenience
pub use history::render_history_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use steps::render_steps_pane;
pub use structure::{render_structure_pane, StructureRenderData};
pub use tabs::render_tabs;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all bordered panes
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
