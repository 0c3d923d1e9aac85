//! Structure pane rendering
//!
//! Draws the focused structure from the live workbench. When the animation
//! in flight explains this structure, the targets of its current step are
//! highlighted and every named pointer is shown where the revealed steps
//! last moved it.
//!
//! # Layout
//!
//! - Stack: vertical, top first
//! - Queue: horizontal, front on the left
//! - Two-stack queue: inbox and outbox side by side, tops first
//! - Linked list: `head → [a] → [b] → null`
//! - BST: one row per depth, one column per in-order position

use super::border_style;
use crate::animation::{Playback, PlaybackState, Pointer, Step, Target};
use crate::snapshot::tree_layout;
use crate::structures::bst::{Bst, Traversal};
use crate::structures::linked_list::LinkedList;
use crate::structures::queue::{Queue, TwoStackQueue};
use crate::structures::stack::Stack;
use crate::structures::{StructureKind, Value, Workbench};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Data needed to render the structure pane
pub struct StructureRenderData<'a> {
    pub kind: StructureKind,
    pub workbench: &'a Workbench,
    /// Playback explaining this structure, if any
    pub playback: Option<&'a Playback>,
    pub traversal: Traversal,
}

/// Render the structure pane
pub fn render_structure_pane(frame: &mut Frame, area: Rect, data: StructureRenderData) {
    let block = Block::default()
        .title(format!(" {} ", data.kind.label()))
        .title_bottom(keybindings(data.kind))
        .borders(Borders::ALL)
        .border_style(border_style(true))
        .padding(Padding::new(1, 1, 1, 0));

    let marks = Marks::from_playback(data.playback);
    let wb = data.workbench;
    let mut lines = match data.kind {
        StructureKind::Stack => stack_lines(&wb.stack, &marks),
        StructureKind::Queue => queue_lines(&wb.queue, &marks),
        StructureKind::TwoStackQueue => two_stack_lines(&wb.two_stack_queue, &marks),
        StructureKind::LinkedList => list_lines(&wb.list, &marks),
        StructureKind::Bst => bst_lines(&wb.bst, &marks),
    };

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        summary(data.kind, wb, data.traversal),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    if let Some(pointers) = marks.pointer_line() {
        lines.push(pointers);
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Highlights derived from the revealed steps
struct Marks {
    current: Vec<Target>,
    current_style: Style,
    pointers: FxHashMap<Pointer, Target>,
}

impl Marks {
    fn from_playback(playback: Option<&Playback>) -> Self {
        let mut marks = Marks {
            current: Vec::new(),
            current_style: Style::default(),
            pointers: FxHashMap::default(),
        };
        let Some(playback) = playback else {
            return marks;
        };
        if playback.state() == PlaybackState::Cancelled {
            return marks;
        }

        for step in playback.animation().iter().take(playback.shown()) {
            if let Step::MovePointer { pointer, to } = step {
                marks.pointers.insert(*pointer, *to);
            }
        }
        if let Some(step) = playback.current() {
            marks.current = step.targets();
            let color = match step {
                Step::Compare { .. } | Step::Visit { .. } => DEFAULT_THEME.compare,
                Step::Remove { .. } | Step::Unlink { .. } | Step::NotFound { .. } => {
                    DEFAULT_THEME.removed
                }
                Step::Insert { .. } | Step::Found { .. } | Step::Link { .. } => {
                    DEFAULT_THEME.success
                }
                _ => DEFAULT_THEME.pointer,
            };
            marks.current_style = Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        marks
    }

    fn style(&self, target: Target) -> Style {
        if self.current.contains(&target) {
            self.current_style
        } else if self.pointers.values().any(|&t| t == target) {
            Style::default()
                .fg(DEFAULT_THEME.pointer)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.number)
        }
    }

    fn pointer_line(&self) -> Option<Line<'static>> {
        if self.pointers.is_empty() {
            return None;
        }
        let mut pointers: Vec<(&Pointer, &Target)> = self.pointers.iter().collect();
        pointers.sort_by_key(|(pointer, _)| pointer.label());
        let mut spans = Vec::new();
        for (pointer, target) in pointers {
            spans.push(Span::styled(
                format!("{} ", pointer),
                Style::default().fg(DEFAULT_THEME.pointer),
            ));
            spans.push(Span::styled(
                format!("→ {}   ", target),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
        }
        Some(Line::from(spans))
    }
}

fn cell(value: Value, style: Style) -> Span<'static> {
    Span::styled(format!("[{}]", value), style)
}

fn plain(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(DEFAULT_THEME.comment))
}

fn empty_line() -> Line<'static> {
    Line::from(plain("(empty)"))
}

fn stack_lines(stack: &Stack<Value>, marks: &Marks) -> Vec<Line<'static>> {
    if stack.is_empty() {
        return vec![empty_line()];
    }
    let width = cell_width(stack.items().iter());
    let mut lines: Vec<Line> = stack
        .items()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, v)| {
            let style = marks.style(Target::Index(i));
            Line::from(vec![
                plain(format!("{:>3} │", i)),
                Span::styled(format!("{:^width$}", v, width = width), style),
                plain("│"),
            ])
        })
        .collect();
    lines.push(plain(format!("    └{}┘", "─".repeat(width))).into());
    lines
}

fn queue_lines(queue: &Queue<Value>, marks: &Marks) -> Vec<Line<'static>> {
    if queue.is_empty() {
        return vec![empty_line()];
    }
    let mut spans = vec![plain("front → ")];
    for (i, v) in queue.iter().enumerate() {
        if i > 0 {
            spans.push(plain(" "));
        }
        spans.push(cell(*v, marks.style(Target::Index(i))));
    }
    spans.push(plain(" ← rear"));
    vec![Line::from(spans)]
}

fn two_stack_lines(queue: &TwoStackQueue<Value>, marks: &Marks) -> Vec<Line<'static>> {
    let inbox = queue.inbox().items();
    let outbox = queue.outbox().items();
    let width = cell_width(inbox.iter().chain(outbox.iter())).max(6);
    let height = inbox.len().max(outbox.len());

    let mut lines = vec![Line::from(vec![
        plain(format!(" {:^width$} ", "inbox", width = width)),
        plain("   "),
        plain(format!(" {:^width$} ", "outbox", width = width)),
    ])];
    for row in (0..height).rev() {
        let side = |items: &[Value], target: fn(usize) -> Target| match items.get(row) {
            Some(v) => Span::styled(
                format!("│{:^width$}│", v, width = width),
                marks.style(target(row)),
            ),
            None => plain(format!("│{}│", " ".repeat(width))),
        };
        lines.push(Line::from(vec![
            side(inbox, Target::Inbox),
            plain("   "),
            side(outbox, Target::Outbox),
        ]));
    }
    let floor = format!("└{}┘", "─".repeat(width));
    lines.push(Line::from(vec![plain(floor.clone()), plain("   "), plain(floor)]));
    lines
}

fn list_lines(list: &LinkedList<Value>, marks: &Marks) -> Vec<Line<'static>> {
    let mut spans = vec![Span::styled("head", marks.style(Target::Root))];
    for (i, v) in list.iter().enumerate() {
        spans.push(plain(" → "));
        spans.push(cell(*v, marks.style(Target::Index(i))));
    }
    spans.push(plain(" → "));
    spans.push(Span::styled("null", marks.style(Target::Null)));
    vec![Line::from(spans)]
}

fn bst_lines(tree: &Bst<Value>, marks: &Marks) -> Vec<Line<'static>> {
    let layout = tree_layout(tree);
    if layout.is_empty() {
        return vec![empty_line()];
    }
    let width = cell_width(layout.iter().map(|p| &p.key)).max(3) + 1;
    let depth = layout.iter().map(|p| p.depth).max().unwrap_or(0);
    let center = |column: usize| column * width + width / 2;

    let mut lines = Vec::new();
    for d in 0..=depth {
        let mut row: Vec<_> = layout.iter().filter(|p| p.depth == d).collect();
        row.sort_by_key(|p| p.column);

        // Edges up to the parents
        if d > 0 {
            let mut edge = String::new();
            for placed in &row {
                let Some(parent) = placed.parent_column else {
                    continue;
                };
                let x = (center(placed.column) + center(parent)) / 2;
                let glyph = if placed.column < parent { '/' } else { '\\' };
                let pad = x.saturating_sub(edge.chars().count());
                edge.push_str(&" ".repeat(pad));
                edge.push(glyph);
            }
            lines.push(Line::from(plain(edge)));
        }

        let mut spans = Vec::new();
        let mut x = 0;
        for placed in row {
            let start = placed.column * width;
            spans.push(Span::raw(" ".repeat(start.saturating_sub(x))));
            let style = if placed.parent_column.is_none() && marks.current.contains(&Target::Root)
            {
                marks.current_style
            } else {
                marks.style(Target::Key(placed.key))
            };
            spans.push(Span::styled(
                format!("{:^width$}", placed.key, width = width),
                style,
            ));
            x = start + width;
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell_width<'a>(values: impl Iterator<Item = &'a Value>) -> usize {
    values.map(|v| v.to_string().len()).max().unwrap_or(1) + 2
}

fn summary(kind: StructureKind, wb: &Workbench, traversal: Traversal) -> String {
    match kind {
        StructureKind::Bst => format!(
            "size {} · height {} · traversal {}",
            wb.bst.len(),
            wb.bst.height(),
            traversal
        ),
        StructureKind::TwoStackQueue => format!(
            "size {} · inbox {} · outbox {}",
            wb.two_stack_queue.len(),
            wb.two_stack_queue.inbox().len(),
            wb.two_stack_queue.outbox().len()
        ),
        _ => format!("size {}", wb.len(kind)),
    }
}

fn keybindings(kind: StructureKind) -> Line<'static> {
    let keys: &[(&str, &str)] = match kind {
        StructureKind::Stack => &[("p", "push"), ("o", "pop"), ("v", "reverse"), ("k", "peek")],
        StructureKind::Queue | StructureKind::TwoStackQueue => {
            &[("e", "enqueue"), ("d", "dequeue"), ("f", "front")]
        }
        StructureKind::LinkedList => &[
            ("h", "head"),
            ("t", "tail"),
            ("i", "insert at"),
            ("x", "delete at"),
            ("d", "delete"),
            ("s", "search"),
            ("m", "middle"),
        ],
        StructureKind::Bst => &[
            ("i", "insert"),
            ("d", "delete"),
            ("s", "search"),
            ("t", "traverse"),
            ("o", "order"),
        ],
    };
    let key_style = Style::default().fg(DEFAULT_THEME.border_focused);
    let desc_style = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = vec![Span::raw(" ")];
    for (key, desc) in keys.iter().chain(&[("c", "clear")]) {
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {}  ", desc), desc_style));
    }
    Line::from(spans)
}
