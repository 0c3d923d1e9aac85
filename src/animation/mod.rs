//! Step-by-step explanations of operations
//!
//! An [`Animation`] pairs a [`Snapshot`] of the structure *after* the
//! operation was committed with the ordered [`Step`]s that explain how it got
//! there. Steps are generated on first access and cached, so an animation can
//! be replayed from the start any number of times.
//!
//! - [`emitter`]: builds step scripts for commands, undo/redo and queries
//! - [`playback`]: cursor over an animation driven by the shell
//!
//! Animations are explanations only. Nothing here touches the workbench.

pub mod emitter;
pub mod playback;

pub use emitter::Script;
pub use playback::{Playback, PlaybackState};

use crate::snapshot::Snapshot;
use crate::structures::bst::Traversal;
use crate::structures::{StructureKind, Value, Workbench};
use std::cell::OnceCell;
use std::cmp::Ordering;
use std::fmt;

/// Something a step can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Position in a stack (from the bottom), queue (from the front) or list
    /// (from the head)
    Index(usize),
    /// BST node holding this key
    Key(Value),
    /// Position in the two-stack queue's inbox, from the bottom
    Inbox(usize),
    /// Position in the two-stack queue's outbox, from the bottom
    Outbox(usize),
    /// The list head or tree root slot
    Root,
    /// End of a list, empty child of a tree node
    Null,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Index(i) => write!(f, "[{}]", i),
            Target::Key(k) => write!(f, "node {}", k),
            Target::Inbox(i) => write!(f, "inbox[{}]", i),
            Target::Outbox(i) => write!(f, "outbox[{}]", i),
            Target::Root => write!(f, "root"),
            Target::Null => write!(f, "null"),
        }
    }
}

/// Named pointers drawn next to the structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pointer {
    Cursor,
    Slow,
    Fast,
    Top,
    Front,
    Rear,
    Successor,
}

impl Pointer {
    pub fn label(self) -> &'static str {
        match self {
            Pointer::Cursor => "cur",
            Pointer::Slow => "slow",
            Pointer::Fast => "fast",
            Pointer::Top => "top",
            Pointer::Front => "front",
            Pointer::Rear => "rear",
            Pointer::Successor => "succ",
        }
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One atomic visual event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Highlight {
        target: Target,
    },
    /// `probe` compared against the key at `against`
    Compare {
        probe: Value,
        against: Target,
        ordering: Ordering,
    },
    MovePointer {
        pointer: Pointer,
        to: Target,
    },
    Insert {
        value: Value,
        at: Target,
    },
    Remove {
        value: Value,
        from: Target,
    },
    /// A value moving between the two-stack queue's stacks
    Transfer {
        value: Value,
        from: Target,
        to: Target,
    },
    Link {
        from: Target,
        to: Target,
    },
    Unlink {
        from: Target,
        to: Target,
    },
    /// A node keeps its place but takes a new value
    Replace {
        target: Target,
        old: Value,
        new: Value,
    },
    Visit {
        value: Value,
        order: Traversal,
    },
    /// Entering a recursive call
    Call {
        depth: usize,
        value: Option<Value>,
    },
    Return {
        depth: usize,
    },
    Found {
        target: Target,
    },
    NotFound {
        value: Value,
    },
    Cleared {
        count: usize,
    },
    Restored {
        count: usize,
    },
}

impl Step {
    /// Targets to emphasise while this step is on screen
    pub fn targets(&self) -> Vec<Target> {
        match self {
            Step::Highlight { target }
            | Step::Found { target }
            | Step::Replace { target, .. } => vec![*target],
            Step::Compare { against, .. } => vec![*against],
            Step::MovePointer { to, .. } => vec![*to],
            Step::Insert { at, .. } => vec![*at],
            Step::Remove { from, .. } => vec![*from],
            Step::Transfer { from, to, .. } | Step::Link { from, to } | Step::Unlink { from, to } => {
                vec![*from, *to]
            }
            Step::Visit { value, .. } => vec![Target::Key(*value)],
            Step::Call { .. }
            | Step::Return { .. }
            | Step::NotFound { .. }
            | Step::Cleared { .. }
            | Step::Restored { .. } => Vec::new(),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Highlight { target } => write!(f, "Look at {}", target),
            Step::Compare {
                probe,
                against,
                ordering,
            } => {
                let verdict = match ordering {
                    Ordering::Less => "smaller, go left",
                    Ordering::Greater => "larger, go right",
                    Ordering::Equal => "equal",
                };
                write!(f, "Compare {} with {}: {}", probe, against, verdict)
            }
            Step::MovePointer { pointer, to } => write!(f, "Move {} to {}", pointer, to),
            Step::Insert { value, at } => write!(f, "Insert {} at {}", value, at),
            Step::Remove { value, from } => write!(f, "Remove {} from {}", value, from),
            Step::Transfer { value, from, to } => {
                write!(f, "Move {} from {} to {}", value, from, to)
            }
            Step::Link { from, to } => write!(f, "Link {} → {}", from, to),
            Step::Unlink { from, to } => write!(f, "Unlink {} → {}", from, to),
            Step::Replace { target, old, new } => {
                write!(f, "Replace {} at {} with {}", old, target, new)
            }
            Step::Visit { value, order } => write!(f, "Visit {} ({})", value, order),
            Step::Call { depth, value } => match value {
                Some(v) => write!(f, "{}call: hold {}", "  ".repeat(*depth), v),
                None => write!(f, "{}call: base case", "  ".repeat(*depth)),
            },
            Step::Return { depth } => write!(f, "{}return", "  ".repeat(*depth)),
            Step::Found { target } => write!(f, "Found at {}", target),
            Step::NotFound { value } => write!(f, "{} not found", value),
            Step::Cleared { count } => write!(f, "Cleared {} elements", count),
            Step::Restored { count } => write!(f, "Restored {} elements", count),
        }
    }
}

/// A snapshot plus the lazily generated steps explaining it
#[derive(Debug, Clone)]
pub struct Animation {
    title: String,
    snapshot: Snapshot,
    script: Script,
    steps: OnceCell<Vec<Step>>,
}

impl Animation {
    /// `workbench` must already hold the committed post-state
    pub fn new(title: impl Into<String>, script: Script, workbench: &Workbench) -> Self {
        let snapshot = Snapshot::capture(workbench, script.target());
        Animation {
            title: title.into(),
            snapshot,
            script,
            steps: OnceCell::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn kind(&self) -> StructureKind {
        self.snapshot.kind()
    }

    /// The step script, generated on first call
    pub fn steps(&self) -> &[Step] {
        self.steps.get_or_init(|| self.script.emit(&self.snapshot))
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps().get(index)
    }

    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps().is_empty()
    }

    /// Fresh pass over the steps; can be called any number of times
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps().iter()
    }

    /// True once the script has been generated
    pub fn is_generated(&self) -> bool {
        self.steps.get().is_some()
    }
}

impl<'a> IntoIterator for &'a Animation {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
