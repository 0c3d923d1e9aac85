//! In-memory data structures being animated
//!
//! - [`stack`]: LIFO [`stack::Stack`] with recursive reversal
//! - [`queue`]: FIFO [`queue::Queue`] and the two-stack [`queue::TwoStackQueue`]
//! - [`linked_list`]: singly [`linked_list::LinkedList`] with slow/fast middle finding
//! - [`bst`]: arena-backed [`bst::Bst`] with parent back-references
//!
//! Every structure is generic over its element type. The [`Workbench`] owns
//! one `i64` instance of each and is what commands mutate.

pub mod bst;
pub mod linked_list;
pub mod queue;
pub mod stack;

use crate::errors::StructureError;
use bst::{Bst, Traversal};
use linked_list::LinkedList;
use queue::{Queue, TwoStackQueue};
use stack::Stack;
use std::fmt;
use std::str::FromStr;

/// Element type used by the workbench
pub type Value = i64;

/// Which structure a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Stack,
    Queue,
    TwoStackQueue,
    LinkedList,
    Bst,
}

impl StructureKind {
    pub const ALL: [StructureKind; 5] = [
        StructureKind::Stack,
        StructureKind::Queue,
        StructureKind::TwoStackQueue,
        StructureKind::LinkedList,
        StructureKind::Bst,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StructureKind::Stack => "Stack",
            StructureKind::Queue => "Queue",
            StructureKind::TwoStackQueue => "Two-Stack Queue",
            StructureKind::LinkedList => "Linked List",
            StructureKind::Bst => "BST",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    /// Next tab to the right, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Next tab to the left, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StructureKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stack" => Ok(StructureKind::Stack),
            "queue" => Ok(StructureKind::Queue),
            "two-stack" | "two-stack-queue" | "twostack" => Ok(StructureKind::TwoStackQueue),
            "list" | "linked-list" | "linkedlist" => Ok(StructureKind::LinkedList),
            "bst" | "tree" => Ok(StructureKind::Bst),
            other => Err(format!(
                "unknown structure '{}' (expected stack, queue, two-stack, list or bst)",
                other
            )),
        }
    }
}

/// A read-only request; never recorded in history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Peek,
    Front,
    PairFront,
    ListSearch(Value),
    ListMiddle,
    BstSearch(Value),
    Traverse(Traversal),
}

impl Query {
    pub fn target(&self) -> StructureKind {
        match self {
            Query::Peek => StructureKind::Stack,
            Query::Front => StructureKind::Queue,
            Query::PairFront => StructureKind::TwoStackQueue,
            Query::ListSearch(_) | Query::ListMiddle => StructureKind::LinkedList,
            Query::BstSearch(_) | Query::Traverse(_) => StructureKind::Bst,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Peek => write!(f, "Peek"),
            Query::Front | Query::PairFront => write!(f, "Front"),
            Query::ListSearch(v) | Query::BstSearch(v) => write!(f, "Search {}", v),
            Query::ListMiddle => write!(f, "Find middle"),
            Query::Traverse(order) => write!(f, "Traverse {}", order),
        }
    }
}

/// Result of a [`Query`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Value(Value),
    /// List search: index of the first match
    Position(Option<usize>),
    /// BST search
    Found(bool),
    /// Index and value of the middle node
    Middle(Option<(usize, Value)>),
    /// Traversal output in visiting order
    Keys(Vec<Value>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Value(v) => write!(f, "{}", v),
            Answer::Position(Some(i)) => write!(f, "found at position {}", i),
            Answer::Position(None) | Answer::Found(false) => write!(f, "not found"),
            Answer::Found(true) => write!(f, "found"),
            Answer::Middle(Some((i, v))) => write!(f, "middle is {} at position {}", v, i),
            Answer::Middle(None) => write!(f, "list is empty"),
            Answer::Keys(keys) => {
                let joined: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
                write!(f, "{}", joined.join(" → "))
            }
        }
    }
}

/// One instance of every structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbench {
    pub stack: Stack<Value>,
    pub queue: Queue<Value>,
    pub two_stack_queue: TwoStackQueue<Value>,
    pub list: LinkedList<Value>,
    pub bst: Bst<Value>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements held by the given structure
    pub fn len(&self, kind: StructureKind) -> usize {
        match kind {
            StructureKind::Stack => self.stack.len(),
            StructureKind::Queue => self.queue.len(),
            StructureKind::TwoStackQueue => self.two_stack_queue.len(),
            StructureKind::LinkedList => self.list.len(),
            StructureKind::Bst => self.bst.len(),
        }
    }

    pub fn is_empty(&self, kind: StructureKind) -> bool {
        self.len(kind) == 0
    }

    /// Answer a read-only request
    pub fn query(&self, query: &Query) -> Result<Answer, StructureError> {
        Ok(match query {
            Query::Peek => Answer::Value(*self.stack.peek()?),
            Query::Front => Answer::Value(*self.queue.front()?),
            Query::PairFront => Answer::Value(*self.two_stack_queue.front()?),
            Query::ListSearch(v) => Answer::Position(self.list.search(v)),
            Query::ListMiddle => Answer::Middle(self.list.find_middle().map(|(i, v)| (i, *v))),
            Query::BstSearch(k) => Answer::Found(self.bst.contains(k)),
            Query::Traverse(order) => Answer::Keys(self.bst.traverse(*order).copied().collect()),
        })
    }

    pub fn clear(&mut self, kind: StructureKind) {
        match kind {
            StructureKind::Stack => self.stack.clear(),
            StructureKind::Queue => self.queue.clear(),
            StructureKind::TwoStackQueue => self.two_stack_queue.clear(),
            StructureKind::LinkedList => self.list.clear(),
            StructureKind::Bst => self.bst.clear(),
        }
    }
}
