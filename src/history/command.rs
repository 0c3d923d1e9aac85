//! Invertible commands
//!
//! An [`Operation`] is what the user asked for. [`Command::capture`] checks it
//! against the current [`Workbench`] and records an [`Inverse`] holding just
//! enough pre-state to undo it exactly. A captured command is never modified
//! afterwards.
//!
//! Inverses by operation:
//!
//! | Operation | Inverse |
//! |---|---|
//! | push / enqueue | drop the value again (it is on top / at the rear) |
//! | pop / dequeue | put the captured value back |
//! | two-stack dequeue | put the value back and undo the inbox→outbox refill |
//! | reverse | reverse again |
//! | list insert | delete at the same position |
//! | list delete | insert the captured value at the captured position |
//! | BST insert | delete the new leaf (nothing for a duplicate) |
//! | BST delete | graft the captured subtree back into its slot |
//! | clear | restore the captured snapshot |

use crate::config::constants::MAX_RECURSIVE_REVERSE;
use crate::errors::StructureError;
use crate::snapshot::Snapshot;
use crate::structures::bst::{Slot, TreeShape};
use crate::structures::{StructureKind, Value, Workbench};
use std::fmt;

/// A mutation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Push(Value),
    Pop,
    ReverseStack,
    Enqueue(Value),
    Dequeue,
    PairEnqueue(Value),
    PairDequeue,
    ListInsert { value: Value, position: usize },
    ListPushFront(Value),
    ListPushBack(Value),
    ListDelete { position: usize },
    ListRemoveValue(Value),
    BstInsert(Value),
    BstDelete(Value),
    Clear(StructureKind),
}

impl Operation {
    /// The structure this operation mutates
    pub fn target(&self) -> StructureKind {
        match self {
            Operation::Push(_) | Operation::Pop | Operation::ReverseStack => StructureKind::Stack,
            Operation::Enqueue(_) | Operation::Dequeue => StructureKind::Queue,
            Operation::PairEnqueue(_) | Operation::PairDequeue => StructureKind::TwoStackQueue,
            Operation::ListInsert { .. }
            | Operation::ListPushFront(_)
            | Operation::ListPushBack(_)
            | Operation::ListDelete { .. }
            | Operation::ListRemoveValue(_) => StructureKind::LinkedList,
            Operation::BstInsert(_) | Operation::BstDelete(_) => StructureKind::Bst,
            Operation::Clear(kind) => *kind,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Push(v) => write!(f, "Push {}", v),
            Operation::Pop => write!(f, "Pop"),
            Operation::ReverseStack => write!(f, "Reverse stack"),
            Operation::Enqueue(v) | Operation::PairEnqueue(v) => write!(f, "Enqueue {}", v),
            Operation::Dequeue | Operation::PairDequeue => write!(f, "Dequeue"),
            Operation::ListInsert { value, position } => {
                write!(f, "Insert {} at position {}", value, position)
            }
            Operation::ListPushFront(v) => write!(f, "Insert {} at head", v),
            Operation::ListPushBack(v) => write!(f, "Insert {} at tail", v),
            Operation::ListDelete { position } => write!(f, "Delete position {}", position),
            Operation::ListRemoveValue(v) | Operation::BstDelete(v) => write!(f, "Delete {}", v),
            Operation::BstInsert(v) => write!(f, "Insert {}", v),
            Operation::Clear(kind) => write!(f, "Clear {}", kind),
        }
    }
}

/// Pre-state captured to undo a command
#[derive(Debug, Clone, PartialEq)]
pub enum Inverse {
    /// Undo a push
    Pop,
    /// Undo a pop
    Push(Value),
    Reverse,
    /// Undo an enqueue
    RetractRear,
    /// Undo a dequeue
    RestoreFront(Value),
    PairRetractRear,
    /// `transferred` is how many values the dequeue moved from inbox to outbox
    PairRestoreFront { value: Value, transferred: usize },
    /// Undo a list insert
    ListDelete { position: usize },
    /// Undo a list delete
    ListInsert { value: Value, position: usize },
    /// Undo a BST insert: the new node is still a leaf
    BstDeleteLeaf(Value),
    /// Undo a BST delete
    BstRestore {
        slot: Slot<Value>,
        subtree: TreeShape<Value>,
    },
    /// Duplicate BST insert
    Nothing,
    /// Undo a clear
    Restore(Box<Snapshot>),
}

/// An operation plus the data needed to invert it
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    operation: Operation,
    inverse: Inverse,
}

impl Command {
    /// Validate `operation` against the workbench and capture its inverse.
    /// Nothing is mutated; errors here mean the operation cannot run.
    pub fn capture(operation: Operation, workbench: &Workbench) -> Result<Self, StructureError> {
        let inverse = match &operation {
            Operation::Push(_) => Inverse::Pop,
            Operation::Pop => Inverse::Push(
                *workbench
                    .stack
                    .peek()
                    .map_err(|_| StructureError::empty("stack", "pop"))?,
            ),
            Operation::ReverseStack => {
                let len = workbench.stack.len();
                if len > MAX_RECURSIVE_REVERSE {
                    return Err(StructureError::TooLarge {
                        structure: "stack",
                        operation: "recursive reverse",
                        len,
                        limit: MAX_RECURSIVE_REVERSE,
                    });
                }
                Inverse::Reverse
            }
            Operation::Enqueue(_) => Inverse::RetractRear,
            Operation::Dequeue => Inverse::RestoreFront(
                *workbench
                    .queue
                    .front()
                    .map_err(|_| StructureError::empty("queue", "dequeue"))?,
            ),
            Operation::PairEnqueue(_) => Inverse::PairRetractRear,
            Operation::PairDequeue => {
                let queue = &workbench.two_stack_queue;
                let value = *queue
                    .front()
                    .map_err(|_| StructureError::empty("two-stack queue", "dequeue"))?;
                let transferred = if queue.outbox().is_empty() {
                    queue.inbox().len()
                } else {
                    0
                };
                Inverse::PairRestoreFront { value, transferred }
            }
            Operation::ListInsert { position, .. } => {
                let len = workbench.list.len();
                if *position > len {
                    return Err(StructureError::IndexOutOfBounds {
                        index: *position,
                        len,
                    });
                }
                Inverse::ListDelete {
                    position: *position,
                }
            }
            Operation::ListPushFront(_) => Inverse::ListDelete { position: 0 },
            Operation::ListPushBack(_) => Inverse::ListDelete {
                position: workbench.list.len(),
            },
            Operation::ListDelete { position } => {
                let value = *workbench.list.get(*position).ok_or(
                    StructureError::IndexOutOfBounds {
                        index: *position,
                        len: workbench.list.len(),
                    },
                )?;
                Inverse::ListInsert {
                    value,
                    position: *position,
                }
            }
            Operation::ListRemoveValue(value) => {
                let position = workbench
                    .list
                    .search(value)
                    .ok_or_else(|| StructureError::not_found(value, "linked list"))?;
                Inverse::ListInsert {
                    value: *value,
                    position,
                }
            }
            Operation::BstInsert(key) => {
                if workbench.bst.contains(key) {
                    Inverse::Nothing
                } else {
                    Inverse::BstDeleteLeaf(*key)
                }
            }
            Operation::BstDelete(key) => {
                let tree = &workbench.bst;
                let missing = || StructureError::not_found(key, "tree");
                let id = tree.search(key).ok_or_else(missing)?;
                Inverse::BstRestore {
                    slot: tree.slot_of(key).ok_or_else(missing)?,
                    subtree: tree.subtree(id).ok_or_else(missing)?,
                }
            }
            Operation::Clear(kind) => Inverse::Restore(Box::new(Snapshot::capture(workbench, *kind))),
        };
        Ok(Command { operation, inverse })
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn inverse(&self) -> &Inverse {
        &self.inverse
    }

    pub fn target(&self) -> StructureKind {
        self.operation.target()
    }

    /// True when applying the command changes nothing
    pub fn is_no_op(&self) -> bool {
        matches!(self.inverse, Inverse::Nothing)
    }

    /// Human-readable label for history lists
    pub fn description(&self) -> String {
        if self.is_no_op() {
            format!("{} (duplicate, ignored)", self.operation)
        } else {
            self.operation.to_string()
        }
    }

    /// Run the forward action. Returns the value the operation removed, if
    /// any.
    pub(crate) fn apply(&self, workbench: &mut Workbench) -> Result<Option<Value>, StructureError> {
        let removed = match &self.operation {
            Operation::Push(v) => {
                workbench.stack.push(*v);
                None
            }
            Operation::Pop => Some(workbench.stack.pop()?),
            Operation::ReverseStack => {
                workbench.stack = workbench.stack.reversed();
                None
            }
            Operation::Enqueue(v) => {
                workbench.queue.enqueue(*v);
                None
            }
            Operation::Dequeue => Some(workbench.queue.dequeue()?),
            Operation::PairEnqueue(v) => {
                workbench.two_stack_queue.enqueue(*v);
                None
            }
            Operation::PairDequeue => Some(workbench.two_stack_queue.dequeue()?),
            Operation::ListInsert { value, position } => {
                workbench.list.insert(*value, *position)?;
                None
            }
            Operation::ListPushFront(v) => {
                workbench.list.push_front(*v);
                None
            }
            Operation::ListPushBack(v) => {
                workbench.list.push_back(*v);
                None
            }
            Operation::ListDelete { position } => Some(workbench.list.delete(*position)?),
            Operation::ListRemoveValue(v) => {
                workbench.list.remove_value(v)?;
                Some(*v)
            }
            Operation::BstInsert(key) => {
                workbench.bst.insert(*key);
                None
            }
            Operation::BstDelete(key) => {
                workbench.bst.delete(key)?;
                Some(*key)
            }
            Operation::Clear(kind) => {
                workbench.clear(*kind);
                None
            }
        };
        Ok(removed)
    }

    /// Run the inverse action
    pub(crate) fn revert(&self, workbench: &mut Workbench) -> Result<(), StructureError> {
        match &self.inverse {
            Inverse::Pop => {
                workbench.stack.pop()?;
            }
            Inverse::Push(v) => workbench.stack.push(*v),
            Inverse::Reverse => workbench.stack = workbench.stack.reversed(),
            Inverse::RetractRear => {
                workbench
                    .queue
                    .retract_rear()
                    .ok_or(StructureError::empty("queue", "undo the enqueue"))?;
            }
            Inverse::RestoreFront(v) => workbench.queue.restore_front(*v),
            Inverse::PairRetractRear => {
                workbench
                    .two_stack_queue
                    .retract_rear()
                    .ok_or(StructureError::empty("two-stack queue", "undo the enqueue"))?;
            }
            Inverse::PairRestoreFront { value, transferred } => workbench
                .two_stack_queue
                .restore_front(*value, *transferred > 0),
            Inverse::ListDelete { position } => {
                workbench.list.delete(*position)?;
            }
            Inverse::ListInsert { value, position } => workbench.list.insert(*value, *position)?,
            Inverse::BstDeleteLeaf(key) => {
                workbench.bst.delete(key)?;
            }
            Inverse::BstRestore { slot, subtree } => {
                workbench.bst.replace_subtree(slot, Some(subtree.clone()))?
            }
            Inverse::Nothing => {}
            Inverse::Restore(snapshot) => snapshot.restore_into(workbench),
        }
        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
