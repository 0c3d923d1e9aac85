//! Step scripts
//!
//! Every script is derived from the committed post-state snapshot plus what
//! the command captured before it ran; the emitter never sees a live
//! workbench. Forward scripts explain `execute` and `redo`, backward scripts
//! explain `undo`.

use super::{Pointer, Step, Target};
use crate::history::{Command, Inverse, Operation};
use crate::snapshot::Snapshot;
use crate::structures::bst::{Bst, Slot, TreeShape};
use crate::structures::linked_list::LinkedList;
use crate::structures::{Query, StructureKind, Value};
use std::cmp::Ordering;
use std::iter;

/// What an animation explains
#[derive(Debug, Clone, PartialEq)]
pub enum Script {
    /// A command being applied (execute or redo)
    Forward(Command),
    /// A command being reverted (undo)
    Backward(Command),
    Query(Query),
}

impl Script {
    pub fn target(&self) -> StructureKind {
        match self {
            Script::Forward(command) | Script::Backward(command) => command.target(),
            Script::Query(query) => query.target(),
        }
    }

    /// Build the steps against the state the operation left behind
    pub fn emit(&self, after: &Snapshot) -> Vec<Step> {
        match self {
            Script::Forward(command) => forward(command, after),
            Script::Backward(command) => backward(command, after),
            Script::Query(q) => query(q, after),
        }
    }
}

/// Steps for applying `command`
pub fn forward(command: &Command, after: &Snapshot) -> Vec<Step> {
    let mut steps = Vec::new();
    match (command.operation(), command.inverse(), after) {
        (Operation::Push(v), _, Snapshot::Stack(stack)) => {
            let top = stack.len().saturating_sub(1);
            steps.push(Step::Insert {
                value: *v,
                at: Target::Index(top),
            });
            steps.push(pointer_at(Pointer::Top, stack.len()));
        }
        (Operation::Pop, Inverse::Push(v), Snapshot::Stack(stack)) => {
            steps.push(Step::Highlight {
                target: Target::Index(stack.len()),
            });
            steps.push(Step::Remove {
                value: *v,
                from: Target::Index(stack.len()),
            });
            steps.push(pointer_at(Pointer::Top, stack.len()));
        }
        (Operation::ReverseStack, _, Snapshot::Stack(stack)) => {
            reverse_trace(stack.items(), &mut steps)
        }
        (Operation::Enqueue(v), _, Snapshot::Queue(queue)) => {
            steps.push(Step::Insert {
                value: *v,
                at: Target::Index(queue.len().saturating_sub(1)),
            });
            steps.push(pointer_at(Pointer::Rear, queue.len()));
        }
        (Operation::Dequeue, Inverse::RestoreFront(v), Snapshot::Queue(queue)) => {
            steps.push(Step::Remove {
                value: *v,
                from: Target::Index(0),
            });
            steps.push(front_pointer(queue.len()));
        }
        (Operation::PairEnqueue(v), _, Snapshot::TwoStackQueue(queue)) => {
            steps.push(Step::Insert {
                value: *v,
                at: Target::Inbox(queue.inbox().len().saturating_sub(1)),
            });
        }
        (
            Operation::PairDequeue,
            Inverse::PairRestoreFront { value, transferred },
            Snapshot::TwoStackQueue(queue),
        ) => {
            let moved = *transferred;
            if moved > 0 {
                // The outbox now holds everything that moved except the value
                // that left, which was on top
                let order = queue.outbox().items().iter().copied().chain(iter::once(*value));
                for (j, v) in order.enumerate() {
                    steps.push(Step::Transfer {
                        value: v,
                        from: Target::Inbox(moved - 1 - j),
                        to: Target::Outbox(j),
                    });
                }
                steps.push(Step::Remove {
                    value: *value,
                    from: Target::Outbox(moved - 1),
                });
            } else {
                steps.push(Step::Remove {
                    value: *value,
                    from: Target::Outbox(queue.outbox().len()),
                });
            }
        }
        (Operation::ListInsert { value, position }, _, Snapshot::LinkedList(list)) => {
            list_insert(*value, *position, list.len(), &mut steps)
        }
        (Operation::ListPushFront(v), _, Snapshot::LinkedList(list)) => {
            list_insert(*v, 0, list.len(), &mut steps)
        }
        (Operation::ListPushBack(v), _, Snapshot::LinkedList(list)) => {
            list_insert(*v, list.len().saturating_sub(1), list.len(), &mut steps)
        }
        (
            Operation::ListDelete { .. },
            Inverse::ListInsert { value, position },
            Snapshot::LinkedList(list),
        ) => {
            walk(*position, &mut steps);
            steps.push(Step::Highlight {
                target: Target::Index(*position),
            });
            list_remove(*value, *position, list.len(), &mut steps);
        }
        (
            Operation::ListRemoveValue(v),
            Inverse::ListInsert { position, .. },
            Snapshot::LinkedList(list),
        ) => {
            // Nodes before the match are unchanged
            for (i, item) in list.iter().take(*position).enumerate() {
                steps.push(Step::MovePointer {
                    pointer: Pointer::Cursor,
                    to: Target::Index(i),
                });
                steps.push(Step::Compare {
                    probe: *v,
                    against: Target::Index(i),
                    ordering: v.cmp(item),
                });
            }
            steps.push(Step::Compare {
                probe: *v,
                against: Target::Index(*position),
                ordering: Ordering::Equal,
            });
            list_remove(*v, *position, list.len(), &mut steps);
        }
        (Operation::BstInsert(k), inverse, Snapshot::Bst(tree)) => {
            let path = tree.search_path(k);
            if matches!(inverse, Inverse::Nothing) {
                compare_along(*k, &path, &mut steps);
                steps.push(Step::Found {
                    target: Target::Key(*k),
                });
            } else {
                let above = &path[..path.len().saturating_sub(1)];
                compare_along(*k, above, &mut steps);
                steps.push(Step::Insert {
                    value: *k,
                    at: Target::Key(*k),
                });
                steps.push(Step::Link {
                    from: above.last().map_or(Target::Root, |(p, _)| Target::Key(*p)),
                    to: Target::Key(*k),
                });
            }
        }
        (Operation::BstDelete(k), Inverse::BstRestore { slot, subtree }, Snapshot::Bst(tree)) => {
            bst_delete(*k, slot, subtree, tree, &mut steps)
        }
        (Operation::Clear(_), Inverse::Restore(before), _) => steps.push(Step::Cleared {
            count: before.len(),
        }),
        _ => {}
    }
    steps
}

/// Steps for reverting `command`
pub fn backward(command: &Command, after: &Snapshot) -> Vec<Step> {
    let mut steps = Vec::new();
    match (command.operation(), command.inverse(), after) {
        (Operation::Push(v), _, Snapshot::Stack(stack)) => {
            steps.push(Step::Remove {
                value: *v,
                from: Target::Index(stack.len()),
            });
            steps.push(pointer_at(Pointer::Top, stack.len()));
        }
        (Operation::Pop, Inverse::Push(v), Snapshot::Stack(stack)) => {
            steps.push(Step::Insert {
                value: *v,
                at: Target::Index(stack.len().saturating_sub(1)),
            });
            steps.push(pointer_at(Pointer::Top, stack.len()));
        }
        (Operation::ReverseStack, _, Snapshot::Stack(stack)) => {
            reverse_trace(stack.items(), &mut steps)
        }
        (Operation::Enqueue(v), _, Snapshot::Queue(queue)) => {
            steps.push(Step::Remove {
                value: *v,
                from: Target::Index(queue.len()),
            });
            steps.push(pointer_at(Pointer::Rear, queue.len()));
        }
        (Operation::Dequeue, Inverse::RestoreFront(v), Snapshot::Queue(_)) => {
            steps.push(Step::Insert {
                value: *v,
                at: Target::Index(0),
            });
            steps.push(Step::MovePointer {
                pointer: Pointer::Front,
                to: Target::Index(0),
            });
        }
        (Operation::PairEnqueue(v), _, Snapshot::TwoStackQueue(queue)) => {
            steps.push(Step::Remove {
                value: *v,
                from: Target::Inbox(queue.inbox().len()),
            });
        }
        (
            Operation::PairDequeue,
            Inverse::PairRestoreFront { value, transferred },
            Snapshot::TwoStackQueue(queue),
        ) => {
            let moved = *transferred;
            if moved > 0 {
                steps.push(Step::Insert {
                    value: *value,
                    at: Target::Outbox(moved - 1),
                });
                for (j, v) in queue.inbox().items().iter().enumerate() {
                    steps.push(Step::Transfer {
                        value: *v,
                        from: Target::Outbox(moved - 1 - j),
                        to: Target::Inbox(j),
                    });
                }
            } else {
                steps.push(Step::Insert {
                    value: *value,
                    at: Target::Outbox(queue.outbox().len().saturating_sub(1)),
                });
            }
        }
        (
            Operation::ListInsert { value, .. }
            | Operation::ListPushFront(value)
            | Operation::ListPushBack(value),
            Inverse::ListDelete { position },
            Snapshot::LinkedList(list),
        ) => {
            walk(*position, &mut steps);
            list_remove(*value, *position, list.len(), &mut steps);
        }
        (
            Operation::ListDelete { .. } | Operation::ListRemoveValue(_),
            Inverse::ListInsert { value, position },
            Snapshot::LinkedList(list),
        ) => list_insert(*value, *position, list.len(), &mut steps),
        (Operation::BstInsert(k), Inverse::BstDeleteLeaf(_), Snapshot::Bst(tree)) => {
            let path = tree.search_path(k);
            compare_along(*k, &path, &mut steps);
            steps.push(Step::Remove {
                value: *k,
                from: Target::Key(*k),
            });
            steps.push(Step::Unlink {
                from: path.last().map_or(Target::Root, |(p, _)| Target::Key(*p)),
                to: Target::Key(*k),
            });
        }
        (Operation::BstInsert(k), Inverse::Nothing, _) => steps.push(Step::Highlight {
            target: Target::Key(*k),
        }),
        (Operation::BstDelete(k), Inverse::BstRestore { slot, subtree }, Snapshot::Bst(_)) => {
            steps.push(Step::Insert {
                value: *k,
                at: Target::Key(*k),
            });
            steps.push(Step::Link {
                from: slot_target(slot),
                to: Target::Key(*k),
            });
            steps.push(Step::Restored {
                count: subtree.size(),
            });
        }
        (Operation::Clear(_), Inverse::Restore(before), _) => steps.push(Step::Restored {
            count: before.len(),
        }),
        _ => {}
    }
    steps
}

/// Steps for a read-only query
pub fn query(query: &Query, current: &Snapshot) -> Vec<Step> {
    let mut steps = Vec::new();
    match (query, current) {
        (Query::Peek, Snapshot::Stack(stack)) => {
            if let Some(top) = stack.len().checked_sub(1) {
                steps.push(pointer_at(Pointer::Top, stack.len()));
                steps.push(Step::Found {
                    target: Target::Index(top),
                });
            }
        }
        (Query::Front, Snapshot::Queue(queue)) => {
            if !queue.is_empty() {
                steps.push(front_pointer(queue.len()));
                steps.push(Step::Found {
                    target: Target::Index(0),
                });
            }
        }
        (Query::PairFront, Snapshot::TwoStackQueue(queue)) => {
            // Peeking never transfers; an empty outbox means the front is
            // the oldest inbox value
            let target = match queue.outbox().len().checked_sub(1) {
                Some(top) => Some(Target::Outbox(top)),
                None if !queue.inbox().is_empty() => Some(Target::Inbox(0)),
                None => None,
            };
            if let Some(target) = target {
                steps.push(Step::Highlight { target });
                steps.push(Step::Found { target });
            }
        }
        (Query::ListSearch(v), Snapshot::LinkedList(list)) => list_search(*v, list, &mut steps),
        (Query::ListMiddle, Snapshot::LinkedList(list)) => middle_trace(list.len(), &mut steps),
        (Query::BstSearch(k), Snapshot::Bst(tree)) => {
            let path = tree.search_path(k);
            compare_along(*k, &path, &mut steps);
            match path.last() {
                Some((found, Ordering::Equal)) => steps.push(Step::Found {
                    target: Target::Key(*found),
                }),
                _ => steps.push(Step::NotFound { value: *k }),
            }
        }
        (Query::Traverse(order), Snapshot::Bst(tree)) => {
            steps.extend(tree.traverse(*order).map(|key| Step::Visit {
                value: *key,
                order: *order,
            }));
        }
        _ => {}
    }
    steps
}

fn pointer_at(pointer: Pointer, len: usize) -> Step {
    Step::MovePointer {
        pointer,
        to: len.checked_sub(1).map_or(Target::Null, Target::Index),
    }
}

fn front_pointer(len: usize) -> Step {
    Step::MovePointer {
        pointer: Pointer::Front,
        to: if len == 0 { Target::Null } else { Target::Index(0) },
    }
}

fn slot_target(slot: &Slot<Value>) -> Target {
    match slot {
        Slot::Root => Target::Root,
        Slot::Left(parent) | Slot::Right(parent) => Target::Key(*parent),
    }
}

/// Recursive reversal: every frame pops and holds one value, then the base
/// case returns and each frame inserts its value at the bottom on the way
/// back up. `after` is the reversed stack, bottom to top.
fn reverse_trace(after: &[Value], steps: &mut Vec<Step>) {
    let n = after.len();
    for (depth, value) in after.iter().enumerate() {
        steps.push(Step::Call {
            depth,
            value: Some(*value),
        });
    }
    steps.push(Step::Call {
        depth: n,
        value: None,
    });
    steps.push(Step::Return { depth: n });
    for depth in (0..n).rev() {
        steps.push(Step::Insert {
            value: after[depth],
            at: Target::Index(0),
        });
        steps.push(Step::Return { depth });
    }
    if n > 0 {
        steps.push(pointer_at(Pointer::Top, n));
    }
}

/// Cursor walk over the nodes before `position`
fn walk(position: usize, steps: &mut Vec<Step>) {
    steps.extend((0..position).map(|i| Step::MovePointer {
        pointer: Pointer::Cursor,
        to: Target::Index(i),
    }));
}

fn list_insert(value: Value, position: usize, len_after: usize, steps: &mut Vec<Step>) {
    walk(position, steps);
    steps.push(Step::Insert {
        value,
        at: Target::Index(position),
    });
    steps.push(Step::Link {
        from: Target::Index(position),
        to: if position + 1 < len_after {
            Target::Index(position + 1)
        } else {
            Target::Null
        },
    });
    steps.push(Step::Link {
        from: previous(position),
        to: Target::Index(position),
    });
}

fn list_remove(value: Value, position: usize, len_after: usize, steps: &mut Vec<Step>) {
    steps.push(Step::Remove {
        value,
        from: Target::Index(position),
    });
    steps.push(Step::Link {
        from: previous(position),
        to: if position < len_after {
            Target::Index(position)
        } else {
            Target::Null
        },
    });
}

fn previous(position: usize) -> Target {
    match position.checked_sub(1) {
        Some(p) => Target::Index(p),
        None => Target::Root,
    }
}

fn list_search(value: Value, list: &LinkedList<Value>, steps: &mut Vec<Step>) {
    for (i, item) in list.iter().enumerate() {
        steps.push(Step::MovePointer {
            pointer: Pointer::Cursor,
            to: Target::Index(i),
        });
        let ordering = value.cmp(item);
        steps.push(Step::Compare {
            probe: value,
            against: Target::Index(i),
            ordering,
        });
        if ordering == Ordering::Equal {
            steps.push(Step::Found {
                target: Target::Index(i),
            });
            return;
        }
    }
    steps.push(Step::MovePointer {
        pointer: Pointer::Cursor,
        to: Target::Null,
    });
    steps.push(Step::NotFound { value });
}

/// Slow moves one node per round, fast two, until fast has no successor.
/// Matches `LinkedList::find_middle`, so even lengths land on the second
/// middle.
fn middle_trace(len: usize, steps: &mut Vec<Step>) {
    if len == 0 {
        return;
    }
    let (mut slow, mut fast) = (0, 0);
    steps.push(Step::MovePointer {
        pointer: Pointer::Slow,
        to: Target::Index(slow),
    });
    steps.push(Step::MovePointer {
        pointer: Pointer::Fast,
        to: Target::Index(fast),
    });
    while fast + 1 < len {
        slow += 1;
        fast += 2;
        steps.push(Step::MovePointer {
            pointer: Pointer::Slow,
            to: Target::Index(slow),
        });
        steps.push(Step::MovePointer {
            pointer: Pointer::Fast,
            to: if fast < len {
                Target::Index(fast)
            } else {
                Target::Null
            },
        });
    }
    steps.push(Step::Found {
        target: Target::Index(slow),
    });
}

fn compare_along(probe: Value, path: &[(Value, Ordering)], steps: &mut Vec<Step>) {
    steps.extend(path.iter().map(|(key, ordering)| Step::Compare {
        probe,
        against: Target::Key(*key),
        ordering: *ordering,
    }));
}

/// `subtree` is the deleted node's subtree as it was before the delete;
/// `tree` is the tree after it
fn bst_delete(
    key: Value,
    slot: &Slot<Value>,
    subtree: &TreeShape<Value>,
    tree: &Bst<Value>,
    steps: &mut Vec<Step>,
) {
    // Ancestors are untouched, so the path to the parent is still there
    if let Slot::Left(parent) | Slot::Right(parent) = slot {
        steps.extend(tree.search_path(parent).into_iter().map(|(k, _)| Step::Compare {
            probe: key,
            against: Target::Key(k),
            ordering: key.cmp(&k),
        }));
    }
    steps.push(Step::Compare {
        probe: key,
        against: Target::Key(key),
        ordering: Ordering::Equal,
    });
    let from = slot_target(slot);
    // The deleted key is gone from `tree`; mark whatever occupies its place
    let site = match (subtree.left.as_deref(), subtree.right.as_deref()) {
        (None, None) => from,
        (Some(child), None) | (None, Some(child)) => Target::Key(child.key),
        (Some(_), Some(right)) => Target::Key(leftmost(right).key),
    };
    steps.push(Step::Found { target: site });

    match (subtree.left.as_deref(), subtree.right.as_deref()) {
        (None, None) => {
            steps.push(Step::Remove {
                value: key,
                from: Target::Key(key),
            });
            steps.push(Step::Unlink {
                from,
                to: Target::Key(key),
            });
        }
        (Some(child), None) | (None, Some(child)) => {
            steps.push(Step::Remove {
                value: key,
                from: Target::Key(key),
            });
            steps.push(Step::Link {
                from,
                to: Target::Key(child.key),
            });
        }
        (Some(_), Some(right)) => {
            let mut successor = right;
            let mut holder = None;
            steps.push(Step::MovePointer {
                pointer: Pointer::Successor,
                to: Target::Key(successor.key),
            });
            while let Some(left) = successor.left.as_deref() {
                holder = Some(successor.key);
                successor = left;
                steps.push(Step::MovePointer {
                    pointer: Pointer::Successor,
                    to: Target::Key(successor.key),
                });
            }
            steps.push(Step::Replace {
                target: Target::Key(successor.key),
                old: key,
                new: successor.key,
            });
            // The successor's old parent; the deleted node itself when the
            // successor was its right child
            let holder = Target::Key(holder.unwrap_or(successor.key));
            steps.push(match successor.right.as_deref() {
                Some(r) => Step::Link {
                    from: holder,
                    to: Target::Key(r.key),
                },
                None => Step::Unlink {
                    from: holder,
                    to: Target::Null,
                },
            });
        }
    }
}

fn leftmost(mut shape: &TreeShape<Value>) -> &TreeShape<Value> {
    while let Some(left) = shape.left.as_deref() {
        shape = left;
    }
    shape
}
