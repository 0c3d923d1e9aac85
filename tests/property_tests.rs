//! Property-based tests for the structure core and command history

use std::collections::VecDeque;

use proptest::prelude::*;
use structty::history::{Command, CommandHistory, Operation};
use structty::structures::bst::Bst;
use structty::structures::queue::TwoStackQueue;
use structty::structures::stack::Stack;
use structty::structures::{StructureKind, Workbench};

/// `Some(v)` pushes/enqueues `v`, `None` pops/dequeues
fn push_pop_strategy() -> impl Strategy<Value = Vec<Option<i64>>> {
    prop::collection::vec(prop::option::of(-100i64..100), 0..200)
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    let v = -20i64..20;
    prop_oneof![
        v.clone().prop_map(Operation::Push),
        Just(Operation::Pop),
        Just(Operation::ReverseStack),
        v.clone().prop_map(Operation::Enqueue),
        Just(Operation::Dequeue),
        v.clone().prop_map(Operation::PairEnqueue),
        Just(Operation::PairDequeue),
        (v.clone(), 0usize..6)
            .prop_map(|(value, position)| Operation::ListInsert { value, position }),
        v.clone().prop_map(Operation::ListPushFront),
        v.clone().prop_map(Operation::ListPushBack),
        (0usize..6).prop_map(|position| Operation::ListDelete { position }),
        v.clone().prop_map(Operation::ListRemoveValue),
        v.clone().prop_map(Operation::BstInsert),
        v.prop_map(Operation::BstDelete),
        prop::sample::select(StructureKind::ALL.to_vec()).prop_map(Operation::Clear),
    ]
}

/// Property: a stack pops values in reverse push order
#[test]
fn prop_stack_is_lifo() {
    proptest!(|(ops in push_pop_strategy())| {
        let mut stack = Stack::new();
        let mut model = Vec::new();
        for op in ops {
            match op {
                Some(v) => {
                    stack.push(v);
                    model.push(v);
                }
                None => prop_assert_eq!(stack.pop().ok(), model.pop()),
            }
        }
        prop_assert_eq!(stack.items(), model.as_slice());
    });
}

/// Property: the two-stack queue dequeues in enqueue order no matter when
/// the inbox is transferred
#[test]
fn prop_two_stack_queue_is_fifo() {
    proptest!(|(ops in push_pop_strategy())| {
        let mut queue = TwoStackQueue::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Some(v) => {
                    queue.enqueue(v);
                    model.push_back(v);
                }
                None => prop_assert_eq!(queue.dequeue().ok(), model.pop_front()),
            }
            prop_assert_eq!(queue.len(), model.len());
        }
        let rest: Vec<i64> = queue.iter().copied().collect();
        prop_assert_eq!(rest, Vec::from(model));
    });
}

/// Property: in-order traversal of any BST is sorted and duplicate-free
#[test]
fn prop_bst_in_order_is_sorted() {
    proptest!(|(keys in prop::collection::vec(-1000i64..1000, 0..100))| {
        let tree: Bst<i64> = keys.iter().copied().collect();
        let in_order: Vec<i64> = tree.in_order().copied().collect();

        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(in_order, expected);
    });
}

/// Property: deleting any key keeps every other key in sorted order
#[test]
fn prop_bst_delete_preserves_order() {
    proptest!(|(keys in prop::collection::vec(-50i64..50, 1..60), pick in any::<prop::sample::Index>())| {
        let mut tree: Bst<i64> = keys.iter().copied().collect();
        let victim = keys[pick.index(keys.len())];
        tree.delete(&victim).unwrap();

        let mut expected = keys.clone();
        expected.sort_unstable();
        expected.dedup();
        expected.retain(|&k| k != victim);
        prop_assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), expected);
        prop_assert!(!tree.contains(&victim));
    });
}

/// Property: undoing every command restores the empty workbench exactly, and
/// redoing them all rebuilds the final state exactly
#[test]
fn prop_undo_redo_round_trip() {
    proptest!(|(ops in prop::collection::vec(operation_strategy(), 0..80))| {
        let mut workbench = Workbench::new();
        let mut history = CommandHistory::new(1000);
        for op in ops {
            // Requests the structures reject never reach the history
            if let Ok(command) = Command::capture(op, &workbench) {
                history.execute(command, &mut workbench).unwrap();
            }
        }
        let end = workbench.clone();

        while history.can_undo() {
            history.undo(&mut workbench).unwrap();
        }
        prop_assert_eq!(&workbench, &Workbench::new());

        while history.can_redo() {
            history.redo(&mut workbench).unwrap();
        }
        prop_assert_eq!(&workbench, &end);
    });
}
