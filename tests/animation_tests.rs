// Integration tests for step emission and playback

use std::cmp::Ordering;

use structty::animation::{Animation, PlaybackState, Pointer, Script, Step, Target};
use structty::history::Operation;
use structty::session::Session;
use structty::structures::bst::Traversal;
use structty::structures::{Answer, Query, StructureKind, Workbench};

fn steps(session: &Session) -> Vec<Step> {
    session
        .playback()
        .expect("no playback")
        .animation()
        .steps()
        .to_vec()
}

#[test]
fn test_push_steps() {
    let mut session = Session::default();
    session.execute(Operation::Push(5)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 5,
                at: Target::Index(0)
            },
            Step::MovePointer {
                pointer: Pointer::Top,
                to: Target::Index(0)
            },
        ]
    );
}

#[test]
fn test_animation_is_lazy_and_restartable() {
    let workbench = Workbench {
        bst: [2, 1, 3].into_iter().collect(),
        ..Workbench::default()
    };
    let script = Script::Query(Query::Traverse(Traversal::InOrder));
    let animation = Animation::new("Traverse", script, &workbench);
    assert!(!animation.is_generated());

    let first: Vec<Step> = animation.iter().cloned().collect();
    assert!(animation.is_generated());
    let second: Vec<Step> = animation.iter().cloned().collect();
    assert_eq!(first, second);
    assert_eq!(
        first[0],
        Step::Visit {
            value: 1,
            order: Traversal::InOrder
        }
    );
    assert_eq!(animation.len(), 3);
}

#[test]
fn test_two_stack_dequeue_shows_transfer() {
    let mut session = Session::default();
    for v in 1..=3 {
        session.execute(Operation::PairEnqueue(v)).unwrap();
    }
    assert_eq!(session.execute(Operation::PairDequeue).unwrap(), Some(1));
    assert_eq!(
        steps(&session),
        vec![
            Step::Transfer {
                value: 3,
                from: Target::Inbox(2),
                to: Target::Outbox(0)
            },
            Step::Transfer {
                value: 2,
                from: Target::Inbox(1),
                to: Target::Outbox(1)
            },
            Step::Transfer {
                value: 1,
                from: Target::Inbox(0),
                to: Target::Outbox(2)
            },
            Step::Remove {
                value: 1,
                from: Target::Outbox(2)
            },
        ]
    );

    // Undo puts the value back and moves everything home again
    session.undo(StructureKind::TwoStackQueue).unwrap();
    let back = steps(&session);
    assert_eq!(
        back[0],
        Step::Insert {
            value: 1,
            at: Target::Outbox(2)
        }
    );
    assert_eq!(
        back[3],
        Step::Transfer {
            value: 3,
            from: Target::Outbox(0),
            to: Target::Inbox(2)
        }
    );
    assert_eq!(session.workbench().two_stack_queue.inbox().items(), &[1, 2, 3]);
}

#[test]
fn test_bst_insert_compares_along_path() {
    let mut session = Session::default();
    for k in [50, 30, 70] {
        session.execute(Operation::BstInsert(k)).unwrap();
    }
    session.execute(Operation::BstInsert(40)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Compare {
                probe: 40,
                against: Target::Key(50),
                ordering: Ordering::Less
            },
            Step::Compare {
                probe: 40,
                against: Target::Key(30),
                ordering: Ordering::Greater
            },
            Step::Insert {
                value: 40,
                at: Target::Key(40)
            },
            Step::Link {
                from: Target::Key(30),
                to: Target::Key(40)
            },
        ]
    );
}

#[test]
fn test_bst_delete_walks_to_successor() {
    let mut session = Session::default();
    for k in [50, 30, 70, 20, 40, 35] {
        session.execute(Operation::BstInsert(k)).unwrap();
    }
    session.execute(Operation::BstDelete(30)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Compare {
                probe: 30,
                against: Target::Key(50),
                ordering: Ordering::Less
            },
            Step::Compare {
                probe: 30,
                against: Target::Key(30),
                ordering: Ordering::Equal
            },
            // 35 now sits where 30 was found
            Step::Found {
                target: Target::Key(35)
            },
            Step::MovePointer {
                pointer: Pointer::Successor,
                to: Target::Key(40)
            },
            Step::MovePointer {
                pointer: Pointer::Successor,
                to: Target::Key(35)
            },
            Step::Replace {
                target: Target::Key(35),
                old: 30,
                new: 35
            },
            Step::Unlink {
                from: Target::Key(40),
                to: Target::Null
            },
        ]
    );
}

#[test]
fn test_list_middle_query() {
    let mut session = Session::default();
    for v in [1, 2, 3, 4] {
        session.execute(Operation::ListPushBack(v)).unwrap();
    }
    let answer = session.query(Query::ListMiddle).unwrap();
    assert_eq!(answer, Answer::Middle(Some((2, 3))));

    let script = steps(&session);
    assert_eq!(
        script.last(),
        Some(&Step::Found {
            target: Target::Index(2)
        })
    );
    assert!(script.contains(&Step::MovePointer {
        pointer: Pointer::Fast,
        to: Target::Null
    }));
}

#[test]
fn test_list_search_miss() {
    let mut session = Session::default();
    session.execute(Operation::ListPushFront(1)).unwrap();
    assert_eq!(
        session.query(Query::ListSearch(9)).unwrap(),
        Answer::Position(None)
    );
    assert_eq!(steps(&session).last(), Some(&Step::NotFound { value: 9 }));
}

#[test]
fn test_reverse_traces_recursion() {
    let mut session = Session::default();
    for v in 1..=3 {
        session.execute(Operation::Push(v)).unwrap();
    }
    session.execute(Operation::ReverseStack).unwrap();
    let script = steps(&session);
    let deepest = script
        .iter()
        .filter_map(|s| match s {
            Step::Call { depth, .. } => Some(*depth),
            _ => None,
        })
        .max();
    assert_eq!(deepest, Some(3));
    assert_eq!(session.workbench().stack.items(), &[3, 2, 1]);
}

#[test]
fn test_clear_and_undo_report_counts() {
    let mut session = Session::default();
    for v in 1..=3 {
        session.execute(Operation::Enqueue(v)).unwrap();
    }
    session.execute(Operation::Clear(StructureKind::Queue)).unwrap();
    assert_eq!(steps(&session), vec![Step::Cleared { count: 3 }]);
    session.undo(StructureKind::Queue).unwrap();
    assert_eq!(steps(&session), vec![Step::Restored { count: 3 }]);
}

#[test]
fn test_playback_controls() {
    let mut session = Session::default();
    session.execute(Operation::Push(1)).unwrap();
    let playback = session.playback_mut().unwrap();
    assert_eq!(playback.state(), PlaybackState::Playing);
    assert_eq!(playback.progress(), (0, 2));

    playback.advance();
    assert_eq!(
        playback.advance().cloned(),
        Some(Step::MovePointer {
            pointer: Pointer::Top,
            to: Target::Index(0)
        })
    );
    assert_eq!(playback.state(), PlaybackState::Finished);
    assert!(playback.advance().is_none());

    playback.retreat();
    assert_eq!(playback.state(), PlaybackState::Paused);
    assert_eq!(playback.shown(), 1);

    playback.restart();
    assert_eq!(playback.progress(), (0, 2));
    assert!(playback.is_playing());
}

#[test]
fn test_new_request_cancels_playback_but_not_state() {
    let mut session = Session::default();
    session.execute(Operation::Push(1)).unwrap();
    assert!(session.cancel_playback());
    assert_eq!(session.playback().unwrap().state(), PlaybackState::Cancelled);
    assert!(!session.cancel_playback());
    // The push stays committed
    assert_eq!(session.workbench().stack.items(), &[1]);

    session.execute(Operation::Push(2)).unwrap();
    assert_eq!(session.playback().unwrap().animation().title(), "Push 2");
    assert!(session.playback().unwrap().is_active());
}

#[test]
fn test_step_display() {
    let step = Step::Compare {
        probe: 40,
        against: Target::Key(50),
        ordering: Ordering::Less,
    };
    assert_eq!(step.to_string(), "Compare 40 with node 50: smaller, go left");
    assert_eq!(
        Step::Transfer {
            value: 3,
            from: Target::Inbox(2),
            to: Target::Outbox(0)
        }
        .to_string(),
        "Move 3 from inbox[2] to outbox[0]"
    );
}

fn seeded_session() -> Session {
    let workbench = Workbench {
        stack: [1, 2, 3].into_iter().collect(),
        queue: [1, 2, 3].into_iter().collect(),
        list: [1, 2, 3, 4, 5].into_iter().collect(),
        bst: [50, 30, 70, 20, 40, 60, 80, 35, 45].into_iter().collect(),
        ..Workbench::default()
    };
    Session::with_workbench(workbench, 10)
}

fn cursor(i: usize) -> Step {
    Step::MovePointer {
        pointer: Pointer::Cursor,
        to: Target::Index(i),
    }
}

fn link(from: Target, to: Target) -> Step {
    Step::Link { from, to }
}

#[test]
fn test_stack_pop_and_undo_steps() {
    let mut session = seeded_session();
    assert_eq!(session.execute(Operation::Pop).unwrap(), Some(3));
    assert_eq!(
        steps(&session),
        vec![
            Step::Highlight {
                target: Target::Index(2)
            },
            Step::Remove {
                value: 3,
                from: Target::Index(2)
            },
            Step::MovePointer {
                pointer: Pointer::Top,
                to: Target::Index(1)
            },
        ]
    );

    session.undo(StructureKind::Stack).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 3,
                at: Target::Index(2)
            },
            Step::MovePointer {
                pointer: Pointer::Top,
                to: Target::Index(2)
            },
        ]
    );
}

#[test]
fn test_stack_push_undo_steps() {
    let mut session = seeded_session();
    session.execute(Operation::Push(4)).unwrap();
    session.undo(StructureKind::Stack).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Remove {
                value: 4,
                from: Target::Index(3)
            },
            Step::MovePointer {
                pointer: Pointer::Top,
                to: Target::Index(2)
            },
        ]
    );
}

#[test]
fn test_queue_enqueue_and_undo_steps() {
    let mut session = seeded_session();
    session.execute(Operation::Enqueue(4)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 4,
                at: Target::Index(3)
            },
            Step::MovePointer {
                pointer: Pointer::Rear,
                to: Target::Index(3)
            },
        ]
    );

    session.undo(StructureKind::Queue).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Remove {
                value: 4,
                from: Target::Index(3)
            },
            Step::MovePointer {
                pointer: Pointer::Rear,
                to: Target::Index(2)
            },
        ]
    );
}

#[test]
fn test_queue_dequeue_and_undo_steps() {
    let mut session = seeded_session();
    assert_eq!(session.execute(Operation::Dequeue).unwrap(), Some(1));
    assert_eq!(
        steps(&session),
        vec![
            Step::Remove {
                value: 1,
                from: Target::Index(0)
            },
            Step::MovePointer {
                pointer: Pointer::Front,
                to: Target::Index(0)
            },
        ]
    );

    session.undo(StructureKind::Queue).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 1,
                at: Target::Index(0)
            },
            Step::MovePointer {
                pointer: Pointer::Front,
                to: Target::Index(0)
            },
        ]
    );
}

#[test]
fn test_dequeue_of_last_value_points_front_at_null() {
    let mut session = Session::default();
    session.execute(Operation::Enqueue(7)).unwrap();
    session.execute(Operation::Dequeue).unwrap();
    assert_eq!(
        steps(&session).last(),
        Some(&Step::MovePointer {
            pointer: Pointer::Front,
            to: Target::Null
        })
    );
}

#[test]
fn test_two_stack_enqueue_and_plain_dequeue_steps() {
    let mut session = Session::default();
    for v in 1..=3 {
        session.execute(Operation::PairEnqueue(v)).unwrap();
    }
    assert_eq!(
        steps(&session),
        vec![Step::Insert {
            value: 3,
            at: Target::Inbox(2)
        }]
    );
    session.undo(StructureKind::TwoStackQueue).unwrap();
    assert_eq!(
        steps(&session),
        vec![Step::Remove {
            value: 3,
            from: Target::Inbox(2)
        }]
    );

    // First dequeue refills the outbox as [2, 1]; the second needs no transfer
    session.execute(Operation::PairDequeue).unwrap();
    assert_eq!(session.execute(Operation::PairDequeue).unwrap(), Some(2));
    assert_eq!(
        steps(&session),
        vec![Step::Remove {
            value: 2,
            from: Target::Outbox(0)
        }]
    );
    session.undo(StructureKind::TwoStackQueue).unwrap();
    assert_eq!(
        steps(&session),
        vec![Step::Insert {
            value: 2,
            at: Target::Outbox(0)
        }]
    );
}

#[test]
fn test_list_insert_steps_at_head_middle_and_tail() {
    let mut session = seeded_session();
    session
        .execute(Operation::ListInsert {
            value: 9,
            position: 0,
        })
        .unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 9,
                at: Target::Index(0)
            },
            link(Target::Index(0), Target::Index(1)),
            link(Target::Root, Target::Index(0)),
        ]
    );
    session.undo(StructureKind::LinkedList).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Remove {
                value: 9,
                from: Target::Index(0)
            },
            link(Target::Root, Target::Index(0)),
        ]
    );

    session
        .execute(Operation::ListInsert {
            value: 9,
            position: 2,
        })
        .unwrap();
    assert_eq!(
        steps(&session),
        vec![
            cursor(0),
            cursor(1),
            Step::Insert {
                value: 9,
                at: Target::Index(2)
            },
            link(Target::Index(2), Target::Index(3)),
            link(Target::Index(1), Target::Index(2)),
        ]
    );
    session.undo(StructureKind::LinkedList).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            cursor(0),
            cursor(1),
            Step::Remove {
                value: 9,
                from: Target::Index(2)
            },
            link(Target::Index(1), Target::Index(2)),
        ]
    );

    session.execute(Operation::ListPushBack(9)).unwrap();
    let mut tail = (0..5).map(cursor).collect::<Vec<_>>();
    tail.extend([
        Step::Insert {
            value: 9,
            at: Target::Index(5),
        },
        link(Target::Index(5), Target::Null),
        link(Target::Index(4), Target::Index(5)),
    ]);
    assert_eq!(steps(&session), tail);
    session.undo(StructureKind::LinkedList).unwrap();
    let mut untail = (0..5).map(cursor).collect::<Vec<_>>();
    untail.extend([
        Step::Remove {
            value: 9,
            from: Target::Index(5),
        },
        link(Target::Index(4), Target::Null),
    ]);
    assert_eq!(steps(&session), untail);

    // Head insert by name matches position 0
    session.execute(Operation::ListPushFront(8)).unwrap();
    assert_eq!(
        steps(&session)[0],
        Step::Insert {
            value: 8,
            at: Target::Index(0)
        }
    );
    assert_eq!(session.workbench().list.to_vec(), vec![8, 1, 2, 3, 4, 5]);
}

#[test]
fn test_list_delete_steps_at_head_middle_and_tail() {
    let mut session = seeded_session();
    session.execute(Operation::ListDelete { position: 0 }).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Highlight {
                target: Target::Index(0)
            },
            Step::Remove {
                value: 1,
                from: Target::Index(0)
            },
            link(Target::Root, Target::Index(0)),
        ]
    );
    session.undo(StructureKind::LinkedList).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 1,
                at: Target::Index(0)
            },
            link(Target::Index(0), Target::Index(1)),
            link(Target::Root, Target::Index(0)),
        ]
    );

    session.execute(Operation::ListDelete { position: 2 }).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            cursor(0),
            cursor(1),
            Step::Highlight {
                target: Target::Index(2)
            },
            Step::Remove {
                value: 3,
                from: Target::Index(2)
            },
            link(Target::Index(1), Target::Index(2)),
        ]
    );
    session.undo(StructureKind::LinkedList).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            cursor(0),
            cursor(1),
            Step::Insert {
                value: 3,
                at: Target::Index(2)
            },
            link(Target::Index(2), Target::Index(3)),
            link(Target::Index(1), Target::Index(2)),
        ]
    );

    session.execute(Operation::ListDelete { position: 4 }).unwrap();
    let mut tail = (0..4).map(cursor).collect::<Vec<_>>();
    tail.extend([
        Step::Highlight {
            target: Target::Index(4),
        },
        Step::Remove {
            value: 5,
            from: Target::Index(4),
        },
        link(Target::Index(3), Target::Null),
    ]);
    assert_eq!(steps(&session), tail);
    session.undo(StructureKind::LinkedList).unwrap();
    let mut restored = (0..4).map(cursor).collect::<Vec<_>>();
    restored.extend([
        Step::Insert {
            value: 5,
            at: Target::Index(4),
        },
        link(Target::Index(4), Target::Null),
        link(Target::Index(3), Target::Index(4)),
    ]);
    assert_eq!(steps(&session), restored);
}

#[test]
fn test_list_remove_value_steps() {
    let mut session = seeded_session();
    session.execute(Operation::ListRemoveValue(3)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            cursor(0),
            Step::Compare {
                probe: 3,
                against: Target::Index(0),
                ordering: Ordering::Greater
            },
            cursor(1),
            Step::Compare {
                probe: 3,
                against: Target::Index(1),
                ordering: Ordering::Greater
            },
            Step::Compare {
                probe: 3,
                against: Target::Index(2),
                ordering: Ordering::Equal
            },
            Step::Remove {
                value: 3,
                from: Target::Index(2)
            },
            link(Target::Index(1), Target::Index(2)),
        ]
    );
    session.undo(StructureKind::LinkedList).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            cursor(0),
            cursor(1),
            Step::Insert {
                value: 3,
                at: Target::Index(2)
            },
            link(Target::Index(2), Target::Index(3)),
            link(Target::Index(1), Target::Index(2)),
        ]
    );

    session.execute(Operation::ListRemoveValue(1)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Compare {
                probe: 1,
                against: Target::Index(0),
                ordering: Ordering::Equal
            },
            Step::Remove {
                value: 1,
                from: Target::Index(0)
            },
            link(Target::Root, Target::Index(0)),
        ]
    );

    session.execute(Operation::ListRemoveValue(5)).unwrap();
    let script = steps(&session);
    assert_eq!(script.len(), 3 * 2 + 3);
    assert_eq!(
        script[script.len() - 2..],
        [
            Step::Remove {
                value: 5,
                from: Target::Index(3)
            },
            link(Target::Index(2), Target::Null),
        ]
    );
}

#[test]
fn test_bst_leaf_delete_and_undo_steps() {
    let mut session = seeded_session();
    session.execute(Operation::BstDelete(20)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Compare {
                probe: 20,
                against: Target::Key(50),
                ordering: Ordering::Less
            },
            Step::Compare {
                probe: 20,
                against: Target::Key(30),
                ordering: Ordering::Less
            },
            Step::Compare {
                probe: 20,
                against: Target::Key(20),
                ordering: Ordering::Equal
            },
            Step::Found {
                target: Target::Key(30)
            },
            Step::Remove {
                value: 20,
                from: Target::Key(20)
            },
            Step::Unlink {
                from: Target::Key(30),
                to: Target::Key(20)
            },
        ]
    );

    session.undo(StructureKind::Bst).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 20,
                at: Target::Key(20)
            },
            link(Target::Key(30), Target::Key(20)),
            Step::Restored { count: 1 },
        ]
    );
}

#[test]
fn test_bst_one_child_delete_and_undo_steps() {
    let workbench = Workbench {
        bst: [50, 30, 70, 20, 40, 60].into_iter().collect(),
        ..Workbench::default()
    };
    let mut session = Session::with_workbench(workbench, 10);
    session.execute(Operation::BstDelete(70)).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Compare {
                probe: 70,
                against: Target::Key(50),
                ordering: Ordering::Greater
            },
            Step::Compare {
                probe: 70,
                against: Target::Key(70),
                ordering: Ordering::Equal
            },
            // 60 was lifted into 70's place
            Step::Found {
                target: Target::Key(60)
            },
            Step::Remove {
                value: 70,
                from: Target::Key(70)
            },
            link(Target::Key(50), Target::Key(60)),
        ]
    );

    session.undo(StructureKind::Bst).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Insert {
                value: 70,
                at: Target::Key(70)
            },
            link(Target::Key(50), Target::Key(70)),
            Step::Restored { count: 2 },
        ]
    );
}

#[test]
fn test_bst_insert_undo_steps() {
    let mut session = Session::default();
    for k in [50, 30, 70, 40] {
        session.execute(Operation::BstInsert(k)).unwrap();
    }
    session.undo(StructureKind::Bst).unwrap();
    assert_eq!(
        steps(&session),
        vec![
            Step::Compare {
                probe: 40,
                against: Target::Key(50),
                ordering: Ordering::Less
            },
            Step::Compare {
                probe: 40,
                against: Target::Key(30),
                ordering: Ordering::Greater
            },
            Step::Remove {
                value: 40,
                from: Target::Key(40)
            },
            Step::Unlink {
                from: Target::Key(30),
                to: Target::Key(40)
            },
        ]
    );
}

#[test]
fn test_steps_wait_until_asked_for() {
    let mut session = Session::default();
    session.execute(Operation::Push(1)).unwrap();
    let playback = session.playback().unwrap();
    assert!(!playback.animation().is_generated());
    assert_eq!(playback.state(), PlaybackState::Playing);

    // An empty script finishes on the first advance
    session
        .query(Query::Traverse(Traversal::InOrder))
        .unwrap();
    let playback = session.playback_mut().unwrap();
    assert_eq!(playback.state(), PlaybackState::Playing);
    assert!(playback.advance().is_none());
    assert!(playback.animation().is_generated());
    assert_eq!(playback.state(), PlaybackState::Finished);
}
