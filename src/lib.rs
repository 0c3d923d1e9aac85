//! # Introduction
//!
//! structty animates classic data-structure operations (stack, queue,
//! two-stack queue, singly linked list, binary search tree) step by step in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui). Every mutation
//! is an invertible command, so any operation can be undone and redone.
//!
//! ## Request pipeline
//!
//! ```text
//! Key → Operation → Command (captured inverse) → Workbench → History → Animation → TUI
//! ```
//!
//! 1. [`structures`]: the structures themselves and the [`structures::Workbench`]
//!    that owns one of each.
//! 2. [`history`]: [`history::Operation`] requests captured into invertible
//!    [`history::Command`]s, recorded in a bounded [`history::CommandHistory`].
//! 3. [`animation`]: lazy, restartable step scripts explaining a committed
//!    change, and the [`animation::Playback`] cursor over them.
//! 4. [`snapshot`]: structure copies handed to the renderer, plus tree layout.
//! 5. [`session`]: the request/response façade the shell talks to.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use structty::history::Operation;
//! use structty::session::Session;
//! use structty::structures::StructureKind;
//!
//! let mut session = Session::default();
//! session.execute(Operation::Push(1)).unwrap();
//! session.execute(Operation::Push(2)).unwrap();
//! assert_eq!(session.execute(Operation::Pop).unwrap(), Some(2));
//!
//! session.undo(StructureKind::Stack).unwrap();
//! assert_eq!(session.workbench().stack.items(), &[1, 2]);
//! ```

pub mod animation;
pub mod config;
pub mod errors;
pub mod history;
pub mod session;
pub mod snapshot;
pub mod structures;
pub mod ui;
