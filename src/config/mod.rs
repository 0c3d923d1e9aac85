//! Command-line configuration
//!
//! [`Cli`] is the raw clap definition; [`Config`] is what the rest of the
//! crate reads. Seeds fill the workbench before the first frame and are not
//! recorded in any history.

pub mod constants;

use crate::structures::bst::Bst;
use crate::structures::{StructureKind, Value, Workbench};
use clap::Parser;
use constants::{DEFAULT_LOG_LEVEL, DEFAULT_MAX_HISTORY, DEFAULT_STEP_MS};
use std::path::PathBuf;
use std::time::Duration;

/// Step-by-step data structure animations in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "structty", version, about)]
pub struct Cli {
    /// Undo entries kept per structure
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_HISTORY)]
    pub max_history: usize,

    /// Delay between animation steps during auto-play
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_STEP_MS)]
    pub step_ms: u64,

    /// Structure shown first (stack, queue, two-stack, list, bst)
    #[arg(long, value_name = "KIND", default_value = "stack")]
    pub start: StructureKind,

    /// Initial stack contents, bottom to top
    #[arg(long, value_name = "V,..", value_delimiter = ',', allow_negative_numbers = true)]
    pub seed_stack: Vec<Value>,

    /// Initial contents of both queues, front to rear
    #[arg(long, value_name = "V,..", value_delimiter = ',', allow_negative_numbers = true)]
    pub seed_queue: Vec<Value>,

    /// Initial list contents, head to tail
    #[arg(long, value_name = "V,..", value_delimiter = ',', allow_negative_numbers = true)]
    pub seed_list: Vec<Value>,

    /// Keys inserted into the tree
    #[arg(long, value_name = "V,..", value_delimiter = ',', allow_negative_numbers = true)]
    pub seed_bst: Vec<Value>,

    /// Build the seeded tree balanced instead of in insertion order
    #[arg(long)]
    pub balanced: bool,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub max_history: usize,
    pub step_interval: Duration,
    pub start: StructureKind,
    pub seed_stack: Vec<Value>,
    pub seed_queue: Vec<Value>,
    pub seed_list: Vec<Value>,
    pub seed_bst: Vec<Value>,
    pub balanced: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Workbench filled with the configured seeds
    pub fn seeded_workbench(&self) -> Workbench {
        let bst = if self.balanced {
            Bst::from_sorted_balanced(&self.seed_bst)
        } else {
            self.seed_bst.iter().copied().collect()
        };
        Workbench {
            stack: self.seed_stack.iter().copied().collect(),
            queue: self.seed_queue.iter().copied().collect(),
            two_stack_queue: self.seed_queue.iter().copied().collect(),
            list: self.seed_list.iter().copied().collect(),
            bst,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_history: DEFAULT_MAX_HISTORY,
            step_interval: Duration::from_millis(DEFAULT_STEP_MS),
            start: StructureKind::Stack,
            seed_stack: Vec::new(),
            seed_queue: Vec::new(),
            seed_list: Vec::new(),
            seed_bst: Vec::new(),
            balanced: false,
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            max_history: cli.max_history.max(1),
            step_interval: Duration::from_millis(cli.step_ms),
            start: cli.start,
            seed_stack: cli.seed_stack,
            seed_queue: cli.seed_queue,
            seed_list: cli.seed_list,
            seed_bst: cli.seed_bst,
            balanced: cli.balanced,
            log_file: cli.log_file,
            log_level: cli.log_level,
        }
    }
}
