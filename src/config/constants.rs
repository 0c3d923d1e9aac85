// Defaults for the command-line configuration

/// Undo entries kept per structure before the oldest are dropped
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Delay between animation steps during auto-play, in milliseconds
pub const DEFAULT_STEP_MS: u64 = 600;

/// Log filter used when neither `RUST_LOG` nor `--log-level` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Longest stack the recursive reverse accepts. Its recursion depth and its
/// quadratic cost both grow with the stack length.
pub const MAX_RECURSIVE_REVERSE: usize = 1_000;
