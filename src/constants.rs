// Constants for the calculator and the visualizer

/// Separator written after every token of a postfix expression
pub const POSTFIX_SEPARATOR: char = ' ';

/// Number of digits printed after the decimal point for results and operands
pub const RESULT_PRECISION: usize = 6;

/// Default memory budget for step history (16 MB)
/// Translation snapshots copy the postfix text so far, so a few thousand
/// characters of input can fill it. Recording then stops; the calculation does not.
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 16 * 1024 * 1024;

/// Delay between steps while the visualizer is auto-playing, in milliseconds
pub const PLAY_INTERVAL_MS: u64 = 1000;

/// Exit code used when no expression is supplied on the command line
pub const EXIT_USAGE: i32 = 2;

/// Exit code used when translation or evaluation fails
pub const EXIT_FAILURE: i32 = 1;
