//! Application-wide constants for tuning and configuration
//!
//! Centralizes magic numbers to make them discoverable and configurable.

/// Input poll timeout in milliseconds while a generation is in flight.
/// Shorter so the spinner keeps animating.
pub const INPUT_POLL_BUSY_MS: u64 = 50;

/// Input poll timeout in milliseconds when idle.
pub const INPUT_POLL_IDLE_MS: u64 = 150;

/// Spinner animation frame duration in milliseconds.
pub const SPINNER_FRAME_MS: u128 = 80;

/// Maximum number of cited sources visible in the output pane at once.
pub const SOURCE_LIST_MAX_ROWS: usize = 5;
