//! Application-level configuration constants.

// Tick cadence of the running countdown
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Widest accepted minutes entry; keeps the readout within "999:59"
pub const MAX_MINUTES_DIGITS: usize = 3;

// Initial content of the minutes field
pub const DEFAULT_MINUTES_TEXT: &str = "5";
