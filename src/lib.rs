use log::{debug, info};
use std::fmt;

/// Fallback duration in whole minutes when the input field holds no usable value.
pub const DEFAULT_MINUTES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Map elapsed progress and timer status onto one of the four seasons.
    ///
    /// The running timeline is split into equal quartiles in season order,
    /// with boundary values belonging to the higher quartile. An idle timer
    /// always shows Spring and a finished one always shows Winter.
    pub fn from_progress(progress: f64, status: TimerStatus) -> Self {
        match status {
            TimerStatus::Idle => Season::Spring,
            TimerStatus::Completed => Season::Winter,
            TimerStatus::Running | TimerStatus::Paused => {
                if progress < 0.25 {
                    Season::Spring
                } else if progress < 0.5 {
                    Season::Summer
                } else if progress < 0.75 {
                    Season::Autumn
                } else {
                    Season::Winter
                }
            }
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        };
        write!(f, "{}", name)
    }
}

// Custom error type for minutes input parsing
#[derive(Debug, PartialEq, Eq)]
pub enum MinutesParseError {
    Empty,
    NotANumber,
    Zero,
}

impl fmt::Display for MinutesParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinutesParseError::Empty => write!(f, "Please enter a number of minutes"),
            MinutesParseError::NotANumber => write!(f, "Minutes must be a whole number"),
            MinutesParseError::Zero => write!(f, "Minutes must be at least 1"),
        }
    }
}

impl std::error::Error for MinutesParseError {}

/// Parse the minutes input field into a positive whole-minute count.
pub fn parse_minutes(input: &str) -> Result<u32, MinutesParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MinutesParseError::Empty);
    }
    let minutes: u32 = trimmed.parse().map_err(|_| MinutesParseError::NotANumber)?;
    if minutes == 0 {
        return Err(MinutesParseError::Zero);
    }
    Ok(minutes)
}

/// Outcome of advancing the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing changed: the timer is not running, or no whole second elapsed.
    Ignored,
    /// Remaining time went down and the countdown keeps running.
    Ticked,
    /// Remaining time reached zero on this call. Reported exactly once.
    Completed,
}

/// Discrete countdown state machine.
///
/// Holds the configured duration, the remaining time, and the lifecycle
/// status. All time values are whole seconds; the wall clock lives with the
/// caller, which feeds elapsed time in through [`CountdownTimer::tick`] or
/// [`CountdownTimer::sync_remaining`].
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    status: TimerStatus,
}

impl CountdownTimer {
    pub fn new(minutes: u32) -> Self {
        let seconds = minutes * 60;
        CountdownTimer {
            total_seconds: seconds,
            remaining_seconds: seconds,
            status: TimerStatus::Idle,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Fraction of the configured duration already elapsed, in [0, 1].
    /// Idle reads as 0 regardless of the configured duration.
    pub fn progress(&self) -> f64 {
        if self.status == TimerStatus::Idle || self.total_seconds == 0 {
            return 0.0;
        }
        let elapsed = 1.0 - self.remaining_seconds as f64 / self.total_seconds as f64;
        elapsed.clamp(0.0, 1.0)
    }

    /// Start or resume the countdown.
    ///
    /// From `Idle` or `Completed` the raw input text is parsed as whole
    /// minutes; a parse failure rejects the transition and leaves the timer
    /// untouched. From `Paused` the countdown resumes where it stopped and
    /// the input is ignored. Starting an already running timer is a no-op.
    pub fn start(&mut self, input: &str) -> Result<(), MinutesParseError> {
        match self.status {
            TimerStatus::Running => Ok(()),
            TimerStatus::Paused => {
                self.status = TimerStatus::Running;
                Ok(())
            }
            TimerStatus::Idle | TimerStatus::Completed => {
                let minutes = parse_minutes(input)?;
                self.total_seconds = minutes * 60;
                self.remaining_seconds = self.total_seconds;
                self.status = TimerStatus::Running;
                info!("countdown started: {} minutes", minutes);
                Ok(())
            }
        }
    }

    /// Freeze the countdown without touching remaining time.
    pub fn pause(&mut self) {
        if self.status == TimerStatus::Running {
            self.status = TimerStatus::Paused;
        }
    }

    /// Re-arm the timer from the current input, falling back to
    /// [`DEFAULT_MINUTES`] when the field is empty or invalid.
    pub fn reset(&mut self, input: &str) {
        let minutes = parse_minutes(input).unwrap_or(DEFAULT_MINUTES);
        self.total_seconds = minutes * 60;
        self.remaining_seconds = self.total_seconds;
        self.status = TimerStatus::Idle;
    }

    /// Advance the countdown by exactly one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != TimerStatus::Running {
            return TickOutcome::Ignored;
        }
        if self.remaining_seconds <= 1 {
            self.complete()
        } else {
            self.remaining_seconds -= 1;
            TickOutcome::Ticked
        }
    }

    /// Catch the countdown up to a deadline-derived remaining value.
    ///
    /// Remaining time only ever moves down: a tick that fires early changes
    /// nothing, and a tab that was suspended past several ticks converges on
    /// the wall-clock deadline in one call, without double-decrementing or
    /// going negative.
    pub fn sync_remaining(&mut self, remaining_now: u32) -> TickOutcome {
        if self.status != TimerStatus::Running || remaining_now >= self.remaining_seconds {
            return TickOutcome::Ignored;
        }
        let skipped = self.remaining_seconds - remaining_now - 1;
        if skipped > 0 {
            debug!("caught up {} missed seconds", skipped);
        }
        if remaining_now == 0 {
            self.complete()
        } else {
            self.remaining_seconds = remaining_now;
            TickOutcome::Ticked
        }
    }

    fn complete(&mut self) -> TickOutcome {
        self.remaining_seconds = 0;
        self.status = TimerStatus::Completed;
        info!("countdown completed");
        TickOutcome::Completed
    }
}

/// Format a second count as zero-padded "MM:SS".
///
/// The minutes field widens past two digits for durations of 100 minutes or
/// more ("120:00").
pub fn format_mm_ss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

pub mod particles;
