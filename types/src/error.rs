use std::io;

use thiserror::Error;

/// A positional value that cannot be used as a non-negative delay.
///
/// Every variant carries the argument text exactly as it was given, so the
/// diagnostic points at what the user typed rather than a reformatted number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidValueError {
    #[error("'{text}' is not a number")]
    NotANumber { text: String },
    #[error("'{text}' is negative; delays must be zero or greater")]
    Negative { text: String },
    #[error("'{text}' is not a finite number")]
    NotFinite { text: String },
    #[error("'{text}' is too large to schedule as a delay")]
    TooLarge { text: String },
}

/// Failures of the concurrency substrate itself.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to start timer runtime: {0}")]
    Runtime(#[source] io::Error),
    /// The completion channel closed before every timer reported back.
    #[error("timer task lost: {fired} of {expected} timers fired before the completion channel closed")]
    TimerLost { fired: usize, expected: usize },
}
