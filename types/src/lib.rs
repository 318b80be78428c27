//! Core domain types for sleepsort.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The engine and the binary both build on these.

#![allow(clippy::missing_errors_doc)]

mod delay;
mod error;

pub use delay::{Delay, TIMER_RESOLUTION};
pub use error::{InvalidValueError, SchedulerError};

use std::fmt;

/// One input value: the argument text as given plus its parsed magnitude.
///
/// Output echoes [`SortValue::text`] rather than a reformatted float, so
/// `0.50` prints as `0.50`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortValue {
    text: String,
    magnitude: f64,
}

impl SortValue {
    /// Parse a non-negative, finite number.
    ///
    /// Surrounding whitespace is ignored. `-0` is accepted and has magnitude zero.
    pub fn parse(text: &str) -> Result<Self, InvalidValueError> {
        let trimmed = text.trim();
        let parsed: f64 = trimmed.parse().map_err(|_| InvalidValueError::NotANumber {
            text: text.to_owned(),
        })?;

        if !parsed.is_finite() {
            return Err(InvalidValueError::NotFinite {
                text: text.to_owned(),
            });
        }
        if parsed < 0.0 {
            return Err(InvalidValueError::Negative {
                text: text.to_owned(),
            });
        }

        Ok(Self {
            text: trimmed.to_owned(),
            // Folds -0.0 into 0.0.
            magnitude: parsed.abs(),
        })
    }

    /// Parse every argument, failing on the first one that is not valid.
    pub fn parse_all<I, S>(texts: I) -> Result<Vec<Self>, InvalidValueError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|text| Self::parse(text.as_ref()))
            .collect()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn magnitude(&self) -> f64 {
        self.magnitude
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Unit that a value's magnitude is measured in when it becomes a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimeUnit {
    #[must_use]
    pub const fn seconds_per_unit(self) -> f64 {
        match self {
            TimeUnit::Seconds => 1.0,
            TimeUnit::Milliseconds => 0.001,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Seconds => "s",
            TimeUnit::Milliseconds => "ms",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Join values into the final output line: original text, single spaces.
#[must_use]
pub fn join_values(values: &[SortValue]) -> String {
    values
        .iter()
        .map(SortValue::text)
        .collect::<Vec<_>>()
        .join(" ")
}
