//! Delay computation for a single timer.
//!
//! tokio's `sleep` has two paths. A deadline that has already passed when the
//! sleep is first polled completes inline and never enters the timer wheel,
//! while any future deadline is registered in the wheel and rounded up to the
//! next millisecond tick. A zero delay would take the inline path and every
//! positive delay the wheel path, so zero-valued timers would complete by poll
//! order instead of by wheel order.
//!
//! [`Delay::effective`] floors every request at [`TIMER_RESOLUTION`], which
//! is the smallest delay the wheel can represent. Zero and sub-tick delays
//! then land on the first tick alongside each other, and every timer goes
//! through the same path.
//!
//! Ordering therefore resolves to whole ticks. Values whose deadlines round
//! up to the same millisecond fire together and are collected in whatever
//! order the runtime wakes them, so `0.0009` and `0` in seconds, or `1.7` and
//! `1.2` in milliseconds, are ties.

use std::time::Duration;

use crate::{InvalidValueError, SortValue, TimeUnit};

/// Tick of the tokio timer wheel.
pub const TIMER_RESOLUTION: Duration = Duration::from_millis(1);

/// The wait scheduled for one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delay {
    requested: Duration,
}

impl Delay {
    /// Convert a value's magnitude into a delay in `unit`.
    ///
    /// Fails with [`InvalidValueError::TooLarge`] when the magnitude does not
    /// fit in a [`Duration`].
    pub fn for_value(value: &SortValue, unit: TimeUnit) -> Result<Self, InvalidValueError> {
        let seconds = value.magnitude() * unit.seconds_per_unit();
        Duration::try_from_secs_f64(seconds)
            .map(Self::from_duration)
            .map_err(|_| InvalidValueError::TooLarge {
                text: value.text().to_owned(),
            })
    }

    #[must_use]
    pub const fn from_duration(requested: Duration) -> Self {
        Self { requested }
    }

    /// The delay derived from the value, before flooring.
    #[must_use]
    pub const fn requested(self) -> Duration {
        self.requested
    }

    /// The delay actually handed to the timer. The wheel still rounds it up
    /// to the next whole tick.
    #[must_use]
    pub fn effective(self) -> Duration {
        self.requested.max(TIMER_RESOLUTION)
    }
}
