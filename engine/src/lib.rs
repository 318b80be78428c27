//! sleepsort engine - sorting by timer completion order.
//!
//! # Architecture
//!
//! ```text
//! Scheduler::new(config) -> Scheduler::sort(values, on_fire) -> Scheduler::shutdown()
//!                                  |
//!                                  v
//!                  sort_by_delay: spawn N timers -> mpsc -> collector
//! ```
//!
//! [`Scheduler`] owns a current-thread tokio runtime, so every timer task and
//! the collector run cooperatively on one thread. Callers that already have a
//! runtime can await [`sort_by_delay`] directly.

mod scheduler;

pub use scheduler::{sort_by_delay, sort_by_delay_quiet};
pub use sleepsort_types::{
    Delay, InvalidValueError, SchedulerError, SortValue, TIMER_RESOLUTION, TimeUnit, join_values,
};

use thiserror::Error;
use tokio::runtime::{self, Runtime};

/// Any way a sort can fail.
#[derive(Debug, Error)]
pub enum SortError {
    #[error(transparent)]
    InvalidValue(#[from] InvalidValueError),
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SchedulerConfig {
    pub unit: TimeUnit,
}

impl SchedulerConfig {
    #[must_use]
    pub const fn new(unit: TimeUnit) -> Self {
        Self { unit }
    }
}

/// A single-threaded timer runtime with an explicit lifecycle.
///
/// Construction builds the runtime, [`Scheduler::sort`] drives one sort to
/// completion on it, and [`Scheduler::shutdown`] (or drop) tears it down.
pub struct Scheduler {
    runtime: Runtime,
    config: SchedulerConfig,
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Result<Self, SchedulerError> {
        let runtime = runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(SchedulerError::Runtime)?;

        tracing::debug!(unit = %config.unit, "Timer runtime started");
        Ok(Self { runtime, config })
    }

    /// Block the calling thread until every value's timer has fired.
    pub fn sort<F>(&self, values: Vec<SortValue>, on_fire: F) -> Result<Vec<SortValue>, SortError>
    where
        F: FnMut(&SortValue),
    {
        self.runtime
            .block_on(sort_by_delay(values, self.config.unit, on_fire))
    }

    pub fn shutdown(self) {
        self.runtime.shutdown_background();
        tracing::debug!("Timer runtime stopped");
    }
}
