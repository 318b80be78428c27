//! Completion-order scheduling.
//!
//! Every value gets its own spawned timer task. When a timer fires the task
//! sends its value down a shared channel, and a single collector drains that
//! channel until every timer has reported. Arrival order on the channel is
//! completion order, which is the output order.

use sleepsort_types::{Delay, InvalidValueError, SchedulerError, SortValue, TimeUnit};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use crate::SortError;

/// A fired timer, as seen by the collector.
#[derive(Debug)]
struct Completion {
    value: SortValue,
    delay: Delay,
}

/// Sort `values` by firing one timer per value and collecting them as they
/// complete.
///
/// `on_fire` runs for each value at the moment it is collected, before it is
/// appended to the result. Every delay is validated before any timer is
/// spawned, so an [`InvalidValueError`] never leaves timers running.
///
/// Must be awaited inside a tokio runtime with the time driver enabled.
pub async fn sort_by_delay<F>(
    values: Vec<SortValue>,
    unit: TimeUnit,
    on_fire: F,
) -> Result<Vec<SortValue>, SortError>
where
    F: FnMut(&SortValue),
{
    let timers = values
        .into_iter()
        .map(|value| {
            let delay = Delay::for_value(&value, unit)?;
            Ok((value, delay))
        })
        .collect::<Result<Vec<_>, InvalidValueError>>()?;

    let expected = timers.len();
    if expected == 0 {
        return Ok(Vec::new());
    }

    tracing::info!(count = expected, unit = %unit, "Scheduling timers");
    let started = Instant::now();

    let (tx, rx) = mpsc::unbounded_channel();
    for (value, delay) in timers {
        tracing::trace!(value = %value, "Spawning timer");
        tokio::spawn(fire_after(value, delay, tx.clone()));
    }
    // Only the timer tasks hold senders from here on.
    drop(tx);

    let sorted = collect(rx, expected, started, on_fire).await?;

    tracing::info!(
        count = sorted.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "All timers fired"
    );
    Ok(sorted)
}

/// [`sort_by_delay`] without a per-value hook.
pub async fn sort_by_delay_quiet(
    values: Vec<SortValue>,
    unit: TimeUnit,
) -> Result<Vec<SortValue>, SortError> {
    sort_by_delay(values, unit, |_| {}).await
}

async fn fire_after(
    value: SortValue,
    delay: Delay,
    completions: mpsc::UnboundedSender<Completion>,
) {
    time::sleep(delay.effective()).await;
    // The receiver is only gone if the collector already gave up.
    let _ = completions.send(Completion { value, delay });
}

async fn collect<F>(
    mut completions: mpsc::UnboundedReceiver<Completion>,
    expected: usize,
    started: Instant,
    mut on_fire: F,
) -> Result<Vec<SortValue>, SchedulerError>
where
    F: FnMut(&SortValue),
{
    let mut sorted = Vec::with_capacity(expected);

    while sorted.len() < expected {
        let Some(Completion { value, delay }) = completions.recv().await else {
            return Err(SchedulerError::TimerLost {
                fired: sorted.len(),
                expected,
            });
        };

        tracing::debug!(
            value = %value,
            requested_ms = delay.requested().as_secs_f64() * 1000.0,
            effective_ms = delay.effective().as_secs_f64() * 1000.0,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Timer fired"
        );
        on_fire(&value);
        sorted.push(value);
    }

    Ok(sorted)
}
