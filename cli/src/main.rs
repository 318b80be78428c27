//! sleepsort CLI - binary entry point.
//!
//! ```text
//! main() -> Cli::parse() -> SortValue::parse_all() -> Scheduler::new() -> sort() -> print
//! ```
//!
//! Stdout carries only results: one line per value in `--live` mode, then the
//! final space-separated line. Logs and diagnostics go to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use sleepsort_engine::{Scheduler, SchedulerConfig, SortValue, TimeUnit, join_values};

#[derive(Debug, Parser)]
#[command(name = "sleepsort", version)]
#[command(about = "Sort non-negative numbers by sleeping on each one")]
struct Cli {
    /// Values to sort; each one waits that long before it is emitted
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Print each value as soon as its timer fires
    #[arg(long)]
    live: bool,

    /// Unit a value is measured in when it becomes a delay. Timers resolve
    /// to whole milliseconds: values landing on the same millisecond tick
    /// fire together and come out in no particular order
    #[arg(long, value_enum, default_value_t = UnitArg::Seconds)]
    unit: UnitArg,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum UnitArg {
    #[value(alias = "s")]
    Seconds,
    #[value(alias = "ms")]
    Millis,
}

impl From<UnitArg> for TimeUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Seconds => TimeUnit::Seconds,
            UnitArg::Millis => TimeUnit::Milliseconds,
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(EnvFilter::new(level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    // Every value is checked before the runtime exists.
    let values = SortValue::parse_all(&cli.values)?;

    let scheduler = Scheduler::new(SchedulerConfig::new(cli.unit.into()))?;
    let mut live = cli.live.then(|| LivePrinter::new(io::stdout()));

    let sorted = scheduler.sort(values, |value| {
        if let Some(printer) = live.as_mut() {
            printer.print(value);
        }
    });
    scheduler.shutdown();
    let sorted = sorted?;

    if let Some(printer) = live {
        printer.finish().context("failed to print live output")?;
    }

    let mut out = io::stdout().lock();
    writeln!(out, "{}", join_values(&sorted))?;
    out.flush()?;
    Ok(())
}

/// Prints each fired value on its own line as it arrives.
///
/// Timers keep firing after a failed write, so the first error is held and
/// later values are skipped until [`LivePrinter::finish`] reports it.
struct LivePrinter<W> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> LivePrinter<W> {
    fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn print(&mut self, value: &SortValue) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{value}").and_then(|()| self.out.flush()) {
            tracing::debug!(error = %e, value = %value, "Live output failed");
            self.error = Some(e);
        }
    }

    fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }
}
