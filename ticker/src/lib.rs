//! Periodic timer loop for Tether.
//!
//! [`run_ticker`] drives two [`PeriodicSource`]s (a short and a long interval)
//! against a one-shot deadline. Every tick emits the source's label to a
//! [`LineSink`]; the deadline ends the loop.
//!
//! # Simultaneous readiness
//!
//! When several sources are ready at the same instant they are serviced in a
//! fixed order: short tick, long tick, deadline. A tick landing exactly on the
//! deadline is therefore still emitted, and a run emits exactly
//! `floor(deadline / short)` short ticks and `floor(deadline / long)` long ticks.

use std::time::Duration;

use tether_types::LineSink;
use thiserror::Error;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at, sleep};
use tracing::{debug, trace};

pub const DEFAULT_SHORT_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_LONG_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(3);
pub const DEFAULT_SHORT_LABEL: &str = "hello";
pub const DEFAULT_LONG_LABEL: &str = "world";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickerError {
    #[error("{source_name} interval must be greater than zero")]
    ZeroInterval { source_name: &'static str },
    #[error("{source_name} label must not be empty")]
    EmptyLabel { source_name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerSettings {
    pub short_interval: Duration,
    pub long_interval: Duration,
    pub deadline: Duration,
    pub short_label: String,
    pub long_label: String,
}

impl Default for TickerSettings {
    fn default() -> Self {
        Self {
            short_interval: DEFAULT_SHORT_INTERVAL,
            long_interval: DEFAULT_LONG_INTERVAL,
            deadline: DEFAULT_DEADLINE,
            short_label: DEFAULT_SHORT_LABEL.to_string(),
            long_label: DEFAULT_LONG_LABEL.to_string(),
        }
    }
}

impl TickerSettings {
    pub fn validate(&self) -> Result<(), TickerError> {
        for (source_name, interval, label) in [
            ("short", self.short_interval, &self.short_label),
            ("long", self.long_interval, &self.long_label),
        ] {
            if interval.is_zero() {
                return Err(TickerError::ZeroInterval { source_name });
            }
            if label.trim().is_empty() {
                return Err(TickerError::EmptyLabel { source_name });
            }
        }
        Ok(())
    }
}

/// Outcome of a completed [`run_ticker`] loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub short_ticks: u64,
    pub long_ticks: u64,
    pub elapsed: Duration,
}

/// A labelled fixed-interval tick source.
///
/// The first tick arrives one full period after [`PeriodicSource::start`].
/// Missed ticks are skipped rather than queued, so a slow consumer sees at
/// most one pending tick. The timer is released when the source is stopped or
/// dropped.
#[derive(Debug)]
pub struct PeriodicSource {
    label: String,
    interval: Interval,
    fired: u64,
}

impl PeriodicSource {
    /// Panics if `period` is zero.
    #[must_use]
    pub fn start(label: impl Into<String>, period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self {
            label: label.into(),
            interval,
            fired: 0,
        }
    }

    /// Wait for the next tick. Cancel safe.
    pub async fn tick(&mut self) {
        self.interval.tick().await;
        self.fired += 1;
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Release the timer, returning how many ticks were delivered.
    #[must_use]
    pub fn stop(self) -> u64 {
        self.fired
    }
}

impl Drop for PeriodicSource {
    fn drop(&mut self) {
        trace!(label = %self.label, fired = self.fired, "periodic source released");
    }
}

enum Fired {
    Short,
    Long,
}

/// Run the tick loop until `settings.deadline` elapses.
pub async fn run_ticker(
    settings: &TickerSettings,
    sink: &mut impl LineSink,
) -> Result<TickReport, TickerError> {
    settings.validate()?;

    let started = Instant::now();
    let mut short = PeriodicSource::start(settings.short_label.as_str(), settings.short_interval);
    let mut long = PeriodicSource::start(settings.long_label.as_str(), settings.long_interval);
    let deadline = sleep(settings.deadline);
    tokio::pin!(deadline);

    debug!(
        short_ms = settings.short_interval.as_millis() as u64,
        long_ms = settings.long_interval.as_millis() as u64,
        deadline_ms = settings.deadline.as_millis() as u64,
        "ticker started"
    );

    loop {
        let fired = tokio::select! {
            biased;
            () = short.tick() => Fired::Short,
            () = long.tick() => Fired::Long,
            () = &mut deadline => break,
        };
        match fired {
            Fired::Short => sink.emit(short.label()),
            Fired::Long => sink.emit(long.label()),
        }
    }

    let report = TickReport {
        short_ticks: short.stop(),
        long_ticks: long.stop(),
        elapsed: started.elapsed(),
    };
    debug!(
        short_ticks = report.short_ticks,
        long_ticks = report.long_ticks,
        "ticker reached deadline"
    );
    Ok(report)
}
