//! Fixed-rate driver loop
//!
//! Owns the sequencer and calls it at a fixed cadence, forwarding every
//! command to the configured sink. The sequencer measures phase durations
//! against the clock, not against the tick count, so a slow or jittery
//! cadence only lowers the command update rate.

use std::future::Future;
use std::time::Duration;

use erp42_park_core::{ParkingParams, ParkingSequencer, Phase, TickOutcome, TimeSource};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::transport::CommandSink;

/// Shortest tick period the driver accepts.
pub const MIN_PERIOD: Duration = Duration::from_micros(100);

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Sequencer evaluations
    pub ticks: u64,
    /// Phase transitions (ticks without a command)
    pub transitions: u64,
    /// Commands accepted by the sink
    pub commands_sent: u64,
    /// Commands the sink failed to deliver
    pub send_failures: u64,
    /// Phase active when the loop ended
    pub final_phase: Phase,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            ticks: 0,
            transitions: 0,
            commands_sent: 0,
            send_failures: 0,
            final_phase: Phase::Approach,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Finished,
}

/// Tick loop around a [`ParkingSequencer`].
pub struct ParkingDriver<T: TimeSource> {
    sequencer: ParkingSequencer,
    clock: T,
    sink: Box<dyn CommandSink>,
    period: Duration,
    linger: Option<Duration>,
}

impl<T: TimeSource> ParkingDriver<T> {
    /// Start a maneuver now (per `clock`) that will be ticked every
    /// `period`.
    pub fn new(
        params: ParkingParams,
        clock: T,
        sink: Box<dyn CommandSink>,
        period: Duration,
    ) -> Self {
        let sequencer = ParkingSequencer::start(params, &clock);
        Self {
            sequencer,
            clock,
            sink,
            period: period.max(MIN_PERIOD),
            linger: None,
        }
    }

    /// End the loop once DONE has lasted `linger`. Without it the loop runs
    /// until shutdown, emitting stop commands.
    pub fn with_linger(mut self, linger: Option<Duration>) -> Self {
        self.linger = linger;
        self
    }

    pub fn sequencer(&self) -> &ParkingSequencer {
        &self.sequencer
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run until `shutdown` resolves or the linger time in DONE has passed.
    pub async fn run<F>(mut self, shutdown: F) -> RunSummary
    where
        F: Future<Output = ()>,
    {
        let mut summary = RunSummary::new();
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        info!(
            sink = self.sink.name(),
            period_ms = self.period.as_millis() as u64,
            "starting parking maneuver"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!(phase = %self.sequencer.phase(), "shutdown requested");
                    break;
                }
                _ = interval.tick() => {
                    if self.step(&mut summary).await == Flow::Finished {
                        break;
                    }
                }
            }
        }

        summary.final_phase = self.sequencer.phase();
        info!(
            ticks = summary.ticks,
            commands = summary.commands_sent,
            failures = summary.send_failures,
            phase = %summary.final_phase,
            "driver stopped"
        );
        summary
    }

    async fn step(&mut self, summary: &mut RunSummary) -> Flow {
        let now = self.clock.now();
        summary.ticks += 1;

        let command = match self.sequencer.tick(now) {
            TickOutcome::Transition { from, to, at } => {
                summary.transitions += 1;
                info!(%from, %to, %at, "Transition: {from} → {to}");
                return Flow::Continue;
            }
            TickOutcome::Command(command) => command,
        };

        debug!(
            phase = %self.sequencer.phase(),
            gear = ?command.gear,
            speed = command.speed,
            steer = command.steer,
            "command"
        );

        match self.sink.send(&command).await {
            Ok(()) => summary.commands_sent += 1,
            Err(e) => {
                summary.send_failures += 1;
                warn!(sink = self.sink.name(), error = %e, "failed to send command");
            }
        }

        match self.linger {
            Some(linger) if self.sequencer.is_done() && self.sequencer.elapsed(now) >= linger => {
                info!("maneuver complete");
                Flow::Finished
            }
            _ => Flow::Continue,
        }
    }
}
