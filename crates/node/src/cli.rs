//! Command-line interface for `erp42-parkd`.
//!
//! Flags override values from the configuration file.

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::info;

use crate::clock::TokioClock;
use crate::config::{NodeConfig, TransportKind};
use crate::driver::{ParkingDriver, RunSummary};
use crate::error::NodeError;
use crate::observability::LogFormat;
use crate::{plan, transport};

/// Open-loop parallel-parking sequencer for the ERP42 platform.
#[derive(Parser, Debug)]
#[command(name = "erp42-parkd", version, about)]
pub struct Cli {
    /// Path to YAML configuration file.
    #[arg(short, long, env = "ERP42_PARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command transport.
    #[arg(long, env = "ERP42_PARK_TRANSPORT")]
    pub transport: Option<TransportKind>,

    /// UDP destination for commands.
    #[arg(long, env = "ERP42_PARK_TARGET")]
    pub target: Option<SocketAddr>,

    /// Tick rate in Hz.
    #[arg(long)]
    pub rate_hz: Option<f64>,

    /// Exit after this many seconds in DONE (default: run until Ctrl+C).
    #[arg(long)]
    pub stop_after_done: Option<f64>,

    /// Print the phase timeline and exit.
    #[arg(long)]
    pub print_plan: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, default_value = "human", env = "ERP42_PARK_LOG_FORMAT")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Load the configuration file (if any) and apply flag overrides.
    pub fn resolve_config(&self) -> Result<NodeConfig, NodeError> {
        let mut config = match &self.config {
            Some(path) => NodeConfig::load(path)?,
            None => NodeConfig::default(),
        };

        if let Some(kind) = self.transport {
            config.transport.kind = kind;
        }
        if let Some(target) = self.target {
            config.transport.target = target;
        }
        if let Some(rate_hz) = self.rate_hz {
            config.driver.rate_hz = rate_hz;
        }
        if self.stop_after_done.is_some() {
            config.driver.stop_after_done = self.stop_after_done;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Execute the command line. Returns `None` when only the plan was printed.
pub async fn execute<F>(cli: Cli, shutdown: F) -> Result<Option<RunSummary>, NodeError>
where
    F: Future<Output = ()>,
{
    let config = cli.resolve_config()?;
    let params = config.maneuver.to_params()?;

    if cli.print_plan {
        for entry in plan::timeline(&params) {
            println!("{entry}");
        }
        println!("total: {:.1}s", params.total_duration().as_secs_f64());
        return Ok(None);
    }

    let sink = transport::from_config(&config.transport).await?;
    info!(
        transport = sink.name(),
        target = %config.transport.target,
        rate_hz = config.driver.rate_hz,
        "transport ready"
    );

    let driver = ParkingDriver::new(params, TokioClock::new(), sink, config.driver.period()?)
        .with_linger(config.driver.linger()?);

    Ok(Some(driver.run(shutdown).await))
}
