//! erp42_park - Host node that drives the ERP42 parking sequencer
//!
//! Wraps [`erp42_park_core::ParkingSequencer`] with the pieces a running
//! vehicle needs: a fixed-rate tick loop, a command transport, configuration
//! and logging.
//!
//! # Modules
//!
//! - [`driver`]: tokio interval loop owning the sequencer
//! - [`transport`]: `CommandSink` trait with UDP, stdout and recording sinks
//! - [`config`]: YAML configuration
//! - [`clock`]: `TimeSource` on `tokio::time::Instant`
//! - [`plan`]: static phase timeline
//! - [`cli`]: `erp42-parkd` argument parsing and entry point
//! - [`observability`]: tracing subscriber setup

pub mod cli;
pub mod clock;
pub mod config;
pub mod driver;
pub mod error;
pub mod observability;
pub mod plan;
pub mod transport;

pub use clock::TokioClock;
pub use config::NodeConfig;
pub use driver::{ParkingDriver, RunSummary};
pub use error::{ConfigError, NodeError, TransportError};
pub use transport::{CommandSink, ErpCmdMsg, RecordingSink, StdoutSink, UdpSink};
