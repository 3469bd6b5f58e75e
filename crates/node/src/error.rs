//! Error types for the parking node.

use std::net::SocketAddr;
use std::path::PathBuf;

use erp42_park_core::ParamError;
use thiserror::Error;

/// Process exit codes used by `erp42-parkd`.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;
    /// Configuration error (unreadable file, invalid YAML, out-of-range value)
    pub const CONFIG_ERROR: i32 = 2;
    /// Transport could not be set up
    pub const TRANSPORT_ERROR: i32 = 4;
}

/// Top-level node error.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl NodeError {
    /// Exit code the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NodeError::Config(_) => ExitCode::CONFIG_ERROR,
            NodeError::Transport(_) => ExitCode::TRANSPORT_ERROR,
        }
    }
}

/// Errors loading or validating the node configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid maneuver parameter: {0}")]
    Invalid(#[from] ParamError),

    #[error("invalid duration for {name}: {value} s")]
    InvalidDuration { name: &'static str, value: f64 },

    #[error("invalid tick rate: {0} Hz (must be finite and > 0)")]
    InvalidRate(f64),
}

/// Errors delivering commands to the actuator stack.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to bind local socket: {0}")]
    Bind(#[source] std::io::Error),

    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode command: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
