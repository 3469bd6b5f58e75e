//! Observability for the parking node.

pub mod logging;

pub use logging::{init_logging, verbosity_to_directive, LogFormat, LOG_ENV};
