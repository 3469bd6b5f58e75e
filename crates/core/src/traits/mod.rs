//! Core traits for platform-agnostic sequencing.
//!
//! Trait definitions are pure and have no feature gates. Mock
//! implementations are always available for host testing; the tokio-backed
//! clock lives in the node crate.

pub mod time;

pub use time::{MockTime, TimeSource, Timestamp};
