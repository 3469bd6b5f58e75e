use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use erp42_park_core::Command;

use super::CommandSink;
use crate::error::TransportError;

/// Keeps every command in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the driver
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    commands: Arc<Mutex<Vec<Command>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn commands(&self) -> Vec<Command> {
        self.commands
            .lock()
            .map(|commands| commands.clone())
            .unwrap_or_default()
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CommandSink for RecordingSink {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&mut self, command: &Command) -> Result<(), TransportError> {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(*command);
        }
        Ok(())
    }
}
