use async_trait::async_trait;
use erp42_park_core::Command;
use tokio::io::{AsyncWriteExt, Stdout};

use super::{CommandSink, ErpCmdMsg};
use crate::error::TransportError;

/// Writes one JSON line per command to stdout.
pub struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            out: tokio::io::stdout(),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn send(&mut self, command: &Command) -> Result<(), TransportError> {
        let mut line = ErpCmdMsg::from(command).to_json()?;
        line.push('\n');
        self.out.write_all(line.as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }
}
