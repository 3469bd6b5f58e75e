//! Command transports
//!
//! The sequencer produces [`Command`]s; a [`CommandSink`] delivers them to
//! the actuator stack. The wire representation is [`ErpCmdMsg`], which
//! mirrors the ERP42 control message (`e_stop`, `brake`, `gear`, `speed`,
//! `steer`).

mod recording;
mod stdout;
mod udp;

use async_trait::async_trait;
use erp42_park_core::Command;
use serde::{Deserialize, Serialize};

pub use recording::RecordingSink;
pub use stdout::StdoutSink;
pub use udp::UdpSink;

use crate::config::{TransportConfig, TransportKind};
use crate::error::TransportError;

/// Brake field value when the brake is engaged.
pub const BRAKE_ENGAGED: u8 = 1;

/// ERP42 control message as sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErpCmdMsg {
    pub e_stop: bool,
    pub brake: u8,
    /// 0 = drive, 2 = reverse
    pub gear: u8,
    pub speed: u8,
    pub steer: i16,
}

impl From<&Command> for ErpCmdMsg {
    fn from(cmd: &Command) -> Self {
        Self {
            e_stop: cmd.emergency_stop,
            brake: if cmd.brake { BRAKE_ENGAGED } else { 0 },
            gear: cmd.gear.wire_value(),
            speed: cmd.speed,
            steer: cmd.steer,
        }
    }
}

impl ErpCmdMsg {
    /// JSON encoding used by the UDP and stdout sinks.
    pub fn to_json(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Destination for actuator commands.
///
/// Implementations must be `Send` so the driver can own them as
/// `Box<dyn CommandSink>`.
#[async_trait]
pub trait CommandSink: Send {
    /// Short identifier for logs (e.g. "udp", "stdout").
    fn name(&self) -> &str;

    /// Deliver one command.
    async fn send(&mut self, command: &Command) -> Result<(), TransportError>;
}

/// Build the sink selected by `config`.
pub async fn from_config(config: &TransportConfig) -> Result<Box<dyn CommandSink>, TransportError> {
    match config.kind {
        TransportKind::Udp => Ok(Box::new(UdpSink::connect(config.target).await?)),
        TransportKind::Stdout => Ok(Box::new(StdoutSink::new())),
    }
}

#[cfg(test)]
mod tests {
    use erp42_park_core::{Gear, ParkingParams, Phase, PhaseProfile};

    use super::*;

    #[test]
    fn reverse_command_maps_to_wire_fields() {
        let cmd = PhaseProfile::for_phase(&ParkingParams::default(), Phase::Entry).command();
        let msg = ErpCmdMsg::from(&cmd);
        assert_eq!(
            msg,
            ErpCmdMsg {
                e_stop: false,
                brake: 1,
                gear: 2,
                speed: 30,
                steer: -1000,
            }
        );
    }

    #[test]
    fn released_brake_maps_to_zero() {
        let cmd = Command {
            emergency_stop: true,
            brake: false,
            gear: Gear::Drive,
            speed: 0,
            steer: 0,
        };
        let msg = ErpCmdMsg::from(&cmd);
        assert!(msg.e_stop);
        assert_eq!(msg.brake, 0);
        assert_eq!(msg.gear, 0);
    }

    #[test]
    fn json_field_names() {
        let msg = ErpCmdMsg::from(&Command::stop(0));
        let json: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(json["e_stop"], false);
        assert_eq!(json["brake"], 1);
        assert_eq!(json["gear"], 0);
        assert_eq!(json["speed"], 0);
        assert_eq!(json["steer"], 0);
    }

    #[tokio::test]
    async fn from_config_builds_stdout_sink() {
        let config = TransportConfig {
            kind: TransportKind::Stdout,
            ..Default::default()
        };
        let sink = from_config(&config).await.unwrap();
        assert_eq!(sink.name(), "stdout");
    }
}
