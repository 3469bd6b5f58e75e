use std::net::SocketAddr;

use async_trait::async_trait;
use erp42_park_core::Command;
use tokio::net::UdpSocket;

use super::{CommandSink, ErpCmdMsg};
use crate::error::TransportError;

/// Sends each command as one JSON datagram to a fixed target.
pub struct UdpSink {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpSink {
    /// Bind an ephemeral local socket and connect it to `target`.
    pub async fn connect(target: SocketAddr) -> Result<Self, TransportError> {
        let local: SocketAddr = if target.is_ipv4() {
            ([0, 0, 0, 0], 0).into()
        } else {
            ([0u16; 8], 0).into()
        };
        let socket = UdpSocket::bind(local).await.map_err(TransportError::Bind)?;
        socket
            .connect(target)
            .await
            .map_err(|source| TransportError::Connect {
                addr: target,
                source,
            })?;
        Ok(Self { socket, target })
    }

    /// Destination address.
    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl std::fmt::Debug for UdpSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UdpSink")
            .field("target", &self.target)
            .finish()
    }
}

#[async_trait]
impl CommandSink for UdpSink {
    fn name(&self) -> &str {
        "udp"
    }

    async fn send(&mut self, command: &Command) -> Result<(), TransportError> {
        let json = ErpCmdMsg::from(command).to_json()?;
        self.socket.send(json.as_bytes()).await?;
        Ok(())
    }
}
