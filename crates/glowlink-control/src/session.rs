//! UDP device session for GL1 fixtures.
//!
//! GL1 is connectionless: "connecting" means opening a local socket,
//! announcing ourselves with a handshake frame and then keeping the
//! fixture's session-presence timer alive with a 200 ms heartbeat. Nothing
//! is ever received back, so a successful send only means the local
//! transport accepted the write; the fixture may still be unreachable.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::ControlError;
use crate::gl1;
use crate::Result;

/// Interval between heartbeat datagrams.
///
/// The fixture drops its link after a short stretch of silence, so the
/// heartbeat must stay well under that window.
pub const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(200);

/// A logical session with one GL1 fixture.
///
/// The session exclusively owns its heartbeat task. [`disconnect`]
/// cancels the task and waits for it to finish before the socket is
/// released, so a heartbeat send can never race a closed transport.
///
/// A session is single-owner: `connect`/`disconnect` take `&mut self` and
/// the heartbeat task shares only the socket and the connected flag.
///
/// [`disconnect`]: Self::disconnect
pub struct UdpSession {
    host: Ipv4Addr,
    port: u16,
    socket: Option<Arc<UdpSocket>>,
    connected: Arc<AtomicBool>,
    heartbeat: Option<JoinHandle<()>>,
}

impl UdpSession {
    /// Create a disconnected session for the fixture at `host:port`.
    pub fn new(host: Ipv4Addr, port: u16) -> Self {
        Self {
            host,
            port,
            socket: None,
            connected: Arc::new(AtomicBool::new(false)),
            heartbeat: None,
        }
    }

    /// Destination address of the fixture.
    pub fn target(&self) -> SocketAddr {
        SocketAddr::V4(SocketAddrV4::new(self.host, self.port))
    }

    /// Whether the session considers itself connected.
    ///
    /// GL1 has no acknowledgments; this reflects local state only.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Open the transport, announce the session and start the heartbeat.
    ///
    /// Fails with [`ControlError::AlreadyConnected`] when called without an
    /// intervening [`disconnect`](Self::disconnect); a session never runs
    /// two heartbeats. On any other failure the session is left exactly as
    /// it was: disconnected, no socket retained, no heartbeat started.
    pub async fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Err(ControlError::AlreadyConnected);
        }

        let socket = match UdpSocket::bind("0.0.0.0:0").await {
            Ok(socket) => Arc::new(socket),
            Err(e) => {
                error!("Failed to open UDP socket: {}", e);
                return Err(e.into());
            }
        };

        let handshake = gl1::handshake_frame(self.host);
        if let Err(e) = socket.send_to(&handshake, self.target()).await {
            error!("Failed to send handshake to {}: {}", self.target(), e);
            return Err(e.into());
        }

        self.connected.store(true, Ordering::SeqCst);
        self.heartbeat = Some(self.spawn_heartbeat(Arc::clone(&socket)));
        self.socket = Some(socket);

        info!("Connected to GL1 fixture at {}", self.target());
        Ok(())
    }

    /// Tear the session down.
    ///
    /// Safe to call at any time, including on a never-connected session,
    /// and idempotent. The heartbeat task is cancelled and awaited before
    /// the socket is dropped.
    pub async fn disconnect(&mut self) {
        if let Some(handle) = self.heartbeat.take() {
            handle.abort();
            // Cancellation surfaces as a JoinError; that is the normal exit.
            let _ = handle.await;
        }

        self.socket = None;

        if self.connected.swap(false, Ordering::SeqCst) {
            info!("Disconnected from GL1 fixture at {}", self.target());
        }
    }

    /// Send a prebuilt frame to the fixture.
    ///
    /// Fails with [`ControlError::NotConnected`] when no session is
    /// established. Returns as soon as the datagram is handed to the
    /// transport; GL1 sends are best-effort and unacknowledged.
    pub async fn send_command(&self, frame: &[u8]) -> Result<()> {
        let socket = match &self.socket {
            Some(socket) if self.is_connected() => socket,
            _ => {
                warn!("Not connected to fixture at {}", self.target());
                return Err(ControlError::NotConnected);
            }
        };

        if let Err(e) = socket.send_to(frame, self.target()).await {
            error!("Failed to send command to {}: {}", self.target(), e);
            return Err(e.into());
        }

        debug!("Sent {} to {}", hex::encode(frame), self.target());
        Ok(())
    }

    /// Send a command given as a hex string, e.g. `"800502010189"`.
    pub async fn send_command_hex(&self, frame_hex: &str) -> Result<()> {
        let frame = hex::decode(frame_hex)
            .map_err(|e| ControlError::InvalidFrame(format!("{frame_hex:?}: {e}")))?;
        self.send_command(&frame).await
    }

    /// Set brightness and color temperature, both on the device 0-100
    /// scale. Out-of-range values are rejected rather than wrapped at the
    /// byte layer.
    pub async fn set_brightness_temperature(&self, brightness: u8, temperature: u8) -> Result<()> {
        if brightness > 100 {
            return Err(ControlError::InvalidParameter(format!(
                "brightness {brightness} out of range 0-100"
            )));
        }
        if temperature > 100 {
            return Err(ControlError::InvalidParameter(format!(
                "temperature {temperature} out of range 0-100"
            )));
        }

        self.send_command(&gl1::brightness_temperature_frame(brightness, temperature))
            .await
    }

    fn spawn_heartbeat(&self, socket: Arc<UdpSocket>) -> JoinHandle<()> {
        let connected = Arc::clone(&self.connected);
        let target = self.target();

        tokio::spawn(async move {
            debug!("Heartbeat started for {}", target);
            while connected.load(Ordering::SeqCst) {
                if let Err(e) = socket.send_to(&gl1::QUERY_POWER, target).await {
                    // The link is presumed dead until the owner reconnects.
                    error!("Heartbeat send to {} failed: {}", target, e);
                    break;
                }
                tokio::time::sleep(HEARTBEAT_INTERVAL).await;
            }
            debug!("Heartbeat stopped for {}", target);
        })
    }
}

impl Drop for UdpSession {
    // Best-effort teardown for owners that never called `disconnect`.
    fn drop(&mut self) {
        self.connected.store(false, Ordering::SeqCst);
        if let Some(handle) = self.heartbeat.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_before_connect_fails() {
        let session = UdpSession::new(Ipv4Addr::LOCALHOST, 5052);
        let result = session.send_command(&gl1::POWER_ON).await;
        assert!(matches!(result, Err(ControlError::NotConnected)));
    }

    #[tokio::test]
    async fn test_disconnect_never_connected_is_a_no_op() {
        let mut session = UdpSession::new(Ipv4Addr::LOCALHOST, 5052);
        session.disconnect().await;
        session.disconnect().await;
        assert!(!session.is_connected());
    }

    #[tokio::test]
    async fn test_out_of_range_values_rejected_before_send() {
        // Validation fires even on a disconnected session.
        let session = UdpSession::new(Ipv4Addr::LOCALHOST, 5052);
        assert!(matches!(
            session.set_brightness_temperature(101, 50).await,
            Err(ControlError::InvalidParameter(_))
        ));
        assert!(matches!(
            session.set_brightness_temperature(50, 200).await,
            Err(ControlError::InvalidParameter(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_hex_command_rejected() {
        let session = UdpSession::new(Ipv4Addr::LOCALHOST, 5052);
        let result = session.send_command_hex("80xx").await;
        assert!(matches!(result, Err(ControlError::InvalidFrame(_))));
    }

    #[test]
    fn test_target_address() {
        let session = UdpSession::new(Ipv4Addr::new(192, 168, 1, 100), 5052);
        assert_eq!(session.target().to_string(), "192.168.1.100:5052");
    }
}
