//! GlowLink Control - GL1 Fixture Control over UDP
//!
//! This crate implements the GL1 control protocol spoken by Neewer
//! GL-series studio lights:
//! - **Frames**: fixed-layout command encoding with XOR checksums
//! - **Session**: a logical connection over UDP with handshake and a
//!   200 ms keep-alive heartbeat
//! - **Fixture**: host-facing wrapper holding assumed light state
//!
//! The protocol is fire-and-forget: the fixture never answers, so
//! "connected" means "we are still sending", never "the device confirmed
//! anything".
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use glowlink_control::UdpSession;
//!
//! # async fn demo() -> glowlink_control::Result<()> {
//! let mut session = UdpSession::new("192.168.1.100".parse().unwrap(), 5052);
//! session.connect().await?;
//! session.set_brightness_temperature(100, 50).await?;
//! session.disconnect().await;
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]

/// Error types
pub mod error;
/// Host-facing fixture wrapper
pub mod fixture;
/// GL1 wire-frame encoding
pub mod gl1;
/// UDP device session and heartbeat
pub mod session;

pub use error::{ControlError, Result};
pub use fixture::LightFixture;
pub use session::{UdpSession, HEARTBEAT_INTERVAL};
