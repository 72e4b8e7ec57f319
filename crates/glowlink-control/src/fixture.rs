//! Host-facing light fixture wrapper.
//!
//! Holds the optimistic "assumed state" for one light. GL1 never reports
//! device state back, so `is_on`, brightness and temperature reflect the
//! last values we sent, not anything the fixture confirmed.

use std::net::Ipv4Addr;

use tracing::{debug, warn};

use glowlink_core::units;

use crate::gl1;
use crate::session::UdpSession;
use crate::Result;

/// One controllable light with locally assumed state.
///
/// Brightness is held on the host 0-255 scale and color temperature in
/// mireds; both are mapped to the device 0-100 scale on send.
pub struct LightFixture {
    name: String,
    session: UdpSession,
    available: bool,
    is_on: bool,
    brightness: u8,
    color_temp_mireds: u16,
}

impl LightFixture {
    /// Create a detached fixture.
    pub fn new(name: impl Into<String>, host: Ipv4Addr, port: u16) -> Self {
        Self {
            name: name.into(),
            session: UdpSession::new(host, port),
            available: false,
            is_on: false,
            brightness: 255,
            color_temp_mireds: units::DEFAULT_MIREDS,
        }
    }

    /// Connect the underlying session.
    ///
    /// A fixture that fails to connect is marked unavailable rather than
    /// surfacing the error; returns the resulting availability.
    pub async fn attach(&mut self) -> bool {
        match self.session.connect().await {
            Ok(()) => {
                self.available = true;
            }
            Err(e) => {
                warn!("Failed to connect to {}: {}", self.name, e);
                self.available = false;
            }
        }
        self.available
    }

    /// Disconnect and mark the fixture unavailable.
    pub async fn detach(&mut self) {
        self.session.disconnect().await;
        self.available = false;
    }

    /// Turn the light on, optionally adjusting brightness (host 0-255
    /// scale) and color temperature (mireds).
    ///
    /// Ignored while the fixture is unavailable. State updates are
    /// optimistic: a send the transport accepted counts as applied.
    pub async fn turn_on(
        &mut self,
        brightness: Option<u8>,
        color_temp_mireds: Option<u16>,
    ) -> Result<()> {
        if !self.available {
            debug!("{} is unavailable; ignoring turn_on", self.name);
            return Ok(());
        }

        self.session.send_command(&gl1::POWER_ON).await?;
        self.is_on = true;

        if let Some(brightness) = brightness {
            self.brightness = brightness;
            if let Some(mireds) = color_temp_mireds {
                self.color_temp_mireds = mireds.clamp(units::MIN_MIREDS, units::MAX_MIREDS);
            }

            let device_brightness = units::brightness_to_device(self.brightness);
            let kelvin = units::mireds_to_kelvin(self.color_temp_mireds);
            let device_temperature = units::kelvin_to_device(kelvin);
            self.session
                .set_brightness_temperature(device_brightness, device_temperature)
                .await?;
        }

        Ok(())
    }

    /// Turn the light off.
    ///
    /// Ignored while the fixture is unavailable.
    pub async fn turn_off(&mut self) -> Result<()> {
        if !self.available {
            debug!("{} is unavailable; ignoring turn_off", self.name);
            return Ok(());
        }

        self.session.send_command(&gl1::POWER_OFF).await?;
        self.is_on = false;
        Ok(())
    }

    /// Display name of the fixture.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the session behind this fixture is up.
    pub fn available(&self) -> bool {
        self.available
    }

    /// Assumed power state.
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Assumed brightness on the host 0-255 scale.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Assumed color temperature in mireds.
    pub fn color_temp_mireds(&self) -> u16 {
        self.color_temp_mireds
    }

    /// Always true: the fixture never confirms state, so everything this
    /// wrapper reports is assumed from the commands it sent.
    pub fn assumed_state(&self) -> bool {
        true
    }

    /// Coldest supported color temperature in mireds.
    pub fn min_mireds(&self) -> u16 {
        units::MIN_MIREDS
    }

    /// Warmest supported color temperature in mireds.
    pub fn max_mireds(&self) -> u16 {
        units::MAX_MIREDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fixture_defaults() {
        let light = LightFixture::new("Key Light", Ipv4Addr::LOCALHOST, 5052);
        assert_eq!(light.name(), "Key Light");
        assert!(!light.available());
        assert!(!light.is_on());
        assert_eq!(light.brightness(), 255);
        assert_eq!(light.color_temp_mireds(), units::DEFAULT_MIREDS);
        assert!(light.assumed_state());
    }

    #[test]
    fn test_mired_range() {
        let light = LightFixture::new("Key Light", Ipv4Addr::LOCALHOST, 5052);
        assert_eq!(light.min_mireds(), 143);
        assert_eq!(light.max_mireds(), 345);
    }

    #[tokio::test]
    async fn test_commands_ignored_while_unavailable() {
        let mut light = LightFixture::new("Detached", Ipv4Addr::LOCALHOST, 5052);

        light.turn_on(Some(10), Some(200)).await.unwrap();
        assert!(!light.is_on());
        assert_eq!(light.brightness(), 255);

        light.turn_off().await.unwrap();
        assert!(!light.is_on());
    }
}
