//! Unit conversions between host lighting scales and the GL1 device scale.
//!
//! The fixture takes brightness and color temperature as 0-100 values.
//! Hosts speak the standard lighting scales instead: brightness 0-255 and
//! color temperature in mireds. The supported temperature range is
//! 2900 K - 7000 K (345 - 143 mireds).

/// Coldest supported color temperature in Kelvin.
pub const MAX_KELVIN: u32 = 7000;

/// Warmest supported color temperature in Kelvin.
pub const MIN_KELVIN: u32 = 2900;

/// Coldest supported color temperature in mireds (7000 K).
pub const MIN_MIREDS: u16 = 143;

/// Warmest supported color temperature in mireds (2900 K).
pub const MAX_MIREDS: u16 = 345;

/// Default color temperature in mireds (roughly 2700 K; the device clamps
/// this to its 2900 K floor).
pub const DEFAULT_MIREDS: u16 = 370;

/// Convert host brightness (0-255) to the device scale (0-100).
pub fn brightness_to_device(brightness: u8) -> u8 {
    (f64::from(brightness) * 100.0 / 255.0).round() as u8
}

/// Convert a color temperature in mireds to Kelvin.
///
/// `mireds` must be non-zero; host color-temperature scales start well
/// above zero (the supported range is 143-345).
pub fn mireds_to_kelvin(mireds: u16) -> u32 {
    1_000_000 / u32::from(mireds)
}

/// Convert a color temperature in Kelvin to the device scale (0-100).
///
/// Values outside the supported 2900 K - 7000 K range clamp to the scale
/// endpoints.
pub fn kelvin_to_device(kelvin: u32) -> u8 {
    let span = f64::from(MAX_KELVIN - MIN_KELVIN);
    let scaled = (f64::from(kelvin) - f64::from(MIN_KELVIN)) * 100.0 / span;
    scaled.round().clamp(0.0, 100.0) as u8
}
