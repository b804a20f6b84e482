//! Conversion between the platform brightness scale (0-255) and the Lutron
//! output level scale (0.0-100.0).
//!
//! TP-Link bulbs already report brightness on the platform scale, so they
//! have no counterpart here.

pub const MAX_BRIGHTNESS: u8 = 255;

/// Level used when a light is switched on without any brightness to resume.
///
/// Kept fractional: the output receives exactly 50%.
pub const HALF_BRIGHTNESS: f64 = MAX_BRIGHTNESS as f64 / 2.0;

/// Converts a platform level (0-255) to a Lutron level (0.0-100.0).
pub fn to_device_level(level: f64) -> f64 {
    (level * 100.0) / 255.0
}

/// Converts a Lutron level (0.0-100.0) to a platform level (0-255), truncating
/// toward zero.
pub fn to_platform_level(level: f64) -> u8 {
    // `as` saturates, so out of range readings clamp to 0..=255
    ((level * 255.0) / 100.0) as u8
}
