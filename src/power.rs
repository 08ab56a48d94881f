//! Power budget for the LED strip
//!
//! Estimates the draw of a frame from per-channel current figures of a
//! WS2812 package and computes the largest global brightness that keeps
//! the strip under its ceiling.

use crate::color::Rgb;
use crate::math8::scale8;

/// Current of a fully lit red channel, in mA
const RED_MILLIAMPS: u32 = 16;
/// Current of a fully lit green channel, in mA
const GREEN_MILLIAMPS: u32 = 11;
/// Current of a fully lit blue channel, in mA
const BLUE_MILLIAMPS: u32 = 15;
/// Quiescent current of an unlit LED, in mA
const IDLE_MILLIAMPS: u32 = 1;

/// Power ceiling for a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerLimit {
    volts: u32,
    max_milliwatts: u32,
}

impl PowerLimit {
    pub const fn new(volts: u32, max_milliwatts: u32) -> Self {
        Self {
            volts,
            max_milliwatts,
        }
    }

    /// Draw of the lit channels at full scale, in mW << 8
    fn channel_load(&self, frame: &[Rgb]) -> u32 {
        frame
            .iter()
            .map(|pixel| {
                u32::from(pixel.r) * RED_MILLIAMPS * self.volts
                    + u32::from(pixel.g) * GREEN_MILLIAMPS * self.volts
                    + u32::from(pixel.b) * BLUE_MILLIAMPS * self.volts
            })
            .sum()
    }

    /// Quiescent draw of `frame`, in mW. Not affected by brightness.
    #[allow(clippy::cast_possible_truncation)]
    fn idle_milliwatts(&self, frame: &[Rgb]) -> u32 {
        frame.len() as u32 * IDLE_MILLIAMPS * self.volts
    }

    /// Estimated draw of `frame` at full brightness, in mW
    pub fn estimate_milliwatts(&self, frame: &[Rgb]) -> u32 {
        (self.channel_load(frame) >> 8) + self.idle_milliwatts(frame)
    }

    /// Largest brightness scale (255 = untouched) that fits the budget.
    ///
    /// Only the channel draw scales, so it is fitted into what is left after
    /// the idle draw. Returns 0 when the idle draw alone exceeds the budget.
    #[allow(clippy::cast_possible_truncation)]
    pub fn max_brightness(&self, frame: &[Rgb]) -> u8 {
        if self.estimate_milliwatts(frame) <= self.max_milliwatts {
            return 255;
        }
        let Some(budget) = self.max_milliwatts.checked_sub(self.idle_milliwatts(frame)) else {
            return 0;
        };

        // scale8 multiplies by (scale + 1) / 256
        let factor = (u64::from(budget) << 16) / u64::from(self.channel_load(frame));
        factor.saturating_sub(1).min(255) as u8
    }

    /// Scale `frame` down in place until it fits the budget.
    ///
    /// Returns the scale that was applied.
    pub fn apply(&self, frame: &mut [Rgb]) -> u8 {
        let brightness = self.max_brightness(frame);
        if brightness == 255 {
            return brightness;
        }

        for pixel in frame.iter_mut() {
            pixel.r = scale8(pixel.r, brightness);
            pixel.g = scale8(pixel.g, brightness);
            pixel.b = scale8(pixel.b, brightness);
        }
        brightness
    }
}
