//! Frame sink backed by a `smart-leds` driver

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::FrameSink;
use crate::color::{Color, DARK, Rgb};
use crate::config::{MAX_POWER_MILLIWATTS, STRIP_VOLTS};
use crate::power::PowerLimit;

/// LED strip with an HSV frame buffer and a power ceiling.
///
/// Pixels are buffered as [`Color`] and converted on [`present`]; the power
/// limit is applied to the converted frame right before transmission.
///
/// [`present`]: FrameSink::present
pub struct LedStrip<D, const N: usize> {
    driver: D,
    buffer: [Color; N],
    power: PowerLimit,
    power_scale: u8,
}

impl<D, const N: usize> LedStrip<D, N>
where
    D: SmartLedsWrite,
    Rgb: Into<D::Color>,
{
    /// Create a strip using the configured power budget
    pub const fn new(driver: D) -> Self {
        Self::with_power_limit(
            driver,
            PowerLimit::new(STRIP_VOLTS, MAX_POWER_MILLIWATTS),
        )
    }

    /// Create a strip with a custom power budget
    pub const fn with_power_limit(driver: D, power: PowerLimit) -> Self {
        Self {
            driver,
            buffer: [DARK; N],
            power,
            power_scale: 255,
        }
    }

    /// Logical frame buffer contents
    pub const fn pixels(&self) -> &[Color; N] {
        &self.buffer
    }

    /// Brightness scale applied by the power limit on the last frame
    pub const fn power_scale(&self) -> u8 {
        self.power_scale
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }
}

impl<D, const N: usize> FrameSink for LedStrip<D, N>
where
    D: SmartLedsWrite,
    Rgb: Into<D::Color>,
{
    fn pixel_count(&self) -> usize {
        N
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.buffer.get_mut(index) {
            *pixel = color;
        }
    }

    fn present(&mut self) {
        let mut frame = [Rgb::default(); N];
        for (out, pixel) in frame.iter_mut().zip(self.buffer.iter()) {
            *out = pixel.to_rgb();
        }
        self.power_scale = self.power.apply(&mut frame);

        // WS2812 timing must not be interrupted mid-frame
        let result = critical_section::with(|_| self.driver.write(frame.iter().copied()));
        if result.is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[LedStrip.present] frame transmission failed, dropping frame");
        }
    }

    fn clear_and_present(&mut self) {
        self.buffer = [DARK; N];
        self.present();
    }
}
