#![cfg_attr(not(test), no_std)]

pub mod animation;
pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod math8;
pub mod mode;
pub mod power;
pub mod sensor;
pub mod strip;

pub use animation::{AnimationId, AnimationSlot};
pub use clock::{Clock, SystemClock};
pub use config::{AnimationTimings, ControllerConfig, STRIP_LEN};
pub use controller::{Controller, Trigger};
pub use mode::{Mode, next_mode};
pub use power::PowerLimit;
pub use sensor::{LightIntensity, MotionState, PinSensors, SensorGateway, Zone};
pub use strip::LedStrip;

pub use color::{Color, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract frame sink
///
/// Owns the frame buffer of the strip. Implement this trait to support
/// different hardware platforms; the controller is generic over it.
pub trait FrameSink {
    /// Number of pixels in the buffer
    fn pixel_count(&self) -> usize;

    /// Write one pixel into the buffer. Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Transmit the buffer to the strip
    fn present(&mut self);

    /// Zero the buffer and transmit it
    fn clear_and_present(&mut self);

    /// Set every pixel of the buffer to `color`
    fn fill(&mut self, color: Color) {
        for index in 0..self.pixel_count() {
            self.set_pixel(index, color);
        }
    }
}
