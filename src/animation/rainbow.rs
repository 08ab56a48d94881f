//! Scrolling rainbow
//!
//! Spreads the hue circle along the strip and rotates it by one step per
//! frame, so colors appear to travel from the bottom towards the top.

use embassy_time::Duration;

use super::Animation;
use crate::FrameSink;
use crate::clock::Clock;
use crate::color::shifted_pixel;
use crate::config::{AnimationTimings, RAINBOW_BRIGHTNESS};

/// Rainbow scrolling for a fixed number of frames
#[derive(Debug, Clone)]
pub struct RainbowAnimation {
    /// Number of frames to render
    iterations: u32,
    /// Brightness value (0-255)
    value: u8,
    /// Delay between frames
    frame_interval: Duration,
}

impl RainbowAnimation {
    pub const fn new(iterations: u32) -> Self {
        Self {
            iterations,
            value: RAINBOW_BRIGHTNESS,
            frame_interval: AnimationTimings::DEFAULT.rainbow_frame,
        }
    }

    /// Set the brightness value
    #[must_use]
    pub const fn with_value(mut self, value: u8) -> Self {
        self.value = value;
        self
    }

    /// Set the delay between frames
    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }
}

impl Animation for RainbowAnimation {
    fn play<S, C>(&self, strip: &mut S, clock: &mut C)
    where
        S: FrameSink + ?Sized,
        C: Clock + ?Sized,
    {
        let len = strip.pixel_count();
        let mut offset: u8 = 0;

        for _ in 0..self.iterations {
            offset = offset.wrapping_add(1);
            for index in 0..len {
                strip.set_pixel(index, shifted_pixel(index, len, offset, self.value));
            }
            strip.present();
            clock.delay(self.frame_interval);
        }

        strip.clear_and_present();
    }
}
