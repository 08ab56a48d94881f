//! Directional fills lighting the way up or down the stairs

use core::ops::Range;

use embassy_time::Duration;

use super::Animation;
use crate::FrameSink;
use crate::clock::Clock;
use crate::color::gradient_pixel;
use crate::config::{AnimationTimings, FILL_BRIGHTNESS};

/// End of the strip the fill starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillDirection {
    /// Grows from index 0 (top of the stairs)
    FromTop,
    /// Grows from the last index (bottom of the stairs)
    FromBottom,
}

impl FillDirection {
    /// Pixels lit when `lit` of `len` pixels are on
    const fn lit_range(self, lit: usize, len: usize) -> Range<usize> {
        match self {
            Self::FromTop => 0..lit,
            Self::FromBottom => len - lit..len,
        }
    }
}

/// Hue gradient growing along the strip, held, then faded out.
///
/// Growth starts with one lit pixel and ends with the full strip; no empty
/// frame is shown first.
///
/// While growing, pixels outside the lit region are left as they are in
/// the buffer.
#[derive(Debug, Clone)]
pub struct DirectionalFill {
    direction: FillDirection,
    brightness: u8,
    step_interval: Duration,
    hold: Duration,
    fade_interval: Duration,
}

impl DirectionalFill {
    pub const fn new(direction: FillDirection) -> Self {
        Self {
            direction,
            brightness: FILL_BRIGHTNESS,
            step_interval: AnimationTimings::DEFAULT.fill_step,
            hold: AnimationTimings::DEFAULT.fill_hold,
            fade_interval: AnimationTimings::DEFAULT.fade_frame,
        }
    }

    /// Set the rendering brightness
    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Set the delay between growth steps
    #[must_use]
    pub const fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    /// Set how long the strip stays fully lit
    #[must_use]
    pub const fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Set the delay between fade-out steps
    #[must_use]
    pub const fn with_fade_interval(mut self, interval: Duration) -> Self {
        self.fade_interval = interval;
        self
    }

    pub const fn direction(&self) -> FillDirection {
        self.direction
    }
}

impl Animation for DirectionalFill {
    fn play<S, C>(&self, strip: &mut S, clock: &mut C)
    where
        S: FrameSink + ?Sized,
        C: Clock + ?Sized,
    {
        let len = strip.pixel_count();

        for lit in 1..=len {
            for index in self.direction.lit_range(lit, len) {
                strip.set_pixel(index, gradient_pixel(index, len, self.brightness));
            }
            strip.present();
            clock.delay(self.step_interval);
        }

        clock.delay(self.hold);

        for level in (1..=self.brightness).rev() {
            for index in 0..len {
                strip.set_pixel(index, gradient_pixel(index, len, level));
            }
            strip.present();
            clock.delay(self.fade_interval);
        }

        strip.clear_and_present();
    }
}
