//! Uniform pink fade used during the day

use embassy_time::Duration;

use super::Animation;
use crate::FrameSink;
use crate::clock::Clock;
use crate::color::Color;
use crate::config::{AnimationTimings, PINK_HUE, PINK_SAT};

/// Whole-strip fade to warm pink.
///
/// Rises from 0 to `peak - 1`, holds, then falls back down to 1 before
/// clearing. A peak of 0 renders no fade frames at all but still holds and
/// clears.
#[derive(Debug, Clone)]
pub struct PinkFade {
    hue: u8,
    sat: u8,
    peak: u8,
    frame_interval: Duration,
    hold: Duration,
}

impl PinkFade {
    pub const fn new(peak: u8) -> Self {
        Self {
            hue: PINK_HUE,
            sat: PINK_SAT,
            peak,
            frame_interval: AnimationTimings::DEFAULT.fade_frame,
            hold: AnimationTimings::DEFAULT.pink_hold,
        }
    }

    /// Set the hue and saturation of the fade
    #[must_use]
    pub const fn with_color(mut self, hue: u8, sat: u8) -> Self {
        self.hue = hue;
        self.sat = sat;
        self
    }

    /// Set the delay between brightness steps
    #[must_use]
    pub const fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Set how long the fade stays at its peak
    #[must_use]
    pub const fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    fn render_level<S, C>(&self, level: u8, strip: &mut S, clock: &mut C)
    where
        S: FrameSink + ?Sized,
        C: Clock + ?Sized,
    {
        strip.fill(Color {
            hue: self.hue,
            sat: self.sat,
            val: level,
        });
        strip.present();
        clock.delay(self.frame_interval);
    }
}

impl Animation for PinkFade {
    fn play<S, C>(&self, strip: &mut S, clock: &mut C)
    where
        S: FrameSink + ?Sized,
        C: Clock + ?Sized,
    {
        for level in 0..self.peak {
            self.render_level(level, strip, clock);
        }

        clock.delay(self.hold);

        for level in (1..self.peak).rev() {
            self.render_level(level, strip, clock);
        }

        strip.clear_and_present();
    }
}
