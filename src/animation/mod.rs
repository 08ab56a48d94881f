//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Animation` trait and runs to completion
//! once started: there is no cancellation.

mod fade;
mod fill;
mod rainbow;

pub use fade::PinkFade;
pub use fill::{DirectionalFill, FillDirection};
pub use rainbow::RainbowAnimation;

use crate::FrameSink;
use crate::clock::Clock;
use crate::config::ControllerConfig;

const ANIMATION_NAME_PINK_FADE: &str = "pink_fade";
const ANIMATION_NAME_FILL_FROM_TOP: &str = "fill_from_top";
const ANIMATION_NAME_FILL_FROM_BOTTOM: &str = "fill_from_bottom";
const ANIMATION_NAME_RAINBOW: &str = "rainbow";

const ANIMATION_ID_PINK_FADE: u8 = 0;
const ANIMATION_ID_FILL_FROM_TOP: u8 = 1;
const ANIMATION_ID_FILL_FROM_BOTTOM: u8 = 2;
const ANIMATION_ID_RAINBOW: u8 = 3;

pub trait Animation {
    /// Play the animation to completion.
    ///
    /// Every routine leaves the strip cleared and presented on return.
    fn play<S, C>(&self, strip: &mut S, clock: &mut C)
    where
        S: FrameSink + ?Sized,
        C: Clock + ?Sized;
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    /// Uniform warm pink fade in, hold, fade out
    PinkFade(PinkFade),
    /// Gradient growing along the strip
    Fill(DirectionalFill),
    /// Scrolling rainbow
    Rainbow(RainbowAnimation),
}

/// Known animation ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    PinkFade = ANIMATION_ID_PINK_FADE,
    FillFromTop = ANIMATION_ID_FILL_FROM_TOP,
    FillFromBottom = ANIMATION_ID_FILL_FROM_BOTTOM,
    Rainbow = ANIMATION_ID_RAINBOW,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_PINK_FADE => Self::PinkFade,
            ANIMATION_ID_FILL_FROM_TOP => Self::FillFromTop,
            ANIMATION_ID_FILL_FROM_BOTTOM => Self::FillFromBottom,
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    /// Build the animation with the parameters from `config`
    pub fn to_slot(self, config: &ControllerConfig) -> AnimationSlot {
        let timings = &config.timings;
        match self {
            Self::PinkFade => AnimationSlot::PinkFade(
                PinkFade::new(config.day_brightness)
                    .with_frame_interval(timings.fade_frame)
                    .with_hold(timings.pink_hold),
            ),
            Self::FillFromTop | Self::FillFromBottom => {
                let direction = if self == Self::FillFromTop {
                    FillDirection::FromTop
                } else {
                    FillDirection::FromBottom
                };
                AnimationSlot::Fill(
                    DirectionalFill::new(direction)
                        .with_brightness(config.fill_brightness)
                        .with_step_interval(timings.fill_step)
                        .with_hold(timings.fill_hold)
                        .with_fade_interval(timings.fade_frame),
                )
            }
            Self::Rainbow => AnimationSlot::Rainbow(
                RainbowAnimation::new(config.rainbow_iterations)
                    .with_value(config.rainbow_brightness)
                    .with_frame_interval(timings.rainbow_frame),
            ),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PinkFade => ANIMATION_NAME_PINK_FADE,
            Self::FillFromTop => ANIMATION_NAME_FILL_FROM_TOP,
            Self::FillFromBottom => ANIMATION_NAME_FILL_FROM_BOTTOM,
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_PINK_FADE => Some(Self::PinkFade),
            ANIMATION_NAME_FILL_FROM_TOP => Some(Self::FillFromTop),
            ANIMATION_NAME_FILL_FROM_BOTTOM => Some(Self::FillFromBottom),
            ANIMATION_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}

impl AnimationSlot {
    /// Play the current animation
    pub fn play<S, C>(&self, strip: &mut S, clock: &mut C)
    where
        S: FrameSink + ?Sized,
        C: Clock + ?Sized,
    {
        match self {
            Self::PinkFade(animation) => animation.play(strip, clock),
            Self::Fill(animation) => animation.play(strip, clock),
            Self::Rainbow(animation) => animation.play(strip, clock),
        }
    }

    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::PinkFade(_) => AnimationId::PinkFade,
            Self::Fill(fill) => match fill.direction() {
                FillDirection::FromTop => AnimationId::FillFromTop,
                FillDirection::FromBottom => AnimationId::FillFromBottom,
            },
            Self::Rainbow(_) => AnimationId::Rainbow,
        }
    }
}
