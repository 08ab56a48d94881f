//! Compile-time configuration of the bannister installation.
//!
//! Everything the controller needs to know about the hardware and the
//! animation pacing lives here as named constants.

use embassy_time::Duration;

/// Number of LEDs on the strip
pub const STRIP_LEN: usize = 60;

/// Supply voltage of the strip
pub const STRIP_VOLTS: u32 = 5;

/// Power ceiling enforced by the LED strip sink
pub const MAX_POWER_MILLIWATTS: u32 = 2_500;

/// Light level below which Morning and Evening fall back to Night
pub const NIGHT_MAX: u16 = 100;

/// Light level above which Night wakes up into Morning
pub const MORNING_MIN: u16 = 300;

/// Light level below which Day winds down into Evening
pub const EVENING_MAX: u16 = 300;

/// Light level above which Morning and Evening switch to Day
pub const DAY_MIN: u16 = 500;

/// Warm pink used by the daytime fade
pub const PINK_HUE: u8 = 230;
pub const PINK_SAT: u8 = 180;

/// Peak brightness of the daytime fade
pub const DAY_FADE_BRIGHTNESS: u8 = 120;

/// Brightness of the night fills
pub const FILL_BRIGHTNESS: u8 = 60;

/// Brightness of the morning rainbow
pub const RAINBOW_BRIGHTNESS: u8 = 100;

/// Number of frames rendered by the morning rainbow
pub const RAINBOW_ITERATIONS: u32 = 1_000;

/// Pacing of every animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Delay between brightness steps of a fade
    pub fade_frame: Duration,
    /// Delay between growth steps of a fill
    pub fill_step: Duration,
    /// Delay between rainbow frames
    pub rainbow_frame: Duration,
    /// How long the pink fade stays at its peak
    pub pink_hold: Duration,
    /// How long a fill stays fully lit
    pub fill_hold: Duration,
}

impl AnimationTimings {
    pub const DEFAULT: Self = Self {
        fade_frame: Duration::from_millis(20),
        fill_step: Duration::from_millis(10),
        rainbow_frame: Duration::from_millis(50),
        pink_hold: Duration::from_secs(30),
        fill_hold: Duration::from_secs(20),
    };
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration for the dispatch loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    pub timings: AnimationTimings,
    /// Peak brightness of the daytime fade
    pub day_brightness: u8,
    /// Brightness of the night fills
    pub fill_brightness: u8,
    /// Brightness of the morning rainbow
    pub rainbow_brightness: u8,
    /// Number of frames rendered by the morning rainbow
    pub rainbow_iterations: u32,
    /// Pause after the daytime fade before sensors are read again
    pub day_settle: Duration,
    /// Pause after each night fill
    pub night_settle: Duration,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        timings: AnimationTimings::DEFAULT,
        day_brightness: DAY_FADE_BRIGHTNESS,
        fill_brightness: FILL_BRIGHTNESS,
        rainbow_brightness: RAINBOW_BRIGHTNESS,
        rainbow_iterations: RAINBOW_ITERATIONS,
        day_settle: Duration::from_secs(1),
        night_settle: Duration::from_secs(1),
    };
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
