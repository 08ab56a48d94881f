//! Light mode state machine
//!
//! Classifies the ambient light level into one of four modes. Every mode
//! has its own exit conditions, so the thresholds form asymmetric
//! hysteresis bands instead of a single day/night cut-off.

use crate::config::{DAY_MIN, EVENING_MAX, MORNING_MIN, NIGHT_MAX};
use crate::sensor::LightIntensity;

const MODE_NAME_NIGHT: &str = "night";
const MODE_NAME_MORNING: &str = "morning";
const MODE_NAME_DAY: &str = "day";
const MODE_NAME_EVENING: &str = "evening";

const MODE_ID_NIGHT: u8 = 0;
const MODE_ID_MORNING: u8 = 1;
const MODE_ID_DAY: u8 = 2;
const MODE_ID_EVENING: u8 = 3;

/// Current lighting mode of the bannister
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Night = MODE_ID_NIGHT,
    Morning = MODE_ID_MORNING,
    Day = MODE_ID_DAY,
    Evening = MODE_ID_EVENING,
}

impl Mode {
    /// Decode a raw mode id.
    ///
    /// Unknown ids heal to [`Mode::Night`] so the device never ends up in an
    /// undefined state.
    pub const fn from_raw(value: u8) -> Self {
        match value {
            MODE_ID_MORNING => Self::Morning,
            MODE_ID_DAY => Self::Day,
            MODE_ID_EVENING => Self::Evening,
            _ => Self::Night,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Night => MODE_NAME_NIGHT,
            Self::Morning => MODE_NAME_MORNING,
            Self::Day => MODE_NAME_DAY,
            Self::Evening => MODE_NAME_EVENING,
        }
    }

    /// Whether the decorative daytime routine is eligible in this mode
    pub const fn is_bright(self) -> bool {
        matches!(self, Self::Morning | Self::Day)
    }

    /// Shorthand for [`next_mode`]
    #[must_use]
    pub const fn next(self, intensity: LightIntensity) -> Self {
        next_mode(self, intensity)
    }
}

/// Compute the mode following `current` for the given light reading.
///
/// Comparisons are strict: a reading sitting exactly on a threshold never
/// triggers a transition. When two exits exist, the Day exit is checked
/// first from Morning and the Night exit first from Evening; the bands never
/// overlap, so the order only matters for readability.
pub const fn next_mode(current: Mode, intensity: LightIntensity) -> Mode {
    let level = intensity.value();
    match current {
        Mode::Night => {
            if level > MORNING_MIN {
                Mode::Morning
            } else {
                Mode::Night
            }
        }
        Mode::Morning => {
            if level > DAY_MIN {
                Mode::Day
            } else if level < NIGHT_MAX {
                Mode::Night
            } else {
                Mode::Morning
            }
        }
        Mode::Day => {
            if level < EVENING_MAX {
                Mode::Evening
            } else {
                Mode::Day
            }
        }
        Mode::Evening => {
            if level < NIGHT_MAX {
                Mode::Night
            } else if level > DAY_MIN {
                Mode::Day
            } else {
                Mode::Evening
            }
        }
    }
}
