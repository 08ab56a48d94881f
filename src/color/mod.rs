mod gradient;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub use gradient::{gradient_hue, gradient_pixel, shifted_pixel};
pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Hue/saturation/brightness triple stored in the frame buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub hue: u8,
    pub sat: u8,
    pub val: u8,
}

impl Color {
    pub const fn new(hue: u8, sat: u8, val: u8) -> Self {
        Self { hue, sat, val }
    }

    /// Whether the pixel emits any light
    pub const fn is_lit(self) -> bool {
        self.val != 0
    }

    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(self.into())
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        Hsv {
            hue: color.hue,
            sat: color.sat,
            val: color.val,
        }
    }
}

/// Fully dark pixel, the state of a cleared buffer
pub const DARK: Color = Color::new(0, 0, 0);
