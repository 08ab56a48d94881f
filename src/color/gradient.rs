//! Hue gradient spread along the strip

use crate::color::Color;

/// Hue of pixel `index` on a strip of `len` pixels.
///
/// The step is `255 / len` in integer arithmetic, so when `len` does not
/// divide 255 the tail of the strip ends short of a full hue circle.
#[allow(clippy::cast_possible_truncation)]
pub const fn gradient_hue(index: usize, len: usize) -> u8 {
    if len == 0 {
        return 0;
    }
    (index * (255 / len)) as u8
}

/// Fully saturated gradient pixel at the given brightness
pub const fn gradient_pixel(index: usize, len: usize, val: u8) -> Color {
    Color {
        hue: gradient_hue(index, len),
        sat: 255,
        val,
    }
}

/// Gradient pixel rotated around the hue circle by `offset`
pub const fn shifted_pixel(index: usize, len: usize, offset: u8, val: u8) -> Color {
    Color {
        hue: gradient_hue(index, len).wrapping_add(offset),
        sat: 255,
        val,
    }
}
