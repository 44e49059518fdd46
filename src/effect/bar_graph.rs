//! Bar graph effect
//!
//! Lights the window proportionally to `value / high`, shading lit pixels
//! from green at the first LED to red at the last one.

use super::Effect;
use crate::{
    color::{PackedColor, rgb},
    pixels::StripPixels,
};

/// Shown on the first LED when the graph has no usable maximum
pub const BAR_GRAPH_WARNING_COLOR: PackedColor = 0xFF_FF00;
/// Shown on the first LED when the value rounds down to nothing
pub const BAR_GRAPH_EMPTY_COLOR: PackedColor = 0x66_6600;

const OFF: PackedColor = 0;

/// Bar graph of `value` against the `high` end of the scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarGraphEffect {
    value: i32,
    high: i32,
}

impl BarGraphEffect {
    pub const fn new(value: i32, high: i32) -> Self {
        Self { value, high }
    }

    /// Number of filled pixels on a window of `pixel_count` LEDs
    #[allow(clippy::cast_possible_wrap)]
    pub fn filled(&self, pixel_count: usize) -> i64 {
        if self.high <= 0 {
            return 0;
        }
        (i64::from(self.value).abs() * pixel_count as i64) / i64::from(self.high)
    }
}

impl Effect for BarGraphEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&self, pixels: &mut StripPixels<'_>) {
        if self.high <= 0 {
            pixels.clear();
            pixels.set_pixel(0, BAR_GRAPH_WARNING_COLOR);
            return;
        }

        let count = pixels.len() as i64;
        let filled = self.filled(pixels.len());
        if filled == 0 {
            pixels.set_pixel(0, BAR_GRAPH_EMPTY_COLOR);
            for index in 1..count {
                pixels.set_pixel(index as i32, OFF);
            }
            return;
        }

        let last = count - 1;
        for index in 0..count {
            let color = if index <= filled {
                // A single LED has no span to shade over
                let g = if last == 0 { 0 } else { index * 255 / last };
                rgb(g as i32, 255 - g as i32, 0)
            } else {
                OFF
            };
            pixels.set_pixel(index as i32, color);
        }
    }
}
