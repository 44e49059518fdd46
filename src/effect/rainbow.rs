//! Rainbow gradient effect
//!
//! Spreads the hue circle from `start_hue` to `end_hue` across the window at
//! full saturation and half luminance. The hue always travels clockwise.

use super::Effect;
use crate::{
    color::{Hsl, HslGradient, HueInterpolationDirection},
    pixels::StripPixels,
};

const DEFAULT_START_HUE: i32 = 1;
const DEFAULT_END_HUE: i32 = 360;

/// Saturation of every rainbow pixel
pub const RAINBOW_SATURATION: i32 = 100;
/// Luminance of every rainbow pixel
pub const RAINBOW_LUMINANCE: i32 = 50;

/// Rainbow effect using the fixed-point HSL gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowEffect {
    /// Hue of the first pixel (degrees)
    start_hue: i32,
    /// Hue of the last pixel (degrees)
    end_hue: i32,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self::new(DEFAULT_START_HUE, DEFAULT_END_HUE)
    }
}

impl RainbowEffect {
    pub const fn new(start_hue: i32, end_hue: i32) -> Self {
        Self { start_hue, end_hue }
    }

    /// Gradient this effect paints over `steps` pixels
    pub fn gradient(&self, steps: usize) -> HslGradient {
        // TODO: expose the direction once the rainbow block gains a direction option
        HslGradient::new(
            Hsl::new(self.start_hue, RAINBOW_SATURATION, RAINBOW_LUMINANCE),
            Hsl::new(self.end_hue, RAINBOW_SATURATION, RAINBOW_LUMINANCE),
            steps,
            HueInterpolationDirection::Clockwise,
        )
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn render(&self, pixels: &mut StripPixels<'_>) {
        if pixels.is_empty() {
            return;
        }

        let gradient = self.gradient(pixels.len());
        for (index, color) in gradient.colors().enumerate() {
            pixels.set_pixel(index as i32, color);
        }
    }
}
