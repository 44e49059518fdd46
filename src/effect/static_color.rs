//! Static color fill effect
//!
//! Fills all LEDs of the window with a single solid color.

use super::Effect;
use crate::{color::PackedColor, pixels::StripPixels};

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticColorEffect {
    color: PackedColor,
}

impl StaticColorEffect {
    pub const fn new(color: PackedColor) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> PackedColor {
        self.color
    }
}

impl Effect for StaticColorEffect {
    fn render(&self, pixels: &mut StripPixels<'_>) {
        pixels.set_all(self.color);
    }
}
