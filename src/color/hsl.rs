//! Integer-only HSL to RGB conversion
//!
//! The conversion runs entirely in fixed point: chroma and the secondary
//! component are scaled by 256, percentages by 100. Division truncates.
//! The output is bit-exact for a given input triple, so strips rendered on
//! different targets show the same colors.

use super::codec::{PackedColor, pack_rgb};

/// Number of degrees on the hue circle
pub const HUE_DEGREES: i32 = 360;

/// Width of one hue sector in degrees
const SECTOR_DEGREES: i32 = 60;

/// Upper clamp for saturation and luminance
///
/// At 100 chroma reaches 256, which wraps to zero when packed.
pub const MAX_PERCENT: i32 = 99;

/// Color in hue (degrees), saturation and luminance (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: i32,
    pub saturation: i32,
    pub luminance: i32,
}

impl Hsl {
    pub const fn new(hue: i32, saturation: i32, luminance: i32) -> Self {
        Self {
            hue,
            saturation,
            luminance,
        }
    }

    /// Convert to a packed RGB color
    pub fn to_packed(self) -> PackedColor {
        hsl_to_rgb(self.hue, self.saturation, self.luminance)
    }
}

/// Convert a hue/saturation/luminance triple into a packed RGB color
///
/// Hue wraps around the circle (negative values included); saturation and
/// luminance are clamped to `0..=99`.
pub fn hsl_to_rgb(hue: i32, saturation: i32, luminance: i32) -> PackedColor {
    let h = hue.rem_euclid(HUE_DEGREES);
    let s = saturation.clamp(0, MAX_PERCENT);
    let l = luminance.clamp(0, MAX_PERCENT);

    // chroma, [0, 255]
    let c = (((100 - (2 * l - 100).abs()) * s) << 8) / 10_000;
    // sector [0, 5] and position inside it [0, 255]
    let h12 = h / SECTOR_DEGREES;
    let h22 = ((h - h12 * SECTOR_DEGREES) * 256) / SECTOR_DEGREES;
    let distance = ((((h12 % 2) << 8) + h22) - 256).abs();
    // second largest component
    let x = (c * (256 - distance)) >> 8;

    let (r, g, b) = match h12 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    let p = ((((l * 2) << 8) / 100) - c) / 2;
    pack_rgb(r + p, g + p, b + p)
}
