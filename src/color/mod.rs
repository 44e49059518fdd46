mod codec;
mod gradient;
mod hsl;
mod named;

use smart_leds::RGB8;

pub use codec::{
    PACKED_MASK, PackedColor, pack_rgb, packed_from_rgb, rgb, rgb_from_packed, unpack_b,
    unpack_g, unpack_r,
};
pub use gradient::{HslGradient, HueInterpolationDirection};
pub use hsl::{HUE_DEGREES, Hsl, MAX_PERCENT, hsl_to_rgb};
pub use named::ZipLedColor;

pub type Rgb = RGB8;
