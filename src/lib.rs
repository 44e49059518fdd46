#![no_std]

pub mod buffer;
pub mod color;
pub mod effect;
pub mod pixels;
pub mod sender;
pub mod strip;
pub mod window;

pub use buffer::{BYTES_PER_LED, PixelBuffer, SharedBuffer, buffer_size};
pub use effect::{BarGraphEffect, Effect, RainbowEffect, StaticColorEffect};
pub use pixels::StripPixels;
pub use sender::{Pin, SmartLedsSender, StripSender};
pub use strip::{DEFAULT_BRIGHTNESS, DEFAULT_BRIGHTNESS_SETTLE, ZipStrip, ZipStripConfig};
pub use window::StripWindow;

pub use color::{
    Hsl, HslGradient, HueInterpolationDirection, PackedColor, Rgb, ZipLedColor, hsl_to_rgb,
    pack_rgb, rgb, unpack_b, unpack_g, unpack_r,
};
pub use embassy_time::Duration;
