use crate::color::Rgb;

/// Color packed into a 24-bit integer (0xRRGGBB format)
pub type PackedColor = u32;

/// Mask covering the 24 color bits of a [`PackedColor`]
pub const PACKED_MASK: PackedColor = 0x00FF_FFFF;

/// Pack red, green and blue channels into a single color
///
/// Every channel is masked to its low 8 bits, so out-of-range values wrap
/// (`256` becomes `0`) instead of saturating.
#[inline]
#[allow(clippy::cast_sign_loss)]
pub const fn pack_rgb(red: i32, green: i32, blue: i32) -> PackedColor {
    (((red & 0xFF) as u32) << 16) | (((green & 0xFF) as u32) << 8) | ((blue & 0xFF) as u32)
}

/// Converts red, green and blue channels (0-255) to a packed color
///
/// Alias of [`pack_rgb`] matching the block name used by strip programs.
#[inline]
pub const fn rgb(red: i32, green: i32, blue: i32) -> PackedColor {
    pack_rgb(red, green, blue)
}

/// Red channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_r(color: PackedColor) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

/// Green channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_g(color: PackedColor) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

/// Blue channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_b(color: PackedColor) -> u8 {
    (color & 0xFF) as u8
}

/// Create an RGB color from a packed value
pub const fn rgb_from_packed(color: PackedColor) -> Rgb {
    Rgb {
        r: unpack_r(color),
        g: unpack_g(color),
        b: unpack_b(color),
    }
}

/// Pack an RGB color
#[allow(clippy::cast_lossless)]
pub const fn packed_from_rgb(color: Rgb) -> PackedColor {
    pack_rgb(color.r as i32, color.g as i32, color.b as i32)
}
