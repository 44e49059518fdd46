//! Window-relative view over a pixel buffer
//!
//! Each pixel is stored as three bytes in wire order: green, red, blue.
//! Indices are relative to the start of the strip window; writes outside
//! the window are ignored.

use crate::buffer::BYTES_PER_LED;
use crate::color::{PackedColor, pack_rgb, unpack_b, unpack_g, unpack_r};

/// Mutable pixels of one strip window
#[derive(Debug)]
pub struct StripPixels<'a> {
    bytes: &'a mut [u8],
}

impl<'a> StripPixels<'a> {
    /// Wrap the bytes of a window
    ///
    /// Trailing bytes that do not form a whole pixel are left untouched.
    pub fn new(bytes: &'a mut [u8]) -> Self {
        let whole = bytes.len() - bytes.len() % BYTES_PER_LED;
        Self {
            bytes: &mut bytes[..whole],
        }
    }

    /// Number of pixels in the window
    pub fn len(&self) -> usize {
        self.bytes.len() / BYTES_PER_LED
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw bytes of the window in wire order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    /// Set a single pixel; out of range indices are ignored
    pub fn set_pixel(&mut self, index: i32, color: PackedColor) {
        if let Some(offset) = self.offset_of(index) {
            write_grb(&mut self.bytes[offset..offset + BYTES_PER_LED], color);
        }
    }

    /// Read a single pixel back as a packed color
    pub fn pixel(&self, index: i32) -> Option<PackedColor> {
        let offset = self.offset_of(index)?;
        let grb = &self.bytes[offset..offset + BYTES_PER_LED];
        Some(pack_rgb(
            i32::from(grb[1]),
            i32::from(grb[0]),
            i32::from(grb[2]),
        ))
    }

    /// Set every pixel of the window to one color
    pub fn set_all(&mut self, color: PackedColor) {
        for led in self.bytes.chunks_exact_mut(BYTES_PER_LED) {
            write_grb(led, color);
        }
    }

    /// Turn off every pixel of the window
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Rotate pixel content forward by `offset` positions
    ///
    /// Content moves towards higher indices and wraps from the end of the
    /// window back to its start. Negative offsets rotate backwards.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    pub fn rotate(&mut self, offset: i32) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let shift = i64::from(offset).rem_euclid(len as i64) as usize;
        self.bytes.rotate_right(shift * BYTES_PER_LED);
    }

    #[allow(clippy::cast_sign_loss)]
    fn offset_of(&self, index: i32) -> Option<usize> {
        if index < 0 || index as usize >= self.len() {
            return None;
        }
        Some(index as usize * BYTES_PER_LED)
    }
}

fn write_grb(led: &mut [u8], color: PackedColor) {
    led[0] = unpack_g(color);
    led[1] = unpack_r(color);
    led[2] = unpack_b(color);
}
